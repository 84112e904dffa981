//! Blog listing

use leptos::prelude::*;
use crate::types::BlogCard;
use super::{Icon, ICON_CALENDAR};

const SKELETON_CARDS: usize = 4;

/// Grid of published articles, skeletons while loading, or the empty
/// placeholder.
#[component]
pub fn BlogListing(posts: Vec<BlogCard>, loading: bool) -> impl IntoView {
    let body = if loading {
        view! {
            <div class="blog-grid">
                {(0..SKELETON_CARDS).map(|_| view! { <div class="skeleton"></div> }).collect::<Vec<_>>()}
            </div>
        }.into_any()
    } else if posts.is_empty() {
        view! {
            <div class="empty-state">
                <p class="muted">"No articles available at this time."</p>
            </div>
        }.into_any()
    } else {
        view! {
            <div class="blog-grid">
                {posts.into_iter().map(|post| view! { <BlogCardView post=post /> }).collect::<Vec<_>>()}
            </div>
        }.into_any()
    };

    view! {
        <section class="page-header">
            <div class="container narrow">
                <h1 class="page-title">"Blog"</h1>
            </div>
        </section>
        <section class="blog">
            <div class="container narrow">{body}</div>
        </section>
    }
}

#[component]
fn BlogCardView(post: BlogCard) -> impl IntoView {
    view! {
        <a class="card blog-card" href=post.href>
            {post.image.map(|src| view! {
                <div class="blog-cover">
                    <img src=src alt=post.title.clone() />
                </div>
            })}
            <div class="blog-card-body">
                {post.date.map(|date| view! {
                    <div class="blog-meta with-icon">
                        <Icon path=ICON_CALENDAR size="16" />
                        {date}
                    </div>
                })}
                <h2 class="blog-title">{post.title.clone()}</h2>
                {post.excerpt.map(|excerpt| view! { <p class="muted clamp-3">{excerpt}</p> })}
                <span class="read-more">"Read more →"</span>
            </div>
        </a>
    }
}
