//! Single blog article

use leptos::prelude::*;
use crate::types::PostPage;
use super::{Icon, ICON_CALENDAR};

#[component]
pub fn PostArticle(page: PostPage) -> impl IntoView {
    view! {
        <article class="post">
            <div class="container narrow">
                <a class="back-link" href="/blog/">"← All articles"</a>
                <h1 class="page-title">{page.title.clone()}</h1>
                {page.date.map(|date| view! {
                    <div class="blog-meta with-icon">
                        <Icon path=ICON_CALENDAR size="16" />
                        {date}
                    </div>
                })}
                {page.image.map(|src| view! { <img class="post-cover" src=src alt=page.title.clone() /> })}
                {page.excerpt.map(|excerpt| view! { <p class="lead">{excerpt}</p> })}
                {page.paragraphs.into_iter().map(|paragraph| view! { <p>{paragraph}</p> }).collect::<Vec<_>>()}
            </div>
        </article>
    }
}
