//! Root document component - the complete HTML page
//!
//! Every page shares the same shell: sticky header with the brand and
//! navigation, the page body, a footer and the interaction script.

use crate::styles::{CSP, STORE_CSS};
use crate::types::Chrome;
use leptos::prelude::*;

/// The complete HTML document for a storefront page
#[component]
pub fn StoreDocument(
    chrome: Chrome,
    /// Page title; the store name is appended
    #[prop(into)]
    title: String,
    children: Children,
) -> impl IntoView {
    let full_title = if title.is_empty() {
        chrome.store_name.clone()
    } else {
        format!("{} | {}", title, chrome.store_name)
    };

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{full_title}</title>
                <style inner_html=STORE_CSS></style>
            </head>
            <body>
                <header class="site-header">
                    <div class="container header-row">
                        <a class="brand" href="/">{chrome.store_name.clone()}</a>
                        <nav class="site-nav">
                            <a href="/">"Home"</a>
                            <a href="/#products">"Shop"</a>
                            <a href="/#sleep-quiz">"Sleep Quiz"</a>
                            <a href="/blog/">"Blog"</a>
                        </nav>
                    </div>
                </header>

                <main>{children()}</main>

                <footer class="site-footer">
                    <div class="container">
                        <p>{format!("© {}. Sleep better, wake refreshed.", chrome.store_name)}</p>
                    </div>
                </footer>

                <script inner_html=APP_SCRIPT></script>
            </body>
        </html>
    }
}

/// Page interactivity: comparison tabs, quiz stepping, smooth scrolling.
///
/// The script never computes anything: every panel it shows was rendered
/// server-side, it only toggles the `active` class.
const APP_SCRIPT: &str = r#"
(() => {
  // 1. Smooth scroll buttons
  document.querySelectorAll('[data-scroll-to]').forEach(btn => {
    btn.addEventListener('click', () => {
      const target = document.getElementById(btn.dataset.scrollTo);
      if (target) {
        target.scrollIntoView({ behavior: 'smooth' });
      }
    });
  });

  // 2. Comparison tabs
  document.querySelectorAll('[data-compare]').forEach(root => {
    const buttons = root.querySelectorAll('[data-compare-tab]');
    const panels = root.querySelectorAll('[data-compare-panel]');
    buttons.forEach(btn => {
      btn.addEventListener('click', () => {
        const tab = btn.dataset.compareTab;
        buttons.forEach(b => b.classList.toggle('active', b === btn));
        panels.forEach(p => p.classList.toggle('active', p.dataset.comparePanel === tab));
      });
    });
  });

  // 3. Sleep quiz
  document.querySelectorAll('[data-quiz]').forEach(quiz => {
    const stage = quiz.querySelector('[data-quiz-stage]');
    const steps = Array.from(quiz.querySelectorAll('[data-quiz-step]'));
    const results = quiz.querySelectorAll('[data-quiz-result]');
    const delay = Number(quiz.dataset.transitionMs || 300);
    let current = 0;
    let answers = [];
    let pending = null;

    const show = (idx) => steps.forEach((s, i) => s.classList.toggle('active', i === idx));

    const finish = () => {
      const key = answers.join('-');
      stage.classList.remove('active');
      results.forEach(r => r.classList.toggle('active', r.dataset.quizResult === key));
    };

    steps.forEach((step, idx) => {
      const options = step.querySelectorAll('[data-answer]');
      options.forEach(btn => {
        btn.addEventListener('click', () => {
          if (idx !== current) return;
          answers[idx] = btn.dataset.answer;
          options.forEach(b => b.classList.toggle('selected', b === btn));
          if (pending !== null) return;
          pending = setTimeout(() => {
            pending = null;
            if (current + 1 === steps.length) {
              finish();
            } else {
              current += 1;
              show(current);
            }
          }, delay);
        });
      });
    });

    quiz.querySelectorAll('[data-quiz-reset]').forEach(btn => {
      btn.addEventListener('click', () => {
        if (pending !== null) clearTimeout(pending);
        pending = null;
        current = 0;
        answers = [];
        quiz.querySelectorAll('[data-answer]').forEach(b => b.classList.remove('selected'));
        results.forEach(r => r.classList.remove('active'));
        stage.classList.add('active');
        show(0);
      });
    });
  });
})();
"#;
