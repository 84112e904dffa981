//! Sleep setup quiz
//!
//! The question steps and every possible result panel are rendered up
//! front. The page script walks the steps and reveals the result panel whose
//! key matches the collected answers.

use leptos::prelude::*;
use crate::types::{QuizQuestion, QuizResult, QuizSection};
use super::{quiz_icon_path, Icon, ICON_ARROW_RIGHT};

#[component]
pub fn SleepQuiz(quiz: QuizSection) -> impl IntoView {
    let total = quiz.questions.len();

    view! {
        <section id="sleep-quiz" class="quiz band-dreamy" data-quiz="" data-transition-ms=quiz.transition_ms.to_string()>
            <div class="container narrow">
                <div class="card quiz-stage active" data-quiz-stage="">
                    {quiz.questions.into_iter().enumerate().map(|(idx, question)| view! {
                        <QuizStep question=question index=idx total=total />
                    }).collect::<Vec<_>>()}
                </div>
                {quiz.results.into_iter().map(|result| view! { <QuizResultPanel result=result /> }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// Width of the progress bar for step `index` of `total`.
pub fn progress_width(index: usize, total: usize) -> String {
    if total == 0 {
        return "0%".to_string();
    }
    let pct = (index + 1) as f64 / total as f64 * 100.0;
    format!("{:.0}%", pct)
}

#[component]
fn QuizStep(question: QuizQuestion, index: usize, total: usize) -> impl IntoView {
    let class = if index == 0 { "quiz-step active" } else { "quiz-step" };
    let width = format!("width: {}", progress_width(index, total));

    view! {
        <div class=class data-quiz-step=index.to_string() data-question=question.id.clone()>
            <div class="quiz-header">
                <div class="with-icon">
                    <Icon path=quiz_icon_path(question.icon) size="24" />
                    <h2 class="card-title">"Sleep Setup Quiz"</h2>
                </div>
                <span class="muted">{format!("{} of {}", index + 1, total)}</span>
            </div>
            <div class="progress">
                <div class="progress-fill" style=width></div>
            </div>
            <h3 class="quiz-prompt">{question.prompt}</h3>
            <div class="quiz-options" role="radiogroup">
                {question.options.into_iter().map(|option| view! {
                    <button class="quiz-option" role="radio" data-answer=option.value>
                        {option.label}
                    </button>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn QuizResultPanel(result: QuizResult) -> impl IntoView {
    view! {
        <div class="card quiz-result" data-quiz-result=result.key>
            <h2 class="card-title center">{result.title}</h2>
            <p class="muted center">{result.description}</p>
            <h4>"Recommended Products:"</h4>
            <ul class="recommendations">
                {result.products.into_iter().map(|product| view! {
                    <li class="recommendation">
                        <span>{product}</span>
                        <Icon path=ICON_ARROW_RIGHT class="icon-accent" />
                    </li>
                }).collect::<Vec<_>>()}
            </ul>
            <div class="quiz-actions">
                <button class="btn btn-primary btn-lg" data-scroll-to="products">"Shop Recommendations"</button>
                <button class="btn btn-outline btn-lg" data-quiz-reset="">"Retake Quiz"</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::progress_width;

    #[test]
    fn progress_tracks_current_step() {
        assert_eq!(progress_width(0, 3), "33%");
        assert_eq!(progress_width(2, 3), "100%");
        assert_eq!(progress_width(0, 0), "0%");
    }
}
