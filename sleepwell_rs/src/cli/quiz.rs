//! Terminal front end for the quiz controller.

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use console::style;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::dispatch::print_recommendation;
use crate::quiz::{QuizController, QuizError, QuizEvent};

/// Map a typed choice to an option value: a 1-based number, or the value itself.
fn resolve_choice<'a>(input: &'a str, options: &[(&'static str, &'static str)]) -> &'a str {
    input
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| options.get(idx))
        .map(|(value, _)| *value)
        .unwrap_or(input)
}

/// Ask every question on `out`, read answers from `input`, print the result.
pub async fn run_quiz<R, W>(input: R, out: &mut W, delay: Duration) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut quiz = QuizController::with_delay(delay);

    writeln!(out, "{}", style("Sleep Setup Quiz").bold())?;
    writeln!(out, "Answer with the option number or name; type \"reset\" to start over.")?;

    while !quiz.is_completed() {
        let question = quiz.current_question();
        let options = question.id.options();
        writeln!(out)?;
        writeln!(out, "{} {}", style(format!("[{}]", quiz.step_label())).dim(), question.prompt)?;
        for (idx, (_, label)) in options.iter().enumerate() {
            writeln!(out, "  {}. {}", idx + 1, label)?;
        }
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await.context("failed to read answer")? else {
            bail!("quiz aborted: input ended before the last question");
        };
        let typed = line.trim();
        if typed.eq_ignore_ascii_case("reset") {
            quiz.dispatch(QuizEvent::Reset)?;
            writeln!(out, "Starting over.")?;
            continue;
        }

        match quiz.submit(resolve_choice(typed, &options)).await {
            Ok(_) => {}
            Err(QuizError::InvalidOption { value, .. }) => {
                writeln!(out, "{} {:?} is not one of the options", style("✗").red(), value)?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    let rec = quiz
        .recommendation()
        .context("quiz finished without a recommendation")?;
    writeln!(out)?;
    print_recommendation(out, &rec)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn play(script: &str) -> Result<String> {
        let mut out = Vec::new();
        run_quiz(script.as_bytes(), &mut out, Duration::ZERO).await?;
        Ok(String::from_utf8(out).expect("utf-8 output"))
    }

    #[test]
    fn resolves_numbers_and_names() {
        let options = [("back", "Back sleeper"), ("side", "Side sleeper")];
        assert_eq!(resolve_choice("2", &options), "side");
        assert_eq!(resolve_choice("back", &options), "back");
        assert_eq!(resolve_choice("0", &options), "0");
        assert_eq!(resolve_choice("9", &options), "9");
    }

    #[tokio::test]
    async fn full_run_prints_recommendation() {
        let out = play("2\nhot\n1\n").await.unwrap();
        assert!(out.contains("[1 of 3] What is your primary sleep position?"));
        assert!(out.contains("[3 of 3] What is your main sleep concern?"));
        assert!(out.contains("Stay Cool All Night"));
        assert!(out.contains("Premium Memory Foam Topper"));
    }

    #[tokio::test]
    async fn invalid_answers_reprompt_and_reset_restarts() {
        let out = play("lukewarm\nstomach\nreset\nback\nneutral\ncomfort\n").await.unwrap();
        assert!(out.contains("\"lukewarm\" is not one of the options"));
        assert!(out.contains("Starting over."));
        assert!(out.contains("Balanced Comfort"));
        assert!(out.contains("Cervical Support Pillow"));
    }

    #[tokio::test]
    async fn eof_aborts() {
        let err = play("side\n").await.unwrap_err();
        assert!(err.to_string().contains("input ended"));
    }
}
