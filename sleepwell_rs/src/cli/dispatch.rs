//! Command handlers.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;
use tracing::info;

use super::{BuildArgs, Cli, Command, CompareArgs, PostsArgs, QuizArgs, RecommendArgs, SourceArgs};
use crate::backend::{Backend, FixtureBackend, RestBackend};
use crate::comparison::comparison_products;
use crate::config::StoreConfig;
use crate::loader::{load_posts, load_store};
use crate::progress::{Spinner, format_count, format_duration, success, warning};
use crate::quiz::{QuestionId, QuizAnswers, Recommendation, recommend};
use crate::site::build_site;

/// Run the parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Build(args) => build(&config, args).await,
        Command::Quiz(args) => quiz(&config, args).await,
        Command::Recommend(args) => recommend_cmd(args),
        Command::Compare(args) => compare(args),
        Command::Posts(args) => posts(&config, args).await,
    }
}

fn load_config(path: Option<&Path>) -> Result<StoreConfig> {
    let config = match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("config file not found: {}", path.display());
            }
            StoreConfig::load_from_path(path)?
        }
        None => {
            let cwd = std::env::current_dir().context("cannot determine working directory")?;
            StoreConfig::load(&cwd)?
        }
    };
    Ok(config.with_env())
}

fn backend(config: &StoreConfig, source: &SourceArgs) -> Result<Backend> {
    if let Some(path) = &source.fixture {
        info!(path = %path.display(), store = %config.store.id, "using fixture backend");
        let mut fixture = FixtureBackend::new(path);
        if !config.store.id.is_empty() {
            fixture = fixture.for_store(&config.store.id);
        }
        return Ok(Backend::Fixture(fixture));
    }
    config.require_backend()?;
    let rest = RestBackend::new(
        &config.backend.url,
        &config.backend.anon_key,
        &config.store.id,
        config.timeout(),
    )
    .context("failed to create backend client")?;
    info!(url = %config.backend.url, store = %config.store.id, "using REST backend");
    Ok(Backend::Rest(rest))
}

async fn build(config: &StoreConfig, args: BuildArgs) -> Result<()> {
    let started = Instant::now();
    let source = backend(config, &args.source)?;
    let out_dir = args.out.unwrap_or_else(|| config.site.out_dir.clone());

    let spinner = Spinner::new("Fetching store data...");
    let data = load_store(&source).await;
    spinner.set_message("Rendering pages...");
    let report = build_site(config, &data, &out_dir)
        .with_context(|| format!("failed to write site to {}", out_dir.display()))?;
    spinner.finish_clear();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    success(&format!(
        "Wrote {} to {} in {}",
        format_count(report.pages.len(), "page", "pages"),
        report.out_dir.display(),
        format_duration(started.elapsed())
    ));
    println!(
        "  {}, {}, {}",
        format_count(report.products, "product", "products"),
        format_count(report.collections, "collection", "collections"),
        format_count(report.posts, "post", "posts"),
    );
    Ok(())
}

async fn quiz(config: &StoreConfig, args: QuizArgs) -> Result<()> {
    let delay = args
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.quiz_delay());
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    super::quiz::run_quiz(stdin, &mut stdout, delay).await
}

#[derive(Serialize)]
struct RecommendationOutput<'a> {
    key: String,
    #[serde(flatten)]
    recommendation: &'a Recommendation,
}

fn recommend_cmd(args: RecommendArgs) -> Result<()> {
    let mut answers = QuizAnswers::default();
    answers.set(QuestionId::Position, &args.position)?;
    answers.set(QuestionId::Temperature, &args.temperature)?;
    answers.set(QuestionId::Concerns, &args.concerns)?;
    let complete = answers
        .complete()
        .context("all three answers are required")?;
    let rec = recommend(&complete);

    if args.json {
        let output = RecommendationOutput {
            key: complete.key(),
            recommendation: &rec,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }
    print_recommendation(&mut std::io::stdout(), &rec)?;
    Ok(())
}

pub(crate) fn print_recommendation(out: &mut impl std::io::Write, rec: &Recommendation) -> std::io::Result<()> {
    writeln!(out, "{}", style(rec.title).bold())?;
    writeln!(out, "{}", rec.description)?;
    writeln!(out)?;
    writeln!(out, "Recommended Products:")?;
    for product in &rec.products {
        writeln!(out, "  {} {}", style("✓").green(), product)?;
    }
    Ok(())
}

fn compare(args: CompareArgs) -> Result<()> {
    let products = comparison_products(args.view);
    if args.json {
        println!("{}", serde_json::to_string_pretty(products)?);
        return Ok(());
    }

    println!("{}", style(format!("Compare {}", args.view.label())).bold());
    for product in products {
        println!();
        println!("{}  {}", style(product.name).bold(), style(product.price).cyan());
        println!("  Support:  {}", product.features.support);
        println!("  Cooling:  {}", product.features.cooling);
        println!("  Material: {}", product.features.material);
        println!("  Best for: {}", product.features.best_for);
        println!("  Pros:     {}", product.pros.join(", "));
        println!("  Cons:     {}", product.cons.join(", "));
        println!("  {}", style(product.link).dim());
    }
    Ok(())
}

async fn posts(config: &StoreConfig, args: PostsArgs) -> Result<()> {
    let source = backend(config, &args.source)?;
    let posts = load_posts(&source).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
        return Ok(());
    }
    if posts.is_empty() {
        warning("No articles available at this time.");
        return Ok(());
    }
    for post in &posts {
        let date = post
            .created_at
            .as_ref()
            .map(|d| config.site.locale.long_date(d))
            .unwrap_or_default();
        println!("{:<24} {}  {}", date, style(&post.title).bold(), style(post.href()).dim());
    }
    Ok(())
}
