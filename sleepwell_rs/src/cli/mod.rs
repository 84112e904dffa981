//! Command-line interface for the `sleepwell` binary.
//!
//! ```text
//! sleepwell build [--out DIR] [--fixture FILE] [--json]
//! sleepwell quiz [--delay-ms MS]
//! sleepwell recommend --position P --temperature T --concerns C [--json]
//! sleepwell compare [--view pillows|toppers] [--json]
//! sleepwell posts [--fixture FILE] [--json]
//! ```
//!
//! - [`dispatch`] - command handlers
//! - [`quiz`] - interactive terminal quiz

pub mod dispatch;
pub mod quiz;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::comparison::ComparisonView;

pub use dispatch::run;

#[derive(Parser, Debug)]
#[command(name = "sleepwell")]
#[command(about = "Sleepwell storefront: build the static site, take the sleep quiz, compare products")]
#[command(version)]
pub struct Cli {
    /// Config file (default: .sleepwell/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch store data and render the static site
    Build(BuildArgs),

    /// Take the sleep setup quiz in the terminal
    Quiz(QuizArgs),

    /// Print the recommendation for a set of answers
    Recommend(RecommendArgs),

    /// Show the side-by-side product comparison
    Compare(CompareArgs),

    /// List published blog posts
    Posts(PostsArgs),
}

/// Where store data comes from
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Read products, collections and content from a JSON file instead of the backend
    #[arg(long, value_name = "FILE")]
    pub fixture: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Output directory (default: site.out_dir from config)
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Print the build report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct QuizArgs {
    /// Pause between questions (default: site.quiz_delay_ms from config)
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,
}

#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// back, side, stomach or combo
    #[arg(long)]
    pub position: String,

    /// hot, cold or neutral
    #[arg(long)]
    pub temperature: String,

    /// pain, insomnia, comfort or quality
    #[arg(long)]
    pub concerns: String,

    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Which list to show
    #[arg(long, default_value_t = ComparisonView::Pillows)]
    pub view: ComparisonView,

    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct PostsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[arg(long)]
    pub json: bool,
}
