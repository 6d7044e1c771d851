use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "profilemap")]
#[command(about = "Quiz-funnel profile engine: scores, strengths and radar chart", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a full profile report from answers, links and a catalog
    Profile {
        /// JSON file with the answers of one quiz attempt
        #[arg(long)]
        answers: PathBuf,

        /// JSON file with question-to-component links
        #[arg(long)]
        links: PathBuf,

        /// JSON file with the ordered component catalog
        #[arg(long)]
        catalog: PathBuf,

        /// JSON file with a persisted score map; skips aggregation
        #[arg(long)]
        scores: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Classify and lay out chart points from a persisted score map,
    /// emitted as JSON for the rendering collaborator
    Chart {
        /// JSON file with the persisted score map
        #[arg(long)]
        scores: PathBuf,

        /// JSON file with the ordered component catalog
        #[arg(long)]
        catalog: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
