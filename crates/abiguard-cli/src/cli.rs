use std::path::PathBuf;

use abiguard_collect::BaselineStrategy;
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "abiguard",
    about = "Fail when a contract's external ABI changes without an ABI_VERSION bump",
    version
)]
pub struct Cli {
    /// Repository root
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Config file (default: <repo>/abiguard.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Baseline branch or ref to compare against
    #[arg(long)]
    pub baseline: Option<String>,

    /// Remote to fetch the baseline from ("" to skip fetching)
    #[arg(long)]
    pub remote: Option<String>,

    /// How to materialize the baseline
    #[arg(long)]
    pub strategy: Option<StrategyArg>,

    /// Do not require a version bump for removed functions, events, or contracts
    #[arg(long)]
    pub allow_removals: bool,

    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum StrategyArg {
    Worktree,
    Checkout,
}

impl From<StrategyArg> for BaselineStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Worktree => Self::Worktree,
            StrategyArg::Checkout => Self::Checkout,
        }
    }
}
