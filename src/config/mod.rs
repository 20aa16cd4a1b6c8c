pub mod toml_config;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "practice-kit")]
#[command(about = "Bounded counter, discount calculator and user posts fetcher")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Optional TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Apply a percentage discount to a price
    Discount {
        #[arg(long, allow_negative_numbers = true)]
        price: f64,
        #[arg(long, allow_negative_numbers = true)]
        percent: f64,
    },
    /// Summarise the posts of one user
    Posts {
        #[arg(long, allow_negative_numbers = true)]
        user_id: i64,
        #[arg(long, help = "Overrides [posts] base_url")]
        base_url: Option<String>,
    },
    /// Drive a bounded counter through a sequence of actions
    Counter {
        #[arg(long, allow_negative_numbers = true)]
        initial: Option<i64>,
        #[arg(long, allow_negative_numbers = true)]
        min: Option<i64>,
        #[arg(long, allow_negative_numbers = true)]
        max: Option<i64>,
        #[arg(value_enum)]
        actions: Vec<CounterStep>,
    },
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CounterStep {
    Inc,
    Dec,
    Reset,
}

#[cfg(feature = "cli")]
impl From<CounterStep> for crate::core::counter::CounterAction {
    fn from(step: CounterStep) -> Self {
        match step {
            CounterStep::Inc => Self::Increment,
            CounterStep::Dec => Self::Decrement,
            CounterStep::Reset => Self::Reset,
        }
    }
}
