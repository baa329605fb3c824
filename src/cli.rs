use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "bodymetrics", version, about = "Body metrics and BMI tracking CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,

    /// Signed-in user id for profile actions (default: $BODYMETRICS_USER)
    #[arg(long, global = true)]
    pub user: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize config and data directory
    Init {
        /// Skip interactive setup, use defaults
        #[arg(long)]
        skip: bool,
    },

    /// Calculate BMI without storing anything
    Bmi {
        /// Height (e.g. 180, or 5'11" with --height-unit ft-in)
        height: String,

        /// Weight
        weight: String,

        /// cm or ft-in (default: configured unit)
        #[arg(long)]
        height_unit: Option<String>,

        /// kg or lb (default: configured unit)
        #[arg(long)]
        weight_unit: Option<String>,
    },

    /// Manage the stored body metrics
    Metrics {
        #[command(subcommand)]
        action: MetricsAction,
    },

    /// Manage the signed-in user's profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print shell completions
    Completions {
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum MetricsAction {
    /// Show the stored metrics
    Show,
    /// Record height and weight, computing BMI
    Set {
        #[arg(long)]
        height: String,

        #[arg(long)]
        weight: String,

        /// cm or ft-in (default: configured unit)
        #[arg(long)]
        height_unit: Option<String>,

        /// kg or lb (default: configured unit)
        #[arg(long)]
        weight_unit: Option<String>,

        /// lose, gain or maintain (default: suggested from the category)
        #[arg(long)]
        goal: Option<String>,
    },
    /// Change the goal, keeping everything else
    Goal {
        /// lose, gain or maintain
        goal: String,
    },
    /// Erase the stored metrics
    Clear,
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the profile
    Show,
    /// Set the display name
    Name { name: String },
    /// Set the avatar image URL
    Avatar { url: String },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (e.g. units.height, units.system, assistant.model)
        key: String,
        /// Config value
        value: String,
    },
}
