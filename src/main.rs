mod cli;
mod cmd;

use bodymetrics::output;
use clap::Parser;
use cli::{Cli, Commands, ConfigAction, MetricsAction, ProfileAction};
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("BODYMETRICS_LOG", "warn"))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { skip } => cmd::init::run(skip),
        Commands::Bmi {
            height,
            weight,
            height_unit,
            weight_unit,
        } => cmd::bmi::run(
            &height,
            &weight,
            height_unit.as_deref(),
            weight_unit.as_deref(),
            cli.human,
        ),
        Commands::Metrics { action } => match action {
            MetricsAction::Show => cmd::metrics::run_show(cli.human),
            MetricsAction::Set {
                height,
                weight,
                height_unit,
                weight_unit,
                goal,
            } => cmd::metrics::run_set(
                cmd::metrics::SetArgs {
                    height: &height,
                    weight: &weight,
                    height_unit: height_unit.as_deref(),
                    weight_unit: weight_unit.as_deref(),
                    goal: goal.as_deref(),
                },
                cli.human,
            ),
            MetricsAction::Goal { goal } => cmd::metrics::run_goal(&goal, cli.human),
            MetricsAction::Clear => cmd::metrics::run_clear(cli.human),
        },
        Commands::Profile { action } => {
            let user = cli.user.as_deref();
            match action {
                ProfileAction::Show => cmd::profile::run_show(user, cli.human),
                ProfileAction::Name { name } => cmd::profile::run_name(user, &name, cli.human),
                ProfileAction::Avatar { url } => cmd::profile::run_avatar(user, &url, cli.human),
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd::config::run_show(cli.human),
            ConfigAction::Set { key, value } => cmd::config::run_set(&key, &value),
        },
        Commands::Completions { shell } => cmd::completions::run(shell),
    };

    if let Err(e) = result {
        log::debug!("command failed: {:?}", e);
        let err = output::error("", output::error_code(&e), &e.to_string());
        eprintln!("{}", err);
        process::exit(1);
    }
}
