use anyhow::Result;
use serde_json::json;

use bodymetrics::core::{bmi, units};
use bodymetrics::db::Database;
use bodymetrics::models::config::Config;
use bodymetrics::models::metrics::{BodyMetrics, Goal};
use bodymetrics::output;
use bodymetrics::output::human;
use bodymetrics::store::MetricsStore;

pub struct SetArgs<'a> {
    pub height: &'a str,
    pub weight: &'a str,
    pub height_unit: Option<&'a str>,
    pub weight_unit: Option<&'a str>,
    pub goal: Option<&'a str>,
}

fn open_store() -> Result<MetricsStore<Database>> {
    let db = Database::open(&Config::db_path())?;
    let mut store = MetricsStore::open(db)?;
    store.subscribe(|m| {
        log::info!(
            "body metrics changed: bmi={:?} category={:?} goal={:?}",
            m.bmi(),
            m.category(),
            m.goal()
        )
    });
    Ok(store)
}

fn print_metrics(command: &str, m: &BodyMetrics, recovered: bool, human_flag: bool) -> Result<()> {
    if human_flag {
        if recovered {
            eprintln!("{}", human::recovery_notice());
        }
        println!("{}", human::format_metrics(m));
        if let (Some(h), Some(_)) = (m.height(), m.bmi()) {
            let height_cm = units::height_to_cm(h, m.height_unit());
            if let Some(line) = human::format_healthy_range(height_cm, m.weight_unit()) {
                println!("{}", line);
            }
        }
    } else {
        let out = output::success(
            command,
            json!({ "metrics": m, "recovered": recovered }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_show(human_flag: bool) -> Result<()> {
    let store = open_store()?;
    print_metrics("metrics", store.get(), store.recovered(), human_flag)
}

pub fn run_set(args: SetArgs<'_>, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let (hu, wu) = super::resolve_units(&config, args.height_unit, args.weight_unit)?;
    let height = units::parse_height(args.height, hu)?;
    let weight = units::parse_weight(args.weight)?;
    let explicit_goal: Option<Goal> = args.goal.map(str::parse::<Goal>).transpose()?;

    let mut store = open_store()?;
    let recovered = store.recovered();
    let measured = BodyMetrics::measured(height, hu, weight, wu);
    let goal = explicit_goal
        .or(store.get().goal())
        .or(measured.category().map(bmi::suggest_goal));
    store.set(measured.with_goal(goal))?;

    print_metrics("metrics", store.get(), recovered, human_flag)
}

pub fn run_goal(goal: &str, human_flag: bool) -> Result<()> {
    let goal: Goal = goal.parse()?;
    let mut store = open_store()?;
    let recovered = store.recovered();
    let next = store.get().clone().with_goal(Some(goal));
    store.set(next)?;

    print_metrics("metrics", store.get(), recovered, human_flag)
}

pub fn run_clear(human_flag: bool) -> Result<()> {
    let mut store = open_store()?;
    store.clear()?;

    if human_flag {
        println!("Body metrics cleared.");
    } else {
        let out = output::success("metrics", json!({ "cleared": true }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
