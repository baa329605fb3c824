use anyhow::Result;
use serde_json::json;

use bodymetrics::core::profile;
use bodymetrics::db::Database;
use bodymetrics::models::config::Config;
use bodymetrics::models::profile::Session;
use bodymetrics::output;
use bodymetrics::output::human;

pub fn run_show(user: Option<&str>, human_flag: bool) -> Result<()> {
    let session = Session::resolve(user);
    let db = Database::open(&Config::db_path())?;
    let p = profile::get_profile(&db, &session)?;

    if human_flag {
        println!("{}", human::format_profile(p.as_ref()));
    } else {
        let out = output::success("profile", json!({ "profile": p }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_name(user: Option<&str>, name: &str, human_flag: bool) -> Result<()> {
    let session = Session::resolve(user);
    let db = Database::open(&Config::db_path())?;
    let revalidation = profile::update_display_name(&db, &session, name)?;
    print_update(&db, &session, &revalidation, human_flag)
}

pub fn run_avatar(user: Option<&str>, url: &str, human_flag: bool) -> Result<()> {
    let session = Session::resolve(user);
    let db = Database::open(&Config::db_path())?;
    let revalidation = profile::update_avatar(&db, &session, url)?;
    print_update(&db, &session, &revalidation, human_flag)
}

fn print_update(
    db: &Database,
    session: &Session,
    revalidation: &profile::Revalidation,
    human_flag: bool,
) -> Result<()> {
    let p = profile::get_profile(db, session)?;
    if human_flag {
        println!("{}", human::format_profile(p.as_ref()));
        println!("{}", human::format_revalidation(revalidation));
    } else {
        let out = output::success(
            "profile",
            json!({ "profile": p, "revalidate": revalidation.paths }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
