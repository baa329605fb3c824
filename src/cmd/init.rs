use anyhow::Result;
use std::io::{self, Write};

use bodymetrics::db::Database;
use bodymetrics::models::config::{Config, Units};

pub fn run(skip: bool) -> Result<()> {
    let mut config = Config::load().unwrap_or_default();

    if !skip {
        println!("bodymetrics - Initial Setup\n");

        loop {
            let system = prompt_string("Unit system (metric/imperial)")?;
            match system.as_str() {
                "" | "metric" => config.units = Units::default(),
                "imperial" => config.units = Units::imperial(),
                _ => {
                    println!("Please enter metric or imperial.");
                    continue;
                }
            }
            break;
        }

        let model = prompt_string(&format!(
            "Assistant model [{}]",
            config.assistant.model
        ))?;
        if !model.is_empty() {
            config.assistant.model = model;
        }

        config.save()?;
        Database::open(&Config::db_path())?;
        println!("\nSetup complete. Data stored in {:?}", Config::data_dir());
    } else {
        config.save()?;
        Database::open(&Config::db_path())?;
        println!("Config initialized with defaults at {:?}", Config::path());
    }

    Ok(())
}

fn prompt_string(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}
