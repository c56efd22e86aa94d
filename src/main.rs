use clap::Parser;
use std::path::Path;
use std::time::Duration;

use diet_planner_rs::cli::{Cli, Command};
use diet_planner_rs::error::{DietError, Result};
use diet_planner_rs::interface::{
    collect_query, display_catalog_summary, display_diet_plan, display_requirement, prompt_yes_no,
    warn_free_candidates,
};
use diet_planner_rs::models::{FoodCatalog, Sex};
use diet_planner_rs::planner::RequirementModel;
use diet_planner_rs::state::{load_food_records, load_reference_rows, PlanSession};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan {
            sex,
            weight,
            days,
            time_limit,
            json,
        } => cmd_plan(
            &cli.foods,
            &cli.reference,
            sex.map(Sex::from),
            weight,
            days,
            time_limit,
            json,
        ),
        Command::Estimate { sex, weight, json } => {
            cmd_estimate(&cli.reference, sex.map(Sex::from), weight, json)
        }
    }
}

/// Convert the `--time-limit` seconds flag into a duration.
fn parse_time_limit(seconds: Option<f64>) -> Result<Option<Duration>> {
    match seconds {
        None => Ok(None),
        Some(value) if value.is_finite() && value > 0.0 => {
            Ok(Some(Duration::from_secs_f64(value)))
        }
        Some(_) => Err(DietError::InvalidInput(
            "time limit must be a positive number of seconds".to_string(),
        )),
    }
}

/// Estimate the requirement, then plan one or more days of meals.
fn cmd_plan(
    foods_path: &str,
    reference_path: &str,
    sex: Option<Sex>,
    weight: Option<f64>,
    days: u32,
    time_limit: Option<f64>,
    json: bool,
) -> Result<()> {
    if days == 0 {
        return Err(DietError::InvalidInput(
            "days must be at least 1".to_string(),
        ));
    }
    let time_limit = parse_time_limit(time_limit)?;

    let foods_file = Path::new(foods_path);
    if !foods_file.exists() {
        eprintln!("Food catalog not found: {}", foods_path);
        return Ok(());
    }
    let reference_file = Path::new(reference_path);
    if !reference_file.exists() {
        eprintln!("Reference table not found: {}", reference_path);
        return Ok(());
    }

    let records = load_food_records(foods_file)?;
    let catalog = FoodCatalog::from_records(records);
    if catalog.is_empty() {
        println!("The food catalog is empty.");
        return Ok(());
    }
    warn_free_candidates(&catalog);

    let rows = load_reference_rows(reference_file)?;

    let interactive = sex.is_none() || weight.is_none();
    let (sex, weight) = collect_query(sex, weight)?;

    // Estimation runs first; a degenerate reference table stops everything
    // before any optimization.
    let model = RequirementModel::fit(&rows, sex)?;
    let requirement = model.predict(weight);

    if !json {
        display_catalog_summary(&catalog);
        display_requirement(sex, weight, &requirement);
    }

    let mut session = PlanSession::new(catalog);
    let mut plans = Vec::new();
    let mut day = 1u32;

    loop {
        let plan = session.plan_next(&requirement, time_limit);
        let optimal = plan.is_optimal();

        if json {
            plans.push(plan);
        } else {
            if days > 1 || day > 1 {
                println!("Day {}", day);
            }
            display_diet_plan(&plan);
        }

        if !optimal {
            break;
        }
        let more = if days > 1 {
            day < days
        } else if interactive && !json {
            prompt_yes_no("Plan another day with different foods?", false)?
        } else {
            false
        };
        if !more {
            break;
        }
        day += 1;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&plans)?);
    }

    Ok(())
}

/// Estimate per-nutrient daily needs without planning meals.
fn cmd_estimate(
    reference_path: &str,
    sex: Option<Sex>,
    weight: Option<f64>,
    json: bool,
) -> Result<()> {
    let reference_file = Path::new(reference_path);
    if !reference_file.exists() {
        eprintln!("Reference table not found: {}", reference_path);
        return Ok(());
    }

    let rows = load_reference_rows(reference_file)?;
    let (sex, weight) = collect_query(sex, weight)?;

    let model = RequirementModel::fit(&rows, sex)?;
    let requirement = model.predict(weight);

    if json {
        println!("{}", serde_json::to_string_pretty(&requirement)?);
    } else {
        display_requirement(sex, weight, &requirement);
    }

    Ok(())
}
