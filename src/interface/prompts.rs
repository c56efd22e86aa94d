use dialoguer::{Confirm, Input, Select};

use crate::error::{DietError, Result};
use crate::models::Sex;

/// Prompt for the sex the plan is for.
pub fn prompt_sex() -> Result<Sex> {
    let options = ["Female", "Male"];
    let selection = Select::new()
        .with_prompt("Sex")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => Sex::Female,
        _ => Sex::Male,
    })
}

/// Prompt for body weight in kilograms.
pub fn prompt_weight() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Body weight (kg)")
        .default("62".to_string())
        .interact_text()?;

    let weight: f64 = input
        .trim()
        .parse()
        .map_err(|_| DietError::InvalidInput("Invalid number".to_string()))?;

    if !weight.is_finite() || weight <= 0.0 {
        return Err(DietError::InvalidInput(
            "Weight must be a positive number".to_string(),
        ));
    }

    Ok(weight)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect the sex and body weight the plan is for, prompting for whichever
/// was not given on the command line.
pub fn collect_query(sex: Option<Sex>, weight: Option<f64>) -> Result<(Sex, f64)> {
    let sex = match sex {
        Some(sex) => sex,
        None => prompt_sex()?,
    };
    let weight = match weight {
        Some(weight) => weight,
        None => prompt_weight()?,
    };
    Ok((sex, weight))
}
