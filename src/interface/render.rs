use crate::models::{DietPlan, FoodCatalog, MealPeriod, NutrientRequirement, Sex, SolveStatus};

/// Display how many foods were loaded and how they split across periods.
pub fn display_catalog_summary(catalog: &FoodCatalog) {
    println!(
        "Loaded {} foods ({} breakfast, {} snack, {} lunch, {} dinner)",
        catalog.len(),
        catalog.period_indices(MealPeriod::Breakfast).len(),
        catalog.period_indices(MealPeriod::Snack).len(),
        catalog.period_indices(MealPeriod::Lunch).len(),
        catalog.period_indices(MealPeriod::Dinner).len(),
    );
}

/// Warning line for items whose period label matched no meal period, if any.
pub fn free_candidate_warning(catalog: &FoodCatalog) -> Option<String> {
    let free = catalog.free_indices();
    if free.is_empty() {
        return None;
    }
    Some(format!(
        "warning: {} food(s) carry an unrecognized period label; they can be selected but count toward no meal",
        free.len()
    ))
}

/// Emit the unrecognized-period warning on stderr, where it reaches the
/// operator without touching the machine-readable output stream.
pub fn warn_free_candidates(catalog: &FoodCatalog) {
    if let Some(warning) = free_candidate_warning(catalog) {
        eprintln!("{}", warning);
    }
}

/// Display the estimated per-nutrient daily minimums.
pub fn display_requirement(sex: Sex, weight: f64, requirement: &NutrientRequirement) {
    println!();
    println!("=== Estimated Requirement ({}, {:.1} kg) ===", sex, weight);
    println!();

    for (nutrient, target) in requirement.iter() {
        println!("  {:<18} {:>10.2}", nutrient.label(), target);
    }
    println!();
}

/// Display one day's plan, or the reason there is none.
pub fn display_diet_plan(plan: &DietPlan) {
    match plan.status {
        SolveStatus::Optimal => {
            if let Some(selection) = &plan.selection {
                println!();
                println!("=== Meal Plan ===");
                for (period, entries) in &selection.meals {
                    println!();
                    println!("{}:", period.label());
                    if entries.is_empty() {
                        println!("  (none)");
                    }
                    for entry in entries {
                        println!("  - {}", entry.food_name);
                    }
                }
                println!();
                println!("Total calories: {:.2}", selection.total_calories);
                println!();
            }
        }
        SolveStatus::Infeasible => {
            println!("No feasible meal plan: the catalog cannot meet the meal counts and nutrient minimums.");
        }
        SolveStatus::Unbounded => {
            println!("The solver reported an unbounded model; no plan is available.");
        }
        SolveStatus::Undefined => {
            println!("The solver did not reach a verdict (failure or time limit); no plan is available.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodItem;

    fn item(name: &str, period: Option<MealPeriod>) -> FoodItem {
        FoodItem {
            name: name.to_string(),
            period,
            energy: 0,
            protein: 0,
            fat: 0,
            carbohydrate: 0,
            calcium: 0,
            iron: 0,
            vitamin_a: 0,
            vitamin_c: 0,
        }
    }

    #[test]
    fn test_free_candidate_warning_counts_unmatched_items() {
        let catalog = FoodCatalog::new(vec![
            item("Oatmeal", Some(MealPeriod::Breakfast)),
            item("Mystery", None),
            item("Enigma", None),
        ]);

        let warning = free_candidate_warning(&catalog).expect("two items are unmatched");
        assert!(warning.contains("2 food(s)"), "got: {}", warning);
    }

    #[test]
    fn test_no_warning_when_every_item_is_matched() {
        let catalog = FoodCatalog::new(vec![item("Oatmeal", Some(MealPeriod::Breakfast))]);
        assert!(free_candidate_warning(&catalog).is_none());
    }
}
