pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{DietError, Result};
pub use models::{
    DietPlan, FoodCatalog, FoodItem, MealEntry, MealPeriod, Nutrient, NutrientRequirement,
    PlanSelection, RawFoodRecord, ReferenceRow, Sex, SolveStatus,
};
pub use planner::{estimate_requirement, optimize_diet, RequirementModel, SolveOptions};
pub use state::{load_food_records, load_reference_rows, PlanSession};
