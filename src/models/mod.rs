mod catalog;
mod food;
mod plan;
mod requirement;

pub use catalog::{FoodCatalog, RawFoodRecord};
pub use food::{FoodItem, MealPeriod, Nutrient};
pub use plan::{DietPlan, MealEntry, PlanSelection, SolveStatus};
pub use requirement::{NutrientRequirement, ReferenceRow, Sex};
