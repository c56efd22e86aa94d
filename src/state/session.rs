use std::collections::BTreeSet;
use std::time::Duration;

use crate::models::{DietPlan, FoodCatalog, NutrientRequirement};
use crate::planner::{optimize_diet, SolveOptions};

/// Plans consecutive days over one catalog.
///
/// Every food chosen on an optimal day is excluded from all later days, so
/// repeated calls spread the plans across the catalog until it runs out.
/// Non-optimal days exclude nothing.
pub struct PlanSession {
    catalog: FoodCatalog,
    excluded: BTreeSet<usize>,
}

impl PlanSession {
    pub fn new(catalog: FoodCatalog) -> Self {
        Self {
            catalog,
            excluded: BTreeSet::new(),
        }
    }

    pub fn catalog(&self) -> &FoodCatalog {
        &self.catalog
    }

    /// Indices excluded from the next plan (everything chosen so far).
    pub fn excluded(&self) -> &BTreeSet<usize> {
        &self.excluded
    }

    /// Plan the next day and, if it is optimal, retire its foods.
    pub fn plan_next(
        &mut self,
        requirement: &NutrientRequirement,
        time_limit: Option<Duration>,
    ) -> DietPlan {
        let options = SolveOptions {
            excluded: self.excluded.clone(),
            time_limit,
        };
        let plan = optimize_diet(&self.catalog, requirement, &options);

        if let Some(selection) = &plan.selection {
            self.excluded.extend(selection.chosen_indices.iter().copied());
        }
        plan
    }

    /// Forget every exclusion; the next plan sees the whole catalog again.
    pub fn reset(&mut self) {
        self.excluded.clear();
    }
}
