use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::models::MealPeriod;

/// Terminal status of an optimization call, mirroring the solver's verdicts.
///
/// `Unbounded` cannot occur for a bounded 0/1 model but is representable;
/// `Undefined` covers solver failures and elapsed time limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SolveStatus {
    Optimal,
    Infeasible,
    Unbounded,
    Undefined,
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SolveStatus::Optimal => "Optimal",
            SolveStatus::Infeasible => "Infeasible",
            SolveStatus::Unbounded => "Unbounded",
            SolveStatus::Undefined => "Undefined",
        };
        write!(f, "{}", label)
    }
}

/// A selected food within one meal of the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealEntry {
    /// Name of the selected food.
    pub food_name: String,

    /// Selection count; always 1 for a 0/1 selection.
    pub quantity: u32,
}

/// The shaped output of an optimal solve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSelection {
    /// Selected entries grouped by meal period, in catalog order.
    pub meals: BTreeMap<MealPeriod, Vec<MealEntry>>,

    /// Every chosen catalog index, in catalog order. Includes items without
    /// a recognized period, which appear in no meal group.
    pub chosen_indices: Vec<usize>,

    /// Objective value at the solution: the summed energy of all chosen
    /// items, free candidates included.
    pub total_calories: f64,
}

impl PlanSelection {
    /// Entries for one meal period; empty if nothing was selected there.
    pub fn meal(&self, period: MealPeriod) -> &[MealEntry] {
        self.meals
            .get(&period)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Result of one optimization call.
///
/// `selection` is present exactly when `status` is `Optimal`; any other
/// status carries no partial selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DietPlan {
    pub status: SolveStatus,
    pub selection: Option<PlanSelection>,
}

impl DietPlan {
    /// A plan carrying only a non-optimal verdict.
    pub fn status_only(status: SolveStatus) -> Self {
        Self {
            status,
            selection: None,
        }
    }

    /// An optimal plan with its shaped selection.
    pub fn optimal(selection: PlanSelection) -> Self {
        Self {
            status: SolveStatus::Optimal,
            selection: Some(selection),
        }
    }

    pub fn is_optimal(&self) -> bool {
        self.status == SolveStatus::Optimal
    }

    /// Total calories of the selection, when one exists.
    pub fn total_calories(&self) -> Option<f64> {
        self.selection.as_ref().map(|selection| selection.total_calories)
    }
}
