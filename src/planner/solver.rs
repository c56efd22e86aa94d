use std::collections::{BTreeMap, BTreeSet};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use good_lp::{
    constraint, microlp, variable, Expression, ProblemVariables, ResolutionError, Solution,
    SolverModel, Variable,
};

use crate::models::{
    DietPlan, FoodCatalog, MealEntry, MealPeriod, Nutrient, NutrientRequirement, PlanSelection,
    SolveStatus,
};
use crate::planner::constants::required_items;

/// Caller-supplied knobs for a single optimization call.
#[derive(Debug, Clone, Default)]
pub struct SolveOptions {
    /// Catalog indices that must not be selected. Indices past the end of
    /// the catalog are ignored.
    pub excluded: BTreeSet<usize>,

    /// Wall-clock budget for the solve. When it elapses the call returns an
    /// `Undefined` plan instead of blocking; `None` waits for a verdict.
    pub time_limit: Option<Duration>,
}

/// Owned numeric snapshot of one problem instance, movable into the solver
/// thread.
struct MilpInput {
    energy: Vec<f64>,
    nutrient_rows: Vec<(Vec<f64>, f64)>,
    period_rows: Vec<(Vec<usize>, usize)>,
    excluded: Vec<usize>,
}

impl MilpInput {
    fn build(
        catalog: &FoodCatalog,
        requirement: &NutrientRequirement,
        options: &SolveOptions,
    ) -> Self {
        let items = catalog.items();

        let energy = items.iter().map(|item| f64::from(item.energy)).collect();

        let nutrient_rows = Nutrient::TARGETS
            .iter()
            .map(|&nutrient| {
                let column = items
                    .iter()
                    .map(|item| f64::from(item.amount(nutrient)))
                    .collect();
                (column, requirement.target(nutrient))
            })
            .collect();

        let period_rows = MealPeriod::ALL
            .iter()
            .map(|&period| (catalog.period_indices(period).to_vec(), required_items(period)))
            .collect();

        let excluded = options
            .excluded
            .iter()
            .copied()
            .filter(|&index| index < items.len())
            .collect();

        Self {
            energy,
            nutrient_rows,
            period_rows,
            excluded,
        }
    }
}

/// The raw variable assignment of an optimal solve.
struct RawSelection {
    chosen: Vec<usize>,
    total_energy: f64,
}

/// Pick a calorie-minimal one-day selection from the catalog.
///
/// One 0/1 variable per item; minimize total energy subject to the
/// per-nutrient minimums, the exact per-period counts, and the exclusions.
/// Non-optimal outcomes carry a status only.
pub fn optimize_diet(
    catalog: &FoodCatalog,
    requirement: &NutrientRequirement,
    options: &SolveOptions,
) -> DietPlan {
    // A period with fewer items than its required count can never satisfy
    // its equality row.
    for period in MealPeriod::ALL {
        if catalog.period_indices(period).len() < required_items(period) {
            return DietPlan::status_only(SolveStatus::Infeasible);
        }
    }

    let input = MilpInput::build(catalog, requirement, options);
    match run_with_deadline(input, options.time_limit) {
        (SolveStatus::Optimal, Some(raw)) => DietPlan::optimal(shape_selection(catalog, raw)),
        (status, _) => DietPlan::status_only(status),
    }
}

/// Run the solve on a worker thread and wait for its verdict.
///
/// An elapsed deadline or a worker panic yields `Undefined`; a timed-out
/// worker keeps solving and its result is discarded.
fn run_with_deadline(
    input: MilpInput,
    time_limit: Option<Duration>,
) -> (SolveStatus, Option<RawSelection>) {
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        let _ = sender.send(solve_selection(&input));
    });

    let outcome = match time_limit {
        Some(limit) => receiver.recv_timeout(limit).ok(),
        None => receiver.recv().ok(),
    };

    outcome.unwrap_or((SolveStatus::Undefined, None))
}

fn solve_selection(input: &MilpInput) -> (SolveStatus, Option<RawSelection>) {
    let item_count = input.energy.len();

    let mut vars = ProblemVariables::new();
    let selection: Vec<Variable> = (0..item_count)
        .map(|_| vars.add(variable().integer().min(0).max(1)))
        .collect();

    let objective: Expression = selection
        .iter()
        .zip(&input.energy)
        .map(|(&var, &kcal)| kcal * var)
        .sum();

    let mut model = vars.minimise(objective).using(microlp);

    for (column, minimum) in &input.nutrient_rows {
        let supplied: Expression = selection
            .iter()
            .zip(column)
            .map(|(&var, &amount)| amount * var)
            .sum();
        let minimum = *minimum;
        model = model.with(constraint!(supplied >= minimum));
    }

    for (members, count) in &input.period_rows {
        let picked: Expression = members
            .iter()
            .map(|&index| Expression::from(selection[index]))
            .sum();
        let needed = *count as f64;
        model = model.with(constraint!(picked == needed));
    }

    if !input.excluded.is_empty() {
        let banned: Expression = input
            .excluded
            .iter()
            .map(|&index| Expression::from(selection[index]))
            .sum();
        model = model.with(constraint!(banned == 0.0));
    }

    match model.solve() {
        Ok(solution) => {
            let chosen: Vec<usize> = (0..item_count)
                .filter(|&index| solution.value(selection[index]) > 0.5)
                .collect();
            let total_energy = chosen.iter().map(|&index| input.energy[index]).sum();
            (
                SolveStatus::Optimal,
                Some(RawSelection {
                    chosen,
                    total_energy,
                }),
            )
        }
        Err(ResolutionError::Infeasible) => (SolveStatus::Infeasible, None),
        Err(ResolutionError::Unbounded) => (SolveStatus::Unbounded, None),
        Err(_) => (SolveStatus::Undefined, None),
    }
}

/// Group the chosen indices by meal period, in catalog order.
///
/// Chosen items without a recognized period stay out of every meal group but
/// remain in the index list and the calorie total.
fn shape_selection(catalog: &FoodCatalog, raw: RawSelection) -> PlanSelection {
    let picked: BTreeSet<usize> = raw.chosen.iter().copied().collect();

    let mut meals = BTreeMap::new();
    for period in MealPeriod::ALL {
        let entries: Vec<MealEntry> = catalog
            .period_indices(period)
            .iter()
            .filter(|index| picked.contains(index))
            .map(|&index| MealEntry {
                food_name: catalog.items()[index].name.clone(),
                quantity: 1,
            })
            .collect();
        meals.insert(period, entries);
    }

    PlanSelection {
        meals,
        chosen_indices: raw.chosen,
        total_calories: raw.total_energy,
    }
}
