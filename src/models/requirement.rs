use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Nutrient;

/// Sex recorded in the historical reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Female,
    Male,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Female => write!(f, "female"),
            Sex::Male => write!(f, "male"),
        }
    }
}

/// One row of the historical reference table: a person of a given sex and
/// body weight together with their established daily requirements.
///
/// Unlike food records there is no coercion here; non-numeric cells are a
/// load error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReferenceRow {
    #[serde(rename = "Sex")]
    pub sex: Sex,

    #[serde(rename = "Weight (kg)")]
    pub weight: f64,

    #[serde(rename = "Protein (g)")]
    pub protein: f64,

    #[serde(rename = "Fat (g)")]
    pub fat: f64,

    #[serde(rename = "Carbohydrate (g)")]
    pub carbohydrate: f64,

    #[serde(rename = "Calcium (mg)")]
    pub calcium: f64,

    #[serde(rename = "Iron (mg)")]
    pub iron: f64,

    #[serde(rename = "Vitamin A (mg)")]
    pub vitamin_a: f64,

    #[serde(rename = "Vitamin C (mg)")]
    pub vitamin_c: f64,
}

impl ReferenceRow {
    /// Recorded requirement for the given nutrient.
    ///
    /// Energy carries no requirement; it is the minimization objective.
    pub fn requirement(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Energy => 0.0,
            Nutrient::Protein => self.protein,
            Nutrient::Fat => self.fat,
            Nutrient::Carbohydrate => self.carbohydrate,
            Nutrient::Calcium => self.calcium,
            Nutrient::Iron => self.iron,
            Nutrient::VitaminA => self.vitamin_a,
            Nutrient::VitaminC => self.vitamin_c,
        }
    }
}

/// Per-nutrient daily minimums handed to the optimizer.
///
/// A nutrient with no entry has no minimum (target 0). Values may be
/// negative when the estimator extrapolates far outside its training range;
/// such targets are trivially satisfied and pass through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientRequirement {
    targets: BTreeMap<Nutrient, f64>,
}

impl NutrientRequirement {
    pub fn new(targets: BTreeMap<Nutrient, f64>) -> Self {
        Self { targets }
    }

    /// A requirement with no minimums; every selection satisfies it.
    pub fn empty() -> Self {
        Self {
            targets: BTreeMap::new(),
        }
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (Nutrient, f64)>) -> Self {
        Self {
            targets: pairs.into_iter().collect(),
        }
    }

    /// Minimum for the given nutrient; absent nutrients have no minimum.
    pub fn target(&self, nutrient: Nutrient) -> f64 {
        self.targets.get(&nutrient).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        self.targets.iter().map(|(&nutrient, &target)| (nutrient, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> ReferenceRow {
        ReferenceRow {
            sex: Sex::Female,
            weight: 62.0,
            protein: 50.0,
            fat: 44.0,
            carbohydrate: 130.0,
            calcium: 1000.0,
            iron: 18.0,
            vitamin_a: 0.7,
            vitamin_c: 75.0,
        }
    }

    #[test]
    fn test_requirement_per_target_nutrient() {
        let row = sample_row();
        assert_eq!(row.requirement(Nutrient::Protein), 50.0);
        assert_eq!(row.requirement(Nutrient::Calcium), 1000.0);
        assert_eq!(row.requirement(Nutrient::VitaminC), 75.0);
        assert_eq!(row.requirement(Nutrient::Energy), 0.0);
    }

    #[test]
    fn test_absent_target_defaults_to_zero() {
        let requirement = NutrientRequirement::from_pairs([(Nutrient::Protein, 50.0)]);
        assert_eq!(requirement.target(Nutrient::Protein), 50.0);
        assert_eq!(requirement.target(Nutrient::Iron), 0.0);
    }

    #[test]
    fn test_empty_requirement_has_no_minimums() {
        let requirement = NutrientRequirement::empty();
        for nutrient in Nutrient::TARGETS {
            assert_eq!(requirement.target(nutrient), 0.0);
        }
        assert_eq!(requirement.iter().count(), 0);
    }
}
