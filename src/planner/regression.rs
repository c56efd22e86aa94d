use std::collections::BTreeMap;

use crate::error::{DietError, Result};
use crate::models::{Nutrient, NutrientRequirement, ReferenceRow, Sex};

/// Anything that turns a body weight into a predicted value.
pub trait Predictor {
    fn predict(&self, weight: f64) -> f64;
}

/// One ordinary-least-squares line: `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeastSquaresLine {
    slope: f64,
    intercept: f64,
}

impl LeastSquaresLine {
    /// Closed-form fit over `(x, y)` points.
    ///
    /// slope = Σ(x - x̄)(y - ȳ) / Σ(x - x̄)², intercept = ȳ - slope * x̄.
    /// Returns `None` when fewer than two distinct x values are present,
    /// where the normal equations degenerate.
    pub fn fit(points: &[(f64, f64)]) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }

        let n = points.len() as f64;
        let mean_x = points.iter().map(|&(x, _)| x).sum::<f64>() / n;
        let mean_y = points.iter().map(|&(_, y)| y).sum::<f64>() / n;

        let sxx: f64 = points.iter().map(|&(x, _)| (x - mean_x).powi(2)).sum();
        if sxx == 0.0 {
            return None;
        }

        let sxy: f64 = points
            .iter()
            .map(|&(x, y)| (x - mean_x) * (y - mean_y))
            .sum();

        let slope = sxy / sxx;
        Some(Self {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl Predictor for LeastSquaresLine {
    fn predict(&self, weight: f64) -> f64 {
        self.intercept + self.slope * weight
    }
}

/// The per-sex requirement model: one independently fitted line per target
/// nutrient, all trained on the rows recorded for that sex.
#[derive(Debug, Clone)]
pub struct RequirementModel {
    sex: Sex,
    lines: BTreeMap<Nutrient, LeastSquaresLine>,
}

impl RequirementModel {
    /// Fit the seven nutrient lines on the rows recorded for `sex`.
    ///
    /// Errors when no rows match the sex, or when the matching rows hold
    /// fewer than two distinct weight values.
    pub fn fit(rows: &[ReferenceRow], sex: Sex) -> Result<Self> {
        let sample: Vec<&ReferenceRow> = rows.iter().filter(|row| row.sex == sex).collect();
        if sample.is_empty() {
            return Err(DietError::NoReferenceRows(sex));
        }

        let mut weights: Vec<f64> = sample.iter().map(|row| row.weight).collect();
        weights.sort_by(f64::total_cmp);
        weights.dedup();
        let distinct = weights.len();
        if distinct < 2 {
            return Err(DietError::DegenerateWeights { sex, distinct });
        }

        let mut lines = BTreeMap::new();
        for nutrient in Nutrient::TARGETS {
            let points: Vec<(f64, f64)> = sample
                .iter()
                .map(|row| (row.weight, row.requirement(nutrient)))
                .collect();
            let line = LeastSquaresLine::fit(&points)
                .ok_or(DietError::DegenerateWeights { sex, distinct })?;
            lines.insert(nutrient, line);
        }

        Ok(Self { sex, lines })
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    /// The fitted line for one nutrient.
    pub fn line(&self, nutrient: Nutrient) -> Option<&LeastSquaresLine> {
        self.lines.get(&nutrient)
    }

    /// Evaluate every fitted line at `weight`.
    ///
    /// Extrapolation is not clamped: weights far outside the training range
    /// can produce negative targets, which pass through to the optimizer.
    pub fn predict(&self, weight: f64) -> NutrientRequirement {
        NutrientRequirement::new(
            self.lines
                .iter()
                .map(|(&nutrient, line)| (nutrient, line.predict(weight)))
                .collect(),
        )
    }
}

/// Fit a model for `sex` on the given rows and predict at `weight`.
pub fn estimate_requirement(
    rows: &[ReferenceRow],
    sex: Sex,
    weight: f64,
) -> Result<NutrientRequirement> {
    Ok(RequirementModel::fit(rows, sex)?.predict(weight))
}
