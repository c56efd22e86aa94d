use std::collections::BTreeMap;

use serde::Deserialize;

use crate::models::{FoodItem, MealPeriod};

/// One row of the food table as it comes off the spreadsheet.
///
/// Nutrient cells are kept as raw text so that the zero-coercion rule below
/// owns every malformed value, not the file reader.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFoodRecord {
    #[serde(rename = "Name", default)]
    pub name: String,

    #[serde(rename = "Period", default)]
    pub period: String,

    #[serde(rename = "Energy (kcal)", default)]
    pub energy: String,

    #[serde(rename = "Protein (g)", default)]
    pub protein: String,

    #[serde(rename = "Fat (g)", default)]
    pub fat: String,

    #[serde(rename = "Carbohydrate (g)", default)]
    pub carbohydrate: String,

    #[serde(rename = "Calcium (mg)", default)]
    pub calcium: String,

    #[serde(rename = "Iron (mg)", default)]
    pub iron: String,

    #[serde(rename = "Vitamin A (mg)", default)]
    pub vitamin_a: String,

    #[serde(rename = "Vitamin C (mg)", default)]
    pub vitamin_c: String,
}

/// Coerce a raw nutrient cell to a non-negative integer amount.
///
/// Missing or unparsable cells count as zero; fractional values truncate;
/// negative values clamp to zero.
fn coerce_amount(raw: &str) -> u32 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value.trunc() as u32,
        _ => 0,
    }
}

/// The immutable food catalog: an ordered item list plus per-period index
/// sets, built in a single pass over the raw records.
#[derive(Debug, Clone)]
pub struct FoodCatalog {
    items: Vec<FoodItem>,
    period_indices: BTreeMap<MealPeriod, Vec<usize>>,
}

impl FoodCatalog {
    /// Build a catalog from already-constructed items.
    pub fn new(items: Vec<FoodItem>) -> Self {
        let mut period_indices: BTreeMap<MealPeriod, Vec<usize>> = MealPeriod::ALL
            .iter()
            .map(|&period| (period, Vec::new()))
            .collect();

        for (index, item) in items.iter().enumerate() {
            if let Some(period) = item.period {
                period_indices.entry(period).or_default().push(index);
            }
        }

        Self {
            items,
            period_indices,
        }
    }

    /// Build a catalog from raw spreadsheet records, applying period parsing
    /// and nutrient coercion.
    pub fn from_records(records: Vec<RawFoodRecord>) -> Self {
        let items = records
            .into_iter()
            .map(|record| FoodItem {
                period: MealPeriod::parse_label(&record.period),
                name: record.name,
                energy: coerce_amount(&record.energy),
                protein: coerce_amount(&record.protein),
                fat: coerce_amount(&record.fat),
                carbohydrate: coerce_amount(&record.carbohydrate),
                calcium: coerce_amount(&record.calcium),
                iron: coerce_amount(&record.iron),
                vitamin_a: coerce_amount(&record.vitamin_a),
                vitamin_c: coerce_amount(&record.vitamin_c),
            })
            .collect();

        Self::new(items)
    }

    /// All items, in catalog order.
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Item at the given index, if any.
    pub fn get(&self, index: usize) -> Option<&FoodItem> {
        self.items.get(index)
    }

    /// Indices of the items tagged with the given period, in catalog order.
    pub fn period_indices(&self, period: MealPeriod) -> &[usize] {
        self.period_indices
            .get(&period)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Indices of items whose period label matched no meal period. These are
    /// still candidates for selection but count toward no meal.
    pub fn free_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.period.is_none())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
