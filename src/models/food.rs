use serde::{Deserialize, Serialize};

/// A tracked nutrient column.
///
/// Energy is the optimization objective; the other seven carry daily minimums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Nutrient {
    Energy,
    Protein,
    Fat,
    Carbohydrate,
    Calcium,
    Iron,
    VitaminA,
    VitaminC,
}

impl Nutrient {
    pub const COUNT: usize = 8;

    pub const ALL: [Nutrient; Nutrient::COUNT] = [
        Nutrient::Energy,
        Nutrient::Protein,
        Nutrient::Fat,
        Nutrient::Carbohydrate,
        Nutrient::Calcium,
        Nutrient::Iron,
        Nutrient::VitaminA,
        Nutrient::VitaminC,
    ];

    /// The nutrients that carry a daily minimum (everything except energy).
    pub const TARGETS: [Nutrient; 7] = [
        Nutrient::Protein,
        Nutrient::Fat,
        Nutrient::Carbohydrate,
        Nutrient::Calcium,
        Nutrient::Iron,
        Nutrient::VitaminA,
        Nutrient::VitaminC,
    ];

    /// Human-readable column label with unit.
    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Energy => "Energy (kcal)",
            Nutrient::Protein => "Protein (g)",
            Nutrient::Fat => "Fat (g)",
            Nutrient::Carbohydrate => "Carbohydrate (g)",
            Nutrient::Calcium => "Calcium (mg)",
            Nutrient::Iron => "Iron (mg)",
            Nutrient::VitaminA => "Vitamin A (mg)",
            Nutrient::VitaminC => "Vitamin C (mg)",
        }
    }
}

/// The four meal periods a one-day plan is divided into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MealPeriod {
    Breakfast,
    Snack,
    Lunch,
    Dinner,
}

impl MealPeriod {
    pub const ALL: [MealPeriod; 4] = [
        MealPeriod::Breakfast,
        MealPeriod::Snack,
        MealPeriod::Lunch,
        MealPeriod::Dinner,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MealPeriod::Breakfast => "Breakfast",
            MealPeriod::Snack => "Snack",
            MealPeriod::Lunch => "Lunch",
            MealPeriod::Dinner => "Dinner",
        }
    }

    /// Parse a raw period label. Anything that is not one of the four known
    /// labels (after trimming, case-insensitive) yields `None`.
    pub fn parse_label(label: &str) -> Option<MealPeriod> {
        let trimmed = label.trim();
        MealPeriod::ALL
            .iter()
            .copied()
            .find(|period| period.label().eq_ignore_ascii_case(trimmed))
    }
}

/// A food item with its period tag and per-nutrient amounts.
///
/// Names need not be unique; identity within a catalog is the positional
/// index. Items without a recognized period (`period == None`) are still
/// candidates for selection but count toward no meal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodItem {
    pub name: String,
    pub period: Option<MealPeriod>,
    pub energy: u32,
    pub protein: u32,
    pub fat: u32,
    pub carbohydrate: u32,
    pub calcium: u32,
    pub iron: u32,
    pub vitamin_a: u32,
    pub vitamin_c: u32,
}

impl FoodItem {
    /// Amount of the given nutrient in this item.
    #[inline]
    pub fn amount(&self, nutrient: Nutrient) -> u32 {
        match nutrient {
            Nutrient::Energy => self.energy,
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

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> FoodItem {
        FoodItem {
            name: "Oatmeal".to_string(),
            period: Some(MealPeriod::Breakfast),
            energy: 150,
            protein: 5,
            fat: 3,
            carbohydrate: 27,
            calcium: 20,
            iron: 2,
            vitamin_a: 0,
            vitamin_c: 0,
        }
    }

    #[test]
    fn test_amount_covers_every_nutrient() {
        let item = sample_item();
        assert_eq!(item.amount(Nutrient::Energy), 150);
        assert_eq!(item.amount(Nutrient::Protein), 5);
        assert_eq!(item.amount(Nutrient::Fat), 3);
        assert_eq!(item.amount(Nutrient::Carbohydrate), 27);
        assert_eq!(item.amount(Nutrient::Calcium), 20);
        assert_eq!(item.amount(Nutrient::Iron), 2);
        assert_eq!(item.amount(Nutrient::VitaminA), 0);
        assert_eq!(item.amount(Nutrient::VitaminC), 0);
    }

    #[test]
    fn test_parse_label_known_periods() {
        assert_eq!(MealPeriod::parse_label("Breakfast"), Some(MealPeriod::Breakfast));
        assert_eq!(MealPeriod::parse_label("  lunch  "), Some(MealPeriod::Lunch));
        assert_eq!(MealPeriod::parse_label("DINNER"), Some(MealPeriod::Dinner));
        assert_eq!(MealPeriod::parse_label("snack"), Some(MealPeriod::Snack));
    }

    #[test]
    fn test_parse_label_unknown_yields_none() {
        assert_eq!(MealPeriod::parse_label("Brunch"), None);
        assert_eq!(MealPeriod::parse_label(""), None);
        assert_eq!(MealPeriod::parse_label("Supper"), None);
    }

    #[test]
    fn test_targets_exclude_energy() {
        assert_eq!(Nutrient::TARGETS.len(), Nutrient::COUNT - 1);
        assert!(!Nutrient::TARGETS.contains(&Nutrient::Energy));
    }
}
