use crate::models::MealPeriod;

/// Exact number of foods a one-day plan selects at breakfast.
pub const BREAKFAST_ITEMS: usize = 4;

/// Exact number of foods a one-day plan selects as snacks.
pub const SNACK_ITEMS: usize = 3;

/// Exact number of foods a one-day plan selects at lunch.
pub const LUNCH_ITEMS: usize = 5;

/// Exact number of foods a one-day plan selects at dinner.
pub const DINNER_ITEMS: usize = 5;

/// Required selection count for the given meal period.
pub fn required_items(period: MealPeriod) -> usize {
    match period {
        MealPeriod::Breakfast => BREAKFAST_ITEMS,
        MealPeriod::Snack => SNACK_ITEMS,
        MealPeriod::Lunch => LUNCH_ITEMS,
        MealPeriod::Dinner => DINNER_ITEMS,
    }
}

/// Number of foods a complete one-day plan contains across all periods.
pub fn total_required_items() -> usize {
    MealPeriod::ALL
        .iter()
        .map(|&period| required_items(period))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_items_per_period() {
        assert_eq!(required_items(MealPeriod::Breakfast), 4);
        assert_eq!(required_items(MealPeriod::Snack), 3);
        assert_eq!(required_items(MealPeriod::Lunch), 5);
        assert_eq!(required_items(MealPeriod::Dinner), 5);
    }

    #[test]
    fn test_total_required_items() {
        assert_eq!(total_required_items(), 17);
    }
}
