use std::collections::HashSet;

use crate::{WeekPlan, collation};

/// Grocery List Builder
///
/// Stateless service that reduces a [`WeekPlan`] to the list of ingredients
/// to buy:
/// - ingredients are collected Monday to Sunday, breakfast to snack, in the
///   order each meal lists them
/// - "Eggs" and "eggs" are the same item; the first spelling seen is kept
/// - the result is sorted alphabetically, ignoring case
///
/// Names are matched literally: "egg" and "eggs" stay separate items.
pub struct GroceryListBuilder;

impl GroceryListBuilder {
    pub fn compute(plan: &WeekPlan) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut ingredients: Vec<String> = plan
            .iter()
            .flat_map(|(_, _, meal)| meal.ingredients())
            .filter(|ingredient| seen.insert(collation::key(ingredient)))
            .cloned()
            .collect();

        ingredients.sort_by(|a, b| collation::compare(a, b));

        ingredients
    }
}

#[cfg(test)]
mod tests {
    use mealweek_shared::{Category, Day, Slot};

    use super::*;
    use crate::MealInput;

    #[test]
    fn empty_plan_has_no_ingredients() {
        assert!(GroceryListBuilder::compute(&WeekPlan::new()).is_empty());
    }

    #[test]
    fn first_spelling_wins_across_the_week() {
        let mut plan = WeekPlan::new();
        plan.assign(
            Day::Sunday,
            Slot::Breakfast,
            MealInput::new("Scramble", Category::Breakfast, ["EGGS"]),
        )
        .unwrap();
        plan.assign(
            Day::Monday,
            Slot::Dinner,
            MealInput::new("Fried rice", Category::Dinner, ["rice", "eggs"]),
        )
        .unwrap();
        plan.assign(
            Day::Monday,
            Slot::Lunch,
            MealInput::new("Quiche", Category::Lunch, ["Eggs", "Cream"]),
        )
        .unwrap();

        assert_eq!(
            GroceryListBuilder::compute(&plan),
            ["Cream", "Eggs", "rice"]
        );
    }
}
