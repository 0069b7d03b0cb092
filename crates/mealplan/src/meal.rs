use mealweek_shared::{Category, ValidationError};
use validator::Validate;

/// Raw meal data as entered by the user, before normalisation.
#[derive(Validate, Clone, Debug, Default, PartialEq)]
pub struct MealInput {
    #[validate(length(min = 1))]
    pub name: String,
    pub category: Category,
    #[validate(custom(function = "validate_ingredients"))]
    pub ingredients: Vec<String>,
}

impl MealInput {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        ingredients: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }
}

#[allow(clippy::ptr_arg)]
fn validate_ingredients(ingredients: &Vec<String>) -> Result<(), validator::ValidationError> {
    if ingredients.iter().any(|i| !i.trim().is_empty()) {
        return Ok(());
    }

    Err(validator::ValidationError::new("no_ingredients"))
}

/// Splits comma separated ingredient text into raw entries.
///
/// Entries are left untrimmed; [`crate::WeekPlan::assign`] trims and drops
/// blanks.
pub fn parse_ingredients(text: &str) -> Vec<String> {
    text.split(',').map(str::to_owned).collect()
}

/// A validated meal: non-empty name and at least one non-empty ingredient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Meal {
    name: String,
    category: Category,
    ingredients: Vec<String>,
}

impl Meal {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        ingredients: impl IntoIterator<Item = impl Into<String>>,
    ) -> mealweek_shared::Result<Self> {
        MealInput::new(name, category, ingredients).try_into()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Ingredients joined back into the comma separated form they are typed in.
    pub fn ingredients_text(&self) -> String {
        self.ingredients.join(", ")
    }
}

impl TryFrom<MealInput> for Meal {
    type Error = ValidationError;

    fn try_from(input: MealInput) -> Result<Self, Self::Error> {
        let input = MealInput {
            name: input.name.trim().to_owned(),
            ..input
        };

        if let Err(errors) = input.validate() {
            if errors.errors().contains_key("name") {
                mealweek_shared::bail!(EmptyName, "Please enter a meal name.");
            }
            mealweek_shared::bail!(NoIngredients, "Please enter at least one ingredient.");
        }

        let ingredients = input
            .ingredients
            .iter()
            .map(|i| i.trim())
            .filter(|i| !i.is_empty())
            .map(str::to_owned)
            .collect();

        Ok(Self {
            name: input.name,
            category: input.category,
            ingredients,
        })
    }
}

impl From<Meal> for MealInput {
    fn from(meal: Meal) -> Self {
        Self {
            name: meal.name,
            category: meal.category,
            ingredients: meal.ingredients,
        }
    }
}

#[cfg(test)]
mod tests {
    use mealweek_shared::Reason;

    use super::*;

    #[test]
    fn trims_name_and_ingredients() {
        let meal = Meal::new(
            "  Pancakes ",
            Category::Breakfast,
            [" flour", "eggs ", "", "   ", "milk"],
        )
        .unwrap();

        assert_eq!(meal.name(), "Pancakes");
        assert_eq!(meal.ingredients(), ["flour", "eggs", "milk"]);
    }

    #[test]
    fn keeps_duplicates_within_a_meal() {
        let meal = Meal::new("Omelette", Category::Breakfast, ["eggs", "Eggs", "eggs"]).unwrap();
        assert_eq!(meal.ingredients().len(), 3);
    }

    #[test]
    fn rejects_blank_name() {
        let err = Meal::new("   ", Category::Lunch, ["bread"]).unwrap_err();
        assert_eq!(err.reason, Reason::EmptyName);
    }

    #[test]
    fn rejects_blank_ingredients() {
        let err = Meal::new("Soup", Category::Lunch, [" ", ""]).unwrap_err();
        assert_eq!(err.reason, Reason::NoIngredients);

        let err = Meal::new("Soup", Category::Lunch, Vec::<String>::new()).unwrap_err();
        assert_eq!(err.reason, Reason::NoIngredients);
    }

    #[test]
    fn name_is_reported_before_ingredients() {
        let err = Meal::new("", Category::Dinner, Vec::<String>::new()).unwrap_err();
        assert_eq!(err.reason, Reason::EmptyName);
    }

    #[test]
    fn parse_ingredients_splits_on_commas() {
        assert_eq!(
            parse_ingredients("rice, beans,,salsa "),
            ["rice", " beans", "", "salsa "]
        );
        assert_eq!(parse_ingredients(""), [""]);
    }

    #[test]
    fn ingredients_text_round_trips_through_parse() {
        let meal = Meal::new("Tacos", Category::Dinner, ["beef", "tortillas", "salsa"]).unwrap();
        assert_eq!(meal.ingredients_text(), "beef, tortillas, salsa");

        let again = Meal::new(
            meal.name(),
            meal.category(),
            parse_ingredients(&meal.ingredients_text()),
        )
        .unwrap();
        assert_eq!(again, meal);
    }
}
