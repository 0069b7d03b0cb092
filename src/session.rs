use mealweek_mealplan::{GroceryListBuilder, Meal, MealInput, WeekPlan};
use mealweek_shared::{Category, Day, Slot};

use crate::error::AppError;

/// One planning session: the week plan, the day being edited and the grocery
/// list last generated from the plan.
///
/// The grocery list is a snapshot. Changing the plan does not refresh it;
/// call [`Session::generate_list`] again.
#[derive(Debug, Default)]
pub struct Session {
    plan: WeekPlan,
    current_day: Day,
    grocery_list: Option<Vec<String>>,
}

/// A stored meal laid out the way it is typed in, ready to be changed and
/// assigned again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealDraft {
    pub day: Day,
    pub slot: Slot,
    pub name: String,
    pub category: Category,
    pub ingredients: String,
}

impl MealDraft {
    fn from_meal(day: Day, slot: Slot, meal: &Meal) -> Self {
        Self {
            day,
            slot,
            name: meal.name().to_owned(),
            category: meal.category(),
            ingredients: meal.ingredients_text(),
        }
    }

    /// The session command that recreates this meal.
    pub fn to_command_line(&self) -> String {
        format!(
            "add {} {} {} --category {} --day {}",
            self.slot,
            quote(&self.name),
            quote(&self.ingredients),
            self.category,
            self.day
        )
    }
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

impl Session {
    pub fn new(start_day: Day) -> Self {
        Self {
            current_day: start_day,
            ..Self::default()
        }
    }

    pub fn plan(&self) -> &WeekPlan {
        &self.plan
    }

    pub fn current_day(&self) -> Day {
        self.current_day
    }

    pub fn select_day(&mut self, day: Day) {
        tracing::debug!(day = %day, "day selected");
        self.current_day = day;
    }

    /// Assigns a meal to `slot` of the current day.
    pub fn add_meal(&mut self, slot: Slot, input: MealInput) -> Result<Option<Meal>, AppError> {
        self.add_meal_to(self.current_day, slot, input)
    }

    pub fn add_meal_to(
        &mut self,
        day: Day,
        slot: Slot,
        input: MealInput,
    ) -> Result<Option<Meal>, AppError> {
        let name = input.name.clone();
        let replaced = self.plan.assign(day, slot, input).inspect_err(|err| {
            tracing::info!(day = %day, slot = %slot, reason = %err.reason, "meal rejected");
        })?;

        match &replaced {
            Some(previous) => tracing::info!(
                day = %day,
                slot = %slot,
                meal = name.trim(),
                replaced = previous.name(),
                "meal replaced"
            ),
            None => tracing::info!(day = %day, slot = %slot, meal = name.trim(), "meal added"),
        }

        Ok(replaced)
    }

    pub fn edit_meal(&self, slot: Slot) -> Result<MealDraft, AppError> {
        let day = self.current_day;
        let meal = self
            .plan
            .get(day, slot)
            .ok_or(AppError::EmptySlot { day, slot })?;

        Ok(MealDraft::from_meal(day, slot, meal))
    }

    pub fn delete_meal(&mut self, slot: Slot) -> Option<Meal> {
        let removed = self.plan.clear(self.current_day, slot);
        if let Some(meal) = &removed {
            tracing::info!(day = %self.current_day, slot = %slot, meal = meal.name(), "meal deleted");
        }
        removed
    }

    pub fn clear_day(&mut self) {
        tracing::info!(day = %self.current_day, "day cleared");
        self.plan.clear_day(self.current_day);
    }

    pub fn generate_list(&mut self) -> &[String] {
        let list = GroceryListBuilder::compute(&self.plan);
        tracing::info!(items = list.len(), "grocery list generated");

        self.grocery_list.insert(list)
    }

    pub fn grocery_list(&self) -> Option<&[String]> {
        self.grocery_list.as_deref()
    }

    pub fn clear_list(&mut self) {
        tracing::info!("grocery list cleared");
        self.grocery_list = None;
    }
}
