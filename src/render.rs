use mealweek_mealplan::WeekPlan;
use mealweek_shared::Day;
use strum::VariantArray;

use crate::config::RenderConfig;

/// Text views of a session.
pub struct Renderer<'a> {
    config: &'a RenderConfig,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }

    /// `day` heading followed by one line per slot.
    pub fn day(&self, plan: &WeekPlan, day: Day) -> String {
        let slots = plan.day(day).map(|(slot, meal)| match meal {
            Some(meal) => format!("  {slot}: {} ({})\n", meal.name(), meal.category()),
            None => format!("  {slot}: {}\n", self.config.empty_label),
        });

        std::iter::once(format!("{day}\n")).chain(slots).collect()
    }

    pub fn week(&self, plan: &WeekPlan) -> String {
        Day::VARIANTS
            .iter()
            .map(|&day| self.day(plan, day))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn grocery_list(&self, ingredients: &[String]) -> String {
        if ingredients.is_empty() {
            return format!("{}\n", self.config.empty_list_message);
        }

        ingredients
            .iter()
            .map(|ingredient| format!("[ ] {ingredient}\n"))
            .collect()
    }
}
