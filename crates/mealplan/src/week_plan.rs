use mealweek_shared::{Day, Slot};
use strum::VariantArray;

use crate::{Meal, MealInput};

const DAYS: usize = 7;
const SLOTS: usize = 4;

/// Meal assignments for every day and slot of one week.
///
/// Every `Day` x `Slot` pair always exists; an unassigned slot holds `None`.
/// The plan is owned by a single session and mutated through `&mut self`,
/// so it needs no internal locking.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeekPlan {
    days: [[Option<Meal>; SLOTS]; DAYS],
}

impl WeekPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `meal` and stores it at `day`/`slot`, replacing and returning
    /// whatever was there.
    pub fn assign(
        &mut self,
        day: Day,
        slot: Slot,
        meal: impl Into<MealInput>,
    ) -> mealweek_shared::Result<Option<Meal>> {
        let meal = Meal::try_from(meal.into())?;

        Ok(self.slot_mut(day, slot).replace(meal))
    }

    /// Like [`WeekPlan::assign`] with day and slot given as user-entered text.
    pub fn assign_raw(
        &mut self,
        day: &str,
        slot: &str,
        meal: impl Into<MealInput>,
    ) -> mealweek_shared::Result<Option<Meal>> {
        let day = Day::parse(day)?;
        let slot = Slot::parse(slot)?;

        self.assign(day, slot, meal)
    }

    pub fn clear(&mut self, day: Day, slot: Slot) -> Option<Meal> {
        self.slot_mut(day, slot).take()
    }

    pub fn clear_day(&mut self, day: Day) {
        self.days[day.index()] = Default::default();
    }

    pub fn get(&self, day: Day, slot: Slot) -> Option<&Meal> {
        self.days[day.index()][slot.index()].as_ref()
    }

    /// The four slots of `day` in breakfast, lunch, dinner, snack order.
    pub fn day(&self, day: Day) -> impl Iterator<Item = (Slot, Option<&Meal>)> + '_ {
        Slot::VARIANTS
            .iter()
            .map(move |&slot| (slot, self.get(day, slot)))
    }

    /// Every assigned meal, Monday to Sunday, each day in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Day, Slot, &Meal)> + '_ {
        Day::VARIANTS.iter().flat_map(move |&day| {
            self.day(day)
                .filter_map(move |(slot, meal)| meal.map(|meal| (day, slot, meal)))
        })
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    fn slot_mut(&mut self, day: Day, slot: Slot) -> &mut Option<Meal> {
        &mut self.days[day.index()][slot.index()]
    }
}
