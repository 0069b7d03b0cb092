use mealweek_mealplan::{GroceryListBuilder, Meal, MealInput, WeekPlan, parse_ingredients};
use mealweek_shared::{Category, Day, Reason, Slot};

fn input(name: &str, ingredients: &[&str]) -> MealInput {
    MealInput::new(name, Category::Dinner, ingredients.iter().copied())
}

#[test]
fn assign_then_get_returns_the_same_meal() {
    let mut plan = WeekPlan::new();
    let meal = Meal::new("Porridge", Category::Breakfast, ["oats", "milk", "honey"]).unwrap();

    plan.assign(Day::Thursday, Slot::Breakfast, meal.clone())
        .unwrap();

    assert_eq!(plan.get(Day::Thursday, Slot::Breakfast), Some(&meal));
}

#[test]
fn clear_then_get_is_empty() {
    let mut plan = WeekPlan::new();
    plan.assign(Day::Monday, Slot::Snack, input("Apple", &["apple"]))
        .unwrap();

    let removed = plan.clear(Day::Monday, Slot::Snack);
    assert_eq!(removed.unwrap().name(), "Apple");
    assert_eq!(plan.get(Day::Monday, Slot::Snack), None);

    plan.clear(Day::Monday, Slot::Snack);
    assert_eq!(plan.get(Day::Monday, Slot::Snack), None);
}

#[test]
fn compute_is_idempotent() {
    let mut plan = WeekPlan::new();
    plan.assign(Day::Monday, Slot::Lunch, input("BLT", &["bacon", "Lettuce", "tomato"]))
        .unwrap();
    plan.assign(Day::Saturday, Slot::Dinner, input("Pizza", &["dough", "Tomato"]))
        .unwrap();

    let first = GroceryListBuilder::compute(&plan);
    let second = GroceryListBuilder::compute(&plan);

    assert_eq!(first, second);
    assert_eq!(first, ["bacon", "dough", "Lettuce", "tomato"]);
}

#[test]
fn dedup_keeps_first_seen_casing() {
    let mut plan = WeekPlan::new();
    plan.assign(Day::Monday, Slot::Breakfast, input("Omelette", &["Eggs"]))
        .unwrap();
    plan.assign(Day::Tuesday, Slot::Breakfast, input("Shakshuka", &["eggs"]))
        .unwrap();

    assert_eq!(GroceryListBuilder::compute(&plan), ["Eggs"]);
}

#[test]
fn sort_ignores_case() {
    let mut plan = WeekPlan::new();
    plan.assign(
        Day::Wednesday,
        Slot::Snack,
        input("Fruit salad", &["banana", "Apple", "cherry"]),
    )
    .unwrap();

    assert_eq!(
        GroceryListBuilder::compute(&plan),
        ["Apple", "banana", "cherry"]
    );
}

#[test]
fn sort_follows_accents_and_punctuation() {
    let mut plan = WeekPlan::new();
    plan.assign(
        Day::Friday,
        Slot::Dinner,
        input(
            "Pantry",
            &["cheese", "chả giò", "cherry", "ŭmami", "vinegar", "a{", "a1"],
        ),
    )
    .unwrap();

    assert_eq!(
        GroceryListBuilder::compute(&plan),
        ["a{", "a1", "chả giò", "cheese", "cherry", "ŭmami", "vinegar"]
    );
}

#[test]
fn empty_plan_yields_empty_list() {
    assert_eq!(GroceryListBuilder::compute(&WeekPlan::new()), Vec::<String>::new());
}

#[test]
fn validation_reasons() {
    let mut plan = WeekPlan::new();

    let err = plan
        .assign(Day::Monday, Slot::Breakfast, input("", &["milk"]))
        .unwrap_err();
    assert_eq!(err.reason, Reason::EmptyName);

    let err = plan
        .assign(Day::Monday, Slot::Lunch, input("Soup", &[]))
        .unwrap_err();
    assert_eq!(err.reason, Reason::NoIngredients);

    assert!(plan.is_empty());
}

#[test]
fn overwrite_drops_replaced_ingredients() {
    let mut plan = WeekPlan::new();
    plan.assign(Day::Friday, Slot::Dinner, input("Fish", &["salmon", "lemon"]))
        .unwrap();
    plan.assign(Day::Saturday, Slot::Lunch, input("Tea", &["Lemon"]))
        .unwrap();

    plan.assign(Day::Friday, Slot::Dinner, input("Steak", &["beef"]))
        .unwrap();

    assert_eq!(GroceryListBuilder::compute(&plan), ["beef", "Lemon"]);
}

#[test]
fn plurals_are_not_merged() {
    let mut plan = WeekPlan::new();
    plan.assign(Day::Monday, Slot::Breakfast, input("Egg cup", &["egg", "eggs"]))
        .unwrap();

    assert_eq!(GroceryListBuilder::compute(&plan), ["egg", "eggs"]);
}

#[test]
fn typed_ingredient_text_is_trimmed_once() {
    let mut plan = WeekPlan::new();
    let meal = MealInput::new(
        "Burrito",
        Category::Lunch,
        parse_ingredients(" rice , beans,, Salsa ,"),
    );
    plan.assign(Day::Monday, Slot::Lunch, meal).unwrap();

    let stored = plan.get(Day::Monday, Slot::Lunch).unwrap();
    assert_eq!(stored.ingredients(), ["rice", "beans", "Salsa"]);
    assert_eq!(
        GroceryListBuilder::compute(&plan),
        ["beans", "rice", "Salsa"]
    );
}

#[test]
fn blank_ingredient_text_is_rejected() {
    let mut plan = WeekPlan::new();
    let err = plan
        .assign(
            Day::Monday,
            Slot::Lunch,
            MealInput::new("Air", Category::Lunch, parse_ingredients(" , ,")),
        )
        .unwrap_err();

    assert_eq!(err.reason, Reason::NoIngredients);
}
