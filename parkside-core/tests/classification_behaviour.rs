//! Behavioural coverage for category classification.

use std::cell::RefCell;

use parkside_core::{
    Category, Classified, TaggedPoint, classify,
    test_support::{charger, food_place, playground, point},
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Shared state for the classification scenarios.
pub struct TestContext {
    points: RefCell<Vec<TaggedPoint>>,
    classified: RefCell<Option<Classified>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        points: RefCell::new(Vec::new()),
        classified: RefCell::new(None),
    }
}

#[given("a playground, a cafe, a restaurant and a charging station")]
fn mixed_points(context: &TestContext) {
    *context.points.borrow_mut() = vec![
        playground(1, 59.91, 10.75),
        food_place(2, 59.91, 10.751),
        point(3, 59.911, 10.75, &[("amenity", "restaurant")]),
        charger(4, 59.912, 10.75),
    ];
}

#[given("a playground and an untagged point")]
fn playground_and_untagged(context: &TestContext) {
    *context.points.borrow_mut() = vec![
        playground(1, 59.91, 10.75),
        TaggedPoint::with_empty_tags(2, parkside_core::coordinate(59.91, 10.75)),
    ];
}

#[given("a playground that is also tagged as a cafe")]
fn doubly_tagged(context: &TestContext) {
    *context.points.borrow_mut() = vec![point(
        1,
        59.91,
        10.75,
        &[("leisure", "playground"), ("amenity", "cafe")],
    )];
}

#[when("I classify the points")]
fn classify_points(context: &TestContext) {
    let points = context.points.borrow().clone();
    *context.classified.borrow_mut() = Some(classify(points));
}

fn assert_counts(context: &TestContext, playgrounds: usize, food: usize, chargers: usize) {
    let borrowed = context.classified.borrow();
    let classified = borrowed.as_ref().expect("points must be classified");
    assert_eq!(classified.playgrounds.len(), playgrounds, "playgrounds");
    assert_eq!(classified.food_places.len(), food, "food places");
    assert_eq!(classified.chargers.len(), chargers, "chargers");
}

#[then("there is 1 playground, 2 food places and 1 charger")]
fn full_counts(context: &TestContext) {
    assert_counts(context, 1, 2, 1);
}

#[then("there is 1 playground, 0 food places and 0 chargers")]
fn playground_only(context: &TestContext) {
    assert_counts(context, 1, 0, 0);
}

#[then("the classification is complete")]
fn is_complete(context: &TestContext) {
    let borrowed = context.classified.borrow();
    let classified = borrowed.as_ref().expect("points must be classified");
    assert!(classified.is_complete());
}

#[then("the missing categories are food places and chargers")]
fn missing_food_and_chargers(context: &TestContext) {
    let borrowed = context.classified.borrow();
    let classified = borrowed.as_ref().expect("points must be classified");
    assert_eq!(
        classified.missing(),
        vec![Category::FoodPlace, Category::Charger]
    );
}

#[scenario(path = "tests/features/classification.feature", index = 0)]
fn splits_points_by_category(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/classification.feature", index = 1)]
fn excludes_untagged_points(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/classification.feature", index = 2)]
fn counts_doubly_tagged_point_once(context: TestContext) {
    let _ = context;
}
