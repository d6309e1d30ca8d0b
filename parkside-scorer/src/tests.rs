//! Unit coverage for the scoring engine and search pipeline.
#![forbid(unsafe_code)]
#![expect(
    clippy::float_arithmetic,
    clippy::indexing_slicing,
    clippy::expect_used,
    reason = "tests compare floating point results and index ranked output"
)]

use parkside_core::{
    Category, DistanceDecay, ScoreWeights, ScoringRequest, TaggedPoint, classify,
    test_support::{charger, food_place, metres_north, named_playground, playground, point},
};
use rstest::{fixture, rstest};

use crate::{DEFAULT_TOP_N, ScoringEngine, ScoringError, SearchOutcome, evaluate, score};

const LAT: f64 = 59.9139;
const LNG: f64 = 10.7522;

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    let delta = (actual - expected).abs();
    assert!(
        delta <= tolerance,
        "expected {expected}, got {actual} (|delta| = {delta})"
    );
}

#[fixture]
fn request() -> ScoringRequest {
    ScoringRequest::new(ScoreWeights::default(), 500.0).expect("valid request")
}

#[rstest]
fn co_located_food_and_distant_charger_scores_one(request: ScoringRequest) {
    let ranked = score(
        vec![playground(1, LAT, LNG)],
        &[food_place(2, LAT, LNG)],
        &[charger(3, metres_north(LAT, 1_000.0), LNG)],
        request.weights,
        request.ideal_distance_m,
    )
    .expect("all categories present");

    let best = &ranked[0];
    assert_close(best.food_distance_m, 0.0, 1.0e-6);
    assert_close(best.charger_distance_m, 1_000.0, 1.0e-3);
    assert_close(best.score, 1.0, 1.0e-9);
    assert_eq!(best.name, "Lekeplass");
}

#[rstest]
fn nearest_candidate_wins(request: ScoringRequest) {
    let engine = ScoringEngine::new(request);
    let food = [
        food_place(10, metres_north(LAT, 400.0), LNG),
        food_place(11, metres_north(LAT, 100.0), LNG),
        food_place(12, metres_north(LAT, 900.0), LNG),
    ];
    let chargers = [charger(20, metres_north(LAT, 250.0), LNG)];

    let ranked = engine.score_playground(playground(1, LAT, LNG), &food, &chargers);

    assert_close(ranked.food_distance_m, 100.0, 1.0e-3);
    assert_close(ranked.charger_distance_m, 250.0, 1.0e-3);
    // 0.8 from food plus 0.5 from the charger.
    assert_close(ranked.score, 1.3, 1.0e-6);
}

#[rstest]
fn output_is_sorted_by_descending_score(request: ScoringRequest) {
    let playgrounds = vec![
        playground(1, metres_north(LAT, 450.0), LNG),
        playground(2, LAT, LNG),
        playground(3, metres_north(LAT, 200.0), LNG),
    ];
    let food = [food_place(10, LAT, LNG)];
    let chargers = [charger(20, LAT, LNG)];

    let ranked = ScoringEngine::new(request)
        .rank(playgrounds, &food, &chargers)
        .expect("all categories present");

    let ids: Vec<i64> = ranked.iter().map(|entry| entry.point.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
    assert!(ranked.windows(2).all(|pair| pair[0].score >= pair[1].score));
}

#[rstest]
fn equal_scores_keep_input_order(request: ScoringRequest) {
    // Both playgrounds sit beyond the ideal distance of everything.
    let playgrounds = vec![
        named_playground(7, metres_north(LAT, 2_000.0), LNG, "First"),
        named_playground(3, metres_north(LAT, 3_000.0), LNG, "Second"),
        named_playground(5, metres_north(LAT, 4_000.0), LNG, "Third"),
    ];
    let food = [food_place(10, LAT, LNG)];
    let chargers = [charger(20, LAT, LNG)];

    let ranked = ScoringEngine::new(request)
        .rank(playgrounds, &food, &chargers)
        .expect("all categories present");

    let names: Vec<&str> = ranked.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
    assert!(ranked.iter().all(|entry| entry.score == 0.0));
}

#[rstest]
fn swapping_weights_flips_the_dominant_factor() {
    // Playground 1 is next to food, playground 2 next to a charger.
    let food_spot = LAT;
    let charger_spot = metres_north(LAT, 2_000.0);
    let playgrounds = vec![
        playground(1, food_spot, LNG),
        playground(2, charger_spot, LNG),
    ];
    let food = [food_place(10, food_spot, LNG)];
    let chargers = [charger(20, charger_spot, LNG)];
    let food_heavy = ScoreWeights {
        food: 3.0,
        charger: 1.0,
    };

    let first = score(playgrounds.clone(), &food, &chargers, food_heavy, 500.0)
        .expect("all categories present");
    let second = score(playgrounds, &food, &chargers, food_heavy.swapped(), 500.0)
        .expect("all categories present");

    assert_eq!(first[0].point.id, 1);
    assert_eq!(second[0].point.id, 2);
    assert_close(first[0].score, second[0].score, 1.0e-9);
}

#[rstest]
fn scores_are_not_normalised_by_weight_total(request: ScoringRequest) {
    let weights = ScoreWeights {
        food: 4.0,
        charger: 6.0,
    };
    let engine = ScoringEngine::new(ScoringRequest { weights, ..request });
    let ranked = engine.score_playground(
        playground(1, LAT, LNG),
        &[food_place(2, LAT, LNG)],
        &[charger(3, LAT, LNG)],
    );
    assert_close(ranked.score, 10.0, 1.0e-9);
}

#[rstest]
fn ranking_is_deterministic(request: ScoringRequest) {
    let playgrounds: Vec<TaggedPoint> = (0_i32..20)
        .map(|step| {
            playground(
                i64::from(step),
                metres_north(LAT, f64::from(step) * 37.0),
                LNG,
            )
        })
        .collect();
    let food = [food_place(100, metres_north(LAT, 300.0), LNG)];
    let chargers = [charger(200, metres_north(LAT, 500.0), LNG)];
    let engine = ScoringEngine::new(request);

    let first = engine
        .rank(playgrounds.clone(), &food, &chargers)
        .expect("all categories present");
    let second = engine
        .rank(playgrounds, &food, &chargers)
        .expect("all categories present");

    assert_eq!(first, second);
}

#[rstest]
#[case::no_playgrounds(Category::Playground)]
#[case::no_food(Category::FoodPlace)]
#[case::no_chargers(Category::Charger)]
fn empty_category_is_rejected(request: ScoringRequest, #[case] empty: Category) {
    let pick = |category: Category, point: TaggedPoint| {
        if category == empty { Vec::new() } else { vec![point] }
    };
    let playgrounds = pick(Category::Playground, playground(1, LAT, LNG));
    let food = pick(Category::FoodPlace, food_place(2, LAT, LNG));
    let chargers = pick(Category::Charger, charger(3, LAT, LNG));

    let err = ScoringEngine::new(request)
        .rank(playgrounds, &food, &chargers)
        .expect_err("empty category must be rejected");

    assert_eq!(err, ScoringError::EmptyCategory { category: empty });
}

/// Full proximity within a fixed radius, none beyond it.
struct StepDecay {
    radius_m: f64,
}

impl DistanceDecay for StepDecay {
    fn proximity(&self, distance_m: f64) -> f64 {
        if distance_m <= self.radius_m { 1.0 } else { 0.0 }
    }
}

#[rstest]
fn custom_decay_replaces_linear_falloff() {
    let engine = ScoringEngine::with_decay(ScoreWeights::default(), StepDecay { radius_m: 200.0 });
    let food = [food_place(10, metres_north(LAT, 150.0), LNG)];
    let chargers = [charger(20, metres_north(LAT, 150.0), LNG)];
    let playgrounds = vec![
        playground(2, metres_north(LAT, 600.0), LNG),
        playground(1, LAT, LNG),
    ];

    let ranked = engine
        .rank(playgrounds, &food, &chargers)
        .expect("all categories present");

    assert_eq!(engine.weights(), ScoreWeights::default());
    assert_eq!(ranked[0].point.id, 1);
    // Linear decay at 500 m would give 0.7 + 0.7 here.
    assert_close(ranked[0].score, 2.0, 1.0e-9);
    assert_close(ranked[1].score, 0.0, 1.0e-9);
}

#[rstest]
fn ranking_a_classified_dataset_matches_ranking_its_parts(request: ScoringRequest) {
    let points = vec![
        playground(1, LAT, LNG),
        point(2, LAT, LNG, &[("amenity", "bench")]),
        food_place(3, metres_north(LAT, 120.0), LNG),
        playground(4, metres_north(LAT, 300.0), LNG),
        charger(5, metres_north(LAT, 350.0), LNG),
    ];
    let engine = ScoringEngine::new(request);
    let classified = classify(points);
    let expected = engine
        .rank(
            classified.playgrounds.clone(),
            &classified.food_places,
            &classified.chargers,
        )
        .expect("all categories present");

    let ranked = engine
        .rank_classified(classified)
        .expect("all categories present");

    assert_eq!(ranked, expected);
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].point.id, 4);
}

#[rstest]
fn ranking_an_incomplete_classified_dataset_names_the_gap(request: ScoringRequest) {
    let classified = classify(vec![playground(1, LAT, LNG), food_place(2, LAT, LNG)]);

    let err = ScoringEngine::new(request)
        .rank_classified(classified)
        .expect_err("chargers are missing");

    assert_eq!(
        err,
        ScoringError::EmptyCategory {
            category: Category::Charger
        }
    );
}

#[rstest]
fn evaluate_reports_missing_food_without_ranking(request: ScoringRequest) {
    let evaluation = evaluate(
        vec![playground(1, LAT, LNG), charger(2, LAT, LNG)],
        request,
    )
    .expect("valid request");

    assert_eq!(
        evaluation.outcome,
        SearchOutcome::NoCompleteMatches {
            missing: vec![Category::FoodPlace]
        }
    );
    assert!(evaluation.outcome.top(DEFAULT_TOP_N).is_empty());
    assert_eq!(evaluation.classified.playgrounds.len(), 1);
}

#[rstest]
fn evaluate_rejects_invalid_request() {
    let request = ScoringRequest {
        weights: ScoreWeights::default(),
        ideal_distance_m: 0.0,
    };
    let err = evaluate(Vec::new(), request).expect_err("zero ideal distance");
    assert!(matches!(err, ScoringError::InvalidParameter(_)));
}

#[rstest]
fn top_truncates_to_available_entries(request: ScoringRequest) {
    let points = vec![
        playground(1, LAT, LNG),
        playground(2, metres_north(LAT, 100.0), LNG),
        food_place(3, LAT, LNG),
        charger(4, LAT, LNG),
    ];
    let evaluation = evaluate(points, request).expect("valid request");

    assert_eq!(evaluation.outcome.top(1).len(), 1);
    assert_eq!(evaluation.outcome.top(DEFAULT_TOP_N).len(), 2);
}

#[rstest]
fn outcome_serialises_with_status_tag(request: ScoringRequest) {
    let evaluation = evaluate(vec![playground(1, LAT, LNG)], request).expect("valid request");
    let json = serde_json::to_value(&evaluation.outcome).expect("serialise outcome");
    assert_eq!(json["status"], "no_complete_matches");
    assert_eq!(json["missing"][0], "food_place");
}
