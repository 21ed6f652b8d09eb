use babylon_core::{PeriodSummary, Projection, TermBucket, Transaction, TransactionKind};

#[test]
fn kinds_serialize_as_snake_case() {
    assert_eq!(
        serde_json::to_string(&TransactionKind::Income).unwrap(),
        "\"income\""
    );
    assert_eq!(
        serde_json::to_string(&TermBucket::Medium).unwrap(),
        "\"medium\""
    );
}

#[test]
fn projection_serializes_for_ui() {
    let projection: Projection = babylon_core::project(1000.0, 0.0, TermBucket::Short).unwrap();
    let json = serde_json::to_value(projection).unwrap();
    assert_eq!(json["term_months"], 10);
    assert_eq!(json["principal"], 1000.0);
}

#[test]
fn empty_period_summary_is_zero() {
    let summary = PeriodSummary::from_transactions(&Vec::<Transaction>::new()).unwrap();
    assert_eq!(summary, PeriodSummary::default());
    assert_eq!(summary.count, 0);
}
