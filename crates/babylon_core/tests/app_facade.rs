use babylon_core::{
    BabylonApp, CoreConfig, CoreError, FixedClock, TransactionKind, WizardState,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn open_seeds_lessons_and_starts_with_empty_ledger() {
    let app = BabylonApp::open_in_memory().unwrap();

    assert_eq!(app.list_lessons().unwrap().len(), 3);
    assert_eq!(app.balance().unwrap(), Decimal::ZERO);
    assert_eq!(app.wizard().state(), WizardState::Asking(0));
}

#[test]
fn record_transaction_parses_form_text() {
    let app = BabylonApp::open_in_memory()
        .unwrap()
        .with_clock(FixedClock(date(2024, 6, 3)));

    app.record_transaction("income", "salary", "3000", "June")
        .unwrap();
    app.record_transaction("expense", "groceries", " 150,25 ", "")
        .unwrap();

    assert_eq!(app.balance().unwrap(), dec("2849.75"));
    let period = app.transactions_in_current_period().unwrap();
    assert_eq!(period.len(), 2);
    assert!(period.iter().all(|entry| entry.date == date(2024, 6, 3)));

    let summary = app.period_summary().unwrap();
    assert_eq!(summary.net, dec("2849.75"));
}

#[test]
fn invalid_amounts_surface_as_invalid_amount() {
    let app = BabylonApp::open_in_memory().unwrap();

    for amount in ["", "ten", "0", "-3"] {
        let err = app
            .record_transaction("expense", "x", amount, "")
            .unwrap_err();
        assert!(
            matches!(err, CoreError::InvalidAmount(_)),
            "amount `{amount}` gave {err}"
        );
    }
    assert_eq!(app.balance().unwrap(), Decimal::ZERO);
}

#[test]
fn kind_text_is_parsed_and_unknown_kinds_are_invalid_input() {
    let app = BabylonApp::open_in_memory().unwrap();

    app.record_transaction(" Income ", "bonus", "10", "").unwrap();
    let stored = app.transactions_in_current_period().unwrap();
    assert_eq!(stored[0].kind, TransactionKind::Income);

    let err = app
        .record_transaction("refund", "shop", "10", "")
        .unwrap_err();
    assert!(matches!(err, CoreError::InvalidInput(_)), "got {err}");
    assert_eq!(app.transactions_in_current_period().unwrap().len(), 1);
}

#[test]
fn overflowing_ledger_totals_surface_as_invalid_amount() {
    let app = BabylonApp::open_in_memory().unwrap();
    for _ in 0..2 {
        app.record_transaction("income", "windfall", "50000000000000000000000000000", "")
            .unwrap();
    }

    assert!(matches!(app.balance(), Err(CoreError::InvalidAmount(_))));
    assert!(matches!(
        app.period_summary(),
        Err(CoreError::InvalidAmount(_))
    ));
}

#[test]
fn previous_month_entries_leave_the_current_period() {
    let dir = tempfile::tempdir().unwrap();
    let config = CoreConfig::default().with_db_path(dir.path().join("ledger.db"));

    let app = BabylonApp::open(&config)
        .unwrap()
        .with_clock(FixedClock(date(2024, 4, 30)));
    app.record_transaction("income", "freelance", "500", "")
        .unwrap();
    app.close().unwrap();

    let app = BabylonApp::open(&config)
        .unwrap()
        .with_clock(FixedClock(date(2024, 5, 1)));
    app.record_transaction("expense", "rent", "200", "")
        .unwrap();

    let period = app.transactions_in_current_period().unwrap();
    assert_eq!(period.len(), 1);
    assert_eq!(period[0].category, "rent");
    assert_eq!(app.balance().unwrap(), dec("300"));
    assert_eq!(app.list_lessons().unwrap().len(), 3);
}

#[test]
fn lesson_completion_through_facade() {
    let app = BabylonApp::open_in_memory().unwrap();
    let lessons = app.list_lessons().unwrap();

    app.complete_lesson(lessons[2].id).unwrap();
    app.complete_lesson(12_345).unwrap();
    assert!(matches!(
        app.try_complete_lesson(12_345),
        Err(CoreError::LessonNotFound(12_345))
    ));

    let progress = app.lesson_progress().unwrap();
    assert_eq!(progress.completed, 1);
    assert_eq!(progress.total, 3);
}

#[test]
fn projection_through_facade() {
    let app = BabylonApp::open_in_memory().unwrap();

    let projection = app.project("10000", "0.125", Some("medium")).unwrap();
    assert_eq!(projection.term_months, 20);
    assert!((projection.final_amount - 12_168.98).abs() < 0.01);

    let percent = app
        .project_with_percent_rate("10000", "12,5", Some("medium"))
        .unwrap();
    assert!((percent.final_amount - projection.final_amount).abs() < 1e-9);

    assert!(matches!(
        app.project("-5", "0.1", Some("short")),
        Err(CoreError::InvalidInput(_))
    ));
    assert!(matches!(
        app.project("100", "0.1", None),
        Err(CoreError::InvalidInput(_))
    ));
}

#[test]
fn wizard_session_through_facade() {
    let mut app = BabylonApp::open_in_memory().unwrap();

    assert_eq!(app.back(), WizardState::Asking(0));
    app.advance("idea");
    for answer in ["customers", "2000", "4000", "word of mouth"] {
        app.advance(answer);
    }
    assert_eq!(app.wizard().state(), WizardState::Summary);

    let summary = app.summary().unwrap();
    assert_eq!(summary.entries[0].answer, "idea");
    assert_eq!(summary.entries[4].answer, "word of mouth");

    app.reset();
    assert_eq!(app.wizard().state(), WizardState::Asking(0));
    assert!(app.wizard().answers().is_empty());
    assert!(app.summary().is_none());
}
