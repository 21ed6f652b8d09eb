use babylon_core::db::open_db_in_memory;
use babylon_core::{
    LessonRepository, ProgressService, RepoError, SqliteLessonRepository, SEED_LESSONS,
};

#[test]
fn seeding_twice_keeps_exactly_three_lessons_in_order() {
    let conn = open_db_in_memory().unwrap();
    let service = ProgressService::new(SqliteLessonRepository::try_new(&conn).unwrap());

    assert_eq!(service.seed_lessons_if_absent().unwrap(), 3);
    assert_eq!(service.seed_lessons_if_absent().unwrap(), 0);

    let lessons = service.list_lessons().unwrap();
    assert_eq!(lessons.len(), 3);
    for (lesson, seed) in lessons.iter().zip(SEED_LESSONS.iter()) {
        assert_eq!(lesson.title, seed.title);
        assert_eq!(lesson.body, seed.body);
        assert_eq!(lesson.order, seed.order);
        assert!(!lesson.completed);
    }
    assert_eq!(
        lessons.iter().map(|lesson| lesson.order).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[test]
fn reseeding_does_not_reset_completion() {
    let conn = open_db_in_memory().unwrap();
    let service = ProgressService::new(SqliteLessonRepository::try_new(&conn).unwrap());
    service.seed_lessons_if_absent().unwrap();

    let second = service.list_lessons().unwrap()[1].id;
    service.complete_lesson(second).unwrap();
    service.seed_lessons_if_absent().unwrap();

    let lessons = service.list_lessons().unwrap();
    assert_eq!(lessons.len(), 3);
    assert!(lessons[1].completed);
}

#[test]
fn lessons_list_by_order_not_insertion() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteLessonRepository::try_new(&conn).unwrap();
    repo.seed_lessons(&[SEED_LESSONS[2], SEED_LESSONS[0], SEED_LESSONS[1]])
        .unwrap();

    let orders: Vec<u32> = repo
        .list_lessons()
        .unwrap()
        .into_iter()
        .map(|lesson| lesson.order)
        .collect();
    assert_eq!(orders, vec![1, 2, 3]);
}

#[test]
fn completion_is_monotonic_and_repeatable() {
    let conn = open_db_in_memory().unwrap();
    let service = ProgressService::new(SqliteLessonRepository::try_new(&conn).unwrap());
    service.seed_lessons_if_absent().unwrap();
    let first = service.list_lessons().unwrap()[0].id;

    service.complete_lesson(first).unwrap();
    service.complete_lesson(first).unwrap();

    let lessons = service.list_lessons().unwrap();
    assert!(lessons[0].completed);
    assert!(!lessons[1].completed);

    let progress = service.progress().unwrap();
    assert_eq!(progress.completed, 1);
    assert_eq!(progress.total, 3);
    assert!(!progress.is_finished());
}

#[test]
fn unknown_lesson_is_ignored_by_default_and_reported_by_strict_call() {
    let conn = open_db_in_memory().unwrap();
    let service = ProgressService::new(SqliteLessonRepository::try_new(&conn).unwrap());
    service.seed_lessons_if_absent().unwrap();

    service.complete_lesson(9_999).unwrap();
    assert!(service
        .list_lessons()
        .unwrap()
        .iter()
        .all(|lesson| !lesson.completed));

    let err = service.try_complete_lesson(9_999).unwrap_err();
    assert!(matches!(err, RepoError::LessonNotFound(9_999)));
}

#[test]
fn get_lesson_returns_none_for_unknown_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteLessonRepository::try_new(&conn).unwrap();
    repo.seed_lessons(&SEED_LESSONS).unwrap();

    let first = repo.list_lessons().unwrap()[0].clone();
    assert_eq!(repo.get_lesson(first.id).unwrap(), Some(first));
    assert_eq!(repo.get_lesson(-1).unwrap(), None);
}
