//! Lesson repository contracts and SQLite implementation.
//!
//! # Invariants
//! - Seeding uses `INSERT OR IGNORE` against `UNIQUE(title, lesson_order)`.
//! - The only mutation after seeding is setting `completed = 1`.

use crate::model::lesson::{Lesson, LessonId, LessonSeed};
use crate::repo::{bool_to_int, ensure_connection_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const LESSON_SELECT_SQL: &str = "SELECT
    id,
    title,
    body,
    lesson_order,
    completed
FROM lessons";

pub trait LessonRepository {
    /// Inserts every seed not already present; returns how many were new.
    fn seed_lessons(&self, seeds: &[LessonSeed]) -> RepoResult<usize>;
    fn list_lessons(&self) -> RepoResult<Vec<Lesson>>;
    fn get_lesson(&self, id: LessonId) -> RepoResult<Option<Lesson>>;
    /// Sets `completed = 1`. Returns `LessonNotFound` for unknown ids.
    fn mark_completed(&self, id: LessonId) -> RepoResult<()>;
}

pub struct SqliteLessonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteLessonRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "lessons")?;
        Ok(Self { conn })
    }
}

impl LessonRepository for SqliteLessonRepository<'_> {
    fn seed_lessons(&self, seeds: &[LessonSeed]) -> RepoResult<usize> {
        let tx = self.conn.unchecked_transaction()?;
        let mut inserted = 0;
        for seed in seeds {
            inserted += tx.execute(
                "INSERT OR IGNORE INTO lessons (title, body, lesson_order, completed)
                 VALUES (?1, ?2, ?3, 0);",
                params![seed.title, seed.body, seed.order],
            )?;
        }
        tx.commit()?;
        Ok(inserted)
    }

    fn list_lessons(&self) -> RepoResult<Vec<Lesson>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{LESSON_SELECT_SQL} ORDER BY lesson_order ASC, id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut lessons = Vec::new();
        while let Some(row) = rows.next()? {
            lessons.push(parse_lesson_row(row)?);
        }
        Ok(lessons)
    }

    fn get_lesson(&self, id: LessonId) -> RepoResult<Option<Lesson>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{LESSON_SELECT_SQL} WHERE id = ?1;"))?;
        let row = stmt
            .query_row([id], |row| Ok(parse_lesson_row(row)))
            .optional()?;
        row.transpose()
    }

    fn mark_completed(&self, id: LessonId) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE lessons SET completed = ?1 WHERE id = ?2;",
            params![bool_to_int(true), id],
        )?;

        if changed == 0 {
            return Err(RepoError::LessonNotFound(id));
        }

        Ok(())
    }
}

fn parse_lesson_row(row: &Row<'_>) -> RepoResult<Lesson> {
    let completed = match row.get::<_, i64>("completed")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid completed value `{other}` in lessons.completed"
            )));
        }
    };

    Ok(Lesson {
        id: row.get("id")?,
        title: row.get("title")?,
        body: row.get("body")?,
        order: row.get("lesson_order")?,
        completed,
    })
}
