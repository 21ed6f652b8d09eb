//! Lesson progress use-case service.
//!
//! # Invariants
//! - Seeding is idempotent; the curriculum never grows past `SEED_LESSONS`.
//! - Completion is one-way.

use crate::model::lesson::{Lesson, LessonId, LessonProgress, SEED_LESSONS};
use crate::repo::lesson_repo::LessonRepository;
use crate::repo::{RepoError, RepoResult};
use log::{info, warn};

pub struct ProgressService<R: LessonRepository> {
    repo: R,
}

impl<R: LessonRepository> ProgressService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Inserts the fixed lessons that are not stored yet.
    ///
    /// Returns the number of lessons inserted by this call.
    pub fn seed_lessons_if_absent(&self) -> RepoResult<usize> {
        let inserted = self.repo.seed_lessons(&SEED_LESSONS)?;
        info!("event=lessons_seeded module=progress status=ok inserted={inserted}");
        Ok(inserted)
    }

    /// All lessons in study order.
    pub fn list_lessons(&self) -> RepoResult<Vec<Lesson>> {
        self.repo.list_lessons()
    }

    /// Marks a lesson as completed.
    ///
    /// Unknown ids are ignored so a stale UI reference cannot fail the call.
    /// Use [`Self::try_complete_lesson`] to observe them.
    pub fn complete_lesson(&self, id: LessonId) -> RepoResult<()> {
        match self.try_complete_lesson(id) {
            Err(RepoError::LessonNotFound(missing)) => {
                warn!("event=lesson_completed module=progress status=ignored reason=not_found id={missing}");
                Ok(())
            }
            other => other,
        }
    }

    /// Marks a lesson as completed, surfacing `LessonNotFound`.
    pub fn try_complete_lesson(&self, id: LessonId) -> RepoResult<()> {
        self.repo.mark_completed(id)?;
        info!("event=lesson_completed module=progress status=ok id={id}");
        Ok(())
    }

    pub fn progress(&self) -> RepoResult<LessonProgress> {
        let lessons = self.repo.list_lessons()?;
        Ok(LessonProgress {
            completed: lessons.iter().filter(|lesson| lesson.completed).count(),
            total: lessons.len(),
        })
    }
}
