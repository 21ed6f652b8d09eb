//! Lesson model and the fixed seed curriculum.
//!
//! # Invariants
//! - Identity for seeding is the `(title, order)` pair.
//! - `completed` never reverts to `false`.

use serde::{Deserialize, Serialize};

pub type LessonId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: LessonId,
    pub title: String,
    pub body: String,
    /// Study sequence, 1-based.
    pub order: u32,
    pub completed: bool,
}

/// Seed record inserted on first initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonSeed {
    pub title: &'static str,
    pub body: &'static str,
    pub order: u32,
}

/// The first three laws of gold.
pub const SEED_LESSONS: [LessonSeed; 3] = [
    LessonSeed {
        title: "1st Law: Save a Tenth of What You Earn",
        body: "The first law of wealth is simple: keep at least one tenth of everything you earn. \
               This money is not for spending, it is the start of your treasure. \
               Pay yourself first, before bills or expenses. \
               This is the foundation of lasting prosperity.",
        order: 1,
    },
    LessonSeed {
        title: "2nd Law: Control Your Expenses",
        body: "Do not confuse necessary expenses with passing desires. \
               Question every purchase: 'Is this really necessary?' \
               Expenses grow to consume all income unless you control them on purpose. \
               Live on less than you earn and you will have gold to multiply.",
        order: 2,
    },
    LessonSeed {
        title: "3rd Law: Make Your Gold Multiply",
        body: "Saved money does not create wealth on its own. Put it to work! \
               Invest wisely in businesses or safe loans that bring a return. \
               Every coin you invest is a worker bringing back more gold. \
               The secret is not only to keep, but to grow.",
        order: 3,
    },
];

/// Completion counts for the lesson list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonProgress {
    pub completed: usize,
    pub total: usize,
}

impl LessonProgress {
    pub fn is_finished(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}
