//! Business plan wizard.
//!
//! # Responsibility
//! - Step through the fixed five-question business plan questionnaire.
//! - Build the summary shown once every question has been visited.
//!
//! # Invariants
//! - `current_step` stays within `0..=QUESTION_COUNT`.
//! - `Summary` is left only through `reset()`.
//! - Answers live in memory for one session and are never persisted.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;

pub const QUESTION_COUNT: usize = 5;

/// Shown in the summary for questions left blank.
pub const NOT_PROVIDED: &str = "Not provided";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanQuestion {
    pub title: &'static str,
    pub hint: &'static str,
    /// Section heading used in the rendered summary.
    pub heading: &'static str,
}

pub const PLAN_QUESTIONS: [PlanQuestion; QUESTION_COUNT] = [
    PlanQuestion {
        title: "What is your business idea?",
        hint: "Briefly describe what you want to create or sell",
        heading: "Business idea",
    },
    PlanQuestion {
        title: "Who is your ideal customer?",
        hint: "Age, profession, needs and purchasing power",
        heading: "Target audience",
    },
    PlanQuestion {
        title: "How much do you need to invest up front?",
        hint: "Equipment, stock, marketing and so on",
        heading: "Initial investment",
    },
    PlanQuestion {
        title: "What is your projected monthly revenue?",
        hint: "Based on market research and competitors",
        heading: "Projected revenue",
    },
    PlanQuestion {
        title: "How will you promote your business?",
        hint: "Social media, word of mouth, paid ads...",
        heading: "Marketing strategy",
    },
];

const WISDOM_QUOTE: &str = "\"Gold cometh gladly and in increasing quantity to any man who will \
put by not less than one-tenth of his earnings to create an estate for his future.\"";

const NEXT_STEPS: [&str; 5] = [
    "Validate your idea with 10 potential customers",
    "Build a prototype or minimum version",
    "Work out your break-even point",
    "Keep 10% of revenue as profit",
    "Reinvest 30% in growing the business",
];

const WARNINGS: [&str; 3] = [
    "Do not mix personal and business finances",
    "Keep an emergency reserve of 3 to 6 months",
    "Seek mentoring from people who already have results",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WizardState {
    /// Waiting for the answer to question `0..QUESTION_COUNT`.
    Asking(usize),
    Summary,
}

/// "Question n of total" position for the progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WizardProgress {
    /// 1-based question number, clamped to `total` in the summary.
    pub position: usize,
    pub total: usize,
    pub complete: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanWizard {
    current_step: usize,
    answers: BTreeMap<usize, String>,
}

impl PlanWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> WizardState {
        if self.current_step >= QUESTION_COUNT {
            WizardState::Summary
        } else {
            WizardState::Asking(self.current_step)
        }
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Question being asked, `None` in the summary.
    pub fn current_question(&self) -> Option<&'static PlanQuestion> {
        PLAN_QUESTIONS.get(self.current_step)
    }

    pub fn answer(&self, step: usize) -> Option<&str> {
        self.answers.get(&step).map(String::as_str)
    }

    pub fn answers(&self) -> &BTreeMap<usize, String> {
        &self.answers
    }

    pub fn progress(&self) -> WizardProgress {
        WizardProgress {
            position: (self.current_step + 1).min(QUESTION_COUNT),
            total: QUESTION_COUNT,
            complete: self.state() == WizardState::Summary,
        }
    }

    /// Records `text` for the current question and moves forward.
    ///
    /// Blank text keeps any earlier answer for this step. Does nothing once
    /// the summary is reached.
    pub fn advance(&mut self, text: &str) -> WizardState {
        if self.state() == WizardState::Summary {
            return WizardState::Summary;
        }

        let answer = text.trim();
        if !answer.is_empty() {
            self.answers.insert(self.current_step, answer.to_string());
        }
        self.current_step += 1;
        self.state()
    }

    /// Steps back one question. No-op on the first question and in the summary.
    pub fn back(&mut self) -> WizardState {
        if let WizardState::Asking(step) = self.state() {
            if step > 0 {
                self.current_step = step - 1;
            }
        }
        self.state()
    }

    /// Drops all answers and returns to the first question.
    pub fn reset(&mut self) {
        self.current_step = 0;
        self.answers.clear();
    }

    /// Summary of the plan, available only once every question was visited.
    pub fn summary(&self) -> Option<PlanSummary> {
        if self.state() != WizardState::Summary {
            return None;
        }

        let entries = PLAN_QUESTIONS
            .iter()
            .enumerate()
            .map(|(step, question)| {
                let answer = self.answers.get(&step);
                SummaryEntry {
                    question_title: question.title,
                    heading: question.heading,
                    answer: answer.cloned().unwrap_or_else(|| NOT_PROVIDED.to_string()),
                    provided: answer.is_some(),
                }
            })
            .collect();

        Some(PlanSummary { entries })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryEntry {
    pub question_title: &'static str,
    pub heading: &'static str,
    /// Stored answer or [`NOT_PROVIDED`].
    pub answer: String,
    pub provided: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
    pub entries: Vec<SummaryEntry>,
}

impl PlanSummary {
    /// Plain-text plan: executive summary followed by the fixed guidance.
    pub fn render(&self) -> String {
        let mut out = String::from("YOUR BUSINESS PLAN\n\nEXECUTIVE SUMMARY\n");
        for entry in &self.entries {
            let _ = write!(
                out,
                "\n{}:\n{}\n",
                entry.heading.to_uppercase(),
                entry.answer
            );
        }

        out.push_str("\nBABYLONIAN WISDOM\n\n");
        out.push_str(WISDOM_QUOTE);
        out.push_str("\n\nNEXT STEPS:\n");
        for (index, step) in NEXT_STEPS.iter().enumerate() {
            let _ = writeln!(out, "{}. {step}", index + 1);
        }
        out.push_str("\nWARNINGS:\n");
        for warning in WARNINGS {
            let _ = writeln!(out, "- {warning}");
        }
        out
    }
}
