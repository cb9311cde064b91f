//! Multi-criteria evaluation form
//!
//! Holds the in-progress evaluation: who is evaluated and which question was
//! picked per criterion. Picking again for the same criterion replaces the
//! previous answer. Unanswered criteria are submitted as 0.

use std::collections::BTreeMap;

use tracing::debug;

use crate::criteria::{Criterion, QuestionBank};
use crate::error::{EvaluationError, Result};
use crate::model::NewEvaluation;
use crate::scoring::Scores;

/// Picked answer for one criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer {
    /// Question picked
    pub question_id: u32,
    /// Points awarded
    pub points: u32,
}

/// Evaluation being filled in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluationForm {
    employee_id: Option<String>,
    answers: BTreeMap<Criterion, Answer>,
}

impl EvaluationForm {
    /// Empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose the employee to evaluate. An empty ID clears the selection.
    pub fn select_employee(&mut self, employee_id: impl Into<String>) {
        let id = employee_id.into();
        self.employee_id = (!id.trim().is_empty()).then_some(id);
    }

    /// Currently selected employee
    pub fn employee(&self) -> Option<&str> {
        self.employee_id.as_deref()
    }

    /// Record an answer by question ID, looking up its points in `bank`
    pub fn answer(&mut self, bank: &QuestionBank, criterion: Criterion, question_id: u32) -> Result<u32> {
        let question = bank.find(criterion, question_id)?;
        self.set_answer(
            criterion,
            Answer {
                question_id,
                points: question.points,
            },
        );
        Ok(question.points)
    }

    /// Record an answer directly
    pub fn set_answer(&mut self, criterion: Criterion, answer: Answer) {
        self.answers.insert(criterion, answer);
    }

    /// Answer for a criterion, if picked
    pub fn answer_for(&self, criterion: Criterion) -> Option<Answer> {
        self.answers.get(&criterion).copied()
    }

    /// Criteria still without an answer
    pub fn unanswered(&self) -> Vec<Criterion> {
        Criterion::ALL
            .into_iter()
            .filter(|c| !self.answers.contains_key(c))
            .collect()
    }

    /// Current scores, 0 for unanswered criteria
    pub fn scores(&self) -> Scores {
        let mut scores = Scores::default();
        for (criterion, answer) in &self.answers {
            scores.set(*criterion, answer.points);
        }
        scores
    }

    /// Build the payload for submission
    ///
    /// Fails if no employee is selected. The form is left untouched so the
    /// caller can retry; call [`reset`](Self::reset) once the backend accepts.
    pub fn submit(&self, evaluator_id: &str) -> Result<NewEvaluation> {
        let employee_id = self
            .employee_id
            .clone()
            .ok_or(EvaluationError::NoEmployeeSelected)?;

        if evaluator_id.trim().is_empty() {
            return Err(EvaluationError::MissingEvaluator);
        }

        let payload = NewEvaluation {
            employee_id,
            evaluator_id: evaluator_id.to_string(),
            scores: self.scores(),
        };

        debug!(
            employee_id = %payload.employee_id,
            total = payload.scores.total(),
            unanswered = self.unanswered().len(),
            "Evaluation payload built"
        );
        Ok(payload)
    }

    /// Clear selection and answers
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
