//! Evaluation error types

use thiserror::Error;

use crate::criteria::Criterion;

/// Result type for evaluation operations
pub type Result<T> = std::result::Result<T, EvaluationError>;

/// Errors raised while filling in or validating an evaluation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvaluationError {
    /// Submit attempted before choosing who is evaluated
    #[error("no employee selected")]
    NoEmployeeSelected,

    /// Submit attempted without an evaluator
    #[error("evaluator ID is required")]
    MissingEvaluator,

    /// Criterion key not recognised
    #[error("unknown criterion '{0}'")]
    UnknownCriterion(String),

    /// Question ID not present for the criterion
    #[error("question {question_id} not found for {criterion}")]
    UnknownQuestion {
        /// Criterion searched
        criterion: Criterion,
        /// Requested question
        question_id: u32,
    },
}

impl EvaluationError {
    /// Create an UnknownQuestion error
    pub fn unknown_question(criterion: Criterion, question_id: u32) -> Self {
        Self::UnknownQuestion {
            criterion,
            question_id,
        }
    }
}
