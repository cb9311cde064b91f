//! eval360 - Evaluation
//!
//! Domain logic of the 360° evaluation: the six scored criteria, the
//! question bank, the evaluation form, star ratings and dashboard
//! statistics. No I/O; payload types are serde-ready for the REST client.
//!
//! # Example
//!
//! ```
//! use eval360_evaluation::{Criterion, EvaluationForm, Question, QuestionBank, star_rating};
//!
//! let bank = QuestionBank::from_pairs([(
//!     Criterion::Teamwork,
//!     vec![Question { id: 1, name: "Colabora".into(), points: 5 }],
//! )]);
//!
//! let mut form = EvaluationForm::new();
//! form.select_employee("64f0c2");
//! form.answer(&bank, Criterion::Teamwork, 1).unwrap();
//!
//! let payload = form.submit("evaluator-1").unwrap();
//! assert_eq!(payload.scores.total(), 5);
//! assert_eq!(star_rating(payload.scores.total()), 1);
//! ```

mod criteria;
mod error;
mod form;
mod model;
mod scoring;
mod statistics;

pub use criteria::{Criterion, Question, QuestionBank};
pub use error::{EvaluationError, Result};
pub use form::{Answer, EvaluationForm};
pub use model::{Evaluation, NewEvaluation, PersonRef};
pub use scoring::{
    RankingSummary, Scores, accumulated_points, profile_star_rating, render_stars, star_rating,
};
pub use statistics::{ChartPoint, PALETTE, Statistics};
