//! Evaluation payloads exchanged with the backend

use serde::{Deserialize, Deserializer, Serialize};

use crate::scoring::{Scores, star_rating};

/// Reference to a user, as populated by the backend
///
/// Some endpoints send a bare ID string, others an embedded document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonRef {
    /// User ID
    #[serde(rename = "_id")]
    pub id: String,
    /// First name (empty when only the ID was sent)
    pub first_name: String,
    /// Last name (empty when only the ID was sent)
    pub last_name: String,
}

impl PersonRef {
    /// Reference holding only an ID
    pub fn id_only(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Full name, or the ID if no name was populated
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.id.clone()
        } else {
            name.to_string()
        }
    }
}

impl<'de> Deserialize<'de> for PersonRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Populated {
            #[serde(rename = "_id", default)]
            id: String,
            #[serde(default)]
            first_name: String,
            #[serde(default)]
            last_name: String,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Id(String),
            Populated(Populated),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Id(id) => PersonRef::id_only(id),
            Repr::Populated(p) => PersonRef {
                id: p.id,
                first_name: p.first_name,
                last_name: p.last_name,
            },
        })
    }
}

/// Stored evaluation (`GET /api/evaluation/view-evaluations`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Evaluation ID
    #[serde(rename = "_id")]
    pub id: String,
    /// Evaluated employee
    #[serde(rename = "id_user", default)]
    pub employee: PersonRef,
    /// Evaluator
    #[serde(rename = "id_evaluator", default)]
    pub evaluator: PersonRef,
    /// Points per criterion
    #[serde(flatten)]
    pub scores: Scores,
}

impl Evaluation {
    /// Total points
    pub fn total(&self) -> u32 {
        self.scores.total()
    }

    /// Stars for the evaluation table
    pub fn stars(&self) -> u8 {
        star_rating(self.total())
    }

    /// Payload to update this evaluation as `evaluator_id`
    pub fn to_update(&self, evaluator_id: impl Into<String>) -> NewEvaluation {
        NewEvaluation {
            employee_id: self.employee.id.clone(),
            evaluator_id: evaluator_id.into(),
            scores: self.scores,
        }
    }
}

/// Evaluation payload (`POST /api/evaluation`, `PUT /api/evaluation/{id}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvaluation {
    /// Evaluated employee ID
    #[serde(rename = "id_user")]
    pub employee_id: String,
    /// Evaluator user ID
    #[serde(rename = "id_evaluator")]
    pub evaluator_id: String,
    /// Points per criterion
    #[serde(flatten)]
    pub scores: Scores,
}
