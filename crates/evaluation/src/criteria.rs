//! Evaluation criteria and their question bank
//!
//! Every evaluation scores six criteria. For each criterion the backend
//! serves a list of questions; picking a question awards its points.
//!
//! # Question bank format (`GET /api/evaluation/all`)
//!
//! ```json
//! {
//!   "technical_skills": [{ "_id": 1, "name": "Domina las herramientas", "points": 5 }],
//!   "comunication": [{ "_id": 7, "name": "Se expresa con claridad", "points": 4 }]
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EvaluationError, Result};

/// Scored criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    /// Technical skills
    TechnicalSkills,
    /// Communication (the backend spells it `comunication`)
    #[serde(rename = "comunication")]
    Communication,
    /// Teamwork
    Teamwork,
    /// Time management
    TimeManagement,
    /// Adaptability
    Adaptability,
    /// Soft skills
    SoftSkills,
}

impl Criterion {
    /// All criteria in form order
    pub const ALL: [Criterion; 6] = [
        Criterion::TechnicalSkills,
        Criterion::Communication,
        Criterion::Teamwork,
        Criterion::TimeManagement,
        Criterion::Adaptability,
        Criterion::SoftSkills,
    ];

    /// Backend key of the question bank
    pub fn key(&self) -> &'static str {
        match self {
            Self::TechnicalSkills => "technical_skills",
            Self::Communication => "comunication",
            Self::Teamwork => "teamwork",
            Self::TimeManagement => "time_management",
            Self::Adaptability => "adaptability",
            Self::SoftSkills => "soft_skills",
        }
    }

    /// Field name in evaluation payloads
    pub fn payload_field(&self) -> &'static str {
        match self {
            Self::TechnicalSkills => "id_technical_skills",
            Self::Communication => "id_comunication",
            Self::Teamwork => "id_teamwork",
            Self::TimeManagement => "id_time_management",
            Self::Adaptability => "id_adaptability",
            Self::SoftSkills => "id_soft_skills",
        }
    }

    /// Section heading
    pub fn title(&self) -> &'static str {
        match self {
            Self::TechnicalSkills => "Habilidades técnicas",
            Self::Communication => "Comunicación",
            Self::Teamwork => "Trabajo en equipo",
            Self::TimeManagement => "Gestión del tiempo",
            Self::Adaptability => "Adaptabilidad",
            Self::SoftSkills => "Habilidades blandas",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Criterion {
    type Err = EvaluationError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase().replace([' ', '-'], "_");
        Criterion::ALL
            .into_iter()
            .find(|c| c.key() == key || (key == "communication" && *c == Self::Communication))
            .ok_or_else(|| EvaluationError::UnknownCriterion(s.to_string()))
    }
}

/// One selectable question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question ID
    #[serde(rename = "_id")]
    pub id: u32,
    /// Question text
    pub name: String,
    /// Points awarded when picked
    pub points: u32,
}

/// Questions per criterion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionBank {
    categories: BTreeMap<String, Vec<Question>>,
}

impl QuestionBank {
    /// Build a bank from (criterion, questions) pairs
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Criterion, Vec<Question>)>) -> Self {
        Self {
            categories: pairs
                .into_iter()
                .map(|(c, qs)| (c.key().to_string(), qs))
                .collect(),
        }
    }

    /// Questions for a criterion, empty if the backend sent none
    pub fn questions(&self, criterion: Criterion) -> &[Question] {
        self.categories
            .get(criterion.key())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Find a question by ID within a criterion
    pub fn find(&self, criterion: Criterion, question_id: u32) -> Result<&Question> {
        self.questions(criterion)
            .iter()
            .find(|q| q.id == question_id)
            .ok_or_else(|| EvaluationError::unknown_question(criterion, question_id))
    }

    /// Category keys the backend sent that are not known criteria
    pub fn unknown_categories(&self) -> Vec<&str> {
        self.categories
            .keys()
            .map(String::as_str)
            .filter(|k| k.parse::<Criterion>().is_err())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> QuestionBank {
        serde_json::from_str(
            r#"{
                "technical_skills": [
                    {"_id": 1, "name": "Domina las herramientas", "points": 5},
                    {"_id": 2, "name": "Necesita apoyo", "points": 2}
                ],
                "comunication": [{"_id": 7, "name": "Se expresa con claridad", "points": 4}],
                "charisma": []
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_criterion_parse() {
        assert_eq!("technical_skills".parse::<Criterion>(), Ok(Criterion::TechnicalSkills));
        assert_eq!("Time Management".parse::<Criterion>(), Ok(Criterion::TimeManagement));
        assert_eq!("comunication".parse::<Criterion>(), Ok(Criterion::Communication));
        assert_eq!("communication".parse::<Criterion>(), Ok(Criterion::Communication));
        assert!("charisma".parse::<Criterion>().is_err());
    }

    #[test]
    fn test_criterion_serde_key() {
        assert_eq!(
            serde_json::to_string(&Criterion::Communication).unwrap(),
            "\"comunication\""
        );
        assert_eq!(
            serde_json::to_string(&Criterion::SoftSkills).unwrap(),
            "\"soft_skills\""
        );
    }

    #[test]
    fn test_bank_lookup() {
        let bank = bank();
        assert_eq!(bank.questions(Criterion::TechnicalSkills).len(), 2);
        assert!(bank.questions(Criterion::Teamwork).is_empty());
        assert_eq!(bank.find(Criterion::Communication, 7).unwrap().points, 4);
        assert_eq!(
            bank.find(Criterion::Communication, 1),
            Err(EvaluationError::unknown_question(Criterion::Communication, 1))
        );
    }

    #[test]
    fn test_unknown_categories() {
        assert_eq!(bank().unknown_categories(), vec!["charisma"]);
    }

    #[test]
    fn test_from_pairs() {
        let bank = QuestionBank::from_pairs([(
            Criterion::Teamwork,
            vec![Question {
                id: 3,
                name: "Colabora".into(),
                points: 5,
            }],
        )]);
        assert_eq!(bank.find(Criterion::Teamwork, 3).unwrap().name, "Colabora");
    }
}
