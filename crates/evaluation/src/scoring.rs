//! Scores, star ratings and ranking summaries
//!
//! Each criterion contributes the points of the picked question. The sum is
//! bucketed into stars:
//!
//! | Total | Table stars | Profile stars |
//! |-------|-------------|---------------|
//! | ≥ 27 | 5 | 5 |
//! | ≥ 23 | 4 | 4 |
//! | ≥ 17 | 3 | 3 |
//! | ≥ 14 | 2 | 2 |
//! | ≥ 5 | 1 | 1 |
//! | < 5 | 1 | 0 |
//!
//! The evaluation table never shows fewer than one star; the employee profile
//! can show zero.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::criteria::Criterion;

/// Points per criterion, as carried in evaluation payloads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scores {
    /// Technical skills
    #[serde(rename = "id_technical_skills", default, deserialize_with = "lenient_points")]
    pub technical_skills: u32,
    /// Communication
    #[serde(rename = "id_comunication", default, deserialize_with = "lenient_points")]
    pub communication: u32,
    /// Teamwork
    #[serde(rename = "id_teamwork", default, deserialize_with = "lenient_points")]
    pub teamwork: u32,
    /// Time management
    #[serde(rename = "id_time_management", default, deserialize_with = "lenient_points")]
    pub time_management: u32,
    /// Adaptability
    #[serde(rename = "id_adaptability", default, deserialize_with = "lenient_points")]
    pub adaptability: u32,
    /// Soft skills
    #[serde(rename = "id_soft_skills", default, deserialize_with = "lenient_points")]
    pub soft_skills: u32,
}

/// Accept numbers, numeric strings and null; anything else counts as 0
fn lenient_points<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

impl Scores {
    /// Points for one criterion
    pub fn get(&self, criterion: Criterion) -> u32 {
        match criterion {
            Criterion::TechnicalSkills => self.technical_skills,
            Criterion::Communication => self.communication,
            Criterion::Teamwork => self.teamwork,
            Criterion::TimeManagement => self.time_management,
            Criterion::Adaptability => self.adaptability,
            Criterion::SoftSkills => self.soft_skills,
        }
    }

    /// Set points for one criterion
    pub fn set(&mut self, criterion: Criterion, points: u32) {
        let slot = match criterion {
            Criterion::TechnicalSkills => &mut self.technical_skills,
            Criterion::Communication => &mut self.communication,
            Criterion::Teamwork => &mut self.teamwork,
            Criterion::TimeManagement => &mut self.time_management,
            Criterion::Adaptability => &mut self.adaptability,
            Criterion::SoftSkills => &mut self.soft_skills,
        };
        *slot = points;
    }

    /// Sum over all criteria
    pub fn total(&self) -> u32 {
        Criterion::ALL.iter().map(|c| self.get(*c)).sum()
    }
}

/// Sum of totals over several evaluations
pub fn accumulated_points<'a>(scores: impl IntoIterator<Item = &'a Scores>) -> u32 {
    scores.into_iter().map(Scores::total).sum()
}

/// Stars shown in the evaluation table (1-5)
pub fn star_rating(total: u32) -> u8 {
    match total {
        27.. => 5,
        23.. => 4,
        17.. => 3,
        14.. => 2,
        _ => 1,
    }
}

/// Stars shown on the employee profile (0-5)
pub fn profile_star_rating(total: u32) -> u8 {
    match total {
        5.. => star_rating(total),
        _ => 0,
    }
}

/// Qualitative summary of accumulated points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankingSummary {
    /// 27 points or more
    Excellent,
    /// 18 to 26 points
    Good,
    /// 10 to 17 points
    NeedsWork,
    /// Fewer than 10 points
    Low,
}

impl RankingSummary {
    /// Bucket a total
    pub fn from_points(points: u32) -> Self {
        match points {
            27.. => Self::Excellent,
            18.. => Self::Good,
            10.. => Self::NeedsWork,
            _ => Self::Low,
        }
    }

    /// Message shown on the profile
    pub fn message(&self) -> &'static str {
        match self {
            Self::Excellent => "Excelente desempeño en habilidades generales.",
            Self::Good => "Buen desempeño, pero hay áreas que pueden mejorar.",
            Self::NeedsWork => "Se necesita trabajar en varias áreas clave.",
            Self::Low => "Desempeño bajo, se necesita mejora en casi todas las áreas.",
        }
    }
}

impl fmt::Display for RankingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Render a rating as filled and empty stars
pub fn render_stars(stars: u8) -> String {
    let filled = usize::from(stars.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_thresholds() {
        assert_eq!(star_rating(30), 5);
        assert_eq!(star_rating(27), 5);
        assert_eq!(star_rating(26), 4);
        assert_eq!(star_rating(23), 4);
        assert_eq!(star_rating(22), 3);
        assert_eq!(star_rating(17), 3);
        assert_eq!(star_rating(16), 2);
        assert_eq!(star_rating(14), 2);
        assert_eq!(star_rating(13), 1);
        assert_eq!(star_rating(0), 1);
    }

    #[test]
    fn test_profile_stars_can_be_zero() {
        assert_eq!(profile_star_rating(4), 0);
        assert_eq!(profile_star_rating(5), 1);
        assert_eq!(profile_star_rating(13), 1);
        assert_eq!(profile_star_rating(14), 2);
        assert_eq!(profile_star_rating(40), 5);
    }

    #[test]
    fn test_ranking_summary() {
        assert_eq!(RankingSummary::from_points(27), RankingSummary::Excellent);
        assert_eq!(RankingSummary::from_points(26), RankingSummary::Good);
        assert_eq!(RankingSummary::from_points(18), RankingSummary::Good);
        assert_eq!(RankingSummary::from_points(17), RankingSummary::NeedsWork);
        assert_eq!(RankingSummary::from_points(10), RankingSummary::NeedsWork);
        assert_eq!(RankingSummary::from_points(9), RankingSummary::Low);
        assert!(RankingSummary::Low.to_string().starts_with("Desempeño bajo"));
    }

    #[test]
    fn test_scores_total_and_set() {
        let mut scores = Scores::default();
        assert_eq!(scores.total(), 0);

        scores.set(Criterion::Teamwork, 5);
        scores.set(Criterion::SoftSkills, 3);
        assert_eq!(scores.get(Criterion::Teamwork), 5);
        assert_eq!(scores.total(), 8);
    }

    #[test]
    fn test_scores_payload_fields() {
        let scores = Scores {
            technical_skills: 1,
            communication: 2,
            teamwork: 3,
            time_management: 4,
            adaptability: 5,
            soft_skills: 6,
        };
        let value = serde_json::to_value(scores).unwrap();
        for criterion in Criterion::ALL {
            assert_eq!(value[criterion.payload_field()], scores.get(criterion));
        }
    }

    #[test]
    fn test_scores_lenient_decode() {
        let scores: Scores = serde_json::from_str(
            r#"{"id_technical_skills": "4", "id_comunication": null, "id_teamwork": 3.0}"#,
        )
        .unwrap();
        assert_eq!(scores.technical_skills, 4);
        assert_eq!(scores.communication, 0);
        assert_eq!(scores.teamwork, 3);
        assert_eq!(scores.soft_skills, 0);
        assert_eq!(scores.total(), 7);
    }

    #[test]
    fn test_accumulated_points() {
        let a = Scores {
            teamwork: 5,
            ..Default::default()
        };
        let b = Scores {
            adaptability: 4,
            ..Default::default()
        };
        assert_eq!(accumulated_points(&[a, b]), 9);
    }

    #[test]
    fn test_render_stars() {
        assert_eq!(render_stars(3), "★★★☆☆");
        assert_eq!(render_stars(0), "☆☆☆☆☆");
        assert_eq!(render_stars(9), "★★★★★");
    }
}
