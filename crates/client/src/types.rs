//! Request and response bodies

use eval360_auth::{Role, UserProfile};
use eval360_evaluation::{
    PersonRef, RankingSummary, Scores, accumulated_points, profile_star_rating,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validation::{require, validate_email, validate_login_password};

/// Occupation sent when the registration form leaves it blank
pub const DEFAULT_OCCUPATION: &str = "Por actualizar";

/// Login form
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    /// Email
    pub email: String,
    /// Password
    pub password: String,
}

impl Credentials {
    /// Create credentials; the email is trimmed
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }

    /// Check the form before sending
    pub fn validate(&self) -> Result<()> {
        validate_email(&self.email)?;
        validate_login_password(&self.password)
    }

    /// Copy with the email trimmed, as validated
    pub fn normalized(&self) -> Self {
        Self {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

/// `POST /api/auth/login` success body
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Bearer token
    pub token: String,
    /// User ID
    #[serde(rename = "_id")]
    pub id: String,
    /// First name
    #[serde(default)]
    pub first_name: String,
    /// Last name
    #[serde(default)]
    pub last_name: String,
    /// Email
    #[serde(default)]
    pub email: String,
    /// Role
    pub role: Role,
}

impl LoginResponse {
    /// Split into token and the profile to persist
    pub fn into_session(self) -> (String, UserProfile) {
        let profile = UserProfile::new(self.id, self.email, self.role)
            .with_name(self.first_name, self.last_name);
        (self.token, profile)
    }
}

/// Registration form (`POST /api/auth/register`)
#[derive(Debug, Clone, Default, Serialize)]
pub struct Registration {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email
    pub email: String,
    /// Password
    pub password: String,
    /// Occupation (the backend spells it `ocupation`)
    #[serde(rename = "ocupation")]
    pub occupation: String,
}

impl Registration {
    /// Check required fields and email shape
    pub fn validate(&self) -> Result<()> {
        require("first_name", &self.first_name)?;
        require("last_name", &self.last_name)?;
        validate_email(&self.email)?;
        require("password", &self.password)
    }

    /// Copy with the email trimmed and a blank occupation replaced by
    /// [`DEFAULT_OCCUPATION`]
    pub fn normalized(&self) -> Self {
        let mut registration = self.clone();
        registration.email = registration.email.trim().to_string();
        if registration.occupation.trim().is_empty() {
            registration.occupation = DEFAULT_OCCUPATION.to_string();
        }
        registration
    }
}

/// User as listed by `GET /api/user` and `GET /api/employees`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// User ID
    #[serde(rename = "_id")]
    pub id: String,
    /// First name
    #[serde(default)]
    pub first_name: String,
    /// Last name
    #[serde(default)]
    pub last_name: String,
    /// Email
    #[serde(default)]
    pub email: String,
    /// Role as sent by the backend
    #[serde(default)]
    pub role: String,
    /// Occupation
    #[serde(rename = "ocupation", default)]
    pub occupation: String,
    /// Account enabled
    #[serde(default)]
    pub active: bool,
}

impl UserRecord {
    /// Known role, if the backend sent one
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    /// Editable fields, prefilled from this record
    pub fn to_update(&self) -> UserUpdate {
        UserUpdate {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            role: self.role(),
            occupation: self.occupation.clone(),
            active: self.active,
        }
    }
}

/// `PUT /api/user/{id}` body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserUpdate {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Occupation
    #[serde(rename = "ocupation")]
    pub occupation: String,
    /// Account enabled
    pub active: bool,
}

/// One evaluation inside an employee report
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportEvaluation {
    /// Who evaluated
    #[serde(rename = "id_evaluator", default)]
    pub evaluator: PersonRef,
    /// Points per criterion
    #[serde(flatten)]
    pub scores: Scores,
}

/// Free-text feedback
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Feedback {
    /// Comment text
    #[serde(default)]
    pub comment: String,
}

/// `GET /api/reports/employee/{id}` body
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EmployeeReport {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email
    pub email: String,
    /// Role
    pub role: String,
    /// Account enabled
    pub active: bool,
    /// Evaluations received
    pub evaluations: Vec<ReportEvaluation>,
    /// Feedback received
    pub feedbacks: Vec<Feedback>,
}

impl EmployeeReport {
    /// Points summed over all evaluations
    pub fn accumulated_points(&self) -> u32 {
        accumulated_points(self.evaluations.iter().map(|e| &e.scores))
    }

    /// Profile stars (0-5)
    pub fn stars(&self) -> u8 {
        profile_star_rating(self.accumulated_points())
    }

    /// Qualitative summary
    pub fn summary(&self) -> RankingSummary {
        RankingSummary::from_points(self.accumulated_points())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_into_session() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"token": "t1", "_id": "u1", "first_name": "Ana", "last_name": "Pérez",
                "email": "ana@example.com", "role": "Admin"}"#,
        )
        .unwrap();
        let (token, profile) = response.into_session();
        assert_eq!(token, "t1");
        assert_eq!(profile.id, "u1");
        assert_eq!(profile.role, Role::Admin);
        assert_eq!(profile.display_name(), "Ana Pérez");
    }

    #[test]
    fn test_login_response_unknown_role() {
        let result = serde_json::from_str::<LoginResponse>(
            r#"{"token": "t1", "_id": "u1", "role": "Intern"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_registration_default_occupation() {
        let registration = Registration {
            first_name: "Ana".into(),
            last_name: "Pérez".into(),
            email: "ana@example.com".into(),
            password: "secreto".into(),
            occupation: " ".into(),
        };
        assert!(registration.validate().is_ok());
        let body = serde_json::to_value(registration.normalized()).unwrap();
        assert_eq!(body["ocupation"], "Por actualizar");
        assert!(body.get("occupation").is_none());
    }

    #[test]
    fn test_credentials_email_trimmed() {
        let credentials = Credentials::new("  ana@example.com\n", "correcta123");
        assert_eq!(credentials.email, "ana@example.com");

        let built = Credentials {
            email: " ana@example.com ".into(),
            password: "correcta123".into(),
        };
        assert!(built.validate().is_ok());
        let body = serde_json::to_value(built.normalized()).unwrap();
        assert_eq!(body["email"], "ana@example.com");
        assert_eq!(body["password"], "correcta123");
    }

    #[test]
    fn test_registration_email_trimmed() {
        let registration = Registration {
            first_name: "Ana".into(),
            last_name: "Pérez".into(),
            email: " ana@example.com ".into(),
            password: "secreto".into(),
            occupation: "QA".into(),
        };
        let body = serde_json::to_value(registration.normalized()).unwrap();
        assert_eq!(body["email"], "ana@example.com");
        assert_eq!(body["ocupation"], "QA");
    }

    #[test]
    fn test_registration_requires_names() {
        let registration = Registration {
            email: "ana@example.com".into(),
            password: "x".into(),
            ..Default::default()
        };
        assert!(registration.validate().is_err());
    }

    #[test]
    fn test_user_record_to_update() {
        let record: UserRecord = serde_json::from_str(
            r#"{"_id": "u1", "first_name": "Ana", "last_name": "Pérez", "email": "a@b.co",
                "role": "Manager", "ocupation": "QA", "active": true}"#,
        )
        .unwrap();
        assert_eq!(record.role(), Some(Role::Manager));
        let update = serde_json::to_value(record.to_update()).unwrap();
        assert_eq!(update["role"], "Manager");
        assert_eq!(update["ocupation"], "QA");
        assert_eq!(update["active"], true);
        assert!(update.get("email").is_none());
    }

    #[test]
    fn test_employee_report() {
        let report: EmployeeReport = serde_json::from_str(
            r#"{
                "first_name": "Ana", "last_name": "Pérez", "email": "ana@example.com",
                "role": "Employee", "active": true,
                "evaluations": [
                    {"id_technical_skills": 5, "id_comunication": 4, "id_teamwork": 3,
                     "id_time_management": 2, "id_adaptability": 1, "id_soft_skills": 0,
                     "id_evaluator": {"first_name": "Leo", "last_name": "Ríos"}},
                    {"id_teamwork": 4, "id_evaluator": {"first_name": "Eva", "last_name": "Sol"}}
                ],
                "feedbacks": [{"comment": "Buen trabajo"}]
            }"#,
        )
        .unwrap();
        assert_eq!(report.accumulated_points(), 19);
        assert_eq!(report.stars(), 3);
        assert_eq!(report.summary(), RankingSummary::Good);
        assert_eq!(report.evaluations[0].evaluator.display_name(), "Leo Ríos");
        assert_eq!(report.feedbacks.len(), 1);
    }

    #[test]
    fn test_empty_report() {
        let report: EmployeeReport = serde_json::from_str("{}").unwrap();
        assert_eq!(report.stars(), 0);
        assert_eq!(report.summary(), RankingSummary::Low);
    }
}
