//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::validate_email::ValidateAction;
use crate::domain::value_object::risk::EmailVerdict;

// ============================================================================
// Validate Email
// ============================================================================

/// Validate email request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateEmailRequest {
    pub email: String,
    /// "validate" (default) or "signup"
    #[serde(default)]
    pub action: ValidateAction,
}

/// Validate email response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateEmailResponse {
    pub is_valid: bool,
    /// Normalized form that was evaluated
    pub email: String,
    pub domain: Option<String>,
    /// 0-100, higher = more risky
    pub risk_score: u8,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub message: String,
}

impl ValidateEmailResponse {
    pub fn from_verdict(verdict: EmailVerdict, email: String, domain: Option<String>) -> Self {
        let message = if verdict.is_valid {
            "Email is valid".to_string()
        } else {
            "Email validation failed".to_string()
        };

        Self {
            is_valid: verdict.is_valid,
            email,
            domain,
            risk_score: verdict.risk_score.value(),
            errors: verdict.errors,
            warnings: verdict.warnings,
            message,
        }
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
}

/// Sign up response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    pub public_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::risk::RiskScore;

    #[test]
    fn test_response_from_verdict() {
        let mut verdict = EmailVerdict::accept();
        verdict.risk_score = RiskScore::new(10);
        verdict.warn("minor concern");

        let response = ValidateEmailResponse::from_verdict(
            verdict,
            "jane@gmail.com".to_string(),
            Some("gmail.com".to_string()),
        );

        assert!(response.is_valid);
        assert_eq!(response.risk_score, 10);
        assert_eq!(response.message, "Email is valid");
        assert_eq!(response.warnings, vec!["minor concern".to_string()]);
    }

    #[test]
    fn test_action_deserializes_lowercase() {
        let req: ValidateEmailRequest =
            serde_json::from_str(r#"{ "email": "a@b.com", "action": "signup" }"#).unwrap();
        assert_eq!(req.action, ValidateAction::Signup);

        let req: ValidateEmailRequest = serde_json::from_str(r#"{ "email": "a@b.com" }"#).unwrap();
        assert_eq!(req.action, ValidateAction::Validate);
    }
}
