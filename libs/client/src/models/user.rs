//! User and authentication models

use serde::{Deserialize, Serialize};

/// The session principal as the API reports it
///
/// Only the fields the client renders are mirrored; anything else the
/// server sends is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub major: String,
    pub grad_year: i32,
}

/// Registration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub major: String,
    pub grad_year: i32,
}

/// Login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Reply to both login and registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_contract() {
        // The exact shape the API's login endpoint returns
        let body = r#"{
            "access_token": "tok-123",
            "token_type": "bearer",
            "user": {
                "id": "u-1",
                "email": "student@unc.edu",
                "display_name": "student",
                "major": "Computer Science",
                "grad_year": 2027
            }
        }"#;

        let parsed: AuthResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.access_token, "tok-123");
        assert_eq!(parsed.user.major, "Computer Science");
        assert_eq!(parsed.user.grad_year, 2027);
    }

    #[test]
    fn test_user_ignores_extra_profile_fields() {
        // GET /auth/me returns a fuller record; unknown fields must not break parsing
        let body = r#"{
            "id": "u-1",
            "email": "student@unc.edu",
            "display_name": "student",
            "major": "Biology",
            "grad_year": 2026,
            "created_at": "2025-08-30T10:00:00",
            "is_active": true
        }"#;

        let parsed: User = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.display_name, "student");
    }
}
