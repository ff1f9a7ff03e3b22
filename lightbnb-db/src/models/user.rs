//! User records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{require_non_empty, ValidationError};

/// User record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// Registration payload for a new user
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check the payload before it reaches the database.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("email", &self.email)?;
        if !self.email.contains('@') {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "must contain '@'",
            });
        }
        require_non_empty("password", &self.password)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_user_passes() {
        let user = NewUser::new("Ada", "ada@example.com", "secret");
        assert!(user.validate().is_ok());
    }

    #[test]
    fn email_without_at_rejected() {
        let user = NewUser::new("Ada", "ada.example.com", "secret");
        assert!(matches!(
            user.validate(),
            Err(ValidationError::InvalidFormat { field: "email", .. })
        ));
    }

    #[test]
    fn empty_password_rejected() {
        let user = NewUser::new("Ada", "ada@example.com", "");
        assert_eq!(
            user.validate(),
            Err(ValidationError::Empty { field: "password" })
        );
    }

    #[test]
    fn password_never_serialized() {
        let user = User {
            id: 7,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 7);
        assert!(json.get("password").is_none());
    }
}
