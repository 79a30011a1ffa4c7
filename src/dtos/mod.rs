pub mod accountdtos;
pub mod contractordtos;
pub mod verificationdtos;
pub mod workerdtos;

use serde::Deserialize;
use validator::ValidationError;

/// Characters that are rejected in person names.
const FORBIDDEN_NAME_CHARS: &str = r"!@#$%^&*()_+-=|\/'?.>,<;:";

/// Payload shape for the operations that identify their target row by an
/// `id` key in the body (replace, partial update, delete).
#[derive(Debug, Deserialize)]
pub struct IdPayload {
    pub id: i64,
}

pub fn validate_person_name(name: &str) -> Result<(), ValidationError> {
    if name.chars().any(|c| FORBIDDEN_NAME_CHARS.contains(c)) {
        let mut error = ValidationError::new("forbidden_characters");
        error.message = Some("Name should not contain special characters".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_pass() {
        assert!(validate_person_name("Ravi").is_ok());
        assert!(validate_person_name("Lal Bahadur").is_ok());
        assert!(validate_person_name("Ravi Kumar 2").is_ok());
    }

    #[test]
    fn every_forbidden_character_is_rejected() {
        for c in FORBIDDEN_NAME_CHARS.chars() {
            let name = format!("Ravi{}", c);
            assert!(
                validate_person_name(&name).is_err(),
                "expected {:?} to be rejected",
                name
            );
        }
    }

    #[test]
    fn rejection_carries_a_message() {
        let error = validate_person_name("R@vi").unwrap_err();
        assert_eq!(
            error.message.as_deref(),
            Some("Name should not contain special characters")
        );
    }
}
