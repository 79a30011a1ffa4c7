use serde::{Deserialize, Serialize};
use validator::Validate;

/// Full worker payload. `tid` is stamped from the path parameter on the
/// scoped create; on the global replace it is taken from the body as-is.
/// A missing `age` falls back to the storage default of 18.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateWorkerDto {
    pub tid: Option<i64>,

    #[validate(
        length(min = 1, max = 100, message = "Name is required"),
        custom = "crate::dtos::validate_person_name"
    )]
    pub name: String,

    #[validate(length(min = 1, max = 15, message = "Phone is required"))]
    pub phone: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    pub address: Option<String>,

    pub verification: Option<bool>,

    #[validate(range(min = 18, message = "Age should be greater than 18"))]
    pub age: Option<i32>,

    pub work: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<i32>,
}

/// Partial update payload for a worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateWorkerDto {
    pub tid: Option<i64>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub verification: Option<bool>,
    pub age: Option<i32>,
    pub work: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_worker() -> CreateWorkerDto {
        CreateWorkerDto {
            tid: Some(1),
            name: "Lal".to_string(),
            phone: "8880002222".to_string(),
            email: None,
            address: None,
            verification: None,
            age: Some(20),
            work: Some("mason".to_string()),
            city: None,
            pincode: None,
        }
    }

    #[test]
    fn accepts_a_valid_payload() {
        assert!(valid_worker().validate().is_ok());
    }

    #[test]
    fn missing_age_is_allowed() {
        let mut dto = valid_worker();
        dto.age = None;
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn rejects_underage() {
        let mut dto = valid_worker();
        dto.age = Some(17);
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("age"));
    }

    #[test]
    fn rejects_name_with_special_characters() {
        let mut dto = valid_worker();
        dto.name = "L#l".to_string();
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }
}
