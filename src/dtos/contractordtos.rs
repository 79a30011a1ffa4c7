use serde::{Deserialize, Serialize};
use validator::Validate;

/// Full contractor payload, used by create and by full-row replacement.
/// `age` is a required key: a payload without it is rejected before
/// anything touches storage.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateContractorDto {
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
    pub city: Option<String>,
    pub pincode: Option<i32>,

    pub verification: Option<bool>,

    #[validate(range(min = 18, message = "Age should be greater than 18"))]
    pub age: i32,
}

/// Partial update payload; provided fields are merged over the stored row
/// and the merged record is re-validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateContractorDto {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<i32>,
    pub verification: Option<bool>,
    pub age: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_contractor() -> CreateContractorDto {
        CreateContractorDto {
            name: "Ravi".to_string(),
            phone: "9990001111".to_string(),
            email: None,
            address: None,
            city: None,
            pincode: None,
            verification: Some(false),
            age: 30,
        }
    }

    #[test]
    fn accepts_a_valid_payload() {
        assert!(valid_contractor().validate().is_ok());
    }

    #[test]
    fn accepts_age_exactly_18() {
        let mut dto = valid_contractor();
        dto.age = 18;
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn rejects_underage() {
        let mut dto = valid_contractor();
        dto.age = 17;
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("age"));
    }

    #[test]
    fn rejects_name_with_special_characters() {
        for name in ["R@vi", "Ravi!", "Ra;vi", "Ravi.", "Ra\\vi"] {
            let mut dto = valid_contractor();
            dto.name = name.to_string();
            let errors = dto.validate().unwrap_err();
            assert!(
                errors.field_errors().contains_key("name"),
                "expected {:?} to be rejected",
                name
            );
        }
    }

    #[test]
    fn rejects_empty_name() {
        let mut dto = valid_contractor();
        dto.name = String::new();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn missing_age_key_fails_at_parse_time() {
        let payload = serde_json::json!({
            "name": "Ravi",
            "phone": "9990001111",
            "verification": false
        });
        let parsed = serde_json::from_value::<CreateContractorDto>(payload);
        let message = parsed.unwrap_err().to_string();
        assert!(message.contains("age"), "got: {}", message);
    }
}
