use serde::{Deserialize, Serialize};
use validator::Validate;

/// Verification upload payload: both images arrive base64-encoded, with
/// an optional `data:image/...;base64,` prefix.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateVerificationDto {
    #[validate(length(min = 1, message = "Profile photo is required"))]
    pub profile_photo: String,

    #[validate(length(min = 1, message = "Id proof is required"))]
    pub id_proof: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_images() {
        let dto = CreateVerificationDto {
            profile_photo: String::new(),
            id_proof: String::new(),
        };
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("profile_photo"));
        assert!(fields.contains_key("id_proof"));
    }

    #[test]
    fn missing_id_proof_key_fails_at_parse_time() {
        let payload = serde_json::json!({ "profile_photo": "aGVsbG8=" });
        let parsed = serde_json::from_value::<CreateVerificationDto>(payload);
        assert!(parsed.unwrap_err().to_string().contains("id_proof"));
    }
}
