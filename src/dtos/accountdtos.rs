use serde::{Deserialize, Serialize};
use validator::Validate;

/// Bank account payload, shared by contractor and worker accounts. The
/// owner is never part of the body; it comes from the path parameter.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBankAccountDto {
    #[validate(length(min = 1, max = 20, message = "Account number is required"))]
    pub account_number: String,

    #[validate(length(min = 1, max = 20, message = "IFSC code is required"))]
    pub ifsc: String,

    #[validate(length(min = 1, max = 100, message = "Bank name is required"))]
    pub bank_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_valid_account() {
        let dto = CreateBankAccountDto {
            account_number: "12345678901234".to_string(),
            ifsc: "SBIN0001234".to_string(),
            bank_name: "State Bank".to_string(),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn rejects_empty_required_fields() {
        let dto = CreateBankAccountDto {
            account_number: String::new(),
            ifsc: String::new(),
            bank_name: String::new(),
        };
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("account_number"));
        assert!(fields.contains_key("ifsc"));
        assert!(fields.contains_key("bank_name"));
    }
}
