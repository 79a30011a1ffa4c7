pub mod accounts;
pub mod contractor;
pub mod verification;
pub mod worker;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::HttpError;

/// Deserialize a request body into a typed payload, turning a missing or
/// mistyped key into a structured 400 instead of an unhandled fault.
pub(crate) fn parse_payload<T: DeserializeOwned>(payload: Value) -> Result<T, HttpError> {
    serde_json::from_value(payload).map_err(|err| HttpError::bad_request(err.to_string()))
}
