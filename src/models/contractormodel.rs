use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contracting party ("Thakedar") that registers workers and owns bank
/// account and verification records.
#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct Contractor {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<i32>,
    pub verification: bool,
    pub age: Option<i32>,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Bank account owned by a contractor. Removed together with its owner.
#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct ContractorAccount {
    pub id: i64,
    pub owner_id: i64,
    pub account_number: String,
    pub ifsc: String,
    pub bank_name: String,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Identity documents uploaded for a contractor: a profile photo and an
/// id proof, stored as blob references.
#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct ContractorVerification {
    pub id: i64,
    pub tid: Option<i64>,
    pub profile_photo: String,
    pub id_proof: String,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
