use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered worker ("Sarmika"). `tid` points at the contractor the
/// worker is attached to; deleting that contractor clears the association
/// without removing the worker.
#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct Worker {
    pub id: i64,
    pub tid: Option<i64>,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub verification: bool,
    pub age: i32,
    pub work: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<i32>,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Bank account owned by a worker. Removed together with its owner.
#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct WorkerAccount {
    pub id: i64,
    pub owner_id: i64,
    pub account_number: String,
    pub ifsc: String,
    pub bank_name: String,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Identity documents uploaded for a worker.
#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct WorkerVerification {
    pub id: i64,
    pub owner_id: Option<i64>,
    pub profile_photo: String,
    pub id_proof: String,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
