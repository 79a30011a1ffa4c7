use async_trait::async_trait;
use sqlx::Error;

use super::db::DBClient;
use crate::models::{contractormodel::ContractorVerification, workermodel::WorkerVerification};

#[async_trait]
pub trait VerificationExt {
    async fn get_worker_verifications(
        &self,
        owner_id: i64,
    ) -> Result<Vec<WorkerVerification>, Error>;

    async fn save_worker_verification(
        &self,
        owner_id: i64,
        profile_photo: &str,
        id_proof: &str,
    ) -> Result<WorkerVerification, Error>;

    async fn get_contractor_verifications(
        &self,
        contractor_id: i64,
    ) -> Result<Vec<ContractorVerification>, Error>;

    async fn save_contractor_verification(
        &self,
        contractor_id: i64,
        profile_photo: &str,
        id_proof: &str,
    ) -> Result<ContractorVerification, Error>;
}

#[async_trait]
impl VerificationExt for DBClient {
    async fn get_worker_verifications(
        &self,
        owner_id: i64,
    ) -> Result<Vec<WorkerVerification>, Error> {
        sqlx::query_as::<_, WorkerVerification>(
            r#"
            SELECT id, owner_id, profile_photo, id_proof, created_at
            FROM worker_verifications
            WHERE owner_id = $1
            ORDER BY id
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn save_worker_verification(
        &self,
        owner_id: i64,
        profile_photo: &str,
        id_proof: &str,
    ) -> Result<WorkerVerification, Error> {
        sqlx::query_as::<_, WorkerVerification>(
            r#"
            INSERT INTO worker_verifications (owner_id, profile_photo, id_proof)
            VALUES ($1, $2, $3)
            RETURNING id, owner_id, profile_photo, id_proof, created_at
            "#,
        )
        .bind(owner_id)
        .bind(profile_photo)
        .bind(id_proof)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_contractor_verifications(
        &self,
        contractor_id: i64,
    ) -> Result<Vec<ContractorVerification>, Error> {
        sqlx::query_as::<_, ContractorVerification>(
            r#"
            SELECT id, tid, profile_photo, id_proof, created_at
            FROM contractor_verifications
            WHERE tid = $1
            ORDER BY id
            "#,
        )
        .bind(contractor_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn save_contractor_verification(
        &self,
        contractor_id: i64,
        profile_photo: &str,
        id_proof: &str,
    ) -> Result<ContractorVerification, Error> {
        sqlx::query_as::<_, ContractorVerification>(
            r#"
            INSERT INTO contractor_verifications (tid, profile_photo, id_proof)
            VALUES ($1, $2, $3)
            RETURNING id, tid, profile_photo, id_proof, created_at
            "#,
        )
        .bind(contractor_id)
        .bind(profile_photo)
        .bind(id_proof)
        .fetch_one(&self.pool)
        .await
    }
}
