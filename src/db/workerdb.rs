use async_trait::async_trait;
use sqlx::Error;

use super::db::DBClient;
use crate::dtos::workerdtos::CreateWorkerDto;
use crate::models::workermodel::Worker;

#[async_trait]
pub trait WorkerExt {
    /// Workers currently attached to the given contractor.
    async fn get_workers_by_contractor(&self, contractor_id: i64) -> Result<Vec<Worker>, Error>;

    async fn get_worker(&self, worker_id: i64) -> Result<Option<Worker>, Error>;

    async fn save_worker(&self, data: &CreateWorkerDto) -> Result<Worker, Error>;

    async fn replace_worker(&self, worker_id: i64, data: &CreateWorkerDto)
        -> Result<Worker, Error>;

    async fn delete_worker(&self, worker_id: i64) -> Result<u64, Error>;
}

#[async_trait]
impl WorkerExt for DBClient {
    async fn get_workers_by_contractor(&self, contractor_id: i64) -> Result<Vec<Worker>, Error> {
        sqlx::query_as::<_, Worker>(
            r#"
            SELECT id, tid, name, phone, email, address, verification, age,
                   work, city, pincode, created_at
            FROM workers
            WHERE tid = $1
            ORDER BY id
            "#,
        )
        .bind(contractor_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn get_worker(&self, worker_id: i64) -> Result<Option<Worker>, Error> {
        sqlx::query_as::<_, Worker>(
            r#"
            SELECT id, tid, name, phone, email, address, verification, age,
                   work, city, pincode, created_at
            FROM workers
            WHERE id = $1
            "#,
        )
        .bind(worker_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn save_worker(&self, data: &CreateWorkerDto) -> Result<Worker, Error> {
        sqlx::query_as::<_, Worker>(
            r#"
            INSERT INTO workers (tid, name, phone, email, address, verification, age, work, city, pincode)
            VALUES ($1, $2, $3, $4, $5, COALESCE($6, FALSE), COALESCE($7, 18), $8, $9, $10)
            RETURNING id, tid, name, phone, email, address, verification, age,
                      work, city, pincode, created_at
            "#,
        )
        .bind(data.tid)
        .bind(&data.name)
        .bind(&data.phone)
        .bind(&data.email)
        .bind(&data.address)
        .bind(data.verification)
        .bind(data.age)
        .bind(&data.work)
        .bind(&data.city)
        .bind(data.pincode)
        .fetch_one(&self.pool)
        .await
    }

    async fn replace_worker(
        &self,
        worker_id: i64,
        data: &CreateWorkerDto,
    ) -> Result<Worker, Error> {
        sqlx::query_as::<_, Worker>(
            r#"
            UPDATE workers
            SET tid = $2, name = $3, phone = $4, email = $5, address = $6,
                verification = COALESCE($7, FALSE), age = COALESCE($8, 18),
                work = $9, city = $10, pincode = $11
            WHERE id = $1
            RETURNING id, tid, name, phone, email, address, verification, age,
                      work, city, pincode, created_at
            "#,
        )
        .bind(worker_id)
        .bind(data.tid)
        .bind(&data.name)
        .bind(&data.phone)
        .bind(&data.email)
        .bind(&data.address)
        .bind(data.verification)
        .bind(data.age)
        .bind(&data.work)
        .bind(&data.city)
        .bind(data.pincode)
        .fetch_one(&self.pool)
        .await
    }

    async fn delete_worker(&self, worker_id: i64) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM workers WHERE id = $1")
            .bind(worker_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
