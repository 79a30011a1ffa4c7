use async_trait::async_trait;
use sqlx::Error;

use super::db::DBClient;
use crate::dtos::contractordtos::CreateContractorDto;
use crate::models::contractormodel::Contractor;

#[async_trait]
pub trait ContractorExt {
    async fn get_contractors(&self) -> Result<Vec<Contractor>, Error>;

    async fn get_contractor(&self, contractor_id: i64) -> Result<Option<Contractor>, Error>;

    async fn save_contractor(&self, data: &CreateContractorDto) -> Result<Contractor, Error>;

    /// Full-row replacement; fails with `RowNotFound` for an unknown id.
    async fn replace_contractor(
        &self,
        contractor_id: i64,
        data: &CreateContractorDto,
    ) -> Result<Contractor, Error>;

    /// Returns the number of rows removed. Owned account and verification
    /// rows go with the contractor; workers keep their rows with the
    /// association cleared (enforced by the schema).
    async fn delete_contractor(&self, contractor_id: i64) -> Result<u64, Error>;
}

#[async_trait]
impl ContractorExt for DBClient {
    async fn get_contractors(&self) -> Result<Vec<Contractor>, Error> {
        sqlx::query_as::<_, Contractor>(
            r#"
            SELECT id, name, phone, email, address, city, pincode, verification, age, created_at
            FROM contractors
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn get_contractor(&self, contractor_id: i64) -> Result<Option<Contractor>, Error> {
        sqlx::query_as::<_, Contractor>(
            r#"
            SELECT id, name, phone, email, address, city, pincode, verification, age, created_at
            FROM contractors
            WHERE id = $1
            "#,
        )
        .bind(contractor_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn save_contractor(&self, data: &CreateContractorDto) -> Result<Contractor, Error> {
        sqlx::query_as::<_, Contractor>(
            r#"
            INSERT INTO contractors (name, phone, email, address, city, pincode, verification, age)
            VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, FALSE), $8)
            RETURNING id, name, phone, email, address, city, pincode, verification, age, created_at
            "#,
        )
        .bind(&data.name)
        .bind(&data.phone)
        .bind(&data.email)
        .bind(&data.address)
        .bind(&data.city)
        .bind(data.pincode)
        .bind(data.verification)
        .bind(data.age)
        .fetch_one(&self.pool)
        .await
    }

    async fn replace_contractor(
        &self,
        contractor_id: i64,
        data: &CreateContractorDto,
    ) -> Result<Contractor, Error> {
        sqlx::query_as::<_, Contractor>(
            r#"
            UPDATE contractors
            SET name = $2, phone = $3, email = $4, address = $5, city = $6,
                pincode = $7, verification = COALESCE($8, FALSE), age = $9
            WHERE id = $1
            RETURNING id, name, phone, email, address, city, pincode, verification, age, created_at
            "#,
        )
        .bind(contractor_id)
        .bind(&data.name)
        .bind(&data.phone)
        .bind(&data.email)
        .bind(&data.address)
        .bind(&data.city)
        .bind(data.pincode)
        .bind(data.verification)
        .bind(data.age)
        .fetch_one(&self.pool)
        .await
    }

    async fn delete_contractor(&self, contractor_id: i64) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM contractors WHERE id = $1")
            .bind(contractor_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::PgPool;

    use crate::db::{
        accountdb::AccountExt, verificationdb::VerificationExt, workerdb::WorkerExt,
    };
    use crate::dtos::{accountdtos::CreateBankAccountDto, workerdtos::CreateWorkerDto};

    fn contractor_payload(phone: &str) -> CreateContractorDto {
        CreateContractorDto {
            name: "Ravi".to_string(),
            phone: phone.to_string(),
            email: None,
            address: None,
            city: None,
            pincode: None,
            verification: Some(false),
            age: 30,
        }
    }

    fn worker_payload(tid: Option<i64>, phone: &str) -> CreateWorkerDto {
        CreateWorkerDto {
            tid,
            name: "Lal".to_string(),
            phone: phone.to_string(),
            email: None,
            address: None,
            verification: None,
            age: Some(20),
            work: None,
            city: None,
            pincode: None,
        }
    }

    fn account_payload() -> CreateBankAccountDto {
        CreateBankAccountDto {
            account_number: "12345678901234".to_string(),
            ifsc: "SBIN0001234".to_string(),
            bank_name: "State Bank".to_string(),
        }
    }

    #[sqlx::test]
    async fn created_contractor_shows_up_in_list(pool: PgPool) {
        let client = DBClient::new(pool);

        let saved = client
            .save_contractor(&contractor_payload("9990001111"))
            .await
            .unwrap();

        let all = client.get_contractors().await.unwrap();
        assert!(all.iter().any(|c| c.id == saved.id));
    }

    #[sqlx::test]
    async fn duplicate_phone_is_rejected(pool: PgPool) {
        let client = DBClient::new(pool);

        client
            .save_contractor(&contractor_payload("9990001111"))
            .await
            .unwrap();

        let err = client
            .save_contractor(&contractor_payload("9990001111"))
            .await
            .unwrap_err();

        match err {
            Error::Database(db_err) => assert!(db_err.is_unique_violation()),
            other => panic!("unexpected error: {:?}", other),
        }

        assert_eq!(client.get_contractors().await.unwrap().len(), 1);
    }

    #[sqlx::test]
    async fn deleting_a_contractor_clears_worker_association(pool: PgPool) {
        let client = DBClient::new(pool);

        let contractor = client
            .save_contractor(&contractor_payload("9990001111"))
            .await
            .unwrap();
        let worker = client
            .save_worker(&worker_payload(Some(contractor.id), "8880002222"))
            .await
            .unwrap();
        assert_eq!(worker.tid, Some(contractor.id));

        let deleted = client.delete_contractor(contractor.id).await.unwrap();
        assert_eq!(deleted, 1);

        let survivor = client.get_worker(worker.id).await.unwrap().unwrap();
        assert_eq!(survivor.tid, None);
    }

    #[sqlx::test]
    async fn deleting_a_contractor_cascades_owned_rows(pool: PgPool) {
        let client = DBClient::new(pool);

        let contractor = client
            .save_contractor(&contractor_payload("9990001111"))
            .await
            .unwrap();
        client
            .save_contractor_account(contractor.id, &account_payload())
            .await
            .unwrap();
        client
            .save_contractor_verification(contractor.id, "profile/a.jpg", "idproof/a.jpg")
            .await
            .unwrap();

        client.delete_contractor(contractor.id).await.unwrap();

        assert!(client
            .get_contractor_accounts(contractor.id)
            .await
            .unwrap()
            .is_empty());
        assert!(client
            .get_contractor_verifications(contractor.id)
            .await
            .unwrap()
            .is_empty());
    }
}
