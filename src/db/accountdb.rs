use async_trait::async_trait;
use sqlx::Error;

use super::db::DBClient;
use crate::dtos::accountdtos::CreateBankAccountDto;
use crate::models::{contractormodel::ContractorAccount, workermodel::WorkerAccount};

/// Bank account rows for both owner kinds. Accounts expose no update or
/// delete surface; removal happens through the owner's cascade.
#[async_trait]
pub trait AccountExt {
    async fn get_contractor_accounts(
        &self,
        owner_id: i64,
    ) -> Result<Vec<ContractorAccount>, Error>;

    async fn save_contractor_account(
        &self,
        owner_id: i64,
        data: &CreateBankAccountDto,
    ) -> Result<ContractorAccount, Error>;

    async fn get_worker_accounts(&self, owner_id: i64) -> Result<Vec<WorkerAccount>, Error>;

    async fn save_worker_account(
        &self,
        owner_id: i64,
        data: &CreateBankAccountDto,
    ) -> Result<WorkerAccount, Error>;
}

#[async_trait]
impl AccountExt for DBClient {
    async fn get_contractor_accounts(
        &self,
        owner_id: i64,
    ) -> Result<Vec<ContractorAccount>, Error> {
        sqlx::query_as::<_, ContractorAccount>(
            r#"
            SELECT id, owner_id, account_number, ifsc, bank_name, created_at
            FROM contractor_accounts
            WHERE owner_id = $1
            ORDER BY id
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn save_contractor_account(
        &self,
        owner_id: i64,
        data: &CreateBankAccountDto,
    ) -> Result<ContractorAccount, Error> {
        sqlx::query_as::<_, ContractorAccount>(
            r#"
            INSERT INTO contractor_accounts (owner_id, account_number, ifsc, bank_name)
            VALUES ($1, $2, $3, $4)
            RETURNING id, owner_id, account_number, ifsc, bank_name, created_at
            "#,
        )
        .bind(owner_id)
        .bind(&data.account_number)
        .bind(&data.ifsc)
        .bind(&data.bank_name)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_worker_accounts(&self, owner_id: i64) -> Result<Vec<WorkerAccount>, Error> {
        sqlx::query_as::<_, WorkerAccount>(
            r#"
            SELECT id, owner_id, account_number, ifsc, bank_name, created_at
            FROM worker_accounts
            WHERE owner_id = $1
            ORDER BY id
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn save_worker_account(
        &self,
        owner_id: i64,
        data: &CreateBankAccountDto,
    ) -> Result<WorkerAccount, Error> {
        sqlx::query_as::<_, WorkerAccount>(
            r#"
            INSERT INTO worker_accounts (owner_id, account_number, ifsc, bank_name)
            VALUES ($1, $2, $3, $4)
            RETURNING id, owner_id, account_number, ifsc, bank_name, created_at
            "#,
        )
        .bind(owner_id)
        .bind(&data.account_number)
        .bind(&data.ifsc)
        .bind(&data.bank_name)
        .fetch_one(&self.pool)
        .await
    }
}
