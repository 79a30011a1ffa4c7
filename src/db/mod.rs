pub mod accountdb;
pub mod contractordb;
pub mod db;
pub mod verificationdb;
pub mod workerdb;
