pub mod contractormodel;
pub mod workermodel;
