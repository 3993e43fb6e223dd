pub mod a001_client;
pub mod a002_bank;
pub mod a003_currency;
