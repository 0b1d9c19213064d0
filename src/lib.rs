pub mod banking;
pub mod config;
pub mod data;
pub mod report;
pub mod teller;
