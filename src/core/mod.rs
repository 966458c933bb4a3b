pub mod backup;
pub mod balance;
pub mod calculator;
pub mod clock;
pub mod config;
pub mod days;
pub mod export;
pub mod log;
pub mod logic;
pub mod report;
pub mod status;
