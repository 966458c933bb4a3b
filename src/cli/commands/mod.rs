pub mod absence;
pub mod add;
pub mod backup;
pub mod balance;
pub mod cards;
pub mod clock;
pub mod config;
pub mod db;
pub mod export;
pub mod holiday;
pub mod init;
pub mod log;
pub mod profile;
pub mod rm;
pub mod status;
pub mod today;
