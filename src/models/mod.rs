pub mod absence;
pub mod day_balance;
pub mod day_status;
pub mod holiday;
pub mod insert_method;
pub mod profile;
pub mod time_card;
pub mod work_day;
