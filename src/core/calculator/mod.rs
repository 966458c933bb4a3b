pub mod pairing;
pub mod schedule;
