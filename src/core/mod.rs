pub mod bmi;
pub mod profile;
pub mod units;
