pub mod sim;
pub mod units;
