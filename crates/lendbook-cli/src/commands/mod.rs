pub mod duration;
pub mod interest;
pub mod profit;
