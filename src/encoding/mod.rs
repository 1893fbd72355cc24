pub mod condition;
pub mod quantile;
