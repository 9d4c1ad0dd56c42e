pub mod evaluate;
pub mod reports;
