pub mod rule;
pub mod types;
