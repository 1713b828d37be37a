pub mod aggregate;
pub mod effects;
pub mod search;
