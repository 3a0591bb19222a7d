pub mod entries;
pub mod health;

pub use health::health_check;
