pub mod dns;
pub mod seed;
