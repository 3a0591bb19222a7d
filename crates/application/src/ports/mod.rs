mod dns_lookup;
mod seed_source;

pub use dns_lookup::{DnsAnswer, DnsLookup};
pub use seed_source::{SeedLines, SeedSource};
