pub mod forwarding;
pub mod transport;
pub mod upstream_lookup;

pub use upstream_lookup::UpstreamLookup;
