pub mod entries;

pub use entries::{
    AddDomainsRequest, DomainDto, DomainsResponse, MessageResponse, SizeResponse,
};
