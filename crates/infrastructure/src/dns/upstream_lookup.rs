use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::{udp::UdpTransport, DnsTransport};
use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, instrument};
use warmdns_application::ports::{DnsAnswer, DnsLookup};
use warmdns_domain::config::ResolverConfig;
use warmdns_domain::{DomainError, RecordType};

/// [`DnsLookup`] backed by a single recursive resolver over UDP.
pub struct UpstreamLookup {
    transport: Box<dyn DnsTransport>,
    timeout: Duration,
    retry_times: u32,
}

impl UpstreamLookup {
    pub fn new(server_addr: SocketAddr, timeout: Duration, retry_times: u32) -> Self {
        Self::with_transport(Box::new(UdpTransport::new(server_addr)), timeout, retry_times)
    }

    pub fn with_transport(
        transport: Box<dyn DnsTransport>,
        timeout: Duration,
        retry_times: u32,
    ) -> Self {
        Self {
            transport,
            timeout,
            retry_times,
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Result<Self, DomainError> {
        let addr = config.socket_addr().ok_or_else(|| {
            DomainError::Transport(format!("Invalid resolver endpoint '{}'", config.endpoint))
        })?;
        Ok(Self::new(
            addr,
            Duration::from_millis(config.timeout_ms),
            config.retry_times,
        ))
    }

    async fn query_once(&self, name: &str, record_type: RecordType) -> Result<DnsAnswer, DomainError> {
        let (id, query) = MessageBuilder::build_query_with_id(name, &record_type)?;
        let response = self.transport.send(&query, self.timeout).await?;
        let parsed = ResponseParser::parse(&response.bytes, &record_type)?;

        if parsed.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response id {} does not match query id {}",
                parsed.id, id
            )));
        }

        let answer = DnsAnswer {
            ttls: parsed.matching_ttls,
            response_status: ResponseParser::rcode_to_status(parsed.rcode),
        };
        debug!(
            status = answer.response_status,
            matching = answer.ttls.len(),
            "Upstream answered"
        );
        Ok(answer)
    }
}

impl UpstreamLookup {
    fn is_retryable(error: &DomainError) -> bool {
        !matches!(error, DomainError::InvalidDomainName(_))
    }
}

#[async_trait]
impl DnsLookup for UpstreamLookup {
    #[instrument(skip(self), fields(protocol = self.transport.protocol_name()))]
    async fn lookup(&self, name: &str, record_type: RecordType) -> Result<DnsAnswer, DomainError> {
        let mut attempt = 0;
        loop {
            match self.query_once(name, record_type).await {
                Ok(answer) => return Ok(answer),
                Err(e) if attempt < self.retry_times && Self::is_retryable(&e) => {
                    attempt += 1;
                    debug!(attempt, error = %e, "Upstream query failed, retrying");
                }
                Err(e) => return Err(e),
            }
        }
    }
}
