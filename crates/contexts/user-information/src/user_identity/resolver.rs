//! Blocking DNS resolver over UDP.

use std::io::ErrorKind;
use std::net::{SocketAddr, UdpSocket};
use std::time::{Duration, Instant};

use common::ResolverConfig;
use dns_parser::{Builder, Packet, QueryClass, QueryType, RData, ResponseCode};
use tracing::{debug, warn};

use super::email::{DomainResolver, RecordKind, ResolveError};

const MAX_DNS_MESSAGE: usize = 4096;

/// Sends one recursive query per lookup to a configured nameserver.
#[derive(Debug, Clone)]
pub struct UdpDnsResolver {
    nameserver: String,
    timeout: Duration,
}

impl UdpDnsResolver {
    pub fn new(config: &ResolverConfig) -> Self {
        Self {
            nameserver: config.nameserver.clone(),
            timeout: config.timeout(),
        }
    }

    fn query(&self, domain: &str, kind: RecordKind) -> Result<bool, ResolveError> {
        let server: SocketAddr = self
            .nameserver
            .parse()
            .map_err(|_| ResolveError::InvalidNameserver(self.nameserver.clone()))?;
        let local = if server.is_ipv4() { "0.0.0.0:0" } else { "[::]:0" };

        let socket = UdpSocket::bind(local)?;
        socket.set_write_timeout(Some(self.timeout))?;
        socket.connect(server)?;

        let id: u16 = rand::random();
        let mut builder = Builder::new_query(id, true);
        builder.add_question(domain, false, query_type(kind), QueryClass::IN);
        let request = builder
            .build()
            .map_err(|_| ResolveError::Malformed(format!("query for {} is truncated", domain)))?;

        debug!(domain, record = %kind, nameserver = %server, "Sending DNS query");
        socket.send(&request)?;

        // Stray datagrams must not extend the lookup past one timeout
        let deadline = Instant::now() + self.timeout;
        let mut buf = [0u8; MAX_DNS_MESSAGE];
        loop {
            let remaining = deadline
                .checked_duration_since(Instant::now())
                .filter(|left| !left.is_zero())
                .ok_or(ResolveError::Timeout)?;
            socket.set_read_timeout(Some(remaining))?;

            let len = socket.recv(&mut buf)?;
            let packet = Packet::parse(&buf[..len])
                .map_err(|e| ResolveError::Malformed(e.to_string()))?;

            // Stray datagram from an earlier query
            if packet.header.id != id {
                continue;
            }

            return match packet.header.response_code {
                ResponseCode::NoError => Ok(packet
                    .answers
                    .iter()
                    .any(|answer| matches_kind(&answer.data, kind))),
                ResponseCode::NameError => Ok(false),
                code => Err(ResolveError::Malformed(format!(
                    "nameserver answered {:?}",
                    code
                ))),
            };
        }
    }
}

impl DomainResolver for UdpDnsResolver {
    fn has_record(&self, domain: &str, kind: RecordKind) -> Result<bool, ResolveError> {
        self.query(domain, kind).map_err(|e| {
            let e = match e {
                ResolveError::Io(io)
                    if matches!(io.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) =>
                {
                    ResolveError::Timeout
                }
                other => other,
            };
            warn!(domain, record = %kind, error = %e, "DNS lookup failed");
            e
        })
    }
}

fn query_type(kind: RecordKind) -> QueryType {
    match kind {
        RecordKind::Mx => QueryType::MX,
        RecordKind::A => QueryType::A,
        RecordKind::Aaaa => QueryType::AAAA,
    }
}

fn matches_kind(data: &RData<'_>, kind: RecordKind) -> bool {
    matches!(
        (data, kind),
        (RData::MX(_), RecordKind::Mx) | (RData::A(_), RecordKind::A) | (RData::AAAA(_), RecordKind::Aaaa)
    )
}
