//! Composite setting types and their constructor contracts.
//!
//! Constructors take the raw text components the parser split out and reject
//! anything outside the type's domain with a [`ValueError`].

use std::{fmt, net::IpAddr, str::FromStr};

use super::ValueError;

const DEFAULT_SIP_PORT: u16 = 5060;
const DEFAULT_MSRP_PORT: u16 = 2855;

fn parse_port(kind: &'static str, raw: &str) -> Result<u16, ValueError> {
    raw.trim()
        .parse::<u16>()
        .map_err(|e| ValueError::invalid(kind, raw, e.to_string()))
}

fn parse_nonzero_port(kind: &'static str, raw: &str) -> Result<u16, ValueError> {
    match parse_port(kind, raw)? {
        0 => Err(ValueError::invalid(kind, raw, "port must be between 1 and 65535")),
        port => Ok(port),
    }
}

fn parse_host(kind: &'static str, raw: &str) -> Result<String, ValueError> {
    let host = raw.trim();
    if host.is_empty() || host.chars().any(char::is_whitespace) {
        return Err(ValueError::invalid(kind, raw, "host must be a non-empty name"));
    }
    Ok(host.to_string())
}

/// SIP/MSRP transport protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transport {
    /// Datagram transport.
    Udp,
    /// Stream transport.
    Tcp,
    /// TLS over TCP.
    Tls,
}

impl Transport {
    /// Lowercase protocol name.
    pub fn as_str(self) -> &'static str {
        match self {
            Transport::Udp => "udp",
            Transport::Tcp => "tcp",
            Transport::Tls => "tls",
        }
    }
}

impl FromStr for Transport {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "udp" => Ok(Transport::Udp),
            "tcp" => Ok(Transport::Tcp),
            "tls" => Ok(Transport::Tls),
            _ => Err(ValueError::invalid(
                "transport",
                s,
                "expected one of udp, tcp, tls",
            )),
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Local address to bind sockets to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocalIpAddress {
    /// Pick the address of the default route at runtime.
    #[default]
    Auto,
    /// A fixed address.
    Fixed(IpAddr),
}

impl LocalIpAddress {
    /// Builds a fixed address from its textual form.
    ///
    /// # Errors
    /// Returns `ValueError::Invalid` if the text is not an IPv4 or IPv6 address.
    pub fn new(raw: &str) -> Result<Self, ValueError> {
        raw.trim()
            .parse::<IpAddr>()
            .map(LocalIpAddress::Fixed)
            .map_err(|e| ValueError::invalid("local IP address", raw, e.to_string()))
    }
}

impl fmt::Display for LocalIpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalIpAddress::Auto => f.write_str("auto"),
            LocalIpAddress::Fixed(addr) => write!(f, "{addr}"),
        }
    }
}

/// Outbound proxy for SIP signalling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SipProxyAddress {
    /// Proxy host name or address.
    pub host: String,
    /// Proxy port, 5060 unless given.
    pub port: u16,
    /// Transport, UDP unless given.
    pub transport: Transport,
}

impl SipProxyAddress {
    /// # Errors
    /// Returns `ValueError::Invalid` for an empty host, a bad port, or an unknown transport.
    pub fn new(host: &str, port: Option<&str>, transport: Option<&str>) -> Result<Self, ValueError> {
        const KIND: &str = "SIP proxy address";

        Ok(Self {
            host: parse_host(KIND, host)?,
            port: port
                .map(|p| parse_nonzero_port(KIND, p))
                .transpose()?
                .unwrap_or(DEFAULT_SIP_PORT),
            transport: transport
                .map(str::parse::<Transport>)
                .transpose()?
                .unwrap_or(Transport::Udp),
        })
    }
}

impl fmt::Display for SipProxyAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.transport, self.host, self.port)
    }
}

/// Relay used for MSRP sessions. Only stream transports are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsrpRelayAddress {
    /// Relay host name or address.
    pub host: String,
    /// Relay port, 2855 unless given.
    pub port: u16,
    /// Transport, TLS unless given.
    pub transport: Transport,
}

impl MsrpRelayAddress {
    /// # Errors
    /// Returns `ValueError::Invalid` for an empty host, a bad port, or a transport other than TCP/TLS.
    pub fn new(host: &str, port: Option<&str>, transport: Option<&str>) -> Result<Self, ValueError> {
        const KIND: &str = "MSRP relay address";

        let transport = match transport {
            Some(raw) => match raw.parse::<Transport>()? {
                Transport::Udp => {
                    return Err(ValueError::invalid(KIND, raw, "MSRP relays require tcp or tls"));
                }
                other => other,
            },
            None => Transport::Tls,
        };

        Ok(Self {
            host: parse_host(KIND, host)?,
            port: port
                .map(|p| parse_nonzero_port(KIND, p))
                .transpose()?
                .unwrap_or(DEFAULT_MSRP_PORT),
            transport,
        })
    }
}

impl fmt::Display for MsrpRelayAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.transport, self.host, self.port)
    }
}

/// Ports available for media streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortRange {
    /// First port of the range.
    pub low: u16,
    /// Last port of the range.
    pub high: u16,
}

impl PortRange {
    /// # Errors
    /// Returns `ValueError::Invalid` if either bound is not a port or `low >= high`.
    pub fn new(low: &str, high: &str) -> Result<Self, ValueError> {
        const KIND: &str = "port range";

        let range = Self {
            low: parse_port(KIND, low)?,
            high: parse_port(KIND, high)?,
        };

        if range.low >= range.high {
            return Err(ValueError::invalid(
                KIND,
                &format!("{low}:{high}"),
                "lower bound must be smaller than upper bound",
            ));
        }

        Ok(range)
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.low, self.high)
    }
}

/// Video frame size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Frame width.
    pub width: u32,
    /// Frame height.
    pub height: u32,
}

impl Resolution {
    /// # Errors
    /// Returns `ValueError::Invalid` unless both dimensions are positive integers.
    pub fn new(width: &str, height: &str) -> Result<Self, ValueError> {
        const KIND: &str = "resolution";

        let dimension = |raw: &str| match raw.trim().parse::<u32>() {
            Ok(0) => Err(ValueError::invalid(KIND, raw, "dimensions must be positive")),
            Ok(value) => Ok(value),
            Err(e) => Err(ValueError::invalid(KIND, raw, e.to_string())),
        };

        Ok(Self {
            width: dimension(width)?,
            height: dimension(height)?,
        })
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
