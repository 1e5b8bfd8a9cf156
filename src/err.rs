use core::fmt;

use crate::internal_prelude::*;

pub type Result<T> = core::result::Result<T, Error>;

/// An error encountered while parsing or constructing an [`IpAddress`](crate::IpAddress).
///
/// Every variant carries the literal that was rejected.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Error {
    /// The address is not a valid dotted-quad IPv4 literal.
    InvalidIpv4(String),
    /// The address is not a valid IPv6 literal.
    InvalidIpv6(String),
    /// The text after the `/` is not a valid prefix length for the address family.
    InvalidPrefix(String),
    /// The text after the `/` is not a contiguous netmask for the address family.
    InvalidNetmask(String),
    /// The input has no `:`, so it cannot carry an embedded IPv4 address.
    NotMappedFormat(String),
    /// The last `:`-separated segment of the input is not a dotted-quad IPv4 literal.
    UnknownMappedFormat(String),
    /// The reconstructed IPv6 address has nonzero bits above the low 32, so it cannot be
    /// rewritten as `::ffff:a.b.c.d`.
    NotAMappedAddress(String),
}

impl Error {
    /// Get the literal this error refers to.
    pub fn literal(&self) -> &str {
        match self {
            Self::InvalidIpv4(s)
            | Self::InvalidIpv6(s)
            | Self::InvalidPrefix(s)
            | Self::InvalidNetmask(s)
            | Self::NotMappedFormat(s)
            | Self::UnknownMappedFormat(s)
            | Self::NotAMappedAddress(s) => s,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::InvalidIpv4(_) => "invalid IPv4 address",
            Self::InvalidIpv6(_) => "invalid IPv6 address",
            Self::InvalidPrefix(_) => "invalid prefix length",
            Self::InvalidNetmask(_) => "invalid netmask",
            Self::NotMappedFormat(_) => "not mapped format",
            Self::UnknownMappedFormat(_) => "unknown mapped format",
            Self::NotAMappedAddress(_) => "is not a mapped address",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {:?}", self.message(), self.literal())
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal() {
        assert_eq!(Error::InvalidIpv4("10.0.0.256".into()).literal(), "10.0.0.256");
        assert_eq!(Error::NotMappedFormat("1.2.3.4".into()).literal(), "1.2.3.4");
        assert_eq!(
            Error::NotAMappedAddress("1::102:304/128".into()).literal(),
            "1::102:304/128"
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_display() {
        assert_eq!(
            Error::InvalidIpv4("10.0.0.256".into()).to_string(),
            "invalid IPv4 address: \"10.0.0.256\""
        );
        assert_eq!(
            Error::InvalidPrefix("33".into()).to_string(),
            "invalid prefix length: \"33\""
        );
        assert_eq!(
            Error::UnknownMappedFormat(".1:2.3.4".into()).to_string(),
            "unknown mapped format: \".1:2.3.4\""
        );
        assert_eq!(
            Error::NotAMappedAddress("1::102:304/128".into()).to_string(),
            "is not a mapped address: \"1::102:304/128\""
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(Error::InvalidIpv6(":1".into()));
        assert_eq!(err.to_string(), "invalid IPv6 address: \":1\"");
    }
}
