use crate::inaddr::{parse_v4_octets, parse_v6_segments};
use crate::util::{rsplit_once_byte, IntParseBytes};
use crate::{ipv6_mapped, Error, Inet6Addr, IpAddress, IpBits, IpFamily, Prefix, Result};

/// Split an address string at its last `/` into the address literal and the prefix or netmask
/// that follows it (if any). Surrounding whitespace is trimmed from both parts.
///
/// ```
/// # use ipaddress::split_at_slash;
/// assert_eq!(split_at_slash("10.0.0.1/24"), ("10.0.0.1", Some("24")));
/// assert_eq!(split_at_slash(" ::1 "), ("::1", None));
/// ```
pub fn split_at_slash(s: &str) -> (&str, Option<&str>) {
    let (addr, netmask) = rsplit_once_byte(s.trim(), b'/');
    (addr.trim(), netmask.map(str::trim))
}

/// Check whether `s` is a dotted-quad IPv4 literal (without a prefix).
#[inline]
pub fn is_valid_ipv4(s: &str) -> bool {
    parse_v4_octets(s.as_bytes()).is_some()
}

/// Check whether `s` is an IPv6 literal (without a prefix).
#[inline]
pub fn is_valid_ipv6(s: &str) -> bool {
    parse_v6_segments(s.as_bytes()).is_some()
}

/// Check whether `s` is an IPv4 or IPv6 literal (without a prefix).
#[inline]
pub fn is_valid(s: &str) -> bool {
    is_valid_ipv4(s) || is_valid_ipv6(s)
}

/// Check whether `s` is a netmask literal; i.e. an address whose one bits are contiguous from
/// the top (like `255.255.255.0` or `ffff:ffff::`).
pub fn is_valid_netmask(s: &str) -> bool {
    parse_netmask(s.as_bytes(), &IpBits::V4).is_some()
        || parse_netmask(s.as_bytes(), &IpBits::V6).is_some()
}

fn parse_netmask(s: &[u8], ip_bits: &'static IpBits) -> Option<Prefix> {
    let mask = match ip_bits.family {
        IpFamily::V4 => u32::from_be_bytes(parse_v4_octets(s)?) as u128,
        IpFamily::V6 => {
            let [a, b, c, d, e, f, g, h] = parse_v6_segments(s)?;
            Inet6Addr::new(a, b, c, d, e, f, g, h).into()
        }
    };

    Prefix::from_netmask(mask, ip_bits)
}

fn parse_prefix(netmask: Option<&str>, ip_bits: &'static IpBits) -> Result<Prefix> {
    let netmask = match netmask {
        Some(netmask) => netmask,
        None => return Ok(Prefix::full(ip_bits)),
    };

    if !netmask.is_empty() && netmask.bytes().all(|ch| ch.is_ascii_digit()) {
        u8::parse_bytes(netmask.as_bytes())
            .ok()
            .and_then(|num| Prefix::new(num, ip_bits))
            .ok_or_else(|| Error::InvalidPrefix(netmask.into()))
    } else {
        parse_netmask(netmask.as_bytes(), ip_bits)
            .ok_or_else(|| Error::InvalidNetmask(netmask.into()))
    }
}

fn parse_ipv4(addr: &str, netmask: Option<&str>) -> Result<IpAddress> {
    let octets = parse_v4_octets(addr.as_bytes()).ok_or_else(|| Error::InvalidIpv4(addr.into()))?;
    let prefix = parse_prefix(netmask, &IpBits::V4)?;

    IpAddress::new(u32::from_be_bytes(octets) as u128, prefix)
        .ok_or_else(|| Error::InvalidIpv4(addr.into()))
}

fn parse_ipv6(addr: &str, netmask: Option<&str>) -> Result<IpAddress> {
    let [a, b, c, d, e, f, g, h] =
        parse_v6_segments(addr.as_bytes()).ok_or_else(|| Error::InvalidIpv6(addr.into()))?;
    let prefix = parse_prefix(netmask, &IpBits::V6)?;

    IpAddress::new(Inet6Addr::new(a, b, c, d, e, f, g, h).into(), prefix)
        .ok_or_else(|| Error::InvalidIpv6(addr.into()))
}

impl IpAddress {
    /// Parse an address with an optional `/prefix` or `/netmask` suffix.
    ///
    /// Literals containing a `:` are IPv6. If the last `:`-separated segment is a dotted quad,
    /// the string is handed to [`ipv6_mapped::create()`], so the result is always a proper
    /// `::ffff:a.b.c.d` address. Anything else is parsed as IPv4.
    ///
    /// Without a suffix, the prefix covers the whole address (`/32` or `/128`).
    ///
    /// ```
    /// # use ipaddress::IpAddress;
    /// let ip = IpAddress::parse("172.16.10.1/255.255.255.0").unwrap();
    /// assert_eq!(ip.prefix().num(), 24);
    /// assert_eq!(ip.to_string(), "172.16.10.1/24");
    ///
    /// let ip = IpAddress::parse("2001:db8::8:800:200c:417a/64").unwrap();
    /// assert!(ip.is_ipv6());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let (addr, netmask) = split_at_slash(s);

        match rsplit_once_byte(addr, b':') {
            (_, Some(last)) if last.contains('.') => ipv6_mapped::create(s),
            (_, Some(_)) => parse_ipv6(addr, netmask),
            (_, None) => parse_ipv4(addr, netmask),
        }
    }
}

impl core::str::FromStr for IpAddress {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
