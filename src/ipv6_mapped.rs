//! IPv4-mapped IPv6 addresses.
//!
//! An IPv4-mapped IPv6 address (RFC 4291, section 2.5.5.2) embeds an IPv4 address in the low 32
//! bits of an IPv6 address whose top 80 bits are zero and next 16 bits are all ones:
//!
//! ```text
//! ::ffff:w.x.y.z
//! ```
//!
//! [`create()`] accepts any IPv6 literal whose last group is written as a dotted quad and
//! returns the equivalent mapped address. When the groups in front of the dotted quad are all
//! zero (as in `::172.16.10.1`), the `ffff` group is filled in:
//!
//! ```
//! # use ipaddress::ipv6_mapped;
//! let ip6 = ipv6_mapped::create("::172.16.10.1").unwrap();
//!
//! assert!(ip6.is_mapped());
//! assert_eq!(ip6.to_s_mapped(), "::ffff:172.16.10.1");
//! assert_eq!(ip6.to_hex(), "00000000000000000000ffffac100a01");
//! assert_eq!(ip6.mapped().unwrap().to_s(), "172.16.10.1");
//! ```

use crate::internal_prelude::*;
use crate::parse::{is_valid_ipv4, split_at_slash};
use crate::util::rsplit_once_byte;
use crate::{Error, IpAddress, IpBits, Result};

/// Build an IPv4-mapped IPv6 address from a literal whose last `:`-separated segment is a dotted
/// quad, optionally followed by `/prefix` or `/netmask`.
///
/// A prefix or netmask on the input is read in IPv4 terms and widened to IPv6 terms, so
/// `::1.2.3.4/24` becomes `::ffff:102:304/120`.
///
/// # Errors
///
/// - [`Error::NotMappedFormat`] if the address has no `:`.
/// - [`Error::UnknownMappedFormat`] if the last segment is not a dotted-quad IPv4 literal.
/// - [`Error::NotAMappedAddress`] if the groups in front of the dotted quad are neither all zero
///   nor `0:0:0:0:0:ffff`.
/// - Any error from parsing the embedded IPv4 address, its prefix, or the rebuilt IPv6 literal,
///   unchanged.
pub fn create(s: &str) -> Result<IpAddress> {
    let (addr, netmask) = split_at_slash(s);

    let (head, ipv4_str) = match rsplit_once_byte(addr, b':') {
        (head, Some(ipv4_str)) => (head, ipv4_str),
        (_, None) => return Err(Error::NotMappedFormat(s.into())),
    };

    if !is_valid_ipv4(ipv4_str) {
        return Err(Error::UnknownMappedFormat(s.into()));
    }

    let netmask: String = netmask.map(|m| format!("/{}", m)).unwrap_or_default();
    let ipv4 = IpAddress::parse(&format!("{}{}", ipv4_str, netmask))?;

    let ip_bits = &IpBits::V6;
    let part_mod = ip_bits.part_mod as u128;
    let host = ipv4.host_address();

    let rebuild_ipv4 = format!(
        "{:x}:{:x}/{}",
        (host >> ip_bits.part_bits) % part_mod,
        host % part_mod,
        ip_bits.bits - ipv4.prefix().host_prefix(),
    );
    let rebuild_ipv6 = format!("{}:{}", head, rebuild_ipv4);

    let ipv6 = IpAddress::parse(&rebuild_ipv6)?;
    if ipv6.is_mapped() {
        return Ok(ipv6);
    }

    // Only "::a.b.c.d" can still be turned into "::ffff:a.b.c.d"
    if ipv6.host_address() >> 32 != 0 {
        return Err(Error::NotAMappedAddress(rebuild_ipv6));
    }

    IpAddress::parse(&format!("::ffff:{}", rebuild_ipv4))
}
