use core::fmt;
use core::fmt::Write;

use crate::inaddr::fmt_v6_compressed;
use crate::internal_prelude::*;
use crate::{Inet4Addr, Inet6Addr, IpBits, IpFamily, Prefix};

/// The number of high bits of an IPv6 address that sit above an embedded IPv4 address.
const MAPPED_HIGH_BITS: u8 = 96;

/// An IPv4 or IPv6 address together with its CIDR prefix.
///
/// Values are immutable. They are created by [`IpAddress::parse()`] (or `str::parse()`),
/// [`ipv6_mapped::create()`](crate::ipv6_mapped::create), or from a raw value with
/// [`IpAddress::new()`].
///
/// `Display` renders the compressed address followed by the prefix (e.g. `::ffff:ac10:a01/128`),
/// so `to_string()` gives that form.
///
/// # Example
///
/// ```
/// # use ipaddress::IpAddress;
/// let ip: IpAddress = "::172.16.10.1".parse().unwrap();
///
/// assert!(ip.is_mapped());
/// assert_eq!(ip.to_s_mapped(), "::ffff:172.16.10.1");
/// assert_eq!(ip.to_string(), "::ffff:ac10:a01/128");
/// assert_eq!(ip.mapped().unwrap().to_s(), "172.16.10.1");
/// ```
#[derive(Copy, Clone, Eq, Hash, PartialEq)]
pub struct IpAddress {
    host_address: u128,
    prefix: Prefix,
}

// INVARIANTS:
// - host_address <= prefix.ip_bits().max_value()

impl IpAddress {
    /// Create an address from its numeric value and prefix. The family is taken from the prefix.
    ///
    /// Returns `None` if `host_address` does not fit in the family's bit width.
    #[inline]
    pub fn new(host_address: u128, prefix: Prefix) -> Option<Self> {
        if host_address <= prefix.ip_bits().max_value() {
            Some(Self {
                host_address,
                prefix,
            })
        } else {
            None
        }
    }

    /// The full numeric value of the address.
    #[inline]
    pub fn host_address(&self) -> u128 {
        self.host_address
    }

    #[inline]
    pub fn prefix(&self) -> Prefix {
        self.prefix
    }

    #[inline]
    pub fn ip_bits(&self) -> &'static IpBits {
        self.prefix.ip_bits()
    }

    #[inline]
    pub fn family(&self) -> IpFamily {
        self.ip_bits().family
    }

    #[inline]
    pub fn is_ipv4(&self) -> bool {
        self.family() == IpFamily::V4
    }

    #[inline]
    pub fn is_ipv6(&self) -> bool {
        self.family() == IpFamily::V6
    }

    /// Check whether this is an IPv4-mapped IPv6 address (`::ffff:a.b.c.d`); i.e. the top 80 bits
    /// are zero and the next 16 are all ones.
    #[inline]
    pub fn is_mapped(&self) -> bool {
        self.is_ipv6() && self.host_address >> 32 == 0xffff
    }

    /// Check whether this is the unspecified address (`0.0.0.0` or `::`).
    #[inline]
    pub fn is_unspecified(&self) -> bool {
        match self.family() {
            IpFamily::V4 => self.to_inet4().map_or(false, |a| a.is_unspecified()),
            IpFamily::V6 => self.to_inet6().map_or(false, |a| a.is_unspecified()),
        }
    }

    /// Check whether this is a loopback address (`127.0.0.0/8` or `::1`).
    #[inline]
    pub fn is_loopback(&self) -> bool {
        match self.family() {
            IpFamily::V4 => self.to_inet4().map_or(false, |a| a.is_loopback()),
            IpFamily::V6 => self.to_inet6().map_or(false, |a| a.is_loopback()),
        }
    }

    /// If this is an IPv4 address, get it as an [`Inet4Addr`].
    #[inline]
    pub fn to_inet4(&self) -> Option<Inet4Addr> {
        if self.is_ipv4() {
            Some(Inet4Addr::from(self.host_address as u32))
        } else {
            None
        }
    }

    /// If this is an IPv6 address, get it as an [`Inet6Addr`].
    #[inline]
    pub fn to_inet6(&self) -> Option<Inet6Addr> {
        if self.is_ipv6() {
            Some(Inet6Addr::from(self.host_address))
        } else {
            None
        }
    }

    /// If this is an IPv4-mapped IPv6 address, get the embedded IPv4 address.
    ///
    /// The IPv4 view keeps the part of the prefix that falls inside the low 32 bits, so
    /// `::ffff:10.0.0.0/120` maps to `10.0.0.0/24`.
    pub fn mapped(&self) -> Option<Self> {
        let v4 = self.to_inet6()?.to_ipv4_mapped()?;
        let prefix = Prefix::new(
            self.prefix.num().saturating_sub(MAPPED_HIGH_BITS),
            &IpBits::V4,
        )?;
        Self::new(u32::from(v4) as u128, prefix)
    }

    fn fmt_addr(&self, f: &mut dyn fmt::Write) -> fmt::Result {
        match self.family() {
            IpFamily::V4 => write!(f, "{}", Inet4Addr::from(self.host_address as u32)),
            IpFamily::V6 => fmt_v6_compressed(&Inet6Addr::from(self.host_address).segments(), f),
        }
    }

    /// The address in compressed form, without the prefix (e.g. `::ffff:ac10:a01` or
    /// `172.16.10.1`).
    pub fn to_s(&self) -> String {
        let mut s = String::new();
        // Writing to a String never fails
        let _ = self.fmt_addr(&mut s);
        s
    }

    /// The address with an IPv4-mapped tail written as a dotted quad (e.g. `::ffff:172.16.10.1`).
    ///
    /// Addresses that are not mapped are rendered like [`to_s()`](Self::to_s).
    pub fn to_s_mapped(&self) -> String {
        match self.mapped() {
            Some(v4) => format!("::ffff:{}", v4.to_s()),
            None => self.to_s(),
        }
    }

    /// Like [`to_s_mapped()`](Self::to_s_mapped), followed by the prefix of the IPv4 view (e.g.
    /// `::ffff:172.16.10.1/32`).
    pub fn to_string_mapped(&self) -> String {
        match self.mapped() {
            Some(v4) => format!("::ffff:{}", v4),
            None => self.to_string(),
        }
    }

    /// The address with every part written out; IPv6 hextets are zero-padded to four digits
    /// (e.g. `0000:0000:0000:0000:0000:ffff:ac10:0a01`).
    pub fn to_s_uncompressed(&self) -> String {
        let ip_bits = self.ip_bits();
        match ip_bits.family {
            IpFamily::V6 => {
                let mut s = String::with_capacity(39);
                for i in 0..ip_bits.parts() {
                    if i != 0 {
                        s.push(':');
                    }
                    let _ = write!(s, "{:04x}", ip_bits.part(self.host_address, i));
                }
                s
            }
            IpFamily::V4 => self.to_s(),
        }
    }

    /// Like [`to_s_uncompressed()`](Self::to_s_uncompressed), followed by the prefix.
    pub fn to_string_uncompressed(&self) -> String {
        format!("{}/{}", self.to_s_uncompressed(), self.prefix)
    }

    /// The numeric value as zero-padded lowercase hex (8 digits for IPv4, 32 for IPv6).
    pub fn to_hex(&self) -> String {
        format!(
            "{:0width$x}",
            self.host_address,
            width = self.ip_bits().bits as usize / 4
        )
    }
}

impl From<Inet4Addr> for IpAddress {
    #[inline]
    fn from(addr: Inet4Addr) -> Self {
        Self {
            host_address: u32::from(addr) as u128,
            prefix: Prefix::full(&IpBits::V4),
        }
    }
}

impl From<Inet6Addr> for IpAddress {
    #[inline]
    fn from(addr: Inet6Addr) -> Self {
        Self {
            host_address: addr.into(),
            prefix: Prefix::full(&IpBits::V6),
        }
    }
}

impl fmt::Debug for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("\"")?;
        fmt::Display::fmt(self, f)?;
        f.write_str("\"")?;
        Ok(())
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_addr(f)?;
        write!(f, "/{}", self.prefix)
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
impl From<IpAddress> for std::net::IpAddr {
    #[inline]
    fn from(addr: IpAddress) -> Self {
        match addr.family() {
            IpFamily::V4 => std::net::Ipv4Addr::from(addr.host_address as u32).into(),
            IpFamily::V6 => std::net::Ipv6Addr::from(addr.host_address).into(),
        }
    }
}
