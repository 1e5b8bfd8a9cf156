use core::fmt;

use crate::util::IntParseBytes;

/// An error that occurred while parsing an [`Inet4Addr`] or [`Inet6Addr`] literal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AddrParseError(());

impl fmt::Display for AddrParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("invalid address")
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
impl std::error::Error for AddrParseError {}

#[allow(clippy::many_single_char_names)]
pub(crate) fn parse_v4_octets(s: &[u8]) -> Option<[u8; 4]> {
    let mut items = s.split(|&ch| ch == b'.').map(|s| u8::parse_bytes(s).ok());

    let a = items.next().flatten()?;
    let b = items.next().flatten()?;
    let c = items.next().flatten()?;
    let d = items.next().flatten()?;

    if items.next().is_none() {
        Some([a, b, c, d])
    } else {
        None
    }
}

fn parse_hextet(s: &[u8]) -> Option<u16> {
    if s.len() > 4 {
        return None;
    }
    u16::parse_bytes_radix(s, 16).ok()
}

/// Parse a colon-separated list of hextets into the front of `buf`, returning how many were
/// parsed. An empty string is an empty list.
fn parse_hextet_list(s: &[u8], buf: &mut [u16]) -> Option<usize> {
    if s.is_empty() {
        return Some(0);
    }

    let mut n = 0;
    for item in s.split(|&ch| ch == b':') {
        *buf.get_mut(n)? = parse_hextet(item)?;
        n += 1;
    }
    Some(n)
}

fn find_double_colon(s: &[u8]) -> Option<usize> {
    s.windows(2).position(|w| w == b"::")
}

/// Fill `segs` from a hextet list that may contain one `::`.
fn parse_v6_hextets(s: &[u8], segs: &mut [u16]) -> Option<()> {
    match find_double_colon(s) {
        Some(i) => {
            let (left, right) = (&s[..i], &s[i + 2..]);
            if find_double_colon(right).is_some() {
                return None;
            }

            let nleft = parse_hextet_list(left, segs)?;

            let mut right_buf = [0; 8];
            let nright = parse_hextet_list(right, &mut right_buf[..segs.len()])?;

            // "::" has to stand in for at least one group
            if nleft + nright >= segs.len() {
                return None;
            }

            for seg in segs[nleft..].iter_mut() {
                *seg = 0;
            }
            let start = segs.len() - nright;
            segs[start..].copy_from_slice(&right_buf[..nright]);
            Some(())
        }

        None => {
            if parse_hextet_list(s, segs)? == segs.len() {
                Some(())
            } else {
                None
            }
        }
    }
}

pub(crate) fn parse_v6_segments(s: &[u8]) -> Option<[u16; 8]> {
    let mut segs = [0; 8];

    let last_colon_idx = s.iter().rposition(|&ch| ch == b':')?;
    let tail = &s[last_colon_idx + 1..];

    if tail.contains(&b'.') {
        // Embedded IPv4 in the last two groups
        let [a, b, c, d] = parse_v4_octets(tail)?;
        segs[6] = u16::from_be_bytes([a, b]);
        segs[7] = u16::from_be_bytes([c, d]);

        let head = if last_colon_idx > 0 && s[last_colon_idx - 1] == b':' {
            // Keep the "::" intact (e.g. "::a.b.c.d" or "1::a.b.c.d")
            &s[..=last_colon_idx]
        } else {
            &s[..last_colon_idx]
        };
        parse_v6_hextets(head, &mut segs[..6])?;
    } else {
        parse_v6_hextets(s, &mut segs)?;
    }

    Some(segs)
}

/// Write `segments` in RFC 5952 form: lowercase, no leading zeros, and the longest run (the
/// first, on ties) of two or more zero groups replaced by `::`.
pub(crate) fn fmt_v6_compressed(segments: &[u16; 8], f: &mut dyn fmt::Write) -> fmt::Result {
    let mut zeroed_range = 0..0;
    let mut first_zero = None;

    for (i, seg) in segments.iter().copied().enumerate() {
        if seg == 0 {
            if first_zero.is_none() {
                first_zero = Some(i);
            }
        } else if let Some(first_zero) = first_zero.take() {
            let new_range = first_zero..i;
            if new_range.len() > zeroed_range.len() {
                zeroed_range = new_range;
            }
        }
    }

    if let Some(first_zero) = first_zero {
        let new_range = first_zero..segments.len();
        if new_range.len() > zeroed_range.len() {
            zeroed_range = new_range;
        }
    }

    if zeroed_range.len() < 2 {
        zeroed_range = 0..0;
    }

    debug_assert!(segments[zeroed_range.clone()].iter().all(|&seg| seg == 0));

    for (i, seg) in segments.iter().copied().enumerate() {
        if zeroed_range.contains(&i) {
            if i == zeroed_range.start {
                f.write_str(":")?;
            }
            continue;
        }

        if i != 0 {
            f.write_str(":")?;
        }

        write!(f, "{:x}", seg)?;
    }

    if zeroed_range.contains(&(segments.len() - 1)) {
        f.write_str(":")?;
    }

    Ok(())
}

/// An IPv4 address literal (four octets, most significant first).
///
/// # Example
///
/// ```
/// # use ipaddress::Inet4Addr;
/// let addr: Inet4Addr = "172.16.10.1".parse().unwrap();
/// assert_eq!(addr.octets(), [172, 16, 10, 1]);
/// assert_eq!(u32::from(addr), 0xac10_0a01);
/// ```
#[derive(Copy, Clone, Eq, Hash, PartialEq)]
pub struct Inet4Addr([u8; 4]);

impl Inet4Addr {
    /// An IP address referring to localhost; i.e. `127.0.0.1`.
    pub const LOCALHOST: Self = Self::new(127, 0, 0, 1);
    /// An IP address representing an unspecified address; i.e. `0.0.0.0`.
    pub const UNSPECIFIED: Self = Self::new(0, 0, 0, 0);

    /// Create a new Ipv4 address from the given octets.
    #[inline]
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self([a, b, c, d])
    }

    /// Get the four octets that make up this address
    #[inline]
    pub const fn octets(&self) -> [u8; 4] {
        self.0
    }

    /// Check whether this address represents the "unspecified" address (`0.0.0.0`).
    #[inline]
    pub const fn is_unspecified(&self) -> bool {
        matches!(self.0, [0, 0, 0, 0])
    }

    /// Check whether this address represents a loopback address (`127.0.0.1/8`).
    #[inline]
    pub const fn is_loopback(&self) -> bool {
        self.0[0] == 127
    }

    /// Convert this IPv4 address to an IPv6 address of the form `::ffff:a.b.c.d`.
    #[allow(clippy::wrong_self_convention)]
    #[inline]
    pub const fn to_ipv6_mapped(&self) -> Inet6Addr {
        let [a, b, c, d] = self.0;
        Inet6Addr::new(
            0,
            0,
            0,
            0,
            0,
            0xffff,
            u16::from_be_bytes([a, b]),
            u16::from_be_bytes([c, d]),
        )
    }
}

impl From<u32> for Inet4Addr {
    #[inline]
    fn from(value: u32) -> Self {
        Self(value.to_be_bytes())
    }
}

impl From<Inet4Addr> for u32 {
    #[inline]
    fn from(addr: Inet4Addr) -> Self {
        u32::from_be_bytes(addr.0)
    }
}

impl core::str::FromStr for Inet4Addr {
    type Err = AddrParseError;

    #[inline]
    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        parse_v4_octets(s.as_bytes())
            .map(Self)
            .ok_or(AddrParseError(()))
    }
}

impl fmt::Debug for Inet4Addr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("\"")?;
        fmt::Display::fmt(self, f)?;
        f.write_str("\"")?;
        Ok(())
    }
}

impl fmt::Display for Inet4Addr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{}.{}.{}.{}", a, b, c, d)
    }
}

/// An IPv6 address literal (sixteen octets, most significant first).
///
/// Parsing accepts `::` compression and a dotted-quad in the last two groups. Formatting follows
/// RFC 5952, except that IPv4-mapped addresses are written as `::ffff:a.b.c.d`.
///
/// # Example
///
/// ```
/// # use ipaddress::Inet6Addr;
/// let addr: Inet6Addr = "0:0:0:0:0:ffff:8190:3426".parse().unwrap();
/// assert_eq!(addr.to_string(), "::ffff:129.144.52.38");
/// ```
#[derive(Copy, Clone, Eq, Hash, PartialEq)]
pub struct Inet6Addr([u8; 16]);

impl Inet6Addr {
    /// An IP address referring to localhost; i.e. `::1`.
    pub const LOCALHOST: Self = Self::new(0, 0, 0, 0, 0, 0, 0, 1);
    /// An IP address representing an unspecified address; i.e. `::`.
    pub const UNSPECIFIED: Self = Self::new(0, 0, 0, 0, 0, 0, 0, 0);

    /// Create a new Ipv6 address from eight 16-bit segments.
    #[allow(clippy::many_single_char_names, clippy::too_many_arguments)]
    pub const fn new(a: u16, b: u16, c: u16, d: u16, e: u16, f: u16, g: u16, h: u16) -> Self {
        let [a1, a2] = a.to_be_bytes();
        let [b1, b2] = b.to_be_bytes();
        let [c1, c2] = c.to_be_bytes();
        let [d1, d2] = d.to_be_bytes();
        let [e1, e2] = e.to_be_bytes();
        let [f1, f2] = f.to_be_bytes();
        let [g1, g2] = g.to_be_bytes();
        let [h1, h2] = h.to_be_bytes();

        Self([
            a1, a2, b1, b2, c1, c2, d1, d2, e1, e2, f1, f2, g1, g2, h1, h2,
        ])
    }

    /// Get the eight 16-bit segments that represent this Ipv6 address.
    #[inline]
    pub const fn segments(&self) -> [u16; 8] {
        let [a1, a2, b1, b2, c1, c2, d1, d2, e1, e2, f1, f2, g1, g2, h1, h2] = self.0;

        [
            u16::from_be_bytes([a1, a2]),
            u16::from_be_bytes([b1, b2]),
            u16::from_be_bytes([c1, c2]),
            u16::from_be_bytes([d1, d2]),
            u16::from_be_bytes([e1, e2]),
            u16::from_be_bytes([f1, f2]),
            u16::from_be_bytes([g1, g2]),
            u16::from_be_bytes([h1, h2]),
        ]
    }

    /// Get the sixteen octets that represent this IPv6 address.
    #[inline]
    pub const fn octets(&self) -> [u8; 16] {
        self.0
    }

    /// Check whether this address represents the "unspecified" address (`::`).
    #[inline]
    pub const fn is_unspecified(&self) -> bool {
        u128::from_be_bytes(self.0) == 0
    }

    /// Check whether this address represents a loopback address (`::1`).
    #[inline]
    pub const fn is_loopback(&self) -> bool {
        u128::from_be_bytes(self.0) == 1
    }

    /// If this address is of the form `::ffff:a.b.c.d`, return the IPv4 version (i.e. `a.b.c.d`).
    #[allow(clippy::wrong_self_convention)]
    #[inline]
    pub const fn to_ipv4_mapped(&self) -> Option<Inet4Addr> {
        match self.0 {
            [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 255, 255, a, b, c, d] => {
                Some(Inet4Addr::new(a, b, c, d))
            }
            _ => None,
        }
    }
}

impl From<u128> for Inet6Addr {
    #[inline]
    fn from(value: u128) -> Self {
        Self(value.to_be_bytes())
    }
}

impl From<Inet6Addr> for u128 {
    #[inline]
    fn from(addr: Inet6Addr) -> Self {
        u128::from_be_bytes(addr.0)
    }
}

impl core::str::FromStr for Inet6Addr {
    type Err = AddrParseError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let [a, b, c, d, e, f, g, h] =
            parse_v6_segments(s.as_bytes()).ok_or(AddrParseError(()))?;
        Ok(Self::new(a, b, c, d, e, f, g, h))
    }
}

impl fmt::Debug for Inet6Addr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("\"")?;
        fmt::Display::fmt(self, f)?;
        f.write_str("\"")?;
        Ok(())
    }
}

impl fmt::Display for Inet6Addr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(v4) = self.to_ipv4_mapped() {
            f.write_str("::ffff:")?;
            return fmt::Display::fmt(&v4, f);
        }

        fmt_v6_compressed(&self.segments(), f)
    }
}

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        impl From<libc::in_addr> for Inet4Addr {
            #[inline]
            fn from(a: libc::in_addr) -> Self {
                Self(a.s_addr.to_ne_bytes())
            }
        }

        impl From<Inet4Addr> for libc::in_addr {
            #[inline]
            fn from(a: Inet4Addr) -> Self {
                Self {
                    s_addr: u32::from_ne_bytes(a.0),
                }
            }
        }

        impl From<libc::in6_addr> for Inet6Addr {
            #[inline]
            fn from(a: libc::in6_addr) -> Self {
                Self(a.s6_addr)
            }
        }

        impl From<Inet6Addr> for libc::in6_addr {
            #[inline]
            fn from(a: Inet6Addr) -> Self {
                Self { s6_addr: a.0 }
            }
        }
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
impl From<Inet4Addr> for std::net::Ipv4Addr {
    #[inline]
    fn from(a: Inet4Addr) -> Self {
        a.0.into()
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
impl From<std::net::Ipv4Addr> for Inet4Addr {
    #[inline]
    fn from(a: std::net::Ipv4Addr) -> Self {
        Self(a.octets())
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
impl From<Inet6Addr> for std::net::Ipv6Addr {
    #[inline]
    fn from(a: Inet6Addr) -> Self {
        a.0.into()
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
impl From<std::net::Ipv6Addr> for Inet6Addr {
    #[inline]
    fn from(a: std::net::Ipv6Addr) -> Self {
        Self(a.octets())
    }
}
