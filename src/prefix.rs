use core::fmt;

use crate::IpBits;

/// A CIDR prefix length, scoped to the bit width of one address family.
///
/// # Example
///
/// ```
/// # use ipaddress::{IpBits, Prefix};
/// let prefix = Prefix::new(24, &IpBits::V4).unwrap();
/// assert_eq!(prefix.host_prefix(), 8);
/// assert_eq!(prefix.netmask(), 0xffff_ff00);
/// ```
#[derive(Copy, Clone, Eq, Hash, PartialEq)]
pub struct Prefix {
    num: u8,
    ip_bits: &'static IpBits,
}

// INVARIANTS:
// - num <= ip_bits.bits

impl Prefix {
    /// Create a new prefix of length `num`. Returns `None` if `num` is wider than the family.
    #[inline]
    pub const fn new(num: u8, ip_bits: &'static IpBits) -> Option<Self> {
        if num <= ip_bits.bits {
            Some(Self { num, ip_bits })
        } else {
            None
        }
    }

    /// The prefix covering the whole address (`/32` or `/128`).
    #[inline]
    pub const fn full(ip_bits: &'static IpBits) -> Self {
        Self {
            num: ip_bits.bits,
            ip_bits,
        }
    }

    /// Translate a netmask into a prefix.
    ///
    /// Returns `None` if `mask` does not fit in the family or its one bits are not contiguous
    /// from the top.
    pub fn from_netmask(mask: u128, ip_bits: &'static IpBits) -> Option<Self> {
        if mask > ip_bits.max_value() {
            return None;
        }

        let aligned = mask << (128 - ip_bits.bits as u32);
        let ones = (!aligned).leading_zeros().min(ip_bits.bits as u32) as u8;

        let prefix = Self::new(ones, ip_bits)?;
        if prefix.netmask() == mask {
            Some(prefix)
        } else {
            None
        }
    }

    /// The number of leading network bits.
    #[inline]
    pub const fn num(&self) -> u8 {
        self.num
    }

    /// The layout of the family this prefix belongs to.
    #[inline]
    pub const fn ip_bits(&self) -> &'static IpBits {
        self.ip_bits
    }

    /// The number of host (non-network) bits; i.e. `bits - num`.
    #[inline]
    pub const fn host_prefix(&self) -> u8 {
        self.ip_bits.bits - self.num
    }

    /// The netmask for this prefix, as a full-width integer.
    #[inline]
    pub const fn netmask(&self) -> u128 {
        let host = self.host_prefix();
        if host == self.ip_bits.bits {
            0
        } else {
            self.ip_bits.max_value() ^ ((1u128 << host) - 1)
        }
    }
}

impl fmt::Debug for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Prefix")
            .field("num", &self.num)
            .field("bits", &self.ip_bits.bits)
            .finish()
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.num, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        assert_eq!(Prefix::new(0, &IpBits::V4).unwrap().num(), 0);
        assert_eq!(Prefix::new(32, &IpBits::V4).unwrap().num(), 32);
        assert_eq!(Prefix::new(33, &IpBits::V4), None);

        assert_eq!(Prefix::new(128, &IpBits::V6).unwrap().num(), 128);
        assert_eq!(Prefix::new(129, &IpBits::V6), None);

        assert_eq!(Prefix::full(&IpBits::V4), Prefix::new(32, &IpBits::V4).unwrap());
        assert_eq!(Prefix::full(&IpBits::V6), Prefix::new(128, &IpBits::V6).unwrap());
    }

    #[test]
    fn test_host_prefix() {
        assert_eq!(Prefix::new(24, &IpBits::V4).unwrap().host_prefix(), 8);
        assert_eq!(Prefix::new(0, &IpBits::V4).unwrap().host_prefix(), 32);
        assert_eq!(Prefix::new(64, &IpBits::V6).unwrap().host_prefix(), 64);
        assert_eq!(Prefix::full(&IpBits::V6).host_prefix(), 0);
    }

    #[test]
    fn test_netmask() {
        assert_eq!(Prefix::new(0, &IpBits::V4).unwrap().netmask(), 0);
        assert_eq!(Prefix::new(1, &IpBits::V4).unwrap().netmask(), 0x8000_0000);
        assert_eq!(Prefix::new(24, &IpBits::V4).unwrap().netmask(), 0xffff_ff00);
        assert_eq!(Prefix::full(&IpBits::V4).netmask(), 0xffff_ffff);

        assert_eq!(Prefix::new(0, &IpBits::V6).unwrap().netmask(), 0);
        assert_eq!(
            Prefix::new(64, &IpBits::V6).unwrap().netmask(),
            0xffff_ffff_ffff_ffff_0000_0000_0000_0000
        );
        assert_eq!(Prefix::full(&IpBits::V6).netmask(), u128::MAX);
    }

    #[test]
    fn test_from_netmask() {
        for ip_bits in [&IpBits::V4, &IpBits::V6].iter().copied() {
            for num in 0..=ip_bits.bits {
                let prefix = Prefix::new(num, ip_bits).unwrap();
                assert_eq!(Prefix::from_netmask(prefix.netmask(), ip_bits), Some(prefix));
            }
        }

        assert_eq!(Prefix::from_netmask(0xffff_00ff, &IpBits::V4), None);
        assert_eq!(Prefix::from_netmask(0x0a00_0001, &IpBits::V4), None);
        assert_eq!(Prefix::from_netmask(0x1_0000_0000, &IpBits::V4), None);
        assert_eq!(Prefix::from_netmask(1, &IpBits::V6), None);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_display_debug() {
        let prefix = Prefix::new(96, &IpBits::V6).unwrap();
        assert_eq!(format!("{}", prefix), "96");
        assert_eq!(format!("{:?}", prefix), "Prefix { num: 96, bits: 128 }");
    }
}
