/// The two address families handled by this crate.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum IpFamily {
    V4,
    V6,
}

/// Static layout information for one address family.
///
/// An address is `bits` wide and is written as `bits / part_bits` groups ("parts"): four 8-bit
/// octets for IPv4, eight 16-bit hextets for IPv6. `part_mod` is `2^part_bits`, so
/// `(value >> shift) % part_mod` extracts a single part from a full-width integer.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct IpBits {
    pub family: IpFamily,
    pub bits: u8,
    pub part_bits: u8,
    pub part_mod: u32,
}

// INVARIANTS:
// - bits % part_bits == 0
// - part_mod == 1 << part_bits

impl IpBits {
    pub const V4: Self = Self {
        family: IpFamily::V4,
        bits: 32,
        part_bits: 8,
        part_mod: 1 << 8,
    };

    pub const V6: Self = Self {
        family: IpFamily::V6,
        bits: 128,
        part_bits: 16,
        part_mod: 1 << 16,
    };

    /// The number of parts an address of this family is written as (4 or 8).
    #[inline]
    pub const fn parts(&self) -> usize {
        (self.bits / self.part_bits) as usize
    }

    /// The largest host value representable in this family.
    #[inline]
    pub const fn max_value(&self) -> u128 {
        u128::MAX >> (128 - self.bits as u32)
    }

    /// Extract part number `idx` (counting from the most significant part) out of `value`.
    #[inline]
    pub const fn part(&self, value: u128, idx: usize) -> u32 {
        let shift = (self.parts() - 1 - idx) as u32 * self.part_bits as u32;
        ((value >> shift) % self.part_mod as u128) as u32
    }
}
