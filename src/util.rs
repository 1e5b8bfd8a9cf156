use core::fmt;

/// Parse unsigned integers directly out of byte slices, without going through `str`.
///
/// Unlike `str::parse()`, a leading `+` is never accepted.
pub trait IntParseBytes: Default {
    fn _parse_bytes_push_digit(self, base: u8, digit: u8) -> Option<Self>;

    #[inline]
    fn parse_bytes(bytes: &[u8]) -> core::result::Result<Self, IntParseBytesError> {
        Self::parse_bytes_radix(bytes, 10)
    }

    fn parse_bytes_radix(bytes: &[u8], radix: u8) -> core::result::Result<Self, IntParseBytesError> {
        debug_assert!((2..=36).contains(&radix));

        if bytes.is_empty() {
            return Err(IntParseBytesError::Empty);
        }

        let mut res = Self::default();

        for &ch in bytes {
            let digit = match ch {
                b'0'..=b'9' => ch - b'0',
                b'a'..=b'z' => (ch - b'a') + 10,
                b'A'..=b'Z' => (ch - b'A') + 10,
                _ => return Err(IntParseBytesError::InvalidDigit),
            };

            if digit >= radix {
                return Err(IntParseBytesError::InvalidDigit);
            }

            res = res
                ._parse_bytes_push_digit(radix, digit)
                .ok_or(IntParseBytesError::Overflow)?
        }

        Ok(res)
    }
}

#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum IntParseBytesError {
    Empty,
    InvalidDigit,
    Overflow,
}

impl fmt::Display for IntParseBytesError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Empty => "cannot parse from empty data",
            Self::InvalidDigit => "invalid digit",
            Self::Overflow => "numerical overflow while parsing",
        })
    }
}

macro_rules! parse_bytes_int_impl {
    ($($ty:ty)*) => {
        $(
            impl IntParseBytes for $ty {
                #[inline]
                fn _parse_bytes_push_digit(self, base: u8, digit: u8) -> Option<Self> {
                    self.checked_mul(base as _)?.checked_add(digit as _)
                }
            }
        )*
    };
}

parse_bytes_int_impl! { u8 u16 u32 }

/// Split `s` at the last occurrence of `sep`, returning the part before it and (if present) the
/// part after it.
#[cfg(feature = "alloc")]
#[inline]
pub fn rsplit_once_byte(s: &str, sep: u8) -> (&str, Option<&str>) {
    match s.as_bytes().iter().rposition(|&ch| ch == sep) {
        Some(i) => (&s[..i], Some(&s[i + 1..])),
        None => (s, None),
    }
}
