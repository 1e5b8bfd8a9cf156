//! Parsing, validation and canonical rendering of IPv4 and IPv6 addresses, with first-class
//! support for IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`).
//!
//! ## Overview
//!
//! The central type is [`IpAddress`]: an address value (stored as a `u128`) plus a CIDR
//! [`Prefix`]. It is created with [`IpAddress::parse()`], which accepts an optional `/prefix` or
//! `/netmask` suffix:
//!
//! ```
//! # use ipaddress::IpAddress;
//! let ip = IpAddress::parse("172.16.10.1/24").unwrap();
//! assert!(ip.is_ipv4());
//! assert_eq!(ip.to_string(), "172.16.10.1/24");
//!
//! let ip = IpAddress::parse("2001:DB8:0:0:8:800:200C:417A/64").unwrap();
//! assert_eq!(ip.to_string(), "2001:db8::8:800:200c:417a/64");
//! ```
//!
//! ## Mapped addresses
//!
//! IPv6 literals whose last group is a dotted quad are normalized into IPv4-mapped form by
//! [`ipv6_mapped::create()`]; `IpAddress::parse()` does this automatically. See the
//! [`ipv6_mapped`] module for details.
//!
//! ```
//! # use ipaddress::IpAddress;
//! let ip = IpAddress::parse("::13.1.68.3").unwrap();
//! assert!(ip.is_mapped());
//! assert_eq!(ip.to_s_mapped(), "::ffff:13.1.68.3");
//! ```
//!
//! ## Features
//!
//! - `std` (default): implements `std::error::Error` for the error types, and adds conversions
//!   to/from the `std::net` address types.
//! - `alloc` (implied by `std`): enables [`IpAddress`], the parser, and the [`ipv6_mapped`]
//!   module, all of which build `String`s.
//!
//! Without either feature, only the allocation-free building blocks are available: [`IpBits`],
//! [`Prefix`], [`Inet4Addr`] and [`Inet6Addr`].
//!
//! On Unix, [`Inet4Addr`] and [`Inet6Addr`] also convert to and from `libc::in_addr` and
//! `libc::in6_addr`.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

mod bits;
mod inaddr;
mod prefix;
mod util;

pub use bits::*;
pub use inaddr::*;
pub use prefix::*;

#[allow(unused_imports)]
mod internal_prelude {
    cfg_if::cfg_if! {
        if #[cfg(feature = "std")] {
            pub use std::string::{String, ToString};
        } else if #[cfg(feature = "alloc")] {
            pub use alloc::{
                format,
                string::{String, ToString},
            };
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "alloc")] {
        mod address;
        mod err;
        mod parse;

        #[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
        pub mod ipv6_mapped;

        pub use address::*;
        pub use err::{Error, Result};
        pub use parse::{is_valid, is_valid_ipv4, is_valid_ipv6, is_valid_netmask, split_at_slash};
    }
}
