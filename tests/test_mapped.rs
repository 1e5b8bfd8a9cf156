#![cfg(feature = "std")]

use ipaddress::{ipv6_mapped, Error, IpAddress};

const VALID_MAPPED: &[(&str, u128)] = &[
    ("::13.1.68.3", 281470899930115),
    ("0:0:0:0:0:ffff:129.144.52.38", 281472855454758),
    ("::ffff:129.144.52.38", 281472855454758),
];

const VALID_MAPPED_IPV6: &[(&str, u128)] = &[
    ("::ffff:13.1.68.3", 281470899930115),
    ("0:0:0:0:0:ffff:8190:3426", 281472855454758),
    ("::ffff:8190:3426", 281472855454758),
];

const VALID_MAPPED_IPV6_CONVERSION: &[(&str, &str)] = &[
    ("::ffff:13.1.68.3", "13.1.68.3"),
    ("0:0:0:0:0:ffff:8190:3426", "129.144.52.38"),
    ("::ffff:8190:3426", "129.144.52.38"),
];

fn random_u32s(n: usize) -> Vec<u32> {
    let mut buf = vec![0; n * 4];
    getrandom::getrandom(&mut buf).unwrap();
    buf.chunks(4)
        .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}

fn dotted(v: u32) -> String {
    let [a, b, c, d] = v.to_be_bytes();
    format!("{}.{}.{}.{}", a, b, c, d)
}

#[test]
fn test_initialize() {
    assert!(IpAddress::parse("::172.16.10.1").is_ok());

    for &(ip, u128) in VALID_MAPPED.iter().chain(VALID_MAPPED_IPV6.iter()) {
        let addr = IpAddress::parse(ip).unwrap();
        assert_eq!(addr.host_address(), u128, "{}", ip);
        assert!(addr.is_mapped(), "{}", ip);
    }

    for &(ip, u128) in VALID_MAPPED.iter() {
        let addr = ipv6_mapped::create(ip).unwrap();
        assert_eq!(addr.host_address(), u128, "{}", ip);
        assert!(addr.is_mapped(), "{}", ip);
    }
}

#[test]
fn test_mapped_from_ipv6_conversion() {
    for &(ip6, ip4) in VALID_MAPPED_IPV6_CONVERSION.iter() {
        assert_eq!(IpAddress::parse(ip6).unwrap().mapped().unwrap().to_s(), ip4);
    }

    assert_eq!(
        IpAddress::parse("0:0:0:0:0:ffff:8190:3426").unwrap().mapped(),
        IpAddress::parse("::ffff:129.144.52.38").unwrap().mapped(),
    );
}

#[test]
fn test_attributes() {
    let ip = ipv6_mapped::create("::172.16.10.1").unwrap();

    assert_eq!(ip.to_string(), "::ffff:ac10:a01/128");
    assert_eq!(ip.prefix().num(), 128);
    assert_eq!(ip.to_s_mapped(), "::ffff:172.16.10.1");
    assert_eq!(ip.to_string_mapped(), "::ffff:172.16.10.1/32");
    assert_eq!(
        ip.to_string_uncompressed(),
        "0000:0000:0000:0000:0000:ffff:ac10:0a01/128"
    );
    assert_eq!(ip.host_address(), 281473568475649);
    assert!(ip.is_ipv6());
    assert!(ip.is_mapped());
}

#[test]
fn test_round_trip() {
    let ip = ipv6_mapped::create("::13.1.68.3").unwrap();
    assert_eq!(ip.host_address(), 281470899930115);
    assert_eq!(ip.to_s_mapped(), "::ffff:13.1.68.3");
}

#[test]
fn test_idempotent() {
    for s in [
        "::13.1.68.3",
        "::ffff:129.144.52.38",
        "::172.16.10.1",
        "::1.2.3.4/24",
        "::ffff:10.0.0.0/255.0.0.0",
    ]
    .iter()
    {
        let ip = ipv6_mapped::create(s).unwrap();
        let again = ipv6_mapped::create(&ip.to_string_mapped()).unwrap();
        assert_eq!(again, ip, "{}", s);
        assert_eq!(again.host_address(), ip.host_address());
        assert_eq!(again.prefix(), ip.prefix());
    }
}

#[test]
fn test_random_addresses() {
    for v in random_u32s(256) {
        for s in [format!("::{}", dotted(v)), format!("::ffff:{}", dotted(v))].iter() {
            let ip = ipv6_mapped::create(s).unwrap();
            assert!(ip.is_mapped(), "{}", s);
            assert_eq!(ip.host_address() >> 32, 0xffff, "{}", s);
            assert_eq!(ip.host_address() as u32, v, "{}", s);
            assert_eq!(ip.mapped().unwrap().to_s(), dotted(v));
            assert_eq!(ipv6_mapped::create(&ip.to_s_mapped()).unwrap(), ip);
        }
    }
}

#[test]
fn test_random_prefixes() {
    for v in random_u32s(64) {
        let num = (v % 33) as u8;
        let ip = ipv6_mapped::create(&format!("::{}/{}", dotted(v), num)).unwrap();
        assert_eq!(ip.prefix().num(), num + 96);
        assert_eq!(ip.mapped().unwrap().prefix().num(), num);
    }
}

#[test]
fn test_only_ffff_passes() {
    for v in random_u32s(64) {
        let group = (v >> 16) as u16;
        let s = format!("::{:x}:1.2.3.4", group);
        match group {
            0 | 0xffff => assert!(ipv6_mapped::create(&s).unwrap().is_mapped()),
            _ => assert_eq!(
                ipv6_mapped::create(&s),
                Err(Error::NotAMappedAddress(format!("::{:x}:102:304/128", group)))
            ),
        }
    }
}

#[test]
fn test_unknown_mapped_format() {
    for s in [
        "::",
        "::1",
        "::ffff:8190:3426",
        ".1:2.3.4",
        "::1.2.3",
        "::1.2.3.4.5",
        "::1.2.3.256",
        "::1.2.3.4:",
    ]
    .iter()
    {
        assert_eq!(
            ipv6_mapped::create(s),
            Err(Error::UnknownMappedFormat(s.to_string())),
            "{}",
            s
        );
    }
}

#[test]
fn test_not_mapped_format() {
    for s in ["", "1.2.3.4", "1.2.3.4/24", "garbage"].iter() {
        assert_eq!(
            ipv6_mapped::create(s),
            Err(Error::NotMappedFormat(s.to_string())),
            "{}",
            s
        );
    }
}
