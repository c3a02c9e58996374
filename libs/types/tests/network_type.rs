//! Network Discriminator Integration Tests
//!
//! Byte-exact extraction of the network byte from packed version fields and
//! case-insensitive name lookup.

use proptest::prelude::*;
use sdk_types::NetworkType;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("sdk_types=debug")
        .with_test_writer()
        .try_init();
}

#[test]
fn test_known_network_bytes() {
    let table = [
        (104u8, NetworkType::MainNet),
        (152, NetworkType::TestNet),
        (96, NetworkType::Mijin),
        (144, NetworkType::MijinTest),
    ];
    for (byte, expected) in table {
        let version = u64::from_le_bytes([0x03, byte, 0, 0, 0, 0, 0, 0]);
        assert_eq!(NetworkType::from_version(version), expected);
    }
}

#[test]
fn test_zero_byte_is_not_supported() {
    init_tracing();
    assert_eq!(NetworkType::from_version(0), NetworkType::NotSupportedNet);
    assert_eq!(NetworkType::from_version(0x0000_0000_0000_00ff), NetworkType::NotSupportedNet);
}

#[test]
fn test_name_lookup_is_case_insensitive() {
    for name in ["mijin_test", "MIJIN_TEST", "Mijin_Test"] {
        assert_eq!(NetworkType::from_name(name), NetworkType::MijinTest);
    }
    assert_eq!(NetworkType::from_name("main_net"), NetworkType::MainNet);
    assert_eq!(NetworkType::from_name("Test_Net"), NetworkType::TestNet);
    assert_eq!(NetworkType::from_name("mijin"), NetworkType::Mijin);
}

#[test]
fn test_unknown_names() {
    for name in ["unknown", "", "MAINNET", " MAIN_NET", "MIJIN-TEST"] {
        assert_eq!(NetworkType::from_name(name), NetworkType::NotSupportedNet, "{name:?}");
    }
}

#[test]
fn test_pack_and_extract_agree() {
    for network in NetworkType::SUPPORTED {
        for tx_version in [0u8, 1, 3, 0xff] {
            assert_eq!(NetworkType::from_version(network.to_version(tx_version)), network);
        }
    }
}

proptest! {
    #[test]
    fn prop_only_byte_one_matters(version in any::<u64>(), noise in any::<u64>()) {
        let mask = 0xff00u64;
        let mixed = (version & mask) | (noise & !mask);
        prop_assert_eq!(NetworkType::from_version(version), NetworkType::from_version(mixed));
    }

    #[test]
    fn prop_from_version_matches_byte_table(byte in any::<u8>(), low in any::<u8>()) {
        let version = u64::from_le_bytes([low, byte, 0, 0, 0, 0, 0, 0]);
        prop_assert_eq!(NetworkType::from_version(version), NetworkType::from_byte(byte));
        let expected_supported = matches!(byte, 104 | 152 | 96 | 144);
        prop_assert_eq!(NetworkType::from_byte(byte).is_supported(), expected_supported);
    }
}
