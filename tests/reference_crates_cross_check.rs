//! 与 rust-bitcoin / bech32 crate 交叉验证
//!
//! 派生与编码全部由本 crate 完成，再用社区实现独立复算比对

mod common;

use std::str::FromStr;

use bitcoin::bip32::{ChildNumber, Xpub};
use bitcoin::secp256k1::Secp256k1;
use bitcoin::{Address, Network, PublicKey};
use coinaddress::{address_from_xpub, DerivationPath, ExtendedPublicKey};

use common::{TV1_XPUB, TV2_XPUB};

const PATHS: &[&[u32]] = &[&[], &[0], &[1], &[0, 1], &[5, 7], &[2, 1_000_000_000], &[31, 17, 4]];

fn path_string(indices: &[u32]) -> String {
    indices
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("/")
}

fn reference_child(xpub: &str, indices: &[u32]) -> Xpub {
    let secp = Secp256k1::verification_only();
    let root = Xpub::from_str(xpub).unwrap();
    let path: Vec<ChildNumber> = indices
        .iter()
        .map(|&i| ChildNumber::from_normal_idx(i).unwrap())
        .collect();
    root.derive_pub(&secp, &path).unwrap()
}

#[test]
fn test_child_xpubs_match_rust_bitcoin() {
    for xpub in [TV1_XPUB, TV2_XPUB] {
        let ours: ExtendedPublicKey = xpub.parse().unwrap();
        for indices in PATHS {
            let path = DerivationPath::new(indices.to_vec()).unwrap();
            let child = coinaddress::domain::derive(&ours, &path).unwrap();
            let reference = reference_child(xpub, indices);

            assert_eq!(child.to_string(), reference.to_string(), "path {:?}", indices);
            let reference_fingerprint = reference.fingerprint();
            let expected: &[u8] = reference_fingerprint.as_ref();
            assert_eq!(&child.fingerprint()[..], expected);
            assert_eq!(
                child.public_key.to_compressed(),
                reference.public_key.serialize()
            );
        }
    }
}

#[test]
fn test_p2pkh_and_p2wpkh_match_rust_bitcoin() {
    for xpub in [TV1_XPUB, TV2_XPUB] {
        for indices in PATHS {
            let reference = PublicKey::new(reference_child(xpub, indices).public_key);
            let path = path_string(indices);

            assert_eq!(
                address_from_xpub("bitcoin", xpub, &path).unwrap(),
                Address::p2pkh(&reference, Network::Bitcoin).to_string()
            );
            assert_eq!(
                address_from_xpub("bitcoin_bech32", xpub, &path).unwrap(),
                Address::p2wpkh(&reference, Network::Bitcoin).unwrap().to_string()
            );
        }
    }
}

#[test]
fn test_segwit_checksum_decodes_with_bech32_crate() {
    for indices in PATHS {
        let path = path_string(indices);
        let address = address_from_xpub("BTC-bech32", TV1_XPUB, &path).unwrap();

        let (hrp, version, program) = bech32::segwit::decode(&address).unwrap();
        assert_eq!(hrp.as_str(), "bc");
        assert_eq!(version.to_u8(), 0);

        let key: ExtendedPublicKey = TV1_XPUB.parse().unwrap();
        let child =
            coinaddress::domain::derive(&key, &DerivationPath::new(indices.to_vec()).unwrap())
                .unwrap();
        assert_eq!(program, child.identifier());

        let reencoded = bech32::segwit::encode_v0(bech32::Hrp::parse("bc").unwrap(), &program)
            .unwrap();
        assert_eq!(reencoded, address);
    }
}
