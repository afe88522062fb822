//! Ripple base58
//!
//! 与 base58check 相同的校验和，但使用 Ripple 自己的字母表
//! (`rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz`)，
//! 账户地址版本字节为 0x00，因此地址总以 'r' 开头。

use bs58::Alphabet;

use super::base58::{decode_check_with, encode_check_with};
use crate::error::{AddressError, Result};

/// 账户 ID 版本字节
pub const ACCOUNT_ID_VERSION: u8 = 0x00;

/// 版本字节 ∥ payload ∥ 校验和
pub fn encode(payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(1 + payload.len());
    data.push(ACCOUNT_ID_VERSION);
    data.extend_from_slice(payload);
    encode_check_with(&data, Alphabet::RIPPLE)
}

/// 校验并去掉版本字节与校验和
pub fn decode(encoded: &str) -> Result<Vec<u8>> {
    let mut data = decode_check_with(encoded, Alphabet::RIPPLE)?;
    match data.first() {
        Some(&ACCOUNT_ID_VERSION) => {
            data.remove(0);
            Ok(data)
        }
        Some(&other) => Err(AddressError::encoding(format!(
            "ripple version byte 0x{:02x} is not an account id",
            other
        ))),
        None => Err(AddressError::encoding("ripple payload is empty")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::hash::hash160;

    #[test]
    fn test_account_id_vector() {
        let public_key =
            hex::decode("0330E7FC9D56BB25D6893BA3F317AE5BCF33B3291BD63DB32654A313222F7FD020")
                .unwrap();
        assert_eq!(
            encode(&hash160(&public_key)),
            "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh"
        );
    }

    #[test]
    fn test_roundtrip_preserves_leading_zeros() {
        for payload in [
            vec![],
            vec![0u8],
            vec![0u8, 0, 1, 2],
            vec![0u8; 20],
            (0u8..=40).collect::<Vec<_>>(),
        ] {
            let encoded = encode(&payload);
            assert!(encoded.starts_with('r'));
            assert_eq!(decode(&encoded).unwrap(), payload);
        }
    }

    #[test]
    fn test_leading_zero_maps_to_r() {
        // 版本字节 + 两个前导零 -> "rrr"
        assert_eq!(encode(&[0, 0, 1, 2]), "rrrW9ycZpq");
    }

    #[test]
    fn test_rejects_bitcoin_alphabet_string() {
        // '0' 与 'l' 都不在 Ripple 字母表中
        assert!(decode("0l").is_err());
        assert_eq!(
            decode("rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTj").unwrap_err(),
            AddressError::ChecksumMismatch
        );
    }
}
