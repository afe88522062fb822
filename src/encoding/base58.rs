//! Base58Check
//!
//! payload ∥ sha256d(payload)[0..4]，再按指定字母表做 base58 编码。
//! 前导零字节由 bs58 映射为字母表的首字符。

use bs58::Alphabet;

use crate::error::{AddressError, Result};
use crate::utils::hash::checksum;

const CHECKSUM_LEN: usize = 4;

/// 标准 Bitcoin 字母表
pub fn encode_check(payload: &[u8]) -> String {
    encode_check_with(payload, Alphabet::BITCOIN)
}

pub fn decode_check(encoded: &str) -> Result<Vec<u8>> {
    decode_check_with(encoded, Alphabet::BITCOIN)
}

pub(crate) fn encode_check_with(payload: &[u8], alphabet: &Alphabet) -> String {
    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum(payload));

    bs58::encode(data).with_alphabet(alphabet).into_string()
}

pub(crate) fn decode_check_with(encoded: &str, alphabet: &Alphabet) -> Result<Vec<u8>> {
    let mut data = bs58::decode(encoded).with_alphabet(alphabet).into_vec()?;

    if data.len() < CHECKSUM_LEN {
        return Err(AddressError::ChecksumMismatch);
    }

    let split = data.len() - CHECKSUM_LEN;
    if checksum(&data[..split]) != data[split..] {
        return Err(AddressError::ChecksumMismatch);
    }

    data.truncate(split);
    Ok(data)
}

/// 版本字节 ∥ hash160 -> 地址
pub fn encode_address(version: u8, hash: &[u8; 20]) -> String {
    let mut payload = [0u8; 21];
    payload[0] = version;
    payload[1..].copy_from_slice(hash);
    encode_check(&payload)
}

/// 解码地址并校验版本字节，返回 hash160
pub fn decode_address(address: &str, version: u8) -> Result<[u8; 20]> {
    let payload = decode_check(address)?;
    if payload.len() != 21 {
        return Err(AddressError::encoding(format!(
            "expected 21-byte payload, got {}",
            payload.len()
        )));
    }
    if payload[0] != version {
        return Err(AddressError::encoding(format!(
            "version byte 0x{:02x} does not match 0x{:02x}",
            payload[0], version
        )));
    }

    let mut hash = [0u8; 20];
    hash.copy_from_slice(&payload[1..]);
    Ok(hash)
}
