//! CashAddr（Bitcoin Cash）
//!
//! prefix ":" base32(version_byte ∥ hash)，校验和为 40 位 BCH 码

use super::bits::convert_bits;
use super::{base32_decode, base32_encode};
use crate::error::{AddressError, Result};

const GENERATOR: [u64; 5] = [
    0x98_f2bc_8e61,
    0x79_b76d_99e2,
    0xf3_3e5f_b3c4,
    0xae_2eab_e2a8,
    0x1e_4f43_e470,
];

const CHECKSUM_LEN: usize = 8;

/// 地址类型（version byte 的高位部分）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressType {
    /// 公钥哈希
    P2KH = 0,
    /// 脚本哈希
    P2SH = 1,
}

impl AddressType {
    fn from_bits(bits: u8) -> Result<Self> {
        match bits {
            0 => Ok(AddressType::P2KH),
            1 => Ok(AddressType::P2SH),
            other => Err(AddressError::encoding(format!(
                "unknown cashaddr type {}",
                other
            ))),
        }
    }
}

pub(crate) fn polymod(values: &[u8]) -> u64 {
    let mut chk: u64 = 1;
    for &value in values {
        let top = chk >> 35;
        chk = ((chk & 0x07_ffff_ffff) << 5) ^ u64::from(value);
        for (i, g) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= g;
            }
        }
    }
    chk ^ 1
}

/// 每个字符取低 5 位，末尾补 0 分隔符
fn prefix_expand(prefix: &str) -> Vec<u8> {
    let mut ret: Vec<u8> = prefix.bytes().map(|b| b & 0x1f).collect();
    ret.push(0);
    ret
}

pub fn calculate_checksum(prefix: &str, payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let mut values = prefix_expand(prefix);
    values.extend_from_slice(payload);
    values.extend_from_slice(&[0u8; CHECKSUM_LEN]);
    let poly = polymod(&values);

    let mut checksum = [0u8; CHECKSUM_LEN];
    for (i, c) in checksum.iter_mut().enumerate() {
        *c = ((poly >> (5 * (7 - i))) & 0x1f) as u8;
    }
    checksum
}

/// hash 长度 -> version byte 低 3 位
fn size_code(len: usize) -> Result<u8> {
    match len {
        20 => Ok(0),
        24 => Ok(1),
        28 => Ok(2),
        32 => Ok(3),
        40 => Ok(4),
        48 => Ok(5),
        56 => Ok(6),
        64 => Ok(7),
        other => Err(AddressError::encoding(format!(
            "unsupported cashaddr hash length {}",
            other
        ))),
    }
}

fn hash_len(code: u8) -> usize {
    match code {
        0..=3 => 20 + 4 * code as usize,
        _ => 40 + 8 * (code as usize - 4),
    }
}

pub fn encode(prefix: &str, address_type: AddressType, hash: &[u8]) -> Result<String> {
    let version = ((address_type as u8) << 3) | size_code(hash.len())?;

    let mut raw = Vec::with_capacity(1 + hash.len());
    raw.push(version);
    raw.extend_from_slice(hash);

    let payload = convert_bits(&raw, 8, 5, true)?;
    let checksum = calculate_checksum(prefix, &payload);

    let mut combined = payload;
    combined.extend_from_slice(&checksum);

    Ok(format!("{}:{}", prefix, base32_encode(&combined)))
}

/// 解码地址；省略前缀时按 `expected_prefix` 计算校验和
pub fn decode(expected_prefix: &str, address: &str) -> Result<(AddressType, Vec<u8>)> {
    let lower = address.to_ascii_lowercase();
    if lower != address && address.to_ascii_uppercase() != address {
        return Err(AddressError::encoding("cashaddr has mixed case"));
    }

    let (prefix, body) = match lower.split_once(':') {
        Some((prefix, body)) => (prefix.to_string(), body.to_string()),
        None => (expected_prefix.to_string(), lower.clone()),
    };
    if prefix != expected_prefix {
        return Err(AddressError::encoding(format!(
            "prefix {} does not match {}",
            prefix, expected_prefix
        )));
    }

    let data = base32_decode(&body)
        .ok_or_else(|| AddressError::encoding("cashaddr contains invalid characters"))?;
    if data.len() <= CHECKSUM_LEN {
        return Err(AddressError::encoding("cashaddr payload too short"));
    }

    let mut values = prefix_expand(&prefix);
    values.extend_from_slice(&data);
    if polymod(&values) != 0 {
        return Err(AddressError::ChecksumMismatch);
    }

    let payload = &data[..data.len() - CHECKSUM_LEN];
    let raw = convert_bits(payload, 5, 8, false)?;
    let (&version, hash) = raw
        .split_first()
        .ok_or_else(|| AddressError::encoding("cashaddr payload is empty"))?;

    if version & 0x80 != 0 {
        return Err(AddressError::encoding("cashaddr version reserved bit set"));
    }
    let address_type = AddressType::from_bits((version >> 3) & 0x0f)?;
    if hash.len() != hash_len(version & 0x07) {
        return Err(AddressError::encoding("cashaddr hash length mismatch"));
    }

    Ok((address_type, hash.to_vec()))
}
