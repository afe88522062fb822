//! Bech32 / Bech32m (BIP173 / BIP350) 与 SegWit 地址

use super::bits::convert_bits;
use super::{base32_decode, base32_encode};
use crate::error::{AddressError, Result};

const GENERATOR: [u32; 5] = [
    0x3b6a_57b2,
    0x2650_8e6d,
    0x1ea1_19fa,
    0x3d42_33dd,
    0x2a14_62b3,
];

const CHECKSUM_LEN: usize = 6;
const MAX_LENGTH: usize = 90;

/// 校验和变体：见证版本 0 使用 Bech32，1..=16 使用 Bech32m
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Bech32,
    Bech32m,
}

impl Variant {
    fn constant(self) -> u32 {
        match self {
            Variant::Bech32 => 1,
            Variant::Bech32m => 0x2bc8_30a3,
        }
    }

    fn for_witness_version(version: u8) -> Self {
        if version == 0 {
            Variant::Bech32
        } else {
            Variant::Bech32m
        }
    }
}

fn polymod(values: &[u8]) -> u32 {
    let mut chk: u32 = 1;
    for &value in values {
        let top = chk >> 25;
        chk = ((chk & 0x01ff_ffff) << 5) ^ u32::from(value);
        for (i, g) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= g;
            }
        }
    }
    chk
}

/// 高 3 位 ∥ 0 ∥ 低 5 位
fn hrp_expand(hrp: &str) -> Vec<u8> {
    let bytes = hrp.as_bytes();
    let mut ret = Vec::with_capacity(bytes.len() * 2 + 1);
    ret.extend(bytes.iter().map(|b| b >> 5));
    ret.push(0);
    ret.extend(bytes.iter().map(|b| b & 0x1f));
    ret
}

fn create_checksum(hrp: &str, data: &[u8], variant: Variant) -> [u8; CHECKSUM_LEN] {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0u8; CHECKSUM_LEN]);
    let pm = polymod(&values) ^ variant.constant();

    let mut checksum = [0u8; CHECKSUM_LEN];
    for (i, c) in checksum.iter_mut().enumerate() {
        *c = ((pm >> (5 * (5 - i))) & 0x1f) as u8;
    }
    checksum
}

/// 识别校验和变体；校验失败返回 None
pub fn verify_checksum(hrp: &str, data: &[u8]) -> Option<Variant> {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    match polymod(&values) {
        c if c == Variant::Bech32.constant() => Some(Variant::Bech32),
        c if c == Variant::Bech32m.constant() => Some(Variant::Bech32m),
        _ => None,
    }
}

fn check_hrp(hrp: &str) -> Result<()> {
    if hrp.is_empty() || hrp.len() > 83 {
        return Err(AddressError::encoding("bech32 hrp must be 1..=83 characters"));
    }
    if !hrp.bytes().all(|b| (33..=126).contains(&b)) {
        return Err(AddressError::encoding("bech32 hrp contains invalid characters"));
    }
    Ok(())
}

/// 对 5 位数据编码（hrp 输出为小写）
pub fn encode(hrp: &str, data: &[u8], variant: Variant) -> Result<String> {
    check_hrp(hrp)?;
    let hrp = hrp.to_ascii_lowercase();
    let checksum = create_checksum(&hrp, data, variant);

    let mut combined = Vec::with_capacity(data.len() + CHECKSUM_LEN);
    combined.extend_from_slice(data);
    combined.extend_from_slice(&checksum);

    Ok(format!("{}1{}", hrp, base32_encode(&combined)))
}

/// 解码为 (hrp, 5 位数据, 变体)，数据不含校验和
pub fn decode(encoded: &str) -> Result<(String, Vec<u8>, Variant)> {
    if encoded.len() > MAX_LENGTH {
        return Err(AddressError::encoding("bech32 string too long"));
    }
    let has_lower = encoded.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = encoded.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(AddressError::encoding("bech32 string has mixed case"));
    }
    let encoded = encoded.to_ascii_lowercase();

    let sep = encoded
        .rfind('1')
        .ok_or_else(|| AddressError::encoding("bech32 separator missing"))?;
    let (hrp, rest) = encoded.split_at(sep);
    check_hrp(hrp)?;

    let data = base32_decode(&rest[1..])
        .ok_or_else(|| AddressError::encoding("bech32 data contains invalid characters"))?;
    if data.len() < CHECKSUM_LEN {
        return Err(AddressError::encoding("bech32 data shorter than checksum"));
    }

    let variant = verify_checksum(hrp, &data).ok_or(AddressError::ChecksumMismatch)?;
    let payload_len = data.len() - CHECKSUM_LEN;

    Ok((hrp.to_string(), data[..payload_len].to_vec(), variant))
}

/// SegWit 地址：witness_version ∥ convertbits(program, 8, 5)
pub fn encode_segwit(hrp: &str, witness_version: u8, program: &[u8]) -> Result<String> {
    check_witness(witness_version, program)?;

    let mut data = Vec::with_capacity(1 + (program.len() * 8).div_ceil(5));
    data.push(witness_version);
    data.extend(convert_bits(program, 8, 5, true)?);

    encode(hrp, &data, Variant::for_witness_version(witness_version))
}

/// 解码 SegWit 地址，返回 (witness_version, program)
pub fn decode_segwit(expected_hrp: &str, address: &str) -> Result<(u8, Vec<u8>)> {
    let (hrp, data, variant) = decode(address)?;
    if hrp != expected_hrp.to_ascii_lowercase() {
        return Err(AddressError::encoding(format!(
            "hrp {} does not match {}",
            hrp, expected_hrp
        )));
    }

    let (&witness_version, program) = data
        .split_first()
        .ok_or_else(|| AddressError::encoding("segwit data is empty"))?;
    if variant != Variant::for_witness_version(witness_version) {
        return Err(AddressError::encoding("checksum variant does not match witness version"));
    }

    let program = convert_bits(program, 5, 8, false)?;
    check_witness(witness_version, &program)?;

    Ok((witness_version, program))
}

fn check_witness(version: u8, program: &[u8]) -> Result<()> {
    if version > 16 {
        return Err(AddressError::encoding("witness version must be 0..=16"));
    }
    if !(2..=40).contains(&program.len()) {
        return Err(AddressError::encoding("witness program must be 2..=40 bytes"));
    }
    if version == 0 && program.len() != 20 && program.len() != 32 {
        return Err(AddressError::encoding("v0 witness program must be 20 or 32 bytes"));
    }
    Ok(())
}
