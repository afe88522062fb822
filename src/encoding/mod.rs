//! 地址编码方案
//!
//! base58check（Bitcoin / Ripple 字母表）、bech32 SegWit、CashAddr、EIP-55

pub mod base58;
pub mod bech32;
pub mod bits;
pub mod cashaddr;
pub mod eip55;
pub mod ripple;

/// bech32 与 CashAddr 共用的 32 字符表
pub(crate) const BASE32_CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// 5 位数值 -> 字符
pub(crate) fn base32_encode(values: &[u8]) -> String {
    values
        .iter()
        .map(|&v| BASE32_CHARSET[(v & 0x1f) as usize] as char)
        .collect()
}

/// 字符 -> 5 位数值（仅接受小写）
pub(crate) fn base32_decode(data: &str) -> Option<Vec<u8>> {
    data.bytes()
        .map(|c| {
            BASE32_CHARSET
                .iter()
                .position(|&x| x == c)
                .map(|pos| pos as u8)
        })
        .collect()
}
