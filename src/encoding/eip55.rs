//! EIP-55 大小写校验和
//! https://eips.ethereum.org/EIPS/eip-55

use crate::utils::hash::keccak256;

/// 20 字节地址 -> 0x + 混合大小写十六进制
pub fn to_checksum_address(address: &[u8; 20]) -> String {
    let lower = hex::encode(address);
    let hash = keccak256(lower.as_bytes());

    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, ch) in lower.chars().enumerate() {
        if ch.is_ascii_alphabetic() && hash_nibble(&hash, i) >= 8 {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// 格式校验；含大写字母时再校验 EIP-55
pub fn is_valid_address(address: &str) -> bool {
    let Some(hex_part) = address.strip_prefix("0x") else {
        return false;
    };
    if hex_part.len() != 40 || !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return false;
    }

    let has_upper = hex_part.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = hex_part.chars().any(|c| c.is_ascii_lowercase());
    if !(has_upper && has_lower) {
        // 全小写或全大写视为未带校验和
        return true;
    }

    verify_checksum(hex_part)
}

fn verify_checksum(hex_part: &str) -> bool {
    let hash = keccak256(hex_part.to_ascii_lowercase().as_bytes());

    hex_part.chars().enumerate().all(|(i, ch)| {
        if !ch.is_ascii_alphabetic() {
            return true;
        }
        let should_be_uppercase = hash_nibble(&hash, i) >= 8;
        ch.is_ascii_uppercase() == should_be_uppercase
    })
}

fn hash_nibble(hash: &[u8; 32], i: usize) -> u8 {
    let byte = hash[i / 2];
    if i % 2 == 0 {
        byte >> 4
    } else {
        byte & 0x0f
    }
}
