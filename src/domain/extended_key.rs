//! 扩展公钥（xpub）编解码
//!
//! 78 字节载荷布局：
//!
//! | 偏移 | 长度 | 字段 |
//! |------|------|------|
//! | 0    | 4    | version |
//! | 4    | 1    | depth |
//! | 5    | 4    | parent fingerprint |
//! | 9    | 4    | child number (大端) |
//! | 13   | 32   | chain code |
//! | 45   | 33   | 压缩公钥 |

use std::fmt;
use std::str::FromStr;

use crate::domain::point::{self, CurvePoint};
use crate::encoding::base58;
use crate::error::{AddressError, Result};
use crate::utils::hash::hash160;

pub const PAYLOAD_LEN: usize = 78;

/// 主网 xpub 版本字节
pub const XPUB_VERSION: [u8; 4] = [0x04, 0x88, 0xb2, 0x1e];

/// 解码后的扩展公钥
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtendedPublicKey {
    pub version: [u8; 4],
    pub depth: u8,
    pub parent_fingerprint: [u8; 4],
    pub child_number: u32,
    pub chain_code: [u8; 32],
    pub public_key: CurvePoint,
}

impl ExtendedPublicKey {
    /// 解析 base58check 编码的扩展公钥
    pub fn deserialize(encoded: &str) -> Result<Self> {
        let payload = base58::decode_check(encoded.trim())?;
        Self::from_payload(&payload)
    }

    pub fn serialize(&self) -> String {
        base58::encode_check(&self.to_payload())
    }

    pub fn from_payload(payload: &[u8]) -> Result<Self> {
        if payload.len() != PAYLOAD_LEN {
            return Err(AddressError::InvalidKeyLength(payload.len()));
        }

        let key_data = &payload[45..78];
        let prefix = key_data[0];
        if !matches!(
            prefix,
            point::PREFIX_EVEN | point::PREFIX_ODD | point::PREFIX_UNCOMPRESSED
        ) {
            return Err(AddressError::InvalidKeyPrefix(prefix));
        }
        // 0x04 在这里通过前缀检查，但 33 字节放不下未压缩坐标，由解压阶段拒绝
        let public_key = point::decompress(prefix, &key_data[1..])?;

        Ok(Self {
            version: take(&payload[0..4]),
            depth: payload[4],
            parent_fingerprint: take(&payload[5..9]),
            child_number: u32::from_be_bytes(take(&payload[9..13])),
            chain_code: take(&payload[13..45]),
            public_key,
        })
    }

    pub fn to_payload(&self) -> [u8; PAYLOAD_LEN] {
        let mut out = [0u8; PAYLOAD_LEN];
        out[0..4].copy_from_slice(&self.version);
        out[4] = self.depth;
        out[5..9].copy_from_slice(&self.parent_fingerprint);
        out[9..13].copy_from_slice(&self.child_number.to_be_bytes());
        out[13..45].copy_from_slice(&self.chain_code);
        out[45..78].copy_from_slice(&self.public_key.to_compressed());
        out
    }

    /// hash160(压缩公钥)
    pub fn identifier(&self) -> [u8; 20] {
        hash160(&self.public_key.to_compressed())
    }

    /// identifier 前 4 字节，子密钥的 parent_fingerprint
    pub fn fingerprint(&self) -> [u8; 4] {
        take(&self.identifier()[..4])
    }
}

impl FromStr for ExtendedPublicKey {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self> {
        Self::deserialize(s)
    }
}

impl fmt::Display for ExtendedPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

/// 切片长度由调用处的固定区间保证
fn take<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    out
}
