//! 网络描述与地址编码器
//!
//! 每个网络只在"公钥 -> 地址"这一步不同，编码器是一组封闭的变体，
//! 通过 `match` 分派，共用同一条 xpub 解码与派生流水线。

use std::fmt;

use serde::Serialize;

use crate::domain::derivation::{self, DerivationPath};
use crate::domain::extended_key::ExtendedPublicKey;
use crate::domain::point::CurvePoint;
use crate::encoding::{base58, bech32, cashaddr, eip55, ripple};
use crate::error::{AddressError, Result};
use crate::utils::address_validator::AddressValidator;
use crate::utils::hash::{hash160, keccak256};

/// 地址编码方案
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodingScheme {
    /// version ∥ hash160，标准 base58 字母表
    Base58Check,
    /// SegWit bech32 (bc1...)
    Bech32Segwit,
    /// Bitcoin Cash CashAddr
    CashAddr,
    /// Ripple 字母表 base58
    RippleBase58,
    /// 0x + EIP-55 十六进制
    EthereumHex,
}

impl fmt::Display for EncodingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EncodingScheme::Base58Check => "base58check",
            EncodingScheme::Bech32Segwit => "bech32",
            EncodingScheme::CashAddr => "cashaddr",
            EncodingScheme::RippleBase58 => "ripple-base58",
            EncodingScheme::EthereumHex => "eip55-hex",
        };
        f.write_str(name)
    }
}

/// 编码器及其参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressEncoder {
    Base58Check { version: u8 },
    Bech32Segwit { hrp: &'static str, witness_version: u8 },
    CashAddr { prefix: &'static str },
    RippleBase58,
    EthereumHex,
}

impl AddressEncoder {
    pub fn scheme(&self) -> EncodingScheme {
        match self {
            AddressEncoder::Base58Check { .. } => EncodingScheme::Base58Check,
            AddressEncoder::Bech32Segwit { .. } => EncodingScheme::Bech32Segwit,
            AddressEncoder::CashAddr { .. } => EncodingScheme::CashAddr,
            AddressEncoder::RippleBase58 => EncodingScheme::RippleBase58,
            AddressEncoder::EthereumHex => EncodingScheme::EthereumHex,
        }
    }

    /// 前缀字节类方案的版本字节
    pub fn address_version_byte(&self) -> Option<u8> {
        match self {
            AddressEncoder::Base58Check { version } => Some(*version),
            AddressEncoder::RippleBase58 => Some(ripple::ACCOUNT_ID_VERSION),
            AddressEncoder::Bech32Segwit { witness_version, .. } => Some(*witness_version),
            AddressEncoder::CashAddr { .. } => Some(cashaddr::AddressType::P2KH as u8),
            AddressEncoder::EthereumHex => None,
        }
    }

    /// 公钥 -> 地址字符串
    pub fn public_key_to_address(&self, point: &CurvePoint) -> Result<String> {
        if !point.is_on_curve() {
            return Err(AddressError::encoding("public key is not a validated curve point"));
        }

        match self {
            AddressEncoder::Base58Check { version } => {
                Ok(base58::encode_address(*version, &compressed_hash160(point)))
            }
            AddressEncoder::Bech32Segwit {
                hrp,
                witness_version,
            } => bech32::encode_segwit(hrp, *witness_version, &compressed_hash160(point)),
            AddressEncoder::CashAddr { prefix } => cashaddr::encode(
                prefix,
                cashaddr::AddressType::P2KH,
                &compressed_hash160(point),
            ),
            AddressEncoder::RippleBase58 => Ok(ripple::encode(&compressed_hash160(point))),
            AddressEncoder::EthereumHex => {
                let uncompressed = point.to_uncompressed();
                let hash = keccak256(&uncompressed[1..]);
                let mut raw = [0u8; 20];
                raw.copy_from_slice(&hash[12..]);
                Ok(eip55::to_checksum_address(&raw))
            }
        }
    }

    /// 用同一方案解码并复核校验和、版本与载荷长度
    pub fn validate_address(&self, address: &str) -> bool {
        match self {
            AddressEncoder::Base58Check { version } => {
                AddressValidator::validate_base58check(address, *version)
            }
            AddressEncoder::Bech32Segwit {
                hrp,
                witness_version,
            } => AddressValidator::validate_segwit(address, hrp, *witness_version),
            AddressEncoder::CashAddr { prefix } => {
                AddressValidator::validate_cashaddr(address, prefix)
            }
            AddressEncoder::RippleBase58 => AddressValidator::validate_ripple(address),
            AddressEncoder::EthereumHex => AddressValidator::validate_ethereum(address),
        }
    }
}

fn compressed_hash160(point: &CurvePoint) -> [u8; 20] {
    hash160(&point.to_compressed())
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// 网络描述
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// 内置网络的静态描述
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkDescriptor {
    /// 规范名称 (bitcoin, litecoin, ...)
    pub name: &'static str,
    /// 符号 (BTC, LTC, ...)
    pub symbol: &'static str,
    pub encoder: AddressEncoder,
}

impl NetworkDescriptor {
    pub const fn new(name: &'static str, symbol: &'static str, encoder: AddressEncoder) -> Self {
        Self {
            name,
            symbol,
            encoder,
        }
    }

    /// 注册表接受的全部标识符
    pub fn identifiers(&self) -> [&'static str; 2] {
        [self.name, self.symbol]
    }

    pub fn encoding_scheme(&self) -> EncodingScheme {
        self.encoder.scheme()
    }

    pub fn address_version_byte(&self) -> Option<u8> {
        self.encoder.address_version_byte()
    }

    pub fn public_key_to_address(&self, point: &CurvePoint) -> Result<String> {
        self.encoder.public_key_to_address(point)
    }

    /// 派生并编码
    pub fn derive_address(&self, key: &ExtendedPublicKey, path: &DerivationPath) -> Result<String> {
        let child = derivation::derive(key, path)?;
        self.public_key_to_address(&child.public_key)
    }

    /// 完整流水线：解码 xpub -> 解析路径 -> 派生 -> 编码
    pub fn address_from_xpub(&self, xpub: &str, path: &str) -> Result<String> {
        let key = ExtendedPublicKey::deserialize(xpub)?;
        tracing::debug!(
            network = self.name,
            depth = key.depth,
            fingerprint = %hex::encode(key.fingerprint()),
            "decoded extended public key"
        );

        let path: DerivationPath = path.parse()?;
        let address = self.derive_address(&key, &path)?;
        tracing::debug!(network = self.name, path = %path, %address, "encoded address");
        Ok(address)
    }

    pub fn validate_address(&self, address: &str) -> bool {
        self.encoder.validate_address(address)
    }
}

impl fmt::Display for NetworkDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.symbol, self.encoding_scheme())
    }
}
