//! 错误类型
//!
//! 所有错误都作为值返回给调用方，库内部不做任何重试或恢复

/// 地址派生错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// 未注册的网络标识符
    #[error("unknown network: {0}")]
    UnknownNetwork(String),

    /// 扩展公钥载荷长度错误（标准长度 78 字节）
    #[error("invalid extended key length: expected 78 bytes, got {0}")]
    InvalidKeyLength(usize),

    #[error("invalid key prefix: 0x{0:02x}")]
    InvalidKeyPrefix(u8),

    /// 公钥/坐标格式错误
    #[error("invalid key format: {0}")]
    InvalidKeyFormat(String),

    #[error("base58 checksum mismatch")]
    ChecksumMismatch,

    /// x 坐标在 secp256k1 上没有对应的 y
    #[error("x coordinate has no square root on secp256k1")]
    NotQuadraticResidue,

    /// 公钥无法派生硬化子密钥
    #[error("hardened index {0:#x} requires a private key")]
    HardenedDerivationUnsupported(u32),

    /// IL >= n 或结果为无穷远点（BIP32 建议调用方改用 index + 1）
    #[error("invalid child key at index {0}")]
    InvalidChildKey(u32),

    #[error("invalid bit packing: {0}")]
    InvalidBitPacking(&'static str),

    #[error("encoding error: {0}")]
    EncodingError(String),

    /// 派生路径语法错误
    #[error("invalid derivation path: {0}")]
    InvalidPath(String),

    /// 字符不在 base58 字母表中
    #[error("invalid base58 string: {0}")]
    InvalidBase58(String),
}

impl AddressError {
    /// 稳定的错误码（日志与命令行输出使用）
    pub fn code(&self) -> &'static str {
        match self {
            AddressError::UnknownNetwork(_) => "unknown_network",
            AddressError::InvalidKeyLength(_) => "invalid_key_length",
            AddressError::InvalidKeyPrefix(_) => "invalid_key_prefix",
            AddressError::InvalidKeyFormat(_) => "invalid_key_format",
            AddressError::ChecksumMismatch => "checksum_mismatch",
            AddressError::NotQuadraticResidue => "not_quadratic_residue",
            AddressError::HardenedDerivationUnsupported(_) => "hardened_derivation_unsupported",
            AddressError::InvalidChildKey(_) => "invalid_child_key",
            AddressError::InvalidBitPacking(_) => "invalid_bit_packing",
            AddressError::EncodingError(_) => "encoding_error",
            AddressError::InvalidPath(_) => "invalid_path",
            AddressError::InvalidBase58(_) => "invalid_base58",
        }
    }

    pub fn encoding(msg: impl Into<String>) -> Self {
        AddressError::EncodingError(msg.into())
    }

    pub fn key_format(msg: impl Into<String>) -> Self {
        AddressError::InvalidKeyFormat(msg.into())
    }
}

impl From<bs58::decode::Error> for AddressError {
    fn from(e: bs58::decode::Error) -> Self {
        AddressError::InvalidBase58(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AddressError>;
