//! Domain 模块
//!
//! 曲线点、扩展公钥、派生与各网络的地址编码

pub mod derivation;
pub mod extended_key;
pub mod network;
pub mod point;
pub mod registry;

// Re-exports
// 重新导出常用类型
pub use derivation::{derive, derive_child, DerivationPath, HARDENED_OFFSET};
pub use extended_key::ExtendedPublicKey;
pub use network::{AddressEncoder, EncodingScheme, NetworkDescriptor};
pub use point::CurvePoint;
pub use registry::NetworkRegistry;
