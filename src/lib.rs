//! coinaddress - 由扩展公钥派生多链收款地址
//!
//! 只处理公钥：解码 xpub，沿非硬化路径做 CKDpub 派生，
//! 再按网络的编码方案输出地址。纯计算，无网络、无持久化。
//!
//! ```rust
//! let address = coinaddress::address_from_xpub(
//!     "bitcoin",
//!     "xpub661MyMwAqRbcFtXgS5sYJABqqG9YLmC4Q1Rdap9gSE8NqtwybGhePY2gZ29ESFjqJoCu1Rupje8YtGqsefD265TMg7usUDFdp6W1EGMcet8",
//!     "0",
//! )
//! .unwrap();
//! assert_eq!(address, "1FHz8bpEE5qUZ9XhfjzAbCCwo5bT1HMNAc");
//! ```

pub mod config;
pub mod domain;
pub mod encoding;
pub mod error;
pub mod infrastructure;
pub mod utils;

// 重新导出常用类型
pub use domain::{
    registry::NetworkRegistry, AddressEncoder, DerivationPath, EncodingScheme, ExtendedPublicKey,
    NetworkDescriptor,
};
pub use error::{AddressError, Result};

/// 缺省派生路径：第一个非硬化子密钥
pub const DEFAULT_PATH: &str = "0";

/// 按名称或符号查找网络（精确匹配）
pub fn get_network(name: &str) -> Option<&'static NetworkDescriptor> {
    domain::registry::get_network(name)
}

/// 由 xpub 与派生路径生成指定网络的地址
pub fn address_from_xpub(network: &str, xpub: &str, path: &str) -> Result<String> {
    domain::registry::resolve(network)?.address_from_xpub(xpub, path)
}

/// 按网络的编码方案校验地址；仅在网络未注册时返回错误
pub fn validate_address(network: &str, address: &str) -> Result<bool> {
    utils::AddressValidator::validate(network, address)
}

/// 已注册网络的 (名称, 符号)
pub fn supported_networks() -> Vec<(&'static str, &'static str)> {
    domain::registry::global()
        .networks()
        .map(|n| (n.name, n.symbol))
        .collect()
}

// 统一模块导出
pub mod prelude {
    pub use crate::{
        address_from_xpub,
        domain::{derive, CurvePoint, DerivationPath, ExtendedPublicKey, NetworkDescriptor},
        error::{AddressError, Result},
        get_network, validate_address,
    };
}
