//! 网络注册表
//!
//! 进程内只有一份只读注册表，首次访问时构建，之后不再修改，
//! 并发读取无需加锁。

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::domain::network::{AddressEncoder, NetworkDescriptor};
use crate::error::{AddressError, Result};

/// 标识符 -> 网络描述
#[derive(Debug, Default)]
pub struct NetworkRegistry {
    networks: Vec<NetworkDescriptor>,
    by_identifier: HashMap<&'static str, usize>,
}

impl NetworkRegistry {
    /// 空注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 内置网络
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
        // hash160 系列
        // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

        registry.register(NetworkDescriptor::new(
            "bitcoin",
            "BTC",
            AddressEncoder::Base58Check { version: 0x00 },
        ));

        registry.register(NetworkDescriptor::new(
            "bitcoin_bech32",
            "BTC-bech32",
            AddressEncoder::Bech32Segwit {
                hrp: "bc",
                witness_version: 0,
            },
        ));

        registry.register(NetworkDescriptor::new(
            "bitcoin_cash",
            "BCH",
            AddressEncoder::CashAddr {
                prefix: "bitcoincash",
            },
        ));

        registry.register(NetworkDescriptor::new(
            "litecoin",
            "LTC",
            AddressEncoder::Base58Check { version: 0x30 },
        ));

        registry.register(NetworkDescriptor::new(
            "ripple",
            "XRP",
            AddressEncoder::RippleBase58,
        ));

        // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
        // Keccak 系列
        // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

        registry.register(NetworkDescriptor::new(
            "ethereum",
            "ETH",
            AddressEncoder::EthereumHex,
        ));

        registry
    }

    /// 以名称和符号注册网络；同名标识符后注册者生效
    pub fn register(&mut self, descriptor: NetworkDescriptor) {
        let slot = self.networks.len();
        self.networks.push(descriptor);

        for identifier in descriptor.identifiers() {
            if let Some(previous) = self.by_identifier.insert(identifier, slot) {
                tracing::warn!(
                    identifier,
                    replaced = self.networks[previous].name,
                    by = descriptor.name,
                    "network identifier re-registered"
                );
            }
        }
    }

    /// 精确、区分大小写的查找
    pub fn get(&self, name: &str) -> Option<&NetworkDescriptor> {
        self.by_identifier.get(name).map(|&slot| &self.networks[slot])
    }

    pub fn resolve(&self, name: &str) -> Result<&NetworkDescriptor> {
        self.get(name)
            .ok_or_else(|| AddressError::UnknownNetwork(name.to_string()))
    }

    /// 按注册顺序列出仍可通过名称访问的网络
    pub fn networks(&self) -> impl Iterator<Item = &NetworkDescriptor> {
        self.networks
            .iter()
            .enumerate()
            .filter(move |(slot, d)| self.by_identifier.get(d.name) == Some(slot))
            .map(|(_, d)| d)
    }

    pub fn len(&self) -> usize {
        self.networks().count()
    }

    pub fn is_empty(&self) -> bool {
        self.by_identifier.is_empty()
    }
}

/// 网络注册表（静态初始化）
static NETWORK_REGISTRY: Lazy<NetworkRegistry> = Lazy::new(NetworkRegistry::builtin);

/// 进程级注册表
pub fn global() -> &'static NetworkRegistry {
    &NETWORK_REGISTRY
}

/// 在进程级注册表中查找
pub fn get_network(name: &str) -> Option<&'static NetworkDescriptor> {
    NETWORK_REGISTRY.get(name)
}

pub fn resolve(name: &str) -> Result<&'static NetworkDescriptor> {
    NETWORK_REGISTRY.resolve(name)
}
