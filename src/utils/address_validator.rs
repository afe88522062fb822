//! 地址验证模块
//!
//! 统一的地址验证逻辑：按网络的编码方案完整解码，
//! 复核校验和、版本与载荷长度，而不是只看前缀。

use crate::encoding::{base58, bech32, cashaddr, eip55, ripple};
use crate::error::Result;

/// 地址验证器
pub struct AddressValidator;

impl AddressValidator {
    /// 验证地址格式
    ///
    /// # 参数
    /// - `network`: 网络名称或符号（精确匹配）
    /// - `address`: 待验证的地址
    ///
    /// # 返回
    /// - Ok(true): 地址有效
    /// - Ok(false): 地址无效
    /// - Err: 未注册的网络
    pub fn validate(network: &str, address: &str) -> Result<bool> {
        let descriptor = crate::domain::registry::resolve(network)?;
        Ok(descriptor.validate_address(address))
    }

    /// base58check: 21 字节载荷且版本字节一致
    pub fn validate_base58check(address: &str, version: u8) -> bool {
        base58::decode_address(address, version).is_ok()
    }

    /// bech32: HRP、校验和、见证版本与 20 字节 P2WPKH 程序
    pub fn validate_segwit(address: &str, hrp: &str, witness_version: u8) -> bool {
        matches!(
            bech32::decode_segwit(hrp, address),
            Ok((version, program)) if version == witness_version && program.len() == 20
        )
    }

    /// CashAddr: 前缀、校验和与 P2KH 类型
    pub fn validate_cashaddr(address: &str, prefix: &str) -> bool {
        matches!(
            cashaddr::decode(prefix, address),
            Ok((cashaddr::AddressType::P2KH, hash)) if hash.len() == 20
        )
    }

    /// Ripple: 账户 ID 版本与 20 字节载荷
    pub fn validate_ripple(address: &str) -> bool {
        matches!(ripple::decode(address), Ok(payload) if payload.len() == 20)
    }

    /// EVM 地址（支持 EIP-55 Checksum）
    pub fn validate_ethereum(address: &str) -> bool {
        eip55::is_valid_address(address)
    }
}
