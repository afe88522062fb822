//! 8 <-> 5 位重组（bech32 与 CashAddr 共用）

use crate::error::{AddressError, Result};

/// 按 MSB 优先把 `from_bits` 位分组重组为 `to_bits` 位分组。
///
/// `pad = true` 时末尾不足一组的位左移补零输出；
/// `pad = false` 时剩余位必须少于 `from_bits` 且全为零。
pub fn convert_bits(data: &[u8], from_bits: u32, to_bits: u32, pad: bool) -> Result<Vec<u8>> {
    debug_assert!((1..=8).contains(&from_bits) && (1..=8).contains(&to_bits));

    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let maxv: u32 = (1 << to_bits) - 1;
    let max_acc: u32 = (1 << (from_bits + to_bits - 1)) - 1;
    let mut ret = Vec::with_capacity((data.len() * from_bits as usize).div_ceil(to_bits as usize));

    for &value in data {
        let value = u32::from(value);
        if value >> from_bits != 0 {
            return Err(AddressError::InvalidBitPacking(
                "input value wider than source group",
            ));
        }
        acc = ((acc << from_bits) | value) & max_acc;
        bits += from_bits;
        while bits >= to_bits {
            bits -= to_bits;
            ret.push(((acc >> bits) & maxv) as u8);
        }
    }

    if pad {
        if bits > 0 {
            ret.push(((acc << (to_bits - bits)) & maxv) as u8);
        }
    } else if bits >= from_bits {
        return Err(AddressError::InvalidBitPacking("over-length remainder"));
    } else if (acc << (to_bits - bits)) & maxv != 0 {
        return Err(AddressError::InvalidBitPacking("non-zero padding"));
    }

    Ok(ret)
}
