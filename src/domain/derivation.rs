//! 公钥子密钥派生（BIP32 CKDpub）
//!
//! 只持有公钥，因此只能沿非硬化索引派生

use std::fmt;
use std::str::FromStr;

use k256::elliptic_curve::PrimeField;
use k256::{FieldBytes, ProjectivePoint, Scalar};

use crate::domain::extended_key::ExtendedPublicKey;
use crate::domain::point::CurvePoint;
use crate::error::{AddressError, Result};
use crate::utils::hash::hmac_sha512;

/// 索引最高位为 1 表示硬化派生
pub const HARDENED_OFFSET: u32 = 1 << 31;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// 派生路径
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// 非硬化索引序列，空序列表示根
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DerivationPath(Vec<u32>);

impl DerivationPath {
    /// 校验每个索引都小于 2^31
    pub fn new(indices: Vec<u32>) -> Result<Self> {
        if let Some(&hardened) = indices.iter().find(|&&i| i >= HARDENED_OFFSET) {
            return Err(AddressError::HardenedDerivationUnsupported(hardened));
        }
        Ok(Self(indices))
    }

    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn indices(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for DerivationPath {
    type Err = AddressError;

    /// 接受 `m/0/1`、`0/1`、`0.1`；空串或 `m` 为根路径
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let body = match s {
            "" | "m" | "M" => return Ok(Self::root()),
            _ => s
                .strip_prefix("m/")
                .or_else(|| s.strip_prefix("M/"))
                .or_else(|| s.strip_prefix("m."))
                .or_else(|| s.strip_prefix("M."))
                .unwrap_or(s),
        };

        let mut indices = Vec::new();
        for component in body.split(['/', '.']) {
            indices.push(parse_component(component.trim())?);
        }
        Self::new(indices)
    }
}

fn parse_component(component: &str) -> Result<u32> {
    if component.is_empty() {
        return Err(AddressError::InvalidPath("empty path component".to_string()));
    }

    if let Some(digits) = component.strip_suffix(['\'', 'h', 'H']) {
        // 硬化标记：尽量报出具体索引
        let index = digits
            .parse::<u32>()
            .ok()
            .and_then(|i| i.checked_add(HARDENED_OFFSET))
            .unwrap_or(HARDENED_OFFSET);
        return Err(AddressError::HardenedDerivationUnsupported(index));
    }

    if !component.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddressError::InvalidPath(format!(
            "'{}' is not a decimal index",
            component
        )));
    }
    component
        .parse::<u32>()
        .map_err(|_| AddressError::InvalidPath(format!("index {} overflows u32", component)))
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m")?;
        for index in &self.0 {
            write!(f, "/{}", index)?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<u32>> for DerivationPath {
    type Error = AddressError;

    fn try_from(indices: Vec<u32>) -> Result<Self> {
        Self::new(indices)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// CKDpub
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// 派生单个子公钥
///
/// I = HMAC-SHA512(chain_code, serP(K) ∥ ser32(i))，
/// K_i = IL·G + K，c_i = IR。
///
/// IL >= n 或结果为无穷远点时返回 `InvalidChildKey`，不自动尝试 i + 1。
pub fn derive_child(parent: &ExtendedPublicKey, index: u32) -> Result<ExtendedPublicKey> {
    if index >= HARDENED_OFFSET {
        return Err(AddressError::HardenedDerivationUnsupported(index));
    }

    let mut data = [0u8; 37];
    data[..33].copy_from_slice(&parent.public_key.to_compressed());
    data[33..].copy_from_slice(&index.to_be_bytes());

    let i = hmac_sha512(&parent.chain_code, &data);
    let (il, ir) = i.split_at(32);

    let tweak = Option::<Scalar>::from(Scalar::from_repr(FieldBytes::clone_from_slice(il)))
        .ok_or(AddressError::InvalidChildKey(index))?;

    let child_point = ProjectivePoint::GENERATOR * tweak + parent.public_key.as_affine();
    let public_key =
        CurvePoint::from_projective(child_point).ok_or(AddressError::InvalidChildKey(index))?;

    let depth = parent
        .depth
        .checked_add(1)
        .ok_or(AddressError::InvalidChildKey(index))?;

    let mut chain_code = [0u8; 32];
    chain_code.copy_from_slice(ir);

    Ok(ExtendedPublicKey {
        version: parent.version,
        depth,
        parent_fingerprint: parent.fingerprint(),
        child_number: index,
        chain_code,
        public_key,
    })
}

/// 沿路径从左到右依次派生；根路径原样返回
pub fn derive(key: &ExtendedPublicKey, path: &DerivationPath) -> Result<ExtendedPublicKey> {
    let mut current = *key;
    for &index in path.indices() {
        current = derive_child(&current, index)?;
    }
    tracing::debug!(
        path = %path,
        depth = current.depth,
        fingerprint = %hex::encode(current.fingerprint()),
        "derived child public key"
    );
    Ok(current)
}
