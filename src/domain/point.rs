//! secp256k1 点与压缩公钥解压
//!
//! 曲线方程 y² = x³ + 7 (mod p)，p ≡ 3 (mod 4)，
//! 因此平方根可直接用 β = α^((p+1)/4) 求出。

use k256::elliptic_curve::group::Group;
use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::elliptic_curve::Field;
use k256::{AffinePoint, EncodedPoint, FieldBytes, FieldElement, ProjectivePoint};

use crate::error::{AddressError, Result};

pub const COMPRESSED_LEN: usize = 33;
pub const UNCOMPRESSED_LEN: usize = 65;

pub const PREFIX_EVEN: u8 = 0x02;
pub const PREFIX_ODD: u8 = 0x03;
pub const PREFIX_UNCOMPRESSED: u8 = 0x04;

/// (p + 1) / 4，小端 64 位 limb
const SQRT_EXPONENT: [u64; 4] = [
    0xffff_ffff_bfff_ff0c,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0x3fff_ffff_ffff_ffff,
];

const CURVE_B: FieldElement = FieldElement::from_u64(7);

/// 曲线上的有效点（不含无穷远点）
///
/// 只能通过解压或派生得到，构造时已验证在曲线上。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurvePoint(AffinePoint);

impl CurvePoint {
    /// 从 33 字节压缩或 65 字节未压缩 SEC1 编码解析
    pub fn from_sec1(bytes: &[u8]) -> Result<Self> {
        let (&prefix, rest) = bytes
            .split_first()
            .ok_or_else(|| AddressError::key_format("empty public key"))?;
        decompress(prefix, rest)
    }

    pub(crate) fn from_coordinates(x: &[u8], y: &[u8]) -> Result<Self> {
        let encoded = EncodedPoint::from_affine_coordinates(
            FieldBytes::from_slice(x),
            FieldBytes::from_slice(y),
            false,
        );
        Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
            .map(CurvePoint)
            .ok_or_else(|| AddressError::key_format("point is not on secp256k1"))
    }

    /// 无穷远点返回 None
    pub(crate) fn from_projective(point: ProjectivePoint) -> Option<Self> {
        if bool::from(point.is_identity()) {
            None
        } else {
            Some(CurvePoint(point.to_affine()))
        }
    }

    pub(crate) fn as_affine(&self) -> &AffinePoint {
        &self.0
    }

    /// 0x04 ∥ x ∥ y
    pub fn to_uncompressed(&self) -> [u8; UNCOMPRESSED_LEN] {
        let encoded = self.0.to_encoded_point(false);
        let mut out = [0u8; UNCOMPRESSED_LEN];
        out.copy_from_slice(encoded.as_bytes());
        out
    }

    /// 0x02/0x03 ∥ x，前缀由 y 的奇偶决定
    pub fn to_compressed(&self) -> [u8; COMPRESSED_LEN] {
        let encoded = self.0.to_encoded_point(true);
        let mut out = [0u8; COMPRESSED_LEN];
        out.copy_from_slice(encoded.as_bytes());
        out
    }

    pub fn x(&self) -> [u8; 32] {
        let mut x = [0u8; 32];
        x.copy_from_slice(&self.to_uncompressed()[1..33]);
        x
    }

    pub fn y(&self) -> [u8; 32] {
        let mut y = [0u8; 32];
        y.copy_from_slice(&self.to_uncompressed()[33..]);
        y
    }

    pub fn y_is_odd(&self) -> bool {
        self.y()[31] & 1 == 1
    }

    /// 重新检查 y² ≡ x³ + 7 (mod p)
    pub fn is_on_curve(&self) -> bool {
        let parsed = (
            Option::<FieldElement>::from(FieldElement::from_bytes(FieldBytes::from_slice(&self.x()))),
            Option::<FieldElement>::from(FieldElement::from_bytes(FieldBytes::from_slice(&self.y()))),
        );
        match parsed {
            (Some(x), Some(y)) => y.square().to_bytes() == curve_rhs(&x).to_bytes(),
            _ => false,
        }
    }
}

/// x³ + 7
fn curve_rhs(x: &FieldElement) -> FieldElement {
    (x.square() * x + CURVE_B).normalize()
}

/// 按前缀字节恢复曲线点
///
/// - `0x02` / `0x03`: `coordinates` 为 32 字节 x，y 取偶 / 奇
/// - `0x04`: `coordinates` 为 64 字节 x ∥ y
pub fn decompress(prefix: u8, coordinates: &[u8]) -> Result<CurvePoint> {
    match prefix {
        PREFIX_UNCOMPRESSED => {
            if coordinates.len() != UNCOMPRESSED_LEN - 1 {
                return Err(AddressError::key_format(format!(
                    "uncompressed key must be {} bytes, got {}",
                    UNCOMPRESSED_LEN,
                    coordinates.len() + 1
                )));
            }
            CurvePoint::from_coordinates(&coordinates[..32], &coordinates[32..])
        }
        PREFIX_EVEN | PREFIX_ODD => {
            if coordinates.len() != COMPRESSED_LEN - 1 {
                return Err(AddressError::key_format(format!(
                    "compressed key must be {} bytes, got {}",
                    COMPRESSED_LEN,
                    coordinates.len() + 1
                )));
            }

            let x = Option::<FieldElement>::from(FieldElement::from_bytes(
                FieldBytes::from_slice(coordinates),
            ))
            .ok_or_else(|| AddressError::key_format("x coordinate is not below the field prime"))?;

            let alpha = curve_rhs(&x);
            let beta = alpha.pow_vartime(SQRT_EXPONENT).normalize();
            if beta.square().to_bytes() != alpha.to_bytes() {
                return Err(AddressError::NotQuadraticResidue);
            }

            let want_odd = prefix == PREFIX_ODD;
            let y = if bool::from(beta.is_odd()) == want_odd {
                beta
            } else {
                beta.negate(1).normalize()
            };

            CurvePoint::from_coordinates(&x.to_bytes(), &y.to_bytes())
        }
        other => Err(AddressError::key_format(format!(
            "unknown point prefix 0x{:02x}",
            other
        ))),
    }
}
