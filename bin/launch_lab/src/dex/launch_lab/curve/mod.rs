mod constant_product;
mod fee;
mod fixed_price;
mod linear_price;
pub mod safe_math;

pub use constant_product::*;
pub use fee::*;
pub use fixed_price::*;
pub use linear_price::*;

use crate::dex::launch_lab::curve::safe_math::SafeMath;
use crate::error::{LaunchLabError, Result};
use enum_dispatch::enum_dispatch;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// 池子创建事件中的曲线类型 tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CurveVariant {
    Constant,
    Fixed,
    Linear,
    /// 未知 tag 原样保留，不报错
    Unknown(u8),
}

impl From<u8> for CurveVariant {
    fn from(tag: u8) -> Self {
        match tag {
            0 => CurveVariant::Constant,
            1 => CurveVariant::Fixed,
            2 => CurveVariant::Linear,
            tag => CurveVariant::Unknown(tag),
        }
    }
}

impl Display for CurveVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CurveVariant::Constant => f.write_str("Constant"),
            CurveVariant::Fixed => f.write_str("Fixed"),
            CurveVariant::Linear => f.write_str("Linear"),
            CurveVariant::Unknown(tag) => write!(f, "Unknown({tag})"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reserves {
    pub virtual_base: u64,
    pub virtual_quote: u64,
    pub real_base: u64,
    pub real_quote: u64,
}

impl Reserves {
    /// virtual_quote + real_quote
    #[inline]
    pub fn quote_reserve(&self) -> Result<u128> {
        u128::from(self.virtual_quote).safe_add(u128::from(self.real_quote))
    }

    /// virtual_base - real_base，账户数据异常时返回 MathOverflow
    #[inline]
    pub fn base_remaining(&self) -> Result<u128> {
        u128::from(self.virtual_base).safe_sub(u128::from(self.real_base))
    }
}

#[enum_dispatch]
pub trait Curve {
    /// 输入 quote，返回可得 base
    fn buy_exact_in(&self, reserves: &Reserves, amount_in: u64, fees: &FeeSchedule) -> Result<u64>;

    /// 输入 base，返回可得 quote
    fn sell_exact_in(&self, reserves: &Reserves, amount_in: u64, fees: &FeeSchedule) -> Result<u64>;
}

#[derive(Debug, Clone, PartialEq)]
#[enum_dispatch(Curve)]
pub enum CurveType {
    ConstantProduct(ConstantProductCurve),
    FixedPrice(FixedPriceCurve),
    LinearPrice(LinearPriceCurve),
}

/// Picks the pricing formula for a curve variant.
///
/// The engine never looks at a `PoolState` to decide the curve: the caller
/// passes the variant it resolved (from the global config or a pool-create
/// event). Only the constant product curve has been checked against the
/// program, so `new` rejects every other variant. `new_unverified` opts in to
/// the fixed and linear formulas for callers that accept unverified numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveCalculator {
    variant: CurveVariant,
    curve: CurveType,
}

impl CurveCalculator {
    pub fn new(variant: CurveVariant) -> Result<Self> {
        match variant {
            CurveVariant::Constant => Ok(Self::constant_product()),
            variant => Err(LaunchLabError::UnsupportedCurve(variant)),
        }
    }

    pub fn new_unverified(variant: CurveVariant) -> Result<Self> {
        let curve = match variant {
            CurveVariant::Constant => CurveType::from(ConstantProductCurve),
            CurveVariant::Fixed => CurveType::from(FixedPriceCurve),
            CurveVariant::Linear => CurveType::from(LinearPriceCurve),
            CurveVariant::Unknown(_) => return Err(LaunchLabError::UnsupportedCurve(variant)),
        };
        Ok(Self { variant, curve })
    }

    pub fn constant_product() -> Self {
        Self {
            variant: CurveVariant::Constant,
            curve: CurveType::from(ConstantProductCurve),
        }
    }

    pub fn variant(&self) -> CurveVariant {
        self.variant
    }

    pub fn buy_exact_in(&self, reserves: &Reserves, amount_in: u64, fees: &FeeSchedule) -> Result<u64> {
        self.curve.buy_exact_in(reserves, amount_in, fees)
    }

    pub fn sell_exact_in(&self, reserves: &Reserves, amount_in: u64, fees: &FeeSchedule) -> Result<u64> {
        self.curve.sell_exact_in(reserves, amount_in, fees)
    }
}
