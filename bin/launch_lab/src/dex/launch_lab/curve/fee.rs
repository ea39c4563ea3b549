use crate::dex::launch_lab::curve::safe_math::SafeMath;
use crate::dex::launch_lab::RAYDIUM_PLATFORM_CONFIG;
use crate::error::{LaunchLabError, Result};
use solana_sdk::pubkey::Pubkey;

pub const FEE_RATE_DENOMINATOR_VALUE: u128 = 10_000;

/// 手续费百分比，0.25 表示 0.25%
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeSchedule {
    protocol_fee_pct: f64,
    platform_fee_pct: f64,
    share_fee_pct: f64,
}

impl FeeSchedule {
    pub fn new(protocol_fee_pct: f64, platform_fee_pct: f64, share_fee_pct: f64) -> Result<Self> {
        for pct in [protocol_fee_pct, platform_fee_pct, share_fee_pct] {
            if !pct.is_finite() || !(0.0..=100.0).contains(&pct) {
                return Err(LaunchLabError::InvalidFeeRate(pct));
            }
        }
        Ok(Self {
            protocol_fee_pct,
            platform_fee_pct,
            share_fee_pct,
        })
    }

    /// Raydium 平台 0.25% + 0.75%，其它平台 0.25% + 1%
    pub fn for_platform(platform_config: &Pubkey) -> Self {
        let platform_fee_pct = if platform_config == &RAYDIUM_PLATFORM_CONFIG {
            0.75
        } else {
            1.0
        };
        Self {
            protocol_fee_pct: 0.25,
            platform_fee_pct,
            share_fee_pct: 0.0,
        }
    }

    pub fn protocol_fee_pct(&self) -> f64 {
        self.protocol_fee_pct
    }

    pub fn platform_fee_pct(&self) -> f64 {
        self.platform_fee_pct
    }

    pub fn share_fee_pct(&self) -> f64 {
        self.share_fee_pct
    }

    pub fn total_fee_pct(&self) -> f64 {
        self.protocol_fee_pct + self.platform_fee_pct + self.share_fee_pct
    }
}

pub struct Fees;

impl Fees {
    /// 百分比先截断为整数 bps，例如 0.29 -> 28
    #[inline]
    pub fn basis_points(fee_pct: f64) -> u128 {
        (fee_pct * 100.0).floor() as u128
    }

    /// floor(amount * floor(fee_pct * 100) / 10000)
    pub fn output_fee(amount: u128, fee_pct: f64) -> Result<u128> {
        amount
            .safe_mul(Self::basis_points(fee_pct))?
            .safe_div(FEE_RATE_DENOMINATOR_VALUE)
    }

    /// 从产出中逐项扣除三种手续费
    pub fn deduct_from_output(gross: u128, fees: &FeeSchedule) -> Result<u128> {
        let total_fee = Self::output_fee(gross, fees.protocol_fee_pct)?
            .safe_add(Self::output_fee(gross, fees.platform_fee_pct)?)?
            .safe_add(Self::output_fee(gross, fees.share_fee_pct)?)?;
        gross
            .checked_sub(total_fee)
            .ok_or(LaunchLabError::NegativeOutput {
                gross,
                fees: total_fee,
            })
    }

    /// floor(amount_in * (1 - total_fee_pct / 100))，在 swap 之前扣除
    pub fn deduct_from_input(amount_in: u64, fees: &FeeSchedule) -> Result<u128> {
        let total_fee_pct = fees.total_fee_pct();
        let factor = 1.0 - total_fee_pct / 100.0;
        if factor < 0.0 {
            return Err(LaunchLabError::NegativeOutput {
                gross: u128::from(amount_in),
                fees: (amount_in as f64 * total_fee_pct / 100.0).floor() as u128,
            });
        }
        Ok((amount_in as f64 * factor) as u128)
    }

    /// floor(gross * total_fee_pct / 100)，linear 曲线按总百分比整体扣除
    pub fn deduct_total_pct(gross: u128, fees: &FeeSchedule) -> Result<u128> {
        let product = gross as f64 * fees.total_fee_pct();
        let fee = ((product - product % 100.0) / 100.0).round() as u128;
        gross
            .checked_sub(fee)
            .ok_or(LaunchLabError::NegativeOutput { gross, fees: fee })
    }
}
