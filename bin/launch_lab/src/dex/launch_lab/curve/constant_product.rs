//! The Uniswap invariant, priced against virtual + real reserves.

use crate::dex::launch_lab::curve::fee::{FeeSchedule, Fees};
use crate::dex::launch_lab::curve::safe_math::{to_u64, SafeMath};
use crate::dex::launch_lab::curve::{Curve, Reserves};
use crate::error::Result;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConstantProductCurve;

impl ConstantProductCurve {
    /// (x + delta_x) * (y - delta_y) = x * y
    /// delta_y = (delta_x * y) / (x + delta_x)
    pub fn swap_base_input_without_fees(
        source_amount: u128,
        swap_source_amount: u128,
        swap_destination_amount: u128,
    ) -> Result<u128> {
        let numerator = source_amount.safe_mul(swap_destination_amount)?;
        let denominator = swap_source_amount.safe_add(source_amount)?;
        numerator.safe_div(denominator)
    }
}

impl Curve for ConstantProductCurve {
    /// quote in, base out。手续费在套用公式之前从输入里扣除
    fn buy_exact_in(&self, reserves: &Reserves, amount_in: u64, fees: &FeeSchedule) -> Result<u64> {
        let input_reserve = reserves.quote_reserve()?;
        let output_reserve = reserves.base_remaining()?;
        let effective_input = Fees::deduct_from_input(amount_in, fees)?;
        to_u64(Self::swap_base_input_without_fees(
            effective_input,
            input_reserve,
            output_reserve,
        )?)
    }

    /// base in, quote out。手续费从产出里按 bps 扣除
    fn sell_exact_in(&self, reserves: &Reserves, amount_in: u64, fees: &FeeSchedule) -> Result<u64> {
        let input_reserve = reserves.base_remaining()?;
        let output_reserve = reserves.quote_reserve()?;
        let gross_out = Self::swap_base_input_without_fees(
            u128::from(amount_in),
            input_reserve,
            output_reserve,
        )?;
        to_u64(Fees::deduct_from_output(gross_out, fees)?)
    }
}
