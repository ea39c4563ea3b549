use crate::dex::launch_lab::curve::fee::{FeeSchedule, Fees};
use crate::dex::launch_lab::curve::safe_math::{to_u64, SafeMath};
use crate::dex::launch_lab::curve::{Curve, Reserves};
use crate::error::Result;

/// 价格固定为 virtual_quote / virtual_base。
/// 未和链上程序核对过，只能通过 `CurveCalculator::new_unverified` 使用
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FixedPriceCurve;

impl Curve for FixedPriceCurve {
    fn buy_exact_in(&self, reserves: &Reserves, amount_in: u64, fees: &FeeSchedule) -> Result<u64> {
        let gross_out = u128::from(amount_in)
            .safe_mul(u128::from(reserves.virtual_base))?
            .safe_div(u128::from(reserves.virtual_quote))?;
        to_u64(Fees::deduct_from_output(gross_out, fees)?)
    }

    fn sell_exact_in(&self, reserves: &Reserves, amount_in: u64, fees: &FeeSchedule) -> Result<u64> {
        let gross_out = u128::from(amount_in)
            .safe_mul(u128::from(reserves.virtual_quote))?
            .safe_div(u128::from(reserves.virtual_base))?;
        to_u64(Fees::deduct_from_output(gross_out, fees)?)
    }
}

#[cfg(test)]
mod test {
    use super::FixedPriceCurve;
    use crate::dex::launch_lab::curve::{Curve, FeeSchedule, Reserves};

    #[test]
    fn test_fixed_price() {
        let fees = FeeSchedule::new(0.25, 1.0, 0.0).unwrap();
        let reserves = Reserves {
            virtual_base: 1_000_000,
            virtual_quote: 500_000,
            real_base: 0,
            real_quote: 0,
        };
        assert_eq!(FixedPriceCurve.buy_exact_in(&reserves, 10_000, &fees).unwrap(), 19_750);
        assert_eq!(FixedPriceCurve.sell_exact_in(&reserves, 10_000, &fees).unwrap(), 4_938);
    }
}
