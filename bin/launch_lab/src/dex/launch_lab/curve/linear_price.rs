use crate::dex::launch_lab::curve::fee::{FeeSchedule, Fees};
use crate::dex::launch_lab::curve::safe_math::{to_u128, to_u64, SafeMath};
use crate::dex::launch_lab::curve::{Curve, Reserves};
use crate::error::Result;
use ruint::aliases::U256;

const Q64: u128 = 1 << 64;

/// price = virtual_base * supply / 2^64，virtual_base 作为斜率。
/// 未和链上程序核对过，只能通过 `CurveCalculator::new_unverified` 使用
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinearPriceCurve;

impl Curve for LinearPriceCurve {
    /// new_base = sqrt(2 * new_quote * Q64 / virtual_base)
    fn buy_exact_in(&self, reserves: &Reserves, amount_in: u64, fees: &FeeSchedule) -> Result<u64> {
        let new_quote = U256::from(reserves.real_quote).safe_add(U256::from(amount_in))?;
        let term_inside_sqrt = U256::from(2_u8)
            .safe_mul(new_quote)?
            .safe_mul(U256::from(Q64))?
            .safe_div(U256::from(reserves.virtual_base))?;
        let new_base = term_inside_sqrt.root(2);
        let gross_out = to_u128(new_base.safe_sub(U256::from(reserves.real_base))?)?;
        to_u64(Fees::deduct_total_pct(gross_out, fees)?)
    }

    /// new_quote = ceil(virtual_base * new_base^2 / (2 * Q64))
    fn sell_exact_in(&self, reserves: &Reserves, amount_in: u64, fees: &FeeSchedule) -> Result<u64> {
        let new_base = U256::from(reserves.real_base.safe_sub(amount_in)?);
        let denominator = U256::from(2_u8).safe_mul(U256::from(Q64))?;
        let new_quote = U256::from(reserves.virtual_base)
            .safe_mul(new_base.safe_mul(new_base)?)?
            .safe_add(denominator.safe_sub(U256::from(1_u8))?)?
            .safe_div(denominator)?;
        let gross_out = to_u128(U256::from(reserves.real_quote).safe_sub(new_quote)?)?;
        to_u64(Fees::deduct_total_pct(gross_out, fees)?)
    }
}

#[cfg(test)]
mod test {
    use super::LinearPriceCurve;
    use crate::dex::launch_lab::curve::{Curve, FeeSchedule, Reserves};
    use crate::error::LaunchLabError;

    const SLOPE: u64 = 1 << 40;

    #[test]
    fn test_linear_buy() {
        let fees = FeeSchedule::new(0.25, 1.0, 0.0).unwrap();
        let reserves = Reserves {
            virtual_base: SLOPE,
            virtual_quote: 0,
            real_base: 0,
            real_quote: 0,
        };
        // sqrt(2 * 1_000_000 * 2^24) = 5_792_618
        assert_eq!(
            LinearPriceCurve.buy_exact_in(&reserves, 1_000_000, &fees).unwrap(),
            5_720_211
        );
    }

    #[test]
    fn test_linear_sell() {
        let fees = FeeSchedule::new(0.25, 1.0, 0.0).unwrap();
        let reserves = Reserves {
            virtual_base: SLOPE,
            virtual_quote: 0,
            real_base: 5_792_618,
            real_quote: 1_000_000,
        };
        assert_eq!(
            LinearPriceCurve.sell_exact_in(&reserves, 2_896_309, &fees).unwrap(),
            740_625
        );
    }

    #[test]
    fn test_linear_sell_more_than_real_base() {
        let fees = FeeSchedule::new(0.25, 1.0, 0.0).unwrap();
        let reserves = Reserves {
            virtual_base: SLOPE,
            virtual_quote: 0,
            real_base: 10,
            real_quote: 10,
        };
        assert_eq!(
            LinearPriceCurve.sell_exact_in(&reserves, 11, &fees),
            Err(LaunchLabError::MathOverflow)
        );
    }
}
