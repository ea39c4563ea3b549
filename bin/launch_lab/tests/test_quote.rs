use launch_lab::dex::launch_lab::curve::{
    ConstantProductCurve, Curve, CurveCalculator, CurveVariant, FeeSchedule, Fees, Reserves,
};
use launch_lab::dex::launch_lab::{plan_buy, plan_sell, PoolState, CONSTANT_CURVE_GLOBAL_CONFIG};
use launch_lab::LaunchLabError;
use pretty_assertions::assert_eq;
use solana_sdk::pubkey::Pubkey;

fn reserves() -> Reserves {
    Reserves {
        virtual_base: 1_000_000,
        virtual_quote: 500_000,
        real_base: 0,
        real_quote: 0,
    }
}

fn default_fees() -> FeeSchedule {
    FeeSchedule::new(0.25, 1.0, 0.0).unwrap()
}

#[test]
fn test_constant_buy_golden() {
    let calculator = CurveCalculator::new(CurveVariant::Constant).unwrap();
    assert_eq!(
        calculator.buy_exact_in(&reserves(), 10_000, &default_fees()).unwrap(),
        19_367
    );
}

#[test]
fn test_constant_sell_golden() {
    let calculator = CurveCalculator::new(CurveVariant::Constant).unwrap();
    // gross = 10000 * 500000 / 1010000 = 4950
    assert_eq!(
        calculator.sell_exact_in(&reserves(), 10_000, &default_fees()).unwrap(),
        4_889
    );
}

#[test]
fn test_buy_monotonic_in_amount() {
    let fees = default_fees();
    let mut last = 0;
    for amount_in in (0..200_000_u64).step_by(997) {
        let out = ConstantProductCurve
            .buy_exact_in(&reserves(), amount_in, &fees)
            .unwrap();
        assert!(out >= last, "amount_in {amount_in}: {out} < {last}");
        last = out;
    }
}

#[test]
fn test_sell_dips_by_one_at_fee_steps() {
    // 三项手续费分别向下取整，fee 跨过整数时产出会回落 1
    let reserves = Reserves {
        virtual_base: 1_000_000,
        virtual_quote: 1_000_000,
        real_base: 0,
        real_quote: 0,
    };
    let fees = default_fees();
    let mut last = 0;
    let mut dips = Vec::new();
    for amount_in in 0..2_000_u64 {
        let out = ConstantProductCurve
            .sell_exact_in(&reserves, amount_in, &fees)
            .unwrap();
        if out < last {
            assert_eq!(last - out, 1, "amount_in {amount_in}");
            dips.push((amount_in, last, out));
        }
        last = out;
    }
    assert_eq!(
        dips,
        vec![
            (401, 396, 395),
            (801, 791, 790),
            (1_202, 1_186, 1_185),
            (1_603, 1_581, 1_580),
        ]
    );
}

#[test]
fn test_buy_with_real_reserves() {
    let reserves = Reserves {
        real_base: 200_000,
        real_quote: 100_000,
        ..reserves()
    };
    // 9875 * 800_000 / (600_000 + 9875) = 12_953
    assert_eq!(
        ConstantProductCurve
            .buy_exact_in(&reserves, 10_000, &default_fees())
            .unwrap(),
        12_953
    );
}

#[test]
fn test_sell_fees_over_hundred_percent() {
    let fees = FeeSchedule::new(60.0, 50.0, 0.0).unwrap();
    assert_eq!(
        ConstantProductCurve.sell_exact_in(&reserves(), 10_000, &fees),
        Err(LaunchLabError::NegativeOutput {
            gross: 4_950,
            fees: 5_445
        })
    );
}

#[test]
fn test_sell_fee_truncated_to_basis_points() {
    let fees = FeeSchedule::new(0.29, 0.0, 0.0).unwrap();
    let gross = 45_454_545_u128;
    // 28 bps 而不是 29 bps
    assert_eq!(Fees::output_fee(gross, 0.29).unwrap(), 127_272);
    assert_ne!(Fees::output_fee(gross, 0.29).unwrap(), gross * 29 / 10_000);
    assert_eq!(Fees::deduct_from_output(gross, &fees).unwrap(), 45_327_273);
}

#[test]
fn test_zero_total_fee_is_plain_constant_product() {
    let fees = FeeSchedule::new(0.0, 0.0, 0.0).unwrap();
    assert_eq!(
        ConstantProductCurve.buy_exact_in(&reserves(), 10_000, &fees).unwrap(),
        19_607
    );
    assert_eq!(
        ConstantProductCurve.sell_exact_in(&reserves(), 10_000, &fees).unwrap(),
        4_950
    );
}

#[test]
fn test_round_trip_loses_fees() {
    let pool = PoolState {
        pool_address: Pubkey::new_unique(),
        global_config: CONSTANT_CURVE_GLOBAL_CONFIG,
        platform_config: Pubkey::new_unique(),
        virtual_base: 1_000_000_000,
        virtual_quote: 30_000_000,
        ..Default::default()
    };
    let buy = plan_buy(&pool, 1_000_000, 5).unwrap();
    let after_buy = PoolState {
        real_base: buy.expected_out,
        real_quote: 1_000_000,
        ..pool
    };
    let sell = plan_sell(&after_buy, buy.expected_out, 100, 5).unwrap();
    assert_eq!(sell.amount_in, buy.expected_out);
    assert!(sell.expected_out < buy.amount_in);
    assert!(sell.minimum_amount_out <= sell.expected_out);
    assert!(sell.close_token_account);
}
