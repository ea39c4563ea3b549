use crate::dex::launch_lab::curve::{CurveCalculator, CurveVariant, FeeSchedule};
use crate::dex::launch_lab::instruction::TradeDirection;
use crate::dex::launch_lab::state::PoolState;
use crate::dex::launch_lab::CONSTANT_CURVE_GLOBAL_CONFIG;
use crate::error::{LaunchLabError, Result};
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TradePlan {
    pub direction: TradeDirection,
    /// 报价所用的曲线
    pub curve: CurveVariant,
    pub amount_in: u64,
    /// 滑点前的报价
    pub expected_out: u64,
    pub minimum_amount_out: u64,
    /// 全部卖出时顺带关闭 base token account
    pub close_token_account: bool,
}

/// 池子需要仍在 launch lab 上交易，并且属于 constant product 曲线
pub fn ensure_tradable(pool: &PoolState) -> Result<CurveCalculator> {
    if !pool.is_trading() {
        warn!("[LaunchLab][{}] 池子已迁移, status {}", pool.pool_address, pool.status);
        return Err(LaunchLabError::PoolMigrated(pool.status));
    }
    if pool.global_config != CONSTANT_CURVE_GLOBAL_CONFIG {
        warn!(
            "[LaunchLab][{}] 仅支持 Constant Product 曲线, global config {}",
            pool.pool_address, pool.global_config
        );
        return Err(LaunchLabError::UnknownGlobalConfig(pool.global_config));
    }
    CurveCalculator::new(CurveVariant::Constant)
}

/// floor(amount * (100 - slippage_pct) / 100)
pub fn apply_slippage(amount: u64, slippage_pct: u64) -> Result<u64> {
    if slippage_pct > 100 {
        return Err(LaunchLabError::InvalidPercentage(slippage_pct));
    }
    let amount = u128::from(amount) * u128::from(100 - slippage_pct) / 100;
    u64::try_from(amount).map_err(|_| LaunchLabError::MathOverflow)
}

/// amount_in 为 quote（lamports）
pub fn plan_buy(pool: &PoolState, amount_in: u64, slippage_pct: u64) -> Result<TradePlan> {
    let calculator = ensure_tradable(pool)?;
    let fees = FeeSchedule::for_platform(&pool.platform_config);
    let expected_out = calculator.buy_exact_in(&pool.reserves(), amount_in, &fees)?;
    Ok(TradePlan {
        direction: TradeDirection::Buy,
        curve: calculator.variant(),
        amount_in,
        expected_out,
        minimum_amount_out: apply_slippage(expected_out, slippage_pct)?,
        close_token_account: false,
    })
}

/// 按持仓百分比卖出 base token
pub fn plan_sell(
    pool: &PoolState,
    token_balance: u64,
    percentage: u64,
    slippage_pct: u64,
) -> Result<TradePlan> {
    if !(1..=100).contains(&percentage) {
        return Err(LaunchLabError::InvalidPercentage(percentage));
    }
    let calculator = ensure_tradable(pool)?;
    let amount_in = u64::try_from(u128::from(token_balance) * u128::from(percentage) / 100)
        .map_err(|_| LaunchLabError::MathOverflow)?;
    if amount_in == 0 {
        return Err(LaunchLabError::InvalidPercentage(0));
    }
    let fees = FeeSchedule::for_platform(&pool.platform_config);
    let expected_out = calculator.sell_exact_in(&pool.reserves(), amount_in, &fees)?;
    Ok(TradePlan {
        direction: TradeDirection::Sell,
        curve: calculator.variant(),
        amount_in,
        expected_out,
        minimum_amount_out: apply_slippage(expected_out, slippage_pct)?,
        close_token_account: percentage == 100,
    })
}
