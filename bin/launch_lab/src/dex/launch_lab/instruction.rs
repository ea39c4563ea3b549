use crate::dex::launch_lab::state::PoolState;
use crate::dex::launch_lab::{
    LAUNCH_LAB_AUTHORITY, LAUNCH_LAB_EVENT_AUTHORITY, LAUNCH_LAB_PROGRAM_ID,
};
use crate::dex::MINT_PROGRAM_ID;
use crate::error::{LaunchLabError, Result};
use serde::Serialize;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use std::fmt::{Display, Formatter};

/// buy_exact_in
pub const BUY_EXACT_IN_DISCRIMINATOR: [u8; 8] = [0xfa, 0xea, 0x0d, 0x7b, 0xd5, 0x9c, 0x13, 0xec];
/// sell_exact_in
pub const SELL_EXACT_IN_DISCRIMINATOR: [u8; 8] = [0x95, 0x27, 0xde, 0x9b, 0xd3, 0x7c, 0x98, 0x1a];
/// discriminator + amount_in + minimum_amount_out + share_fee_rate
pub const SWAP_DATA_LEN: usize = 8 + 8 * 3;
const SWAP_ACCOUNT_NUM: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TradeDirection {
    Buy,
    Sell,
}

impl TradeDirection {
    pub fn discriminator(&self) -> [u8; 8] {
        match self {
            TradeDirection::Buy => BUY_EXACT_IN_DISCRIMINATOR,
            TradeDirection::Sell => SELL_EXACT_IN_DISCRIMINATOR,
        }
    }
}

impl Display for TradeDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TradeDirection::Buy => "Buy",
            TradeDirection::Sell => "Sell",
        })
    }
}

/// 调用方提供的账户，程序相关地址默认取常量
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapAccounts {
    pub payer: Pubkey,
    pub authority: Pubkey,
    /// 用户 base mint 的 token account
    pub base_token_account: Pubkey,
    /// 用户 quote mint 的 token account（通常是临时 WSOL 账户）
    pub quote_token_account: Pubkey,
    pub base_token_program: Pubkey,
    pub quote_token_program: Pubkey,
    pub event_authority: Pubkey,
    pub program_id: Pubkey,
}

impl SwapAccounts {
    pub fn new(payer: Pubkey, base_token_account: Pubkey, quote_token_account: Pubkey) -> Self {
        Self {
            payer,
            authority: LAUNCH_LAB_AUTHORITY,
            base_token_account,
            quote_token_account,
            base_token_program: MINT_PROGRAM_ID,
            quote_token_program: MINT_PROGRAM_ID,
            event_authority: LAUNCH_LAB_EVENT_AUTHORITY,
            program_id: LAUNCH_LAB_PROGRAM_ID,
        }
    }
}

/// buy 和 sell 的账户顺序相同
pub fn to_account_meta(pool: &PoolState, accounts: &SwapAccounts) -> Vec<AccountMeta> {
    let mut account_meta = Vec::with_capacity(SWAP_ACCOUNT_NUM);
    // 1.payer
    account_meta.push(AccountMeta::new(accounts.payer, true));
    // 2.authority
    account_meta.push(AccountMeta::new_readonly(accounts.authority, false));
    // 3.global config
    account_meta.push(AccountMeta::new_readonly(pool.global_config, false));
    // 4.platform config
    account_meta.push(AccountMeta::new_readonly(pool.platform_config, false));
    // 5.pool state
    account_meta.push(AccountMeta::new(pool.pool_address, false));
    // 6.user base token account
    account_meta.push(AccountMeta::new(accounts.base_token_account, false));
    // 7.user quote token account
    account_meta.push(AccountMeta::new(accounts.quote_token_account, false));
    // 8.base vault
    account_meta.push(AccountMeta::new(pool.base_vault, false));
    // 9.quote vault
    account_meta.push(AccountMeta::new(pool.quote_vault, false));
    // 10.base mint
    account_meta.push(AccountMeta::new_readonly(pool.base_mint, false));
    // 11.quote mint
    account_meta.push(AccountMeta::new_readonly(pool.quote_mint, false));
    // 12.base token program
    account_meta.push(AccountMeta::new_readonly(accounts.base_token_program, false));
    // 13.quote token program
    account_meta.push(AccountMeta::new_readonly(accounts.quote_token_program, false));
    // 14.event authority
    account_meta.push(AccountMeta::new_readonly(accounts.event_authority, false));
    // 15.launch lab program
    account_meta.push(AccountMeta::new_readonly(accounts.program_id, false));
    account_meta
}

pub fn swap_data(direction: TradeDirection, amount_in: u64, minimum_amount_out: u64) -> [u8; SWAP_DATA_LEN] {
    let mut data = [0_u8; SWAP_DATA_LEN];
    data[0..8].copy_from_slice(&direction.discriminator());
    data[8..16].copy_from_slice(&amount_in.to_le_bytes());
    data[16..24].copy_from_slice(&minimum_amount_out.to_le_bytes());
    // share_fee_rate 固定为 0
    data[24..32].copy_from_slice(&0_u64.to_le_bytes());
    data
}

/// 已迁移的池子直接拒绝，不生成指令
pub fn swap_instruction(
    pool: &PoolState,
    direction: TradeDirection,
    amount_in: u64,
    minimum_amount_out: u64,
    accounts: &SwapAccounts,
) -> Result<Instruction> {
    if !pool.is_trading() {
        return Err(LaunchLabError::PoolMigrated(pool.status));
    }
    Ok(Instruction::new_with_bytes(
        accounts.program_id,
        &swap_data(direction, amount_in, minimum_amount_out),
        to_account_meta(pool, accounts),
    ))
}

#[cfg(test)]
mod test {
    use super::{swap_data, swap_instruction, SwapAccounts, TradeDirection};
    use crate::dex::launch_lab::PoolState;
    use crate::error::LaunchLabError;
    use solana_sdk::pubkey::Pubkey;

    #[test]
    fn test_swap_data_layout() {
        let data = swap_data(TradeDirection::Sell, 0x0102, 0x0304);
        assert_eq!(
            hex::encode(data),
            "9527de9bd37c981a\
             0201000000000000\
             0403000000000000\
             0000000000000000"
        );
    }

    #[test]
    fn test_migrated_pool_rejected() {
        let pool = PoolState {
            status: 1,
            ..Default::default()
        };
        let accounts = SwapAccounts::new(Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique());
        assert_eq!(
            swap_instruction(&pool, TradeDirection::Buy, 1, 1, &accounts),
            Err(LaunchLabError::PoolMigrated(1))
        );
    }
}
