use crate::dex::launch_lab::instruction::{swap_instruction, SwapAccounts, TradeDirection};
use crate::dex::launch_lab::quote::TradePlan;
use crate::dex::launch_lab::state::PoolState;
use crate::dex::{MINT_PROGRAM_ID, TOKEN_ACCOUNT_SPACE, WSOL_MINT};
use crate::error::{LaunchLabError, Result};
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use rand::Rng;
use solana_sdk::compute_budget::ComputeBudgetInstruction;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_instruction;
use spl_associated_token_account::get_associated_token_address;
use spl_associated_token_account::instruction::create_associated_token_account_idempotent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputeBudget {
    pub unit_limit: u32,
    /// micro lamports
    pub unit_price: u64,
}

/// 以 seed 派生的临时 WSOL 账户，swap 结束后关闭
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WsolAccount {
    pub seed: String,
    pub address: Pubkey,
}

impl WsolAccount {
    pub fn new(payer: &Pubkey, seed: String) -> Result<Self> {
        let address = Pubkey::create_with_seed(payer, &seed, &MINT_PROGRAM_ID)
            .map_err(|_| LaunchLabError::InvalidSeed)?;
        Ok(Self { seed, address })
    }

    pub fn new_random(payer: &Pubkey) -> Result<Self> {
        Self::new(payer, generate_wsol_seed())
    }
}

/// 24 个随机字节做 url safe base64，正好 32 个字符（seed 最大长度）
pub fn generate_wsol_seed() -> String {
    let bytes: [u8; 24] = rand::rng().random();
    URL_SAFE.encode(bytes)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseTokenAccount {
    pub address: Pubkey,
    /// 账户不存在时在 swap 之前创建 ATA
    pub needs_create: bool,
}

impl BaseTokenAccount {
    pub fn existing(address: Pubkey) -> Self {
        Self {
            address,
            needs_create: false,
        }
    }

    pub fn associated(payer: &Pubkey, base_mint: &Pubkey, needs_create: bool) -> Self {
        Self {
            address: get_associated_token_address(payer, base_mint),
            needs_create,
        }
    }

    /// 已有任意该 mint 的 token account 就直接使用，否则创建 ATA
    pub fn resolve(payer: &Pubkey, base_mint: &Pubkey, existing: Option<Pubkey>) -> Self {
        match existing {
            Some(address) => Self::existing(address),
            None => Self::associated(payer, base_mint, true),
        }
    }
}

/// 生成一笔完整 swap 交易的指令（未签名）：
/// compute budget、创建并初始化 WSOL 账户、按需创建 ATA、swap、关闭 WSOL 账户，
/// 全部卖出时再关闭 base token account
pub fn build_swap_instructions(
    payer: &Pubkey,
    pool: &PoolState,
    plan: &TradePlan,
    wsol: &WsolAccount,
    base_token_account: &BaseTokenAccount,
    rent_exempt_lamports: u64,
    compute_budget: &ComputeBudget,
) -> Result<Vec<Instruction>> {
    let accounts = SwapAccounts::new(*payer, base_token_account.address, wsol.address);
    let swap_ix = swap_instruction(
        pool,
        plan.direction,
        plan.amount_in,
        plan.minimum_amount_out,
        &accounts,
    )?;
    // buy 需要把 amount_in 的 SOL 一并转入 WSOL 账户
    let wsol_lamports = match plan.direction {
        TradeDirection::Buy => rent_exempt_lamports
            .checked_add(plan.amount_in)
            .ok_or(LaunchLabError::MathOverflow)?,
        TradeDirection::Sell => rent_exempt_lamports,
    };

    let mut instructions = Vec::with_capacity(8);
    instructions.push(ComputeBudgetInstruction::set_compute_unit_limit(
        compute_budget.unit_limit,
    ));
    instructions.push(ComputeBudgetInstruction::set_compute_unit_price(
        compute_budget.unit_price,
    ));
    instructions.push(system_instruction::create_account_with_seed(
        payer,
        &wsol.address,
        payer,
        &wsol.seed,
        wsol_lamports,
        TOKEN_ACCOUNT_SPACE,
        &MINT_PROGRAM_ID,
    ));
    instructions.push(
        spl_token::instruction::initialize_account(
            &MINT_PROGRAM_ID,
            &wsol.address,
            &WSOL_MINT,
            payer,
        )
        .map_err(|e| LaunchLabError::TokenInstruction(e.to_string()))?,
    );
    if plan.direction == TradeDirection::Buy && base_token_account.needs_create {
        instructions.push(create_associated_token_account_idempotent(
            payer,
            payer,
            &pool.base_mint,
            &MINT_PROGRAM_ID,
        ));
    }
    instructions.push(swap_ix);
    instructions.push(close_token_account(payer, &wsol.address)?);
    if plan.direction == TradeDirection::Sell && plan.close_token_account {
        instructions.push(close_token_account(payer, &base_token_account.address)?);
    }
    Ok(instructions)
}

fn close_token_account(payer: &Pubkey, account: &Pubkey) -> Result<Instruction> {
    spl_token::instruction::close_account(&MINT_PROGRAM_ID, account, payer, payer, &[])
        .map_err(|e| LaunchLabError::TokenInstruction(e.to_string()))
}
