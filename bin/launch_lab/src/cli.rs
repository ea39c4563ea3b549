use crate::dex::launch_lab::{
    build_swap_instructions, locate_pool_create_event, plan_buy, plan_sell, pool_address,
    BaseTokenAccount, ComputeBudget, InnerInstructionData, PoolCreateEvent, PoolState, TradePlan,
    WsolAccount,
};
use crate::dex::WSOL_MINT;
use crate::rpc;
use anyhow::anyhow;
use base64::engine::general_purpose;
use base64::Engine;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_with::{serde_as, DisplayFromStr};
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use tracing::info;

#[derive(Parser, Debug)]
pub struct Command {
    #[arg(long, global = true, default_value = "https://api.mainnet-beta.solana.com")]
    rpc_url: String,
    #[arg(long, global = true, default_value = "150000")]
    compute_unit_limit: u32,
    #[arg(long, global = true, default_value = "100000")]
    compute_unit_price: u64,
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// 解码池子账户
    Pool { pool: Pubkey },
    /// 通过 base mint 查找池子
    FindPool { mint: Pubkey },
    /// 生成 buy 交易指令（不签名、不发送）
    QuoteBuy {
        pool: Pubkey,
        #[arg(long, required = true)]
        payer: Pubkey,
        /// lamports
        #[arg(long, required = true)]
        sol_in: u64,
        #[arg(long, default_value = "5")]
        slippage: u64,
    },
    /// 生成 sell 交易指令（不签名、不发送）
    QuoteSell {
        pool: Pubkey,
        #[arg(long, required = true)]
        payer: Pubkey,
        /// 持仓数量，缺省时从链上读取
        #[arg(long)]
        amount: Option<u64>,
        #[arg(long, default_value = "100")]
        percentage: u64,
        #[arg(long, default_value = "5")]
        slippage: u64,
    },
    /// 解码 inner instruction data 中的 PoolCreateEvent
    Event {
        #[arg(num_args = 1.., required = true)]
        data: Vec<String>,
        /// data 为 hex 而不是 base58
        #[arg(long, default_value = "false")]
        hex: bool,
    },
}

#[serde_as]
#[derive(Serialize)]
struct AccountMetaView {
    #[serde_as(as = "DisplayFromStr")]
    pubkey: Pubkey,
    is_signer: bool,
    is_writable: bool,
}

#[serde_as]
#[derive(Serialize)]
struct InstructionView {
    #[serde_as(as = "DisplayFromStr")]
    program_id: Pubkey,
    accounts: Vec<AccountMetaView>,
    data: String,
}

impl From<&Instruction> for InstructionView {
    fn from(instruction: &Instruction) -> Self {
        Self {
            program_id: instruction.program_id,
            accounts: instruction
                .accounts
                .iter()
                .map(|meta| AccountMetaView {
                    pubkey: meta.pubkey,
                    is_signer: meta.is_signer,
                    is_writable: meta.is_writable,
                })
                .collect(),
            data: general_purpose::STANDARD.encode(&instruction.data),
        }
    }
}

pub async fn run() -> anyhow::Result<()> {
    let command = Command::parse();
    info!("{:#?}", command);
    let client = rpc::new_client(command.rpc_url.clone());
    let compute_budget = ComputeBudget {
        unit_limit: command.compute_unit_limit,
        unit_price: command.compute_unit_price,
    };
    match command.action {
        Action::Pool { pool } => {
            let pool_state = rpc::fetch_pool_state(&client, &pool).await?;
            println!("{}", serde_json::to_string_pretty(&pool_state)?);
        }
        Action::FindPool { mint } => {
            info!("PDA : {}", pool_address(&mint, &WSOL_MINT));
            let pool = rpc::find_pool_by_mint(&client, &mint).await?;
            println!("{pool}");
        }
        Action::QuoteBuy {
            pool,
            payer,
            sol_in,
            slippage,
        } => {
            let pool_state = rpc::fetch_pool_state(&client, &pool).await?;
            let plan = plan_buy(&pool_state, sol_in, slippage)?;
            let existing =
                rpc::find_token_account(&client, &payer, &pool_state.base_mint).await?;
            let base_token_account =
                BaseTokenAccount::resolve(&payer, &pool_state.base_mint, existing);
            if base_token_account.needs_create {
                info!("未找到 token account，将创建 ATA {}", base_token_account.address);
            } else {
                info!("使用已有 token account {}", base_token_account.address);
            }
            print_swap(&client, &payer, &pool_state, &plan, &base_token_account, &compute_budget)
                .await?;
        }
        Action::QuoteSell {
            pool,
            payer,
            amount,
            percentage,
            slippage,
        } => {
            let pool_state = rpc::fetch_pool_state(&client, &pool).await?;
            let base_token_account =
                BaseTokenAccount::associated(&payer, &pool_state.base_mint, false);
            let balance = match amount {
                Some(amount) => amount,
                None => rpc::token_balance(&client, &base_token_account.address).await?,
            };
            let plan = plan_sell(&pool_state, balance, percentage, slippage)?;
            print_swap(&client, &payer, &pool_state, &plan, &base_token_account, &compute_budget)
                .await?;
        }
        Action::Event { data, hex } => {
            let event = if hex {
                let bytes = data
                    .first()
                    .map(hex::decode)
                    .ok_or(anyhow!("缺少 event data"))??;
                PoolCreateEvent::decode(&bytes)?
            } else {
                locate_pool_create_event(data.iter().map(|data| InnerInstructionData {
                    account_count: 1,
                    data: data.as_str(),
                }))
                .ok_or(anyhow!("未找到 PoolCreateEvent"))?
            };
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
    }
    Ok(())
}

async fn print_swap(
    client: &RpcClient,
    payer: &Pubkey,
    pool_state: &PoolState,
    plan: &TradePlan,
    base_token_account: &BaseTokenAccount,
    compute_budget: &ComputeBudget,
) -> anyhow::Result<()> {
    let rent = rpc::token_account_rent(client).await?;
    let wsol = WsolAccount::new_random(payer)?;
    let instructions = build_swap_instructions(
        payer,
        pool_state,
        plan,
        &wsol,
        base_token_account,
        rent,
        compute_budget,
    )?;
    info!(
        "[LaunchLab][{}] {} {} amount_in : {}, expected_out : {}, minimum_amount_out : {}",
        pool_state.pool_address,
        plan.curve,
        plan.direction,
        plan.amount_in,
        plan.expected_out,
        plan.minimum_amount_out
    );
    println!("{}", serde_json::to_string_pretty(plan)?);
    let views = instructions.iter().map(InstructionView::from).collect::<Vec<_>>();
    println!("{}", serde_json::to_string_pretty(&views)?);
    Ok(())
}
