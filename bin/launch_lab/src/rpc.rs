use crate::dex::launch_lab::{PoolState, LAUNCH_LAB_PROGRAM_ID};
use crate::dex::{TOKEN_ACCOUNT_SPACE, WSOL_MINT};
use anyhow::{anyhow, Context};
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_rpc_client_api::config::{RpcAccountInfoConfig, RpcProgramAccountsConfig};
use solana_rpc_client_api::filter::{Memcmp, RpcFilterType};
use solana_rpc_client_api::request::TokenAccountsFilter;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;
use tracing::info;

pub fn new_client(rpc_url: String) -> RpcClient {
    RpcClient::new_with_commitment(rpc_url, CommitmentConfig::processed())
}

pub async fn fetch_pool_state(client: &RpcClient, pool: &Pubkey) -> anyhow::Result<PoolState> {
    let data = client
        .get_account_data(pool)
        .await
        .with_context(|| format!("获取池子[{pool}]账户失败"))?;
    Ok(PoolState::decode(&data, *pool)?)
}

/// 按 base mint 和 WSOL quote mint 过滤 program accounts
pub async fn find_pool_by_mint(client: &RpcClient, base_mint: &Pubkey) -> anyhow::Result<Pubkey> {
    info!("查询池子, base mint : {base_mint}, quote mint : {WSOL_MINT}");
    let config = RpcProgramAccountsConfig {
        filters: Some(vec![
            RpcFilterType::Memcmp(Memcmp::new_base58_encoded(
                PoolState::BASE_MINT_OFFSET,
                base_mint.as_ref(),
            )),
            RpcFilterType::Memcmp(Memcmp::new_base58_encoded(
                PoolState::QUOTE_MINT_OFFSET,
                WSOL_MINT.as_ref(),
            )),
        ]),
        account_config: RpcAccountInfoConfig {
            commitment: Some(CommitmentConfig::processed()),
            ..RpcAccountInfoConfig::default()
        },
        ..RpcProgramAccountsConfig::default()
    };
    let accounts = client
        .get_program_accounts_with_config(&LAUNCH_LAB_PROGRAM_ID, config)
        .await?;
    accounts
        .first()
        .map(|(pubkey, _)| *pubkey)
        .ok_or(anyhow!("未找到 base mint [{base_mint}] 的池子"))
}

/// owner 持有该 mint 的第一个 token account，不限于 ATA
pub async fn find_token_account(
    client: &RpcClient,
    owner: &Pubkey,
    mint: &Pubkey,
) -> anyhow::Result<Option<Pubkey>> {
    let accounts = client
        .get_token_accounts_by_owner_with_commitment(
            owner,
            TokenAccountsFilter::Mint(*mint),
            CommitmentConfig::processed(),
        )
        .await?
        .value;
    accounts
        .first()
        .map(|account| {
            Pubkey::from_str(&account.pubkey)
                .with_context(|| format!("无法解析 token account {}", account.pubkey))
        })
        .transpose()
}

pub async fn token_balance(client: &RpcClient, token_account: &Pubkey) -> anyhow::Result<u64> {
    let balance = client.get_token_account_balance(token_account).await?;
    balance
        .amount
        .parse::<u64>()
        .with_context(|| format!("无法解析 token 余额 {}", balance.amount))
}

pub async fn token_account_rent(client: &RpcClient) -> anyhow::Result<u64> {
    Ok(client
        .get_minimum_balance_for_rent_exemption(TOKEN_ACCOUNT_SPACE as usize)
        .await?)
}
