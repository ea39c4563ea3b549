use solana_sdk::pubkey::Pubkey;

pub mod byte_utils;
pub mod launch_lab;

pub const MINT_PROGRAM_ID: Pubkey = spl_token::ID;
pub const WSOL_MINT: Pubkey = spl_token::native_mint::ID;
/// spl token account 的 data 长度
pub const TOKEN_ACCOUNT_SPACE: u64 = 165;
