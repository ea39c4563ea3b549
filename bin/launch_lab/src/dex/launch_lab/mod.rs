pub mod curve;
pub mod event;
pub mod instruction;
pub mod quote;
pub mod state;
pub mod transaction;

pub use event::*;
pub use instruction::*;
pub use quote::*;
pub use state::*;
pub use transaction::*;

use solana_sdk::pubkey;
use solana_sdk::pubkey::Pubkey;

pub const LAUNCH_LAB_PROGRAM_ID: Pubkey = pubkey!("LanMV9sAd7wArD4vJFi2qDdfnVhFxYSUg6eADduJ3uj");
pub const LAUNCH_LAB_AUTHORITY: Pubkey = pubkey!("WLHv2UAZm6z4KyaaELi5pjdbJh6RESMva1Rnn8pJVVh");
pub const LAUNCH_LAB_EVENT_AUTHORITY: Pubkey =
    pubkey!("2DPAtwB8L12vrMRExbLuyGnC7n2J5LNoZQSejeQGpwkr");
/// 目前唯一可交易的 constant product 曲线对应的全局配置
pub const CONSTANT_CURVE_GLOBAL_CONFIG: Pubkey =
    pubkey!("6s1xP3hpbAfFoNtUNF8mfHsjr2Bd97JxFJRWLbL6aHuX");
pub const RAYDIUM_PLATFORM_CONFIG: Pubkey = pubkey!("4Bu96XjU84XjPDSpveTVf6LYGCkfW5FK7SNkREWcEfV4");
