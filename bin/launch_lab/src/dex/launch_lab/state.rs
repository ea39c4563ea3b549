use crate::dex::byte_utils::ByteCursor;
use crate::dex::launch_lab::curve::Reserves;
use crate::dex::launch_lab::LAUNCH_LAB_PROGRAM_ID;
use crate::error::{LaunchLabError, Result};
use serde::Serialize;
use serde_with::{serde_as, DisplayFromStr};
use solana_sdk::pubkey::Pubkey;

const POOL_SEED: &[u8] = b"pool";

/// discriminator + 11 * u64 + 5 * u8 + vesting 5 * u64 + 7 * pubkey + padding 8 * u64
pub const POOL_STATE_SIZE: usize = 8 + 8 * 11 + 5 + 8 * 5 + 32 * 7 + 8 * 8;

pub const POOL_STATUS_TRADING: u8 = 0;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VestingSchedule {
    pub total_locked_amount: u64,
    pub cliff_period: u64,
    pub unlock_period: u64,
    pub start_time: u64,
    pub allocated_share_amount: u64,
}

/// 字段顺序不要动，和链上账户布局一致
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PoolState {
    /// 账户地址本身，不在 data 里
    #[serde_as(as = "DisplayFromStr")]
    pub pool_address: Pubkey,
    /// 8,8
    pub epoch: u64,
    pub auth_bump: u8,
    /// 0 可交易，其它值表示已迁移
    /// 17,1
    pub status: u8,
    pub base_decimals: u8,
    pub quote_decimals: u8,
    pub migrate_type: u8,
    /// 21,8
    pub supply: u64,
    pub total_base_sell: u64,
    /// 37,8
    pub virtual_base: u64,
    pub virtual_quote: u64,
    pub real_base: u64,
    pub real_quote: u64,
    pub total_quote_fund_raising: u64,
    pub quote_protocol_fee: u64,
    pub platform_fee: u64,
    pub migrate_fee: u64,
    /// 101,40
    pub vesting_schedule: VestingSchedule,
    /// 141,32
    #[serde_as(as = "DisplayFromStr")]
    pub global_config: Pubkey,
    /// 173,32
    #[serde_as(as = "DisplayFromStr")]
    pub platform_config: Pubkey,
    /// 205,32
    #[serde_as(as = "DisplayFromStr")]
    pub base_mint: Pubkey,
    /// 237,32
    #[serde_as(as = "DisplayFromStr")]
    pub quote_mint: Pubkey,
    /// 269,32
    #[serde_as(as = "DisplayFromStr")]
    pub base_vault: Pubkey,
    /// 301,32
    #[serde_as(as = "DisplayFromStr")]
    pub quote_vault: Pubkey,
    /// 333,32
    #[serde_as(as = "DisplayFromStr")]
    pub creator: Pubkey,
}

impl PoolState {
    pub const BASE_MINT_OFFSET: usize = 205;
    pub const QUOTE_MINT_OFFSET: usize = 237;

    pub fn decode(data: &[u8], pool_address: Pubkey) -> Result<Self> {
        let mut cursor = ByteCursor::new(data);
        Self::read_fields(&mut cursor, pool_address)
            .map_err(|e| LaunchLabError::decode("PoolState", cursor.offset(), e))
    }

    fn read_fields(cursor: &mut ByteCursor, pool_address: Pubkey) -> Result<Self> {
        // discriminator 不校验
        cursor.skip(8)?;
        let epoch = cursor.read_u64()?;
        let auth_bump = cursor.read_u8()?;
        let status = cursor.read_u8()?;
        let base_decimals = cursor.read_u8()?;
        let quote_decimals = cursor.read_u8()?;
        let migrate_type = cursor.read_u8()?;
        let supply = cursor.read_u64()?;
        let total_base_sell = cursor.read_u64()?;
        let virtual_base = cursor.read_u64()?;
        let virtual_quote = cursor.read_u64()?;
        let real_base = cursor.read_u64()?;
        let real_quote = cursor.read_u64()?;
        let total_quote_fund_raising = cursor.read_u64()?;
        let quote_protocol_fee = cursor.read_u64()?;
        let platform_fee = cursor.read_u64()?;
        let migrate_fee = cursor.read_u64()?;
        let vesting_schedule = VestingSchedule {
            total_locked_amount: cursor.read_u64()?,
            cliff_period: cursor.read_u64()?,
            unlock_period: cursor.read_u64()?,
            start_time: cursor.read_u64()?,
            allocated_share_amount: cursor.read_u64()?,
        };
        let global_config = cursor.read_pubkey()?;
        let platform_config = cursor.read_pubkey()?;
        let base_mint = cursor.read_pubkey()?;
        let quote_mint = cursor.read_pubkey()?;
        let base_vault = cursor.read_pubkey()?;
        let quote_vault = cursor.read_pubkey()?;
        let creator = cursor.read_pubkey()?;
        // padding
        cursor.skip(8 * 8)?;
        Ok(Self {
            pool_address,
            epoch,
            auth_bump,
            status,
            base_decimals,
            quote_decimals,
            migrate_type,
            supply,
            total_base_sell,
            virtual_base,
            virtual_quote,
            real_base,
            real_quote,
            total_quote_fund_raising,
            quote_protocol_fee,
            platform_fee,
            migrate_fee,
            vesting_schedule,
            global_config,
            platform_config,
            base_mint,
            quote_mint,
            base_vault,
            quote_vault,
            creator,
        })
    }

    #[inline]
    pub fn is_trading(&self) -> bool {
        self.status == POOL_STATUS_TRADING
    }

    pub fn reserves(&self) -> Reserves {
        Reserves {
            virtual_base: self.virtual_base,
            virtual_quote: self.virtual_quote,
            real_base: self.real_base,
            real_quote: self.real_quote,
        }
    }
}

pub fn pool_address(base_mint: &Pubkey, quote_mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[POOL_SEED, base_mint.as_ref(), quote_mint.as_ref()],
        &LAUNCH_LAB_PROGRAM_ID,
    )
    .0
}

#[cfg(test)]
mod test {
    use super::{PoolState, POOL_STATE_SIZE};
    use crate::error::LaunchLabError;
    use solana_sdk::pubkey::Pubkey;

    #[test]
    fn test_pool_state_size() {
        assert_eq!(POOL_STATE_SIZE, 429);
    }

    #[test]
    fn test_short_buffer() {
        let data = vec![0_u8; POOL_STATE_SIZE - 1];
        let err = PoolState::decode(&data, Pubkey::default()).unwrap_err();
        match err {
            LaunchLabError::Decode { offset, source, .. } => {
                // 最后 64 字节 padding 读取失败
                assert_eq!(offset, POOL_STATE_SIZE - 64);
                assert!(matches!(*source, LaunchLabError::OutOfBounds { .. }));
            }
            e => panic!("unexpected error {e:?}"),
        }
    }

    #[test]
    fn test_empty_buffer() {
        assert!(matches!(
            PoolState::decode(&[], Pubkey::default()),
            Err(LaunchLabError::Decode { offset: 0, .. })
        ));
    }

    #[test]
    fn test_epoch_and_status_offsets() {
        let mut data = vec![0_u8; POOL_STATE_SIZE];
        data[8..16].copy_from_slice(&42_u64.to_le_bytes());
        data[17] = 1;
        let pool = PoolState::decode(&data, Pubkey::default()).unwrap();
        assert_eq!(pool.epoch, 42);
        assert_eq!(pool.status, 1);
    }

    #[test]
    fn test_mint_offsets() {
        let base_mint = Pubkey::new_unique();
        let quote_mint = Pubkey::new_unique();
        let mut data = vec![0_u8; POOL_STATE_SIZE];
        data[PoolState::BASE_MINT_OFFSET..PoolState::BASE_MINT_OFFSET + 32]
            .copy_from_slice(base_mint.as_ref());
        data[PoolState::QUOTE_MINT_OFFSET..PoolState::QUOTE_MINT_OFFSET + 32]
            .copy_from_slice(quote_mint.as_ref());
        let pool = PoolState::decode(&data, Pubkey::default()).unwrap();
        assert_eq!(pool.base_mint, base_mint);
        assert_eq!(pool.quote_mint, quote_mint);
        assert!(pool.is_trading());
    }
}
