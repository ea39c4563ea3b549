use crate::dex::byte_utils::ByteCursor;
use crate::dex::launch_lab::curve::CurveVariant;
use crate::error::{LaunchLabError, Result};
use serde::Serialize;
use serde_with::{serde_as, DisplayFromStr};
use solana_sdk::pubkey::Pubkey;
use tracing::debug;

/// event discriminator + 内部 tag
const EVENT_PREFIX_LEN: usize = 16;
/// 只有长度超过该值的 inner instruction data 才可能是 PoolCreateEvent
pub const MIN_EVENT_DATA_LEN: usize = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MintParams {
    pub decimals: u8,
    pub name: String,
    pub symbol: String,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurveParams {
    pub variant: CurveVariant,
    pub supply: u64,
    pub total_base_sell: u64,
    pub total_quote_fund_raising: u64,
    pub migrate_type: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VestingParams {
    pub total_locked_amount: u64,
    pub cliff_period: u64,
    pub unlock_period: u64,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolCreateEvent {
    #[serde_as(as = "DisplayFromStr")]
    pub pool_state: Pubkey,
    #[serde_as(as = "DisplayFromStr")]
    pub creator: Pubkey,
    #[serde_as(as = "DisplayFromStr")]
    pub config: Pubkey,
    pub mint_params: MintParams,
    pub curve_params: CurveParams,
    pub vesting_params: VestingParams,
}

impl PoolCreateEvent {
    pub fn decode(data: &[u8]) -> Result<Self> {
        let mut cursor = ByteCursor::new(data);
        Self::read_fields(&mut cursor)
            .map_err(|e| LaunchLabError::decode("PoolCreateEvent", cursor.offset(), e))
    }

    fn read_fields(cursor: &mut ByteCursor) -> Result<Self> {
        cursor.skip(EVENT_PREFIX_LEN)?;
        let pool_state = cursor.read_pubkey()?;
        let creator = cursor.read_pubkey()?;
        let config = cursor.read_pubkey()?;
        let mint_params = MintParams {
            decimals: cursor.read_u8()?,
            name: cursor.read_length_prefixed_utf8()?,
            symbol: cursor.read_length_prefixed_utf8()?,
            uri: cursor.read_length_prefixed_utf8()?,
        };
        let curve_params = CurveParams {
            variant: CurveVariant::from(cursor.read_u8()?),
            supply: cursor.read_u64()?,
            total_base_sell: cursor.read_u64()?,
            total_quote_fund_raising: cursor.read_u64()?,
            migrate_type: cursor.read_u8()?,
        };
        let vesting_params = VestingParams {
            total_locked_amount: cursor.read_u64()?,
            cliff_period: cursor.read_u64()?,
            unlock_period: cursor.read_u64()?,
        };
        Ok(Self {
            pool_state,
            creator,
            config,
            mint_params,
            curve_params,
            vesting_params,
        })
    }
}

/// 交易 meta 里一条 inner instruction，data 为 base58 文本
#[derive(Debug, Clone, Copy)]
pub struct InnerInstructionData<'a> {
    pub account_count: usize,
    pub data: &'a str,
}

/// 在 inner instructions 中找 PoolCreateEvent：
/// 只有 1 个账户（event authority），data 长度超过 100 字节，且能完整解码
pub fn locate_pool_create_event<'a, I>(candidates: I) -> Option<PoolCreateEvent>
where
    I: IntoIterator<Item = InnerInstructionData<'a>>,
{
    candidates
        .into_iter()
        .filter(|candidate| candidate.account_count == 1)
        .filter_map(|candidate| match bs58::decode(candidate.data).into_vec() {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                debug!("inner instruction data 不是 base58: {:?}", e);
                None
            }
        })
        .filter(|bytes| bytes.len() > MIN_EVENT_DATA_LEN)
        .find_map(|bytes| match PoolCreateEvent::decode(&bytes) {
            Ok(event) => Some(event),
            Err(e) => {
                debug!("跳过无法解码的 inner instruction: {}", e);
                None
            }
        })
}
