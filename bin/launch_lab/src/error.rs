use crate::dex::launch_lab::curve::CurveVariant;
use solana_sdk::pubkey::Pubkey;

pub type Result<T> = std::result::Result<T, LaunchLabError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LaunchLabError {
    #[error("read of {needed} bytes at offset {offset} exceeds buffer of {len} bytes")]
    OutOfBounds {
        offset: usize,
        needed: usize,
        len: usize,
    },
    #[error("failed to decode {record} at offset {offset}: {source}")]
    Decode {
        record: &'static str,
        offset: usize,
        #[source]
        source: Box<LaunchLabError>,
    },
    #[error("curve {0} is not supported for trading")]
    UnsupportedCurve(CurveVariant),
    #[error("global config {0} does not belong to the constant product curve")]
    UnknownGlobalConfig(Pubkey),
    #[error("fees {fees} exceed gross output {gross}")]
    NegativeOutput { gross: u128, fees: u128 },
    #[error("Math operation overflow")]
    MathOverflow,
    #[error("fee rate {0}% is not a percentage in 0..=100")]
    InvalidFeeRate(f64),
    #[error("{0} is not a valid percentage")]
    InvalidPercentage(u64),
    #[error("pool has migrated (status {0}) and can not be traded on launch lab")]
    PoolMigrated(u8),
    #[error("failed to derive the wsol account from seed")]
    InvalidSeed,
    #[error("failed to build token instruction: {0}")]
    TokenInstruction(String),
}

impl LaunchLabError {
    pub(crate) fn decode(record: &'static str, offset: usize, source: LaunchLabError) -> Self {
        LaunchLabError::Decode {
            record,
            offset,
            source: Box::new(source),
        }
    }
}
