use launch_lab::dex::launch_lab::curve::CurveVariant;
use launch_lab::dex::launch_lab::{
    locate_pool_create_event, InnerInstructionData, PoolCreateEvent, MIN_EVENT_DATA_LEN,
};
use launch_lab::LaunchLabError;
use pretty_assertions::assert_eq;
use solana_sdk::pubkey::Pubkey;

fn push_string(data: &mut Vec<u8>, value: &str) {
    data.extend_from_slice(&(value.len() as u32).to_le_bytes());
    data.extend_from_slice(value.as_bytes());
}

fn event_bytes(pool_state: &Pubkey, curve_tag: u8) -> Vec<u8> {
    let mut data = vec![0xe4; 16];
    data.extend_from_slice(pool_state.as_ref());
    data.extend_from_slice(&[1; 32]);
    data.extend_from_slice(&[2; 32]);
    data.push(6);
    push_string(&mut data, "Launch Token");
    push_string(&mut data, "LTK");
    push_string(&mut data, "https://example.com/ltk.json");
    data.push(curve_tag);
    data.extend_from_slice(&1_000_000_000_000_000_u64.to_le_bytes());
    data.extend_from_slice(&793_100_000_000_000_u64.to_le_bytes());
    data.extend_from_slice(&85_000_000_000_u64.to_le_bytes());
    data.push(1);
    data.extend_from_slice(&0_u64.to_le_bytes());
    data.extend_from_slice(&3_600_u64.to_le_bytes());
    data.extend_from_slice(&86_400_u64.to_le_bytes());
    data
}

#[test]
fn test_decode_event() {
    let pool_state = Pubkey::new_unique();
    let event = PoolCreateEvent::decode(&event_bytes(&pool_state, 0)).unwrap();
    assert_eq!(event.pool_state, pool_state);
    assert_eq!(event.creator, Pubkey::new_from_array([1; 32]));
    assert_eq!(event.config, Pubkey::new_from_array([2; 32]));
    assert_eq!(event.mint_params.decimals, 6);
    assert_eq!(event.mint_params.name, "Launch Token");
    assert_eq!(event.mint_params.symbol, "LTK");
    assert_eq!(event.mint_params.uri, "https://example.com/ltk.json");
    assert_eq!(event.curve_params.variant, CurveVariant::Constant);
    assert_eq!(event.curve_params.supply, 1_000_000_000_000_000);
    assert_eq!(event.curve_params.total_base_sell, 793_100_000_000_000);
    assert_eq!(event.curve_params.total_quote_fund_raising, 85_000_000_000);
    assert_eq!(event.curve_params.migrate_type, 1);
    assert_eq!(event.vesting_params.total_locked_amount, 0);
    assert_eq!(event.vesting_params.cliff_period, 3_600);
    assert_eq!(event.vesting_params.unlock_period, 86_400);
}

#[test]
fn test_unknown_curve_tag_preserved() {
    let event = PoolCreateEvent::decode(&event_bytes(&Pubkey::new_unique(), 7)).unwrap();
    assert_eq!(event.curve_params.variant, CurveVariant::Unknown(7));
}

#[test]
fn test_invalid_utf8_replaced() {
    let mut data = vec![0; 16 + 32 * 3 + 1];
    data.extend_from_slice(&2_u32.to_le_bytes());
    data.extend_from_slice(&[0xff, b'a']);
    push_string(&mut data, "S");
    push_string(&mut data, "U");
    data.push(1);
    data.extend_from_slice(&[0; 8 * 3 + 1 + 8 * 3]);
    let event = PoolCreateEvent::decode(&data).unwrap();
    assert_eq!(event.mint_params.name, "\u{fffd}a");
    assert_eq!(event.curve_params.variant, CurveVariant::Fixed);
}

#[test]
fn test_truncated_vesting() {
    let mut data = event_bytes(&Pubkey::new_unique(), 0);
    data.truncate(data.len() - 4);
    assert!(matches!(
        PoolCreateEvent::decode(&data),
        Err(LaunchLabError::Decode {
            record: "PoolCreateEvent",
            ..
        })
    ));
}

#[test]
fn test_locate_event() {
    let pool_state = Pubkey::new_unique();
    assert!(event_bytes(&pool_state, 0).len() > 150);
    let valid = bs58::encode(event_bytes(&pool_state, 0)).into_string();
    let other_pool = bs58::encode(event_bytes(&Pubkey::new_unique(), 0)).into_string();
    // 超过 100 字节但字符串长度越界
    let mut broken = vec![0_u8; 16 + 32 * 3 + 1];
    broken.extend_from_slice(&u32::MAX.to_le_bytes());
    broken.resize(MIN_EVENT_DATA_LEN + 20, 0);
    let broken = bs58::encode(broken).into_string();
    let short = bs58::encode(vec![7_u8; MIN_EVENT_DATA_LEN]).into_string();

    let candidates = vec![
        // 账户数不为 1
        InnerInstructionData {
            account_count: 3,
            data: &other_pool,
        },
        InnerInstructionData {
            account_count: 1,
            data: "0OIl",
        },
        InnerInstructionData {
            account_count: 1,
            data: &short,
        },
        InnerInstructionData {
            account_count: 1,
            data: &broken,
        },
        InnerInstructionData {
            account_count: 1,
            data: &valid,
        },
        InnerInstructionData {
            account_count: 1,
            data: &other_pool,
        },
    ];
    let event = locate_pool_create_event(candidates).unwrap();
    assert_eq!(event.pool_state, pool_state);
}

#[test]
fn test_locate_event_none() {
    let short = bs58::encode(vec![7_u8; 40]).into_string();
    let candidates = [InnerInstructionData {
        account_count: 1,
        data: &short,
    }];
    assert_eq!(locate_pool_create_event(candidates), None);
    assert_eq!(locate_pool_create_event(Vec::new()), None);
}
