use super::constants::{MAX_TICK, MIN_TICK};
use alloy_primitives::U256;
use std::str::FromStr;

lazy_static::lazy_static! {
    /// Q128.128 multipliers for sqrt(1.0001)^-(2^bit), one entry per bit of
    /// the tick magnitude. Replicates the constant ladder from Uniswap V3's
    /// TickMath library.
    static ref RATIO_MULTIPLIERS: [U256; 20] = [
        U256::from_str("0xfffcb933bd6fad37aa2d162d1a594001").unwrap(),
        U256::from_str("0xfff97272373d413259a46990580e213a").unwrap(),
        U256::from_str("0xfff2e50f5f656932ef12357cf3c7fdcc").unwrap(),
        U256::from_str("0xffe5caca7e10e4e61c3624eaa0941cd0").unwrap(),
        U256::from_str("0xffcb9843d60f6159c9db58835c926644").unwrap(),
        U256::from_str("0xff973b41fa98c081472e6896dfb254c0").unwrap(),
        U256::from_str("0xff2ea16466c96a3843ec78b326b52861").unwrap(),
        U256::from_str("0xfe5dee046a99a2a811c461f1969c3053").unwrap(),
        U256::from_str("0xfcbe86c7900a88aedcffc83b479aa3a4").unwrap(),
        U256::from_str("0xf987a7253ac413176f2b074cf7815e54").unwrap(),
        U256::from_str("0xf3392b0822b70005940c7a398e4b70f3").unwrap(),
        U256::from_str("0xe7159475a2c29b7443b29c7fa6e889d9").unwrap(),
        U256::from_str("0xd097f3bdfd2022b8845ad8f792aa5825").unwrap(),
        U256::from_str("0xa9f746462d870fdf8a65dc1f90e061e5").unwrap(),
        U256::from_str("0x70d869a156d2a1b890bb3df62baf32f7").unwrap(),
        U256::from_str("0x31be135f97d08fd981231505542fcfa6").unwrap(),
        U256::from_str("0x9aa508b5b7a84e1c677de54f3e99bc9").unwrap(),
        U256::from_str("0x5d6af8dedb81196699c329225ee604").unwrap(),
        U256::from_str("0x2216e584f5fa1ea926041bedfe98").unwrap(),
        U256::from_str("0x48a170391f7dc42444e8fa2").unwrap(),
    ];
}

/// Calculates sqrt(1.0001^tick) * 2^96 for a given tick.
/// Returns `None` if the tick is outside [MIN_TICK, MAX_TICK].
pub fn get_sqrt_ratio_at_tick(tick: i32) -> Option<U256> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return None;
    }

    let abs_tick = tick.unsigned_abs();

    // Accumulate sqrt(1.0001)^-|tick| as a Q128.128 product over the set bits.
    let mut ratio: U256 = U256::from(1) << 128;
    for (bit, multiplier) in RATIO_MULTIPLIERS.iter().enumerate() {
        if abs_tick & (1u32 << bit) != 0 {
            ratio = (ratio * *multiplier) >> 128;
        }
    }

    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    // Q128.128 -> Q64.96, rounding up towards the true price.
    let floor = ratio >> 32;
    let mask: U256 = (U256::from(1) << 32) - U256::from(1);
    if (ratio & mask).is_zero() {
        Some(floor)
    } else {
        Some(floor + U256::from(1))
    }
}
