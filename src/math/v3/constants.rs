use alloy_primitives::U256;

/// The protocol's global tick bounds, ln(2^-128) / ln(sqrt(1.0001)) rounded in.
pub const MIN_TICK: i32 = -887272;
pub const MAX_TICK: i32 = -MIN_TICK;

/// sqrt(1.0001^MIN_TICK) * 2^96.
pub const MIN_SQRT_RATIO: U256 = U256::from_limbs([4295128739, 0, 0, 0]);
/// sqrt(1.0001^MAX_TICK) * 2^96.
pub const MAX_SQRT_RATIO: U256 =
    U256::from_limbs([6743328256752651558, 17280870778742802505, 4294805859, 0]);

pub const Q96: U256 = U256::from_limbs([0, 4294967296, 0, 0]);
