use crate::core::token::TokenInfo;
use crate::math::v3::constants::{MAX_TICK, MIN_TICK};
use crate::math::v3::tick_price::tick_to_price;
use alloy_primitives::{I256, U256};
use std::collections::BTreeMap;

/// A tick carrying a nonzero liquidity delta, keyed by index in the set the
/// indexer reports for a pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitializedTick {
    pub tick_idx: i32,
    pub liquidity_gross: U256,
    pub liquidity_net: I256,
}

/// A tick annotated with the pool's in-range liquidity as of that tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedTick {
    pub tick_idx: i32,
    /// Total liquidity in range assuming the pool price sits exactly at this
    /// tick. Signed so that corrupt upstream net-liquidity data surfaces as a
    /// negative value instead of a panic; well-formed input never goes below
    /// zero.
    pub liquidity_active: I256,
    /// Zero unless this tick is initialized.
    pub liquidity_net: I256,
    /// Zero unless this tick is initialized.
    pub liquidity_gross: U256,
    pub price0: String,
    pub price1: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Ascending,
    Descending,
}

/// Snaps a tick down to the nearest initializable multiple of the spacing.
pub fn snap_to_spacing(tick: i32, tick_spacing: i32) -> i32 {
    tick.div_euclid(tick_spacing) * tick_spacing
}

/// Reconstructs the active-liquidity distribution across a window of
/// `num_surrounding` ticks on each side of the pool's current tick.
///
/// The walk starts at the current tick (snapped down to the spacing grid),
/// seeded with the pool's reported total liquidity, and crosses the
/// initialized-tick set outward in both directions. Crossing conventions
/// differ by direction: ascending, a tick's net delta lands on the tick
/// itself; descending, it lands one step below, because liquidity referenced
/// at a tick stays in range until the price has fully moved under it.
///
/// The result is in strictly ascending tick order, at most
/// `2 * num_surrounding + 1` entries, truncated on whichever side reaches a
/// global tick bound.
pub fn surrounding_ticks(
    pool_tick: i32,
    tick_spacing: i32,
    pool_liquidity: I256,
    initialized: &BTreeMap<i32, InitializedTick>,
    token0: &TokenInfo,
    token1: &TokenInfo,
    num_surrounding: usize,
) -> Vec<ProcessedTick> {
    let active_tick_idx = snap_to_spacing(pool_tick, tick_spacing);

    // Snapping can push the index past a protocol bound when the pool sits at
    // an extreme. Only the price lookup is clamped; the stored index keeps
    // the true accounting position.
    let price_tick_idx = active_tick_idx.clamp(MIN_TICK, MAX_TICK);
    let (price0, price1) = tick_to_price(price_tick_idx, token0.decimals, token1.decimals);

    let mut active_tick = ProcessedTick {
        tick_idx: active_tick_idx,
        liquidity_active: pool_liquidity,
        liquidity_net: I256::ZERO,
        liquidity_gross: U256::ZERO,
        price0,
        price1,
    };
    if let Some(tick) = initialized.get(&active_tick_idx) {
        active_tick.liquidity_net = tick.liquidity_net;
        active_tick.liquidity_gross = tick.liquidity_gross;
    }

    let ascending = walk(
        &active_tick,
        tick_spacing,
        num_surrounding,
        Direction::Ascending,
        initialized,
        token0,
        token1,
    );
    let descending = walk(
        &active_tick,
        tick_spacing,
        num_surrounding,
        Direction::Descending,
        initialized,
        token0,
        token1,
    );

    let mut ticks = descending;
    ticks.push(active_tick);
    ticks.extend(ascending);
    ticks
}

/// Walks outward from the active tick in one direction, carrying active
/// liquidity across each step.
fn walk(
    origin: &ProcessedTick,
    tick_spacing: i32,
    num_surrounding: usize,
    direction: Direction,
    initialized: &BTreeMap<i32, InitializedTick>,
    token0: &TokenInfo,
    token1: &TokenInfo,
) -> Vec<ProcessedTick> {
    let mut processed = Vec::with_capacity(num_surrounding);
    let mut previous = origin.clone();

    for _ in 0..num_surrounding {
        let tick_idx = match direction {
            Direction::Ascending => previous.tick_idx + tick_spacing,
            Direction::Descending => previous.tick_idx - tick_spacing,
        };
        if !(MIN_TICK..=MAX_TICK).contains(&tick_idx) {
            break;
        }

        let entry = initialized.get(&tick_idx);
        let (price0, price1) = tick_to_price(tick_idx, token0.decimals, token1.decimals);
        let mut current = ProcessedTick {
            tick_idx,
            liquidity_active: previous.liquidity_active,
            liquidity_net: entry.map_or(I256::ZERO, |t| t.liquidity_net),
            liquidity_gross: entry.map_or(U256::ZERO, |t| t.liquidity_gross),
            price0,
            price1,
        };

        match direction {
            Direction::Ascending => {
                // Crossing upward, an initialized tick's delta applies at the
                // tick itself.
                if let Some(tick) = entry {
                    current.liquidity_active = previous.liquidity_active + tick.liquidity_net;
                }
            }
            Direction::Descending => {
                // Crossing downward, the previously visited tick's delta
                // applies one step late.
                if previous.liquidity_net != I256::ZERO {
                    current.liquidity_active = previous.liquidity_active - previous.liquidity_net;
                }
            }
        }

        processed.push(current.clone());
        previous = current;
    }

    if direction == Direction::Descending {
        processed.reverse();
    }
    processed
}
