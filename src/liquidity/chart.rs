use super::surrounding::ProcessedTick;

/// Ticks aggregated per chart bucket. One tick per bar is the display default.
pub const TICKS_PER_GROUP: usize = 1;

/// One display-ready bar of the liquidity distribution chart.
#[derive(Debug, Clone, PartialEq)]
pub struct LiquidityChartEntry {
    pub index: usize,
    /// Active liquidity at the pool's current tick, when that tick falls in
    /// this group; zero otherwise.
    pub current_tick_liquidity: f64,
    /// Summed active liquidity of the group's remaining ticks. The current
    /// tick is excluded so a chart can stack the two series without double
    /// counting.
    pub surrounding_liquidity: f64,
    /// Summed (not averaged) per-tick prices across the group. Matches the
    /// reference charting behavior; with one tick per group the sum is just
    /// that tick's price.
    pub price0: f64,
    pub price1: f64,
}

/// Partitions processed ticks into consecutive groups of `group_size` and
/// aggregates each group into a chart entry.
pub fn group_ticks(
    ticks: &[ProcessedTick],
    active_tick_idx: i32,
    group_size: usize,
) -> Vec<LiquidityChartEntry> {
    if group_size == 0 {
        return Vec::new();
    }

    ticks
        .chunks(group_size)
        .enumerate()
        .map(|(index, group)| {
            let mut entry = LiquidityChartEntry {
                index,
                current_tick_liquidity: 0.0,
                surrounding_liquidity: 0.0,
                price0: 0.0,
                price1: 0.0,
            };

            for tick in group {
                let liquidity = decimal_value(&tick.liquidity_active.to_string());
                if tick.tick_idx == active_tick_idx {
                    entry.current_tick_liquidity = liquidity;
                } else {
                    entry.surrounding_liquidity += liquidity;
                }
                entry.price0 += decimal_value(&tick.price0);
                entry.price1 += decimal_value(&tick.price1);
            }

            entry
        })
        .collect()
}

fn decimal_value(s: &str) -> f64 {
    s.parse().unwrap_or(0.0)
}
