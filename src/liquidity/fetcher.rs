use crate::errors::LiqRsError;
use crate::liquidity::chart::{self, LiquidityChartEntry, TICKS_PER_GROUP};
use crate::liquidity::surrounding::{self, InitializedTick, ProcessedTick};
use crate::subgraph::client::SubgraphQuery;
use crate::subgraph::types::{PoolRecord, PoolState, TickRecord};
use alloy_primitives::{Address, I256};
use serde_json::json;
use std::collections::BTreeMap;

/// Ticks reconstructed on each side of the pool's current tick.
pub const DEFAULT_SURROUNDING_TICKS: usize = 300;

/// Page size of the tick query; mirrored in the `first:` clause below.
pub const PAGE_SIZE: usize = 1000;

/// Hard ceiling on tick pages fetched for one pool, so a misbehaving
/// endpoint that keeps returning full pages cannot spin the pagination loop
/// forever.
pub const MAX_TICK_PAGES: usize = 100;

const TICKS_QUERY: &str = r#"
query surroundingTicks($poolAddress: String!, $skip: Int!) {
  ticks(first: 1000, skip: $skip, where: { poolAddress: $poolAddress }) {
    tickIdx
    liquidityGross
    liquidityNet
    price0
    price1
  }
}
"#;

const POOL_QUERY: &str = r#"
query pool($poolAddress: String!) {
  pool(id: $poolAddress) {
    tick
    token0 {
      symbol
      id
      decimals
    }
    token1 {
      symbol
      id
      decimals
    }
    feeTier
    sqrtPrice
    liquidity
  }
}
"#;

/// Tick spacing for a pool's fee tier. There is no way to reconstruct the
/// tick grid without it, so an unrecognized tier is a hard error.
pub fn tick_spacing_for_fee_tier(fee_tier: u32) -> Result<i32, LiqRsError> {
    match fee_tier {
        10000 => Ok(200),
        3000 => Ok(60),
        500 => Ok(10),
        other => Err(LiqRsError::UnknownFeeTier(other)),
    }
}

/// The reconstruction result bundle handed to the chart formatter.
#[derive(Debug, Clone, PartialEq)]
pub struct TickChartData {
    pub ticks_processed: Vec<ProcessedTick>,
    pub fee_tier: u32,
    pub tick_spacing: i32,
    pub active_tick_idx: i32,
}

fn subgraph_id(pool_address: Address) -> String {
    // Subgraph entity ids are lowercase 0x-prefixed hex.
    format!("{pool_address:#x}")
}

/// Fetches every initialized tick of a pool, page by page, until the
/// subgraph returns an empty page.
pub async fn fetch_initialized_ticks<C: SubgraphQuery + ?Sized>(
    client: &C,
    pool_address: Address,
) -> Result<Vec<TickRecord>, LiqRsError> {
    let pool_id = subgraph_id(pool_address);
    let mut records: Vec<TickRecord> = Vec::new();
    let mut skip = 0usize;
    let mut pages = 0usize;

    loop {
        let data = client
            .query(TICKS_QUERY, json!({ "poolAddress": &pool_id, "skip": skip }))
            .await?;
        let page: Vec<TickRecord> = serde_json::from_value(
            data.get("ticks")
                .cloned()
                .unwrap_or(serde_json::Value::Null),
        )
        .map_err(|e| LiqRsError::DecodeError(format!("ticks page at skip {skip}: {e}")))?;

        if page.is_empty() {
            break;
        }
        records.extend(page);
        skip += PAGE_SIZE;

        pages += 1;
        if pages >= MAX_TICK_PAGES {
            tracing::warn!(
                %pool_address,
                fetched = records.len(),
                "Tick pagination ceiling reached; distribution may be truncated"
            );
            break;
        }
    }

    Ok(records)
}

/// Fetches pool metadata; `Ok(None)` when the subgraph does not know the
/// pool or the pool has no current tick yet.
pub async fn fetch_pool<C: SubgraphQuery + ?Sized>(
    client: &C,
    pool_address: Address,
) -> Result<Option<PoolState>, LiqRsError> {
    let data = client
        .query(POOL_QUERY, json!({ "poolAddress": subgraph_id(pool_address) }))
        .await?;

    let pool_value = match data.get("pool") {
        None | Some(serde_json::Value::Null) => return Ok(None),
        Some(value) => value.clone(),
    };

    let record: PoolRecord = serde_json::from_value(pool_value)
        .map_err(|e| LiqRsError::DecodeError(format!("pool record: {e}")))?;
    record.parse()
}

/// Fetches pool state and its initialized ticks, then reconstructs the
/// active-liquidity distribution around the current price.
pub async fn fetch_ticks_surrounding_price<C: SubgraphQuery + ?Sized>(
    client: &C,
    pool_address: Address,
    num_surrounding: usize,
) -> Result<Option<TickChartData>, LiqRsError> {
    let Some(pool) = fetch_pool(client, pool_address).await? else {
        return Ok(None);
    };
    let tick_spacing = tick_spacing_for_fee_tier(pool.fee_tier)?;

    let tick_records = fetch_initialized_ticks(client, pool_address).await?;
    let mut initialized = BTreeMap::new();
    for record in &tick_records {
        let tick = InitializedTick::try_from(record)?;
        initialized.insert(tick.tick_idx, tick);
    }

    let pool_liquidity = I256::try_from(pool.liquidity).map_err(|_| {
        LiqRsError::DecodeError(format!("pool liquidity {} out of range", pool.liquidity))
    })?;

    let ticks_processed = surrounding::surrounding_ticks(
        pool.tick,
        tick_spacing,
        pool_liquidity,
        &initialized,
        &pool.token0,
        &pool.token1,
        num_surrounding,
    );
    let active_tick_idx = surrounding::snap_to_spacing(pool.tick, tick_spacing);

    tracing::debug!(
        %pool_address,
        ticks = ticks_processed.len(),
        initialized = initialized.len(),
        active_tick_idx,
        "Reconstructed surrounding ticks"
    );

    Ok(Some(TickChartData {
        ticks_processed,
        fee_tier: pool.fee_tier,
        tick_spacing,
        active_tick_idx,
    }))
}

/// Public entry point: the display-ready liquidity distribution for a pool.
/// `Ok(None)` means the upstream pool data is unavailable.
pub async fn fetch_formatted_liquidity<C: SubgraphQuery + ?Sized>(
    client: &C,
    pool_address: Address,
) -> Result<Option<Vec<LiquidityChartEntry>>, LiqRsError> {
    let Some(data) =
        fetch_ticks_surrounding_price(client, pool_address, DEFAULT_SURROUNDING_TICKS).await?
    else {
        return Ok(None);
    };

    Ok(Some(chart::group_ticks(
        &data.ticks_processed,
        data.active_tick_idx,
        TICKS_PER_GROUP,
    )))
}
