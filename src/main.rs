use alloy_primitives::Address;
use liqrs::liquidity::chart::{TICKS_PER_GROUP, group_ticks};
use liqrs::liquidity::fetcher::{DEFAULT_SURROUNDING_TICKS, fetch_ticks_surrounding_price};
use liqrs::subgraph::client::HttpSubgraphClient;

const SUBGRAPH_URL: &str = "https://api.thegraph.com/subgraphs/name/ianlapham/uniswap-v3-testing";
// USDC/WETH 0.3% on mainnet.
const DEFAULT_POOL: &str = "0x8ad599c3a0ff1de082011efddc58f1908eb6e6d8";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let pool: Address = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_POOL.to_string())
        .parse()?;
    let client = HttpSubgraphClient::new(SUBGRAPH_URL.parse()?);

    tracing::info!("Fetching liquidity distribution for pool {pool}");

    let Some(data) =
        fetch_ticks_surrounding_price(&client, pool, DEFAULT_SURROUNDING_TICKS).await?
    else {
        println!("Pool {pool} is unknown to the subgraph or not yet initialized.");
        return Ok(());
    };

    println!(
        "Pool {} | fee tier {} | tick spacing {} | active tick {}",
        pool, data.fee_tier, data.tick_spacing, data.active_tick_idx
    );

    let entries = group_ticks(&data.ticks_processed, data.active_tick_idx, TICKS_PER_GROUP);
    println!(
        "Reconstructed {} ticks into {} chart entries.",
        data.ticks_processed.len(),
        entries.len()
    );

    println!("\nTicks around the current price:");
    let active_pos = data
        .ticks_processed
        .iter()
        .position(|t| t.tick_idx == data.active_tick_idx)
        .unwrap_or(0);
    let start = active_pos.saturating_sub(5);
    let end = (active_pos + 6).min(data.ticks_processed.len());
    for tick in &data.ticks_processed[start..end] {
        let marker = if tick.tick_idx == data.active_tick_idx {
            " <- active"
        } else {
            ""
        };
        println!(
            "  tick {:>8} | price0 {:>16} | active liquidity {}{}",
            tick.tick_idx, tick.price0, tick.liquidity_active, marker
        );
    }

    Ok(())
}
