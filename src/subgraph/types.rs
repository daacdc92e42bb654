use crate::core::token::TokenInfo;
use crate::errors::LiqRsError;
use crate::liquidity::surrounding::InitializedTick;
use alloy_primitives::{I256, U256};
use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    pub data: Option<serde_json::Value>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// One initialized tick as serialized by the subgraph. All numeric fields
/// arrive as decimal strings; `BigInt` has no JSON number representation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickRecord {
    pub tick_idx: String,
    pub liquidity_gross: String,
    pub liquidity_net: String,
    pub price0: String,
    pub price1: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenRecord {
    pub id: String,
    pub symbol: String,
    pub decimals: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolRecord {
    /// Null until the pool has been initialized on-chain.
    pub tick: Option<String>,
    pub token0: TokenRecord,
    pub token1: TokenRecord,
    pub fee_tier: String,
    pub sqrt_price: String,
    pub liquidity: String,
}

/// Pool metadata parsed into domain types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolState {
    pub tick: i32,
    pub token0: TokenInfo,
    pub token1: TokenInfo,
    pub fee_tier: u32,
    pub sqrt_price_x96: U256,
    pub liquidity: U256,
}

impl TryFrom<&TickRecord> for InitializedTick {
    type Error = LiqRsError;

    fn try_from(record: &TickRecord) -> Result<Self, Self::Error> {
        let tick_idx = record
            .tick_idx
            .parse::<i32>()
            .map_err(|e| LiqRsError::DecodeError(format!("tickIdx {}: {e}", record.tick_idx)))?;
        let liquidity_gross = U256::from_str(&record.liquidity_gross).map_err(|e| {
            LiqRsError::DecodeError(format!("liquidityGross {}: {e}", record.liquidity_gross))
        })?;
        let liquidity_net = I256::from_dec_str(&record.liquidity_net).map_err(|e| {
            LiqRsError::DecodeError(format!("liquidityNet {}: {e}", record.liquidity_net))
        })?;

        Ok(Self {
            tick_idx,
            liquidity_gross,
            liquidity_net,
        })
    }
}

impl PoolRecord {
    /// Parses the wire record; `Ok(None)` when the pool exists but has never
    /// been initialized (no current tick to anchor a chart on).
    pub fn parse(&self) -> Result<Option<PoolState>, LiqRsError> {
        let Some(tick) = self.tick.as_deref() else {
            return Ok(None);
        };
        let tick = tick
            .parse::<i32>()
            .map_err(|e| LiqRsError::DecodeError(format!("pool tick {tick}: {e}")))?;

        let token0 = TokenInfo::from_wire(
            &self.token0.id,
            &self.token0.symbol,
            &self.token0.decimals,
        )?;
        let token1 = TokenInfo::from_wire(
            &self.token1.id,
            &self.token1.symbol,
            &self.token1.decimals,
        )?;

        let fee_tier = self
            .fee_tier
            .parse::<u32>()
            .map_err(|e| LiqRsError::DecodeError(format!("feeTier {}: {e}", self.fee_tier)))?;
        let sqrt_price_x96 = U256::from_str(&self.sqrt_price)
            .map_err(|e| LiqRsError::DecodeError(format!("sqrtPrice {}: {e}", self.sqrt_price)))?;
        let liquidity = U256::from_str(&self.liquidity)
            .map_err(|e| LiqRsError::DecodeError(format!("liquidity {}: {e}", self.liquidity)))?;

        Ok(Some(PoolState {
            tick,
            token0,
            token1,
            fee_tier,
            sqrt_price_x96,
            liquidity,
        }))
    }
}
