use crate::core::token::TokenInfo;
use crate::errors::LiqRsError;
use crate::math::v3::{sqrt_price_math, tick_math};
use alloy_primitives::U256;

/// A concentrated-liquidity position over `[tick_lower, tick_upper)`.
///
/// `tick_lower < tick_upper` is the caller's responsibility; an inverted
/// range is not rejected and yields meaningless (but finite) amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub token0: TokenInfo,
    pub token1: TokenInfo,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub liquidity: u128,
}

impl Position {
    pub fn new(
        token0: TokenInfo,
        token1: TokenInfo,
        tick_lower: i32,
        tick_upper: i32,
        liquidity: u128,
    ) -> Self {
        Self {
            token0,
            token1,
            tick_lower,
            tick_upper,
            liquidity,
        }
    }

    /// The token0 and token1 amounts currently held by this position, given
    /// the pool's current tick and sqrt price.
    ///
    /// Below the range the position is entirely token0, above it entirely
    /// token1, and in range it is split at the current sqrt price. All
    /// amounts round down, so withdrawable value is never overstated.
    pub fn token_amounts(
        &self,
        current_tick: i32,
        sqrt_ratio_x96: U256,
    ) -> Result<(U256, U256), LiqRsError> {
        let sqrt_ratio_lower = sqrt_ratio_at(self.tick_lower)?;
        let sqrt_ratio_upper = sqrt_ratio_at(self.tick_upper)?;

        let amount0 = if current_tick < self.tick_lower {
            sqrt_price_math::get_amount0_delta(
                sqrt_ratio_lower,
                sqrt_ratio_upper,
                self.liquidity,
                false,
            )
        } else if current_tick < self.tick_upper {
            sqrt_price_math::get_amount0_delta(
                sqrt_ratio_x96,
                sqrt_ratio_upper,
                self.liquidity,
                false,
            )
        } else {
            Some(U256::ZERO)
        }
        .ok_or_else(|| LiqRsError::CalculationError("amount0 overflow".into()))?;

        let amount1 = if current_tick < self.tick_lower {
            Some(U256::ZERO)
        } else if current_tick < self.tick_upper {
            sqrt_price_math::get_amount1_delta(
                sqrt_ratio_lower,
                sqrt_ratio_x96,
                self.liquidity,
                false,
            )
        } else {
            sqrt_price_math::get_amount1_delta(
                sqrt_ratio_lower,
                sqrt_ratio_upper,
                self.liquidity,
                false,
            )
        }
        .ok_or_else(|| LiqRsError::CalculationError("amount1 overflow".into()))?;

        Ok((amount0, amount1))
    }
}

fn sqrt_ratio_at(tick: i32) -> Result<U256, LiqRsError> {
    tick_math::get_sqrt_ratio_at_tick(tick)
        .ok_or_else(|| LiqRsError::CalculationError(format!("tick {tick} out of range")))
}
