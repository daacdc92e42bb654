use super::full_math::{mul_div, mul_div_rounding_up};
use alloy_primitives::U256;

fn div_rounding_up(a: U256, b: U256) -> Option<U256> {
    if a.is_zero() {
        return Some(U256::ZERO);
    }
    if b.is_zero() {
        return None;
    }
    Some((a - U256::from(1)) / b + U256::from(1))
}

/// Amount of token0 held between two sqrt prices for a given liquidity:
/// liquidity * (sqrt_b - sqrt_a) / (sqrt_a * sqrt_b), carried in Q64.96.
/// Arguments are sorted internally, so boundary order does not matter.
pub fn get_amount0_delta(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: u128,
    round_up: bool,
) -> Option<U256> {
    let (mut sqrt_ratio_a_x96, mut sqrt_ratio_b_x96) = (sqrt_ratio_a_x96, sqrt_ratio_b_x96);
    if sqrt_ratio_a_x96 > sqrt_ratio_b_x96 {
        std::mem::swap(&mut sqrt_ratio_a_x96, &mut sqrt_ratio_b_x96);
    }

    if sqrt_ratio_a_x96.is_zero() {
        return None;
    }

    let numerator1 = U256::from(liquidity) << 96;
    let numerator2 = sqrt_ratio_b_x96 - sqrt_ratio_a_x96;

    if round_up {
        let intermediate = mul_div_rounding_up(numerator1, numerator2, sqrt_ratio_b_x96)?;
        div_rounding_up(intermediate, sqrt_ratio_a_x96)
    } else {
        let intermediate = mul_div(numerator1, numerator2, sqrt_ratio_b_x96)?;
        Some(intermediate / sqrt_ratio_a_x96)
    }
}

/// Amount of token1 held between two sqrt prices for a given liquidity:
/// liquidity * (sqrt_b - sqrt_a), carried in Q64.96.
pub fn get_amount1_delta(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: u128,
    round_up: bool,
) -> Option<U256> {
    let (mut sqrt_ratio_a_x96, mut sqrt_ratio_b_x96) = (sqrt_ratio_a_x96, sqrt_ratio_b_x96);
    if sqrt_ratio_a_x96 > sqrt_ratio_b_x96 {
        std::mem::swap(&mut sqrt_ratio_a_x96, &mut sqrt_ratio_b_x96);
    }

    let sqrt_diff = sqrt_ratio_b_x96 - sqrt_ratio_a_x96;

    if round_up {
        mul_div_rounding_up(U256::from(liquidity), sqrt_diff, U256::from(1) << 96)
    } else {
        mul_div(U256::from(liquidity), sqrt_diff, U256::from(1) << 96)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::v3::utils::sqrt;
    use std::str::FromStr;

    fn e18(n: u64) -> U256 {
        U256::from(n) * U256::from(10).pow(U256::from(18))
    }

    fn encode_price_sqrt(reserve1: u128, reserve0: u128) -> U256 {
        let r1 = U256::from(reserve1);
        let r0 = U256::from(reserve0);
        sqrt(r1 * (U256::from(1) << 192) / r0)
    }

    #[test]
    fn test_get_amount0_delta_simple() {
        let liquidity = e18(1).to::<u128>();
        let sqrt_p_a = encode_price_sqrt(1, 1);
        let sqrt_p_b = encode_price_sqrt(121, 100);

        let amount0_up = get_amount0_delta(sqrt_p_a, sqrt_p_b, liquidity, true).unwrap();
        assert_eq!(amount0_up, U256::from_str("90909090909090910").unwrap());

        let amount0_down = get_amount0_delta(sqrt_p_a, sqrt_p_b, liquidity, false).unwrap();
        assert_eq!(amount0_down, amount0_up - U256::from(1));
    }

    #[test]
    fn test_get_amount1_delta_simple() {
        let liquidity = e18(1).to::<u128>();
        let sqrt_p_a = encode_price_sqrt(1, 1);
        let sqrt_p_b = encode_price_sqrt(121, 100);

        let amount1_up = get_amount1_delta(sqrt_p_a, sqrt_p_b, liquidity, true).unwrap();
        assert_eq!(amount1_up, U256::from_str("100000000000000000").unwrap());

        let amount1_down = get_amount1_delta(sqrt_p_a, sqrt_p_b, liquidity, false).unwrap();
        assert_eq!(amount1_down, amount1_up - U256::from(1));
    }

    #[test]
    fn test_amount_deltas_are_zero_for_equal_prices() {
        let liquidity = e18(1).to::<u128>();
        let price = encode_price_sqrt(1, 1);

        assert_eq!(
            get_amount0_delta(price, price, liquidity, false).unwrap(),
            U256::ZERO
        );
        assert_eq!(
            get_amount1_delta(price, price, liquidity, false).unwrap(),
            U256::ZERO
        );
    }

    #[test]
    fn test_amount_deltas_ignore_boundary_order() {
        let liquidity = e18(1).to::<u128>();
        let sqrt_p_a = encode_price_sqrt(1, 1);
        let sqrt_p_b = encode_price_sqrt(121, 100);

        assert_eq!(
            get_amount0_delta(sqrt_p_a, sqrt_p_b, liquidity, false),
            get_amount0_delta(sqrt_p_b, sqrt_p_a, liquidity, false)
        );
        assert_eq!(
            get_amount1_delta(sqrt_p_a, sqrt_p_b, liquidity, false),
            get_amount1_delta(sqrt_p_b, sqrt_p_a, liquidity, false)
        );
    }

    #[test]
    fn test_get_amount0_delta_rejects_zero_lower_price() {
        assert_eq!(
            get_amount0_delta(U256::ZERO, encode_price_sqrt(1, 1), 1, false),
            None
        );
    }
}
