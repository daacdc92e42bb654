use alloy_primitives::{Address, U256};
use liqrs::math::v3::tick_math::get_sqrt_ratio_at_tick;
use liqrs::{Position, TokenInfo};
use std::str::FromStr;

const WETH: &str = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";
const MUSH: &str = "0xea6412Fb370e8d1605E6aEeAA21aD07C3C7e9F24";

const LIQUIDITY: u128 = 4280791798686518438655;
const SQRT_PRICE: &str = "4006962723278500455702852003094";

fn position(liquidity: u128) -> Position {
    Position::new(
        TokenInfo::new(Address::from_str(WETH).unwrap(), "WETH", 18),
        TokenInfo::new(Address::from_str(MUSH).unwrap(), "MUSH", 18),
        77400,
        81200,
        liquidity,
    )
}

#[test]
fn test_in_range_position_holds_both_tokens() {
    let (amount0, amount1) = position(LIQUIDITY)
        .token_amounts(78533, U256::from_str(SQRT_PRICE).unwrap())
        .unwrap();

    assert_eq!(amount0, U256::from_str("10788032038124072477").unwrap());
    assert_eq!(amount1, U256::from_str("11309291629035947614505").unwrap());
}

#[test]
fn test_below_range_position_is_all_token0() {
    let sqrt_price = get_sqrt_ratio_at_tick(77000).unwrap();
    let (amount0, amount1) = position(LIQUIDITY).token_amounts(77000, sqrt_price).unwrap();

    assert_eq!(amount0, U256::from_str("15453165472580184106").unwrap());
    assert_eq!(amount1, U256::ZERO);
}

#[test]
fn test_above_range_position_is_all_token1() {
    let sqrt_price = get_sqrt_ratio_at_tick(81200).unwrap();
    let (amount0, amount1) = position(LIQUIDITY).token_amounts(81200, sqrt_price).unwrap();

    assert_eq!(amount0, U256::ZERO);
    assert_eq!(amount1, U256::from_str("42933916791054591456188").unwrap());
}

#[test]
fn test_lower_bound_is_inclusive() {
    // Sitting exactly on the lower tick counts as in range, but no token1 has
    // accrued yet, so the split degenerates to the all-token0 amounts.
    let sqrt_price = get_sqrt_ratio_at_tick(77400).unwrap();
    let (amount0, amount1) = position(LIQUIDITY).token_amounts(77400, sqrt_price).unwrap();

    assert_eq!(amount0, U256::from_str("15453165472580184106").unwrap());
    assert_eq!(amount1, U256::ZERO);
}

#[test]
fn test_upper_bound_is_exclusive() {
    // One tick below the upper bound the position still holds token0; at the
    // bound it holds none.
    let (in_amount0, _) = position(LIQUIDITY)
        .token_amounts(81199, get_sqrt_ratio_at_tick(81199).unwrap())
        .unwrap();
    let (out_amount0, out_amount1) = position(LIQUIDITY)
        .token_amounts(81200, get_sqrt_ratio_at_tick(81200).unwrap())
        .unwrap();

    assert!(in_amount0 > U256::ZERO);
    assert_eq!(out_amount0, U256::ZERO);
    assert!(out_amount1 > U256::ZERO);
}

#[test]
fn test_zero_liquidity_position_is_empty() {
    let (amount0, amount1) = position(0)
        .token_amounts(78533, U256::from_str(SQRT_PRICE).unwrap())
        .unwrap();

    assert_eq!(amount0, U256::ZERO);
    assert_eq!(amount1, U256::ZERO);
}

#[test]
fn test_amounts_scale_with_liquidity() {
    let sqrt_price = U256::from_str(SQRT_PRICE).unwrap();
    let (small0, small1) = position(LIQUIDITY).token_amounts(78533, sqrt_price).unwrap();
    let (large0, large1) = position(LIQUIDITY * 2)
        .token_amounts(78533, sqrt_price)
        .unwrap();

    // Round-down arithmetic may shave a unit, never add one.
    assert!(large0 >= small0 * U256::from(2) - U256::from(1));
    assert!(large0 <= small0 * U256::from(2) + U256::from(1));
    assert!(large1 >= small1 * U256::from(2) - U256::from(1));
    assert!(large1 <= small1 * U256::from(2) + U256::from(1));
}

#[test]
fn test_out_of_range_tick_bounds_error() {
    let bad = Position::new(
        TokenInfo::new(Address::from_str(WETH).unwrap(), "WETH", 18),
        TokenInfo::new(Address::from_str(MUSH).unwrap(), "MUSH", 18),
        -900000,
        81200,
        LIQUIDITY,
    );

    assert!(
        bad.token_amounts(78533, U256::from_str(SQRT_PRICE).unwrap())
            .is_err()
    );
}
