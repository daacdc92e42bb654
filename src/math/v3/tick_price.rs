/// Decimal places carried by the formatted price strings.
pub const PRICE_FIXED_DIGITS: usize = 4;

/// Converts a tick index into the pair of human-readable prices at that tick:
/// token0 denominated in token1, and the inverse. The raw ratio 1.0001^tick is
/// adjusted by the tokens' decimal difference before formatting.
///
/// Display-precision only. All liquidity accounting stays in big integers;
/// these strings never feed back into the math.
pub fn tick_to_price(tick: i32, decimals0: u8, decimals1: u8) -> (String, String) {
    let ratio = 1.0001_f64.powi(tick);
    let adjustment = 10_f64.powi(decimals0 as i32 - decimals1 as i32);

    let price0 = ratio * adjustment;
    let price1 = 1.0 / price0;

    (
        format!("{price0:.prec$}", prec = PRICE_FIXED_DIGITS),
        format!("{price1:.prec$}", prec = PRICE_FIXED_DIGITS),
    )
}
