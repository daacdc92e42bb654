use alloy_primitives::{U256, U512};

/// floor((a * b) / denominator), with the product held in 512 bits.
/// Returns `None` on division by zero or if the result does not fit in 256 bits.
pub fn mul_div(a: U256, b: U256, denominator: U256) -> Option<U256> {
    if denominator.is_zero() {
        return None;
    }

    let quotient = a.widening_mul(b) / U512::from(denominator);
    if quotient > U512::from(U256::MAX) {
        return None;
    }
    Some(quotient.to::<U256>())
}

/// ceil((a * b) / denominator), with the product held in 512 bits.
/// Returns `None` on division by zero or if the rounded result does not fit in 256 bits.
pub fn mul_div_rounding_up(a: U256, b: U256, denominator: U256) -> Option<U256> {
    if denominator.is_zero() {
        return None;
    }

    let denominator = U512::from(denominator);
    let product = a.widening_mul(b);
    let mut quotient = product / denominator;
    if !(product % denominator).is_zero() {
        quotient += U512::from(1);
    }

    if quotient > U512::from(U256::MAX) {
        return None;
    }
    Some(quotient.to::<U256>())
}
