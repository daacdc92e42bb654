use crate::errors::LiqRsError;
use alloy_primitives::Address;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Token metadata as reported by the indexing service.
///
/// Value type: nothing here is fetched lazily, so clones are cheap enough
/// to pass around by value wherever a position or a chart needs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    pub address: Address,
    pub symbol: String,
    pub decimals: u8,
}

impl TokenInfo {
    pub fn new(address: Address, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            address,
            symbol: symbol.into(),
            decimals,
        }
    }

    /// Builds a token from the string fields the subgraph returns.
    pub fn from_wire(id: &str, symbol: &str, decimals: &str) -> Result<Self, LiqRsError> {
        let address = Address::from_str(id)
            .map_err(|e| LiqRsError::DecodeError(format!("token id {id}: {e}")))?;
        let decimals = decimals
            .parse::<u8>()
            .map_err(|e| LiqRsError::DecodeError(format!("token decimals {decimals}: {e}")))?;
        Ok(Self::new(address, symbol, decimals))
    }
}

impl Display for TokenInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} ({})", self.symbol, self.address)
    }
}
