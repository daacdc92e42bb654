use thiserror::Error;

#[derive(Error, Debug)]
pub enum LiqRsError {
    #[error("Subgraph query error: {0}")]
    SubgraphError(String),

    #[error("Could not decode subgraph response: {0}")]
    DecodeError(String),

    #[error("Tick spacing for fee tier {0} undefined")]
    UnknownFeeTier(u32),

    #[error("Pool calculation error: {0}")]
    CalculationError(String),
}
