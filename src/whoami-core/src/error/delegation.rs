use thiserror::Error;

#[derive(Error, Debug)]
pub enum DelegationError {
    #[error("The delegation chain is not valid JSON: {0}")]
    ParseChainFailed(#[source] serde_json::Error),

    #[error("The delegation chain contains no delegations")]
    EmptyChain(),

    #[error("Invalid expiration '{0}' in delegation chain")]
    InvalidExpiration(String, #[source] std::num::ParseIntError),

    #[error("Invalid hex in delegation field '{0}'")]
    InvalidHex(&'static str, #[source] hex::FromHexError),

    #[error("Invalid delegation target '{0}'")]
    InvalidTarget(String),

    #[error("Invalid delegation. This delegation has expired. Please request a fresh delegation and try again")]
    Expired(),

    #[error("System clock is set before the UNIX epoch")]
    ClockBeforeEpoch(#[source] std::time::SystemTimeError),
}
