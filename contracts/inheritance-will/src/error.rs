use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Invalid beneficiary address")]
    InvalidBeneficiary {},

    #[error("Inactivity period must be greater than zero")]
    InvalidPeriod {},

    #[error("Invalid denom")]
    InvalidDenom {},

    #[error("Will has been revoked")]
    WillRevoked {},

    #[error("Inactivity period has not elapsed")]
    InactivityPeriodNotElapsed {},

    #[error("No funds to release")]
    NoFunds {},

    #[error("Transfer to beneficiary failed")]
    TransferFailed {},

    #[error("Cannot recover the tracked denom")]
    CannotRecoverTracked {},

    #[error("Amount must be greater than zero")]
    InvalidAmount {},
}
