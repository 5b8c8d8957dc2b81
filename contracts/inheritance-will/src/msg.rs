use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    /// Beneficiary who receives the balance once the inactivity period elapses
    pub beneficiary: String,
    /// Inactivity period in seconds
    pub inactivity_period: u64,
    /// Tracked token denomination
    pub denom: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Deposit funds; any deposit counts as activity and resets the clock
    Deposit {},
    /// Replace beneficiary and period, lifting any revocation (owner)
    Reconfigure {
        beneficiary: String,
        inactivity_period: u64,
    },
    /// Disable release until the next reconfiguration (owner)
    Revoke {},
    /// Release the full balance to the beneficiary (anyone, once eligible)
    Release {},
    /// Return a non-tracked denom to the owner (owner)
    RecoverForeignAsset { denom: String, amount: Uint128 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get will configuration and state
    #[returns(WillResponse)]
    GetWill {},

    /// Check if the balance can be released
    #[returns(ReleaseStatusResponse)]
    CanRelease {},
}

// Response types

#[cw_serde]
pub struct WillResponse {
    pub owner: Addr,
    pub beneficiary: Addr,
    pub inactivity_period: u64,
    pub denom: String,
    pub last_activity: u64,
    pub revoked: bool,
}

#[cw_serde]
pub struct ReleaseStatusResponse {
    pub can_release: bool,
    pub revoked: bool,
    pub time_remaining: Option<u64>,
    pub balance: Uint128,
}
