use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

#[cw_serde]
pub struct Config {
    /// Owner (who can reconfigure or revoke the will)
    pub owner: Addr,
    /// Beneficiary (who receives the balance once released)
    pub beneficiary: Addr,
    /// Inactivity period before release is allowed (seconds)
    pub inactivity_period: u64,
    /// Tracked token denomination
    pub denom: String,
}

/// Configuration
pub const CONFIG: Item<Config> = Item::new("config");

/// Last recorded activity timestamp (seconds)
pub const LAST_ACTIVITY: Item<u64> = Item::new("last_activity");

/// Release disabled while set; cleared by reconfiguration
pub const REVOKED: Item<bool> = Item::new("revoked");
