use cosmwasm_std::{
    entry_point, to_json_binary, BankMsg, Binary, Coin, Deps, DepsMut, Env, MessageInfo, Reply,
    Response, StdError, StdResult, SubMsg, Uint128,
};
use cw2::set_contract_version;
use shared::{period_elapsed, time_remaining};

use crate::error::ContractError;
use crate::msg::{
    ExecuteMsg, InstantiateMsg, QueryMsg, ReleaseStatusResponse, WillResponse,
};
use crate::state::{Config, CONFIG, LAST_ACTIVITY, REVOKED};

const CONTRACT_NAME: &str = "crates.io:inheritance-will";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reply id for the release payout submessage
const RELEASE_REPLY_ID: u64 = 1;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let beneficiary = deps
        .api
        .addr_validate(&msg.beneficiary)
        .map_err(|_| ContractError::InvalidBeneficiary {})?;

    if msg.inactivity_period == 0 {
        return Err(ContractError::InvalidPeriod {});
    }

    if msg.denom.is_empty() {
        return Err(ContractError::InvalidDenom {});
    }

    let config = Config {
        owner: info.sender.clone(),
        beneficiary: beneficiary.clone(),
        inactivity_period: msg.inactivity_period,
        denom: msg.denom.clone(),
    };
    CONFIG.save(deps.storage, &config)?;

    LAST_ACTIVITY.save(deps.storage, &env.block.time.seconds())?;
    REVOKED.save(deps.storage, &false)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", info.sender)
        .add_attribute("beneficiary", beneficiary)
        .add_attribute("inactivity_period", msg.inactivity_period.to_string())
        .add_attribute("denom", msg.denom))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Deposit {} => execute_deposit(deps, env, info),
        ExecuteMsg::Reconfigure {
            beneficiary,
            inactivity_period,
        } => execute_reconfigure(deps, info, beneficiary, inactivity_period),
        ExecuteMsg::Revoke {} => execute_revoke(deps, info),
        ExecuteMsg::Release {} => execute_release(deps, env),
        ExecuteMsg::RecoverForeignAsset { denom, amount } => {
            execute_recover_foreign_asset(deps, info, denom, amount)
        }
    }
}

pub fn execute_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let now = env.block.time.seconds();

    // Zero-value deposits still count as activity. The clock only moves
    // forward; a deposit carrying an older block time cannot rewind it.
    LAST_ACTIVITY.update(deps.storage, |last| {
        Ok::<_, ContractError>(last.max(now))
    })?;

    let amount = info
        .funds
        .iter()
        .find(|coin| coin.denom == config.denom)
        .map(|coin| coin.amount)
        .unwrap_or_default();

    Ok(Response::new()
        .add_attribute("method", "deposit")
        .add_attribute("sender", info.sender)
        .add_attribute("amount", amount))
}

pub fn execute_reconfigure(
    deps: DepsMut,
    info: MessageInfo,
    beneficiary: String,
    inactivity_period: u64,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }

    let beneficiary_addr = deps
        .api
        .addr_validate(&beneficiary)
        .map_err(|_| ContractError::InvalidBeneficiary {})?;

    if inactivity_period == 0 {
        return Err(ContractError::InvalidPeriod {});
    }

    config.beneficiary = beneficiary_addr;
    config.inactivity_period = inactivity_period;
    CONFIG.save(deps.storage, &config)?;

    // Reconfiguration lifts any standing revocation. The activity clock is
    // deliberately left alone: inactivity accumulated under the old
    // configuration counts toward the new period.
    REVOKED.save(deps.storage, &false)?;

    Ok(Response::new()
        .add_attribute("method", "reconfigure")
        .add_attribute("beneficiary", beneficiary)
        .add_attribute("inactivity_period", inactivity_period.to_string()))
}

pub fn execute_revoke(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }

    // Idempotent: revoking an already revoked will is a no-op success
    REVOKED.save(deps.storage, &true)?;

    Ok(Response::new()
        .add_attribute("method", "revoke")
        .add_attribute("owner", info.sender))
}

pub fn execute_release(deps: DepsMut, env: Env) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if REVOKED.load(deps.storage)? {
        return Err(ContractError::WillRevoked {});
    }

    let last_activity = LAST_ACTIVITY.load(deps.storage)?;
    let now = env.block.time.seconds();
    if !period_elapsed(now, last_activity, config.inactivity_period) {
        return Err(ContractError::InactivityPeriodNotElapsed {});
    }

    let balance = deps
        .querier
        .query_balance(env.contract.address, config.denom)?;
    if balance.amount.is_zero() {
        return Err(ContractError::NoFunds {});
    }

    // The balance snapshot is taken before the payout is dispatched. The
    // send runs only after this execution has committed, so it can never
    // re-enter the contract; if the bank rejects it, the reply handler
    // fails the whole transaction and every write above is rolled back.
    let amount = balance.amount;
    let send = BankMsg::Send {
        to_address: config.beneficiary.to_string(),
        amount: vec![balance],
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_error(send, RELEASE_REPLY_ID))
        .add_attribute("method", "release")
        .add_attribute("beneficiary", config.beneficiary)
        .add_attribute("amount", amount))
}

pub fn execute_recover_foreign_asset(
    deps: DepsMut,
    info: MessageInfo,
    denom: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }

    // The tracked balance belongs to the beneficiary path only
    if denom == config.denom {
        return Err(ContractError::CannotRecoverTracked {});
    }

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {});
    }

    let send = BankMsg::Send {
        to_address: config.owner.to_string(),
        amount: vec![Coin {
            denom: denom.clone(),
            amount,
        }],
    };

    Ok(Response::new()
        .add_message(send)
        .add_attribute("method", "recover_foreign_asset")
        .add_attribute("denom", denom)
        .add_attribute("amount", amount))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(_deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        // Only reached when the payout failed; erroring here reverts the
        // whole release so the attempt stays retryable.
        RELEASE_REPLY_ID => Err(ContractError::TransferFailed {}),
        id => Err(StdError::generic_err(format!("unknown reply id: {id}")).into()),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetWill {} => to_json_binary(&query_will(deps)?),
        QueryMsg::CanRelease {} => to_json_binary(&query_can_release(deps, env)?),
    }
}

fn query_will(deps: Deps) -> StdResult<WillResponse> {
    let config = CONFIG.load(deps.storage)?;
    let last_activity = LAST_ACTIVITY.load(deps.storage)?;
    let revoked = REVOKED.load(deps.storage)?;

    Ok(WillResponse {
        owner: config.owner,
        beneficiary: config.beneficiary,
        inactivity_period: config.inactivity_period,
        denom: config.denom,
        last_activity,
        revoked,
    })
}

fn query_can_release(deps: Deps, env: Env) -> StdResult<ReleaseStatusResponse> {
    let config = CONFIG.load(deps.storage)?;
    let last_activity = LAST_ACTIVITY.load(deps.storage)?;
    let revoked = REVOKED.load(deps.storage)?;

    let now = env.block.time.seconds();
    let elapsed = period_elapsed(now, last_activity, config.inactivity_period);
    let balance = deps
        .querier
        .query_balance(env.contract.address, config.denom)?;

    let remaining = if elapsed {
        None
    } else {
        Some(time_remaining(now, last_activity, config.inactivity_period))
    };

    Ok(ReleaseStatusResponse {
        can_release: !revoked && elapsed && !balance.amount.is_zero(),
        revoked,
        time_remaining: remaining,
        balance: balance.amount,
    })
}
