use soroban_sdk::{log, token, Address, Env};

use crate::donation;
use crate::events;
use crate::guard::ReentrancyGuard;
use crate::signatory;
use crate::storage;
use crate::storage_types::Error;
use crate::utils;

/// Release the entire pool to the beneficiary.
///
/// Checks run in a fixed order and the first failure is returned: caller
/// membership, deadline passed, non-empty pool, quorum. Nothing is written
/// before all of them pass.
pub fn withdraw(env: &Env, caller: &Address) -> Result<i128, Error> {
    storage::require_signatory(env, caller)?;

    if !utils::is_past(env, storage::get_deadline(env)?) {
        return Err(Error::DeadlineNotPassed);
    }
    let amount = donation::pooled_balance(env)?;
    if amount <= 0 {
        return Err(Error::NoFunds);
    }
    if !signatory::quorum_reached(env)? {
        return Err(Error::QuorumNotMet);
    }

    let beneficiary = storage::get_beneficiary(env)?;
    let token_client = token::Client::new(env, &storage::get_token(env)?);
    {
        let _guard = ReentrancyGuard::acquire(env)?;
        token_client.transfer(&env.current_contract_address(), &beneficiary, &amount);
    }

    log!(env, "pool released", beneficiary.clone(), amount);
    events::emit_withdrawal(
        env,
        events::WithdrawalEvent {
            beneficiary,
            amount,
        },
    );

    Ok(amount)
}
