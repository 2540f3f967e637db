use soroban_sdk::{log, token, Address, Env};

use crate::events;
use crate::storage;
use crate::storage_types::Error;
use crate::utils;

/// Accept `amount` from `donor` into the pool and add it to their record.
pub fn contribute(env: &Env, donor: &Address, amount: i128) -> Result<i128, Error> {
    if storage::is_paused(env)? {
        return Err(Error::DonationsPaused);
    }
    if !storage::is_fundraising_active(env)? {
        return Err(Error::FundraisingEnded);
    }
    if utils::is_past(env, storage::get_deadline(env)?) {
        return Err(Error::DeadlinePassed);
    }
    utils::validate_amount(amount)?;

    donor.require_auth();

    let total = storage::get_donation(env, donor)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    storage::set_donation(env, donor, total);

    let token_client = token::Client::new(env, &storage::get_token(env)?);
    token_client.transfer(donor, &env.current_contract_address(), &amount);

    log!(env, "donation accepted", donor.clone(), amount, total);
    events::emit_donation(
        env,
        events::DonationEvent {
            donor: donor.clone(),
            amount,
        },
    );

    Ok(total)
}

/// Aggregate value the campaign holds on the token contract.
pub fn pooled_balance(env: &Env) -> Result<i128, Error> {
    let token_client = token::Client::new(env, &storage::get_token(env)?);
    Ok(token_client.balance(&env.current_contract_address()))
}
