use soroban_sdk::{log, Address, Env};

use crate::events;
use crate::storage;
use crate::storage_types::Error;
use crate::utils;

pub fn add_signatory(env: &Env, caller: &Address, id: &Address) -> Result<u32, Error> {
    storage::require_admin(env, caller)?;

    // The campaign's own address stands in for the null identity
    if *id == env.current_contract_address() {
        return Err(Error::InvalidSignatory);
    }
    if storage::is_signatory(env, id) {
        return Err(Error::AlreadySignatory);
    }

    let count = storage::get_signatory_count(env)?
        .checked_add(1)
        .ok_or(Error::Overflow)?;
    storage::set_signatory(env, id, true);
    storage::set_signatory_count(env, count);

    log!(env, "signatory added", id.clone(), count);
    events::emit_signatory_added(
        env,
        events::SignatoryChangedEvent {
            signatory: id.clone(),
            signatory_count: count,
        },
    );

    Ok(count)
}

pub fn remove_signatory(env: &Env, caller: &Address, id: &Address) -> Result<u32, Error> {
    storage::require_admin(env, caller)?;

    if !storage::is_signatory(env, id) {
        return Err(Error::NotSignatory);
    }

    // A `true` flag implies count >= 1
    let count = storage::get_signatory_count(env)?
        .checked_sub(1)
        .ok_or(Error::Overflow)?;
    storage::set_signatory(env, id, false);
    storage::set_signatory_count(env, count);

    log!(env, "signatory removed", id.clone(), count);
    events::emit_signatory_removed(
        env,
        events::SignatoryChangedEvent {
            signatory: id.clone(),
            signatory_count: count,
        },
    );

    Ok(count)
}

/// Non-binding attestation; not counted toward quorum.
pub fn sign(env: &Env, signer: &Address) -> Result<(), Error> {
    storage::require_signatory(env, signer)?;

    log!(env, "signatory acknowledged", signer.clone());
    events::emit_signed(
        env,
        events::SignedEvent {
            signatory: signer.clone(),
            signed_at: utils::now(env),
        },
    );

    Ok(())
}

pub fn quorum_reached(env: &Env) -> Result<bool, Error> {
    Ok(storage::get_signatory_count(env)? >= storage::get_signatory_threshold(env)?)
}
