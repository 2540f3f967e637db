use soroban_sdk::{log, Address, Env};

use crate::events;
use crate::storage;
use crate::storage_types::Error;
use crate::utils;

pub fn pause(env: &Env, caller: &Address) -> Result<(), Error> {
    storage::require_admin(env, caller)?;
    storage::set_paused(env, true);
    log!(env, "donations paused");
    events::emit_paused(env, caller.clone());
    Ok(())
}

pub fn unpause(env: &Env, caller: &Address) -> Result<(), Error> {
    storage::require_admin(env, caller)?;
    storage::set_paused(env, false);
    log!(env, "donations unpaused");
    events::emit_unpaused(env, caller.clone());
    Ok(())
}

/// Push the deadline back by `duration` seconds, in any phase.
pub fn extend_deadline(env: &Env, caller: &Address, duration: u64) -> Result<u64, Error> {
    storage::require_admin(env, caller)?;

    let deadline = storage::get_deadline(env)?
        .checked_add(duration)
        .ok_or(Error::Overflow)?;
    storage::set_deadline(env, deadline);

    log!(env, "deadline extended", deadline);
    events::emit_deadline_extended(env, events::DeadlineEvent { deadline });

    Ok(deadline)
}

pub fn close_fundraising(env: &Env, caller: &Address) -> Result<(), Error> {
    storage::require_admin(env, caller)?;
    storage::set_fundraising_active(env, false);

    let deadline = storage::get_deadline(env)?;
    log!(env, "fundraising closed", deadline);
    events::emit_fundraising_closed(env, events::DeadlineEvent { deadline });

    Ok(())
}

/// Open a fresh collection window of `new_duration` seconds. Existing
/// donation records and any un-withdrawn pool carry over.
pub fn reopen_fundraising(env: &Env, caller: &Address, new_duration: u64) -> Result<u64, Error> {
    storage::require_admin(env, caller)?;

    if storage::is_fundraising_active(env)? {
        return Err(Error::FundraisingActive);
    }
    utils::validate_duration(new_duration)?;

    let deadline = utils::deadline_from_now(env, new_duration)?;
    storage::set_deadline(env, deadline);
    storage::set_fundraising_active(env, true);

    log!(env, "fundraising reopened", deadline);
    events::emit_fundraising_reopened(env, events::DeadlineEvent { deadline });

    Ok(deadline)
}
