use soroban_sdk::Env;

use crate::storage_types::Error;

/// Get current timestamp
pub fn now(env: &Env) -> u64 {
    env.ledger().timestamp()
}

/// Check if timestamp is in the past
pub fn is_past(env: &Env, timestamp: u64) -> bool {
    env.ledger().timestamp() > timestamp
}

/// Absolute deadline `duration` seconds from now
pub fn deadline_from_now(env: &Env, duration: u64) -> Result<u64, Error> {
    now(env).checked_add(duration).ok_or(Error::Overflow)
}

pub fn validate_amount(amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}

pub fn validate_duration(duration: u64) -> Result<(), Error> {
    if duration == 0 {
        return Err(Error::InvalidDuration);
    }
    Ok(())
}

pub fn validate_threshold(threshold: u32) -> Result<(), Error> {
    if threshold == 0 {
        return Err(Error::InvalidThreshold);
    }
    Ok(())
}
