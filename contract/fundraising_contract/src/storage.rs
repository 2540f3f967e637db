use soroban_sdk::{Address, Env};

use crate::storage_types::*;

pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Admin)
}

fn get_required<V>(e: &Env, key: &DataKey) -> Result<V, Error>
where
    V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    e.storage()
        .instance()
        .get(key)
        .ok_or(Error::NotInitialized)
}

pub fn get_admin(e: &Env) -> Result<Address, Error> {
    get_required(e, &DataKey::Admin)
}

pub fn get_token(e: &Env) -> Result<Address, Error> {
    get_required(e, &DataKey::Token)
}

pub fn get_beneficiary(e: &Env) -> Result<Address, Error> {
    get_required(e, &DataKey::Beneficiary)
}

pub fn get_deadline(e: &Env) -> Result<u64, Error> {
    get_required(e, &DataKey::Deadline)
}

pub fn set_deadline(e: &Env, deadline: u64) {
    e.storage().instance().set(&DataKey::Deadline, &deadline);
}

pub fn is_fundraising_active(e: &Env) -> Result<bool, Error> {
    get_required(e, &DataKey::FundraisingActive)
}

pub fn set_fundraising_active(e: &Env, active: bool) {
    e.storage()
        .instance()
        .set(&DataKey::FundraisingActive, &active);
}

pub fn get_signatory_threshold(e: &Env) -> Result<u32, Error> {
    get_required(e, &DataKey::SignatoryThreshold)
}

pub fn get_signatory_count(e: &Env) -> Result<u32, Error> {
    get_required(e, &DataKey::SignatoryCount)
}

pub fn set_signatory_count(e: &Env, count: u32) {
    e.storage().instance().set(&DataKey::SignatoryCount, &count);
}

pub fn is_paused(e: &Env) -> Result<bool, Error> {
    get_required(e, &DataKey::Paused)
}

pub fn set_paused(e: &Env, paused: bool) {
    e.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn get_donation(e: &Env, donor: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&PersistentKey::Donation(donor.clone()))
        .unwrap_or(0)
}

pub fn set_donation(e: &Env, donor: &Address, amount: i128) {
    let key = PersistentKey::Donation(donor.clone());
    e.storage().persistent().set(&key, &amount);
    extend_persistent(e, &key);
}

pub fn is_signatory(e: &Env, id: &Address) -> bool {
    e.storage()
        .persistent()
        .get(&PersistentKey::Signatory(id.clone()))
        .unwrap_or(false)
}

pub fn set_signatory(e: &Env, id: &Address, member: bool) {
    let key = PersistentKey::Signatory(id.clone());
    e.storage().persistent().set(&key, &member);
    extend_persistent(e, &key);
}

/// Require `caller` to authorize the invocation and be the stored admin.
pub fn require_admin(e: &Env, caller: &Address) -> Result<(), Error> {
    let admin = get_admin(e)?;
    caller.require_auth();
    if *caller != admin {
        return Err(Error::NotAdmin);
    }
    Ok(())
}

/// Require `caller` to authorize the invocation and hold signatory membership.
pub fn require_signatory(e: &Env, caller: &Address) -> Result<(), Error> {
    if !is_initialized(e) {
        return Err(Error::NotInitialized);
    }
    caller.require_auth();
    if !is_signatory(e, caller) {
        return Err(Error::NotSignatory);
    }
    Ok(())
}
