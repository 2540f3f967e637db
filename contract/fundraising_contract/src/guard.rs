//! Re-entrancy guard for operations that call into foreign contracts.
//!
//! The lock is a flag in instance storage owned by a [`ReentrancyGuard`]
//! value. Acquiring fails while another holder is alive; dropping the holder
//! clears the flag, so every exit path of the guarded scope releases it.

use soroban_sdk::Env;

use crate::storage_types::{DataKey, Error};

pub struct ReentrancyGuard {
    env: Env,
}

impl ReentrancyGuard {
    pub fn acquire(env: &Env) -> Result<Self, Error> {
        if is_locked(env) {
            return Err(Error::Reentrant);
        }
        env.storage().instance().set(&DataKey::Locked, &true);
        Ok(Self { env: env.clone() })
    }
}

impl Drop for ReentrancyGuard {
    fn drop(&mut self) {
        self.env.storage().instance().remove(&DataKey::Locked);
    }
}

pub fn is_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Locked)
        .unwrap_or(false)
}
