#![no_std]

mod donation;
mod events;
mod guard;
mod lifecycle;
mod signatory;
mod storage;
mod storage_types;
mod utils;
mod withdrawal;


use soroban_sdk::{contract, contractimpl, log, Address, Env};

pub use storage_types::{CampaignInfo, Error};
use storage_types::DataKey;

#[contract]
pub struct FundraisingContract;

#[contractimpl]
impl FundraisingContract {
    /// Create the campaign.
    ///
    /// `duration` is the length of the first collection window in seconds;
    /// `threshold` is the signatory count a withdrawal requires. Beneficiary,
    /// token and threshold are fixed for the life of the campaign.
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        beneficiary: Address,
        duration: u64,
        threshold: u32,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();
        // The campaign's own address stands in for the null identity
        if beneficiary == env.current_contract_address() {
            return Err(Error::InvalidBeneficiary);
        }
        utils::validate_duration(duration)?;
        utils::validate_threshold(threshold)?;

        let deadline = utils::deadline_from_now(&env, duration)?;

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::Beneficiary, &beneficiary);
        env.storage().instance().set(&DataKey::SignatoryThreshold, &threshold);
        storage::set_deadline(&env, deadline);
        storage::set_fundraising_active(&env, true);
        storage::set_paused(&env, false);
        storage::set_signatory_count(&env, 0);
        storage::extend_instance(&env);

        log!(&env, "campaign initialized", deadline, threshold);
        events::emit_initialized(
            &env,
            events::InitializedEvent {
                beneficiary,
                deadline,
                signatory_threshold: threshold,
            },
        );

        Ok(())
    }

    // Donation Ledger

    /// Donate `amount` of the campaign token. Returns the donor's new total.
    pub fn contribute(env: Env, donor: Address, amount: i128) -> Result<i128, Error> {
        let total = donation::contribute(&env, &donor, amount)?;
        storage::extend_instance(&env);
        Ok(total)
    }

    // Withdrawal Gate

    /// Send the whole pool to the beneficiary. Returns the amount released.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, Error> {
        let amount = withdrawal::withdraw(&env, &caller)?;
        storage::extend_instance(&env);
        Ok(amount)
    }

    // Signatory Registry

    pub fn add_signatory(env: Env, caller: Address, signatory: Address) -> Result<u32, Error> {
        let count = signatory::add_signatory(&env, &caller, &signatory)?;
        storage::extend_instance(&env);
        Ok(count)
    }

    pub fn remove_signatory(env: Env, caller: Address, signatory: Address) -> Result<u32, Error> {
        let count = signatory::remove_signatory(&env, &caller, &signatory)?;
        storage::extend_instance(&env);
        Ok(count)
    }

    /// Record an acknowledgement from a signatory. Has no effect on quorum.
    pub fn sign(env: Env, signer: Address) -> Result<(), Error> {
        signatory::sign(&env, &signer)
    }

    // Lifecycle Controller

    pub fn pause(env: Env, caller: Address) -> Result<(), Error> {
        lifecycle::pause(&env, &caller)?;
        storage::extend_instance(&env);
        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), Error> {
        lifecycle::unpause(&env, &caller)?;
        storage::extend_instance(&env);
        Ok(())
    }

    pub fn extend_deadline(env: Env, caller: Address, duration: u64) -> Result<u64, Error> {
        let deadline = lifecycle::extend_deadline(&env, &caller, duration)?;
        storage::extend_instance(&env);
        Ok(deadline)
    }

    pub fn close_fundraising(env: Env, caller: Address) -> Result<(), Error> {
        lifecycle::close_fundraising(&env, &caller)?;
        storage::extend_instance(&env);
        Ok(())
    }

    pub fn reopen_fundraising(env: Env, caller: Address, new_duration: u64) -> Result<u64, Error> {
        let deadline = lifecycle::reopen_fundraising(&env, &caller, new_duration)?;
        storage::extend_instance(&env);
        Ok(deadline)
    }

    /// View functions
    pub fn campaign(env: Env) -> Result<CampaignInfo, Error> {
        Ok(CampaignInfo {
            admin: storage::get_admin(&env)?,
            token: storage::get_token(&env)?,
            beneficiary: storage::get_beneficiary(&env)?,
            deadline: storage::get_deadline(&env)?,
            fundraising_active: storage::is_fundraising_active(&env)?,
            paused: storage::is_paused(&env)?,
            signatory_threshold: storage::get_signatory_threshold(&env)?,
            signatory_count: storage::get_signatory_count(&env)?,
            balance: donation::pooled_balance(&env)?,
        })
    }

    pub fn admin(env: Env) -> Result<Address, Error> {
        storage::get_admin(&env)
    }

    pub fn beneficiary(env: Env) -> Result<Address, Error> {
        storage::get_beneficiary(&env)
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        storage::get_token(&env)
    }

    pub fn deadline(env: Env) -> Result<u64, Error> {
        storage::get_deadline(&env)
    }

    pub fn is_fundraising_active(env: Env) -> Result<bool, Error> {
        storage::is_fundraising_active(&env)
    }

    pub fn is_paused(env: Env) -> Result<bool, Error> {
        storage::is_paused(&env)
    }

    pub fn signatory_threshold(env: Env) -> Result<u32, Error> {
        storage::get_signatory_threshold(&env)
    }

    pub fn signatory_count(env: Env) -> Result<u32, Error> {
        storage::get_signatory_count(&env)
    }

    pub fn is_signatory(env: Env, id: Address) -> bool {
        storage::is_signatory(&env, &id)
    }

    pub fn donation_of(env: Env, donor: Address) -> i128 {
        storage::get_donation(&env, &donor)
    }

    pub fn balance(env: Env) -> Result<i128, Error> {
        donation::pooled_balance(&env)
    }
}
