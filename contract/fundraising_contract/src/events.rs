use soroban_sdk::{contracttype, Address, Env, Symbol};

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct InitializedEvent {
    pub beneficiary: Address,
    pub deadline: u64,
    pub signatory_threshold: u32,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct DonationEvent {
    pub donor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct WithdrawalEvent {
    pub beneficiary: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct SignatoryChangedEvent {
    pub signatory: Address,
    pub signatory_count: u32,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct SignedEvent {
    pub signatory: Address,
    pub signed_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct DeadlineEvent {
    pub deadline: u64,
}

#[allow(deprecated)]
fn publish<T>(env: &Env, name: &str, event: T)
where
    T: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.events().publish((Symbol::new(env, name),), event);
}

pub fn emit_initialized(env: &Env, event: InitializedEvent) {
    publish(env, "initialized", event);
}

pub fn emit_donation(env: &Env, event: DonationEvent) {
    publish(env, "donation", event);
}

pub fn emit_withdrawal(env: &Env, event: WithdrawalEvent) {
    publish(env, "withdrawal", event);
}

pub fn emit_signatory_added(env: &Env, event: SignatoryChangedEvent) {
    publish(env, "signatory_added", event);
}

pub fn emit_signatory_removed(env: &Env, event: SignatoryChangedEvent) {
    publish(env, "signatory_removed", event);
}

pub fn emit_signed(env: &Env, event: SignedEvent) {
    publish(env, "signed", event);
}

pub fn emit_paused(env: &Env, admin: Address) {
    publish(env, "paused", admin);
}

pub fn emit_unpaused(env: &Env, admin: Address) {
    publish(env, "unpaused", admin);
}

pub fn emit_deadline_extended(env: &Env, event: DeadlineEvent) {
    publish(env, "deadline_extended", event);
}

pub fn emit_fundraising_closed(env: &Env, event: DeadlineEvent) {
    publish(env, "fundraising_closed", event);
}

pub fn emit_fundraising_reopened(env: &Env, event: DeadlineEvent) {
    publish(env, "fundraising_reopened", event);
}
