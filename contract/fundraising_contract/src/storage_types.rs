use soroban_sdk::{contracterror, contracttype, Address};

// Instance storage: the campaign singleton
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Token,
    Beneficiary,
    Deadline,
    FundraisingActive,
    SignatoryThreshold,
    SignatoryCount,
    Paused,
    Locked,
}

// Persistent storage: append-growing tables
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Donation(Address),
    Signatory(Address),
}

/// Read-only snapshot of the campaign returned by `campaign()`.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct CampaignInfo {
    pub admin: Address,
    pub token: Address,
    pub beneficiary: Address,
    pub deadline: u64,
    pub fundraising_active: bool,
    pub paused: bool,
    pub signatory_threshold: u32,
    pub signatory_count: u32,
    pub balance: i128,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAdmin = 3,
    NotSignatory = 4,
    InvalidThreshold = 5,
    InvalidDuration = 6,
    InvalidAmount = 7,
    FundraisingEnded = 8,
    DeadlinePassed = 9,
    DonationsPaused = 10,
    InvalidSignatory = 11,
    AlreadySignatory = 12,
    DeadlineNotPassed = 13,
    NoFunds = 14,
    QuorumNotMet = 15,
    FundraisingActive = 16,
    Reentrant = 17,
    Overflow = 18,
    InvalidBeneficiary = 19,
}

// Storage lifetimes, in ledgers (~5s each)
pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS; // 30 days
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub const PERSISTENT_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS; // 90 days
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;
