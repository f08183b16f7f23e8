use soroban_sdk::{contracttype, Address, Env};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const ACCOUNT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const ACCOUNT_LIFETIME_THRESHOLD: u32 = ACCOUNT_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Savings record held for a single depositor.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SavingsAccount {
    /// Deposited principal, in the token's smallest unit.
    pub balance: i128,
    /// Ledger sequence the funds stay locked until. `None` until the first lock.
    pub lock_until: Option<u32>,
    /// Ledger sequence interest starts accruing from. Set by each lock.
    pub accrual_start: Option<u32>,
    /// Ledger sequence of the most recent deposit.
    pub last_deposit_at: u32,
}

/// Read-only view of the ledger's fixed parameters.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SavingsConfig {
    pub token: Address,
    pub min_deposit: i128,
    pub interest_rate_bps: i128,
    pub blocks_per_year: i128,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Token,
    TotalDeposits,
    Account(Address),
}

pub fn has_token(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Token)
}

pub fn read_token(e: &Env) -> Option<Address> {
    e.storage().instance().get(&DataKey::Token)
}

pub fn write_token(e: &Env, token: &Address) {
    e.storage().instance().set(&DataKey::Token, token);
    bump_instance(e);
}

pub fn read_total_deposits(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::TotalDeposits)
        .unwrap_or(0)
}

pub fn write_total_deposits(e: &Env, total: i128) {
    e.storage().instance().set(&DataKey::TotalDeposits, &total);
    bump_instance(e);
}

pub fn read_account(e: &Env, user: &Address) -> Option<SavingsAccount> {
    e.storage()
        .persistent()
        .get(&DataKey::Account(user.clone()))
}

pub fn write_account(e: &Env, user: &Address, account: &SavingsAccount) {
    let key = DataKey::Account(user.clone());
    e.storage().persistent().set(&key, account);
    e.storage()
        .persistent()
        .extend_ttl(&key, ACCOUNT_LIFETIME_THRESHOLD, ACCOUNT_BUMP_AMOUNT);
}

fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
