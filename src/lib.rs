#![no_std]
use soroban_sdk::{contract, contracterror, contractimpl, log, token, Address, Env};

mod events;
mod interest;
mod storage_types;
use storage_types::{SavingsAccount, SavingsConfig};

/// Smallest amount accepted by a single deposit.
pub const MIN_DEPOSIT: i128 = 100_000;
/// Annualised interest rate in basis points (5%).
pub const INTEREST_RATE_BPS: i128 = 500;
/// Blocks produced per year at a ten minute block time.
pub const BLOCKS_PER_YEAR: i128 = 52_560;
pub const BPS_DENOMINATOR: i128 = 10_000;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NoBalance = 102,
    InvalidLockPeriod = 104,
    InvalidAmount = 105,
    Overflow = 106,
}

#[contract]
pub struct TimeLockedSavings;

#[contractimpl]
impl TimeLockedSavings {
    /// Bind the ledger to the asset contract deposits are taken in.
    /// Only can be called once.
    pub fn initialize(e: Env, token: Address) -> Result<(), Error> {
        if storage_types::has_token(&e) {
            return Err(Error::AlreadyInitialized);
        }

        storage_types::write_token(&e, &token);
        Ok(())
    }

    /// Move `amount` from `user` into the ledger's custody and credit it.
    ///
    /// Creates the account on the first deposit. The lock window and the
    /// accrual start are left untouched, so topping up a locked account does
    /// not extend or restart the lock.
    ///
    /// # Arguments
    /// * `user` - The depositor, must authorize the call
    /// * `amount` - Amount in the token's smallest unit, at least `MIN_DEPOSIT`
    pub fn deposit(e: Env, user: Address, amount: i128) -> Result<i128, Error> {
        user.require_auth();

        if amount < MIN_DEPOSIT {
            return Err(Error::InvalidAmount);
        }

        let token = storage_types::read_token(&e).ok_or(Error::NotInitialized)?;
        let now = e.ledger().sequence();

        let mut account = storage_types::read_account(&e, &user).unwrap_or(SavingsAccount {
            balance: 0,
            lock_until: None,
            accrual_start: None,
            last_deposit_at: now,
        });
        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        account.last_deposit_at = now;

        let total = storage_types::read_total_deposits(&e)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;

        // A failed transfer aborts the whole invocation, nothing below is kept.
        token::Client::new(&e, &token).transfer(&user, &e.current_contract_address(), &amount);

        storage_types::write_account(&e, &user, &account);
        storage_types::write_total_deposits(&e, total);

        events::deposited(&e, &user, amount, account.balance);
        log!(&e, "deposit accepted", user, amount, account.balance);

        Ok(account.balance)
    }

    /// Lock the caller's balance for `period` ledgers starting now.
    ///
    /// Locking again replaces the window and restarts interest accrual from
    /// the current ledger.
    ///
    /// # Arguments
    /// * `user` - The account owner, must authorize the call
    /// * `period` - Lock length in ledgers, must be positive
    pub fn lock_funds(e: Env, user: Address, period: u32) -> Result<u32, Error> {
        user.require_auth();

        let mut account = storage_types::read_account(&e, &user)
            .filter(|account| account.balance > 0)
            .ok_or(Error::NoBalance)?;

        if period == 0 {
            return Err(Error::InvalidLockPeriod);
        }

        let now = e.ledger().sequence();
        let lock_until = now.checked_add(period).ok_or(Error::InvalidLockPeriod)?;

        account.lock_until = Some(lock_until);
        account.accrual_start = Some(now);
        storage_types::write_account(&e, &user, &account);

        events::locked(&e, &user, now, lock_until);
        log!(&e, "funds locked", user, now, lock_until);

        Ok(lock_until)
    }

    /// Interest accrued by `user` since their last lock, if they have an account.
    pub fn calculate_interest(e: Env, user: Address) -> Option<i128> {
        let account = storage_types::read_account(&e, &user)?;
        let now = e.ledger().sequence();

        Some(interest::accrued_interest(
            account.balance,
            account.accrual_start,
            now,
        ))
    }

    /// Retrieve the savings record for `user`, if any
    pub fn get_account_info(e: Env, user: Address) -> Option<SavingsAccount> {
        storage_types::read_account(&e, &user)
    }

    /// Whether `user` has a lock window that has not yet ended.
    pub fn is_locked(e: Env, user: Address) -> bool {
        let now = e.ledger().sequence();
        storage_types::read_account(&e, &user)
            .and_then(|account| account.lock_until)
            .is_some_and(|until| until > now)
    }

    /// Fixed ledger parameters and the bound token.
    pub fn get_config(e: Env) -> Result<SavingsConfig, Error> {
        let token = storage_types::read_token(&e).ok_or(Error::NotInitialized)?;
        Ok(SavingsConfig {
            token,
            min_deposit: MIN_DEPOSIT,
            interest_rate_bps: INTEREST_RATE_BPS,
            blocks_per_year: BLOCKS_PER_YEAR,
        })
    }

    /// Sum of every deposit the ledger has accepted.
    pub fn get_total_deposits(e: Env) -> i128 {
        storage_types::read_total_deposits(&e)
    }
}
