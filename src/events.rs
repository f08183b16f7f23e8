use soroban_sdk::{symbol_short, Address, Env};

/// Topics `["deposit", user]`, data `(amount, new_balance)`.
pub fn deposited(e: &Env, user: &Address, amount: i128, balance: i128) {
    let topics = (symbol_short!("deposit"), user.clone());
    e.events().publish(topics, (amount, balance));
}

/// Topics `["locked", user]`, data `(accrual_start, lock_until)`.
pub fn locked(e: &Env, user: &Address, accrual_start: u32, lock_until: u32) {
    let topics = (symbol_short!("locked"), user.clone());
    e.events().publish(topics, (accrual_start, lock_until));
}
