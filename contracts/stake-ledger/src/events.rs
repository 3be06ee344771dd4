//! Contract events published on every successful ledger mutation.
//!
//! Topics are `(SYMBOL, account)` so indexers can filter per address.

use soroban_sdk::{symbol_short, Address, Env};

pub fn deposited(env: &Env, recipient: &Address, amount: i128, total: i128) {
    env.events()
        .publish((symbol_short!("DEPOSITED"), recipient.clone()), (amount, total));
}

pub fn withdrawn(env: &Env, account: &Address, target: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("WITHDRAWN"), account.clone()),
        (target.clone(), amount),
    );
}

/// Data: `(total_stake, unstake_delay_sec)` after the top-up.
pub fn staked(env: &Env, account: &Address, total_stake: i128, unstake_delay_sec: u64) {
    env.events().publish(
        (symbol_short!("STAKED"), account.clone()),
        (total_stake, unstake_delay_sec),
    );
}

pub fn unlocked(env: &Env, account: &Address, withdraw_time: u64) {
    env.events()
        .publish((symbol_short!("UNLOCKED"), account.clone()), withdraw_time);
}

pub fn stake_withdrawn(env: &Env, account: &Address, target: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("STAKE_WD"), account.clone()),
        (target.clone(), amount),
    );
}
