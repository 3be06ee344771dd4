use soroban_sdk::{Address, Env};

use crate::error::Error;
use crate::types::{DataKey, DepositRecord};

/// Bump amount for persistent storage entries (roughly 30 days in ledgers).
const LEDGER_BUMP: u32 = 518_400;
/// Threshold for bumping (roughly 15 days).
const LEDGER_THRESHOLD: u32 = 259_200;

// =============================================================================
// Token Address
// =============================================================================

pub fn get_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().persistent().set(&DataKey::Token, token);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Token, LEDGER_THRESHOLD, LEDGER_BUMP);
}

// =============================================================================
// Deposit Records
// =============================================================================

/// Load the record for `account`, or an empty one if it never deposited.
pub fn get_record(env: &Env, account: &Address) -> DepositRecord {
    env.storage()
        .persistent()
        .get(&DataKey::Deposit(account.clone()))
        .unwrap_or_else(DepositRecord::empty)
}

/// Emptied records are written back zeroed rather than removed.
pub fn set_record(env: &Env, account: &Address, record: &DepositRecord) {
    let key = DataKey::Deposit(account.clone());
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD, LEDGER_BUMP);
}
