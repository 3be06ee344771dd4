#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

mod error;
mod events;
mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, log, token, Address, Env};

pub use error::Error;
pub use types::{DepositInfo, DepositRecord, PendingUnlock, StakeBond, StakeState};

/// Log the rejection reason (debug builds only) and bail out with `err`.
macro_rules! reject {
    ($env:expr, $err:expr, $msg:literal) => {{
        log!($env, $msg);
        return Err($err);
    }};
}

#[contract]
pub struct StakeLedger;

#[contractimpl]
impl StakeLedger {
    /// Initialize the ledger with the FeeToken it accepts.
    ///
    /// Any SEP-41 token works; the ledger only uses `allowance`,
    /// `transfer_from` and `transfer`.
    pub fn __constructor(env: Env, token: Address) {
        storage::set_token(&env, &token);
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        storage::get_token(&env)
    }

    // =========================================================================
    // Deposits
    // =========================================================================

    /// Pull the caller's entire allowance into the ledger and credit it to
    /// `recipient`. Returns the recipient's new deposit.
    pub fn deposit_to(env: Env, caller: Address, recipient: Address) -> Result<i128, Error> {
        caller.require_auth();

        let token = fee_token(&env)?;
        let allowance = token.allowance(&caller, &env.current_contract_address());
        if allowance <= 0 {
            reject!(&env, Error::DepositAmountRequired, "amount required");
        }

        credit_deposit(&env, &token, &caller, &recipient, allowance)
    }

    /// Pull exactly `amount` of the caller's allowance and credit it to
    /// `recipient`. Returns the recipient's new deposit.
    pub fn deposit_amount_to(
        env: Env,
        caller: Address,
        recipient: Address,
        amount: i128,
    ) -> Result<i128, Error> {
        caller.require_auth();

        if amount < 0 {
            reject!(&env, Error::NegativeAmount, "amount must not be negative");
        }
        if amount == 0 {
            reject!(&env, Error::DepositAmountRequired, "amount required");
        }

        let token = fee_token(&env)?;
        let allowance = token.allowance(&caller, &env.current_contract_address());
        if amount > allowance {
            reject!(
                &env,
                Error::DepositExceedsAllowance,
                "amount exceeds allowance"
            );
        }

        credit_deposit(&env, &token, &caller, &recipient, amount)
    }

    pub fn balance_of(env: Env, account: Address) -> i128 {
        storage::get_record(&env, &account).deposit
    }

    /// Debit the caller's own deposit and send `amount` to `target`.
    ///
    /// Returns the caller's remaining deposit.
    pub fn withdraw_to(
        env: Env,
        caller: Address,
        target: Address,
        amount: i128,
    ) -> Result<i128, Error> {
        caller.require_auth();

        if amount < 0 {
            reject!(&env, Error::NegativeAmount, "amount must not be negative");
        }

        let mut record = storage::get_record(&env, &caller);
        if amount > record.deposit {
            reject!(&env, Error::InsufficientBalance, "withdrawal amount too large");
        }

        // Nothing to move; leave storage and events untouched.
        if amount == 0 {
            return Ok(record.deposit);
        }

        let token = fee_token(&env)?;

        record.deposit -= amount;
        storage::set_record(&env, &caller, &record);

        token.transfer(&env.current_contract_address(), &target, &amount);

        events::withdrawn(&env, &caller, &target, amount);

        Ok(record.deposit)
    }

    pub fn get_deposit_info(env: Env, account: Address) -> DepositInfo {
        storage::get_record(&env, &account).info()
    }

    // =========================================================================
    // Stake
    // =========================================================================

    /// Stake the caller's entire allowance. See `add_stake_amount`.
    pub fn add_stake(
        env: Env,
        caller: Address,
        unstake_delay_sec: u64,
    ) -> Result<DepositInfo, Error> {
        caller.require_auth();

        let token = fee_token(&env)?;
        let allowance = token.allowance(&caller, &env.current_contract_address());

        bond_stake(&env, &token, &caller, unstake_delay_sec, allowance, allowance)
    }

    /// Add `amount` to the caller's stake.
    ///
    /// Stake is cumulative and the delay only ever grows: the stored delay
    /// becomes `max(existing, unstake_delay_sec)`. Staking while an unlock is
    /// pending cancels the unlock.
    pub fn add_stake_amount(
        env: Env,
        caller: Address,
        unstake_delay_sec: u64,
        amount: i128,
    ) -> Result<DepositInfo, Error> {
        caller.require_auth();

        let token = fee_token(&env)?;
        let allowance = token.allowance(&caller, &env.current_contract_address());

        bond_stake(&env, &token, &caller, unstake_delay_sec, amount, allowance)
    }

    /// Start the exit timer. Returns the timestamp at which
    /// `withdraw_stake` becomes possible.
    pub fn unlock_stake(env: Env, caller: Address) -> Result<u64, Error> {
        caller.require_auth();

        let mut record = storage::get_record(&env, &caller);
        let bond = match record.stake.clone() {
            StakeState::Staked(bond) => bond,
            StakeState::Unlocking(_) => {
                reject!(&env, Error::AlreadyUnstaking, "already unstaking")
            }
            StakeState::Unstaked => reject!(&env, Error::NotStaked, "not staked"),
        };

        let withdraw_time = env
            .ledger()
            .timestamp()
            .checked_add(bond.unstake_delay_sec)
            .ok_or(Error::Overflow)?;

        record.stake = StakeState::Unlocking(PendingUnlock {
            bond,
            withdraw_time,
        });
        storage::set_record(&env, &caller, &record);

        events::unlocked(&env, &caller, withdraw_time);

        Ok(withdraw_time)
    }

    /// Send the caller's whole unlocked stake to `target` once the delay has
    /// elapsed. Returns the amount withdrawn.
    pub fn withdraw_stake(env: Env, caller: Address, target: Address) -> Result<i128, Error> {
        caller.require_auth();

        let mut record = storage::get_record(&env, &caller);
        let pending = match record.stake.clone() {
            StakeState::Unlocking(pending) => pending,
            _ => reject!(&env, Error::UnlockRequired, "must call unlockStake() first"),
        };

        if env.ledger().timestamp() < pending.withdraw_time {
            reject!(&env, Error::WithdrawalNotDue, "stake withdrawal is not due");
        }

        let token = fee_token(&env)?;
        let amount = pending.bond.amount;

        record.stake = StakeState::Unstaked;
        storage::set_record(&env, &caller, &record);

        if amount > 0 {
            token.transfer(&env.current_contract_address(), &target, &amount);
        }

        events::stake_withdrawn(&env, &caller, &target, amount);

        Ok(amount)
    }
}

fn fee_token(env: &Env) -> Result<token::Client<'_>, Error> {
    let address = storage::get_token(env)?;
    Ok(token::Client::new(env, &address))
}

/// Pull `amount` from `from` via its allowance to this contract.
fn pull(env: &Env, token: &token::Client, from: &Address, amount: i128) {
    let ledger = env.current_contract_address();
    token.transfer_from(&ledger, from, &ledger, &amount);
}

fn credit_deposit(
    env: &Env,
    token: &token::Client,
    payer: &Address,
    recipient: &Address,
    amount: i128,
) -> Result<i128, Error> {
    let mut record = storage::get_record(env, recipient);
    let total = record.deposit.checked_add(amount).ok_or(Error::Overflow)?;

    pull(env, token, payer, amount);

    record.deposit = total;
    storage::set_record(env, recipient, &record);

    events::deposited(env, recipient, amount, total);

    Ok(total)
}

fn bond_stake(
    env: &Env,
    token: &token::Client,
    staker: &Address,
    unstake_delay_sec: u64,
    amount: i128,
    allowance: i128,
) -> Result<DepositInfo, Error> {
    if amount < 0 {
        reject!(env, Error::NegativeAmount, "amount must not be negative");
    }
    if amount == 0 {
        reject!(env, Error::ZeroAmount, "amount to stake == 0");
    }
    if amount > allowance {
        reject!(env, Error::InsufficientAllowance, "amount to stake > allowance");
    }

    let mut record = storage::get_record(env, staker);
    let (prev_amount, prev_delay) = match record.stake.bond() {
        Some(bond) => (bond.amount, bond.unstake_delay_sec),
        None => (0, 0),
    };

    let unstake_delay_sec = prev_delay.max(unstake_delay_sec);
    if unstake_delay_sec == 0 {
        reject!(env, Error::MissingUnstakeDelay, "must specify unstake delay");
    }
    let total = prev_amount.checked_add(amount).ok_or(Error::Overflow)?;

    pull(env, token, staker, amount);

    // Any pending unlock is dropped here.
    record.stake = StakeState::Staked(StakeBond {
        amount: total,
        unstake_delay_sec,
    });
    storage::set_record(env, staker, &record);

    events::staked(env, staker, total, unstake_delay_sec);

    Ok(record.info())
}
