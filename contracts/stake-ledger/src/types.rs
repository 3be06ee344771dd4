use soroban_sdk::{contracttype, Address};

/// Storage keys for the contract.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// FeeToken contract address (persistent storage).
    Token,
    /// Per-account deposit and stake record (persistent storage).
    Deposit(Address),
}

/// Bonded collateral and the exit delay the owner committed to.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeBond {
    pub amount: i128,
    /// Minimum seconds between `unlock_stake` and `withdraw_stake`.
    pub unstake_delay_sec: u64,
}

/// A bond whose exit timer is running.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingUnlock {
    pub bond: StakeBond,
    /// Ledger timestamp at which the stake may be withdrawn.
    pub withdraw_time: u64,
}

/// Stake lifecycle of a single account.
///
/// `Staked` and `Unlocking` are disjoint variants, so an account can never be
/// bonded while also waiting on a withdrawal timer.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StakeState {
    Unstaked,
    Staked(StakeBond),
    Unlocking(PendingUnlock),
}

impl StakeState {
    /// The bond held in either the staked or unlocking state.
    pub fn bond(&self) -> Option<&StakeBond> {
        match self {
            StakeState::Unstaked => None,
            StakeState::Staked(bond) => Some(bond),
            StakeState::Unlocking(pending) => Some(&pending.bond),
        }
    }

    pub fn is_staked(&self) -> bool {
        matches!(self, StakeState::Staked(_))
    }

    /// Withdrawal timestamp, or `0` when no unlock is pending.
    pub fn withdraw_time(&self) -> u64 {
        match self {
            StakeState::Unlocking(pending) => pending.withdraw_time,
            _ => 0,
        }
    }
}

/// Ledger entry kept for every address that ever deposited or staked.
///
/// `deposit` and the stake bond are separate buckets; nothing moves value
/// between them.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositRecord {
    /// Spendable balance funded through FeeToken transfers.
    pub deposit: i128,
    pub stake: StakeState,
}

impl DepositRecord {
    pub fn empty() -> Self {
        DepositRecord {
            deposit: 0,
            stake: StakeState::Unstaked,
        }
    }

    pub fn info(&self) -> DepositInfo {
        let (stake, unstake_delay_sec) = match self.stake.bond() {
            Some(bond) => (bond.amount, bond.unstake_delay_sec),
            None => (0, 0),
        };
        DepositInfo {
            deposit: self.deposit,
            staked: self.stake.is_staked(),
            stake,
            unstake_delay_sec,
            withdraw_time: self.stake.withdraw_time(),
        }
    }
}

/// Flat snapshot returned by `get_deposit_info`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositInfo {
    pub deposit: i128,
    pub staked: bool,
    pub stake: i128,
    pub unstake_delay_sec: u64,
    /// `0` unless an unlock is pending.
    pub withdraw_time: u64,
}
