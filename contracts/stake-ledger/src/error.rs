use soroban_sdk::contracterror;

/// Rejections surfaced by every ledger operation. Codes are stable.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    ZeroAmount = 2,
    NegativeAmount = 3,
    InsufficientAllowance = 4,
    MissingUnstakeDelay = 5,
    InsufficientBalance = 6,
    NotStaked = 7,
    AlreadyUnstaking = 8,
    UnlockRequired = 9,
    WithdrawalNotDue = 10,
    Overflow = 11,
    DepositAmountRequired = 12,
    DepositExceedsAllowance = 13,
}

impl Error {
    /// Human-readable reason, matched verbatim by integrators.
    pub const fn message(&self) -> &'static str {
        match self {
            Error::NotInitialized => "token address not set",
            Error::ZeroAmount => "amount to stake == 0",
            Error::NegativeAmount => "amount must not be negative",
            Error::InsufficientAllowance => "amount to stake > allowance",
            Error::MissingUnstakeDelay => "must specify unstake delay",
            Error::InsufficientBalance => "withdrawal amount too large",
            Error::NotStaked => "not staked",
            Error::AlreadyUnstaking => "already unstaking",
            Error::UnlockRequired => "must call unlockStake() first",
            Error::WithdrawalNotDue => "stake withdrawal is not due",
            Error::Overflow => "arithmetic overflow",
            Error::DepositAmountRequired => "amount required",
            Error::DepositExceedsAllowance => "amount exceeds allowance",
        }
    }
}
