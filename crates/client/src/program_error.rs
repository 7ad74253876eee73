//! Errors returned by the on-chain program
//!
//! Codes start at 6000, the offset used for program-defined custom errors.
//! The table is compile-time data; `Display` gives the program's message.

use solana_sdk::instruction::InstructionError;
use thiserror::Error;

pub const ERROR_CODE_OFFSET: u32 = 6000;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum AmmProgramError {
    #[error("invalid merkle proof, token not whitelisted")]
    InvalidProof = 6000,
    #[error("whitelist not verified -- currently only verified pools supported")]
    WhitelistNotVerified = 6001,
    #[error("whitelist pda address doesn't match")]
    BadWhitelist = 6002,
    #[error("operation not permitted on this pool type")]
    WrongPoolType = 6003,
    #[error("fee account doesn't match that stored on pool")]
    BadFeeAccount = 6004,
    #[error("escrow account doesn't match that stored on pool")]
    BadEscrowAccount = 6005,
    #[error("when setting up a Trade pool, must provide fee bps & fee vault")]
    MissingFees = 6006,
    #[error("fees entered above allowed threshold")]
    FeesTooHigh = 6007,
    #[error("delta too large")]
    DeltaTooLarge = 6008,
    #[error("arithmetic error")]
    ArithmeticError = 6009,
    #[error("this nft doesnt belong to this pool")]
    WrongPool = 6010,
    #[error("royalties are enabled always")]
    RoyaltiesEnabled = 6011,
    #[error("price mismatch")]
    PriceMismatch = 6012,
    #[error("cannot close pool with nfts in escrow -- withdraw all before closing")]
    ExistingNfts = 6013,
    #[error("wrong mint passed for provided accounts")]
    WrongMint = 6014,
    #[error("insufficient Tswap account balance")]
    InsufficientTswapAccBalance = 6015,
    #[error("bad owner")]
    BadOwner = 6016,
    #[error("fees not allowed for non-trade pools")]
    FeesNotAllowed = 6017,
    #[error("metadata account does not match")]
    BadMetadata = 6018,
    #[error("provided creator address does not match metadata creator")]
    CreatorMismatch = 6019,
    #[error("wrong pool version provided")]
    WrongPoolVersion = 6020,
    #[error("new pool should not match old pool")]
    PoolsAreTheSame = 6021,
    #[error("wrong nft authority account provided")]
    WrongAuthority = 6022,
    #[error("amount frozen doesnt match current price")]
    FrozenAmountMismatch = 6023,
    #[error("mint proof account does not match")]
    BadMintProof = 6024,
    #[error("bad cosigner passed - either wrong key or no signature")]
    BadCosigner = 6025,
    #[error("pool is frozen")]
    PoolFrozen = 6026,
    #[error("bad shared escrow account passed")]
    BadSharedEscrow = 6027,
    #[error("expected a shared escrow pool to be passed in")]
    PoolNotOnSharedEscrow = 6028,
    #[error("expected a non-shared escrow pool to be passed in")]
    PoolOnSharedEscrow = 6029,
    #[error("cannot use shared escrow in NFT pools")]
    WrongOrderType = 6030,
    #[error("can't change frozen status")]
    WrongFrozenStatus = 6031,
    #[error("shared escrow is still in use")]
    SharedEscrowInUse = 6032,
    #[error("max taker sell count exceeded, pool cannot buy anymore NFTs")]
    MaxTakerSellCountExceeded = 6033,
    #[error("max taker sell count is too small")]
    MaxTakerSellCountTooSmall = 6034,
    #[error("rule set for programmable nft does not match")]
    BadRuleSet = 6035,
    #[error("this pool compounds fees and they cannot be withdrawn separately")]
    PoolFeesCompounded = 6036,
    #[error("royalties percentage passed in must be between 0 and 100")]
    BadRoyaltiesPct = 6037,
    #[error("starting price can't be smaller than 1 lamport")]
    StartingPriceTooSmall = 6038,
    #[error("pool must keep minimum rent balance")]
    PoolKeepAlive = 6039,
    #[error("pool has expired")]
    ExpiredPool = 6040,
    #[error("pool is not expired")]
    PoolNotExpired = 6041,
    #[error("expiry is too large")]
    ExpiryTooLarge = 6042,
    #[error("currency is not supported")]
    UnsupportedCurrency = 6043,
    #[error("invalid pool amount")]
    InvalidPoolAmount = 6044,
    #[error("wrong broker account passed")]
    WrongBrokerAccount = 6045,
}

impl AmmProgramError {
    pub const ALL: &'static [AmmProgramError] = &[
        Self::InvalidProof,
        Self::WhitelistNotVerified,
        Self::BadWhitelist,
        Self::WrongPoolType,
        Self::BadFeeAccount,
        Self::BadEscrowAccount,
        Self::MissingFees,
        Self::FeesTooHigh,
        Self::DeltaTooLarge,
        Self::ArithmeticError,
        Self::WrongPool,
        Self::RoyaltiesEnabled,
        Self::PriceMismatch,
        Self::ExistingNfts,
        Self::WrongMint,
        Self::InsufficientTswapAccBalance,
        Self::BadOwner,
        Self::FeesNotAllowed,
        Self::BadMetadata,
        Self::CreatorMismatch,
        Self::WrongPoolVersion,
        Self::PoolsAreTheSame,
        Self::WrongAuthority,
        Self::FrozenAmountMismatch,
        Self::BadMintProof,
        Self::BadCosigner,
        Self::PoolFrozen,
        Self::BadSharedEscrow,
        Self::PoolNotOnSharedEscrow,
        Self::PoolOnSharedEscrow,
        Self::WrongOrderType,
        Self::WrongFrozenStatus,
        Self::SharedEscrowInUse,
        Self::MaxTakerSellCountExceeded,
        Self::MaxTakerSellCountTooSmall,
        Self::BadRuleSet,
        Self::PoolFeesCompounded,
        Self::BadRoyaltiesPct,
        Self::StartingPriceTooSmall,
        Self::PoolKeepAlive,
        Self::ExpiredPool,
        Self::PoolNotExpired,
        Self::ExpiryTooLarge,
        Self::UnsupportedCurrency,
        Self::InvalidPoolAmount,
        Self::WrongBrokerAccount,
    ];

    pub const fn code(self) -> u32 {
        self as u32
    }

    pub fn from_code(code: u32) -> Option<Self> {
        let idx = code.checked_sub(ERROR_CODE_OFFSET)? as usize;
        Self::ALL.get(idx).copied()
    }

    /// Map a failed instruction back to a program error, if it is one
    pub fn from_instruction_error(err: &InstructionError) -> Option<Self> {
        match err {
            InstructionError::Custom(code) => Self::from_code(*code),
            _ => None,
        }
    }
}
