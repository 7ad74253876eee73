//! Client error types

use amm_codec::CodecError;
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("missing required account `{0}`")]
    MissingRequiredAccount(String),

    #[error("missing required argument `{0}`")]
    MissingRequiredField(String),

    #[error("instruction `{instruction}` needs at least {expected} accounts, got {actual}")]
    NotEnoughAccounts {
        instruction: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("malformed instruction: {0}")]
    MalformedInstruction(String),

    #[error("invalid account data: {0}")]
    InvalidAccount(String),

    #[error("decode error: {0}")]
    Decode(#[from] CodecError),

    #[error("instruction targets program {actual}, expected {expected}")]
    ProgramMismatch { expected: Pubkey, actual: Pubkey },

    #[error("unknown instruction `{0}`")]
    UnknownInstruction(String),

    #[error("unknown account `{account}` for instruction `{instruction}`")]
    UnknownAccount {
        instruction: &'static str,
        account: String,
    },

    #[error("unknown argument `{arg}` for instruction `{instruction}`")]
    UnknownArgument {
        instruction: &'static str,
        arg: String,
    },

    #[error("no resolver registered under `{0}`")]
    UnknownResolver(String),

    #[error("instruction `{instruction}` uses async resolver `{resolver}`; build it asynchronously")]
    AsyncResolverRequired {
        instruction: &'static str,
        resolver: &'static str,
    },

    #[error("optional account `{0}` equals the program address and would be read back as absent")]
    SentinelCollision(String),

    #[error("instruction `{0}` takes no remaining accounts")]
    UnexpectedRemainingAccounts(&'static str),

    #[error("cannot derive `{target}`: {reason}")]
    InvalidSeed {
        target: &'static str,
        reason: String,
    },

    #[error("resolver `{resolver}` returned a value of the wrong type for `{target}`")]
    ResolverTypeMismatch {
        resolver: &'static str,
        target: &'static str,
    },

    #[error(transparent)]
    Resolver(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
