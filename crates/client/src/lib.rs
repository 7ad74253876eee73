//! Instruction client for the AMM / NFT marketplace program
//!
//! Instructions are described as static data (`instructions`) and lowered to
//! wire instructions by one generic builder, with defaults filled by literal
//! values, PDA derivation or named resolvers. The parser is the inverse.

pub mod accounts;
pub mod builder;
pub mod data;
pub mod definition;
pub mod error;
pub mod ids;
pub mod instructions;
pub mod parser;
pub mod pda;
pub mod program;
pub mod program_error;
pub mod resolver;
pub mod types;

pub use builder::{build_instruction, build_instruction_async, AccountInput, InstructionInput};
pub use data::{decode_instruction_data, encode_instruction_data, InstructionData};
pub use definition::{AccountRole, InstructionDefinition};
pub use error::{ClientError, Result};
pub use parser::{parse_instruction, ParsedInstruction};
pub use program::AmmProgram;
pub use program_error::AmmProgramError;
pub use resolver::{AccountFetcher, AsyncResolver, PoolRentPayer, ResolverContext, ResolverRegistry};
pub use types::{CurveType, PoolConfig, PoolType};

pub use amm_codec::Value;
