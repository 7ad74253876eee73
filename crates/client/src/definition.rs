//! Instruction definitions as data
//!
//! Every instruction of the program is described by one static
//! `InstructionDefinition`: its discriminator, its ordered account slots, its
//! ordered arguments and the order in which defaults are resolved. The build
//! and parse engines interpret these tables; there is no per-instruction code.
//!
//! Slot and argument order is a binary contract with the on-chain program and
//! must never change for a given discriminator.

use amm_codec::{Field, WireType};
use solana_sdk::pubkey::Pubkey;

/// Access flags of an account slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountRole {
    Readonly,
    Writable,
    ReadonlySigner,
    WritableSigner,
}

impl AccountRole {
    pub const fn is_writable(self) -> bool {
        matches!(self, AccountRole::Writable | AccountRole::WritableSigner)
    }

    pub const fn is_signer(self) -> bool {
        matches!(self, AccountRole::ReadonlySigner | AccountRole::WritableSigner)
    }
}

/// A named resolver function, looked up in a `ResolverRegistry`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverRef {
    pub name: &'static str,
    /// Whether the resolver needs I/O. Any async resolver makes the whole
    /// instruction async.
    pub is_async: bool,
}

impl ResolverRef {
    pub const fn sync(name: &'static str) -> Self {
        Self {
            name,
            is_async: false,
        }
    }

    pub const fn asynchronous(name: &'static str) -> Self {
        Self {
            name,
            is_async: true,
        }
    }
}

/// One component of a PDA seed list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed {
    Literal(&'static [u8]),
    /// Address of another account slot
    Account(&'static str),
    /// Raw bytes of an argument
    Arg(&'static str),
    /// A fixed address, e.g. a foreign program id used as a seed
    Address(Pubkey),
    /// The address of the program being called
    ProgramId,
}

/// Program a PDA is derived under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdaProgram {
    This,
    Address(Pubkey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pda {
    pub program: PdaProgram,
    pub seeds: &'static [Seed],
}

/// Default applied to an account slot the caller left empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountDefault {
    /// A well-known address such as the system program
    Static(Pubkey),
    /// The program's own address
    ProgramId,
    /// Same address as another slot
    Account(&'static str),
    Pda(Pda),
    Resolver(ResolverRef),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountSlot {
    pub name: &'static str,
    pub role: AccountRole,
    pub optional: bool,
    pub default: Option<AccountDefault>,
}

impl AccountSlot {
    pub const fn new(name: &'static str, role: AccountRole) -> Self {
        Self {
            name,
            role,
            optional: false,
            default: None,
        }
    }

    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub const fn default_to(mut self, default: AccountDefault) -> Self {
        self.default = Some(default);
        self
    }
}

/// Constant argument defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Const {
    /// `Option::None`
    None,
    Bool(bool),
    /// Integer literal, narrowed to the field's width
    Int(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgDefault {
    Const(Const),
    Resolver(ResolverRef),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgField {
    pub name: &'static str,
    pub ty: WireType,
    pub default: Option<ArgDefault>,
}

impl ArgField {
    pub const fn new(name: &'static str, ty: WireType) -> Self {
        Self {
            name,
            ty,
            default: None,
        }
    }

    pub const fn default_to(mut self, default: ArgDefault) -> Self {
        self.default = Some(default);
        self
    }

    /// `Option<T>` argument that defaults to `None` when omitted
    pub const fn optional(name: &'static str, inner: &'static WireType) -> Self {
        Self::new(name, WireType::Option(inner)).default_to(ArgDefault::Const(Const::None))
    }

    pub const fn field(&self) -> Field {
        Field::new(self.name, self.ty)
    }
}

/// One step of the resolver pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Account(&'static str),
    Arg(&'static str),
}

/// Variadic trailing accounts, e.g. royalty creators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemainingAccounts {
    pub name: &'static str,
    pub role: AccountRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionDefinition {
    pub name: &'static str,
    pub discriminator: &'static [u8],
    pub accounts: &'static [AccountSlot],
    pub args: &'static [ArgField],
    /// Order in which defaults run; only steps listed here are resolved
    pub pipeline: &'static [Step],
    pub remaining: Option<RemainingAccounts>,
}

impl InstructionDefinition {
    pub fn account_index(&self, name: &str) -> Option<usize> {
        self.accounts.iter().position(|slot| slot.name == name)
    }

    pub fn arg_index(&self, name: &str) -> Option<usize> {
        self.args.iter().position(|arg| arg.name == name)
    }

    pub fn account(&self, name: &str) -> Option<&AccountSlot> {
        self.accounts.iter().find(|slot| slot.name == name)
    }

    pub fn arg(&self, name: &str) -> Option<&ArgField> {
        self.args.iter().find(|arg| arg.name == name)
    }

    /// Number of account metas a well-formed instruction carries at minimum
    pub fn min_accounts(&self) -> usize {
        self.accounts.len()
    }

    /// Resolvers referenced by the pipeline, in pipeline order
    pub fn resolvers(&self) -> impl Iterator<Item = ResolverRef> + '_ {
        self.pipeline.iter().filter_map(move |step| match step {
            Step::Account(name) => match self.account(name)?.default? {
                AccountDefault::Resolver(r) => Some(r),
                _ => None,
            },
            Step::Arg(name) => match self.arg(name)?.default? {
                ArgDefault::Resolver(r) => Some(r),
                _ => None,
            },
        })
    }

    /// True when building this instruction needs an async resolver
    pub fn is_async(&self) -> bool {
        self.resolvers().any(|r| r.is_async)
    }

    pub fn first_async_resolver(&self) -> Option<ResolverRef> {
        self.resolvers().find(|r| r.is_async)
    }

    pub fn matches_discriminator(&self, data: &[u8]) -> bool {
        data.starts_with(self.discriminator)
    }
}
