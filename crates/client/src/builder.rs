//! Instruction builder
//!
//! Lowers a caller's partial input into a wire instruction:
//!
//! 1. seed one record per account slot and argument from the input
//! 2. run the definition's pipeline, filling only what is still empty
//! 3. fail on any required account or argument left unresolved
//! 4. encode the payload and emit metas in slot order, placing the program
//!    address in every omitted optional slot
//! 5. append remaining accounts in caller order
//!
//! Caller-supplied values always win over defaults.

use crate::data::{encode_instruction_data, InstructionData};
use crate::definition::{
    AccountDefault, ArgDefault, ArgField, Const, InstructionDefinition, Pda, PdaProgram,
    ResolverRef, Seed, Step,
};
use crate::error::{ClientError, Result};
use crate::resolver::{Resolver, ResolverContext, ResolverRegistry};
use amm_codec::{encode_value, CodecError, InstructionWriter, Value, WireType};
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::{Pubkey, MAX_SEED_LEN};
use std::collections::BTreeMap;

/// One caller-supplied account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountInput {
    pub address: Pubkey,
    /// Caller holds the signing key for this address
    pub is_signer: bool,
}

/// Caller input for one instruction. Anything left out is resolved from the
/// definition's defaults or reported missing.
#[derive(Debug, Clone, Default)]
pub struct InstructionInput {
    pub accounts: BTreeMap<String, AccountInput>,
    pub args: BTreeMap<String, Value>,
    pub remaining_accounts: Vec<Pubkey>,
}

impl InstructionInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account(mut self, name: impl Into<String>, address: Pubkey) -> Self {
        self.accounts.insert(
            name.into(),
            AccountInput {
                address,
                is_signer: false,
            },
        );
        self
    }

    pub fn signer(mut self, name: impl Into<String>, address: Pubkey) -> Self {
        self.accounts.insert(
            name.into(),
            AccountInput {
                address,
                is_signer: true,
            },
        );
        self
    }

    pub fn arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args.insert(name.into(), value.into());
        self
    }

    pub fn remaining_accounts(mut self, accounts: impl IntoIterator<Item = Pubkey>) -> Self {
        self.remaining_accounts.extend(accounts);
        self
    }
}

/// Per-call account record, mutated by the pipeline then frozen into a meta
#[derive(Debug, Clone, Copy, Default)]
struct ResolvedAccount {
    value: Option<Pubkey>,
    is_writable: bool,
    is_signer: bool,
}

/// What a default was waiting on when it could not be applied
enum Dependency {
    Account(&'static str),
    Arg(&'static str),
}

impl From<Dependency> for ClientError {
    fn from(dep: Dependency) -> Self {
        match dep {
            Dependency::Account(name) => ClientError::MissingRequiredAccount(name.to_string()),
            Dependency::Arg(name) => ClientError::MissingRequiredField(name.to_string()),
        }
    }
}

struct Build<'d> {
    program_id: Pubkey,
    definition: &'d InstructionDefinition,
    accounts: Vec<ResolvedAccount>,
    args: Vec<Option<Value>>,
    remaining: Vec<Pubkey>,
}

fn check_arg(field: &ArgField, value: &Value) -> Result<()> {
    let mut scratch = InstructionWriter::new();
    encode_value(field.name, &field.ty, value, &mut scratch)?;
    Ok(())
}

fn const_value(field: &ArgField, c: Const) -> Result<Value> {
    let mismatch = || {
        ClientError::Decode(CodecError::TypeMismatch {
            field: field.name.to_string(),
            expected: field.ty.to_string(),
        })
    };
    Ok(match (c, field.ty) {
        (Const::None, WireType::Option(_)) => Value::Option(None),
        (Const::Bool(b), WireType::Bool) => Value::Bool(b),
        (Const::Int(n), WireType::U8) => Value::U8(u8::try_from(n).map_err(|_| mismatch())?),
        (Const::Int(n), WireType::U16) => Value::U16(u16::try_from(n).map_err(|_| mismatch())?),
        (Const::Int(n), WireType::U32) => Value::U32(u32::try_from(n).map_err(|_| mismatch())?),
        (Const::Int(n), WireType::U64) => Value::U64(n),
        (Const::Int(n), WireType::I64) => Value::I64(i64::try_from(n).map_err(|_| mismatch())?),
        _ => return Err(mismatch()),
    })
}

impl<'d> Build<'d> {
    fn seed(
        program_id: Pubkey,
        definition: &'d InstructionDefinition,
        input: InstructionInput,
    ) -> Result<Self> {
        let mut accounts: Vec<ResolvedAccount> = definition
            .accounts
            .iter()
            .map(|slot| ResolvedAccount {
                value: None,
                is_writable: slot.role.is_writable(),
                is_signer: slot.role.is_signer(),
            })
            .collect();
        for (name, account) in input.accounts {
            let idx = definition
                .account_index(&name)
                .ok_or_else(|| ClientError::UnknownAccount {
                    instruction: definition.name,
                    account: name.clone(),
                })?;
            accounts[idx].value = Some(account.address);
            accounts[idx].is_signer |= account.is_signer;
        }

        let mut args = vec![None; definition.args.len()];
        for (name, value) in input.args {
            let idx = definition
                .arg_index(&name)
                .ok_or_else(|| ClientError::UnknownArgument {
                    instruction: definition.name,
                    arg: name.clone(),
                })?;
            check_arg(&definition.args[idx], &value)?;
            args[idx] = Some(value);
        }

        if definition.remaining.is_none() && !input.remaining_accounts.is_empty() {
            return Err(ClientError::UnexpectedRemainingAccounts(definition.name));
        }

        Ok(Self {
            program_id,
            definition,
            accounts,
            args,
            remaining: input.remaining_accounts,
        })
    }

    /// Address and signer flag of a resolved slot
    fn account(&self, name: &'static str) -> Result<Option<(Pubkey, bool)>> {
        let idx = self
            .definition
            .account_index(name)
            .ok_or_else(|| ClientError::UnknownAccount {
                instruction: self.definition.name,
                account: name.to_string(),
            })?;
        let account = self.accounts[idx];
        Ok(account.value.map(|address| (address, account.is_signer)))
    }

    fn arg(&self, name: &'static str) -> Result<Option<&Value>> {
        let idx = self
            .definition
            .arg_index(name)
            .ok_or_else(|| ClientError::UnknownArgument {
                instruction: self.definition.name,
                arg: name.to_string(),
            })?;
        Ok(self.args[idx].as_ref())
    }

    fn derive(
        &self,
        target: &'static str,
        pda: &Pda,
    ) -> Result<std::result::Result<Pubkey, Dependency>> {
        let mut seeds: Vec<Vec<u8>> = Vec::with_capacity(pda.seeds.len());
        for seed in pda.seeds {
            let bytes = match *seed {
                Seed::Literal(bytes) => bytes.to_vec(),
                Seed::Address(key) => key.to_bytes().to_vec(),
                Seed::ProgramId => self.program_id.to_bytes().to_vec(),
                Seed::Account(name) => match self.account(name)? {
                    Some((address, _)) => address.to_bytes().to_vec(),
                    None => return Ok(Err(Dependency::Account(name))),
                },
                Seed::Arg(name) => match self.arg(name)? {
                    Some(value) => value.seed_bytes().ok_or_else(|| ClientError::InvalidSeed {
                        target,
                        reason: format!("argument `{}` cannot be used as a seed", name),
                    })?,
                    None => return Ok(Err(Dependency::Arg(name))),
                },
            };
            if bytes.len() > MAX_SEED_LEN {
                return Err(ClientError::InvalidSeed {
                    target,
                    reason: format!("seed of {} bytes exceeds {}", bytes.len(), MAX_SEED_LEN),
                });
            }
            seeds.push(bytes);
        }

        let program = match pda.program {
            PdaProgram::This => self.program_id,
            PdaProgram::Address(key) => key,
        };
        let refs: Vec<&[u8]> = seeds.iter().map(Vec::as_slice).collect();
        let (address, _bump) = Pubkey::try_find_program_address(&refs, &program).ok_or_else(|| {
            ClientError::InvalidSeed {
                target,
                reason: "no viable bump seed".to_string(),
            }
        })?;
        Ok(Ok(address))
    }

    fn set_account(&mut self, idx: usize, address: Pubkey, inherit_signer: bool) {
        let slot = &self.definition.accounts[idx];
        log::debug!("{}: `{}` -> {}", self.definition.name, slot.name, address);
        self.accounts[idx].value = Some(address);
        self.accounts[idx].is_signer |= inherit_signer;
    }

    /// Apply a step whose default needs no resolver. Returns the resolver to
    /// call when it does.
    fn run_local(&mut self, step: Step) -> Result<Option<ResolverRef>> {
        match step {
            Step::Account(name) => {
                let idx = self
                    .definition
                    .account_index(name)
                    .ok_or_else(|| ClientError::UnknownAccount {
                        instruction: self.definition.name,
                        account: name.to_string(),
                    })?;
                if self.accounts[idx].value.is_some() {
                    return Ok(None);
                }
                let slot = self.definition.accounts[idx];
                let Some(default) = slot.default else {
                    return Ok(None);
                };
                let resolved = match default {
                    AccountDefault::Static(address) => Ok((address, false)),
                    AccountDefault::ProgramId => Ok((self.program_id, false)),
                    AccountDefault::Account(other) => match self.account(other)? {
                        Some(found) => Ok(found),
                        None => Err(Dependency::Account(other)),
                    },
                    AccountDefault::Pda(pda) => self.derive(slot.name, &pda)?.map(|a| (a, false)),
                    AccountDefault::Resolver(resolver) => return Ok(Some(resolver)),
                };
                match resolved {
                    Ok((address, signer)) => self.set_account(idx, address, signer),
                    // An optional slot whose inputs are absent is simply omitted.
                    Err(_) if slot.optional => {}
                    Err(dep) => return Err(dep.into()),
                }
                Ok(None)
            }
            Step::Arg(name) => {
                let idx = self
                    .definition
                    .arg_index(name)
                    .ok_or_else(|| ClientError::UnknownArgument {
                        instruction: self.definition.name,
                        arg: name.to_string(),
                    })?;
                if self.args[idx].is_some() {
                    return Ok(None);
                }
                let field = self.definition.args[idx];
                match field.default {
                    Some(ArgDefault::Const(c)) => self.args[idx] = Some(const_value(&field, c)?),
                    Some(ArgDefault::Resolver(resolver)) => return Ok(Some(resolver)),
                    None => {}
                }
                Ok(None)
            }
        }
    }

    fn context(&self, step: Step) -> ResolverContext {
        let target = match step {
            Step::Account(name) | Step::Arg(name) => name,
        };
        ResolverContext {
            program_id: self.program_id,
            instruction: self.definition.name,
            target,
            accounts: self
                .definition
                .accounts
                .iter()
                .zip(&self.accounts)
                .filter_map(|(slot, account)| account.value.map(|v| (slot.name, v)))
                .collect(),
            args: self
                .definition
                .args
                .iter()
                .zip(&self.args)
                .filter_map(|(field, value)| value.clone().map(|v| (field.name, v)))
                .collect(),
        }
    }

    fn apply(&mut self, step: Step, resolver: ResolverRef, value: Option<Value>) -> Result<()> {
        let Some(value) = value else {
            return Ok(());
        };
        match step {
            Step::Account(name) => {
                let address = value.as_pubkey().ok_or(ClientError::ResolverTypeMismatch {
                    resolver: resolver.name,
                    target: name,
                })?;
                if let Some(idx) = self.definition.account_index(name) {
                    self.set_account(idx, address, false);
                }
            }
            Step::Arg(name) => {
                if let Some(idx) = self.definition.arg_index(name) {
                    let field = self.definition.args[idx];
                    check_arg(&field, &value).map_err(|_| ClientError::ResolverTypeMismatch {
                        resolver: resolver.name,
                        target: name,
                    })?;
                    log::debug!(
                        "{}: arg `{}` resolved by `{}`",
                        self.definition.name,
                        name,
                        resolver.name
                    );
                    self.args[idx] = Some(value);
                }
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Instruction> {
        let definition = self.definition;

        for (slot, account) in definition.accounts.iter().zip(&self.accounts) {
            if account.value.is_none() && !slot.optional {
                return Err(ClientError::MissingRequiredAccount(slot.name.to_string()));
            }
        }

        let mut values = Vec::with_capacity(definition.args.len());
        for (field, value) in definition.args.iter().zip(self.args) {
            let value =
                value.ok_or_else(|| ClientError::MissingRequiredField(field.name.to_string()))?;
            values.push((field.name, value));
        }
        let data = encode_instruction_data(
            definition,
            &InstructionData {
                name: definition.name,
                values,
            },
        )?;

        let mut metas = Vec::with_capacity(definition.accounts.len() + self.remaining.len());
        for (slot, account) in definition.accounts.iter().zip(&self.accounts) {
            let meta = match account.value {
                Some(address) if slot.optional && address == self.program_id => {
                    return Err(ClientError::SentinelCollision(slot.name.to_string()));
                }
                Some(address) => AccountMeta {
                    pubkey: address,
                    is_signer: account.is_signer,
                    is_writable: account.is_writable,
                },
                None => AccountMeta::new_readonly(self.program_id, false),
            };
            log::trace!("{}: [{}] {} {:?}", definition.name, metas.len(), slot.name, meta);
            metas.push(meta);
        }

        if let Some(remaining) = definition.remaining {
            metas.extend(self.remaining.iter().map(|address| AccountMeta {
                pubkey: *address,
                is_signer: remaining.role.is_signer(),
                is_writable: remaining.role.is_writable(),
            }));
        }

        Ok(Instruction {
            program_id: self.program_id,
            accounts: metas,
            data,
        })
    }
}

fn lookup<'r>(registry: &'r ResolverRegistry, resolver: ResolverRef) -> Result<&'r Resolver> {
    registry
        .get(resolver.name)
        .ok_or_else(|| ClientError::UnknownResolver(resolver.name.to_string()))
}

/// Build an instruction whose defaults resolve without I/O.
///
/// Fails with `AsyncResolverRequired` up front if the definition references
/// any async resolver.
pub fn build_instruction(
    program_id: Pubkey,
    definition: &InstructionDefinition,
    input: InstructionInput,
    registry: &ResolverRegistry,
) -> Result<Instruction> {
    if let Some(resolver) = definition.first_async_resolver() {
        return Err(ClientError::AsyncResolverRequired {
            instruction: definition.name,
            resolver: resolver.name,
        });
    }

    let mut build = Build::seed(program_id, definition, input)?;
    for step in definition.pipeline {
        let Some(resolver) = build.run_local(*step)? else {
            continue;
        };
        let value = match lookup(registry, resolver)? {
            Resolver::Sync(f) => f(&build.context(*step))?,
            Resolver::Async(_) => {
                return Err(ClientError::AsyncResolverRequired {
                    instruction: definition.name,
                    resolver: resolver.name,
                })
            }
        };
        build.apply(*step, resolver, value)?;
    }
    build.finish()
}

/// Build an instruction, awaiting async resolvers in pipeline order.
pub async fn build_instruction_async(
    program_id: Pubkey,
    definition: &InstructionDefinition,
    input: InstructionInput,
    registry: &ResolverRegistry,
) -> Result<Instruction> {
    let mut build = Build::seed(program_id, definition, input)?;
    for step in definition.pipeline {
        let Some(resolver) = build.run_local(*step)? else {
            continue;
        };
        let ctx = build.context(*step);
        let value = match lookup(registry, resolver)? {
            Resolver::Sync(f) => f(&ctx)?,
            Resolver::Async(r) => r.resolve(&ctx).await?,
        };
        build.apply(*step, resolver, value)?;
    }
    build.finish()
}
