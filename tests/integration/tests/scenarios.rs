//! End-to-end build/parse scenarios against the canonical deployment

use amm_client::instructions::{BUY_NFT, CLOSE_POOL, CREATE_POOL};
use amm_client::resolver::POOL_RENT_PAYER;
use amm_client::{
    parse_instruction, AmmProgram, ClientError, InstructionInput, PoolRentPayer, ResolverRegistry,
    Value,
};
use amm_codec::{decode_value, encode_value, InstructionReader, InstructionWriter, WireType};
use amm_integration_tests::{pool_account, token_pool_config, BuyNftAccounts, MemoryFetcher};
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;

/// Scenario A: create_pool with only the required inputs
///
/// Every optional argument left out must encode as `None` (tag byte 0).
#[test]
fn test_scenario_a_create_pool_optional_args_default_to_none() {
    let program = AmmProgram::default();
    let input = InstructionInput::new()
        .signer("owner", Pubkey::new_unique())
        .account("whitelist", Pubkey::new_unique())
        .arg("config", token_pool_config());

    let ix = program
        .build("create_pool", input, &ResolverRegistry::with_builtins())
        .unwrap();

    assert_eq!(&ix.data[..8], &[233, 146, 209, 142, 207, 104, 64, 188]);
    // discriminator, pool_id, config (1 + 1 + 8 + 8 + 1 + 1)
    let optional_args = 8 + 32 + 20;
    // currency, cosigner, maker_broker, max_taker_sell_count, expire_in_sec
    assert_eq!(&ix.data[optional_args..], &[0, 0, 0, 0, 0]);

    let parsed = program.parse(&ix).unwrap();
    for name in [
        "currency",
        "cosigner",
        "maker_broker",
        "max_taker_sell_count",
        "expire_in_sec",
    ] {
        assert_eq!(parsed.data.get(name), Some(&Value::none()), "{}", name);
    }
}

/// Scenario B: buy_nft without a maker broker
///
/// The omitted slot keeps its position and holds the program address.
#[test]
fn test_scenario_b_buy_nft_sentinel_in_last_slot() {
    let program = AmmProgram::default();
    let accounts = BuyNftAccounts::without_maker_broker();
    let input = accounts.input().arg("max_amount", 3_000_000_000u64);

    let ix = program
        .build("buy_nft", input, &ResolverRegistry::with_builtins())
        .unwrap();

    assert_eq!(ix.accounts.len(), 24);
    assert_eq!(ix.accounts[23], AccountMeta::new_readonly(program.program_id(), false));
    assert_eq!(ix.accounts[1], AccountMeta::new(accounts.taker, true));
    for (i, (_, address)) in accounts.named.iter().enumerate() {
        assert_eq!(ix.accounts[i].pubkey, *address);
    }
}

/// Scenario C: parsing the scenario B instruction recovers every account
#[test]
fn test_scenario_c_parse_recovers_named_accounts() {
    let program = AmmProgram::default();
    let accounts = BuyNftAccounts::without_maker_broker();
    let input = accounts
        .input()
        .arg("max_amount", 3_000_000_000u64)
        .arg("optional_royalty_pct", Some(50u16));
    let ix = program
        .build("buy_nft", input, &ResolverRegistry::with_builtins())
        .unwrap();

    let parsed = program.parse(&ix).unwrap();
    assert_eq!(parsed.name, "buy_nft");
    assert_eq!(parsed.account("maker_broker"), None);
    for (name, address) in &accounts.named {
        assert_eq!(parsed.account(name), Some(*address), "{}", name);
    }
    assert_eq!(parsed.data.get("max_amount"), Some(&Value::U64(3_000_000_000)));
    assert_eq!(parsed.data.get("optional_royalty_pct"), Some(&Value::some(50u16)));
    assert!(parsed.remaining_accounts.is_empty());
}

/// Scenario D: too few account metas
#[test]
fn test_scenario_d_not_enough_accounts() {
    assert_eq!(CREATE_POOL.min_accounts(), 6);

    let program = AmmProgram::default();
    let input = InstructionInput::new()
        .signer("owner", Pubkey::new_unique())
        .account("whitelist", Pubkey::new_unique())
        .arg("config", token_pool_config());
    let mut ix = program
        .build("create_pool", input, &ResolverRegistry::with_builtins())
        .unwrap();
    ix.accounts.truncate(5);

    let err = parse_instruction(&CREATE_POOL, &ix).unwrap_err();
    assert!(matches!(
        err,
        ClientError::NotEnoughAccounts {
            instruction: "create_pool",
            expected: 6,
            actual: 5
        }
    ));
}

/// Scenario E: `Option<u16>` royalty field, byte for byte
#[test]
fn test_scenario_e_optional_royalty_round_trip() {
    let ty = WireType::Option(&WireType::U16);
    for (value, bytes) in [
        (Value::none(), vec![0u8]),
        (Value::some(250u16), vec![1, 250, 0]),
    ] {
        let mut w = InstructionWriter::new();
        encode_value("optional_royalty_pct", &ty, &value, &mut w).unwrap();
        let encoded = w.into_inner();
        assert_eq!(encoded, bytes);

        let mut r = InstructionReader::new(&encoded);
        assert_eq!(decode_value(&ty, &mut r).unwrap(), value);
        r.finish().unwrap();
    }

    // and through a full buy_nft payload
    let program = AmmProgram::default();
    for royalty in [None, Some(250u16)] {
        let input = BuyNftAccounts::without_maker_broker()
            .input()
            .arg("max_amount", 1u64)
            .arg("optional_royalty_pct", royalty);
        let ix = program
            .build("buy_nft", input, &ResolverRegistry::with_builtins())
            .unwrap();
        let tail = match royalty {
            None => vec![0],
            Some(_) => vec![1, 250, 0],
        };
        assert_eq!(&ix.data[16..], &tail[..]);
        assert_eq!(
            program.parse(&ix).unwrap().data.get("optional_royalty_pct"),
            Some(&Value::from(royalty))
        );
    }
}

#[test]
fn test_buy_nft_defaults_fill_derived_accounts() {
    let program = AmmProgram::default();
    let taker = Pubkey::new_unique();
    let input = InstructionInput::new()
        .account("owner", Pubkey::new_unique())
        .signer("taker", taker)
        .account("pool", Pubkey::new_unique())
        .account("mint", Pubkey::new_unique())
        .arg("max_amount", 10u64);
    let ix = program
        .build("buy_nft", input.clone(), &ResolverRegistry::with_builtins())
        .unwrap();

    // deterministic apart from caller input
    let again = program
        .build("buy_nft", input, &ResolverRegistry::with_builtins())
        .unwrap();
    assert_eq!(ix, again);

    let parsed = program.parse(&ix).unwrap();
    assert_eq!(parsed.account("rent_payer"), Some(taker));
    for absent in [
        "whitelist",
        "mint_proof",
        "taker_token_record",
        "pool_token_record",
        "token_metadata_program",
        "sysvar_instructions",
        "shared_escrow",
        "taker_broker",
        "cosigner",
        "maker_broker",
    ] {
        assert_eq!(parsed.account(absent), None, "{}", absent);
    }
    assert_eq!(parsed.accounts.len(), BUY_NFT.accounts.len() - 10);
}

#[test]
fn test_sentinel_collision_is_rejected() {
    let program = AmmProgram::default();
    let input = BuyNftAccounts::without_maker_broker()
        .input()
        .account("maker_broker", program.program_id())
        .arg("max_amount", 1u64);
    let err = program
        .build("buy_nft", input, &ResolverRegistry::with_builtins())
        .unwrap_err();
    assert!(matches!(err, ClientError::SentinelCollision(name) if name == "maker_broker"));
}

#[test]
fn test_creators_follow_fixed_slots() {
    let program = AmmProgram::default();
    let creators = [Pubkey::new_unique(), Pubkey::new_unique()];
    let input = BuyNftAccounts::without_maker_broker()
        .input()
        .arg("max_amount", 1u64)
        .remaining_accounts(creators);
    let ix = program
        .build("buy_nft", input, &ResolverRegistry::with_builtins())
        .unwrap();

    let parsed = program.parse(&ix).unwrap();
    let remaining: Vec<Pubkey> = parsed.remaining_accounts.iter().map(|m| m.pubkey).collect();
    assert_eq!(remaining, creators);
    assert!(parsed.remaining_accounts.iter().all(|m| m.is_writable));
}

#[test]
fn test_parse_rejects_foreign_program_and_bad_payload() {
    let program = AmmProgram::default();
    let accounts = vec![AccountMeta::new(Pubkey::new_unique(), true); 24];

    let foreign = Instruction {
        program_id: Pubkey::new_unique(),
        accounts: accounts.clone(),
        data: BUY_NFT.discriminator.to_vec(),
    };
    assert!(matches!(
        program.parse(&foreign),
        Err(ClientError::ProgramMismatch { .. })
    ));

    let mut data = BUY_NFT.discriminator.to_vec();
    data.extend_from_slice(&1u64.to_le_bytes());
    data.extend_from_slice(&[2, 0]);
    let bad_tag = Instruction {
        program_id: program.program_id(),
        accounts,
        data,
    };
    assert!(matches!(
        program.parse(&bad_tag),
        Err(ClientError::Decode(amm_codec::CodecError::InvalidOptionTag(2)))
    ));
}

#[tokio::test]
async fn test_close_pool_reads_rent_payer_from_chain() {
    let program = AmmProgram::default();
    let owner = Pubkey::new_unique();
    let rent_payer = Pubkey::new_unique();
    let pool = Pubkey::new_unique();
    let data = pool_account(owner, rent_payer).encode().unwrap();

    let mut registry = ResolverRegistry::with_builtins();
    registry.register_async(
        POOL_RENT_PAYER,
        PoolRentPayer::new(MemoryFetcher::default().with_account(pool, data)),
    );

    let input = InstructionInput::new()
        .signer("owner", owner)
        .account("pool", pool);
    let ix = program
        .build_async("close_pool", input.clone(), &registry)
        .await
        .unwrap();
    assert_eq!(ix.accounts[0], AccountMeta::new(rent_payer, false));
    assert_eq!(ix.data, CLOSE_POOL.discriminator);

    // the sync path refuses before doing any work
    let err = program.build("close_pool", input, &registry).unwrap_err();
    assert!(matches!(err, ClientError::AsyncResolverRequired { .. }));
}

#[tokio::test]
async fn test_close_pool_resolver_failure_surfaces() {
    let program = AmmProgram::default();
    let mut registry = ResolverRegistry::with_builtins();
    registry.register_async(POOL_RENT_PAYER, PoolRentPayer::new(MemoryFetcher::default()));

    let pool = Pubkey::new_unique();
    let input = InstructionInput::new()
        .signer("owner", Pubkey::new_unique())
        .account("pool", pool);
    let err = program
        .build_async("close_pool", input.clone(), &registry)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Resolver(_)));
    assert!(err.to_string().contains("does not exist"));

    // an explicit rent payer skips the lookup
    let rent_payer = Pubkey::new_unique();
    let ix = program
        .build_async("close_pool", input.account("rent_payer", rent_payer), &registry)
        .await
        .unwrap();
    assert_eq!(ix.accounts[0].pubkey, rent_payer);
}
