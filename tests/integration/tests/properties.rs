//! Laws of the payload codec and the build/parse pair

use amm_client::instructions::{self, CREATE_POOL, SELL_NFT_TRADE_POOL};
use amm_client::types::{CurveType, PoolConfig, PoolType};
use amm_client::{
    decode_instruction_data, encode_instruction_data, AmmProgram, InstructionData,
    InstructionDefinition, InstructionInput, ResolverRegistry, Value,
};
use amm_codec::WireType;
use proptest::prelude::*;
use solana_sdk::pubkey::Pubkey;

fn pubkey() -> impl Strategy<Value = Pubkey> {
    any::<[u8; 32]>().prop_map(Pubkey::new_from_array)
}

/// Any well-typed value of `ty`
fn value_of(ty: &'static WireType) -> BoxedStrategy<Value> {
    match *ty {
        WireType::U8 => any::<u8>().prop_map(Value::U8).boxed(),
        WireType::U16 => any::<u16>().prop_map(Value::U16).boxed(),
        WireType::U32 => any::<u32>().prop_map(Value::U32).boxed(),
        WireType::U64 => any::<u64>().prop_map(Value::U64).boxed(),
        WireType::I64 => any::<i64>().prop_map(Value::I64).boxed(),
        WireType::Bool => any::<bool>().prop_map(Value::Bool).boxed(),
        WireType::FixedBytes(n) => proptest::collection::vec(any::<u8>(), n)
            .prop_map(Value::Bytes)
            .boxed(),
        WireType::PublicKey => pubkey().prop_map(Value::PublicKey).boxed(),
        WireType::Option(inner) => proptest::option::of(value_of(inner))
            .prop_map(|v| Value::Option(v.map(Box::new)))
            .boxed(),
        WireType::Enum(variants) => (0..variants.len() as u8).prop_map(Value::Enum).boxed(),
        WireType::Struct(fields) => fields
            .iter()
            .map(|f| value_of(&f.ty))
            .collect::<Vec<_>>()
            .prop_map(Value::Struct)
            .boxed(),
        WireType::Vec(inner) => proptest::collection::vec(value_of(inner), 0..4)
            .prop_map(Value::Vec)
            .boxed(),
    }
}

/// Any instruction of the program with well-typed arguments
fn any_instruction_data() -> impl Strategy<Value = (&'static InstructionDefinition, InstructionData)> {
    proptest::sample::select(instructions::ALL.to_vec()).prop_flat_map(|def| {
        def.args
            .iter()
            .map(|arg| value_of(&arg.ty))
            .collect::<Vec<_>>()
            .prop_map(move |values| {
                let data = InstructionData {
                    name: def.name,
                    values: def.args.iter().map(|arg| arg.name).zip(values).collect(),
                };
                (def, data)
            })
    })
}

fn pool_config() -> impl Strategy<Value = PoolConfig> {
    (
        prop_oneof![Just(PoolType::Token), Just(PoolType::Nft), Just(PoolType::Trade)],
        prop_oneof![Just(CurveType::Linear), Just(CurveType::Exponential)],
        any::<u64>(),
        any::<u64>(),
        any::<bool>(),
        any::<Option<u16>>(),
    )
        .prop_map(
            |(pool_type, curve_type, starting_price, delta, mm_compound_fees, mm_fee_bps)| {
                PoolConfig {
                    pool_type,
                    curve_type,
                    starting_price,
                    delta,
                    mm_compound_fees,
                    mm_fee_bps,
                }
            },
        )
}

fn create_pool_data() -> impl Strategy<Value = InstructionData> {
    (
        any::<[u8; 32]>(),
        pool_config(),
        proptest::option::of(pubkey()),
        proptest::option::of(pubkey()),
        proptest::option::of(pubkey()),
        any::<Option<u32>>(),
        any::<Option<u64>>(),
    )
        .prop_map(
            |(pool_id, config, currency, cosigner, maker_broker, max_sell, expire)| InstructionData {
                name: "create_pool",
                values: vec![
                    ("pool_id", pool_id.into()),
                    ("config", config.into()),
                    ("currency", currency.into()),
                    ("cosigner", cosigner.into()),
                    ("maker_broker", maker_broker.into()),
                    ("max_taker_sell_count", max_sell.into()),
                    ("expire_in_sec", expire.into()),
                ],
            },
        )
}

fn build(name: &str, input: InstructionInput) -> Vec<u8> {
    AmmProgram::default()
        .build(name, input, &ResolverRegistry::with_builtins())
        .unwrap()
        .data
}

proptest! {
    #[test]
    fn prop_create_pool_payload_round_trips(data in create_pool_data()) {
        let bytes = encode_instruction_data(&CREATE_POOL, &data).unwrap();
        prop_assert!(bytes.starts_with(CREATE_POOL.discriminator));
        prop_assert_eq!(decode_instruction_data(&CREATE_POOL, &bytes).unwrap(), data);
    }

    #[test]
    fn prop_every_payload_round_trips((def, data) in any_instruction_data()) {
        let bytes = encode_instruction_data(def, &data).unwrap();
        prop_assert!(bytes.starts_with(def.discriminator));
        prop_assert_eq!(decode_instruction_data(def, &bytes).unwrap(), data);
    }

    /// Omitting an optional argument encodes the same bytes as passing its
    /// default, whichever subset is passed explicitly
    #[test]
    fn prop_create_pool_omitted_args_encode_as_defaults(
        pool_id in any::<[u8; 32]>(),
        config in pool_config(),
        explicit in any::<[bool; 5]>(),
    ) {
        let owner = Pubkey::new_unique();
        let whitelist = Pubkey::new_unique();
        let base = || {
            InstructionInput::new()
                .signer("owner", owner)
                .account("whitelist", whitelist)
                .arg("pool_id", pool_id)
                .arg("config", config)
        };
        let optional = [
            "currency",
            "cosigner",
            "maker_broker",
            "max_taker_sell_count",
            "expire_in_sec",
        ];
        let mut with_defaults = base();
        for (name, set) in optional.into_iter().zip(explicit) {
            if set {
                with_defaults = with_defaults.arg(name, Value::none());
            }
        }

        prop_assert_eq!(build("create_pool", base()), build("create_pool", with_defaults));
    }

    #[test]
    fn prop_edit_pool_omitted_args_encode_as_defaults(explicit in any::<[bool; 5]>()) {
        let owner = Pubkey::new_unique();
        let pool = Pubkey::new_unique();
        let base = || InstructionInput::new().signer("owner", owner).account("pool", pool);
        let defaults = [
            ("new_config", Value::none()),
            ("cosigner", Value::none()),
            ("max_taker_sell_count", Value::none()),
            ("expire_in_sec", Value::none()),
            ("reset_price_offset", Value::Bool(false)),
        ];
        let mut with_defaults = base();
        for ((name, value), set) in defaults.into_iter().zip(explicit) {
            if set {
                with_defaults = with_defaults.arg(name, value);
            }
        }

        prop_assert_eq!(build("edit_pool", base()), build("edit_pool", with_defaults));
    }

    #[test]
    fn prop_truncated_payload_never_decodes(data in create_pool_data(), cut in 1usize..40) {
        let bytes = encode_instruction_data(&CREATE_POOL, &data).unwrap();
        let cut = cut.min(bytes.len());
        prop_assert!(decode_instruction_data(&CREATE_POOL, &bytes[..bytes.len() - cut]).is_err());
    }

    /// Optional accounts present or not, parse(build(x)) gives back x
    #[test]
    fn prop_parse_inverts_build(
        min_price in any::<u64>(),
        royalty in any::<Option<u16>>(),
        shared_escrow in proptest::option::of(pubkey()),
        cosigner in proptest::option::of(pubkey()),
        maker_broker in proptest::option::of(pubkey()),
        creators in proptest::collection::vec(pubkey(), 0..4),
    ) {
        let program = AmmProgram::default();
        let mut input = InstructionInput::new()
            .account("owner", Pubkey::new_unique())
            .signer("taker", Pubkey::new_unique())
            .account("pool", Pubkey::new_unique())
            .account("whitelist", Pubkey::new_unique())
            .account("mint", Pubkey::new_unique())
            .arg("min_price", min_price)
            .arg("optional_royalty_pct", royalty)
            .remaining_accounts(creators.clone());
        let optional = [
            ("shared_escrow", shared_escrow),
            ("cosigner", cosigner),
            ("maker_broker", maker_broker),
        ];
        for (name, address) in optional {
            if let Some(address) = address {
                input = input.account(name, address);
            }
        }
        let supplied = input.clone();

        let ix = program
            .build("sell_nft_trade_pool", input, &ResolverRegistry::with_builtins())
            .unwrap();
        prop_assert_eq!(ix.accounts.len(), SELL_NFT_TRADE_POOL.accounts.len() + creators.len());

        let parsed = program.parse(&ix).unwrap();
        for (name, account) in &supplied.accounts {
            prop_assert_eq!(parsed.account(name), Some(account.address));
        }
        for (name, address) in optional {
            prop_assert_eq!(parsed.account(name), address);
        }
        prop_assert_eq!(parsed.data.get("min_price"), Some(&Value::U64(min_price)));
        prop_assert_eq!(parsed.data.get("optional_royalty_pct"), Some(&Value::from(royalty)));
        let remaining: Vec<Pubkey> = parsed.remaining_accounts.iter().map(|m| m.pubkey).collect();
        prop_assert_eq!(remaining, creators);
    }
}
