//! Regression transactions and keys with their recorded wire bytes.
//!
//! Every hex constant here was captured from a reference encoder and must
//! never be regenerated from this crate's own output.

use move_txn_kit::types::{
    parse_type_tag, Address, ArgumentValue, EntryFunctionPayload, Transaction, Uint128,
};

pub const CLOB: &str = "0xea383dc2819210e6e427e66b2b6aa064435bf672dc4bdc55018049f0c361d01a";

pub const PREFIX_HEX: &str = "b5e97db07fa0bd0e5598aa3643a9bc6f6693bddc1a9fec9e674a461eaa00b193";

/// Signing key for the `place_order` signature vector.
pub const ORDER_PRIVATE_KEY: &str =
    "2b248dee740ee1e8d271afb89590554cd9655ee9fae8a0ec616b95911834eb49";
pub const ORDER_PUBLIC_KEY: &str =
    "ff0ef0e5910c05c24551f135485a1fcb3bced53e20996bd26bfc23aa8816756c";
pub const ORDER_ADDRESS: &str =
    "0x767b7442b8547fa5cf50989b9b761760ca6687b83d1c23d3589a5ac8acb50639";
pub const ORDER_SIGNATURE: &str = "05c4586e2b47fa4d81a2fab4b6ac7975fb4d2a410d507bada48b8a0adff14c1dd18a9c8342076a133e7f6b358efba0bff777c3cc78f1131f5c5d617329b8200a";
pub const ORDER_HASH: &str =
    "0x6bddfe62419ef2498dd629a5a93e6fa4d2e7bb7d13be6cb61295e266041bbb21";

pub const WALLET_MNEMONIC: &str =
    "escape summer cupboard disagree coach mother permit sugar short excite road smoke";
pub const WALLET_PRIVATE_KEY: &str =
    "5fd01e9b2fb7619f5e4e861e16171956aea532520a08a610f7d74f5667144012";
pub const WALLET_PUBLIC_KEY: &str =
    "7fc96f683e07a76bac1db4dd5a5c16060f54cead4f14e9e1099b1cc3658067a3";
pub const WALLET_ADDRESS: &str =
    "0x7d928500a7c0176468d16bd391c5b551bcea5c08394b19690ec8233fd464bcef";

/// 1-of-2 and 2-of-2 accounts over (ORDER_PUBLIC_KEY, WALLET_PUBLIC_KEY).
pub const MULTI_1_OF_2: &str =
    "0x1986b1bb7894bd7c264c9d90b8e1018943def3cc62a935e2ca08fec6dd01e1cb";
pub const MULTI_2_OF_2: &str =
    "0x052259a380385515f37ae6ffcb4ce3952aa732e67e3d68c5c7bc0aabdd401307";

/// Resource account of ORDER_ADDRESS with seed "aux".
pub const AUX_RESOURCE_ADDRESS: &str =
    "0xf7729e5a04e960a8891761cbaab38f1c8185d48ebec4831da2aecc5f97f19b2b";

/// Signing message of [`market_order`].
pub const MARKET_ORDER_SIGNING_MESSAGE: &str = "b5e97db07fa0bd0e5598aa3643a9bc6f6693bddc1a9fec9e674a461eaa00b19384f372536c73df84327d2af63992f4443e2bd1aec8695fa85693e256fc1f904f030000000000000002ea383dc2819210e6e427e66b2b6aa064435bf672dc4bdc55018049f0c361d01a0b636c6f625f6d61726b65740b706c6163655f6f726465720207ea383dc2819210e6e427e66b2b6aa064435bf672dc4bdc55018049f0c361d01a0966616b655f636f696e0846616b65436f696e0107ea383dc2819210e6e427e66b2b6aa064435bf672dc4bdc55018049f0c361d01a0966616b655f636f696e034554480007ea383dc2819210e6e427e66b2b6aa064435bf672dc4bdc55018049f0c361d01a0966616b655f636f696e0846616b65436f696e0107ea383dc2819210e6e427e66b2b6aa064435bf672dc4bdc55018049f0c361d01a0966616b655f636f696e03425443000b2084f372536c73df84327d2af63992f4443e2bd1aec8695fa85693e256fc1f904f0101081e00000000000000085a000000000000000801000000000000001000000000000000000000000000000000086500000000000000080100000000000000010008bfb4b3ffffffffff08ca000000000000004e460500000000006f0000000000000000cc5e910700000022";

pub const MARKET_ORDER_SENDER: &str =
    "0x84f372536c73df84327d2af63992f4443e2bd1aec8695fa85693e256fc1f904f";

pub fn fake_coin(symbol: &str) -> String {
    format!("{CLOB}::fake_coin::FakeCoin<{CLOB}::fake_coin::{symbol}>")
}

#[allow(clippy::too_many_arguments)]
fn place_order(
    sender: Address,
    base: &str,
    quote: &str,
    limit_price: u64,
    quantity: u64,
    aux_au_to_burn_per_lot: u64,
    client_order_id: u128,
    order_type: u64,
    ticks_to_slide: u64,
    timeout_timestamp: u64,
    self_trade_action_type: u64,
) -> EntryFunctionPayload {
    let type_arguments = [base, quote]
        .iter()
        .map(|s| parse_type_tag(&fake_coin(s)).expect("fake coin type tag"))
        .collect();
    EntryFunctionPayload::new(
        format!("{CLOB}::clob_market::place_order")
            .parse()
            .expect("function tag"),
        type_arguments,
        vec![
            ArgumentValue::Address(sender),
            ArgumentValue::Bool(true),
            ArgumentValue::U64(limit_price),
            ArgumentValue::U64(quantity),
            ArgumentValue::U64(aux_au_to_burn_per_lot),
            ArgumentValue::U128(Uint128(client_order_id)),
            ArgumentValue::U64(order_type),
            ArgumentValue::U64(ticks_to_slide),
            ArgumentValue::Bool(false),
            ArgumentValue::U64(timeout_timestamp),
            ArgumentValue::U64(self_trade_action_type),
        ],
    )
}

/// Bid of 90 ETH lots at 30 against BTC on chain 34.
pub fn market_order() -> Transaction {
    let sender: Address = MARKET_ORDER_SENDER.parse().expect("sender");
    Transaction {
        sender,
        sequence_number: 3,
        payload: place_order(sender, "ETH", "BTC", 30, 90, 1, 0, 101, 1, u64::MAX - 5_000_000, 202)
            .into(),
        max_gas_amount: 345_678,
        gas_unit_price: 111,
        expiration_timestamp_secs: 32_503_680_000,
        chain_id: 34,
    }
}

/// Transaction signed by [`ORDER_PRIVATE_KEY`] in the signature vector.
pub fn signed_order() -> Transaction {
    let sender: Address = ORDER_ADDRESS.parse().expect("sender");
    Transaction {
        sender,
        sequence_number: 2625,
        payload: place_order(
            sender,
            "AUX",
            "USDC",
            50_000_000,
            50_000_000_000,
            0,
            0,
            100,
            0,
            u64::MAX,
            200,
        )
        .into(),
        max_gas_amount: 1_718_192,
        gas_unit_price: 100,
        expiration_timestamp_secs: 1_667_245_112,
        chain_id: 35,
    }
}
