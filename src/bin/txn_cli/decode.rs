//! decode command - read raw transaction bytes back

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use serde_json::Value;

use move_txn_kit::types::encoding::{parse_hex_bytes, sha3_256, to_hex_literal};
use move_txn_kit::types::{parse_type_tag, DecodedTransaction, RAW_TRANSACTION_PREFIX};

use super::output::{print_fields, print_json};
use super::CliContext;

#[derive(Parser, Debug)]
pub struct DecodeCmd {
    /// Raw transaction hex (a signing message with --signing-message)
    #[arg(value_name = "HEX")]
    pub hex: String,

    /// Input is a signing message and must start with the raw transaction prefix
    #[arg(long)]
    pub signing_message: bool,

    /// Parameter type of each argument, in order; without them arguments stay hex
    #[arg(long = "param-type", value_name = "TYPE")]
    pub param_types: Vec<String>,
}

#[derive(Debug, Serialize)]
struct DecodeOutput {
    sender: String,
    sequence_number: String,
    function: String,
    type_arguments: Vec<String>,
    arguments: Vec<Value>,
    max_gas_amount: String,
    gas_unit_price: String,
    expiration_timestamp_secs: String,
    chain_id: u8,
    hash: String,
}

impl DecodeCmd {
    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        let bytes = parse_hex_bytes(&self.hex).context("invalid transaction hex")?;
        let (decoded, body) = if self.signing_message {
            let decoded = DecodedTransaction::decode_signing_message(&bytes)
                .context("failed to decode transaction")?;
            (decoded, &bytes[RAW_TRANSACTION_PREFIX.len()..])
        } else {
            let decoded =
                DecodedTransaction::decode(&bytes).context("failed to decode transaction")?;
            (decoded, &bytes[..])
        };
        let hash = to_hex_literal(&sha3_256(&[RAW_TRANSACTION_PREFIX.as_slice(), body]));

        let arguments = if self.param_types.is_empty() {
            decoded
                .payload
                .arguments
                .iter()
                .map(|raw| Value::String(to_hex_literal(raw)))
                .collect()
        } else {
            let params = self
                .param_types
                .iter()
                .map(|t| parse_type_tag(t).with_context(|| format!("invalid type '{t}'")))
                .collect::<Result<Vec<_>>>()?;
            decoded
                .payload
                .typed_arguments(&params)
                .context("arguments do not match --param-type")?
                .iter()
                .map(|a| a.to_json())
                .collect()
        };

        let output = DecodeOutput {
            sender: decoded.sender.to_string(),
            sequence_number: decoded.sequence_number.to_string(),
            function: decoded.payload.function.to_string(),
            type_arguments: decoded
                .payload
                .type_arguments
                .iter()
                .map(ToString::to_string)
                .collect(),
            arguments,
            max_gas_amount: decoded.max_gas_amount.to_string(),
            gas_unit_price: decoded.gas_unit_price.to_string(),
            expiration_timestamp_secs: decoded.expiration_timestamp_secs.to_string(),
            chain_id: decoded.chain_id,
            hash,
        };

        if ctx.json {
            return print_json(&output);
        }
        let mut fields = vec![
            ("function", output.function.clone()),
            ("sender", output.sender.clone()),
            ("sequence_number", output.sequence_number.clone()),
        ];
        for tag in &output.type_arguments {
            fields.push(("type_argument", tag.clone()));
        }
        for arg in &output.arguments {
            fields.push(("argument", arg.to_string()));
        }
        fields.extend([
            ("max_gas_amount", output.max_gas_amount.clone()),
            ("gas_unit_price", output.gas_unit_price.clone()),
            ("expiration", output.expiration_timestamp_secs.clone()),
            ("chain_id", output.chain_id.to_string()),
            ("hash", output.hash.clone()),
        ]);
        print_fields(&fields);
        Ok(())
    }
}
