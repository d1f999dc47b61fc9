//! type-tag command - canonical form and bytes of a type tag

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use move_txn_kit::types::encoding::to_hex_literal;
use move_txn_kit::types::{parse_type_tag, CanonicalSerialize};

use super::output::{print_fields, print_json};
use super::CliContext;

#[derive(Parser, Debug)]
pub struct TypeTagCmd {
    /// Type tag, e.g. "0x1::coin::CoinStore<0x1::aptos_coin::AptosCoin>"
    #[arg(value_name = "TAG")]
    pub type_tag: String,
}

#[derive(Debug, Serialize)]
struct TypeTagOutput {
    canonical: String,
    bcs: String,
}

impl TypeTagCmd {
    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        let tag = parse_type_tag(&self.type_tag)
            .with_context(|| format!("invalid type tag '{}'", self.type_tag))?;
        let output = TypeTagOutput {
            canonical: tag.to_string(),
            bcs: to_hex_literal(&tag.to_bcs_bytes()?),
        };
        if ctx.json {
            print_json(&output)
        } else {
            print_fields(&[("canonical", output.canonical), ("bcs", output.bcs)]);
            Ok(())
        }
    }
}
