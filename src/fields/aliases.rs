//! Alias table spec (aliases.json): short field aliases -> dotted paths.
//!
//! JSON shape:
//! {
//!   "aliases": [
//!     { "name": "transactionId", "path": "transaction.id" },
//!     { "name": "errorExceptionMessage", "path": "error.exception[0].message" },
//!     ...
//!   ]
//! }
//!
//! We validate alias names, parse every path into a FieldPath, and reject
//! duplicates. The table is immutable after load.

use crate::fields::FieldPath;
use anyhow::Context;
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Deserialize)]
pub struct AliasesSpec {
    #[serde(default)]
    pub aliases: Vec<RawAlias>,
}

/// Raw alias entry as it appears in the alias file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAlias {
    pub name: String,
    pub path: String,
}

/// Validated alias table ready for extraction.
#[derive(Debug, Clone)]
pub struct AliasTable {
    pub entries: BTreeMap<String, FieldPath>,
}

impl AliasesSpec {
    /// Parse every path, ensure legal + unique alias names.
    pub fn validate_and_build(&self) -> anyhow::Result<AliasTable> {
        use anyhow::bail;

        let name_re = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")?;

        let mut entries: BTreeMap<String, FieldPath> = BTreeMap::new();
        for raw in &self.aliases {
            if !name_re.is_match(&raw.name) {
                bail!("invalid alias name: {:?}", raw.name);
            }

            let path =
                FieldPath::parse(&raw.path).with_context(|| format!("alias {}", raw.name))?;

            if entries.insert(raw.name.clone(), path).is_some() {
                bail!("duplicate alias name: {}", raw.name);
            }
        }

        if entries.is_empty() {
            bail!("alias table contained no entries");
        }

        Ok(AliasTable { entries })
    }
}
