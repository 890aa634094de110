use std::{fmt, io::Read, path::Path};

use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer,
};
use serde_json::Value;

use crate::errors::CliError;

/// Pairs as they appear in an input document: either `{"k": "v"}` or `[["k", "v"]]`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PairsDocument {
    Pairs(Vec<(String, String)>),
    Object(ObjectEntries),
}

/// Every entry of a JSON object in document order, repeated keys included.
#[derive(Debug)]
struct ObjectEntries(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for ObjectEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = ObjectEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0).min(4096));
                while let Some(entry) = access.next_entry::<String, Value>()? {
                    entries.push(entry);
                }
                Ok(ObjectEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Parses a JSON document into pairs, in document order. Non-string object values are
/// kept as their JSON text.
pub fn parse_pairs(text: &str) -> Result<Vec<(String, String)>, CliError> {
    let document: PairsDocument = serde_json::from_str(text).map_err(|e| {
        log::error!("[Input] invalid pairs document: {e}");
        CliError::InputInvalid
    })?;
    let pairs = match document {
        PairsDocument::Pairs(pairs) => pairs,
        PairsDocument::Object(ObjectEntries(entries)) => entries
            .into_iter()
            .map(|(key, value)| match value {
                Value::String(value) => (key, value),
                other => (key, other.to_string()),
            })
            .collect(),
    };
    log::debug!("[Input] parsed {} pairs", pairs.len());
    Ok(pairs)
}

/// Reads pairs from `file`, or from stdin when no file is given.
pub fn read_pairs(file: Option<&Path>) -> Result<Vec<(String, String)>, CliError> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            log::error!("[Input] cannot read {}: {e}", path.display());
            CliError::InputUnreadable
        })?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text).map_err(|e| {
                log::error!("[Input] cannot read stdin: {e}");
                CliError::InputUnreadable
            })?;
            text
        }
    };
    parse_pairs(&text)
}
