use serde_json::Value;

use crate::model::config::ChainConfig;

/// Field naming the account that owns a producer JSON document
pub const OWNER_FIELD: &str = "producer_account_name";

/// Error type for building the chain command
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("producer JSON must be an object")]
    NotAnObject,
    #[error("producer JSON has no string `producer_account_name` field")]
    MissingOwner,
    #[error("could not encode producer JSON: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Read the owning account from a producer JSON document.
pub fn owner(bp: &Value) -> Result<&str, ChainError> {
    let obj = bp.as_object().ok_or(ChainError::NotAnObject)?;
    obj.get(OWNER_FIELD)
        .and_then(Value::as_str)
        .ok_or(ChainError::MissingOwner)
}

/// Largest integer a JavaScript number holds exactly (2^53 - 1)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Rewrite integral floats (`40.0`, `1e3`) as integers, the way a
/// JavaScript parse/stringify pass prints them.
fn normalize_numbers(value: &mut Value) {
    match value {
        Value::Number(n) => {
            if let Some(f) = n.as_f64()
                && n.is_f64()
                && f.is_finite()
                && f.fract() == 0.0
                && f.abs() <= MAX_SAFE_INTEGER
            {
                *n = serde_json::Number::from(f as i64);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(normalize_numbers),
        Value::Object(map) => map.values_mut().for_each(normalize_numbers),
        _ => {}
    }
}

/// The document as compact JSON, then that text as a JSON string literal.
/// Key order is kept as read.
pub fn double_encode(bp: &Value) -> Result<String, ChainError> {
    let mut bp = bp.clone();
    normalize_numbers(&mut bp);
    let compact = serde_json::to_string(&bp)?;
    Ok(serde_json::to_string(&compact)?)
}

/// A built chain command and the account it publishes for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainCommand {
    pub owner: String,
    pub line: String,
}

/// Build the single `cleos push action` line that publishes `bp` on chain.
pub fn build_command(bp: &Value, config: &ChainConfig) -> Result<ChainCommand, ChainError> {
    let owner = owner(bp)?;
    let json = double_encode(bp)?;
    let line = format!(
        "cleos push action {contract} {action} '{{\"owner\": \"{owner}\", \"json\": {json}}}' -p {owner}@{permission}",
        contract = config.contract,
        action = config.action,
        permission = config.permission,
    );
    Ok(ChainCommand {
        owner: owner.to_string(),
        line,
    })
}
