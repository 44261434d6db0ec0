use fred_types::FredError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Take the list stored under `key`, treating a missing or null field as empty.
pub(crate) fn take_list<T: DeserializeOwned>(body: &mut Value, key: &str) -> Result<Vec<T>, FredError> {
    match body.get_mut(key).map(Value::take) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(list) => serde_json::from_value(list)
            .map_err(|e| FredError::transport(format!("malformed '{key}' payload: {e}"))),
    }
}
