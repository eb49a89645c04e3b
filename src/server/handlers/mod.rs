//! Handler module declarations and re-exports

pub mod circles;
pub mod construct;
pub mod measure;

pub use circles::*;
pub use construct::*;
pub use measure::*;

use anyhow::Context;
use serde::de::DeserializeOwned;

/// Decode request params into `T`; missing params decode as an empty object
pub(crate) fn parse_params<T: DeserializeOwned>(
    params: Option<serde_json::Value>,
) -> anyhow::Result<T> {
    let value = params.unwrap_or_else(|| serde_json::json!({}));
    serde_json::from_value(value).context("invalid params")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Params {
        ids: Option<Vec<u64>>,
    }

    #[test]
    fn test_missing_params_decode_as_empty_object() {
        let params: Params = parse_params(None).unwrap();
        assert!(params.ids.is_none());
    }

    #[test]
    fn test_bad_params_report_context() {
        let err = parse_params::<Params>(Some(serde_json::json!({"ids": "x"}))).unwrap_err();
        assert!(format!("{:#}", err).starts_with("invalid params: "));
    }
}
