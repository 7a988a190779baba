use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures at the boundary with the browser.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("no global window available")]
    NoWindow,
    #[error("node ref is not attached to an element")]
    Detached,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        HostError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Malformed scroll offset definition such as `"middle 80%"`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OffsetParseError {
    #[error("empty offset definition")]
    Empty,
    #[error("unknown edge `{0}`")]
    UnknownEdge(String),
    #[error("expected at most two edges, got `{0}`")]
    TooManyEdges(String),
}
