use std::fmt;

use wasm_bindgen::JsValue;

/// Failures while bringing the background up. Nothing after startup can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum InitError {
    NoWindow,
    NoDocument,
    CanvasNotFound(String),
    NotACanvas(String),
    WebGl2Unsupported,
    Shader(String),
    Program(String),
    Buffer,
    InvalidConfig(String),
    /// An exception thrown by a browser API.
    Js(String),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::NoWindow => f.write_str("no window"),
            InitError::NoDocument => f.write_str("no document"),
            InitError::CanvasNotFound(id) => write!(f, "canvas #{id} not found"),
            InitError::NotACanvas(id) => write!(f, "element #{id} is not a canvas"),
            InitError::WebGl2Unsupported => f.write_str("WebGL2 not supported"),
            InitError::Shader(log) => write!(f, "shader compile failed: {log}"),
            InitError::Program(log) => write!(f, "program link failed: {log}"),
            InitError::Buffer => f.write_str("failed to create vertex buffer"),
            InitError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            InitError::Js(msg) => write!(f, "javascript error: {msg}"),
        }
    }
}

impl std::error::Error for InitError {}

impl From<JsValue> for InitError {
    fn from(value: JsValue) -> Self {
        InitError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<InitError> for JsValue {
    fn from(err: InitError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
