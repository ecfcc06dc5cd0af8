//! Catalog engine: REST client for the products backend and effect execution.
mod client;
mod engine;
mod settings;
mod types;

pub use client::{ProductApi, ReqwestProductClient};
pub use engine::{EngineHandle, EventSink};
pub use settings::{
    ClientSettings, BASE_URL_ENV, DEFAULT_API_PREFIX, DEFAULT_BASE_URL, DEFAULT_USER_AGENT,
};
pub use types::{ClientError, EngineError, EngineEvent};
