//! Client for the Runware image inference API.
//!
//! Loosely typed option maps (or typed [`TaskOptions`]) are normalized into
//! [`TaskDescriptor`]s, sent as a single batched POST, and the provider's
//! mixed success/error envelope comes back as typed [`GenerationRecord`]s or
//! a [`RunwareError`].

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod runware;

pub use config::RunwareConfig;
pub use error::{Result, RunwareError};
pub use models::*;
pub use runware::{
    configure, HttpRequest, HttpResponse, HttpTransport, OptionMap, ReqwestTransport,
    RunwareClient,
};
