//! Shared plumbing for the RustStack SDK service models.
//!
//! Every service crate defines its operation inputs as plain structs that
//! implement [`AwsInput`]. This crate provides what those implementations
//! have in common:
//!
//! - [`Request`] / [`Response`]: protocol-neutral HTTP fragments.
//! - [`aws_enum!`]: string enums with an `Unknown` catch-all.
//! - [`uri`], [`query`], [`codec`]: label, form, timestamp, and blob encoding.
//! - [`ClientConfig`]: region and endpoint resolution.
//! - [`InputError`], [`ServiceError`], [`ClientError`]: error handling.
#![allow(clippy::module_name_repetitions)]

pub mod codec;
pub mod config;
pub mod enums;
pub mod error;
pub mod input;
pub mod query;
pub mod request;
pub mod response;
pub mod service;
pub mod uri;

pub use config::ClientConfig;
pub use enums::AwsEnum;
pub use error::{ClientError, ClientResult, InputError, ServiceError};
pub use input::{AwsInput, Validate};
pub use query::{QuerySerialize, QueryWriter};
pub use request::Request;
pub use response::{FromResponse, Response};
pub use service::{Protocol, Service};

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
