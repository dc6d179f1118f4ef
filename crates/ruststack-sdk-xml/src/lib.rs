//! XML layer for the RustStack SDK service models.
//!
//! S3 (restXml) request bodies are XML documents, and both S3 and SNS
//! (awsQuery) answer with XML. This crate provides the conversion between
//! model types and that wire format.
//!
//! # Key components
//!
//! - [`XmlSerialize`] trait and [`to_xml`] for request bodies
//! - [`XmlDeserialize`] trait, [`from_xml`] and [`from_xml_child`] for response bodies
//! - [`parse_error`] for AWS XML error documents
//!
//! # Conventions
//!
//! - Booleans: lowercase `true`/`false`
//! - Timestamps: ISO 8601 with milliseconds (`2006-02-03T16:45:09.000Z`)
//! - XML declaration: `<?xml version="1.0" encoding="UTF-8"?>`
//! - Unknown elements are skipped when reading

pub mod deserialize;
pub mod error;
pub mod serialize;

pub use deserialize::{XmlDeserialize, from_xml, from_xml_child, from_xml_or_default, root_element};
pub use error::{XmlError, parse_error};
pub use serialize::{XmlSerialize, to_xml};
