//! XML serialization: converting model types to request bodies.
//!
//! Implementors of [`XmlSerialize`] write only their members. The element
//! that wraps them is written by the caller, since the same shape appears
//! under different member names (`<Object>` in `Delete`, `<Part>` in
//! `CompleteMultipartUpload`).

use std::borrow::Cow;
use std::io::{self, Write};

use chrono::{DateTime, Utc};
use quick_xml::Writer;
use quick_xml::escape::escape;
use quick_xml::events::{BytesDecl, BytesText, Event};
use ruststack_sdk_core::AwsEnum;
use ruststack_sdk_core::codec::format_date_time;

use crate::error::XmlError;

/// Trait for serializing model types to XML.
///
/// Uses `io::Result` because `quick_xml::Writer` closures require `io::Result<()>`.
pub trait XmlSerialize {
    /// Serialize this value's members as child elements into the given writer.
    ///
    /// # Errors
    ///
    /// Returns `io::Error` if writing to the underlying writer fails.
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()>;
}

/// Serialize a value as a complete XML document.
///
/// Produces the XML declaration and a root element, with an `xmlns`
/// attribute when a namespace is given.
///
/// # Errors
///
/// Returns `XmlError` if serialization fails.
pub fn to_xml<T: XmlSerialize>(
    root_element: &str,
    namespace: Option<&str>,
    value: &T,
) -> Result<Vec<u8>, XmlError> {
    let mut buf = Vec::with_capacity(512);
    let mut writer = Writer::new(&mut buf);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = writer.create_element(root_element);
    if let Some(ns) = namespace {
        root = root.with_attribute(("xmlns", ns));
    }
    root.write_inner_content(|w| value.serialize_xml(w))?;

    Ok(buf)
}

/// Write a simple `<tag>text</tag>` element.
///
/// Carriage returns and line feeds are written as character references so
/// that line-ending normalization on the receiving side keeps them intact.
pub fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    text: &str,
) -> io::Result<()> {
    writer
        .create_element(tag)
        .write_text_content(BytesText::from_escaped(escape_text(text)))?;
    Ok(())
}

fn escape_text(text: &str) -> Cow<'_, str> {
    let escaped = escape(text);
    if escaped.contains(['\r', '\n']) {
        Cow::Owned(escaped.replace('\r', "&#xD;").replace('\n', "&#xA;"))
    } else {
        escaped
    }
}

/// Write `<tag>text</tag>` only if the value is `Some`.
pub fn write_optional_text<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<&str>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, v)?;
    }
    Ok(())
}

/// Write `<tag>value</tag>` for an optional boolean.
pub fn write_optional_bool<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<bool>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, if v { "true" } else { "false" })?;
    }
    Ok(())
}

/// Write `<tag>value</tag>` for an optional i32.
pub fn write_optional_i32<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<i32>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, &v.to_string())?;
    }
    Ok(())
}

/// Write `<tag>value</tag>` for an optional i64.
pub fn write_optional_i64<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<i64>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, &v.to_string())?;
    }
    Ok(())
}

/// Write `<tag>value</tag>` for an optional model enum.
pub fn write_optional_enum<W: Write, E: AwsEnum>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<&E>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, v.as_str())?;
    }
    Ok(())
}

/// Write `<tag>iso8601</tag>` for an optional timestamp.
pub fn write_optional_timestamp<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<&DateTime<Utc>>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, &format_date_time(v))?;
    }
    Ok(())
}

/// Write `<tag>...</tag>` with the members of a nested structure.
pub fn write_element<W: Write, T: XmlSerialize>(
    writer: &mut Writer<W>,
    tag: &str,
    value: &T,
) -> io::Result<()> {
    writer
        .create_element(tag)
        .write_inner_content(|w| value.serialize_xml(w))?;
    Ok(())
}

/// Write a nested structure only if it is `Some`.
pub fn write_optional_element<W: Write, T: XmlSerialize>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<&T>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_element(writer, tag, v)?;
    }
    Ok(())
}

/// Write a flattened list: one `<tag>` element per item, no wrapper.
pub fn write_flattened<W: Write, T: XmlSerialize>(
    writer: &mut Writer<W>,
    tag: &str,
    items: &[T],
) -> io::Result<()> {
    for item in items {
        write_element(writer, tag, item)?;
    }
    Ok(())
}

/// Write a flattened list of strings: one `<tag>text</tag>` per item.
pub fn write_text_list<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    items: &[String],
) -> io::Result<()> {
    for item in items {
        write_text_element(writer, tag, item)?;
    }
    Ok(())
}

/// Write a wrapped list: `<wrapper><tag>..</tag><tag>..</tag></wrapper>`.
pub fn write_wrapped_list<W: Write, T: XmlSerialize>(
    writer: &mut Writer<W>,
    wrapper: &str,
    tag: &str,
    items: &[T],
) -> io::Result<()> {
    writer
        .create_element(wrapper)
        .write_inner_content(|w| write_flattened(w, tag, items))?;
    Ok(())
}
