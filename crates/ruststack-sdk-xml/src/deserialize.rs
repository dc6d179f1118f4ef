//! XML deserialization: parsing response bodies into model types.
//!
//! Implementations follow one pattern: the caller consumes the opening tag,
//! the implementation reads child elements until the matching end tag and
//! skips anything it does not know.

use chrono::{DateTime, Utc};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use ruststack_sdk_core::codec::parse_date_time;

use crate::error::XmlError;

/// Trait for deserializing model types from XML.
pub trait XmlDeserialize: Sized {
    /// Deserialize an instance from the given XML reader.
    ///
    /// The reader is positioned just after the opening tag of this element.
    /// The implementation should read all child content and return when
    /// the matching end tag is consumed.
    ///
    /// # Errors
    ///
    /// Returns `XmlError` if the XML is malformed.
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError>;
}

/// Deserialize an XML document whose root element is the value itself.
///
/// # Errors
///
/// Returns `XmlError` if the XML is malformed or has no root element.
pub fn from_xml<T: XmlDeserialize>(xml: &[u8]) -> Result<T, XmlError> {
    let mut reader = new_reader(xml);

    // Skip the XML declaration and find the root element.
    loop {
        match reader.read_event()? {
            Event::Start(_) => {
                return T::deserialize_xml(&mut reader);
            }
            Event::Eof => {
                return Err(XmlError::MissingElement("root element".to_owned()));
            }
            // Skip declaration, comments, processing instructions, whitespace.
            _ => {}
        }
    }
}

/// Like [`from_xml`], but an empty body or a self-closing root
/// (`<DeleteResult/>`) yields `T::default()`.
///
/// # Errors
///
/// Returns `XmlError` if the XML is malformed.
pub fn from_xml_or_default<T: XmlDeserialize + Default>(xml: &[u8]) -> Result<T, XmlError> {
    let mut reader = new_reader(xml);
    loop {
        match reader.read_event()? {
            Event::Start(_) => return T::deserialize_xml(&mut reader),
            Event::Empty(_) | Event::Eof => return Ok(T::default()),
            _ => {}
        }
    }
}

/// Local name of the document root, or `None` for an empty body.
///
/// S3 can answer `200 OK` with an `<Error>` document; callers use this to
/// tell the two apart before decoding.
///
/// # Errors
///
/// Returns `XmlError` if the XML is malformed.
pub fn root_element(xml: &[u8]) -> Result<Option<String>, XmlError> {
    let mut reader = new_reader(xml);
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => return element_name(&e).map(Some),
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

/// Deserialize the child element `child` of the document root.
///
/// Query protocol responses wrap the result twice:
/// `<PublishResponse><PublishResult>...</PublishResult><ResponseMetadata/></PublishResponse>`.
/// A missing child yields `T::default()`.
///
/// # Errors
///
/// Returns `XmlError` if the XML is malformed or has no root element.
pub fn from_xml_child<T: XmlDeserialize + Default>(xml: &[u8], child: &str) -> Result<T, XmlError> {
    let mut reader = new_reader(xml);

    loop {
        match reader.read_event()? {
            Event::Start(_) => break,
            Event::Empty(_) => return Ok(T::default()),
            Event::Eof => return Err(XmlError::MissingElement("root element".to_owned())),
            _ => {}
        }
    }

    let mut found = None;
    for_each_child(&mut reader, "root", |reader, name| {
        if name == child && found.is_none() {
            found = Some(T::deserialize_xml(reader)?);
        } else {
            skip_element(reader)?;
        }
        Ok(())
    })?;
    Ok(found.unwrap_or_default())
}

// Text is not trimmed: entity references split text into several events and
// the whitespace around them is significant.
fn new_reader(xml: &[u8]) -> Reader<&[u8]> {
    Reader::from_reader(xml)
}

/// Local name of an element as a string, without any namespace prefix.
///
/// # Errors
///
/// Returns [`XmlError::ParseError`] for names that are not UTF-8.
pub fn element_name(e: &BytesStart<'_>) -> Result<String, XmlError> {
    let local = e.local_name();
    std::str::from_utf8(local.as_ref())
        .map(str::to_owned)
        .map_err(|e| XmlError::ParseError(e.to_string()))
}

// Stands in for a self-closing child: one start tag, one end tag, no content.
const EMPTY_ELEMENT: &[u8] = b"<e></e>";

/// Visit every child element of the current element.
///
/// The callback receives each child's local name with the reader positioned
/// after its opening tag, and must consume the child (read or skip it).
/// Self-closing children (`<Prefix/>`) are visited as empty elements, so
/// they read the same as `<Prefix></Prefix>`.
/// Returns once the end tag of the current element is consumed.
///
/// # Errors
///
/// Returns `XmlError` on malformed XML or an early end of input.
pub fn for_each_child<F>(
    reader: &mut Reader<&[u8]>,
    context: &str,
    mut visit: F,
) -> Result<(), XmlError>
where
    F: FnMut(&mut Reader<&[u8]>, &str) -> Result<(), XmlError>,
{
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = element_name(&e)?;
                visit(reader, &name)?;
            }
            Event::Empty(e) => {
                let name = element_name(&e)?;
                let mut empty = Reader::from_reader(EMPTY_ELEMENT);
                empty.read_event()?;
                visit(&mut empty, &name)?;
            }
            Event::End(_) => return Ok(()),
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(format!(
                    "unexpected EOF in {context}"
                )));
            }
            _ => {}
        }
    }
}

/// Read the text content of the current element and consume its end tag.
///
/// Expects the reader to be positioned right after a `Start` event. Entity
/// and character references are resolved.
///
/// # Errors
///
/// Returns `XmlError` on malformed text or an early end of input.
pub fn read_text_content(reader: &mut Reader<&[u8]>) -> Result<String, XmlError> {
    let mut text = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(&decoded);
            }
            Event::CData(e) => {
                let raw: &[u8] = &e;
                text.push_str(&String::from_utf8_lossy(raw));
            }
            Event::GeneralRef(e) => {
                let raw: &[u8] = &e;
                text.push(resolve_reference(raw)?);
            }
            Event::Start(_) => skip_element(reader)?,
            Event::End(_) => {
                return Ok(text);
            }
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF while reading text content".to_owned(),
                ));
            }
            _ => {}
        }
    }
}

/// Resolve `amp`, `lt`, `gt`, `quot`, `apos` and `#NN` / `#xNN` references.
pub(crate) fn resolve_reference(raw: &[u8]) -> Result<char, XmlError> {
    let name = std::str::from_utf8(raw).map_err(|e| XmlError::ParseError(e.to_string()))?;
    let resolved = match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => name.strip_prefix('#').and_then(|code| {
            let value = match code.strip_prefix('x') {
                Some(hex) => u32::from_str_radix(hex, 16).ok(),
                None => code.parse::<u32>().ok(),
            };
            value.and_then(char::from_u32)
        }),
    };
    resolved.ok_or_else(|| XmlError::ParseError(format!("unknown entity reference: &{name};")))
}

/// Skip over an element and all its children.
///
/// # Errors
///
/// Returns `XmlError` on malformed XML or an early end of input.
pub fn skip_element(reader: &mut Reader<&[u8]>) -> Result<(), XmlError> {
    let mut depth: u32 = 1;
    loop {
        match reader.read_event()? {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF while skipping element".to_owned(),
                ));
            }
            _ => {}
        }
    }
}

/// Deserialize a wrapped list where each item is the element `item_tag`.
///
/// The reader is positioned after the wrapper's opening tag.
///
/// # Errors
///
/// Returns `XmlError` if any item fails to deserialize.
pub fn deserialize_list<T: XmlDeserialize>(
    reader: &mut Reader<&[u8]>,
    item_tag: &str,
) -> Result<Vec<T>, XmlError> {
    let mut items = Vec::new();
    for_each_child(reader, "list", |reader, name| {
        if name == item_tag {
            items.push(T::deserialize_xml(reader)?);
        } else {
            skip_element(reader)?;
        }
        Ok(())
    })?;
    Ok(items)
}

/// Read the text of a wrapped list of strings (`<Items><member>a</member></Items>`).
///
/// # Errors
///
/// Returns `XmlError` on malformed XML.
pub fn deserialize_text_list(
    reader: &mut Reader<&[u8]>,
    item_tag: &str,
) -> Result<Vec<String>, XmlError> {
    let mut items = Vec::new();
    for_each_child(reader, "list", |reader, name| {
        if name == item_tag {
            items.push(read_text_content(reader)?);
        } else {
            skip_element(reader)?;
        }
        Ok(())
    })?;
    Ok(items)
}

/// Parse a boolean from XML text ("true"/"false"), ignoring surrounding
/// whitespace.
///
/// # Errors
///
/// Returns [`XmlError::ParseError`] for any other text.
pub fn parse_bool(s: &str) -> Result<bool, XmlError> {
    match s.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(XmlError::ParseError(format!("invalid boolean: {s}"))),
    }
}

/// Parse an i32 from XML text, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns [`XmlError::ParseError`] for non-numeric text.
pub fn parse_i32(s: &str) -> Result<i32, XmlError> {
    s.trim()
        .parse::<i32>()
        .map_err(|e| XmlError::ParseError(format!("invalid i32 '{s}': {e}")))
}

/// Parse an i64 from XML text, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns [`XmlError::ParseError`] for non-numeric text.
pub fn parse_i64(s: &str) -> Result<i64, XmlError> {
    s.trim()
        .parse::<i64>()
        .map_err(|e| XmlError::ParseError(format!("invalid i64 '{s}': {e}")))
}

/// Parse an ISO 8601 timestamp from XML text.
///
/// # Errors
///
/// Returns [`XmlError::ParseError`] for malformed timestamps.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, XmlError> {
    parse_date_time(s.trim()).ok_or_else(|| XmlError::ParseError(format!("invalid timestamp '{s}'")))
}

/// Read the current element as a boolean.
///
/// # Errors
///
/// See [`read_text_content`] and [`parse_bool`].
pub fn read_bool(reader: &mut Reader<&[u8]>) -> Result<bool, XmlError> {
    parse_bool(&read_text_content(reader)?)
}

/// Read the current element as an i32.
///
/// # Errors
///
/// See [`read_text_content`] and [`parse_i32`].
pub fn read_i32(reader: &mut Reader<&[u8]>) -> Result<i32, XmlError> {
    parse_i32(&read_text_content(reader)?)
}

/// Read the current element as an i64.
///
/// # Errors
///
/// See [`read_text_content`] and [`parse_i64`].
pub fn read_i64(reader: &mut Reader<&[u8]>) -> Result<i64, XmlError> {
    parse_i64(&read_text_content(reader)?)
}

/// Read the current element as a timestamp.
///
/// # Errors
///
/// See [`read_text_content`] and [`parse_timestamp`].
pub fn read_timestamp(reader: &mut Reader<&[u8]>) -> Result<DateTime<Utc>, XmlError> {
    parse_timestamp(&read_text_content(reader)?)
}

/// Read the current element into a model enum. Unknown values are kept.
///
/// # Errors
///
/// See [`read_text_content`].
pub fn read_enum<E: for<'a> From<&'a str>>(reader: &mut Reader<&[u8]>) -> Result<E, XmlError> {
    Ok(E::from(read_text_content(reader)?.as_str()))
}
