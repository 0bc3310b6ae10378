//! Worksheet → `.sm` XML.
//!
//! The document is produced in a single pass over a [`FinalizedWorksheet`]:
//! XML declaration, the `application` processing instruction, then the
//! `regions` root holding the settings block and every region.

mod regions;
mod settings;

use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event};
use quick_xml::Writer;
use smath_model::constants::{APP_PROGID, APP_VERSION, SMATH_NAMESPACE};
use smath_model::{Expr, FinalizedWorksheet, Worksheet};

use crate::WriteError;

/// Serializes `worksheet` with two-space indentation.
pub fn to_xml_bytes(worksheet: &Worksheet) -> Result<Vec<u8>, WriteError> {
    let finalized = worksheet.finalize();
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_worksheet(&mut writer, &finalized)?;
    Ok(writer.into_inner())
}

pub fn to_xml_string(worksheet: &Worksheet) -> Result<String, WriteError> {
    Ok(String::from_utf8(to_xml_bytes(worksheet)?)?)
}

/// Writes a complete document, prolog included.
pub fn write_worksheet<W: Write>(
    writer: &mut Writer<W>,
    worksheet: &FinalizedWorksheet<'_>,
) -> Result<(), WriteError> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), Some("yes"))))?;
    writer.write_event(Event::PI(BytesPI::new(format!(
        "application progid=\"{APP_PROGID}\" version=\"{APP_VERSION}\""
    ))))?;

    let mut root = BytesStart::new("regions");
    root.push_attribute(("xmlns", SMATH_NAMESPACE));
    writer.write_event(Event::Start(root))?;

    settings::write_settings(writer, worksheet.settings)?;
    for placed in &worksheet.regions {
        regions::write_region(writer, placed)?;
    }

    writer.write_event(Event::End(BytesEnd::new("regions")))?;
    Ok(())
}

fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// `<name attrs...>text</name>`
fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    attrs: &[(&str, &str)],
    text: &str,
) -> Result<(), WriteError> {
    let mut start = BytesStart::new(name);
    for attr in attrs {
        start.push_attribute(*attr);
    }
    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// `<name attrs...>` followed by one `<e>` per token.
fn write_token_block<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    attrs: &[(&str, &str)],
    expr: &Expr,
) -> Result<(), WriteError> {
    let mut start = BytesStart::new(name);
    for attr in attrs {
        start.push_attribute(*attr);
    }
    if expr.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for element in expr {
        let args = element.args.map(|args| args.to_string());
        let mut attrs: Vec<(&str, &str)> = vec![("type", element.kind.as_str())];
        if let Some(style) = element.style {
            attrs.push(("style", style.as_str()));
        }
        if element.is_preserved() {
            attrs.push(("preserve", "true"));
        }
        if let Some(args) = &args {
            attrs.push(("args", args.as_str()));
        }
        write_text_element(writer, "e", &attrs, &element.value)?;
    }
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
