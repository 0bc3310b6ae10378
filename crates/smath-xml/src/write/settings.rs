use std::io::Write;

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use smath_model::settings::{Metadata, PageBand, PageModel};
use smath_model::Settings;

use super::{bool_attr, write_text_element};
use crate::WriteError;

pub(super) fn write_settings<W: Write>(
    writer: &mut Writer<W>,
    settings: &Settings,
) -> Result<(), WriteError> {
    let mut start = BytesStart::new("settings");
    start.push_attribute(("dpi", settings.dpi.to_string().as_str()));
    writer.write_event(Event::Start(start))?;

    writer.write_event(Event::Start(BytesStart::new("identity")))?;
    write_text_element(writer, "id", &[], &settings.doc_id.to_string())?;
    write_text_element(writer, "revision", &[], &settings.revision.to_string())?;
    writer.write_event(Event::End(BytesEnd::new("identity")))?;

    for metadata in &settings.metadata {
        write_metadata(writer, metadata)?;
    }

    writer.write_event(Event::Start(BytesStart::new("calculation")))?;
    write_text_element(writer, "precision", &[], &settings.precision.to_string())?;
    write_text_element(
        writer,
        "exponentialThreshold",
        &[],
        &settings.exponential_threshold.to_string(),
    )?;
    write_text_element(writer, "fractions", &[], &settings.fractions)?;
    writer.write_event(Event::End(BytesEnd::new("calculation")))?;

    write_page_model(writer, &settings.page_model)?;

    writer.write_event(Event::Start(BytesStart::new("dependencies")))?;
    for assembly in &settings.assemblies {
        let mut el = BytesStart::new("assembly");
        el.push_attribute(("name", assembly.name.as_str()));
        el.push_attribute(("version", assembly.version.as_str()));
        el.push_attribute(("guid", assembly.guid.as_str()));
        writer.write_event(Event::Empty(el))?;
    }
    writer.write_event(Event::End(BytesEnd::new("dependencies")))?;

    writer.write_event(Event::End(BytesEnd::new("settings")))?;
    Ok(())
}

fn write_metadata<W: Write>(writer: &mut Writer<W>, metadata: &Metadata) -> Result<(), WriteError> {
    let mut start = BytesStart::new("metadata");
    start.push_attribute(("lang", metadata.lang.as_str()));

    let mut fields = metadata.fields().peekable();
    if fields.peek().is_none() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for (name, value) in fields {
        write_text_element(writer, name, &[], value)?;
    }
    writer.write_event(Event::End(BytesEnd::new("metadata")))?;
    Ok(())
}

fn write_page_model<W: Write>(writer: &mut Writer<W>, page: &PageModel) -> Result<(), WriteError> {
    let mut start = BytesStart::new("pageModel");
    start.push_attribute(("active", bool_attr(page.active)));
    start.push_attribute(("printAreas", bool_attr(page.print_areas)));
    start.push_attribute(("simpleEqualsOnly", bool_attr(page.simple_equals_only)));
    start.push_attribute(("printBackgroundImages", bool_attr(page.print_background_images)));
    if let Some(view_mode) = &page.view_mode {
        start.push_attribute(("viewMode", view_mode.as_str()));
    }
    if let Some(print_grid) = page.print_grid {
        start.push_attribute(("printGrid", bool_attr(print_grid)));
    }
    writer.write_event(Event::Start(start))?;

    let mut paper = BytesStart::new("paper");
    paper.push_attribute(("id", page.paper.id.to_string().as_str()));
    paper.push_attribute(("orientation", page.paper.orientation.as_str()));
    paper.push_attribute(("width", page.paper.width.to_string().as_str()));
    paper.push_attribute(("height", page.paper.height.to_string().as_str()));
    writer.write_event(Event::Empty(paper))?;

    let mut margins = BytesStart::new("margins");
    margins.push_attribute(("left", page.margins.left.to_string().as_str()));
    margins.push_attribute(("right", page.margins.right.to_string().as_str()));
    margins.push_attribute(("top", page.margins.top.to_string().as_str()));
    margins.push_attribute(("bottom", page.margins.bottom.to_string().as_str()));
    writer.write_event(Event::Empty(margins))?;

    write_page_band(writer, "header", &page.header)?;
    write_page_band(writer, "footer", &page.footer)?;
    writer.write_event(Event::Empty(BytesStart::new("backgrounds")))?;

    writer.write_event(Event::End(BytesEnd::new("pageModel")))?;
    Ok(())
}

fn write_page_band<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    band: &PageBand,
) -> Result<(), WriteError> {
    write_text_element(
        writer,
        name,
        &[("alignment", band.alignment.as_str()), ("color", band.color.as_str())],
        &band.text,
    )
}
