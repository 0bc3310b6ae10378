use std::io::Write;

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use smath_model::constants::{FONT_DEFAULT, PLACEHOLDER};
use smath_model::expr::placeholder;
use smath_model::{
    AreaRegion, MathRegion, PictureRegion, PlacedRegion, PlotRegion, RegionContent, TextRegion,
};

use super::{bool_attr, write_text_element, write_token_block};
use crate::WriteError;

const AXES: [&str; 3] = ["x", "y", "z"];

pub(super) fn write_region<W: Write>(
    writer: &mut Writer<W>,
    placed: &PlacedRegion<'_>,
) -> Result<(), WriteError> {
    match &placed.region.content {
        RegionContent::Text(text) => write_leaf(writer, placed, |w| write_text(w, text)),
        RegionContent::Math(math) => write_leaf(writer, placed, |w| write_math(w, placed, math)),
        RegionContent::Plot(plot) => write_leaf(writer, placed, |w| write_plot(w, plot)),
        RegionContent::Picture(picture) => {
            write_leaf(writer, placed, |w| write_picture(w, picture))
        }
        RegionContent::Area(area) => write_area(writer, placed, area),
    }
}

/// Attributes of the `<region>` element of any non-area region.
fn region_start(placed: &PlacedRegion<'_>) -> BytesStart<'static> {
    let region = placed.region;
    let mut start = BytesStart::new("region");
    start.push_attribute(("id", placed.id.to_string().as_str()));
    if let Some(left) = placed.left {
        start.push_attribute(("left", left.to_string().as_str()));
    }
    start.push_attribute(("top", placed.top.to_string().as_str()));
    if let Some(width) = region.width {
        start.push_attribute(("width", width.to_string().as_str()));
    }
    if let Some(height) = region.height {
        start.push_attribute(("height", height.to_string().as_str()));
    }
    start.push_attribute(("color", region.style.color.as_str()));
    start.push_attribute(("bgColor", region.style.bg_color.as_str()));
    if region.style.font_size != FONT_DEFAULT {
        start.push_attribute(("fontSize", region.style.font_size.to_string().as_str()));
    }
    if region.style.border {
        start.push_attribute(("border", "true"));
    }
    if let RegionContent::Plot(plot) = &region.content {
        if !plot.show_input_data {
            start.push_attribute(("showInputData", "False"));
        }
    }
    start
}

fn write_leaf<W: Write>(
    writer: &mut Writer<W>,
    placed: &PlacedRegion<'_>,
    body: impl FnOnce(&mut Writer<W>) -> Result<(), WriteError>,
) -> Result<(), WriteError> {
    writer.write_event(Event::Start(region_start(placed)))?;
    body(writer)?;
    writer.write_event(Event::End(BytesEnd::new("region")))?;
    Ok(())
}

fn write_text<W: Write>(writer: &mut Writer<W>, text: &TextRegion) -> Result<(), WriteError> {
    for paragraph in &text.paragraphs {
        let mut start = BytesStart::new("text");
        start.push_attribute(("lang", paragraph.lang.as_str()));
        writer.write_event(Event::Start(start))?;
        let bold: &[(&str, &str)] = if text.bold { &[("bold", "true")] } else { &[] };
        write_text_element(writer, "p", bold, &paragraph.text)?;
        writer.write_event(Event::End(BytesEnd::new("text")))?;
    }
    Ok(())
}

fn write_math<W: Write>(
    writer: &mut Writer<W>,
    placed: &PlacedRegion<'_>,
    math: &MathRegion,
) -> Result<(), WriteError> {
    if math.input.is_empty() {
        log::warn!("math region {} has an empty input", placed.id);
    } else if !math.input.is_complete() {
        log::warn!(
            "math region {} input does not reduce to a single value: {}",
            placed.id,
            math.input
        );
    }

    let mut start = BytesStart::new("math");
    if let Some(optimize) = &math.optimize {
        start.push_attribute(("optimize", optimize.as_str()));
    }
    if let Some(places) = math.decimal_places {
        start.push_attribute(("decimalPlaces", places.to_string().as_str()));
    }
    if math.significant_digits_mode {
        start.push_attribute(("significantDigitsMode", "true"));
    }
    if math.trailing_zeros {
        start.push_attribute(("trailingZeros", "true"));
    }
    writer.write_event(Event::Start(start))?;

    if let Some(description) = &math.description {
        for paragraph in &description.texts {
            let mut desc = BytesStart::new("description");
            desc.push_attribute(("active", bool_attr(description.active)));
            desc.push_attribute(("position", description.position.as_str()));
            desc.push_attribute(("lang", paragraph.lang.as_str()));
            writer.write_event(Event::Start(desc))?;
            write_text_element(writer, "p", &[], &paragraph.text)?;
            writer.write_event(Event::End(BytesEnd::new("description")))?;
        }
    }

    write_token_block(writer, "input", &[], &math.input)?;

    if let Some(contract) = &math.contract {
        write_token_block(writer, "contract", &[], contract)?;
    }

    if let Some(result) = &math.result {
        let attrs = [("action", result.action.as_str())];
        match result.cached.as_ref().filter(|cached| !cached.is_empty()) {
            Some(cached) => write_token_block(writer, "result", &attrs, cached)?,
            None => {
                log::debug!("math region {} result written as {PLACEHOLDER}", placed.id);
                write_token_block(writer, "result", &attrs, &placeholder())?;
            }
        }
    }

    writer.write_event(Event::End(BytesEnd::new("math")))?;
    Ok(())
}

fn write_plot<W: Write>(writer: &mut Writer<W>, plot: &PlotRegion) -> Result<(), WriteError> {
    let mut start = BytesStart::new("plot");
    start.push_attribute(("type", plot.kind.as_str()));
    start.push_attribute(("render", plot.render.as_str()));
    start.push_attribute(("grid", bool_attr(plot.grid)));
    start.push_attribute(("axes", bool_attr(plot.axes)));
    for (axis, scale) in AXES.iter().zip(plot.scale) {
        if scale != 1.0 {
            start.push_attribute((format!("scale_{axis}").as_str(), scale.to_string().as_str()));
        }
    }
    for (axis, rotate) in AXES.iter().zip(plot.rotate) {
        if rotate != 0 {
            start.push_attribute((format!("rotate_{axis}").as_str(), rotate.to_string().as_str()));
        }
    }
    for (axis, transpose) in AXES.iter().zip(plot.transpose) {
        if transpose != 0 {
            start.push_attribute((
                format!("transpose_{axis}").as_str(),
                transpose.to_string().as_str(),
            ));
        }
    }
    if let Some(animate) = &plot.animate {
        start.push_attribute(("animate", animate.as_str()));
    }

    if plot.inputs.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }
    writer.write_event(Event::Start(start))?;
    for input in &plot.inputs {
        write_token_block(writer, "input", &[], input)?;
    }
    writer.write_event(Event::End(BytesEnd::new("plot")))?;
    Ok(())
}

fn write_picture<W: Write>(
    writer: &mut Writer<W>,
    picture: &PictureRegion,
) -> Result<(), WriteError> {
    writer.write_event(Event::Start(BytesStart::new("picture")))?;
    write_text_element(
        writer,
        "raw",
        &[("format", picture.format.as_str()), ("encoding", "base64")],
        &picture.data_base64,
    )?;
    writer.write_event(Event::End(BytesEnd::new("picture")))?;
    Ok(())
}

/// Areas only carry `id`, `top` and colors. The children and the terminator
/// region are nested inside the area's own `<region>` element.
fn write_area<W: Write>(
    writer: &mut Writer<W>,
    placed: &PlacedRegion<'_>,
    area: &AreaRegion,
) -> Result<(), WriteError> {
    let style = &placed.region.style;
    writer.write_event(Event::Start(area_region_start(placed.id, placed.top, style)))?;

    let mut marker = BytesStart::new("area");
    if area.collapsed {
        marker.push_attribute(("collapsed", "true"));
    }
    writer.write_event(Event::Empty(marker))?;

    for child in &placed.children {
        write_region(writer, child)?;
    }

    if let Some(terminator) = placed.terminator {
        writer.write_event(Event::Start(area_region_start(
            terminator.id,
            terminator.top,
            style,
        )))?;
        let mut marker = BytesStart::new("area");
        marker.push_attribute(("terminator", "true"));
        writer.write_event(Event::Empty(marker))?;
        writer.write_event(Event::End(BytesEnd::new("region")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("region")))?;
    Ok(())
}

fn area_region_start(
    id: u32,
    top: i32,
    style: &smath_model::RegionStyle,
) -> BytesStart<'static> {
    let mut start = BytesStart::new("region");
    start.push_attribute(("id", id.to_string().as_str()));
    start.push_attribute(("top", top.to_string().as_str()));
    start.push_attribute(("color", style.color.as_str()));
    start.push_attribute(("bgColor", style.bg_color.as_str()));
    start
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use smath_model::expr::variable;
    use smath_model::regions::{
        DescriptionPosition, MathDescription, Paragraph, PlotKind, ResultAction,
    };
    use smath_model::units::power_unit;
    use smath_model::{Region, Worksheet};

    fn render(worksheet: &Worksheet) -> Vec<String> {
        let finalized = worksheet.finalize();
        finalized
            .regions
            .iter()
            .map(|placed| {
                let mut writer = Writer::new(Vec::new());
                write_region(&mut writer, placed).unwrap();
                String::from_utf8(writer.into_inner()).unwrap()
            })
            .collect()
    }

    fn render_one(region: impl Into<Region>) -> String {
        let mut ws = Worksheet::default();
        ws.add(region);
        render(&ws).remove(0)
    }

    #[test]
    fn title_text_region() {
        let xml = render_one(Region::title("Beam"));
        assert_eq!(
            xml,
            concat!(
                r##"<region id="0" left="9" top="9" "##,
                r##"color="#0000ff" bgColor="#ffffff" fontSize="12">"##,
                r#"<text lang="eng"><p bold="true">Beam</p></text>"#,
                r#"</region>"#,
            )
        );
    }

    #[test]
    fn section_has_border() {
        let xml = render_one(Region::section("Input data:"));
        assert!(xml.starts_with(concat!(
            r##"<region id="0" left="9" top="9" "##,
            r##"color="#000000" bgColor="#dddddd" border="true">"##,
        )));
        assert!(xml.contains(r#"<text lang="eng"><p>Input data:</p></text>"#));
    }

    #[test]
    fn multilingual_text_writes_one_block_per_language() {
        let text = TextRegion::multilingual([("eng", "Hello"), ("rus", "Привет")]).bold();
        let xml = render_one(text);
        assert_eq!(
            xml,
            concat!(
                r##"<region id="0" left="9" top="9" color="#000000" bgColor="#ffffff">"##,
                r#"<text lang="eng"><p bold="true">Hello</p></text>"#,
                r#"<text lang="rus"><p bold="true">Привет</p></text>"#,
                r#"</region>"#,
            )
        );
    }

    #[test]
    fn description_per_language_precedes_input() {
        let description = MathDescription {
            texts: vec![
                Paragraph::new("eng", "Length"),
                Paragraph::new("spa", "Longitud"),
            ],
            position: DescriptionPosition::Top,
            active: false,
        };
        let math = MathRegion::assignment("L", 3, None)
            .with_description_block(description)
            .with_optimize(None)
            .with_significant_digits(true);
        let xml = render_one(math);
        assert_eq!(
            xml,
            concat!(
                r##"<region id="0" left="9" top="9" color="#000000" bgColor="#ffffff">"##,
                r#"<math significantDigitsMode="true">"#,
                r#"<description active="false" position="Top" lang="eng">"#,
                r#"<p>Length</p></description>"#,
                r#"<description active="false" position="Top" lang="spa">"#,
                r#"<p>Longitud</p></description>"#,
                r#"<input><e type="operand">L</e><e type="operand">3</e>"#,
                r#"<e type="operator" args="2">:</e></input>"#,
                r#"</math></region>"#,
            )
        );
    }

    #[test]
    fn math_formatting_attributes() {
        let math = MathRegion::new(variable("x"))
            .with_decimal_places(3)
            .with_significant_digits(true)
            .with_trailing_zeros(true);
        let xml = render_one(math);
        assert!(xml.contains(concat!(
            r#"<math optimize="2" decimalPlaces="3" "#,
            r#"significantDigitsMode="true" trailingZeros="true">"#,
        )));
    }

    #[test]
    fn math_region_element_order() {
        let math = MathRegion::new(variable("A_s"))
            .with_description("Steel")
            .with_contract(power_unit("mm", 2))
            .with_result(ResultAction::Numeric)
            .with_decimal_places(2);
        let xml = render_one(math);

        let positions: Vec<usize> = ["<description", "<input>", "<contract>", "<result"]
            .iter()
            .map(|tag| xml.find(tag).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{xml}");
        assert!(xml.contains(r#"<math optimize="2" decimalPlaces="2">"#));
        assert!(xml.contains(
            r#"<description active="true" position="Right" lang="eng"><p>Steel</p></description>"#
        ));
        assert!(xml.contains(r#"<result action="numeric"><e type="operand">.</e></result>"#));
    }

    #[test]
    fn cached_result_replaces_placeholder() {
        let math = MathRegion::evaluation("GCD", None).with_cached_result(ResultAction::Numeric, 5);
        let xml = render_one(math);
        assert!(xml.contains(r#"<result action="numeric"><e type="operand">5</e></result>"#));
        assert!(!xml.contains("<contract"));
    }

    #[test]
    fn plot_attributes_only_when_not_identity() {
        let plot = PlotRegion::new([variable("f")]);
        let xml = render_one(plot);
        assert!(xml.contains(r#"<plot type="2d" render="lines" grid="true" axes="true"><input>"#));
        assert!(!xml.contains("scale_"));
        assert!(!xml.contains("showInputData"));

        let plot = PlotRegion::new([variable("f"), variable("g")])
            .with_kind(PlotKind::ThreeD)
            .with_scale(2.0, 1.0, 1.0)
            .with_rotation(0, 30, 0)
            .with_transpose(0, 0, 5)
            .with_animation("t")
            .hide_input_data();
        let xml = render_one(plot);
        assert!(xml.contains(r#"showInputData="False">"#));
        assert!(xml.contains(concat!(
            r#"<plot type="3d" render="lines" grid="true" axes="true" "#,
            r#"scale_x="2" rotate_y="30" transpose_z="5" animate="t">"#,
        )));
        assert_eq!(xml.matches("<input>").count(), 2);
    }

    #[test]
    fn picture_payload() {
        let xml = render_one(PictureRegion::from_bytes(b"hello", "png"));
        assert!(xml.contains(
            r#"<picture><raw format="png" encoding="base64">aGVsbG8=</raw></picture>"#
        ));
    }

    #[test]
    fn area_with_terminator() {
        let mut ws = Worksheet::default();
        ws.add(TextRegion::new("before"));
        ws.add(
            AreaRegion::collapsed()
                .with_child(MathRegion::assignment("a", 1, None))
                .with_child(MathRegion::assignment("b", 2, None)),
        );
        let xml = render(&ws).remove(1);
        assert!(xml.starts_with(concat!(
            r##"<region id="1" top="36" color="#000000" bgColor="#ffffff">"##,
            r##"<area collapsed="true"/>"##,
            r##"<region id="2" left="9" top="63""##,
        )));
        assert!(xml.ends_with(concat!(
            r##"<region id="4" top="136" color="#000000" bgColor="#ffffff">"##,
            r##"<area terminator="true"/></region>"##,
            r##"</region>"##,
        )));
        assert_eq!(xml.matches("<region ").count(), 4);
    }
}
