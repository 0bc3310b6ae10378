use pretty_assertions::assert_eq;
use roxmltree::{Document, Node};
use smath_model::constants::SMATH_NAMESPACE;
use smath_model::expr::control::{if_then_else, line, while_loop};
use smath_model::expr::functions::{abs, modulo};
use smath_model::expr::{assign, evaluate, variable};
use smath_model::regions::ResultAction;
use smath_model::{MathRegion, Region, Worksheet};
use smath_xml::WorksheetExt;

fn euclid_worksheet() -> Worksheet {
    let mut ws = Worksheet::new("Euclidean algorithm (calculating the GCD)", "Test");

    ws.add(Region::title("Euclidean algorithm\n(calculating the GCD)"));
    ws.add(Region::section("Input data:"));
    ws.add(MathRegion::new(assign("a", 20405)));
    ws.add(MathRegion::new(assign("b", 84645)));

    ws.add(Region::section("Calculation:"));
    ws.add(MathRegion::new(assign("x", abs("a"))));
    ws.add(MathRegion::new(assign("y", abs("b"))));

    let x = variable("x");
    let y = variable("y");
    let condition = x.not_equal(0).logical_and(y.not_equal(0));
    let step = if_then_else(
        x.greater(&y),
        assign("x", modulo("x", "y")),
        assign("y", modulo("y", "x")),
    );
    let program = line([while_loop(condition, step), assign("GCD", &x + &y)]);
    ws.add(MathRegion::new(program));

    ws.add(Region::section("Result:"));
    ws.add(MathRegion::new(evaluate("GCD")).with_result(ResultAction::Numeric));

    ws.add(Region::section("Control:"));
    ws.add(MathRegion::new(variable("a") / "GCD"));
    ws.add(MathRegion::new(variable("b") / "GCD"));
    ws
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

fn token_values(block: Node<'_, '_>) -> Vec<String> {
    block
        .children()
        .filter(|n| n.is_element())
        .map(|n| n.text().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn document_structure() {
    let xml = euclid_worksheet().to_xml_string().unwrap();
    let doc = Document::parse(&xml).unwrap();
    let root = doc.root_element();

    assert_eq!(root.tag_name().name(), "regions");
    assert!(doc
        .descendants()
        .filter(|n| n.is_element())
        .all(|n| n.tag_name().namespace() == Some(SMATH_NAMESPACE)));

    let elements: Vec<&str> = root
        .children()
        .filter(|n| n.is_element())
        .map(|n| n.tag_name().name())
        .collect();
    assert_eq!(elements[0], "settings");
    assert_eq!(elements.len(), 1 + 13);
    assert!(elements[1..].iter().all(|name| *name == "region"));

    let settings = child(root, "settings").unwrap();
    let meta = child(settings, "metadata").unwrap();
    assert_eq!(
        child(meta, "title").unwrap().text(),
        Some("Euclidean algorithm (calculating the GCD)")
    );
    assert_eq!(child(meta, "author").unwrap().text(), Some("Test"));
}

#[test]
fn ids_and_tops() {
    let xml = euclid_worksheet().to_xml_string().unwrap();
    let doc = Document::parse(&xml).unwrap();
    let regions: Vec<Node> = doc
        .root_element()
        .children()
        .filter(|n| n.has_tag_name((SMATH_NAMESPACE, "region")))
        .collect();

    let ids: Vec<u32> = regions
        .iter()
        .map(|r| r.attribute("id").unwrap().parse().unwrap())
        .collect();
    assert_eq!(ids, (0..13).collect::<Vec<u32>>());

    let tops: Vec<i32> = regions
        .iter()
        .map(|r| r.attribute("top").unwrap().parse().unwrap())
        .collect();
    let expected: Vec<i32> = (0..13).map(|i| 9 + i * 27).collect();
    assert_eq!(tops, expected);
}

#[test]
fn program_tokens() {
    let xml = euclid_worksheet().to_xml_string().unwrap();
    let doc = Document::parse(&xml).unwrap();
    let program = doc
        .descendants()
        .filter(|n| n.has_tag_name((SMATH_NAMESPACE, "input")))
        .find(|n| token_values(*n).last().map(String::as_str) == Some("line"))
        .unwrap();

    assert_eq!(
        token_values(program),
        vec![
            "x", "0", "≠", "y", "0", "≠", "&", "x", "y", ">", "x", "x", "y", "mod", ":", "y", "y",
            "x", "mod", ":", "if", "while", "GCD", "x", "y", "+", ":", "2", "1", "line",
        ]
    );

    let line_token = program.last_element_child().unwrap();
    assert_eq!(line_token.attribute("type"), Some("function"));
    assert_eq!(line_token.attribute("preserve"), Some("true"));
    assert_eq!(line_token.attribute("args"), Some("4"));
}

#[test]
fn evaluation_has_placeholder_result() {
    let xml = euclid_worksheet().to_xml_string().unwrap();
    let doc = Document::parse(&xml).unwrap();
    let result = doc
        .descendants()
        .find(|n| n.has_tag_name((SMATH_NAMESPACE, "result")))
        .unwrap();
    assert_eq!(result.attribute("action"), Some("numeric"));
    assert_eq!(token_values(result), vec!["."]);
}

#[test]
fn title_keeps_line_break() {
    let xml = euclid_worksheet().to_xml_string().unwrap();
    let doc = Document::parse(&xml).unwrap();
    let p = doc
        .descendants()
        .find(|n| n.has_tag_name((SMATH_NAMESPACE, "p")))
        .unwrap();
    assert_eq!(p.text(), Some("Euclidean algorithm\n(calculating the GCD)"));
    assert_eq!(p.attribute("bold"), Some("true"));
}
