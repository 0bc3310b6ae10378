use pretty_assertions::assert_eq;
use smath_model::constants::{DEFAULT_HEIGHT, REGION_GAP};
use smath_model::expr::control::line;
use smath_model::expr::matrix::matrix;
use smath_model::expr::{assign, attach_unit, call, variable};
use smath_model::{
    AreaRegion, Element, ElementKind, ElementStyle, MathRegion, Region, TextRegion, Worksheet,
};

#[test]
fn assign_number_tokens() {
    let expr = assign("x", 5);
    assert_eq!(
        expr.elements(),
        &[
            Element::operand("x"),
            Element::operand("5"),
            Element::operator(":", 2),
        ]
    );
    assert_eq!(expr.stack_depth(), Some(1));
}

#[test]
fn matrix_arity_and_tail() {
    let m = matrix([[1, 2], [3, 4]]).unwrap();
    assert_eq!(m.last().unwrap().args, Some(6));
    assert_eq!(&m.values()[m.len() - 3..], &["2", "2", "mat"]);
}

#[test]
fn line_arity() {
    let expr = line([assign("a", 1), assign("b", 2)]);
    let last = expr.last().unwrap();
    assert_eq!(last.kind, ElementKind::Function);
    assert_eq!(last.value, "line");
    assert_eq!(last.args, Some(4));
}

#[test]
fn preserve_only_on_builtins() {
    assert_eq!(call("abs", ["x"]).last().unwrap().preserve, Some(true));
    assert_eq!(call("myFunc", ["x"]).last().unwrap().preserve, None);
}

#[test]
fn unit_assignment_is_five_tokens() {
    let expr = assign("x", attach_unit(5, "m"));
    assert_eq!(expr.len(), 5);
    assert_eq!(expr.values(), vec!["x", "5", "m", "*", ":"]);
    assert_eq!(expr.elements()[2].style, Some(ElementStyle::Unit));
}

#[test]
fn three_auto_placed_regions() {
    let mut ws = Worksheet::default();
    ws.add(Region::title("Title"));
    ws.add(MathRegion::assignment("a", 1, None));
    ws.add(MathRegion::new(variable("a")));

    let step = DEFAULT_HEIGHT + REGION_GAP;
    let tops: Vec<i32> = ws.regions().iter().map(|r| r.top.unwrap()).collect();
    assert_eq!(tops, vec![9, 9 + step, 9 + 2 * step]);
}

#[test]
fn area_ids_and_terminator() {
    let mut ws = Worksheet::default();
    ws.add(TextRegion::new("before"));
    let mut area = AreaRegion::new();
    for i in 0..3 {
        area.add(MathRegion::assignment(format!("v{i}"), i, None));
    }
    ws.add(area);
    ws.add(TextRegion::new("after"));

    let fin = ws.finalize();
    // N = 3 top-level regions, K = 3 children, plus one terminator.
    assert_eq!(fin.id_count, 3 + 3 + 1);

    let area = &fin.regions[1];
    let terminator = area.terminator.unwrap();
    assert_eq!(terminator.id, area.id + 3 + 1);
    assert_eq!(terminator.top, area.top + 100);

    let mut ids: Vec<u32> = fin.iter().map(|r| r.id).collect();
    ids.push(terminator.id);
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 7);
}
