use super::ops::BinaryOp;
use super::{Element, Expr, IntoNumber, Literal};
use crate::constants::PLACEHOLDER;

pub fn variable(name: impl Into<String>) -> Expr {
    Expr::single(Element::operand(name))
}

pub fn number(value: impl IntoNumber) -> Expr {
    Expr::single(Element::operand(value.into_number_text()))
}

/// A named constant such as `π` or `e`.
pub fn constant(name: impl Into<String>) -> Expr {
    Expr::single(Element::operand(name))
}

pub fn text_literal(value: impl Into<String>) -> Expr {
    Expr::single(Element::string_operand(value))
}

pub fn unit_reference(name: impl Into<String>) -> Expr {
    Expr::single(Element::unit_operand(name))
}

pub fn placeholder() -> Expr {
    Expr::single(Element::operand(PLACEHOLDER))
}

/// "Display the current value of `name`" when used as a region's own input.
pub fn evaluate(name: impl Into<String>) -> Expr {
    variable(name)
}

pub(crate) fn binary(lhs: &Expr, rhs: impl Into<Literal>, op: BinaryOp) -> Expr {
    let rhs = lit(rhs).into_expr();
    let operator = [Element::operator(op.symbol(), 2)];
    Expr::concat([lhs.elements(), rhs.elements(), &operator[..]])
}

macro_rules! binary_fn {
    ($($name:ident => $op:expr),* $(,)?) => {
        $(
            pub fn $name(lhs: impl Into<Literal>, rhs: impl Into<Literal>) -> Expr {
                binary(&lit(lhs).into_expr(), rhs, $op)
            }
        )*
    };
}

binary_fn!(
    add => BinaryOp::Add,
    subtract => BinaryOp::Sub,
    multiply => BinaryOp::Mul,
    divide => BinaryOp::Div,
    power => BinaryOp::Pow,
    greater => BinaryOp::Gt,
    less => BinaryOp::Lt,
    greater_or_equal => BinaryOp::Ge,
    less_or_equal => BinaryOp::Le,
    not_equal => BinaryOp::Ne,
    equal => BinaryOp::Eq,
    logical_and => BinaryOp::And,
);

pub fn negate(value: impl Into<Literal>) -> Expr {
    lit(value).into_expr().negate()
}

pub fn factorial(value: impl Into<Literal>) -> Expr {
    lit(value).into_expr().factorial()
}

pub fn attach_unit(value: impl Into<Literal>, unit: impl Into<String>) -> Expr {
    lit(value).into_expr().attach_unit(unit)
}

pub fn grouped(value: impl Into<Literal>) -> Expr {
    lit(value).into_expr().grouped()
}

/// Function call: every argument's tokens, then one function token.
///
/// `preserve` is set when `name` is a built-in (see [`crate::builtins`]).
pub fn call<I>(name: impl Into<String>, args: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Literal>,
{
    let (mut elements, count) = flatten_args(args);
    elements.push(Element::function(name, count));
    Expr::from_elements(elements)
}

/// Like [`call`], with an explicit `preserve` flag instead of the catalog lookup.
pub fn call_with_preserve<I>(name: impl Into<String>, args: I, preserve: Option<bool>) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Literal>,
{
    let (mut elements, count) = flatten_args(args);
    elements.push(Element::function_with_preserve(name, count, preserve));
    Expr::from_elements(elements)
}

pub(crate) fn lit(value: impl Into<Literal>) -> Literal {
    value.into()
}

pub(crate) fn flatten_args<I>(args: I) -> (Vec<Element>, u32)
where
    I: IntoIterator,
    I::Item: Into<Literal>,
{
    let mut elements = Vec::new();
    let mut count = 0u32;
    for arg in args {
        elements.extend_from_slice(lit(arg).into_expr().elements());
        count += 1;
    }
    (elements, count)
}

/// `name := value`
pub fn assign(name: impl Into<String>, value: impl Into<Literal>) -> Expr {
    named_binding(name, value, ":")
}

/// `name ≡ value` (symbolic definition, no numeric evaluation implied).
pub fn define(name: impl Into<String>, value: impl Into<Literal>) -> Expr {
    named_binding(name, value, "≡")
}

fn named_binding(name: impl Into<String>, value: impl Into<Literal>, symbol: &str) -> Expr {
    let value = lit(value).into_expr();
    let head = [Element::operand(name)];
    let tail = [Element::operator(symbol, 2)];
    Expr::concat([&head[..], value.elements(), &tail[..]])
}

/// `name(params...) := body`
pub fn func_assign<P>(name: impl Into<String>, params: P, body: impl Into<Literal>) -> Expr
where
    P: IntoIterator,
    P::Item: Into<String>,
{
    let mut elements: Vec<Element> = params.into_iter().map(Element::operand).collect();
    let arity = elements.len() as u32;
    elements.push(Element::function(name, arity));
    elements.extend_from_slice(lit(body).into_expr().elements());
    elements.push(Element::operator(":", 2));
    Expr::from_elements(elements)
}
