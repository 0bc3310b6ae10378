//! Program blocks, loops and conditionals.
//!
//! SMath encodes these as ordinary functions whose arguments are whole
//! statements, so every combinator here reduces to [`call`].

use super::builder::{flatten_args, lit};
use super::{assign, call, variable, Element, Expr, Literal};

/// A program block: `s1 s2 ... n 1 line{n + 2}`.
///
/// The trailing `n` and `1` are the row and column counts of the block, so
/// they count towards the function arity.
pub fn line<I>(statements: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Literal>,
{
    let (mut elements, count) = flatten_args(statements);
    if count == 0 {
        log::warn!("line block built without statements");
    }
    elements.push(Element::operand(count.to_string()));
    elements.push(Element::operand("1"));
    elements.push(Element::function("line", count + 2));
    Expr::from_elements(elements)
}

/// `range(start, end)`
pub fn range(start: impl Into<Literal>, end: impl Into<Literal>) -> Expr {
    call("range", [lit(start), lit(end)])
}

/// `range(start, end, step)`; SMath reads `step` as the second element of the
/// sequence, not as an increment.
pub fn range_with_step(
    start: impl Into<Literal>,
    end: impl Into<Literal>,
    step: impl Into<Literal>,
) -> Expr {
    call("range", [lit(start), lit(end), lit(step)])
}

/// `for(var, range, body)`
pub fn for_with_range(
    var: impl Into<String>,
    range: impl Into<Literal>,
    body: impl Into<Literal>,
) -> Expr {
    call("for", [Literal::Expr(variable(var)), lit(range), lit(body)])
}

/// C-style loop: `for(var := start, condition, var := increment, body)`.
pub fn for_with_steps(
    var: impl Into<String>,
    start: impl Into<Literal>,
    condition: impl Into<Literal>,
    increment: impl Into<Literal>,
    body: impl Into<Literal>,
) -> Expr {
    let var = var.into();
    let init = assign(var.clone(), start);
    let step = assign(var, increment);
    call(
        "for",
        [Literal::Expr(init), lit(condition), Literal::Expr(step), lit(body)],
    )
}

/// `while(condition, body)`
pub fn while_loop(condition: impl Into<Literal>, body: impl Into<Literal>) -> Expr {
    call("while", [lit(condition), lit(body)])
}

/// `if(condition, then, else)`
pub fn if_then_else(
    condition: impl Into<Literal>,
    then_branch: impl Into<Literal>,
    else_branch: impl Into<Literal>,
) -> Expr {
    call("if", [lit(condition), lit(then_branch), lit(else_branch)])
}

/// `sum(body, var, start, end)`
pub fn sum(
    body: impl Into<Literal>,
    var: impl Into<Literal>,
    start: impl Into<Literal>,
    end: impl Into<Literal>,
) -> Expr {
    call("sum", [lit(body), lit(var), lit(start), lit(end)])
}

/// `product(body, var, start, end)`
pub fn product(
    body: impl Into<Literal>,
    var: impl Into<Literal>,
    start: impl Into<Literal>,
    end: impl Into<Literal>,
) -> Expr {
    call("product", [lit(body), lit(var), lit(start), lit(end)])
}
