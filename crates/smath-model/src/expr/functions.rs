//! Wrappers around common built-in SMath functions.

use super::builder::lit;
use super::{call, Expr, Literal};

macro_rules! unary_function {
    ($($(#[$meta:meta])* $name:ident => $smath:literal),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name(x: impl Into<Literal>) -> Expr {
                call($smath, [lit(x)])
            }
        )*
    };
}

unary_function!(
    abs => "abs",
    sign => "sign",
    sqrt => "sqrt",
    exp => "exp",
    ln => "ln",
    log => "log",
    ceil => "ceil",
    floor => "floor",
    round => "round",
    max => "max",
    min => "min",
    sin => "sin",
    cos => "cos",
    tan => "tan",
    asin => "asin",
    acos => "acos",
    atan => "atan",
    num2str => "num2str",
    /// Forces numeric evaluation.
    eval => "eval",
);

/// `mod(a, b)`
pub fn modulo(a: impl Into<Literal>, b: impl Into<Literal>) -> Expr {
    call("mod", [lit(a), lit(b)])
}

pub fn concat(a: impl Into<Literal>, b: impl Into<Literal>) -> Expr {
    call("concat", [lit(a), lit(b)])
}

/// First derivative `diff(f, x)`.
pub fn diff(expr: impl Into<Literal>, var: impl Into<Literal>) -> Expr {
    call("diff", [lit(expr), lit(var)])
}

/// Nth derivative `diff(f, x, n)`.
pub fn diff_n(expr: impl Into<Literal>, var: impl Into<Literal>, n: impl Into<Literal>) -> Expr {
    call("diff", [lit(expr), lit(var), lit(n)])
}

/// Definite integral `int(f, x, a, b)`.
pub fn integral(
    expr: impl Into<Literal>,
    var: impl Into<Literal>,
    a: impl Into<Literal>,
    b: impl Into<Literal>,
) -> Expr {
    call("int", [lit(expr), lit(var), lit(a), lit(b)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::variable;

    #[test]
    fn wrappers_emit_preserved_builtins() {
        for expr in [abs("x"), sqrt(2), sin(variable("t")), eval("y"), round(1.5)] {
            let f = expr.last().unwrap();
            assert_eq!(f.args, Some(1));
            assert!(f.is_preserved(), "{} should be preserved", f.value);
        }
    }

    #[test]
    fn multi_argument_wrappers() {
        assert_eq!(modulo("x", "y").values(), vec!["x", "y", "mod"]);
        assert_eq!(integral("f", "x", 0, 1).last().unwrap().args, Some(4));
        assert_eq!(diff_n("f", "x", 2).last().unwrap().args, Some(3));
        assert_eq!(concat("a", "b").last().unwrap().value, "concat");
    }
}
