use serde_json::Value;

use super::{Element, Expr};
use crate::error::BuildError;

/// A value accepted wherever a combinator takes an operand.
///
/// - an [`Expr`] passes through unchanged
/// - a number becomes a number operand
/// - text becomes a *variable reference* (not a string literal); use
///   [`super::text_literal`] for string values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Expr(Expr),
    Number(String),
    Name(String),
}

impl Literal {
    pub fn into_expr(self) -> Expr {
        match self {
            Literal::Expr(expr) => expr,
            Literal::Number(text) | Literal::Name(text) => Expr::single(Element::operand(text)),
        }
    }

    /// Coerces a dynamically typed value (e.g. loaded from JSON).
    ///
    /// Numbers and strings are accepted; every other kind is a
    /// [`BuildError::TypeMismatch`].
    pub fn from_json(value: &Value) -> Result<Self, BuildError> {
        match value {
            Value::Number(n) => Ok(Literal::Number(json_number_text(n))),
            Value::String(s) => Ok(Literal::Name(s.clone())),
            Value::Null => Err(BuildError::TypeMismatch { found: "null" }),
            Value::Bool(_) => Err(BuildError::TypeMismatch { found: "boolean" }),
            Value::Array(_) => Err(BuildError::TypeMismatch { found: "array" }),
            Value::Object(_) => Err(BuildError::TypeMismatch { found: "object" }),
        }
    }
}

impl TryFrom<&Value> for Literal {
    type Error = BuildError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Literal::from_json(value)
    }
}

impl TryFrom<Value> for Literal {
    type Error = BuildError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Literal::from_json(&value)
    }
}

impl From<Expr> for Literal {
    fn from(value: Expr) -> Self {
        Literal::Expr(value)
    }
}

impl From<&Expr> for Literal {
    fn from(value: &Expr) -> Self {
        Literal::Expr(value.clone())
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::Name(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::Name(value)
    }
}

impl From<&String> for Literal {
    fn from(value: &String) -> Self {
        Literal::Name(value.clone())
    }
}

fn json_number_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        i.into_number_text()
    } else if let Some(u) = n.as_u64() {
        u.into_number_text()
    } else if let Some(f) = n.as_f64() {
        f.into_number_text()
    } else {
        n.to_string()
    }
}

/// Formats a float the way SMath reads it back: shortest round-trip digits,
/// switching to exponent form (`1e+21`, `1e-05`) when the decimal exponent is
/// below -4 or at least 16.
fn float_text(plain: String, scientific: String, exponent_form: bool) -> String {
    if !exponent_form {
        return plain;
    }
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return plain;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return plain;
    };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

/// Numeric types that can be written as a number operand.
pub trait IntoNumber {
    fn into_number_text(self) -> String;
}

macro_rules! impl_integer_literal {
    ($($ty:ty),*) => {
        $(
            impl IntoNumber for $ty {
                fn into_number_text(self) -> String {
                    self.to_string()
                }
            }

            impl From<$ty> for Literal {
                fn from(value: $ty) -> Self {
                    Literal::Number(value.into_number_text())
                }
            }
        )*
    };
}

macro_rules! impl_float_literal {
    ($($ty:ty),*) => {
        $(
            impl IntoNumber for $ty {
                fn into_number_text(self) -> String {
                    if !self.is_finite() {
                        log::warn!("non-finite number {self} written as an operand");
                        return self.to_string();
                    }
                    let magnitude = self.abs();
                    let exponent_form = magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude);
                    float_text(self.to_string(), format!("{self:e}"), exponent_form)
                }
            }

            impl From<$ty> for Literal {
                fn from(value: $ty) -> Self {
                    Literal::Number(value.into_number_text())
                }
            }
        )*
    };
}

impl_integer_literal!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_float_literal!(f32, f64);
