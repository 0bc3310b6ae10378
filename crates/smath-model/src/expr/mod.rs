//! RPN expression building.
//!
//! An [`Expr`] is an immutable, cheaply clonable token stream. Every combinator
//! returns a new `Expr` built by concatenation, so sub-expressions can be reused
//! in several larger expressions (and shared across threads) without copying
//! concerns.

mod builder;
pub mod control;
mod element;
pub mod functions;
mod literal;
pub mod matrix;
mod ops;

use std::fmt;
use std::sync::Arc;

pub use builder::{
    add, assign, attach_unit, call, call_with_preserve, constant, define, divide, equal, evaluate,
    factorial, func_assign, greater, greater_or_equal, grouped, less, less_or_equal, logical_and,
    multiply, negate, not_equal, number, placeholder, power, subtract, text_literal,
    unit_reference, variable,
};
pub use element::{Element, ElementKind, ElementStyle};
pub use literal::{IntoNumber, Literal};
pub use ops::{BinaryOp, UnaryOp};

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Expr {
    elements: Arc<[Element]>,
}

impl Expr {
    pub fn from_elements(elements: impl Into<Vec<Element>>) -> Self {
        Self {
            elements: Arc::from(elements.into()),
        }
    }

    pub(crate) fn single(element: Element) -> Self {
        Self::from_elements(vec![element])
    }

    /// Concatenates token slices into a fresh expression.
    pub(crate) fn concat<'a>(parts: impl IntoIterator<Item = &'a [Element]>) -> Self {
        let mut out: Vec<Element> = Vec::new();
        for part in parts {
            out.extend_from_slice(part);
        }
        Self::from_elements(out)
    }

    /// Returns a new expression with `tail` appended to this expression's tokens.
    pub(crate) fn extended(&self, tail: impl IntoIterator<Item = Element>) -> Self {
        let mut out = self.elements.to_vec();
        out.extend(tail);
        Self::from_elements(out)
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn last(&self) -> Option<&Element> {
        self.elements.last()
    }

    /// Literal values of every token, in order.
    pub fn values(&self) -> Vec<&str> {
        self.elements.iter().map(|e| e.value.as_str()).collect()
    }

    /// Simulates the evaluation stack left to right.
    ///
    /// Returns the final depth, or `None` if an operator or function would pop
    /// more values than are available.
    #[must_use]
    pub fn stack_depth(&self) -> Option<usize> {
        let mut depth: usize = 0;
        for element in self.elements.iter() {
            let Some((pops, pushes)) = element.stack_effect() else {
                continue;
            };
            depth = depth.checked_sub(pops as usize)?;
            depth += pushes as usize;
        }
        Some(depth)
    }

    /// `true` when the token stream forms exactly one complete expression.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.stack_depth() == Some(1)
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expr({self})")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, element) in self.elements.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&element.value)?;
            if let Some(args) = element.args {
                write!(f, "{{{args}}}")?;
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Expr {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
