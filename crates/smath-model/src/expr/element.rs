use serde::{Deserialize, Serialize};

use crate::builtins::is_builtin;

/// Token kind (`type` attribute of an `<e>` element).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Operand,
    Operator,
    Function,
    /// Display hint only; has no effect on the evaluation stack.
    Bracket,
}

impl ElementKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Operand => "operand",
            Self::Operator => "operator",
            Self::Function => "function",
            Self::Bracket => "bracket",
        }
    }
}

/// Display style of an operand (`style` attribute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementStyle {
    Unit,
    String,
}

impl ElementStyle {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::String => "string",
        }
    }
}

/// One RPN token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Element {
    pub kind: ElementKind,
    pub value: String,
    /// Arity; only set for operators and functions.
    pub args: Option<u32>,
    pub style: Option<ElementStyle>,
    /// Only meaningful for functions. `None` and `Some(false)` serialize identically.
    pub preserve: Option<bool>,
}

impl Element {
    pub fn operand(value: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Operand,
            value: value.into(),
            args: None,
            style: None,
            preserve: None,
        }
    }

    pub fn unit_operand(name: impl Into<String>) -> Self {
        Self {
            style: Some(ElementStyle::Unit),
            ..Self::operand(name)
        }
    }

    pub fn string_operand(value: impl Into<String>) -> Self {
        Self {
            style: Some(ElementStyle::String),
            ..Self::operand(value)
        }
    }

    pub fn operator(symbol: impl Into<String>, args: u32) -> Self {
        Self {
            kind: ElementKind::Operator,
            value: symbol.into(),
            args: Some(args),
            style: None,
            preserve: None,
        }
    }

    /// Function token whose `preserve` flag is derived from the builtin catalog.
    pub fn function(name: impl Into<String>, args: u32) -> Self {
        let name = name.into();
        let preserve = is_builtin(&name).then_some(true);
        Self::function_with_preserve(name, args, preserve)
    }

    pub fn function_with_preserve(
        name: impl Into<String>,
        args: u32,
        preserve: Option<bool>,
    ) -> Self {
        Self {
            kind: ElementKind::Function,
            value: name.into(),
            args: Some(args),
            style: None,
            preserve,
        }
    }

    pub fn bracket() -> Self {
        Self {
            kind: ElementKind::Bracket,
            value: "(".to_string(),
            args: None,
            style: None,
            preserve: None,
        }
    }

    /// `(pops, pushes)` applied to the evaluation stack, or `None` for brackets.
    #[must_use]
    pub fn stack_effect(&self) -> Option<(u32, u32)> {
        match self.kind {
            ElementKind::Operand => Some((0, 1)),
            ElementKind::Operator | ElementKind::Function => Some((self.args.unwrap_or(0), 1)),
            ElementKind::Bracket => None,
        }
    }

    #[must_use]
    pub fn is_preserved(&self) -> bool {
        self.preserve == Some(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_preserve_comes_from_catalog() {
        assert_eq!(Element::function("sqrt", 1).preserve, Some(true));
        assert_eq!(Element::function("myFunc", 1).preserve, None);
        assert_eq!(
            Element::function_with_preserve("myFunc", 1, Some(true)).preserve,
            Some(true)
        );
    }

    #[test]
    fn brackets_have_no_stack_effect() {
        assert_eq!(Element::bracket().stack_effect(), None);
        assert_eq!(Element::operand("x").stack_effect(), Some((0, 1)));
        assert_eq!(Element::operator("+", 2).stack_effect(), Some((2, 1)));
        assert_eq!(Element::function("mat", 6).stack_effect(), Some((6, 1)));
    }

    #[test]
    fn styled_operands() {
        let unit = Element::unit_operand("kN");
        assert_eq!(unit.kind, ElementKind::Operand);
        assert_eq!(unit.style, Some(ElementStyle::Unit));
        assert_eq!(Element::string_operand("hi").style.map(ElementStyle::as_str), Some("string"));
    }
}
