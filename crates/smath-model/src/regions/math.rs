use super::text::Paragraph;
use crate::expr::{assign, attach_unit, evaluate, unit_reference, Expr, Literal};

/// How SMath should display a requested result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResultAction {
    #[default]
    Numeric,
    Symbolic,
}

impl ResultAction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Symbolic => "symbolic",
        }
    }
}

/// A result block: the action, plus the last computed value if one is known.
///
/// SMath recomputes results on open, so `cached` is only a display hint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MathResult {
    pub action: ResultAction,
    pub cached: Option<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DescriptionPosition {
    Left,
    #[default]
    Right,
    Top,
    Bottom,
}

impl DescriptionPosition {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Top => "Top",
            Self::Bottom => "Bottom",
        }
    }
}

/// Annotation shown next to a math region, one paragraph per language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathDescription {
    pub texts: Vec<Paragraph>,
    pub position: DescriptionPosition,
    pub active: bool,
}

impl MathDescription {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            texts: vec![Paragraph::new("eng", text)],
            position: DescriptionPosition::default(),
            active: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathRegion {
    pub input: Expr,
    pub result: Option<MathResult>,
    /// Unit the result is converted to before display.
    pub contract: Option<Expr>,
    pub description: Option<MathDescription>,
    pub optimize: Option<String>,
    pub decimal_places: Option<u32>,
    pub significant_digits_mode: bool,
    pub trailing_zeros: bool,
}

impl MathRegion {
    pub fn new(input: impl Into<Literal>) -> Self {
        let input: Literal = input.into();
        Self {
            input: input.into_expr(),
            result: None,
            contract: None,
            description: None,
            optimize: Some("2".to_string()),
            decimal_places: None,
            significant_digits_mode: false,
            trailing_zeros: false,
        }
    }

    /// `name := value`, or `name := value * unit` when a unit is given.
    pub fn assignment(
        name: impl Into<String>,
        value: impl Into<Literal>,
        unit: Option<&str>,
    ) -> Self {
        let expr = match unit {
            Some(unit) => assign(name, attach_unit(value, unit)),
            None => assign(name, value),
        };
        Self::new(expr)
    }

    /// Shows the numeric value of `name`, optionally converted to `contract_unit`.
    pub fn evaluation(name: impl Into<String>, contract_unit: Option<&str>) -> Self {
        let mut region = Self::new(evaluate(name)).with_result(ResultAction::Numeric);
        region.contract = contract_unit.map(unit_reference);
        region
    }

    pub fn with_result(mut self, action: ResultAction) -> Self {
        self.result = Some(MathResult {
            action,
            cached: None,
        });
        self
    }

    pub fn with_cached_result(mut self, action: ResultAction, cached: impl Into<Literal>) -> Self {
        let cached: Literal = cached.into();
        self.result = Some(MathResult {
            action,
            cached: Some(cached.into_expr()),
        });
        self
    }

    /// Accepts a single unit (see [`unit_reference`]) or a unit expression such as
    /// [`crate::units::power_unit`].
    pub fn with_contract(mut self, contract: Expr) -> Self {
        self.contract = Some(contract);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(MathDescription::new(description));
        self
    }

    pub fn with_description_block(mut self, description: MathDescription) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_decimal_places(mut self, places: u32) -> Self {
        self.decimal_places = Some(places);
        self
    }

    pub fn with_optimize(mut self, level: Option<&str>) -> Self {
        self.optimize = level.map(str::to_string);
        self
    }

    pub fn with_significant_digits(mut self, enabled: bool) -> Self {
        self.significant_digits_mode = enabled;
        self
    }

    pub fn with_trailing_zeros(mut self, enabled: bool) -> Self {
        self.trailing_zeros = enabled;
        self
    }
}
