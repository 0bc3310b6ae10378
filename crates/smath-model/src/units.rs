//! Physical units.
//!
//! Units are plain unit-styled operands; SMath does the dimensional analysis
//! itself, so nothing here checks that units are compatible.

use std::collections::HashSet;
use std::sync::OnceLock;

use crate::error::{ConfigurationError, ShapeError};
use crate::expr::{Element, Expr, Literal};

pub use crate::expr::attach_unit as with_unit;

/// Unit names as SMath spells them.
pub mod names {
    // Length
    pub const M: &str = "m";
    pub const CM: &str = "cm";
    pub const MM: &str = "mm";
    pub const KM: &str = "km";
    pub const DM: &str = "dm";
    pub const INCH: &str = "in";
    pub const FT: &str = "ft";

    // Force
    pub const N: &str = "N";
    pub const KN: &str = "kN";
    pub const MN: &str = "MN";
    pub const LBF: &str = "lbf";
    pub const KGF: &str = "kgf";

    // Mass
    pub const KG: &str = "kg";
    pub const G: &str = "g";
    pub const TON: &str = "t";
    pub const LB: &str = "lb";

    // Time
    pub const S: &str = "s";
    pub const MIN: &str = "min";
    pub const HR: &str = "hr";

    // Pressure and stress
    pub const PA: &str = "Pa";
    pub const KPA: &str = "kPa";
    pub const MPA: &str = "MPa";
    pub const GPA: &str = "GPa";

    // Temperature
    pub const K: &str = "K";
    pub const DEG_C: &str = "°C";

    // Angle
    pub const RAD: &str = "rad";
    pub const DEG: &str = "°";
}

pub const KNOWN_UNITS: &[&str] = &[
    names::M,
    names::CM,
    names::MM,
    names::KM,
    names::DM,
    names::INCH,
    names::FT,
    names::N,
    names::KN,
    names::MN,
    names::LBF,
    names::KGF,
    names::KG,
    names::G,
    names::TON,
    names::LB,
    names::S,
    names::MIN,
    names::HR,
    names::PA,
    names::KPA,
    names::MPA,
    names::GPA,
    names::K,
    names::DEG_C,
    names::RAD,
    names::DEG,
];

fn unit_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| KNOWN_UNITS.iter().copied().collect())
}

/// Resolves `name` against [`KNOWN_UNITS`].
///
/// The builders accept any unit name; use this when the name comes from user
/// input and a typo should be caught early.
pub fn lookup(name: &str) -> Result<&'static str, ConfigurationError> {
    unit_set()
        .get(name)
        .copied()
        .ok_or_else(|| ConfigurationError::UnknownUnit(name.to_string()))
}

/// `unit exp ^`, e.g. `mm²` for a contract.
pub fn power_unit(unit: impl Into<String>, exp: i32) -> Expr {
    Expr::from_elements(vec![
        Element::unit_operand(unit),
        Element::operand(exp.to_string()),
        Element::operator("^", 2),
    ])
}

/// `n1 n2 * ... d1 / d2 / ...`
///
/// Denominator units are divided one at a time, so `["m"] / ["s", "s"]` reads
/// as `m/s/s`.
pub fn compound_unit<N, D>(numerator: N, denominator: D) -> Result<Expr, ShapeError>
where
    N: IntoIterator,
    N::Item: Into<String>,
    D: IntoIterator,
    D::Item: Into<String>,
{
    let mut numerator = numerator.into_iter();
    let first = numerator.next().ok_or(ShapeError::EmptyUnitNumerator)?;

    let mut elements = vec![Element::unit_operand(first)];
    for unit in numerator {
        elements.push(Element::unit_operand(unit));
        elements.push(Element::operator("*", 2));
    }
    for unit in denominator {
        elements.push(Element::unit_operand(unit));
        elements.push(Element::operator("/", 2));
    }
    Ok(Expr::from_elements(elements))
}

/// `value compound_unit *`
pub fn value_with_compound_unit<N, D>(
    value: impl Into<Literal>,
    numerator: N,
    denominator: D,
) -> Result<Expr, ShapeError>
where
    N: IntoIterator,
    N::Item: Into<String>,
    D: IntoIterator,
    D::Item: Into<String>,
{
    let unit = compound_unit(numerator, denominator)?;
    let value: Literal = value.into();
    Ok(value.into_expr().multiply(unit))
}
