//! In-memory model of SMath Studio worksheets.
//!
//! Expressions are built as postfix token streams with the combinators in
//! [`expr`], wrapped in [`Region`]s and added to a [`Worksheet`], which lays
//! them out vertically. Serialization lives in the `smath-xml` crate.
//!
//! ```
//! use smath_model::expr::{assign, variable};
//! use smath_model::{MathRegion, Worksheet};
//!
//! let mut ws = Worksheet::new("Demo", "");
//! ws.add(MathRegion::new(assign("x", 5)));
//! ws.add(MathRegion::new(assign("y", variable("x").power(2))));
//! assert_eq!(ws.regions()[1].top, Some(36));
//! ```

pub mod builtins;
pub mod constants;
mod error;
pub mod expr;
pub mod regions;
pub mod settings;
pub mod units;
mod worksheet;

pub use error::{BuildError, ConfigurationError, ShapeError};
pub use expr::{Element, ElementKind, ElementStyle, Expr, Literal};
pub use regions::{
    AreaRegion, MathRegion, PictureRegion, PlotRegion, Region, RegionContent, RegionStyle,
    TextRegion,
};
pub use settings::Settings;
pub use worksheet::{FinalizedWorksheet, PlacedRegion, Terminator, Worksheet};
