//! SMath Studio `.sm` serialization.
//!
//! ```no_run
//! use smath_model::expr::assign;
//! use smath_model::{MathRegion, Region, Worksheet};
//! use smath_xml::WorksheetExt;
//!
//! let mut ws = Worksheet::new("Beam", "FCC");
//! ws.add(Region::title("Beam calculation"));
//! ws.add(MathRegion::new(assign("L", 3)));
//! ws.save("out/beam.sm")?;
//! # Ok::<(), smath_xml::WriteError>(())
//! ```

mod error;
mod save;
mod write;

use std::path::Path;

use smath_model::Worksheet;

pub use error::WriteError;
pub use save::save;
pub use write::{to_xml_bytes, to_xml_string, write_worksheet};

/// Serialization methods on [`Worksheet`].
pub trait WorksheetExt {
    fn to_xml_string(&self) -> Result<String, WriteError>;
    fn to_xml_bytes(&self) -> Result<Vec<u8>, WriteError>;
    fn save(&self, path: impl AsRef<Path>) -> Result<(), WriteError>;
}

impl WorksheetExt for Worksheet {
    fn to_xml_string(&self) -> Result<String, WriteError> {
        to_xml_string(self)
    }

    fn to_xml_bytes(&self) -> Result<Vec<u8>, WriteError> {
        to_xml_bytes(self)
    }

    fn save(&self, path: impl AsRef<Path>) -> Result<(), WriteError> {
        save(self, path)
    }
}
