//! Document-wide settings written to the `<settings>` block.
//!
//! Every type here deserializes with defaults for missing fields, so a settings
//! file only needs to name what it changes:
//!
//! ```
//! let settings = smath_model::Settings::from_json_str(r#"{ "precision": 6 }"#).unwrap();
//! assert_eq!(settings.precision, 6);
//! assert_eq!(settings.exponential_threshold, 5);
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{assembly_spec, AssemblySpec, COLOR_HEADER, DEFAULT_ASSEMBLIES};
use crate::error::ConfigurationError;

/// Per-language document properties.
///
/// Empty fields are left out of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub lang: String,
    pub title: String,
    pub author: String,
    pub description: String,
    pub translator: String,
    pub company: String,
    pub keywords: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self::new("eng")
    }
}

impl Metadata {
    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            title: String::new(),
            author: String::new(),
            description: String::new(),
            translator: String::new(),
            company: String::new(),
            keywords: String::new(),
        }
    }

    /// `(element name, value)` for every non-empty field, in document order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("title", self.title.as_str()),
            ("author", self.author.as_str()),
            ("translator", self.translator.as_str()),
            ("description", self.description.as_str()),
            ("company", self.company.as_str()),
            ("keywords", self.keywords.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaperSize {
    #[default]
    A4,
    Letter,
}

impl PaperSize {
    /// SMath paper id.
    #[must_use]
    pub fn id(self) -> u32 {
        match self {
            Self::A4 => 9,
            Self::Letter => 1,
        }
    }

    /// `(width, height)` in hundredths of an inch, portrait.
    #[must_use]
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Self::A4 => (827, 1169),
            Self::Letter => (850, 1100),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Portrait => "Portrait",
            Self::Landscape => "Landscape",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paper {
    pub id: u32,
    pub orientation: Orientation,
    pub width: u32,
    pub height: u32,
}

impl Default for Paper {
    fn default() -> Self {
        PaperSize::A4.into()
    }
}

impl From<PaperSize> for Paper {
    fn from(size: PaperSize) -> Self {
        let (width, height) = size.dimensions();
        Self {
            id: size.id(),
            orientation: Orientation::Portrait,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 39,
            right: 39,
            top: 39,
            bottom: 39,
        }
    }
}

/// Page header or footer. `&[...]` fields are expanded by SMath when printing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageBand {
    pub text: String,
    pub alignment: String,
    pub color: String,
}

impl PageBand {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            alignment: "Center".to_string(),
            color: COLOR_HEADER.to_string(),
        }
    }
}

impl Default for PageBand {
    fn default() -> Self {
        Self::new("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageModel {
    pub active: bool,
    pub print_areas: bool,
    pub simple_equals_only: bool,
    pub print_background_images: bool,
    pub view_mode: Option<String>,
    pub print_grid: Option<bool>,
    pub paper: Paper,
    pub margins: Margins,
    pub header: PageBand,
    pub footer: PageBand,
}

impl Default for PageModel {
    fn default() -> Self {
        Self {
            active: false,
            print_areas: true,
            simple_equals_only: false,
            print_background_images: true,
            view_mode: None,
            print_grid: None,
            paper: Paper::default(),
            margins: Margins::default(),
            header: PageBand::new("&[DATE] &[TIME] - &[FILENAME]"),
            footer: PageBand::new("&[PAGENUM] / &[COUNT]"),
        }
    }
}

/// A plugin assembly the worksheet depends on.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Assembly {
    pub name: String,
    pub version: String,
    pub guid: String,
}

impl From<&AssemblySpec> for Assembly {
    fn from(spec: &AssemblySpec) -> Self {
        Self {
            name: spec.name.to_string(),
            version: spec.version.to_string(),
            guid: spec.guid.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Document identity; a fresh random id unless loaded.
    pub doc_id: Uuid,
    pub revision: u32,
    pub dpi: u32,
    pub metadata: Vec<Metadata>,
    /// Displayed decimal places.
    pub precision: u32,
    pub exponential_threshold: u32,
    pub fractions: String,
    pub page_model: PageModel,
    pub assemblies: Vec<Assembly>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            doc_id: Uuid::new_v4(),
            revision: 1,
            dpi: 96,
            metadata: vec![Metadata::default()],
            precision: 4,
            exponential_threshold: 5,
            fractions: "decimal".to_string(),
            page_model: PageModel::default(),
            assemblies: default_assemblies(),
        }
    }
}

fn default_assemblies() -> Vec<Assembly> {
    DEFAULT_ASSEMBLIES
        .iter()
        .filter_map(|name| assembly_spec(name))
        .map(Assembly::from)
        .collect()
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn metadata(&self, lang: &str) -> Option<&Metadata> {
        self.metadata.iter().find(|m| m.lang == lang)
    }

    /// Metadata for `lang`, created empty if the language is not present yet.
    pub fn metadata_mut(&mut self, lang: &str) -> &mut Metadata {
        let idx = match self.metadata.iter().position(|m| m.lang == lang) {
            Some(idx) => idx,
            None => {
                self.metadata.push(Metadata::new(lang));
                self.metadata.len() - 1
            }
        };
        &mut self.metadata[idx]
    }

    /// Replaces the metadata block for `metadata.lang`, or appends it.
    pub fn set_metadata(&mut self, metadata: Metadata) {
        let lang = metadata.lang.clone();
        *self.metadata_mut(&lang) = metadata;
    }

    /// Adds a dependency from [`crate::constants::KNOWN_ASSEMBLIES`].
    ///
    /// Adding an assembly that is already listed does nothing.
    pub fn add_assembly(&mut self, name: &str) -> Result<(), ConfigurationError> {
        let spec = assembly_spec(name)
            .ok_or_else(|| ConfigurationError::UnknownAssembly(name.to_string()))?;
        if self.assemblies.iter().any(|a| a.name == spec.name) {
            log::debug!("assembly {name} already listed");
            return Ok(());
        }
        self.assemblies.push(Assembly::from(spec));
        Ok(())
    }
}
