//! Worksheet regions.
//!
//! A [`Region`] carries the geometry and styling shared by every kind of region;
//! the kind-specific payload lives in [`RegionContent`].
//!
//! `left` and `top` start out unset. [`crate::Worksheet::add`] fills them in
//! from the layout cursor unless the caller positioned the region explicitly.

mod area;
mod math;
mod picture;
mod plot;
mod text;

pub use area::AreaRegion;
pub use math::{DescriptionPosition, MathDescription, MathRegion, MathResult, ResultAction};
pub use picture::PictureRegion;
pub use plot::{PlotKind, PlotRegion};
pub use text::{Paragraph, TextRegion};

use crate::constants::{
    COLOR_BLACK, COLOR_BLUE, COLOR_GRAY_BG, COLOR_WHITE, FONT_DEFAULT, FONT_TITLE,
};

/// Colors, font size and border of a region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionStyle {
    pub color: String,
    pub bg_color: String,
    pub font_size: u32,
    pub border: bool,
}

impl Default for RegionStyle {
    fn default() -> Self {
        Self {
            color: COLOR_BLACK.to_string(),
            bg_color: COLOR_WHITE.to_string(),
            font_size: FONT_DEFAULT,
            border: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RegionContent {
    Text(TextRegion),
    Math(MathRegion),
    Plot(PlotRegion),
    Picture(PictureRegion),
    Area(AreaRegion),
}

impl RegionContent {
    /// Short name of the region kind, used in log messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            RegionContent::Text(_) => "text",
            RegionContent::Math(_) => "math",
            RegionContent::Plot(_) => "plot",
            RegionContent::Picture(_) => "picture",
            RegionContent::Area(_) => "area",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub left: Option<i32>,
    pub top: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub style: RegionStyle,
    pub content: RegionContent,
}

impl Region {
    pub fn new(content: impl Into<RegionContent>) -> Self {
        Self {
            left: None,
            top: None,
            width: None,
            height: None,
            style: RegionStyle::default(),
            content: content.into(),
        }
    }

    /// Bold blue heading in the larger title font.
    pub fn title(text: impl Into<String>) -> Self {
        Self::title_in("eng", text)
    }

    /// [`Region::title`] in another language.
    pub fn title_in(lang: impl Into<String>, text: impl Into<String>) -> Self {
        Region::new(TextRegion::with_lang(lang, text).bold())
            .with_color(COLOR_BLUE)
            .with_font_size(FONT_TITLE)
    }

    /// Bordered divider on a gray background.
    pub fn section(text: impl Into<String>) -> Self {
        Self::section_in("eng", text)
    }

    pub fn section_in(lang: impl Into<String>, text: impl Into<String>) -> Self {
        Region::new(TextRegion::with_lang(lang, text))
            .with_border(true)
            .with_bg_color(COLOR_GRAY_BG)
    }

    pub fn at(mut self, left: i32, top: i32) -> Self {
        self.left = Some(left);
        self.top = Some(top);
        self
    }

    pub fn with_left(mut self, left: i32) -> Self {
        self.left = Some(left);
        self
    }

    pub fn with_top(mut self, top: i32) -> Self {
        self.top = Some(top);
        self
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_height(mut self, height: i32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.style.color = color.into();
        self
    }

    pub fn with_bg_color(mut self, color: impl Into<String>) -> Self {
        self.style.bg_color = color.into();
        self
    }

    pub fn with_font_size(mut self, size: u32) -> Self {
        self.style.font_size = size;
        self
    }

    pub fn with_border(mut self, border: bool) -> Self {
        self.style.border = border;
        self
    }

    pub fn is_area(&self) -> bool {
        matches!(self.content, RegionContent::Area(_))
    }

    pub fn as_area(&self) -> Option<&AreaRegion> {
        match &self.content {
            RegionContent::Area(area) => Some(area),
            _ => None,
        }
    }

    pub fn as_area_mut(&mut self) -> Option<&mut AreaRegion> {
        match &mut self.content {
            RegionContent::Area(area) => Some(area),
            _ => None,
        }
    }
}

macro_rules! impl_region_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for RegionContent {
                fn from(value: $ty) -> Self {
                    RegionContent::$variant(value)
                }
            }

            impl From<$ty> for Region {
                fn from(value: $ty) -> Self {
                    Region::new(value)
                }
            }
        )*
    };
}

impl_region_from!(
    Text(TextRegion),
    Math(MathRegion),
    Plot(PlotRegion),
    Picture(PictureRegion),
    Area(AreaRegion),
);
