//! Worksheet assembly: auto layout and id assignment.

use crate::constants::{
    AREA_TERMINATOR_OFFSET, DEFAULT_HEIGHT, DEFAULT_LEFT, DEFAULT_TOP_START, LINE_HEIGHT,
    REGION_GAP,
};
use crate::regions::Region;
use crate::settings::{Metadata, Settings};

/// An ordered list of top-level regions plus document settings.
///
/// Regions are laid out top to bottom as they are added. Ids are not stored
/// anywhere in the tree; [`Worksheet::finalize`] computes them on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct Worksheet {
    pub settings: Settings,
    regions: Vec<Region>,
    next_top: i32,
}

impl Default for Worksheet {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl Worksheet {
    /// A worksheet whose English metadata carries `title` and `author`.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        let mut worksheet = Self::default();
        let meta: &mut Metadata = worksheet.settings.metadata_mut("eng");
        meta.title = title.into();
        meta.author = author.into();
        worksheet
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            regions: Vec::new(),
            next_top: DEFAULT_TOP_START,
        }
    }

    /// Places `region` and appends it.
    ///
    /// An unset `top` is taken from the layout cursor (the first region always
    /// starts at the top margin); an unset `left` becomes the default margin,
    /// except on areas, which have no horizontal position. The cursor then moves
    /// below the region.
    pub fn add(&mut self, region: impl Into<Region>) -> &mut Region {
        let mut region = region.into();

        let top = match region.top {
            Some(top) => top,
            None if self.regions.is_empty() => DEFAULT_TOP_START,
            None => self.next_top,
        };
        region.top = Some(top);
        if region.left.is_none() && !region.is_area() {
            region.left = Some(DEFAULT_LEFT);
        }

        self.next_top = top + region.height.unwrap_or(DEFAULT_HEIGHT) + REGION_GAP;
        log::debug!(
            "placed {} region at top={top}, cursor now {}",
            region.content.kind_name(),
            self.next_top
        );

        self.regions.push(region);
        let last = self.regions.len() - 1;
        &mut self.regions[last]
    }

    /// Moves the layout cursor down by `pixels`.
    pub fn add_spacing(&mut self, pixels: i32) {
        self.next_top += pixels;
    }

    /// Leaves one blank line.
    pub fn add_spacing_default(&mut self) {
        self.add_spacing(LINE_HEIGHT);
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn regions_mut(&mut self) -> &mut [Region] {
        &mut self.regions
    }

    /// `top` the next auto-placed region would get.
    pub fn cursor(&self) -> i32 {
        self.next_top
    }

    /// Assigns ids in document order.
    ///
    /// Ids start at zero. An area takes one id, then its children take theirs
    /// (recursively), then one more id is reserved for the area's terminator.
    /// Area children without a `top` are stacked from just below the area's own
    /// `top`; a child without a `left` gets the default margin.
    pub fn finalize(&self) -> FinalizedWorksheet<'_> {
        let mut next_id = 0;
        let regions = self
            .regions
            .iter()
            .map(|region| {
                let top = region.top.unwrap_or(DEFAULT_TOP_START);
                place(region, top, &mut next_id)
            })
            .collect();
        log::debug!("finalized worksheet with {next_id} region ids");
        FinalizedWorksheet {
            settings: &self.settings,
            regions,
            id_count: next_id,
        }
    }
}

fn place<'a>(region: &'a Region, top: i32, next_id: &mut u32) -> PlacedRegion<'a> {
    let id = *next_id;
    *next_id += 1;

    let Some(area) = region.as_area() else {
        return PlacedRegion {
            id,
            top,
            left: Some(region.left.unwrap_or(DEFAULT_LEFT)),
            region,
            children: Vec::new(),
            terminator: None,
        };
    };

    // Unpositioned children stack below the area's start marker.
    let mut cursor = top + DEFAULT_HEIGHT + REGION_GAP;
    let mut children = Vec::with_capacity(area.children.len());
    for child in &area.children {
        let child_top = child.top.unwrap_or(cursor);
        cursor = child_top + child.height.unwrap_or(DEFAULT_HEIGHT) + REGION_GAP;
        children.push(place(child, child_top, next_id));
    }
    let terminator = Terminator {
        id: *next_id,
        top: top + AREA_TERMINATOR_OFFSET,
    };
    *next_id += 1;

    PlacedRegion {
        id,
        top,
        left: None,
        region,
        children,
        terminator: Some(terminator),
    }
}

/// A worksheet with ids resolved, ready to serialize.
#[derive(Debug, Clone)]
pub struct FinalizedWorksheet<'a> {
    pub settings: &'a Settings,
    pub regions: Vec<PlacedRegion<'a>>,
    /// Total number of `<region>` elements, terminators included.
    pub id_count: u32,
}

impl<'a> FinalizedWorksheet<'a> {
    /// Every placed region depth-first, in document order. Terminators are not
    /// included.
    pub fn iter(&self) -> impl Iterator<Item = &PlacedRegion<'a>> {
        let mut stack: Vec<&PlacedRegion<'a>> = self.regions.iter().rev().collect();
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(next.children.iter().rev());
            Some(next)
        })
    }
}

#[derive(Debug, Clone)]
pub struct PlacedRegion<'a> {
    pub id: u32,
    pub top: i32,
    /// `None` for areas.
    pub left: Option<i32>,
    pub region: &'a Region,
    pub children: Vec<PlacedRegion<'a>>,
    pub terminator: Option<Terminator>,
}

/// The closing marker region of an area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminator {
    pub id: u32,
    pub top: i32,
}
