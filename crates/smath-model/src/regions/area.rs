use super::Region;

/// A collapsible group of regions.
///
/// Areas have no `left`, `width` or `height` of their own. Children keep the
/// positions they were given; unpositioned children are stacked downwards from
/// just below the area's `top` at the default left margin.
///
/// The terminator marker always sits a fixed 100 pixels below the area's `top`.
/// Children laid out past that line are still part of the area but show up
/// below its closing marker in SMath.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AreaRegion {
    pub children: Vec<Region>,
    pub collapsed: bool,
}

impl AreaRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collapsed() -> Self {
        Self {
            children: Vec::new(),
            collapsed: true,
        }
    }

    /// Appends a child and returns it for further adjustment.
    pub fn add(&mut self, region: impl Into<Region>) -> &mut Region {
        self.children.push(region.into());
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn with_child(mut self, region: impl Into<Region>) -> Self {
        self.children.push(region.into());
        self
    }

    /// Number of ids this area occupies: itself, every descendant and its
    /// terminator.
    pub fn id_span(&self) -> u32 {
        2 + self.children.iter().map(region_id_span).sum::<u32>()
    }
}

pub(crate) fn region_id_span(region: &Region) -> u32 {
    region.as_area().map_or(1, AreaRegion::id_span)
}
