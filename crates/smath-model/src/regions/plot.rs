use crate::expr::Expr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlotKind {
    #[default]
    TwoD,
    ThreeD,
}

impl PlotKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TwoD => "2d",
            Self::ThreeD => "3d",
        }
    }
}

/// A chart; each input is one plotted function, point set or plotter call.
///
/// Axis parameters are indexed `[x, y, z]`. Only values that differ from the
/// identity (scale 1, rotate 0, transpose 0) end up in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotRegion {
    pub inputs: Vec<Expr>,
    pub kind: PlotKind,
    pub render: String,
    pub grid: bool,
    pub axes: bool,
    pub scale: [f64; 3],
    pub rotate: [i32; 3],
    pub transpose: [i32; 3],
    pub animate: Option<String>,
    pub show_input_data: bool,
}

impl Default for PlotRegion {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            kind: PlotKind::default(),
            render: "lines".to_string(),
            grid: true,
            axes: true,
            scale: [1.0; 3],
            rotate: [0; 3],
            transpose: [0; 3],
            animate: None,
            show_input_data: true,
        }
    }
}

impl PlotRegion {
    pub fn new<I>(inputs: I) -> Self
    where
        I: IntoIterator<Item = Expr>,
    {
        Self {
            inputs: inputs.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn push_input(&mut self, input: Expr) {
        self.inputs.push(input);
    }

    pub fn with_kind(mut self, kind: PlotKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_render(mut self, render: impl Into<String>) -> Self {
        self.render = render.into();
        self
    }

    pub fn with_scale(mut self, x: f64, y: f64, z: f64) -> Self {
        self.scale = [x, y, z];
        self
    }

    pub fn with_rotation(mut self, x: i32, y: i32, z: i32) -> Self {
        self.rotate = [x, y, z];
        self
    }

    pub fn with_transpose(mut self, x: i32, y: i32, z: i32) -> Self {
        self.transpose = [x, y, z];
        self
    }

    pub fn with_animation(mut self, tag: impl Into<String>) -> Self {
        self.animate = Some(tag.into());
        self
    }

    pub fn hide_input_data(mut self) -> Self {
        self.show_input_data = false;
        self
    }
}
