//! Fixed values of the SMath Studio worksheet format.
//!
//! Everything here is a process-wide constant; nothing is populated at runtime.

/// XML namespace shared by every element of a worksheet document.
pub const SMATH_NAMESPACE: &str = "http://smath.info/schemas/worksheet/1.0";

/// Producing application written into the `<?application ...?>` processing instruction.
pub const APP_PROGID: &str = "SMath Studio Desktop";
pub const APP_VERSION: &str = "0.98.6606.22069";

/// An external assembly the consuming application must load to open the worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblySpec {
    pub name: &'static str,
    pub version: &'static str,
    pub guid: &'static str,
}

pub const KNOWN_ASSEMBLIES: &[AssemblySpec] = &[
    AssemblySpec {
        name: "SMath Studio Desktop",
        version: "0.98.6606.22069",
        guid: "a37cba83-b69c-4c71-9992-55ff666763bd",
    },
    AssemblySpec {
        name: "Math Region",
        version: "0.98.6606.22069",
        guid: "02f1ab51-215b-466e-a74d-5d8b1cf85e8d",
    },
    AssemblySpec {
        name: "Text Region",
        version: "1.10.6606.22071",
        guid: "485d28c5-349a-48b6-93be-12a35a1c1e39",
    },
    AssemblySpec {
        name: "Special Functions",
        version: "1.11.6606.22071",
        guid: "2814e667-4e12-48b1-8d51-194e480eabc5",
    },
    AssemblySpec {
        name: "Plot Region",
        version: "1.9.6606.22072",
        guid: "c451c2b5-798b-4f08-b9ec-b90963d1ddaa",
    },
];

/// Assemblies referenced by every new worksheet.
pub const DEFAULT_ASSEMBLIES: &[&str] = &[
    "SMath Studio Desktop",
    "Math Region",
    "Text Region",
    "Special Functions",
];

pub fn assembly_spec(name: &str) -> Option<&'static AssemblySpec> {
    KNOWN_ASSEMBLIES.iter().find(|spec| spec.name == name)
}

pub const COLOR_BLACK: &str = "#000000";
pub const COLOR_BLUE: &str = "#0000ff";
pub const COLOR_WHITE: &str = "#ffffff";
pub const COLOR_GRAY_BG: &str = "#dddddd";
pub const COLOR_YELLOW: &str = "#ffff80";
pub const COLOR_GREEN: &str = "#80ff80";
pub const COLOR_HEADER: &str = "#a9a9a9";
pub const COLOR_BROWN: &str = "#804040";

pub const FONT_TITLE: u32 = 12;
pub const FONT_DEFAULT: u32 = 10;

/// Left margin given to regions added without an explicit `left`.
pub const DEFAULT_LEFT: i32 = 9;
/// `top` of the first region of a worksheet.
pub const DEFAULT_TOP_START: i32 = 9;
/// Height assumed for regions without an explicit `height`.
pub const DEFAULT_HEIGHT: i32 = 24;
/// Vertical gap left between consecutive regions.
pub const REGION_GAP: i32 = 3;
/// Default blank space inserted by [`crate::Worksheet::add_spacing_default`].
pub const LINE_HEIGHT: i32 = 27;
/// Offset between an area's start marker and its terminator region.
pub const AREA_TERMINATOR_OFFSET: i32 = 100;

/// Literal value of the blank operand token.
pub const PLACEHOLDER: &str = ".";
