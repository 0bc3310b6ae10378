use std::io;
use std::path::Path;

use base64::Engine as _;

/// An embedded image, stored base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureRegion {
    pub data_base64: String,
    /// Image format as SMath names it (`png`, `jpeg`, `gif`, `bmp`).
    pub format: String,
}

impl PictureRegion {
    pub fn from_base64(data_base64: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            data_base64: data_base64.into(),
            format: format.into(),
        }
    }

    pub fn from_bytes(data: &[u8], format: impl Into<String>) -> Self {
        Self::from_base64(base64::engine::general_purpose::STANDARD.encode(data), format)
    }

    /// Reads an image file; the format comes from the file extension.
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(normalize_format)
            .unwrap_or_else(|| {
                log::warn!("{} has no extension, assuming png", path.display());
                "png".to_string()
            });
        Ok(Self::from_bytes(&data, format))
    }
}

fn normalize_format(ext: &str) -> String {
    let ext = ext.to_ascii_lowercase();
    if ext == "jpg" {
        "jpeg".to_string()
    } else {
        ext
    }
}
