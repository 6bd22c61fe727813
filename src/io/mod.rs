#[cfg(feature = "svg-io")]
mod svg;

#[cfg(feature = "dxf-io")]
mod dxf;

/// Drawing layers, in creation order.
pub const LAYERS: [&str; 5] = [
    LAYER_CAM,
    LAYER_GUIDE,
    LAYER_PRESSURE,
    LAYER_PINS,
    LAYER_TEXT,
];
pub const LAYER_CAM: &str = "Hypocycloid_Cam";
pub const LAYER_GUIDE: &str = "Hypocycloid_Guide";
pub const LAYER_PRESSURE: &str = "Hypocycloid_Pressure";
pub const LAYER_PINS: &str = "Hypocycloid_Pins";
pub const LAYER_TEXT: &str = "Hypocycloid_Text";

/// Generic I/O and format‑conversion errors.
///
/// Format writers are behind cargo feature‑flags. When a feature is disabled
/// the corresponding variant does not exist.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("std::io::Error: {0}")]
    StdIo(#[from] std::io::Error),

    #[error("Input is malformed: {0}")]
    MalformedInput(String),

    #[cfg(feature = "dxf-io")]
    /// Error bubbled up from the `dxf` crate while writing a drawing.
    #[error("DXF error: {0}")]
    Dxf(#[from] ::dxf::DxfError),
}

/// Output tessellation needs at least a triangle per circle.
#[cfg(any(feature = "svg-io", feature = "dxf-io"))]
pub(crate) fn check_circle_segments(segments: usize) -> Result<(), IoError> {
    if segments < 3 {
        return Err(IoError::MalformedInput(format!(
            "circle_segments must be at least 3, got {segments}"
        )));
    }
    Ok(())
}
