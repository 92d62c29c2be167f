use crate::foundation::error::{EmfError, EmfResult};

/// Application name recorded when the caller does not supply one.
pub const DEFAULT_EDITOR_NAME: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Reference device recorded in the header.
///
/// The ratio between its pixel and millimetre extents converts the drawing bounds
/// into the header's 0.01 mm frame.
pub struct DeviceMetrics {
    /// Device width in pixels.
    pub width_px: u32,
    /// Device height in pixels.
    pub height_px: u32,
    /// Device width in millimetres.
    pub width_mm: u32,
    /// Device height in millimetres.
    pub height_mm: u32,
}

impl Default for DeviceMetrics {
    fn default() -> Self {
        Self {
            width_px: 1280,
            height_px: 1024,
            width_mm: 320,
            height_mm: 240,
        }
    }
}

impl DeviceMetrics {
    /// Reject metrics with a zero extent.
    pub fn validate(&self) -> EmfResult<()> {
        if self.width_px == 0 || self.height_px == 0 {
            return Err(EmfError::validation("device pixel extents must be > 0"));
        }
        if self.width_mm == 0 || self.height_mm == 0 {
            return Err(EmfError::validation("device millimetre extents must be > 0"));
        }
        Ok(())
    }

    /// Convert pixel bounds to 0.01 mm units for this device.
    pub fn to_hmm(&self, width: u32, height: u32) -> EmfResult<(u32, u32)> {
        self.validate()?;
        let w = scale_hmm(width, self.width_mm, self.width_px, "width")?;
        let h = scale_hmm(height, self.height_mm, self.height_px, "height")?;
        Ok((w, h))
    }
}

/// `px * mm * 100 / device_px`; `device_px` is non-zero after validation.
fn scale_hmm(px: u32, mm: u32, device_px: u32, axis: &str) -> EmfResult<u32> {
    let hmm = u64::from(px)
        .checked_mul(u64::from(mm))
        .and_then(|v| v.checked_mul(100))
        .map(|v| v / u64::from(device_px))
        .ok_or_else(|| EmfError::validation(format!("{axis} in 0.01 mm overflows")))?;
    u32::try_from(hmm)
        .map_err(|_| EmfError::validation(format!("{axis} in 0.01 mm exceeds 32 bits")))
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Per-document emission settings.
pub struct EmfOptions {
    /// Logical drawing width in pixels.
    pub width: u32,
    /// Logical drawing height in pixels; also the Y translation of the world
    /// transform.
    pub height: u32,
    /// Output name embedded as the second description string.
    pub output_name: String,
    /// Application name embedded as the first description string.
    #[serde(default = "default_editor_name")]
    pub editor_name: String,
    /// Reference device.
    #[serde(default)]
    pub device: DeviceMetrics,
}

fn default_editor_name() -> String {
    DEFAULT_EDITOR_NAME.to_string()
}

impl EmfOptions {
    /// Options with the default editor name and device.
    pub fn new(width: u32, height: u32, output_name: impl Into<String>) -> Self {
        Self {
            width,
            height,
            output_name: output_name.into(),
            editor_name: default_editor_name(),
            device: DeviceMetrics::default(),
        }
    }

    /// Replace the editor name.
    pub fn with_editor_name(mut self, editor_name: impl Into<String>) -> Self {
        self.editor_name = editor_name.into();
        self
    }

    /// Replace the device metrics.
    pub fn with_device(mut self, device: DeviceMetrics) -> Self {
        self.device = device;
        self
    }

    /// Check the device metrics and that the bounds convert to 0.01 mm.
    pub fn validate(&self) -> EmfResult<()> {
        self.device.to_hmm(self.width, self.height).map(|_| ())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/emit/options.rs"]
mod tests;
