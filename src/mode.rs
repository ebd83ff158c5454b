//! Display mode description reported to the display stack.

use core::fmt::Write;

use embedded_graphics_core::geometry::Size;
use heapless::{String, Vec};

use crate::options::Orientation;

/// Capacity of a mode name, enough for "WIDTHxHEIGHT" with 5 digit sides.
pub const MODE_NAME_LEN: usize = 16;

/// Mode type flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeType {
    /// The mode was provided by the panel driver.
    pub driver: bool,
    /// The mode should be picked over other modes.
    pub preferred: bool,
}

/// Video timing of a display mode.
///
/// Horizontal values are in pixels, vertical values in lines. Sync start,
/// sync end and total are absolute positions counted from the start of the
/// active area, so `display <= sync_start <= sync_end <= total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMode {
    /// Pixel clock in kHz.
    pub clock: u32,

    /// Active pixels per line.
    pub hdisplay: u16,
    /// Pixel at which horizontal sync starts.
    pub hsync_start: u16,
    /// Pixel at which horizontal sync ends.
    pub hsync_end: u16,
    /// Total pixels per line, including blanking.
    pub htotal: u16,

    /// Active lines per frame.
    pub vdisplay: u16,
    /// Line at which vertical sync starts.
    pub vsync_start: u16,
    /// Line at which vertical sync ends.
    pub vsync_end: u16,
    /// Total lines per frame, including blanking.
    pub vtotal: u16,

    /// Physical width of the active area in millimetres.
    pub width_mm: u16,
    /// Physical height of the active area in millimetres.
    pub height_mm: u16,

    pub mode_type: ModeType,
}

impl DisplayMode {
    /// Active area in pixels.
    pub const fn size(&self) -> Size {
        Size::new(self.hdisplay as u32, self.vdisplay as u32)
    }

    /// Refresh rate in Hz, rounded to the nearest integer.
    pub const fn vrefresh(&self) -> u32 {
        let pixels_per_frame = self.htotal as u32 * self.vtotal as u32;
        if pixels_per_frame == 0 {
            return 0;
        }
        let num = self.clock as u64 * 1000;
        let den = pixels_per_frame as u64;
        ((num + den / 2) / den) as u32
    }

    /// Mode name in the usual "WIDTHxHEIGHT" form.
    pub fn name(&self) -> String<MODE_NAME_LEN> {
        let mut name = String::new();
        // Two u16 values and a separator always fit.
        let _ = write!(name, "{}x{}", self.hdisplay, self.vdisplay);
        name
    }
}

impl core::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}x{}@{}", self.hdisplay, self.vdisplay, self.vrefresh())
    }
}

/// The single mode of the CWU50 panel.
pub const CWU50_MODE: DisplayMode = DisplayMode {
    clock: 62_500,

    hdisplay: 720,
    hsync_start: 720 + 43,
    hsync_end: 720 + 43 + 20,
    htotal: 720 + 43 + 20 + 20,

    vdisplay: 1280,
    vsync_start: 1280 + 8,
    vsync_end: 1280 + 8 + 2,
    vtotal: 1280 + 8 + 2 + 16,

    width_mm: 64,
    height_mm: 114,

    mode_type: ModeType {
        driver: false,
        preferred: false,
    },
};

/// Error returned when modes are reported to a [`Connector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeError {
    /// The connector has no room for another mode.
    OutOfSlots,
}

/// Receiver of the modes and physical properties of a panel.
///
/// Implemented by the display stack's connector object.
pub trait Connector {
    /// Adds a probed mode.
    fn add_probed_mode(&mut self, mode: DisplayMode) -> Result<(), ModeError>;

    /// Sets the physical size of the display in millimetres.
    fn set_physical_size(&mut self, width_mm: u16, height_mm: u16);

    /// Sets the mounting orientation of the panel.
    fn set_panel_orientation(&mut self, orientation: Orientation);
}

impl<T: Connector + ?Sized> Connector for &mut T {
    fn add_probed_mode(&mut self, mode: DisplayMode) -> Result<(), ModeError> {
        T::add_probed_mode(self, mode)
    }

    fn set_physical_size(&mut self, width_mm: u16, height_mm: u16) {
        T::set_physical_size(self, width_mm, height_mm)
    }

    fn set_panel_orientation(&mut self, orientation: Orientation) {
        T::set_panel_orientation(self, orientation)
    }
}

/// Fixed capacity [`Connector`] that stores what a panel reports.
#[derive(Debug, Clone, Default)]
pub struct ConnectorInfo<const N: usize> {
    /// Probed modes, in the order they were added.
    pub modes: Vec<DisplayMode, N>,
    /// Physical width in millimetres.
    pub width_mm: u16,
    /// Physical height in millimetres.
    pub height_mm: u16,
    /// Panel orientation.
    pub orientation: Orientation,
}

impl<const N: usize> ConnectorInfo<N> {
    /// Creates an empty connector.
    pub const fn new() -> Self {
        Self {
            modes: Vec::new(),
            width_mm: 0,
            height_mm: 0,
            orientation: Orientation::Unknown,
        }
    }

    /// Returns the first mode flagged as preferred.
    pub fn preferred_mode(&self) -> Option<&DisplayMode> {
        self.modes.iter().find(|mode| mode.mode_type.preferred)
    }
}

impl<const N: usize> Connector for ConnectorInfo<N> {
    fn add_probed_mode(&mut self, mode: DisplayMode) -> Result<(), ModeError> {
        self.modes.push(mode).map_err(|_| ModeError::OutOfSlots)
    }

    fn set_physical_size(&mut self, width_mm: u16, height_mm: u16) {
        self.width_mm = width_mm;
        self.height_mm = height_mm;
    }

    fn set_panel_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cwu50_mode_values() {
        let mode = CWU50_MODE;
        assert_eq!(mode.clock, 62_500);
        assert_eq!(mode.size(), Size::new(720, 1280));
        assert_eq!((mode.hsync_start, mode.hsync_end, mode.htotal), (763, 783, 803));
        assert_eq!((mode.vsync_start, mode.vsync_end, mode.vtotal), (1288, 1290, 1306));
        assert_eq!((mode.width_mm, mode.height_mm), (64, 114));
    }

    #[test]
    fn refresh_and_name() {
        assert_eq!(CWU50_MODE.vrefresh(), 60);
        assert_eq!(CWU50_MODE.name().as_str(), "720x1280");

        let mut text: String<32> = String::new();
        write!(text, "{}", CWU50_MODE).unwrap();
        assert_eq!(text.as_str(), "720x1280@60");
    }

    #[test]
    fn zero_total_has_no_refresh() {
        let mode = DisplayMode {
            htotal: 0,
            ..CWU50_MODE
        };
        assert_eq!(mode.vrefresh(), 0);
    }

    #[test]
    fn connector_capacity() {
        let mut full = ConnectorInfo::<0>::new();
        assert_eq!(full.add_probed_mode(CWU50_MODE), Err(ModeError::OutOfSlots));

        let mut connector = ConnectorInfo::<2>::new();
        let preferred = DisplayMode {
            mode_type: ModeType {
                driver: true,
                preferred: true,
            },
            ..CWU50_MODE
        };
        connector.add_probed_mode(CWU50_MODE).unwrap();
        connector.add_probed_mode(preferred).unwrap();
        assert_eq!(connector.preferred_mode(), Some(&preferred));
    }
}
