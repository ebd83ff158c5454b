//! Panel configuration options.

use embedded_graphics_core::pixelcolor::RgbColor;

use crate::ConfigurationError;

/// Mounting orientation of the panel relative to the device.
///
/// Describes which edge of the panel is at the top of the device when the
/// device is held upright. It is reported to the display stack, the driver
/// itself never rotates content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// No orientation information was configured.
    #[default]
    Unknown,
    /// The top of the panel is the top of the device.
    Normal,
    /// The panel is mounted upside down.
    BottomUp,
    /// The left side of the panel is the top of the device.
    LeftUp,
    /// The right side of the panel is the top of the device.
    RightUp,
}

impl Orientation {
    /// Converts a device-tree style `rotation` property in degrees.
    ///
    /// A missing property means the orientation is [`Unknown`](Self::Unknown).
    /// Only multiples of 90 degrees up to 270 are accepted.
    pub const fn from_rotation(degrees: Option<u32>) -> Result<Self, ConfigurationError> {
        match degrees {
            None => Ok(Self::Unknown),
            Some(0) => Ok(Self::Normal),
            Some(90) => Ok(Self::RightUp),
            Some(180) => Ok(Self::BottomUp),
            Some(270) => Ok(Self::LeftUp),
            Some(_) => Err(ConfigurationError::InvalidRotation),
        }
    }

    /// Returns the rotation in degrees, or `None` for [`Unknown`](Self::Unknown).
    pub const fn rotation(self) -> Option<u32> {
        match self {
            Self::Unknown => None,
            Self::Normal => Some(0),
            Self::RightUp => Some(90),
            Self::BottomUp => Some(180),
            Self::LeftUp => Some(270),
        }
    }
}

/// Tearing effect output setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TearingEffect {
    /// Disable output.
    #[default]
    Off,
    /// Output vertical blanking information.
    Vertical,
    /// Output horizontal and vertical blanking information.
    HorizontalAndVertical,
}

/// Pixel format on the DSI link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 24 bits per pixel.
    Rgb888,
    /// 18 bits per pixel, each pixel padded to 3 bytes.
    Rgb666,
    /// 18 bits per pixel, tightly packed.
    Rgb666Packed,
    /// 16 bits per pixel.
    Rgb565,
}

impl PixelFormat {
    /// Picks the loosely packed link format matching a color type.
    ///
    /// Returns `None` if the color depth has no DSI video format.
    pub const fn from_rgb_color<C: RgbColor>() -> Option<Self> {
        let bpp = C::MAX_R.trailing_ones() + C::MAX_G.trailing_ones() + C::MAX_B.trailing_ones();

        match bpp {
            16 => Some(Self::Rgb565),
            18 => Some(Self::Rgb666),
            24 => Some(Self::Rgb888),
            _ => None,
        }
    }

    /// Bits per pixel on the link.
    pub const fn bits_per_pixel(self) -> u32 {
        match self {
            Self::Rgb888 | Self::Rgb666 => 24,
            Self::Rgb666Packed => 18,
            Self::Rgb565 => 16,
        }
    }
}

/// Video mode transmission flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VideoModeFlags {
    /// Pixel stream is sent in video mode.
    pub video: bool,
    /// Pixels are sent in bursts with the link idling in between.
    pub burst: bool,
    /// Sync pulses are sent instead of sync events.
    pub sync_pulse: bool,
}

/// Link settings the DSI host must apply before the panel is prepared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DsiLinkConfig {
    /// Number of data lanes.
    pub lanes: u8,
    /// Virtual channel.
    pub channel: u8,
    /// Pixel format.
    pub format: PixelFormat,
    /// Video mode flags.
    pub mode_flags: VideoModeFlags,
    /// The host has to be initialized before the panel's prepare runs.
    pub prepare_prev_first: bool,
}

#[cfg(test)]
mod tests {
    use embedded_graphics_core::pixelcolor::{Rgb555, Rgb565, Rgb666, Rgb888};

    use super::*;

    #[test]
    fn rotation_property() {
        assert_eq!(Orientation::from_rotation(None), Ok(Orientation::Unknown));
        assert_eq!(Orientation::from_rotation(Some(0)), Ok(Orientation::Normal));
        assert_eq!(Orientation::from_rotation(Some(90)), Ok(Orientation::RightUp));
        assert_eq!(Orientation::from_rotation(Some(180)), Ok(Orientation::BottomUp));
        assert_eq!(Orientation::from_rotation(Some(270)), Ok(Orientation::LeftUp));
        assert_eq!(
            Orientation::from_rotation(Some(45)),
            Err(ConfigurationError::InvalidRotation)
        );
        assert_eq!(
            Orientation::from_rotation(Some(360)),
            Err(ConfigurationError::InvalidRotation)
        );
    }

    #[test]
    fn rotation_is_reversible() {
        for degrees in [0, 90, 180, 270] {
            let orientation = Orientation::from_rotation(Some(degrees)).unwrap();
            assert_eq!(orientation.rotation(), Some(degrees));
        }
        assert_eq!(Orientation::Unknown.rotation(), None);
    }

    #[test]
    fn pixel_format_from_color() {
        assert_eq!(PixelFormat::from_rgb_color::<Rgb888>(), Some(PixelFormat::Rgb888));
        assert_eq!(PixelFormat::from_rgb_color::<Rgb666>(), Some(PixelFormat::Rgb666));
        assert_eq!(PixelFormat::from_rgb_color::<Rgb565>(), Some(PixelFormat::Rgb565));
        assert_eq!(PixelFormat::from_rgb_color::<Rgb555>(), None);
        assert_eq!(PixelFormat::Rgb888.bits_per_pixel(), 24);
    }
}
