//! [super::Cwu50] builder module

use embedded_hal::digital::OutputPin;

use crate::{interface::Interface, options::Orientation, power::Regulator, Cwu50, PanelState};

/// Builder for [Cwu50] instances.
///
/// Takes ownership of the DSI interface, both supplies and the reset pin.
/// Deployment configuration, such as the mounting orientation, is set
/// before [`build`](Self::build) is called.
pub struct Builder<DI, REG, RST> {
    di: DI,
    vci: REG,
    iovcc: REG,
    rst: RST,
    orientation: Result<Orientation, ConfigurationError>,
}

impl<DI, REG, RST> Builder<DI, REG, RST>
where
    DI: Interface,
    REG: Regulator,
    RST: OutputPin,
{
    /// Creates a builder. `vci` is the core supply, `iovcc` the I/O supply.
    #[must_use]
    pub fn new(di: DI, vci: REG, iovcc: REG, rst: RST) -> Self {
        Self {
            di,
            vci,
            iovcc,
            rst,
            orientation: Ok(Orientation::Unknown),
        }
    }

    /// Sets the mounting orientation reported to the display stack.
    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Ok(orientation);
        self
    }

    /// Sets the orientation from a `rotation` property in degrees.
    ///
    /// Invalid values are reported by [`build`](Self::build).
    #[must_use]
    pub fn rotation_property(mut self, degrees: Option<u32>) -> Self {
        self.orientation = Orientation::from_rotation(degrees);
        self
    }

    /// Creates the panel driver.
    ///
    /// The reset line is driven low, holding the controller in reset until
    /// the panel is prepared. The supplies are left untouched.
    pub fn build(mut self) -> Result<Cwu50<DI, REG, RST>, BuildError<RST::Error>> {
        let orientation = self
            .orientation
            .map_err(BuildError::InvalidConfiguration)?;

        self.rst.set_low().map_err(BuildError::ResetPin)?;

        Ok(Cwu50 {
            di: self.di,
            vci: self.vci,
            iovcc: self.iovcc,
            rst: self.rst,
            orientation,
            state: PanelState::Unpowered,
        })
    }
}

/// Error returned by [`Builder::build`].
#[derive(Debug)]
pub enum BuildError<PinError> {
    /// Error caused by the reset pin.
    ResetPin(PinError),

    /// Invalid configuration error.
    InvalidConfiguration(ConfigurationError),
}

/// Configuration error.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The rotation is not one of 0, 90, 180 or 270 degrees.
    InvalidRotation,
}

impl core::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidRotation => f.write_str("invalid rotation"),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::cell::RefCell;

    use crate::{
        _mock::{Event, Journal, MockDsi, MockOutputPin, MockRegulator},
        panel::Panel,
        power::Supply,
    };

    use super::*;

    #[test]
    fn build_holds_panel_in_reset() {
        let journal = RefCell::new(Journal::new());

        let panel = Builder::new(
            MockDsi::new(&journal),
            MockRegulator::new(Supply::Vci, &journal),
            MockRegulator::new(Supply::Iovcc, &journal),
            MockOutputPin::new(&journal),
        )
        .orientation(Orientation::RightUp)
        .build()
        .unwrap();

        assert_eq!(panel.state(), PanelState::Unpowered);
        assert_eq!(panel.orientation(), Orientation::RightUp);
        assert_eq!(journal.borrow().as_slice(), &[Event::Pin(false)]);
    }

    #[test]
    fn invalid_rotation_is_rejected() {
        let journal = RefCell::new(Journal::new());

        let result = Builder::new(
            MockDsi::new(&journal),
            MockRegulator::new(Supply::Vci, &journal),
            MockRegulator::new(Supply::Iovcc, &journal),
            MockOutputPin::new(&journal),
        )
        .rotation_property(Some(45))
        .build();

        assert!(matches!(
            result,
            Err(BuildError::InvalidConfiguration(
                ConfigurationError::InvalidRotation
            ))
        ));
        assert!(journal.borrow().is_empty());
    }

    #[test]
    fn rotation_property_sets_orientation() {
        let journal = RefCell::new(Journal::new());

        let panel = Builder::new(
            MockDsi::new(&journal),
            MockRegulator::new(Supply::Vci, &journal),
            MockRegulator::new(Supply::Iovcc, &journal),
            MockOutputPin::new(&journal),
        )
        .rotation_property(Some(270))
        .build()
        .unwrap();

        assert_eq!(panel.orientation(), Orientation::LeftUp);
    }
}
