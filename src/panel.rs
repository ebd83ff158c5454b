//! Panel operations exposed to the display stack.

use embedded_hal_async::delay::DelayNs;

use crate::{
    mode::{Connector, DisplayMode, ModeError},
    options::Orientation,
};

/// Lifecycle and mode queries of a display panel.
///
/// The display stack calls the lifecycle operations in the order
/// `prepare`, `enable`, `disable`, `unprepare`. Repeating an operation that
/// has already taken effect succeeds without touching the hardware.
pub trait Panel {
    /// Error type
    type Error: core::fmt::Debug;

    /// Powers the panel up and programs the controller.
    ///
    /// Afterwards the DSI link can carry commands but nothing is shown.
    async fn prepare<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error>;

    /// Wakes the controller and turns the display on.
    async fn enable<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error>;

    /// Turns the display off and puts the controller to sleep.
    async fn disable<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error>;

    /// Holds the controller in reset and powers the panel down.
    async fn unprepare<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error>;

    /// Supported modes, preferred mode first.
    fn modes(&self) -> &'static [DisplayMode];

    /// Mounting orientation.
    fn orientation(&self) -> Orientation;

    /// Reports the supported modes, the physical size and the orientation to
    /// a connector. Returns the number of modes added.
    fn get_modes<C: Connector>(&self, connector: &mut C) -> Result<usize, ModeError> {
        let modes = self.modes();

        for mode in modes {
            if let Err(e) = connector.add_probed_mode(*mode) {
                log::error!("Failed to add mode {}", mode);
                return Err(e);
            }
        }

        if let Some(mode) = modes.first() {
            connector.set_physical_size(mode.width_mm, mode.height_mm);
        }
        connector.set_panel_orientation(self.orientation());

        Ok(modes.len())
    }
}
