#![no_std]
#![allow(async_fn_in_trait)]

//! This crate provides an asynchronous power and protocol lifecycle driver
//! for the Clockwork CWU50, a 5" 720x1280 MIPI-DSI video mode panel with a
//! JD9365DA-H3 controller.
//!
//! The driver sequences the two supplies (`iovcc` for the I/O logic and
//! `vci` for the core), the active low reset line and the controller's
//! register table, and moves the panel through the states
//! [`Unpowered`](PanelState::Unpowered), [`Prepared`](PanelState::Prepared)
//! and [`Displaying`](PanelState::Displaying). Pixel data is streamed by the
//! DSI host in video mode and is not handled here.
//!
//! ```
//! use core::cell::RefCell;
//! use cwu50::{
//!     Builder, Panel, PanelState,
//!     _mock::{Journal, MockDelay, MockDsi, MockOutputPin, MockRegulator},
//!     options::Orientation,
//!     power::Supply,
//! };
//!
//! # tokio_test::block_on(async {
//! # let journal = RefCell::new(Journal::new());
//! # let di = MockDsi::new(&journal);
//! # let vci = MockRegulator::new(Supply::Vci, &journal);
//! # let iovcc = MockRegulator::new(Supply::Iovcc, &journal);
//! # let rst = MockOutputPin::new(&journal);
//! # let mut delay = MockDelay::new(&journal);
//! let mut panel = Builder::new(di, vci, iovcc, rst)
//!     .orientation(Orientation::RightUp)
//!     .build()
//!     .unwrap();
//!
//! panel.prepare(&mut delay).await.unwrap();
//! panel.enable(&mut delay).await.unwrap();
//! assert_eq!(panel.state(), PanelState::Displaying);
//!
//! panel.disable(&mut delay).await.unwrap();
//! panel.unprepare(&mut delay).await.unwrap();
//! assert_eq!(panel.state(), PanelState::Unpowered);
//! # });
//! ```

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;
use log::{debug, error, warn};

pub mod interface;
use interface::Interface;

pub mod options;
use options::{DsiLinkConfig, Orientation, PixelFormat, TearingEffect, VideoModeFlags};

mod builder;
pub use builder::*;

pub mod dcs;
use dcs::{
    EnterSleepMode, ExitSleepMode, InterfaceExt, SetDisplayOff, SetDisplayOn, SetTearingEffect,
};

mod error;
pub use error::*;

pub mod init_sequence;
use init_sequence::INIT_SEQUENCE;

pub mod mode;
use mode::{DisplayMode, ModeType, CWU50_MODE};

mod panel;
pub use panel::Panel;

pub mod power;
use power::{Regulator, Supply};

pub mod timing;

#[doc(hidden)]
pub mod _mock;

/// Power state of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    /// Supplies are off and the controller is held in reset.
    Unpowered,
    /// Supplies are on and the register table has been written. The
    /// controller is asleep.
    Prepared,
    /// The controller is awake and the display is on.
    Displaying,
}

/// Preferred mode as reported to the display stack.
static MODES: [DisplayMode; 1] = [DisplayMode {
    mode_type: ModeType {
        driver: true,
        preferred: true,
    },
    ..CWU50_MODE
}];

/// Shorthand for the [Error] type of a [Cwu50] driver.
pub type PanelError<DI, REG, RST> = Error<
    <DI as Interface>::Error,
    <REG as Regulator>::Error,
    <RST as embedded_hal::digital::ErrorType>::Error,
>;

/// CWU50 panel driver.
pub struct Cwu50<DI, REG, RST> {
    /// The DSI command interface.
    di: DI,
    /// Core supply.
    vci: REG,
    /// I/O supply.
    iovcc: REG,
    /// Reset pin, active low.
    rst: RST,
    /// Mounting orientation.
    orientation: Orientation,
    state: PanelState,
}

impl<DI, REG, RST> Cwu50<DI, REG, RST>
where
    DI: Interface,
    REG: Regulator,
    RST: OutputPin,
{
    /// Link settings the DSI host has to be configured with.
    pub const LINK: DsiLinkConfig = DsiLinkConfig {
        lanes: 4,
        channel: 0,
        format: PixelFormat::Rgb888,
        mode_flags: VideoModeFlags {
            video: true,
            burst: true,
            sync_pulse: true,
        },
        prepare_prev_first: true,
    };

    /// Returns the current power state.
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Returns `true` if the panel is powered, whether or not the display is on.
    pub fn is_prepared(&self) -> bool {
        self.state != PanelState::Unpowered
    }

    /// Returns `true` if the display is on.
    pub fn is_enabled(&self) -> bool {
        self.state == PanelState::Displaying
    }

    /// Releases the DSI interface, the `vci` and `iovcc` supplies and the
    /// reset pin, in that order.
    ///
    /// The hardware is left in its current state. Use
    /// [`power_off_and_release`](Self::power_off_and_release) to power the
    /// panel down first.
    pub fn release(self) -> (DI, REG, REG, RST) {
        (self.di, self.vci, self.iovcc, self.rst)
    }

    /// Powers the panel down if needed, then releases the resources like
    /// [`release`](Self::release) does.
    ///
    /// The resources are returned even if powering down reported an error.
    pub async fn power_off_and_release<D: DelayNs>(
        mut self,
        delay: &mut D,
    ) -> ((DI, REG, REG, RST), Result<(), PanelError<DI, REG, RST>>) {
        let result = self.unprepare(delay).await;
        (self.release(), result)
    }

    fn transport_failed(action: &str, error: DI::Error) -> PanelError<DI, REG, RST> {
        error!("Failed to {}: {:?}", action, error);
        Error::Transport(error)
    }

    fn supply_failed(
        action: &str,
        supply: Supply,
        error: REG::Error,
    ) -> PanelError<DI, REG, RST> {
        error!("Failed to {} {} supply: {:?}", action, supply, error);
        Error::Supply { supply, error }
    }

    /// Pulses the reset line high, low, high.
    ///
    /// The level of the line at power on is unknown, starting high
    /// guarantees a clean falling edge.
    async fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), RST::Error> {
        debug!("Resetting panel");
        self.rst.set_high()?;
        delay.delay_us(timing::RESET_HIGH_HOLD_US).await;
        self.rst.set_low()?;
        delay.delay_us(timing::RESET_LOW_PULSE_US).await;
        self.rst.set_high()?;
        delay.delay_us(timing::RESET_RELEASE_SETTLE_US).await;
        Ok(())
    }

    /// Writes the register table, stopping at the first failed write.
    async fn send_init_sequence(&mut self) -> Result<(), DI::Error> {
        debug!("Sending initialization sequence");
        for cmd in INIT_SEQUENCE.iter() {
            if let Err(e) = self.di.write_init_command(cmd).await {
                error!("Sending command {:#04x} failed: {:?}", cmd.register(), e);
                return Err(e);
            }
        }
        Ok(())
    }

    async fn reset_and_init<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<(), PanelError<DI, REG, RST>> {
        if let Err(e) = self.reset(delay).await {
            return Err(Error::ResetPin(e));
        }
        self.send_init_sequence().await.map_err(Error::Transport)
    }

    /// Undoes a partially completed prepare after both supplies were enabled.
    ///
    /// Failures are logged, the caller reports the error that triggered the
    /// rollback.
    async fn abort_prepare<D: DelayNs>(&mut self, delay: &mut D) {
        if let Err(e) = self.rst.set_low() {
            error!("Failed to put panel in reset: {:?}", e);
        }
        delay.delay_us(timing::ROLLBACK_RESET_HOLD_US).await;

        if let Err(e) = self.vci.disable().await {
            error!("Failed to disable {} supply: {:?}", Supply::Vci, e);
        }
        delay.delay_us(timing::ROLLBACK_VCI_OFF_US).await;

        if let Err(e) = self.iovcc.disable().await {
            error!("Failed to disable {} supply: {:?}", Supply::Iovcc, e);
        }
    }

    /// Display off and sleep in, attempting both commands.
    ///
    /// Returns the first failure. The panel is considered disabled afterwards.
    async fn display_off<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<(), PanelError<DI, REG, RST>> {
        let mut result = Ok(());

        debug!("Turning display off");
        if let Err(e) = self.di.write_command(SetDisplayOff).await {
            result = Err(Self::transport_failed("turn display off", e));
        }
        delay.delay_us(timing::DISPLAY_OFF_SETTLE_US).await;

        debug!("Entering sleep mode");
        if let Err(e) = self.di.write_command(EnterSleepMode).await {
            result = result.and(Err(Self::transport_failed("enter sleep mode", e)));
        }
        delay.delay_us(timing::SLEEP_IN_SETTLE_US).await;

        self.state = PanelState::Prepared;
        result
    }

    /// Reset and power down, attempting every step.
    ///
    /// Returns the last failure. The panel is considered unpowered afterwards.
    async fn power_off<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<(), PanelError<DI, REG, RST>> {
        let mut result = Ok(());

        debug!("Putting panel in reset");
        if let Err(e) = self.rst.set_low() {
            error!("Failed to put panel in reset: {:?}", e);
            result = Err(Error::ResetPin(e));
        }
        delay.delay_us(timing::POWER_OFF_RESET_HOLD_US).await;

        debug!("Disabling regulators");
        if let Err(e) = self.vci.disable().await {
            result = Err(Self::supply_failed("disable", Supply::Vci, e));
        }
        delay.delay_us(timing::POWER_OFF_VCI_OFF_US).await;

        if let Err(e) = self.iovcc.disable().await {
            result = Err(Self::supply_failed("disable", Supply::Iovcc, e));
        }

        self.state = PanelState::Unpowered;
        result
    }
}

impl<DI, REG, RST> Panel for Cwu50<DI, REG, RST>
where
    DI: Interface,
    REG: Regulator,
    RST: OutputPin,
{
    type Error = PanelError<DI, REG, RST>;

    async fn prepare<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        if self.state != PanelState::Unpowered {
            warn!("Panel already prepared");
            return Ok(());
        }

        debug!("Enabling regulators");
        self.iovcc
            .enable()
            .await
            .map_err(|e| Self::supply_failed("enable", Supply::Iovcc, e))?;
        // Give IOVCC time to ramp before anything drives the logic inputs
        delay.delay_us(timing::IOVCC_RAMP_US).await;

        if let Err(e) = self.vci.enable().await {
            let err = Self::supply_failed("enable", Supply::Vci, e);
            if let Err(e) = self.iovcc.disable().await {
                error!("Failed to disable {} supply: {:?}", Supply::Iovcc, e);
            }
            return Err(err);
        }

        if let Err(err) = self.reset_and_init(delay).await {
            error!("Failed to initialize panel: {:?}", err);
            self.abort_prepare(delay).await;
            return Err(err);
        }

        self.state = PanelState::Prepared;
        Ok(())
    }

    async fn enable<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        match self.state {
            PanelState::Prepared => {}
            PanelState::Displaying => {
                warn!("Panel already enabled");
                return Ok(());
            }
            PanelState::Unpowered => {
                let err = SequenceError {
                    operation: Operation::Enable,
                    state: self.state,
                };
                error!("{}", err);
                return Err(err.into());
            }
        }

        debug!("Exiting sleep mode");
        self.di
            .write_command(ExitSleepMode)
            .await
            .map_err(|e| Self::transport_failed("exit sleep mode", e))?;
        delay.delay_us(timing::SLEEP_OUT_SETTLE_US).await;

        debug!("Turning display on");
        self.di
            .write_command(SetDisplayOn)
            .await
            .map_err(|e| Self::transport_failed("turn display on", e))?;
        delay.delay_us(timing::DISPLAY_ON_SETTLE_US).await;

        debug!("Enabling vblank TE");
        self.di
            .write_command(SetTearingEffect::new(TearingEffect::Vertical))
            .await
            .map_err(|e| Self::transport_failed("enable vblank TE", e))?;

        self.state = PanelState::Displaying;
        Ok(())
    }

    async fn disable<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        if self.state != PanelState::Displaying {
            warn!("Panel already disabled");
            return Ok(());
        }

        self.display_off(delay).await
    }

    async fn unprepare<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        let mut result = Ok(());

        match self.state {
            PanelState::Unpowered => {
                warn!("Panel already unprepared");
                return Ok(());
            }
            PanelState::Displaying => {
                warn!("Unpreparing a panel that is still enabled");
                result = self.display_off(delay).await;
            }
            PanelState::Prepared => {}
        }

        self.power_off(delay).await.and(result)
    }

    fn modes(&self) -> &'static [DisplayMode] {
        &MODES
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }
}
