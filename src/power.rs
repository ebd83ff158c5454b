//! Power supplies of the panel.

use embedded_hal::digital::OutputPin;

/// Identifies one of the panel's supply rails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Supply {
    /// Core and analog supply.
    Vci,
    /// I/O logic supply. Must be up before the reset line or DSI lanes are driven.
    Iovcc,
}

impl Supply {
    /// Supply name as used in board descriptions.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vci => "vci",
            Self::Iovcc => "iovcc",
        }
    }
}

impl core::fmt::Display for Supply {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A switchable power supply.
pub trait Regulator {
    /// Error type
    type Error: core::fmt::Debug;

    /// Turns the supply on. Returns once the output is enabled.
    async fn enable(&mut self) -> Result<(), Self::Error>;

    /// Turns the supply off.
    async fn disable(&mut self) -> Result<(), Self::Error>;
}

impl<T: Regulator + ?Sized> Regulator for &mut T {
    type Error = T::Error;

    async fn enable(&mut self) -> Result<(), Self::Error> {
        T::enable(self).await
    }

    async fn disable(&mut self) -> Result<(), Self::Error> {
        T::disable(self).await
    }
}

/// Supply switched by a load switch or LDO enable pin.
pub struct GpioRegulator<P> {
    pin: P,
    active_low: bool,
}

impl<P: OutputPin> GpioRegulator<P> {
    /// Creates a supply that is on while `pin` is high.
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            active_low: false,
        }
    }

    /// Creates a supply that is on while `pin` is low.
    pub fn new_active_low(pin: P) -> Self {
        Self {
            pin,
            active_low: true,
        }
    }

    /// Releases the enable pin.
    pub fn release(self) -> P {
        self.pin
    }

    fn set(&mut self, on: bool) -> Result<(), P::Error> {
        if on != self.active_low {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        }
    }
}

impl<P: OutputPin> Regulator for GpioRegulator<P> {
    type Error = P::Error;

    async fn enable(&mut self) -> Result<(), Self::Error> {
        self.set(true)
    }

    async fn disable(&mut self) -> Result<(), Self::Error> {
        self.set(false)
    }
}

#[cfg(test)]
mod tests {
    use core::cell::RefCell;

    use crate::_mock::{Event, Journal, MockOutputPin};

    use super::*;

    #[test]
    fn gpio_regulator_levels() {
        let journal = RefCell::new(Journal::new());

        tokio_test::block_on(async {
            let mut high = GpioRegulator::new(MockOutputPin::new(&journal));
            high.enable().await.unwrap();
            high.disable().await.unwrap();

            let mut low = GpioRegulator::new_active_low(MockOutputPin::new(&journal));
            low.enable().await.unwrap();
            low.disable().await.unwrap();
        });

        assert_eq!(
            journal.borrow().as_slice(),
            &[
                Event::Pin(true),
                Event::Pin(false),
                Event::Pin(false),
                Event::Pin(true),
            ]
        );
    }

    #[test]
    fn supply_names() {
        assert_eq!(Supply::Vci.name(), "vci");
        assert_eq!(Supply::Iovcc.name(), "iovcc");
    }
}
