//! Recording mocks of the panel's collaborators.
//!
//! Every mock writes into a shared [`Journal`], which keeps the relative
//! order of supply, reset pin, DSI and delay activity.

use core::cell::RefCell;

use embedded_hal::digital;
use embedded_hal_async::delay::DelayNs;
use heapless::Vec;

use crate::{
    interface::Interface,
    power::{Regulator, Supply},
};

/// Maximum number of bytes kept per recorded DSI write.
pub const MAX_WRITE_LEN: usize = 4;

/// Shared activity log.
pub type Journal = Vec<Event, 512>;

/// Recorded activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// DSI buffer write, recorded whether or not it succeeded.
    Dsi(Vec<u8, MAX_WRITE_LEN>),
    /// Supply enable attempt.
    Enable(Supply),
    /// Supply disable attempt.
    Disable(Supply),
    /// Pin level write, `true` for high.
    Pin(bool),
    /// Delay in microseconds.
    Delay(u32),
}

impl Event {
    pub fn dsi(data: &[u8]) -> Self {
        let len = data.len().min(MAX_WRITE_LEN);
        Self::Dsi(Vec::from_slice(&data[..len]).unwrap_or_default())
    }
}

fn record(journal: &RefCell<Journal>, event: Event) {
    // Events past the capacity are dropped.
    let _ = journal.borrow_mut().push(event);
}

/// Error returned by failing mocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

/// Mock DSI interface.
pub struct MockDsi<'a> {
    journal: &'a RefCell<Journal>,
    writes: usize,
    fail_at: Option<usize>,
    fail_on: Option<Vec<u8, MAX_WRITE_LEN>>,
}

impl<'a> MockDsi<'a> {
    pub fn new(journal: &'a RefCell<Journal>) -> Self {
        Self {
            journal,
            writes: 0,
            fail_at: None,
            fail_on: None,
        }
    }

    /// Fails the write with the given zero based index.
    #[must_use]
    pub fn failing_at(mut self, index: usize) -> Self {
        self.fail_at = Some(index);
        self
    }

    /// Fails every write of exactly `data`.
    #[must_use]
    pub fn failing_on(mut self, data: &[u8]) -> Self {
        self.fail_on = Vec::from_slice(data).ok();
        self
    }

    /// Number of writes issued so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Interface for MockDsi<'_> {
    type Error = MockError;

    async fn write_buffer(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        let index = self.writes;
        self.writes += 1;
        record(self.journal, Event::dsi(data));

        let matches = self
            .fail_on
            .as_ref()
            .is_some_and(|fail_on| fail_on.as_slice() == data);
        if self.fail_at == Some(index) || matches {
            return Err(MockError);
        }
        Ok(())
    }
}

/// Mock supply.
pub struct MockRegulator<'a> {
    supply: Supply,
    journal: &'a RefCell<Journal>,
    enabled: bool,
    fail_enable: bool,
    fail_disable: bool,
}

impl<'a> MockRegulator<'a> {
    pub fn new(supply: Supply, journal: &'a RefCell<Journal>) -> Self {
        Self {
            supply,
            journal,
            enabled: false,
            fail_enable: false,
            fail_disable: false,
        }
    }

    #[must_use]
    pub fn failing_enable(mut self) -> Self {
        self.fail_enable = true;
        self
    }

    #[must_use]
    pub fn failing_disable(mut self) -> Self {
        self.fail_disable = true;
        self
    }

    /// Returns `true` if the last successful operation was an enable.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Regulator for MockRegulator<'_> {
    type Error = MockError;

    async fn enable(&mut self) -> Result<(), Self::Error> {
        record(self.journal, Event::Enable(self.supply));
        if self.fail_enable {
            return Err(MockError);
        }
        self.enabled = true;
        Ok(())
    }

    async fn disable(&mut self) -> Result<(), Self::Error> {
        record(self.journal, Event::Disable(self.supply));
        if self.fail_disable {
            return Err(MockError);
        }
        self.enabled = false;
        Ok(())
    }
}

/// Mock output pin.
pub struct MockOutputPin<'a> {
    journal: &'a RefCell<Journal>,
    level: Option<bool>,
    highs: usize,
    fail_high_at: Option<usize>,
}

impl<'a> MockOutputPin<'a> {
    pub fn new(journal: &'a RefCell<Journal>) -> Self {
        Self {
            journal,
            level: None,
            highs: 0,
            fail_high_at: None,
        }
    }

    /// Fails the `set_high` call with the given zero based index.
    #[must_use]
    pub fn failing_set_high(mut self, index: usize) -> Self {
        self.fail_high_at = Some(index);
        self
    }

    /// Last written level, `None` if the pin was never driven.
    pub fn level(&self) -> Option<bool> {
        self.level
    }
}

impl digital::ErrorType for MockOutputPin<'_> {
    type Error = digital::ErrorKind;
}

impl digital::OutputPin for MockOutputPin<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        record(self.journal, Event::Pin(false));
        self.level = Some(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let index = self.highs;
        self.highs += 1;
        record(self.journal, Event::Pin(true));
        if self.fail_high_at == Some(index) {
            return Err(digital::ErrorKind::Other);
        }
        self.level = Some(true);
        Ok(())
    }
}

/// Mock delay that returns immediately.
pub struct MockDelay<'a> {
    journal: &'a RefCell<Journal>,
}

impl<'a> MockDelay<'a> {
    pub fn new(journal: &'a RefCell<Journal>) -> Self {
        Self { journal }
    }
}

impl DelayNs for MockDelay<'_> {
    async fn delay_ns(&mut self, ns: u32) {
        record(self.journal, Event::Delay(ns.div_ceil(1_000)));
    }

    async fn delay_us(&mut self, us: u32) {
        record(self.journal, Event::Delay(us));
    }

    async fn delay_ms(&mut self, ms: u32) {
        record(self.journal, Event::Delay(ms.saturating_mul(1_000)));
    }
}
