//! Lifecycle errors.

use crate::{power::Supply, PanelState};

/// Lifecycle operation of a panel.
///
/// Names the rejected operation in a [`SequenceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Power up and register programming.
    Prepare,
    /// Sleep out and display on.
    Enable,
    /// Display off and sleep in.
    Disable,
    /// Reset and power down.
    Unprepare,
}

impl Operation {
    const fn name(self) -> &'static str {
        match self {
            Self::Prepare => "prepare",
            Self::Enable => "enable",
            Self::Disable => "disable",
            Self::Unprepare => "unprepare",
        }
    }
}

/// An operation was requested in a state that does not allow it.
///
/// Returned before any resource or command activity takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceError {
    /// The rejected operation.
    pub operation: Operation,
    /// Panel state at the time of the request.
    pub state: PanelState,
}

/// Error returned by the panel lifecycle operations.
#[derive(Debug)]
pub enum Error<DiError, RegError, PinError> {
    /// A command write on the DSI link failed.
    Transport(DiError),

    /// Enabling or disabling a supply failed.
    Supply {
        /// The supply that failed.
        supply: Supply,
        /// Error reported by the regulator.
        error: RegError,
    },

    /// Driving the reset pin failed.
    ResetPin(PinError),

    /// The operation is not valid in the current state.
    Sequence(SequenceError),
}

impl<DiError, RegError, PinError> Error<DiError, RegError, PinError> {
    /// Returns `true` for resource errors, i.e. supply or reset pin failures.
    pub fn is_resource(&self) -> bool {
        matches!(self, Self::Supply { .. } | Self::ResetPin(_))
    }
}

impl<DiError, RegError, PinError> From<SequenceError> for Error<DiError, RegError, PinError> {
    fn from(value: SequenceError) -> Self {
        Self::Sequence(value)
    }
}

impl core::fmt::Display for SequenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "cannot {} panel while {:?}",
            self.operation.name(),
            self.state
        )
    }
}

impl<DiError, RegError, PinError> core::fmt::Display for Error<DiError, RegError, PinError>
where
    DiError: core::fmt::Debug,
    RegError: core::fmt::Debug,
    PinError: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "DSI write failed: {e:?}"),
            Self::Supply { supply, error } => write!(f, "{supply} supply failed: {error:?}"),
            Self::ResetPin(e) => write!(f, "reset pin failed: {e:?}"),
            Self::Sequence(e) => write!(f, "{e}"),
        }
    }
}
