//! MIPI Display Command Set commands used by the panel lifecycle.

use crate::{init_sequence::InitCommand, interface::Interface, options::TearingEffect};

/// Longest parameter list of any command in this module.
const MAX_PARAMS: usize = 1;

/// Common trait for DCS commands.
pub trait DcsCommand {
    /// Returns the instruction code.
    fn instruction(&self) -> u8;

    /// Fills the given buffer with the command parameters and returns how
    /// many bytes were written.
    fn fill_params_buf(&self, buffer: &mut [u8]) -> usize;
}

macro_rules! dcs_basic_command {
    (
        #[doc = $tt:tt]
        $instr_name:ident,
        $instr:expr
    ) => {
        #[doc = $tt]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $instr_name;

        impl DcsCommand for $instr_name {
            fn instruction(&self) -> u8 {
                $instr
            }

            fn fill_params_buf(&self, _buffer: &mut [u8]) -> usize {
                0
            }
        }
    };
}

dcs_basic_command!(
    /// Enter sleep mode
    EnterSleepMode,
    0x10
);
dcs_basic_command!(
    /// Exit sleep mode
    ExitSleepMode,
    0x11
);
dcs_basic_command!(
    /// Turn display off
    SetDisplayOff,
    0x28
);
dcs_basic_command!(
    /// Turn display on
    SetDisplayOn,
    0x29
);

/// Set tearing effect output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetTearingEffect(TearingEffect);

impl SetTearingEffect {
    /// Creates a new tearing effect command.
    pub const fn new(tearing_effect: TearingEffect) -> Self {
        Self(tearing_effect)
    }
}

impl DcsCommand for SetTearingEffect {
    fn instruction(&self) -> u8 {
        match self.0 {
            TearingEffect::Off => 0x34,
            TearingEffect::Vertical | TearingEffect::HorizontalAndVertical => 0x35,
        }
    }

    fn fill_params_buf(&self, buffer: &mut [u8]) -> usize {
        match self.0 {
            TearingEffect::Off => 0,
            TearingEffect::Vertical => {
                buffer[0] = 0x00;
                1
            }
            TearingEffect::HorizontalAndVertical => {
                buffer[0] = 0x01;
                1
            }
        }
    }
}

/// Helpers for sending commands over an [`Interface`].
pub trait InterfaceExt: Interface {
    /// Sends a DCS command with its parameters as one write.
    async fn write_command(&mut self, command: impl DcsCommand) -> Result<(), Self::Error> {
        let mut buffer = [0u8; 1 + MAX_PARAMS];
        buffer[0] = command.instruction();
        let n = command.fill_params_buf(&mut buffer[1..]);
        self.write_buffer(&buffer[..=n]).await
    }

    /// Sends one entry of the initialization table verbatim.
    async fn write_init_command(&mut self, command: &InitCommand) -> Result<(), Self::Error> {
        self.write_buffer(command.as_bytes()).await
    }
}

impl<T: Interface + ?Sized> InterfaceExt for T {}

#[cfg(test)]
mod tests {
    use core::cell::RefCell;

    use crate::_mock::{Event, Journal, MockDsi};

    use super::*;

    fn encode(command: impl DcsCommand) -> ([u8; 1 + MAX_PARAMS], usize) {
        let mut buffer = [0u8; 1 + MAX_PARAMS];
        buffer[0] = command.instruction();
        let n = command.fill_params_buf(&mut buffer[1..]);
        (buffer, n + 1)
    }

    #[test]
    fn sleep_and_display_commands_have_no_parameters() {
        assert_eq!(encode(EnterSleepMode), ([0x10, 0], 1));
        assert_eq!(encode(ExitSleepMode), ([0x11, 0], 1));
        assert_eq!(encode(SetDisplayOff), ([0x28, 0], 1));
        assert_eq!(encode(SetDisplayOn), ([0x29, 0], 1));
    }

    #[test]
    fn tearing_effect_modes() {
        assert_eq!(encode(SetTearingEffect::new(TearingEffect::Off)), ([0x34, 0], 1));
        assert_eq!(
            encode(SetTearingEffect::new(TearingEffect::Vertical)),
            ([0x35, 0x00], 2)
        );
        assert_eq!(
            encode(SetTearingEffect::new(TearingEffect::HorizontalAndVertical)),
            ([0x35, 0x01], 2)
        );
    }

    #[test]
    fn write_command_sends_one_buffer() {
        let journal = RefCell::new(Journal::new());
        let mut dsi = MockDsi::new(&journal);

        tokio_test::block_on(async {
            dsi.write_command(SetTearingEffect::new(TearingEffect::Vertical))
                .await
                .unwrap();
            dsi.write_init_command(&InitCommand::new(0xE0, 0x02))
                .await
                .unwrap();
        });

        assert_eq!(
            journal.borrow().as_slice(),
            &[Event::dsi(&[0x35, 0x00]), Event::dsi(&[0xE0, 0x02])]
        );
    }
}
