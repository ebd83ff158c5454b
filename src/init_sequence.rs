//! Vendor register table sent to the JD9365DA-H3 controller during prepare.
//!
//! Each entry is one short DCS write of a register address followed by its
//! value. Writes to [`PAGE_SELECT`] switch the register page, which changes
//! the meaning of every register address until the next page switch, so the
//! table must be sent in order and in full.

/// Register that selects the active register page.
pub const PAGE_SELECT: u8 = 0xE0;

/// Length in bytes of a single table entry on the wire.
pub const INIT_COMMAND_LEN: usize = 2;

/// One register write of the initialization table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitCommand {
    data: [u8; INIT_COMMAND_LEN],
}

impl InitCommand {
    /// Creates a write of `value` to `register`.
    pub const fn new(register: u8, value: u8) -> Self {
        Self {
            data: [register, value],
        }
    }

    /// Register address.
    pub const fn register(&self) -> u8 {
        self.data[0]
    }

    /// Value written to the register.
    pub const fn value(&self) -> u8 {
        self.data[1]
    }

    /// The entry as it is sent on the link.
    pub const fn as_bytes(&self) -> &[u8; INIT_COMMAND_LEN] {
        &self.data
    }

    /// Returns `true` if this entry switches the register page.
    pub const fn is_page_select(&self) -> bool {
        self.register() == PAGE_SELECT
    }
}

/// Number of entries in [`INIT_SEQUENCE`].
pub const INIT_SEQUENCE_LEN: usize = 212;

/// Initialization table, in transmission order.
pub static INIT_SEQUENCE: [InitCommand; INIT_SEQUENCE_LEN] = [
    // Page 0: unlock the extended register set, select 4 lanes
    InitCommand::new(0xE0, 0x00),
    InitCommand::new(0xE1, 0x93),
    InitCommand::new(0xE2, 0x65),
    InitCommand::new(0xE3, 0xF8),
    InitCommand::new(0x70, 0x20),
    InitCommand::new(0x71, 0x13),
    InitCommand::new(0x72, 0x06),
    InitCommand::new(0x75, 0x03),

    // Page 1: VCOM, gate power, charge pumps, gamma
    InitCommand::new(0xE0, 0x01),
    InitCommand::new(0x00, 0x00),
    InitCommand::new(0x01, 0x47),
    InitCommand::new(0x03, 0x00),
    InitCommand::new(0x04, 0x4D),
    InitCommand::new(0x0C, 0x64),
    InitCommand::new(0x17, 0x00),
    InitCommand::new(0x18, 0xBF),
    InitCommand::new(0x19, 0x00),
    InitCommand::new(0x1A, 0x00),
    InitCommand::new(0x1B, 0xBF),
    InitCommand::new(0x1C, 0x00),
    InitCommand::new(0x1F, 0x7E),
    InitCommand::new(0x20, 0x24),
    InitCommand::new(0x21, 0x24),
    InitCommand::new(0x22, 0x4E),
    InitCommand::new(0x24, 0xFE),
    InitCommand::new(0x37, 0x09),
    InitCommand::new(0x38, 0x04),
    InitCommand::new(0x3C, 0x76),
    InitCommand::new(0x3D, 0xFF),
    InitCommand::new(0x3E, 0xFF),
    InitCommand::new(0x3F, 0x7F),
    InitCommand::new(0x40, 0x04),
    InitCommand::new(0x41, 0xA0),
    InitCommand::new(0x44, 0x11),
    InitCommand::new(0x55, 0x02),
    InitCommand::new(0x56, 0x01),
    InitCommand::new(0x57, 0x49),
    InitCommand::new(0x58, 0x09),
    InitCommand::new(0x59, 0x2A),
    InitCommand::new(0x5A, 0x1A),
    InitCommand::new(0x5B, 0x1A),
    InitCommand::new(0x5D, 0x78),
    InitCommand::new(0x5E, 0x6E),
    InitCommand::new(0x5F, 0x66),
    InitCommand::new(0x60, 0x5E),
    InitCommand::new(0x61, 0x60),
    InitCommand::new(0x62, 0x54),
    InitCommand::new(0x63, 0x5C),
    InitCommand::new(0x64, 0x47),
    InitCommand::new(0x65, 0x5F),
    InitCommand::new(0x66, 0x5D),
    InitCommand::new(0x67, 0x5B),
    InitCommand::new(0x68, 0x76),
    InitCommand::new(0x69, 0x61),
    InitCommand::new(0x6A, 0x63),
    InitCommand::new(0x6B, 0x50),
    InitCommand::new(0x6C, 0x45),
    InitCommand::new(0x6D, 0x34),
    InitCommand::new(0x6E, 0x1C),
    InitCommand::new(0x6F, 0x07),
    InitCommand::new(0x70, 0x78),
    InitCommand::new(0x71, 0x6E),
    InitCommand::new(0x72, 0x66),
    InitCommand::new(0x73, 0x5E),
    InitCommand::new(0x74, 0x60),
    InitCommand::new(0x75, 0x54),
    InitCommand::new(0x76, 0x5C),
    InitCommand::new(0x77, 0x47),
    InitCommand::new(0x78, 0x5F),
    InitCommand::new(0x79, 0x5D),
    InitCommand::new(0x7A, 0x5B),
    InitCommand::new(0x7B, 0x76),
    InitCommand::new(0x7C, 0x61),
    InitCommand::new(0x7D, 0x63),
    InitCommand::new(0x7E, 0x50),
    InitCommand::new(0x7F, 0x45),
    InitCommand::new(0x80, 0x34),
    InitCommand::new(0x81, 0x1C),
    InitCommand::new(0x82, 0x07),

    // Page 2: gate-in-panel signal mapping and timing
    InitCommand::new(0xE0, 0x02),
    InitCommand::new(0x00, 0x44),
    InitCommand::new(0x01, 0x46),
    InitCommand::new(0x02, 0x48),
    InitCommand::new(0x03, 0x4A),
    InitCommand::new(0x04, 0x40),
    InitCommand::new(0x05, 0x42),
    InitCommand::new(0x06, 0x1F),
    InitCommand::new(0x07, 0x1F),
    InitCommand::new(0x08, 0x1F),
    InitCommand::new(0x09, 0x1F),
    InitCommand::new(0x0A, 0x1F),
    InitCommand::new(0x0B, 0x1F),
    InitCommand::new(0x0C, 0x1F),
    InitCommand::new(0x0D, 0x1F),
    InitCommand::new(0x0E, 0x1F),
    InitCommand::new(0x0F, 0x1F),
    InitCommand::new(0x10, 0x1F),
    InitCommand::new(0x11, 0x1F),
    InitCommand::new(0x12, 0x1F),
    InitCommand::new(0x13, 0x1F),
    InitCommand::new(0x14, 0x1E),
    InitCommand::new(0x15, 0x1F),
    InitCommand::new(0x16, 0x45),
    InitCommand::new(0x17, 0x47),
    InitCommand::new(0x18, 0x49),
    InitCommand::new(0x19, 0x4B),
    InitCommand::new(0x1A, 0x41),
    InitCommand::new(0x1B, 0x43),
    InitCommand::new(0x1C, 0x1F),
    InitCommand::new(0x1D, 0x1F),
    InitCommand::new(0x1E, 0x1F),
    InitCommand::new(0x1F, 0x1F),
    InitCommand::new(0x20, 0x1F),
    InitCommand::new(0x21, 0x1F),
    InitCommand::new(0x22, 0x1F),
    InitCommand::new(0x23, 0x1F),
    InitCommand::new(0x24, 0x1F),
    InitCommand::new(0x25, 0x1F),
    InitCommand::new(0x26, 0x1F),
    InitCommand::new(0x27, 0x1F),
    InitCommand::new(0x28, 0x1F),
    InitCommand::new(0x29, 0x1F),
    InitCommand::new(0x2A, 0x1E),
    InitCommand::new(0x2B, 0x1F),
    InitCommand::new(0x2C, 0x0B),
    InitCommand::new(0x2D, 0x09),
    InitCommand::new(0x2E, 0x07),
    InitCommand::new(0x2F, 0x05),
    InitCommand::new(0x30, 0x03),
    InitCommand::new(0x31, 0x01),
    InitCommand::new(0x32, 0x1F),
    InitCommand::new(0x33, 0x1F),
    InitCommand::new(0x34, 0x1F),
    InitCommand::new(0x35, 0x1F),
    InitCommand::new(0x36, 0x1F),
    InitCommand::new(0x37, 0x1F),
    InitCommand::new(0x38, 0x1F),
    InitCommand::new(0x39, 0x1F),
    InitCommand::new(0x3A, 0x1F),
    InitCommand::new(0x3B, 0x1F),
    InitCommand::new(0x3C, 0x1F),
    InitCommand::new(0x3D, 0x1F),
    InitCommand::new(0x3E, 0x1F),
    InitCommand::new(0x3F, 0x1F),
    InitCommand::new(0x40, 0x1F),
    InitCommand::new(0x41, 0x1E),
    InitCommand::new(0x42, 0x0A),
    InitCommand::new(0x43, 0x08),
    InitCommand::new(0x44, 0x06),
    InitCommand::new(0x45, 0x04),
    InitCommand::new(0x46, 0x02),
    InitCommand::new(0x47, 0x00),
    InitCommand::new(0x48, 0x1F),
    InitCommand::new(0x49, 0x1F),
    InitCommand::new(0x4A, 0x1F),
    InitCommand::new(0x4B, 0x1F),
    InitCommand::new(0x4C, 0x1F),
    InitCommand::new(0x4D, 0x1F),
    InitCommand::new(0x4E, 0x1F),
    InitCommand::new(0x4F, 0x1F),
    InitCommand::new(0x50, 0x1F),
    InitCommand::new(0x51, 0x1F),
    InitCommand::new(0x52, 0x1F),
    InitCommand::new(0x53, 0x1F),
    InitCommand::new(0x54, 0x1F),
    InitCommand::new(0x55, 0x1F),
    InitCommand::new(0x56, 0x1F),
    InitCommand::new(0x57, 0x1E),
    InitCommand::new(0x58, 0x40),
    InitCommand::new(0x59, 0x00),
    InitCommand::new(0x5A, 0x00),
    InitCommand::new(0x5B, 0x30),
    InitCommand::new(0x5C, 0x02),
    InitCommand::new(0x5D, 0x40),
    InitCommand::new(0x5E, 0x01),
    InitCommand::new(0x5F, 0x02),
    InitCommand::new(0x60, 0x00),
    InitCommand::new(0x61, 0x01),
    InitCommand::new(0x62, 0x02),
    InitCommand::new(0x63, 0x65),
    InitCommand::new(0x64, 0x66),
    InitCommand::new(0x65, 0x00),
    InitCommand::new(0x66, 0x00),
    InitCommand::new(0x67, 0x74),
    InitCommand::new(0x68, 0x06),
    InitCommand::new(0x69, 0x65),
    InitCommand::new(0x6A, 0x66),
    InitCommand::new(0x6B, 0x10),
    InitCommand::new(0x6C, 0x00),
    InitCommand::new(0x6D, 0x04),
    InitCommand::new(0x6E, 0x04),
    InitCommand::new(0x6F, 0x88),
    InitCommand::new(0x70, 0x00),
    InitCommand::new(0x71, 0x00),
    InitCommand::new(0x72, 0x06),
    InitCommand::new(0x73, 0x7B),
    InitCommand::new(0x74, 0x00),
    InitCommand::new(0x75, 0x87),
    InitCommand::new(0x76, 0x00),
    InitCommand::new(0x77, 0x5D),
    InitCommand::new(0x78, 0x17),
    InitCommand::new(0x79, 0x1F),
    InitCommand::new(0x7A, 0x00),
    InitCommand::new(0x7B, 0x00),
    InitCommand::new(0x7C, 0x00),
    InitCommand::new(0x7D, 0x03),
    InitCommand::new(0x7E, 0x7B),

    // Page 4: ESD detection
    InitCommand::new(0xE0, 0x04),
    InitCommand::new(0x09, 0x10),

    // Page 0: watchdog
    InitCommand::new(0xE0, 0x00),
    InitCommand::new(0xE6, 0x02),
    InitCommand::new(0xE7, 0x02),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_page_zero_and_ends_with_watchdog() {
        assert_eq!(INIT_SEQUENCE[0], InitCommand::new(PAGE_SELECT, 0x00));
        assert_eq!(
            INIT_SEQUENCE[INIT_SEQUENCE_LEN - 2..],
            [InitCommand::new(0xE6, 0x02), InitCommand::new(0xE7, 0x02)]
        );
    }

    #[test]
    fn page_switch_order() {
        let mut pages = [0u8; 8];
        let mut count = 0;
        for cmd in INIT_SEQUENCE.iter().filter(|cmd| cmd.is_page_select()) {
            pages[count] = cmd.value();
            count += 1;
        }

        assert_eq!(&pages[..count], &[0x00, 0x01, 0x02, 0x04, 0x00]);
    }

    #[test]
    fn lane_count_is_set_on_page_zero() {
        // Lanes = value + 1
        let lanes = INIT_SEQUENCE
            .iter()
            .take_while(|cmd| *cmd != &InitCommand::new(PAGE_SELECT, 0x01))
            .find(|cmd| cmd.register() == 0x75)
            .map(|cmd| cmd.value() + 1);

        assert_eq!(lanes, Some(4));
    }

    #[test]
    fn bytes_on_the_wire() {
        let cmd = InitCommand::new(0xE1, 0x93);
        assert_eq!(cmd.as_bytes(), &[0xE1, 0x93]);
        assert_eq!(cmd.register(), 0xE1);
        assert_eq!(cmd.value(), 0x93);
        assert!(!cmd.is_page_select());
    }
}
