//! Command channel to the panel controller.

/// DSI command interface.
///
/// Implemented by the DSI host driver. The panel driver only issues logical
/// DCS writes; framing, lane handling and bus timing belong to the host.
pub trait Interface {
    /// Error type
    type Error: core::fmt::Debug;

    /// Sends `data` as a single DCS write.
    ///
    /// The first byte is the command or register address, the remaining
    /// bytes are its parameters. The host picks the short or long packet
    /// type based on the length.
    async fn write_buffer(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

impl<T: Interface + ?Sized> Interface for &mut T {
    type Error = T::Error;

    async fn write_buffer(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        T::write_buffer(self, data).await
    }
}
