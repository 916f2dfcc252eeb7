use snafu::Snafu;

/// Enum of codec errors.
///
/// Frame-level decode errors never escape [`Codec::poll`](crate::Codec::poll);
/// they exist so lower-level building blocks ([`FrameSync`](crate::FrameSync),
/// [`Packet::parse`](crate::Packet::parse)) can report what they rejected.
/// Only the encode-side variants surface to callers.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Snafu)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    #[snafu(display("Invalid length byte {len}, should be between 2 and 62"))]
    InvalidLength { len: u8 },
    #[snafu(display("Crc checksum mismatch: expected {expected:#04x}, got {actual:#04x}"))]
    ChecksumMismatch { expected: u8, actual: u8 },
    #[snafu(display("Unknown packet type {typ:#04x}"))]
    UnknownType { typ: u8 },
    #[snafu(display("Buffer too small or payload length mismatch"))]
    Buffer,
    #[snafu(display("Flight mode string must be ASCII"))]
    Encoding,
}
