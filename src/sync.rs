use crate::{Error, RawPacket, Transport, CRC8, MAX_PACKET_LEN, SYNC_BYTE};

// Minimum data length, must include type and crc bytes
const MIN_LEN_BYTE: u8 = 2;
// Maximum data length, includes type, payload and crc bytes
const MAX_LEN_BYTE: u8 = MAX_PACKET_LEN as u8 - 2;

/// Extracts whole frames from an unstructured byte stream.
///
/// Each call consumes at most one frame's worth of bytes from the
/// transport. On a bad sync byte everything currently buffered is flushed,
/// so a later poll starts fresh on a frame boundary. A frame whose body has
/// not fully arrived yet is dropped rather than carried over to the next
/// poll.
pub struct FrameSync {
    raw: RawPacket,
}

impl FrameSync {
    /// Creates a new `FrameSync` struct.
    pub const fn new() -> Self {
        Self {
            raw: RawPacket::empty(),
        }
    }

    /// Attempts to extract one well-formed frame, absorbing rejections.
    ///
    /// Returns `None` both when no frame has arrived yet and when a
    /// malformed frame was discarded; the next poll resynchronizes
    /// naturally.
    pub fn read_frame(&mut self, transport: &mut impl Transport) -> Option<&RawPacket> {
        self.try_read_frame(transport).ok().flatten()
    }

    /// Attempts to extract one well-formed frame, reporting why a frame was
    /// rejected.
    ///
    /// `Ok(None)` means not enough bytes were available; an `Err` means a
    /// frame was discarded.
    pub fn try_read_frame(
        &mut self,
        transport: &mut impl Transport,
    ) -> Result<Option<&RawPacket>, Error> {
        // A frame needs at least a sync and a length byte to get started
        if transport.bytes_available() < 2 {
            return Ok(None);
        }

        let mut byte = [0u8; 1];
        if transport.read(&mut byte) != 1 {
            return Ok(None);
        }
        if byte[0] != SYNC_BYTE {
            // Mid-frame garbage: drop the rest of the buffer and wait for
            // a fresh sync byte
            transport.flush_available();
            return Ok(None);
        }

        if transport.read(&mut byte) != 1 {
            return Ok(None);
        }
        let len = byte[0];
        if !(MIN_LEN_BYTE..=MAX_LEN_BYTE).contains(&len) {
            return Err(Error::InvalidLength { len });
        }

        let total = 2 + len as usize;
        self.raw.len = 0;
        self.raw.buf[0] = SYNC_BYTE;
        self.raw.buf[1] = len;
        if transport.read(&mut self.raw.buf[2..total]) != len as usize {
            return Err(Error::Buffer);
        }

        let expected = self.raw.buf[total - 1];
        let actual = CRC8.checksum(&self.raw.buf[2..total - 1]);
        if actual != expected {
            return Err(Error::ChecksumMismatch { expected, actual });
        }

        self.raw.len = total;
        Ok(Some(&self.raw))
    }
}

impl Default for FrameSync {
    fn default() -> Self {
        Self::new()
    }
}
