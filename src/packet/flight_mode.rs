use crate::{Error, PacketType, Payload, PayloadDump, MAX_PACKET_LEN};

/// Longest mode string that still fits a frame together with its NUL
/// terminator.
const MAX_MODE_LEN: usize = MAX_PACKET_LEN - 5;

/// `FlightMode` payload type: an ASCII mode name, NUL-terminated on the
/// wire.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FlightMode {
    buf: [u8; MAX_MODE_LEN],
    len: usize,
}

impl FlightMode {
    /// Creates a flight mode payload from a mode name.
    ///
    /// Fails with [`Error::Encoding`] on non-ASCII input and
    /// [`Error::Buffer`] on names longer than the frame can carry.
    pub fn new(mode: &str) -> Result<Self, Error> {
        if !mode.is_ascii() {
            return Err(Error::Encoding);
        }
        if mode.len() > MAX_MODE_LEN {
            return Err(Error::Buffer);
        }

        let mut buf = [0u8; MAX_MODE_LEN];
        buf[..mode.len()].copy_from_slice(mode.as_bytes());
        Ok(FlightMode {
            buf,
            len: mode.len(),
        })
    }

    /// The mode name.
    pub fn as_str(&self) -> &str {
        // Stored bytes are ASCII-validated at construction
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }
}

impl core::fmt::Debug for FlightMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("FlightMode").field(&self.as_str()).finish()
    }
}

impl Payload for FlightMode {
    fn len(&self) -> usize {
        self.len + 1
    }

    fn typ(&self) -> PacketType {
        PacketType::FlightMode
    }

    fn decode(data: &[u8]) -> Result<Self, Error> {
        if data.is_empty() {
            return Err(Error::Buffer);
        }

        let text = match data.iter().position(|&b| b == 0) {
            Some(nul) => &data[..nul],
            None => data,
        };
        if !text.is_ascii() {
            return Err(Error::Encoding);
        }
        if text.len() > MAX_MODE_LEN {
            return Err(Error::Buffer);
        }

        let mut buf = [0u8; MAX_MODE_LEN];
        buf[..text.len()].copy_from_slice(text);
        Ok(FlightMode {
            buf,
            len: text.len(),
        })
    }

    fn encode(&self, data: &mut [u8]) -> Result<(), Error> {
        let data = data.get_mut(..self.len + 1).ok_or(Error::Buffer)?;
        data[..self.len].copy_from_slice(&self.buf[..self.len]);
        data[self.len] = 0;
        Ok(())
    }
}

impl PayloadDump for FlightMode {}
