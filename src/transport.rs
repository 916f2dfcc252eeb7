/// Non-blocking byte-stream transport, the seam between the codec and a
/// concrete serial device.
///
/// Implementations wrap whatever owns the UART; the codec never blocks on
/// one. `write` is fire-and-forget, mirroring how a UART transmit FIFO
/// behaves.
pub trait Transport {
    /// Number of bytes buffered and ready to read.
    fn bytes_available(&self) -> usize;

    /// Reads up to `buf.len()` bytes, returning how many were read.
    fn read(&mut self, buf: &mut [u8]) -> usize;

    /// Queues bytes for transmission.
    fn write(&mut self, data: &[u8]);

    /// Discards all currently buffered unread bytes. Used for resync.
    fn flush_available(&mut self);
}

/// Fixed-capacity in-memory transport: bytes written become readable, FIFO.
///
/// Intended for tests and simulation; writes beyond capacity are silently
/// dropped.
pub struct Loopback<const N: usize> {
    buf: [u8; N],
    head: usize,
    len: usize,
}

impl<const N: usize> Loopback<N> {
    pub const fn new() -> Self {
        Self {
            buf: [0; N],
            head: 0,
            len: 0,
        }
    }
}

impl<const N: usize> Default for Loopback<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Transport for Loopback<N> {
    fn bytes_available(&self) -> usize {
        self.len
    }

    fn read(&mut self, buf: &mut [u8]) -> usize {
        let n = buf.len().min(self.len);
        for slot in buf[..n].iter_mut() {
            *slot = self.buf[self.head];
            self.head = (self.head + 1) % N;
            self.len -= 1;
        }
        n
    }

    fn write(&mut self, data: &[u8]) {
        for &byte in data {
            if self.len == N {
                break;
            }
            self.buf[(self.head + self.len) % N] = byte;
            self.len += 1;
        }
    }

    fn flush_available(&mut self) {
        self.head = 0;
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loopback_fifo_order() {
        let mut link: Loopback<8> = Loopback::new();
        link.write(&[1, 2, 3]);
        assert_eq!(link.bytes_available(), 3);

        let mut buf = [0u8; 2];
        assert_eq!(link.read(&mut buf), 2);
        assert_eq!(buf, [1, 2]);
        assert_eq!(link.bytes_available(), 1);
    }

    #[test]
    fn test_loopback_wraps_around() {
        let mut link: Loopback<4> = Loopback::new();
        link.write(&[1, 2, 3]);

        let mut buf = [0u8; 2];
        link.read(&mut buf);
        link.write(&[4, 5]);

        let mut rest = [0u8; 3];
        assert_eq!(link.read(&mut rest), 3);
        assert_eq!(rest, [3, 4, 5]);
    }

    #[test]
    fn test_loopback_drops_overflow() {
        let mut link: Loopback<2> = Loopback::new();
        link.write(&[1, 2, 3]);
        assert_eq!(link.bytes_available(), 2);
    }

    #[test]
    fn test_loopback_flush() {
        let mut link: Loopback<8> = Loopback::new();
        link.write(&[1, 2, 3]);
        link.flush_available();
        assert_eq!(link.bytes_available(), 0);

        let mut buf = [0u8; 1];
        assert_eq!(link.read(&mut buf), 0);
    }
}
