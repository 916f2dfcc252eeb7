//! This crate provides a `no-std` bidirectional codec and link-state tracker
//! for the CRSF (Crossfire/ELRS) protocol.
//!
//! A [`Codec`] sits between a byte-stream [`Transport`] (a UART, in
//! practice) and flight logic: polling it extracts RC channel and link
//! statistics frames from the receiver, while its send methods pack
//! telemetry (battery, GPS, attitude, flight mode) into ready-to-transmit
//! frames.
//!
//! # Usage
//! ### Polling for frames
//! ```rust
//! use crsf_link::{Codec, Loopback, ManualClock, Packet, RcChannelsPacked, PayloadDump, Transport};
//!
//! let mut link: Loopback<256> = Loopback::new();
//! let mut buf = [0u8; crsf_link::MAX_PACKET_LEN];
//! let len = RcChannelsPacked([992; 16]).dump(&mut buf).unwrap();
//! link.write(&buf[..len]);
//!
//! let mut codec = Codec::new(link, ManualClock::new());
//! match codec.poll() {
//!     Some(Packet::RcChannelsPacked(ch)) => assert_eq!(ch.0, [992; 16]),
//!     other => panic!("expected rc channels, got {other:?}"),
//! }
//! assert!(codec.is_connected());
//! ```
//! ### Sending telemetry
//! ```rust
//! use crsf_link::{Codec, Loopback, ManualClock};
//!
//! let mut codec = Codec::new(Loopback::<256>::new(), ManualClock::new());
//! codec.send_battery(16.8, 25.5, 1250).unwrap();
//! codec.send_flight_mode("ANGLE").unwrap();
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod packet;
pub use packet::*;

mod sync;
pub use sync::*;

mod codec;
pub use codec::*;

mod link;
pub use link::*;

mod transport;
pub use transport::*;

mod clock;
pub use clock::*;

mod error;
pub use error::*;

mod util;

/// First byte of every frame on the wire.
pub const SYNC_BYTE: u8 = 0xC8;
/// Maximum total frame size, sync and length bytes included.
pub const MAX_PACKET_LEN: usize = 64;
/// Liveness window used by [`Codec::is_connected`].
pub const DEFAULT_LINK_TIMEOUT_MS: u64 = 1000;

pub(crate) const CRC8: crc::Crc<u8> = crc::Crc::<u8>::new(&crc::CRC_8_DVB_S2);
