use num_enum::TryFromPrimitive;

use crate::{Error, CRC8, MAX_PACKET_LEN, SYNC_BYTE};

mod rc_channels;
pub use rc_channels::*;

mod link_statistics;
pub use link_statistics::*;

mod battery_sensor;
pub use battery_sensor::*;

mod gps;
pub use gps::*;

mod attitude;
pub use attitude::*;

mod flight_mode;
pub use flight_mode::*;

/// Represents all supported CRSF packet types.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PacketType {
    Gps = 0x02,
    BatterySensor = 0x08,
    LinkStatistics = 0x14,
    RcChannelsPacked = 0x16,
    Attitude = 0x1E,
    FlightMode = 0x21,
}

/// Represents a parsed packet.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Packet {
    Gps(Gps),
    BatterySensor(BatterySensor),
    LinkStatistics(LinkStatistics),
    RcChannelsPacked(RcChannelsPacked),
    Attitude(Attitude),
    FlightMode(FlightMode),
}

impl Packet {
    /// Parses a validated raw packet into its typed form.
    pub fn parse(raw: &RawPacket) -> Result<Packet, Error> {
        let payload = raw.payload()?;
        match PacketType::try_from(raw.typ_byte()?) {
            Ok(PacketType::Gps) => Gps::decode(payload).map(Packet::Gps),
            Ok(PacketType::BatterySensor) => {
                BatterySensor::decode(payload).map(Packet::BatterySensor)
            }
            Ok(PacketType::LinkStatistics) => {
                LinkStatistics::decode(payload).map(Packet::LinkStatistics)
            }
            Ok(PacketType::RcChannelsPacked) => {
                RcChannelsPacked::decode(payload).map(Packet::RcChannelsPacked)
            }
            Ok(PacketType::Attitude) => Attitude::decode(payload).map(Packet::Attitude),
            Ok(PacketType::FlightMode) => FlightMode::decode(payload).map(Packet::FlightMode),
            Err(_) => Err(Error::UnknownType {
                typ: raw.typ_byte()?,
            }),
        }
    }
}

/// Represents a raw (not parsed) packet.
#[derive(Clone, Copy, Debug)]
pub struct RawPacket {
    pub(crate) buf: [u8; MAX_PACKET_LEN],
    pub(crate) len: usize,
}

impl RawPacket {
    pub(crate) const fn empty() -> RawPacket {
        RawPacket {
            buf: [0u8; MAX_PACKET_LEN],
            len: 0,
        }
    }

    /// Creates a new `RawPacket` from the given slice. The slice must be at
    /// most [`MAX_PACKET_LEN`] bytes long.
    pub fn new(slice: &[u8]) -> Result<RawPacket, Error> {
        let mut packet = RawPacket::empty();
        packet
            .buf
            .get_mut(..slice.len())
            .ok_or(Error::Buffer)?
            .copy_from_slice(slice);
        packet.len = slice.len();
        Ok(packet)
    }

    /// Gets the full frame slice, sync and length bytes included.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len.min(MAX_PACKET_LEN)]
    }

    /// Gets the payload section of the frame.
    pub fn payload(&self) -> Result<&[u8], Error> {
        // Skip the [sync], [len], [type] and [crc] bytes
        match self.as_slice() {
            [_, _, _, payload @ .., _] => Ok(payload),
            _ => Err(Error::Buffer),
        }
    }

    /// Gets the frame type byte.
    pub fn typ_byte(&self) -> Result<u8, Error> {
        match self.as_slice() {
            [_, _, typ, ..] => Ok(*typ),
            _ => Err(Error::Buffer),
        }
    }

    /// Converts the raw packet into a parsed packet.
    pub fn to_packet(&self) -> Result<Packet, Error> {
        Packet::parse(self)
    }
}

impl PartialEq for RawPacket {
    /// Compares the frame bytes only; the scratch buffer beyond `len` may
    /// hold stale data from a previous frame.
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for RawPacket {}

/// Payload encoding and decoding, implemented by every packet type.
pub trait Payload: Sized {
    /// Payload length in bytes on the wire.
    fn len(&self) -> usize;

    /// The packet type discriminator this payload is framed with.
    fn typ(&self) -> PacketType;

    /// Decodes a payload (the caller has already validated the frame CRC).
    fn decode(data: &[u8]) -> Result<Self, Error>;

    /// Encodes the payload into `data`, which must hold at least
    /// [`len`](Payload::len) bytes.
    fn encode(&self, data: &mut [u8]) -> Result<(), Error>;
}

/// Extension trait assembling a complete ready-to-transmit frame.
pub trait PayloadDump: Payload {
    /// Writes `[sync, len, type, payload.., crc]` into `buf` and returns the
    /// number of bytes written.
    fn dump(&self, buf: &mut [u8]) -> Result<usize, Error> {
        let payload_len = self.len();
        let total = payload_len + 4;
        if total > MAX_PACKET_LEN || buf.len() < total {
            return Err(Error::Buffer);
        }

        buf[0] = SYNC_BYTE;
        buf[1] = (payload_len + 2) as u8;
        buf[2] = self.typ() as u8;
        self.encode(&mut buf[3..3 + payload_len])?;
        // The checksum covers the type and payload bytes only
        buf[3 + payload_len] = CRC8.checksum(&buf[2..3 + payload_len]);

        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rc_channels_packet_dump() {
        let packet = RcChannelsPacked([0x7FF; 16]);

        let mut buf = [0u8; MAX_PACKET_LEN];
        let len = packet.dump(&mut buf).unwrap();

        let mut expected: [u8; 26] = [0xFF; 26];
        expected[0] = 0xC8;
        expected[1] = 24;
        expected[2] = 0x16;
        expected[25] = 143;
        assert_eq!(&buf[..len], &expected);
    }

    #[test]
    fn test_link_statistics_packet_dump() {
        let packet = LinkStatistics {
            uplink_rssi_1: 16,
            uplink_rssi_2: 19,
            uplink_link_quality: 99,
            uplink_snr: -105,
            active_antenna: 1,
            rf_mode: 2,
            uplink_tx_power: 3,
            downlink_rssi: 8,
            downlink_link_quality: 88,
            downlink_snr: -108,
        };

        let mut buf = [0u8; MAX_PACKET_LEN];
        let len = packet.dump(&mut buf).unwrap();

        let expected = [0xC8, 12, 0x14, 16, 19, 99, 151, 1, 2, 3, 8, 88, 148, 252];
        assert_eq!(&buf[..len], expected.as_slice());
    }

    #[test]
    fn test_raw_packet_payload() {
        let frame = [0xC8, 4, 0x14, 0xAA, 0xBB, 0x00];
        let raw = RawPacket::new(&frame).unwrap();
        assert_eq!(raw.typ_byte().unwrap(), 0x14);
        assert_eq!(raw.payload().unwrap(), &[0xAA, 0xBB]);
    }

    #[test]
    fn test_raw_packet_equality_ignores_stale_buffer() {
        let frame = [0xC8u8, 4, 0x14, 0xAA, 0xBB, 0x00];
        let clean = RawPacket::new(&frame).unwrap();

        // Same frame sitting in a reused buffer with leftovers past `len`
        let mut reused = RawPacket {
            buf: [0xFF; MAX_PACKET_LEN],
            len: frame.len(),
        };
        reused.buf[..frame.len()].copy_from_slice(&frame);

        assert_eq!(clean, reused);
        assert_ne!(clean, RawPacket::new(&[0xC8, 2, 0x14, 0x00]).unwrap());
    }

    #[test]
    fn test_parse_unknown_type() {
        let mut buf = [0u8; MAX_PACKET_LEN];
        buf[0] = 0xC8;
        buf[1] = 3;
        buf[2] = 0x7F;
        buf[3] = 0x00;
        buf[4] = CRC8.checksum(&buf[2..4]);
        let raw = RawPacket::new(&buf[..5]).unwrap();
        assert_eq!(raw.to_packet(), Err(Error::UnknownType { typ: 0x7F }));
    }

    #[test]
    fn test_dump_rejects_short_buffer() {
        let packet = RcChannelsPacked([0; 16]);
        let mut buf = [0u8; 10];
        assert_eq!(packet.dump(&mut buf), Err(Error::Buffer));
    }
}
