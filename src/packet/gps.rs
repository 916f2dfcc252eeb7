use crate::{util, Error, PacketType, Payload, PayloadDump};

const LEN: usize = 15;

/// `Gps` payload type.
///
/// Coordinates travel as degrees scaled by 1e7 in big-endian i32; the
/// altitude field carries a fixed +1000 m offset. Scaling truncates toward
/// zero on encode.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Gps {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Ground speed in km/h (tenths on the wire)
    pub groundspeed: f32,
    /// Heading in degrees (hundredths on the wire)
    pub heading: f32,
    /// Altitude in meters
    pub altitude: i32,
    /// Number of satellites in view
    pub satellites: u8,
}

impl Payload for Gps {
    fn len(&self) -> usize {
        LEN
    }

    fn typ(&self) -> PacketType {
        PacketType::Gps
    }

    fn decode(data: &[u8]) -> Result<Self, Error> {
        let data: &[u8; LEN] = util::ref_array_start(data).ok_or(Error::Buffer)?;

        Ok(Gps {
            latitude: i32::from_be_bytes([data[0], data[1], data[2], data[3]]) as f64 / 1e7,
            longitude: i32::from_be_bytes([data[4], data[5], data[6], data[7]]) as f64 / 1e7,
            groundspeed: u16::from_be_bytes([data[8], data[9]]) as f32 / 10.0,
            heading: u16::from_be_bytes([data[10], data[11]]) as f32 / 100.0,
            altitude: u16::from_be_bytes([data[12], data[13]]) as i32 - 1000,
            satellites: data[14],
        })
    }

    fn encode(&self, data: &mut [u8]) -> Result<(), Error> {
        let data: &mut [u8; LEN] = util::mut_array_start(data).ok_or(Error::Buffer)?;

        data[0..4].copy_from_slice(&((self.latitude * 1e7) as i32).to_be_bytes());
        data[4..8].copy_from_slice(&((self.longitude * 1e7) as i32).to_be_bytes());
        data[8..10].copy_from_slice(&((self.groundspeed * 10.0) as u16).to_be_bytes());
        data[10..12].copy_from_slice(&((self.heading * 100.0) as u16).to_be_bytes());
        data[12..14].copy_from_slice(&((self.altitude + 1000) as u16).to_be_bytes());
        data[14] = self.satellites;

        Ok(())
    }
}

impl PayloadDump for Gps {}
