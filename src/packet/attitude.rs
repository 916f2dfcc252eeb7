use crate::{util, Error, PacketType, Payload, PayloadDump};

const LEN: usize = 6;

// The wire unit is 1e-4 radians; angles are held in degrees
const RAD_1E4_PER_DEG: f32 = 3.14159 / 180.0 * 10000.0;

/// `Attitude` payload type: pitch, roll and yaw as big-endian i16 in units
/// of 1e-4 radians. Conversion truncates toward zero.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Attitude {
    /// Pitch angle in degrees
    pub pitch: f32,
    /// Roll angle in degrees
    pub roll: f32,
    /// Yaw angle in degrees
    pub yaw: f32,
}

fn angle_to_wire(degrees: f32) -> [u8; 2] {
    ((degrees * RAD_1E4_PER_DEG) as i16).to_be_bytes()
}

fn angle_from_wire(data: [u8; 2]) -> f32 {
    i16::from_be_bytes(data) as f32 / RAD_1E4_PER_DEG
}

impl Payload for Attitude {
    fn len(&self) -> usize {
        LEN
    }

    fn typ(&self) -> PacketType {
        PacketType::Attitude
    }

    fn decode(data: &[u8]) -> Result<Self, Error> {
        let data: &[u8; LEN] = util::ref_array_start(data).ok_or(Error::Buffer)?;

        Ok(Attitude {
            pitch: angle_from_wire([data[0], data[1]]),
            roll: angle_from_wire([data[2], data[3]]),
            yaw: angle_from_wire([data[4], data[5]]),
        })
    }

    fn encode(&self, data: &mut [u8]) -> Result<(), Error> {
        let data: &mut [u8; LEN] = util::mut_array_start(data).ok_or(Error::Buffer)?;

        data[0..2].copy_from_slice(&angle_to_wire(self.pitch));
        data[2..4].copy_from_slice(&angle_to_wire(self.roll));
        data[4..6].copy_from_slice(&angle_to_wire(self.yaw));

        Ok(())
    }
}

impl PayloadDump for Attitude {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attitude_wire_units() {
        let packet = Attitude {
            pitch: 45.0,
            roll: -90.0,
            yaw: 0.0,
        };

        let mut data = [0u8; LEN];
        packet.encode(&mut data).unwrap();

        // 45 deg = 0.7853975 rad -> 7853 after truncation
        assert_eq!(i16::from_be_bytes([data[0], data[1]]), 7853);
        assert_eq!(i16::from_be_bytes([data[2], data[3]]), -15707);
        assert_eq!(i16::from_be_bytes([data[4], data[5]]), 0);
    }

    #[test]
    fn test_attitude_encode_and_decode() {
        let original = Attitude {
            pitch: 10.0,
            roll: -20.0,
            yaw: 175.0,
        };

        let mut data = [0u8; LEN];
        original.encode(&mut data).unwrap();

        let parsed = Attitude::decode(&data).unwrap();
        assert!((parsed.pitch - 10.0).abs() < 0.1);
        assert!((parsed.roll - (-20.0)).abs() < 0.1);
        assert!((parsed.yaw - 175.0).abs() < 0.1);
    }

    #[test]
    fn test_attitude_decode_short_payload() {
        assert_eq!(Attitude::decode(&[0u8; 3]), Err(Error::Buffer));
    }
}
