use crate::{util, Error, PacketType, Payload, PayloadDump};

const LEN: usize = 8;

/// `BatterySensor` payload type.
///
/// Voltage and current travel as big-endian u16 in tenths; capacity is a
/// 24-bit big-endian integer. Scaling on encode truncates rather than
/// rounds, matching what receivers in the field expect bit-for-bit.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatterySensor {
    /// Battery voltage in volts
    pub voltage: f32,
    /// Current draw in amperes
    pub current: f32,
    /// Capacity used in mAh (24 bits on the wire)
    pub capacity: u32,
    /// Battery remaining in percent
    pub remaining: u8,
}

impl Payload for BatterySensor {
    fn len(&self) -> usize {
        LEN
    }

    fn typ(&self) -> PacketType {
        PacketType::BatterySensor
    }

    fn decode(data: &[u8]) -> Result<Self, Error> {
        let data: &[u8; LEN] = util::ref_array_start(data).ok_or(Error::Buffer)?;

        Ok(BatterySensor {
            voltage: u16::from_be_bytes([data[0], data[1]]) as f32 / 10.0,
            current: u16::from_be_bytes([data[2], data[3]]) as f32 / 10.0,
            capacity: u32::from_be_bytes([0, data[4], data[5], data[6]]),
            remaining: data[7],
        })
    }

    fn encode(&self, data: &mut [u8]) -> Result<(), Error> {
        let data: &mut [u8; LEN] = util::mut_array_start(data).ok_or(Error::Buffer)?;

        data[0..2].copy_from_slice(&((self.voltage * 10.0) as u16).to_be_bytes());
        data[2..4].copy_from_slice(&((self.current * 10.0) as u16).to_be_bytes());
        // No native 24-bit type, so the capacity bytes are assembled by hand
        data[4] = (self.capacity >> 16) as u8;
        data[5] = (self.capacity >> 8) as u8;
        data[6] = self.capacity as u8;
        data[7] = self.remaining;

        Ok(())
    }
}

impl PayloadDump for BatterySensor {}
