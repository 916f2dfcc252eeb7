use crate::{util, Error, PacketType, Payload, PayloadDump};

const LEN: usize = 22;
const MASK_11BIT: u32 = 0x07FF;

/// `RcChannelsPacked` payload type: 16 channels of 11 bits each, packed as a
/// little-endian bitstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RcChannelsPacked(pub [u16; 16]);

impl RcChannelsPacked {
    /// Minimum channel value
    pub const CHANNEL_VALUE_MIN: u16 = 172;
    /// Channel value corresponding to 1000 in betaflight
    pub const CHANNEL_VALUE_1000: u16 = 191;
    /// Middle channel value
    pub const CHANNEL_VALUE_MID: u16 = 992;
    /// Channel value corresponding to 2000 in betaflight
    pub const CHANNEL_VALUE_2000: u16 = 1792;
    /// Max channel value
    pub const CHANNEL_VALUE_MAX: u16 = 1811;

    fn raw_decode(data: &[u8; LEN]) -> Self {
        let mut ch = [0u16; 16];
        for (i, ch) in ch.iter_mut().enumerate() {
            // Channel i starts at bit offset i*11 and spans up to 3 bytes
            let bit = i * 11;
            let byte = bit / 8;
            let shift = bit % 8;

            let mut val = (data[byte] as u32) >> shift;
            val |= (data[byte + 1] as u32) << (8 - shift);
            if byte + 2 < LEN {
                val |= (data[byte + 2] as u32) << (16 - shift);
            }

            *ch = (val & MASK_11BIT) as u16;
        }
        RcChannelsPacked(ch)
    }

    fn raw_encode(&self, data: &mut [u8; LEN]) {
        data.fill(0);
        for (i, &val) in self.0.iter().enumerate() {
            let val = val as u32 & MASK_11BIT;
            let bit = i * 11;
            let byte = bit / 8;
            let shift = bit % 8;

            data[byte] |= (val << shift) as u8;
            data[byte + 1] |= (val >> (8 - shift)) as u8;
            if byte + 2 < LEN {
                data[byte + 2] |= (val >> (16 - shift)) as u8;
            }
        }
    }
}

impl Payload for RcChannelsPacked {
    fn len(&self) -> usize {
        LEN
    }

    fn typ(&self) -> PacketType {
        PacketType::RcChannelsPacked
    }

    fn decode(data: &[u8]) -> Result<Self, Error> {
        let data: &[u8; LEN] = util::ref_array_start(data).ok_or(Error::Buffer)?;
        Ok(Self::raw_decode(data))
    }

    fn encode(&self, data: &mut [u8]) -> Result<(), Error> {
        let data: &mut [u8; LEN] = util::mut_array_start(data).ok_or(Error::Buffer)?;
        self.raw_encode(data);
        Ok(())
    }
}

impl PayloadDump for RcChannelsPacked {}

impl core::ops::Deref for RcChannelsPacked {
    type Target = [u16; 16];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl core::ops::DerefMut for RcChannelsPacked {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rc_channels_encode_and_decode() {
        let mut original = RcChannelsPacked([0; 16]);
        for i in 0..16 {
            original[i] = i as u16 * 10;
        }

        let mut data = [0u8; LEN];
        original.encode(&mut data).unwrap();

        let parsed = RcChannelsPacked::decode(&data).unwrap();
        for i in 0..16 {
            assert_eq!(parsed[i], i as u16 * 10);
        }
    }

    #[test]
    fn test_rc_channels_neutral_payload() {
        // 992 = 0x3E0 repeated every 11 bits; 8 channels fill exactly
        // 11 bytes, so the pattern repeats halfway
        #[rustfmt::skip]
        let wire: [u8; LEN] = [
            0xE0, 0x03, 0x1F, 0xF8, 0xC0, 0x07, 0x3E, 0xF0, 0x81, 0x0F, 0x7C,
            0xE0, 0x03, 0x1F, 0xF8, 0xC0, 0x07, 0x3E, 0xF0, 0x81, 0x0F, 0x7C,
        ];

        let parsed = RcChannelsPacked::decode(&wire).unwrap();
        assert_eq!(parsed.0, [992; 16]);

        let mut data = [0u8; LEN];
        RcChannelsPacked([RcChannelsPacked::CHANNEL_VALUE_MID; 16])
            .encode(&mut data)
            .unwrap();
        assert_eq!(data, wire);
    }

    #[test]
    fn test_rc_channels_first_channel_bit_layout() {
        // Channel 0 occupies bits 0..11: 0x7FF fills byte 0 and the low
        // 3 bits of byte 1
        let mut channels = RcChannelsPacked([0; 16]);
        channels[0] = 0x7FF;

        let mut data = [0u8; LEN];
        channels.encode(&mut data).unwrap();
        assert_eq!(data[0], 0xFF);
        assert_eq!(data[1], 0x07);
        assert!(data[2..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_rc_channels_all_max_fills_payload() {
        let mut data = [0u8; LEN];
        RcChannelsPacked([0x7FF; 16]).encode(&mut data).unwrap();
        assert_eq!(data, [0xFF; LEN]);
    }

    #[test]
    fn test_rc_channels_values_above_11_bits_are_masked() {
        let mut channels = RcChannelsPacked([0; 16]);
        channels[3] = 0xFFFF;

        let mut data = [0u8; LEN];
        channels.encode(&mut data).unwrap();

        let parsed = RcChannelsPacked::decode(&data).unwrap();
        assert_eq!(parsed[3], 0x7FF);
        assert_eq!(parsed[2], 0);
        assert_eq!(parsed[4], 0);
    }

    #[test]
    fn test_rc_channels_decode_short_payload() {
        assert_eq!(
            RcChannelsPacked::decode(&[0u8; 10]),
            Err(Error::Buffer)
        );
    }
}
