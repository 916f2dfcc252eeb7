use crate::{util, Error, PacketType, Payload, PayloadDump};

const LEN: usize = 10;

/// `LinkStatistics` payload type.
///
/// The codec's link-state snapshot only consumes two of these bytes; the
/// full struct is decoded for callers that want complete radio health data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub struct LinkStatistics {
    pub uplink_rssi_1: u8,
    pub uplink_rssi_2: u8,
    pub uplink_link_quality: u8,
    pub uplink_snr: i8,
    pub active_antenna: u8,
    pub rf_mode: u8,
    pub uplink_tx_power: u8,
    pub downlink_rssi: u8,
    pub downlink_link_quality: u8,
    pub downlink_snr: i8,
}

impl Payload for LinkStatistics {
    fn len(&self) -> usize {
        LEN
    }

    fn typ(&self) -> PacketType {
        PacketType::LinkStatistics
    }

    fn decode(data: &[u8]) -> Result<Self, Error> {
        let data: &[u8; LEN] = util::ref_array_start(data).ok_or(Error::Buffer)?;

        Ok(LinkStatistics {
            uplink_rssi_1: data[0],
            uplink_rssi_2: data[1],
            uplink_link_quality: data[2],
            uplink_snr: data[3] as i8,
            active_antenna: data[4],
            rf_mode: data[5],
            uplink_tx_power: data[6],
            downlink_rssi: data[7],
            downlink_link_quality: data[8],
            downlink_snr: data[9] as i8,
        })
    }

    fn encode(&self, data: &mut [u8]) -> Result<(), Error> {
        let data: &mut [u8; LEN] = util::mut_array_start(data).ok_or(Error::Buffer)?;

        data[0] = self.uplink_rssi_1;
        data[1] = self.uplink_rssi_2;
        data[2] = self.uplink_link_quality;
        data[3] = self.uplink_snr as u8;
        data[4] = self.active_antenna;
        data[5] = self.rf_mode;
        data[6] = self.uplink_tx_power;
        data[7] = self.downlink_rssi;
        data[8] = self.downlink_link_quality;
        data[9] = self.downlink_snr as u8;

        Ok(())
    }
}

impl PayloadDump for LinkStatistics {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_statistics_encode_and_decode() {
        let original = LinkStatistics {
            uplink_rssi_1: 100,
            uplink_rssi_2: 98,
            uplink_link_quality: 100,
            uplink_snr: -65,
            active_antenna: 0,
            rf_mode: 1,
            uplink_tx_power: 2,
            downlink_rssi: 120,
            downlink_link_quality: 98,
            downlink_snr: -68,
        };

        let mut data = [0u8; LEN];
        original.encode(&mut data).unwrap();

        let parsed = LinkStatistics::decode(&data).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_link_statistics_decode_short_payload() {
        assert_eq!(LinkStatistics::decode(&[0u8; 5]), Err(Error::Buffer));
    }
}
