use crate::{Clock, RcChannelsPacked};

/// Latest decoded control and radio-health values, owned by a
/// [`Codec`](crate::Codec).
///
/// Fields are overwritten whole each time the relevant frame type is
/// decoded; nothing here validates values for plausibility.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkState {
    /// Raw 11-bit channel values, neutral (992) until the first RC frame
    pub channels: [u16; 16],
    /// Link quality from the last link statistics frame
    pub link_quality: u8,
    /// RSSI in dBm from the last link statistics frame
    pub rssi_dbm: i16,
    last_packet_ms: Option<u64>,
}

impl LinkState {
    pub const fn new() -> Self {
        Self {
            channels: [RcChannelsPacked::CHANNEL_VALUE_MID; 16],
            link_quality: 0,
            rssi_dbm: 0,
            last_packet_ms: None,
        }
    }

    /// Maps a channel to percent of stick travel, 0.0 at the protocol's
    /// mid point (992) and 100.0 at its max (1811).
    ///
    /// The mapping is linear and unclamped: raw values below the
    /// calibration range come out below -100. Out-of-range indices yield
    /// 0.0.
    pub fn channel_percent(&self, index: usize) -> f32 {
        match self.channels.get(index) {
            Some(&raw) => {
                const MID: f32 = RcChannelsPacked::CHANNEL_VALUE_MID as f32;
                const MAX: f32 = RcChannelsPacked::CHANNEL_VALUE_MAX as f32;
                (raw as f32 - MID) / (MAX - MID) * 100.0
            }
            None => 0.0,
        }
    }

    /// Timestamp of the last successfully decoded frame, if any.
    pub fn last_packet_ms(&self) -> Option<u64> {
        self.last_packet_ms
    }

    /// Whether a valid frame arrived strictly less than `timeout_ms` ago.
    ///
    /// Purely derived from elapsed time; there is no connection handshake.
    pub fn is_connected(&self, clock: &impl Clock, timeout_ms: u64) -> bool {
        match self.last_packet_ms {
            Some(at) => clock.elapsed_ms(at) < timeout_ms,
            None => false,
        }
    }

    pub(crate) fn mark_packet(&mut self, now_ms: u64) {
        self.last_packet_ms = Some(now_ms);
    }
}

impl Default for LinkState {
    fn default() -> Self {
        Self::new()
    }
}
