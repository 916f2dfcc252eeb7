use crate::{
    Attitude, BatterySensor, Clock, Error, FlightMode, FrameSync, Gps, LinkState, Packet,
    PayloadDump, Transport, DEFAULT_LINK_TIMEOUT_MS, MAX_PACKET_LEN,
};

/// Bidirectional CRSF endpoint over a byte-stream transport.
///
/// Polling decodes inbound frames into the owned [`LinkState`]; the send
/// methods pack telemetry into outbound frames. The codec holds no other
/// state and performs no I/O besides what the transport provides, so
/// multiple instances (dual receivers) coexist freely.
///
/// All methods are non-blocking. Access from more than one execution
/// context must be serialized externally: decoding updates several link
/// state fields in place and a concurrent reader could observe a frame
/// half-applied.
pub struct Codec<T, C> {
    transport: T,
    clock: C,
    sync: FrameSync,
    link: LinkState,
}

impl<T: Transport, C: Clock> Codec<T, C> {
    pub fn new(transport: T, clock: C) -> Self {
        Self {
            transport,
            clock,
            sync: FrameSync::new(),
            link: LinkState::new(),
        }
    }

    /// Attempts to decode one inbound frame, updating the link state.
    ///
    /// Returns `None` when no complete frame was available, when a
    /// malformed frame was discarded, and for CRC-valid frames of
    /// unrecognized type (those still count toward liveness). Meant to be
    /// called once per control-loop tick.
    pub fn poll(&mut self) -> Option<Packet> {
        let raw = self.sync.read_frame(&mut self.transport)?;

        // Any CRC-valid frame proves the link is alive, recognized or not
        self.link.mark_packet(self.clock.now_ms());

        let packet = raw.to_packet().ok()?;
        match &packet {
            Packet::RcChannelsPacked(channels) => {
                self.link.channels = channels.0;
            }
            Packet::LinkStatistics(_) => {
                // The snapshot reads the RSSI magnitude at payload byte 4
                // and link quality at byte 5
                let payload = raw.payload().ok()?;
                self.link.rssi_dbm = -(payload[4] as i16);
                self.link.link_quality = payload[5];
            }
            _ => {}
        }

        Some(packet)
    }

    /// The current link-state snapshot.
    pub fn link(&self) -> &LinkState {
        &self.link
    }

    /// Percent of stick travel for a channel; see
    /// [`LinkState::channel_percent`].
    pub fn channel_percent(&self, index: usize) -> f32 {
        self.link.channel_percent(index)
    }

    /// Whether a valid frame arrived within the default 1000 ms window.
    pub fn is_connected(&self) -> bool {
        self.is_connected_within(DEFAULT_LINK_TIMEOUT_MS)
    }

    /// Whether a valid frame arrived strictly less than `timeout_ms` ago.
    pub fn is_connected_within(&self, timeout_ms: u64) -> bool {
        self.link.is_connected(&self.clock, timeout_ms)
    }

    /// Frames a payload and hands the bytes to the transport.
    pub fn send<P: PayloadDump>(&mut self, payload: &P) -> Result<(), Error> {
        let mut buf = [0u8; MAX_PACKET_LEN];
        let len = payload.dump(&mut buf)?;
        self.transport.write(&buf[..len]);
        Ok(())
    }

    /// Sends a battery sensor frame. Voltage in volts, current in amperes,
    /// capacity used in mAh.
    pub fn send_battery(&mut self, voltage: f32, current: f32, capacity: u32) -> Result<(), Error> {
        // Remaining percent is not measured, the field goes out as zero
        self.send(&BatterySensor {
            voltage,
            current,
            capacity,
            remaining: 0,
        })
    }

    /// Sends a GPS frame. Coordinates in degrees, altitude in meters.
    pub fn send_gps(
        &mut self,
        latitude: f64,
        longitude: f64,
        altitude: i32,
        satellites: u8,
    ) -> Result<(), Error> {
        // Groundspeed and heading are not sourced here but the fields must
        // be present for frame-length conformance
        self.send(&Gps {
            latitude,
            longitude,
            groundspeed: 0.0,
            heading: 0.0,
            altitude,
            satellites,
        })
    }

    /// Sends an attitude frame. Angles in degrees.
    pub fn send_attitude(&mut self, pitch: f32, roll: f32, yaw: f32) -> Result<(), Error> {
        self.send(&Attitude { pitch, roll, yaw })
    }

    /// Sends a flight mode frame. Fails on non-ASCII mode names.
    pub fn send_flight_mode(&mut self, mode: &str) -> Result<(), Error> {
        self.send(&FlightMode::new(mode)?)
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}
