use std::{env, thread, time::Duration, time::Instant};

use crsf_link::{Codec, Packet, StdClock, Transport};
use serialport::SerialPort;

struct SerialLink {
    port: Box<dyn SerialPort>,
}

impl Transport for SerialLink {
    fn bytes_available(&self) -> usize {
        self.port.bytes_to_read().unwrap_or(0) as usize
    }

    fn read(&mut self, buf: &mut [u8]) -> usize {
        std::io::Read::read(&mut self.port, buf).unwrap_or(0)
    }

    fn write(&mut self, data: &[u8]) {
        let _ = std::io::Write::write_all(&mut self.port, data);
    }

    fn flush_available(&mut self) {
        let _ = self.port.clear(serialport::ClearBuffer::Input);
    }
}

fn main() {
    let path = env::args().nth(1).expect("no serial port supplied");
    let port = serialport::new(path, 420_000)
        .timeout(Duration::from_millis(20))
        .open()
        .expect("failed to open serial port");

    let mut codec = Codec::new(SerialLink { port }, StdClock::new());
    let mut last_telemetry = Instant::now();

    loop {
        match codec.poll() {
            Some(Packet::RcChannelsPacked(channels)) => {
                println!(
                    "channels: {:?} (throttle {:.1}%)",
                    channels.0,
                    codec.channel_percent(2)
                );
            }
            Some(Packet::LinkStatistics(stats)) => {
                println!(
                    "link: rssi {} dBm, lq {}% ({stats:?})",
                    codec.link().rssi_dbm,
                    codec.link().link_quality
                );
            }
            Some(other) => println!("{other:?}"),
            None => {}
        }

        if !codec.is_connected() {
            println!("link down");
        }

        // A real flight controller would source these from sensors
        if last_telemetry.elapsed() >= Duration::from_secs(1) {
            last_telemetry = Instant::now();
            codec.send_battery(16.8, 25.5, 1250).unwrap();
            codec.send_attitude(0.0, 0.0, 90.0).unwrap();
            codec.send_flight_mode("MANUAL").unwrap();
        }

        thread::sleep(Duration::from_millis(1));
    }
}
