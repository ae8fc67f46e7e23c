use crate::config::Config;
use crate::prober::Prober;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Longest banner kept per service, in characters.
const MAX_BANNER_CHARS: usize = 200;

/// Identity of the service behind one open port.
///
/// The service name comes from the static port table alone; the banner is
/// advisory metadata and never overrides it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service: String,
    pub banner: String,
}

pub struct ServiceFingerprinter {
    config: Config,
}

impl ServiceFingerprinter {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Fingerprint every open port of a host.
    ///
    /// Each port gets a fresh connection and an optional protocol probe.
    /// Connection or read failures are not fatal: the port keeps its entry
    /// with the table-derived service name and an empty banner.
    pub async fn enumerate(&self, host: &str, ports: &[u16]) -> BTreeMap<u16, ServiceInfo> {
        // Fingerprinting can stall on connect plus read; give the pool slot
        // room for both deadlines.
        let per_item = self.config.banner_connect_timeout() + self.config.banner_read_timeout();
        let prober = Prober::new(self.config.scanning.threads, per_item);

        let host_owned = host.to_string();
        let connect_timeout = self.config.banner_connect_timeout();
        let read_timeout = self.config.banner_read_timeout();

        let hits = prober
            .run(ports.to_vec(), |port| {
                grab_banner(host_owned.clone(), port, connect_timeout, read_timeout)
            })
            .await;

        let mut services: BTreeMap<u16, ServiceInfo> = hits.into_iter().collect();

        // A timed-out or failed grab must still leave the port in the map.
        for &port in ports {
            services.entry(port).or_insert_with(|| ServiceInfo {
                service: identify_service(port).to_string(),
                banner: String::new(),
            });
        }

        services
    }
}

async fn grab_banner(
    host: String,
    port: u16,
    connect_timeout: Duration,
    read_timeout: Duration,
) -> crate::Result<Option<(u16, ServiceInfo)>> {
    let service = identify_service(port).to_string();

    let mut stream =
        match timeout(connect_timeout, TcpStream::connect((host.as_str(), port))).await {
            Ok(Ok(stream)) => stream,
            Ok(Err(_)) | Err(_) => {
                return Ok(Some((
                    port,
                    ServiceInfo {
                        service,
                        banner: String::new(),
                    },
                )));
            }
        };

    // FTP and SSH announce themselves unsolicited; everything unmapped gets
    // a passive read.
    if let Some(probe) = probe_for_port(port) {
        let _ = stream.write_all(probe).await;
    }

    let mut buffer = vec![0u8; 1024];
    let banner = match timeout(read_timeout, stream.read(&mut buffer)).await {
        Ok(Ok(n)) if n > 0 => {
            let raw = String::from_utf8_lossy(&buffer[..n]).to_string();
            debug!("Banner from {}:{}: {}", host, port, raw.trim());
            sanitize_banner(&raw)
        }
        _ => String::new(),
    };

    Ok(Some((port, ServiceInfo { service, banner })))
}

fn probe_for_port(port: u16) -> Option<&'static [u8]> {
    match port {
        80 | 443 | 8080 => Some(b"HEAD / HTTP/1.0\r\n\r\n"),
        25 => Some(b"EHLO scan\r\n"),
        _ => None,
    }
}

/// Strip control characters, trim and cap the captured banner.
pub fn sanitize_banner(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .chars()
        .take(MAX_BANNER_CHARS)
        .collect()
}

/// Canonical service label for a port number.
pub fn identify_service(port: u16) -> &'static str {
    match port {
        21 => "FTP",
        22 => "SSH",
        23 => "Telnet",
        25 => "SMTP",
        53 => "DNS",
        80 => "HTTP",
        110 => "POP3",
        135 => "RPC",
        139 => "NetBIOS",
        143 => "IMAP",
        443 => "HTTPS",
        445 => "SMB",
        993 => "IMAPS",
        995 => "POP3S",
        1723 => "PPTP",
        3306 => "MySQL",
        3389 => "RDP",
        5432 => "PostgreSQL",
        5900 => "VNC",
        8080 => "HTTP-Alt",
        _ => "Unknown",
    }
}
