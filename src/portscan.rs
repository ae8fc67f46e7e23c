use crate::config::Config;
use crate::prober::Prober;
use log::{debug, info};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;

pub struct PortScanner {
    config: Config,
}

impl PortScanner {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Check which of the configured candidate ports accept a TCP handshake.
    ///
    /// Returns an ascending, deduplicated list. An empty list is a valid
    /// terminal outcome for a host; refused, timed-out and errored probes all
    /// count the same as closed.
    pub async fn scan(&self, host: &str) -> Vec<u16> {
        let prober = Prober::new(self.config.scanning.threads, self.config.probe_timeout());
        let connect_timeout = self.config.tcp_connect_timeout();

        let host_owned = host.to_string();
        let mut open_ports = prober
            .run(self.config.scanning.common_ports.clone(), |port| {
                tcp_connect_probe(host_owned.clone(), port, connect_timeout)
            })
            .await;

        open_ports.sort_unstable();
        open_ports.dedup();

        info!("Found {} open ports on {}", open_ports.len(), host);
        open_ports
    }
}

async fn tcp_connect_probe(
    host: String,
    port: u16,
    connect_timeout: Duration,
) -> crate::Result<Option<u16>> {
    match timeout(connect_timeout, TcpStream::connect((host.as_str(), port))).await {
        Ok(Ok(_stream)) => {
            debug!("TCP port {}:{} is open", host, port);
            Ok(Some(port))
        }
        // Refused means closed, timeout means filtered; both are absent.
        Ok(Err(_)) | Err(_) => Ok(None),
    }
}
