use crate::config::Config;
use crate::prober::Prober;
use crate::target::{expand_target, ExpandedTarget};
use crate::Result;
use log::{debug, info, warn};
use std::process::Stdio;
use tokio::process::Command;

pub struct HostDiscovery {
    config: Config,
}

impl HostDiscovery {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Determine which candidate addresses of the target are live.
    ///
    /// CIDR targets return only the addresses that answered an ICMP echo;
    /// an empty list is a valid outcome and means the scan goes no further.
    /// Single-address targets are always included in the result, even when
    /// the probe fails or the ping utility is missing, because echo requests
    /// are frequently filtered while TCP connectivity remains open.
    pub async fn discover(&self, target: &str) -> Result<Vec<String>> {
        let ExpandedTarget {
            addresses,
            truncated: _,
        } = expand_target(target)?;

        let hosts = if target.contains('/') {
            info!("Discovering hosts in network: {}", target);
            self.discover_range(addresses).await
        } else {
            info!("Testing single host: {}", target);
            self.discover_single(addresses).await
        };

        info!("Discovered {} live hosts", hosts.len());
        Ok(hosts)
    }

    async fn discover_range(&self, addresses: Vec<String>) -> Vec<String> {
        let prober = Prober::new(self.config.scanning.threads, self.config.probe_timeout());

        let mut hosts = prober.run(addresses, |addr| ping_probe(addr)).await;
        hosts.sort();

        if hosts.is_empty() {
            warn!("No live hosts discovered");
        }
        hosts
    }

    async fn discover_single(&self, addresses: Vec<String>) -> Vec<String> {
        // expand_target always yields exactly one address for a non-CIDR
        // target; keep the raw string as the fallback host either way.
        let host = addresses
            .into_iter()
            .next()
            .unwrap_or_default();

        match ping_probe(host.clone()).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                warn!(
                    "Host {} appears to be down or not responding to ping; scanning anyway",
                    host
                );
            }
            Err(e) => {
                warn!(
                    "Ping probe unavailable ({}); treating {} as the sole host",
                    e, host
                );
            }
        }

        vec![host]
    }
}

/// Single ICMP echo via the platform ping utility; exit status 0 means alive.
async fn ping_probe(addr: String) -> Result<Option<String>> {
    let status = ping_command(&addr)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await?;

    if status.success() {
        debug!("Host {} is alive (ICMP)", addr);
        Ok(Some(addr))
    } else {
        Ok(None)
    }
}

fn ping_command(addr: &str) -> Command {
    let mut cmd = Command::new("ping");
    if cfg!(windows) {
        cmd.args(["-n", "1", "-w", "1000", addr]);
    } else {
        cmd.args(["-c", "1", "-W", "1", addr]);
    }
    cmd
}
