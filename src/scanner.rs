use crate::config::Config;
use crate::discovery::HostDiscovery;
use crate::enumeration::{LdapEnumerator, LdapInfo, SmbEnumerator, SmbInfo};
use crate::fingerprint::{ServiceFingerprinter, ServiceInfo};
use crate::portscan::PortScanner;
use crate::Result;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const SMB_PORT: u16 = 445;
const LDAP_PORT: u16 = 389;

/// Aggregate outcome of one scan run.
///
/// This is the sole artifact exposed to downstream consumers (detection,
/// reporting); it is built fresh per run and never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanResult {
    pub host_discovery: Vec<String>,
    pub port_scan: BTreeMap<String, Vec<u16>>,
    pub service_enumeration: BTreeMap<String, BTreeMap<u16, ServiceInfo>>,
    pub smb_enumeration: BTreeMap<String, SmbInfo>,
    pub ldap_enumeration: BTreeMap<String, LdapInfo>,
}

pub struct NetworkScanner {
    config: Config,
}

impl NetworkScanner {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the full reconnaissance pipeline against one target.
    ///
    /// Only a malformed target surfaces as an error. A failure while
    /// processing one host degrades that host's contribution and is logged;
    /// it never aborts the run or the other hosts.
    pub async fn scan_target(&self, target: &str) -> Result<ScanResult> {
        let mut results = ScanResult::default();

        info!("Starting host discovery...");
        let discovery = HostDiscovery::new(self.config.clone());
        let hosts = discovery.discover(target).await?;
        results.host_discovery = hosts.clone();

        if hosts.is_empty() {
            warn!("No live hosts discovered");
            return Ok(results);
        }

        for host in &hosts {
            if let Err(e) = self.scan_host(host, &mut results).await {
                warn!("Error while scanning {}: {}", host, e);
            }
        }

        Ok(results)
    }

    async fn scan_host(&self, host: &str, results: &mut ScanResult) -> Result<()> {
        info!("Scanning ports on {}", host);
        let open_ports = PortScanner::new(self.config.clone()).scan(host).await;
        results.port_scan.insert(host.to_string(), open_ports.clone());

        if open_ports.is_empty() {
            info!("No open ports found on {}", host);
            return Ok(());
        }

        let services = ServiceFingerprinter::new(self.config.clone())
            .enumerate(host, &open_ports)
            .await;
        results
            .service_enumeration
            .insert(host.to_string(), services);

        if open_ports.contains(&SMB_PORT) {
            let smb_info = SmbEnumerator::new(self.config.clone()).enumerate(host).await;
            results.smb_enumeration.insert(host.to_string(), smb_info);
        }

        if open_ports.contains(&LDAP_PORT) {
            let ldap_info = LdapEnumerator::new().enumerate(host).await;
            results.ldap_enumeration.insert(host.to_string(), ldap_info);
        }

        Ok(())
    }
}
