use crate::config::Config;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::process::Stdio;
use tokio::process::Command;
use tokio::time::timeout;

/// SMB share listing for one host, parsed from an external tool's output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmbInfo {
    pub shares: Vec<String>,
    pub os_info: String,
    pub domain_info: String,
}

/// LDAP enumeration result. Currently always empty, see `LdapEnumerator`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LdapInfo {
    pub base_dn: String,
    pub naming_contexts: Vec<String>,
    pub domain_info: String,
}

pub struct SmbEnumerator {
    config: Config,
}

impl SmbEnumerator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// List SMB shares by shelling out to the platform listing tool.
    ///
    /// Any failure (tool missing, non-zero exit, timeout) degrades to an
    /// empty `SmbInfo` and is logged, never raised.
    pub async fn enumerate(&self, host: &str) -> SmbInfo {
        let output = match timeout(
            self.config.tool_timeout(),
            share_listing_command(host).stdin(Stdio::null()).output(),
        )
        .await
        {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                warn!(
                    "SMB listing tool unavailable for {}: {}. Install smbclient (e.g. apt install smbclient).",
                    host, e
                );
                return SmbInfo::default();
            }
            Err(_) => {
                debug!("SMB enumeration timed out for {}", host);
                return SmbInfo::default();
            }
        };

        if !output.status.success() {
            debug!(
                "SMB enumeration failed for {} (exit status {})",
                host, output.status
            );
            return SmbInfo::default();
        }

        SmbInfo {
            shares: parse_share_listing(&String::from_utf8_lossy(&output.stdout)),
            ..SmbInfo::default()
        }
    }
}

/// Extract share names from tool output: a line mentioning a disk or print
/// queue marker contributes its first whitespace-delimited token.
pub fn parse_share_listing(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|line| line.contains("Disk") || line.contains("Print"))
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

fn share_listing_command(host: &str) -> Command {
    if cfg!(windows) {
        let mut cmd = Command::new("net");
        cmd.args(["view", &format!("\\\\{}", host)]);
        cmd
    } else {
        let mut cmd = Command::new("smbclient");
        cmd.args(["-L", host, "-N"]);
        cmd
    }
}

/// Extension point for LDAP enumeration.
///
/// No wire-level LDAP logic exists yet; this returns an empty structure so
/// downstream consumers see a stable shape when port 389 is open.
pub struct LdapEnumerator;

impl LdapEnumerator {
    pub fn new() -> Self {
        Self
    }

    pub async fn enumerate(&self, host: &str) -> LdapInfo {
        debug!("LDAP enumeration for {} - not implemented yet", host);
        LdapInfo::default()
    }
}

impl Default for LdapEnumerator {
    fn default() -> Self {
        Self::new()
    }
}
