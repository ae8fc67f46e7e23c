use crate::{Result, ScanError};
use log::warn;
use std::net::Ipv4Addr;

/// Hard cap on how many candidate addresses a CIDR block may contribute.
pub const MAX_CIDR_HOSTS: usize = 254;

/// Candidate addresses produced from a target specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedTarget {
    pub addresses: Vec<String>,
    /// Set when the CIDR block held more hosts than `MAX_CIDR_HOSTS` and
    /// only the first addresses in network order were kept.
    pub truncated: bool,
}

/// Expand a target specification into candidate addresses.
///
/// A string containing `/` is parsed as an IPv4 CIDR block; network and
/// broadcast addresses are excluded and enumeration is ascending. Anything
/// else is passed through as a single address with no validation beyond
/// non-emptiness, so hostnames survive untouched.
pub fn expand_target(target: &str) -> Result<ExpandedTarget> {
    let target = target.trim();
    if target.is_empty() {
        return Err(ScanError::InvalidTarget("empty target".to_string()));
    }

    if target.contains('/') {
        expand_cidr(target)
    } else {
        Ok(ExpandedTarget {
            addresses: vec![target.to_string()],
            truncated: false,
        })
    }
}

fn expand_cidr(cidr: &str) -> Result<ExpandedTarget> {
    let parts: Vec<&str> = cidr.split('/').collect();
    if parts.len() != 2 {
        return Err(ScanError::InvalidTarget(format!(
            "Invalid CIDR format: {}",
            cidr
        )));
    }

    let base_ip: Ipv4Addr = parts[0]
        .parse()
        .map_err(|_| ScanError::InvalidTarget(format!("Invalid IP in CIDR: {}", parts[0])))?;

    let prefix_len: u8 = parts[1]
        .parse()
        .map_err(|_| ScanError::InvalidTarget(format!("Invalid prefix length: {}", parts[1])))?;

    if prefix_len > 32 {
        return Err(ScanError::InvalidTarget(
            "Prefix length cannot exceed 32".to_string(),
        ));
    }

    let base = u32::from(base_ip);
    let mask = if prefix_len == 0 {
        0
    } else {
        u32::MAX << (32 - prefix_len)
    };
    let network = base & mask;
    let broadcast = network | !mask;

    // /31 keeps both addresses (RFC 3021), /32 is the lone address itself.
    let (start, end) = if prefix_len >= 31 {
        (network, broadcast)
    } else {
        (network + 1, broadcast - 1)
    };

    let host_count = (end - start + 1) as usize;
    let truncated = host_count > MAX_CIDR_HOSTS;
    if truncated {
        warn!(
            "Large network detected ({} hosts). Limiting to first {} hosts.",
            host_count, MAX_CIDR_HOSTS
        );
    }

    let addresses = (start..=end)
        .take(MAX_CIDR_HOSTS)
        .map(|ip| Ipv4Addr::from(ip).to_string())
        .collect();

    Ok(ExpandedTarget {
        addresses,
        truncated,
    })
}
