use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "netrecon")]
#[command(about = "Authorized network reconnaissance: host discovery, port scanning and service fingerprinting")]
#[command(long_about = r#"
Netrecon discovers live hosts on a target network, identifies open TCP
ports, fingerprints the listening services and enumerates SMB shares and
LDAP information where the signature ports are open.

WARNING: This tool should only be used on networks and systems you own or
have explicit permission to test. Unauthorized scanning may be illegal.

Usage Examples:
  netrecon 192.168.1.0/24                  # Scan a whole subnet
  netrecon 192.168.1.100                   # Scan a single host
  netrecon 10.0.0.0/24 -o ./reports        # Write the JSON result
  netrecon 192.168.1.100 --threads 20 -vv  # Slower, chattier scan
"#)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Target IP address or CIDR notation (e.g., 192.168.1.1, 192.168.1.0/24)
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Number of concurrent probes per stage
    #[arg(long)]
    pub threads: Option<usize>,

    /// Per-probe timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Directory for the JSON scan report; skipped when absent
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}
