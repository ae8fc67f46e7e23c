//! Netrecon - Authorized Network Reconnaissance Engine
//!
//! This library discovers live hosts on a target network, identifies open
//! TCP ports, fingerprints the services behind them and conditionally
//! enumerates SMB shares and LDAP information. The aggregate `ScanResult`
//! is the sole artifact handed to downstream consumers.
//!
//! # Warning
//! This tool is designed for ethical penetration testing and security
//! assessment purposes only. Users are responsible for ensuring they have
//! proper authorization before scanning any networks or systems.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod display;
pub mod enumeration;
pub mod error;
pub mod fingerprint;
pub mod portscan;
pub mod prober;
pub mod scanner;
pub mod target;
pub mod utils;

pub use error::{Result, ScanError};
