use crate::scanner::ScanResult;
use colored::*;

/// Display utilities for clean, colored terminal output.
pub struct DisplayManager {
    use_colors: bool,
    quiet_mode: bool,
}

impl DisplayManager {
    pub fn new() -> Self {
        Self::with_quiet(false)
    }

    pub fn with_quiet(quiet: bool) -> Self {
        // Simple check for color support - assume true for most terminals
        let use_colors = std::env::var("NO_COLOR").is_err()
            && std::env::var("TERM").map_or(true, |term| term != "dumb");

        Self {
            use_colors,
            quiet_mode: quiet,
        }
    }

    pub fn print_banner(&self, title: &str, subtitle: Option<&str>) {
        if self.quiet_mode {
            return;
        }

        if self.use_colors {
            println!("{}", title.bright_cyan().bold());
            if let Some(sub) = subtitle {
                println!("{}", sub.bright_black());
            }
        } else {
            println!("{}", title);
            if let Some(sub) = subtitle {
                println!("{}", sub);
            }
        }
        println!("{}", "=".repeat(60));
    }

    pub fn print_section_header(&self, title: &str) {
        if self.quiet_mode {
            return;
        }

        println!();
        if self.use_colors {
            println!("{}", title.bright_white().bold());
            println!("{}", "-".repeat(title.len()).bright_black());
        } else {
            println!("{}", title);
            println!("{}", "-".repeat(title.len()));
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.quiet_mode {
            return;
        }
        if self.use_colors {
            println!("{} {}", "[*]".cyan(), message);
        } else {
            println!("[*] {}", message);
        }
    }

    pub fn print_success(&self, message: &str) {
        if self.quiet_mode {
            return;
        }
        if self.use_colors {
            println!("{} {}", "[+]".green().bold(), message);
        } else {
            println!("[+] {}", message);
        }
    }

    pub fn print_warning(&self, message: &str) {
        if self.quiet_mode {
            return;
        }
        if self.use_colors {
            println!("{} {}", "[!]".yellow().bold(), message);
        } else {
            println!("[!] {}", message);
        }
    }

    pub fn print_error(&self, message: &str) {
        if self.use_colors {
            eprintln!("{} {}", "[x]".red().bold(), message);
        } else {
            eprintln!("[x] {}", message);
        }
    }

    /// Render a finished scan: hosts, open ports with services and banners,
    /// and any SMB/LDAP findings.
    pub fn print_scan_result(&self, result: &ScanResult) {
        if self.quiet_mode {
            return;
        }

        self.print_section_header("LIVE HOSTS");
        if result.host_discovery.is_empty() {
            self.print_warning("No live hosts found in target range");
            return;
        }
        for host in &result.host_discovery {
            if self.use_colors {
                println!("  {}", host.bright_white());
            } else {
                println!("  {}", host);
            }
        }

        for host in &result.host_discovery {
            self.print_section_header(&format!("HOST {}", host));

            let ports = result.port_scan.get(host);
            match ports {
                Some(ports) if !ports.is_empty() => {
                    for port in ports {
                        let service = result
                            .service_enumeration
                            .get(host)
                            .and_then(|services| services.get(port));
                        let (name, banner) = match service {
                            Some(info) => (info.service.as_str(), info.banner.as_str()),
                            None => ("Unknown", ""),
                        };

                        if self.use_colors {
                            print!("  {:>5}/tcp  {}", port.to_string().yellow(), name.green());
                        } else {
                            print!("  {:>5}/tcp  {}", port, name);
                        }
                        if banner.is_empty() {
                            println!();
                        } else if self.use_colors {
                            println!("  {}", banner.bright_black());
                        } else {
                            println!("  {}", banner);
                        }
                    }
                }
                _ => self.print_info("No open ports"),
            }

            if let Some(smb) = result.smb_enumeration.get(host) {
                if smb.shares.is_empty() {
                    self.print_info("SMB: no shares enumerated");
                } else {
                    self.print_success(&format!("SMB shares: {}", smb.shares.join(", ")));
                }
            }

            if result.ldap_enumeration.contains_key(host) {
                self.print_info("LDAP: enumeration not implemented, empty result recorded");
            }
        }
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}
