use clap::Parser;
use env_logger::Env;
use netrecon::{
    cli::Cli,
    config::Config,
    display::DisplayManager,
    scanner::{NetworkScanner, ScanResult},
    utils, Result,
};
use std::path::Path;
use std::process;
use std::time::SystemTime;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_timestamp_secs()
        .init();

    let display = DisplayManager::with_quiet(cli.quiet);

    if !cli.quiet {
        display.print_banner(
            "NETRECON - Network Reconnaissance Engine",
            Some("Authorized Testing Only"),
        );
        display.print_warning("Ensure you have proper permission before scanning any networks.");
        println!();
    }

    let mut config = if let Some(config_path) = &cli.config {
        match Config::load_from_file(&config_path.to_string_lossy()) {
            Ok(config) => {
                if !cli.quiet {
                    display.print_success(&format!(
                        "Loaded configuration from {}",
                        config_path.display()
                    ));
                }
                config
            }
            Err(e) => {
                display.print_warning(&format!(
                    "Failed to load configuration: {}, using defaults",
                    e
                ));
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    // Apply CLI overrides to config
    if let Some(threads) = cli.threads {
        config.scanning.threads = threads;
    }
    if let Some(timeout) = cli.timeout {
        config.scanning.timeout = timeout;
    }

    let start_time = SystemTime::now();

    match run_scan(&config, &display, &cli).await {
        Ok(_) => {
            let elapsed = start_time.elapsed().unwrap_or_default();
            if !cli.quiet {
                display.print_success(&format!(
                    "Scan completed in {}",
                    utils::time::format_duration(elapsed)
                ));
            }
        }
        Err(e) => {
            display.print_error(&format!("Scan failed: {}", e));
            process::exit(1);
        }
    }
}

async fn run_scan(config: &Config, display: &DisplayManager, cli: &Cli) -> Result<()> {
    display.print_section_header("RECONNAISSANCE");
    display.print_info(&format!("Target: {}", cli.target));

    let spinner = if cli.quiet {
        None
    } else {
        Some(utils::progress::create_spinner("Scanning..."))
    };

    let scanner = NetworkScanner::new(config.clone());
    let result = scanner.scan_target(&cli.target).await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let result = result?;
    display.print_scan_result(&result);

    if let Some(output_dir) = &cli.output {
        let path = write_report(&result, output_dir)?;
        display.print_success(&format!("Report written to {}", path));
    }

    Ok(())
}

fn write_report(result: &ScanResult, output_dir: &Path) -> Result<String> {
    std::fs::create_dir_all(output_dir)?;

    let filename = format!(
        "scan_{}.json",
        utils::time::now_utc().format("%Y%m%d_%H%M%S")
    );
    let path = output_dir.join(filename);

    let json = serde_json::to_string_pretty(result)?;
    std::fs::write(&path, json)?;

    Ok(path.display().to_string())
}
