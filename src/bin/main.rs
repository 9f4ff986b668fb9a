//! CLI tool for the WiFi radio inventory (wmon)

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "wmon")]
#[command(about = "WiFi radio inventory: radios, PCI bus addresses, and network interfaces from sysfs", long_about = None)]
#[command(version)]
struct Cli {
    /// Output format (json or text)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Root of the wireless phy registry
    #[arg(long, default_value = wmon::SYSFS_IEEE80211)]
    sysfs_root: PathBuf,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    env_logger::init();

    if let Err(e) = run(&cli) {
        let code = match e {
            wmon::Error::NoRadiosDetected => {
                eprintln!("{}", e);
                1
            }
            _ => {
                eprintln!("Error: {}", e);
                2
            }
        };
        std::process::exit(code);
    }
}

#[cfg(feature = "cli")]
fn run(cli: &Cli) -> wmon::Result<()> {
    use std::io;
    use wmon::{report, RadioInventory};

    let inventory = RadioInventory::scan_at(&cli.sysfs_root)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.format == "json" {
        report::render_json(inventory.radios(), &mut out)?;
    } else {
        report::render_text(inventory.radios(), &mut out)?;
    }
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI features not enabled. Please compile with --features cli");
    std::process::exit(1);
}
