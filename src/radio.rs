//! WiFi Radio Discovery
//!
//! On Linux, wireless physical radios ("phys") are exposed via
//! `/sys/class/ieee80211/`, one subdirectory per radio. Two further
//! subdirectories carry the metadata this tool reports:
//!
//! - `/sys/class/ieee80211/<phy>/device/net/` — one entry per network
//!   interface bound to the radio, e.g. `wlan0`
//! - `/sys/class/ieee80211/<phy>/device/driver/` — driver-internal entries,
//!   among them the PCI bus address of the device, e.g. `0000:03:00.0`
//!
//! # Examples
//!
//! ```no_run
//! use wmon::RadioInventory;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let inventory = RadioInventory::scan()?;
//! for radio in inventory.radios() {
//!     println!("{}: {:?} {:?}", radio.name, radio.pci_bus, radio.net_ifs);
//! }
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default sysfs location of the wireless phy registry
pub const SYSFS_IEEE80211: &str = "/sys/class/ieee80211";

/// PCI bus-address pattern applied to `driver/` entries.
///
/// The third separator is `.` as a wildcard (any single character, not a
/// literal dot) and there is no end anchor, so trailing characters after the
/// final hex digit are tolerated. Matching must start at the beginning of
/// the entry name.
const PCI_BUS_PATTERN: &str = "^[0-9a-fA-F]+:[0-9a-fA-F]+:[0-9a-fA-F]+.[0-9a-fA-F]";

fn pci_bus_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PCI_BUS_PATTERN).expect("PCI_BUS_PATTERN is valid"))
}

/// One discovered wireless physical radio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadioRecord {
    /// Radio identifier, its directory entry name under the registry
    pub name: String,
    /// Device metadata directory, `<base>/<name>/device`
    pub device_dir: PathBuf,
    /// Network interfaces bound to this radio, in listing order; may be empty
    pub net_ifs: Vec<String>,
    /// First `driver/` entry matching the PCI bus-address pattern, if any
    pub pci_bus: Option<String>,
}

impl RadioRecord {
    fn new(name: &str, base: &Path) -> Self {
        Self {
            name: name.to_string(),
            device_dir: base.join(name).join("device"),
            net_ifs: Vec::new(),
            pci_bus: None,
        }
    }

    /// Interface name shown in the text report: the last entry of `net_ifs`
    /// in listing order, or the empty string when the radio has none.
    ///
    /// A radio with several bound interfaces (e.g. `wlan0` plus a monitor
    /// interface) surfaces only one here; the full list stays in `net_ifs`
    /// and in the JSON output.
    pub fn display_interface(&self) -> &str {
        self.net_ifs.last().map(String::as_str).unwrap_or("")
    }
}

/// Ordered collection of all radios found in one scan
#[derive(Debug)]
pub struct RadioInventory {
    radios: Vec<RadioRecord>,
}

impl RadioInventory {
    /// Scan the default sysfs registry.
    pub fn scan() -> Result<Self> {
        Self::scan_at(Path::new(SYSFS_IEEE80211))
    }

    /// Scan a phy registry rooted at `base`.
    ///
    /// Discovery runs first and in full, then metadata resolution per radio
    /// in discovery order. A registry with zero entries is
    /// [`Error::NoRadiosDetected`]; any unlistable directory is
    /// [`Error::PathUnreadable`] and fails the whole scan.
    pub fn scan_at(base: &Path) -> Result<Self> {
        let mut radios = discover(base)?;
        if radios.is_empty() {
            return Err(Error::NoRadiosDetected);
        }
        for radio in &mut radios {
            resolve(radio)?;
        }
        Ok(Self { radios })
    }

    /// All discovered radios, in discovery order
    pub fn radios(&self) -> &[RadioRecord] {
        &self.radios
    }
}

/// List `base` and build one record per entry. Entry order is whatever the
/// directory enumeration yields; no sort is imposed.
fn discover(base: &Path) -> Result<Vec<RadioRecord>> {
    let names = list_dir(base)?;
    debug!("discovered {} radios under {}", names.len(), base.display());
    Ok(names
        .iter()
        .map(|name| RadioRecord::new(name, base))
        .collect())
}

/// Populate `net_ifs` and `pci_bus` from the radio's device directory.
fn resolve(radio: &mut RadioRecord) -> Result<()> {
    radio.net_ifs = list_dir(&radio.device_dir.join("net"))?;
    let driver_entries = list_dir(&radio.device_dir.join("driver"))?;
    radio.pci_bus = first_pci_match(&driver_entries);
    debug!(
        "{}: {} interface(s), pci bus {:?}",
        radio.name,
        radio.net_ifs.len(),
        radio.pci_bus
    );
    Ok(())
}

/// First entry matching the PCI bus-address pattern, in the order given.
fn first_pci_match(names: &[String]) -> Option<String> {
    let re = pci_bus_regex();
    names.iter().find(|name| re.is_match(name)).cloned()
}

fn list_dir(path: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(path).map_err(|source| Error::PathUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| Error::PathUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}
