//! # WiFi Radio Inventory (wmon)
//!
//! A small Linux diagnostic library and CLI that enumerates the wireless
//! physical radios ("phys") exposed under `/sys/class/ieee80211/` and
//! reports, per radio, its PCI bus address and the network interface names
//! bound to it. The intended audience is an operator about to capture
//! wireless traffic who needs to know which interface to hand to the
//! capture tool.
//!
//! ## Quick Start
//!
//! ```no_run
//! use wmon::RadioInventory;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let inventory = RadioInventory::scan()?;
//! for radio in inventory.radios() {
//!     println!(
//!         "{}: bus {}, interfaces {:?}",
//!         radio.name,
//!         radio.pci_bus.as_deref().unwrap_or("none"),
//!         radio.net_ifs
//!     );
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The scan is a one-shot, strictly sequential walk: discovery of every phy
//! first, then metadata resolution per phy, then rendering. Any unreadable
//! sysfs directory fails the whole scan; a readable but empty registry is
//! the distinct [`Error::NoRadiosDetected`] condition.

pub mod error;
pub mod radio;
pub mod report;

pub use error::{Error, Result};
pub use radio::{RadioInventory, RadioRecord, SYSFS_IEEE80211};
