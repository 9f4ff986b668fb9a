//! Report rendering for the radio inventory
//!
//! Pure formatting over already-resolved records; the only failure mode is
//! the write itself.

use std::io::{self, Write};

use crate::error::Result;
use crate::radio::RadioRecord;

/// Placeholder printed when no driver entry matched the PCI pattern
const PCI_NOT_FOUND: &str = "NOT FOUND";

/// Write the human-readable inventory: a banner, then one block per radio
/// separated by blank lines.
pub fn render_text(radios: &[RadioRecord], out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Found the following WiFi radios:")?;
    writeln!(out)?;

    for radio in radios {
        let pci_bus = radio.pci_bus.as_deref().unwrap_or(PCI_NOT_FOUND);
        writeln!(out, "Name:                 {}", radio.name)?;
        writeln!(out, "PCI Bus:              {}", pci_bus)?;
        writeln!(out, "Network Interface(s): {}", radio.display_interface())?;
        writeln!(out)?;
    }
    Ok(())
}

/// Write the inventory as pretty-printed JSON. Unlike the text report this
/// carries every bound interface, not just the last one.
pub fn render_json(radios: &[RadioRecord], out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, radios).map_err(io::Error::from)?;
    writeln!(out)?;
    Ok(())
}
