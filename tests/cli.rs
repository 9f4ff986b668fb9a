//! End-to-end tests for the wmon binary against fixture sysfs trees.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn wmon() -> Command {
    Command::cargo_bin("wmon").unwrap()
}

/// Lay out `<base>/<phy>/device/{net,driver}` with the given entries.
fn add_phy(base: &Path, phy: &str, net_ifs: &[&str], driver_entries: &[&str]) {
    let device = base.join(phy).join("device");
    fs::create_dir_all(device.join("net")).unwrap();
    fs::create_dir_all(device.join("driver")).unwrap();
    for net_if in net_ifs {
        fs::create_dir(device.join("net").join(net_if)).unwrap();
    }
    for entry in driver_entries {
        fs::File::create(device.join("driver").join(entry)).unwrap();
    }
}

#[test]
fn two_radio_fixture_prints_both_blocks() {
    let tmp = TempDir::new().unwrap();
    add_phy(tmp.path(), "phy0", &["wlan0"], &["0000:03:00.0", "uevent"]);
    add_phy(tmp.path(), "phy1", &[], &["uevent"]);

    // discovery order is directory-enumeration order, so assert per-block
    // content rather than block order
    wmon()
        .arg("--sysfs-root")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Found the following WiFi radios:\n\n",
        ))
        .stdout(predicate::str::contains(
            "Name:                 phy0\n\
             PCI Bus:              0000:03:00.0\n\
             Network Interface(s): wlan0\n\
             \n",
        ))
        .stdout(predicate::str::contains(
            "Name:                 phy1\n\
             PCI Bus:              NOT FOUND\n\
             Network Interface(s): \n\
             \n",
        ));
}

#[test]
fn single_radio_output_is_exact() {
    let tmp = TempDir::new().unwrap();
    add_phy(tmp.path(), "phy0", &["wlan0"], &["0000:03:00.0"]);

    wmon()
        .arg("--sysfs-root")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(
            "Found the following WiFi radios:\n\
             \n\
             Name:                 phy0\n\
             PCI Bus:              0000:03:00.0\n\
             Network Interface(s): wlan0\n\
             \n",
        );
}

#[test]
fn empty_registry_exits_one_with_stderr_message() {
    let tmp = TempDir::new().unwrap();

    wmon()
        .arg("--sysfs-root")
        .arg(tmp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No WiFi radios detected"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn missing_registry_reports_path_and_exits_two() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("ieee80211");

    wmon()
        .arg("--sysfs-root")
        .arg(&missing)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Failed to read"))
        .stderr(predicate::str::contains("ieee80211"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn unreadable_net_dir_names_the_offending_path() {
    let tmp = TempDir::new().unwrap();
    let device = tmp.path().join("phy0").join("device");
    fs::create_dir_all(device.join("driver")).unwrap();
    // no net/ directory

    wmon()
        .arg("--sysfs-root")
        .arg(tmp.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("phy0"))
        .stderr(predicate::str::contains("net"));
}

#[test]
fn json_format_is_machine_readable() {
    let tmp = TempDir::new().unwrap();
    add_phy(tmp.path(), "phy0", &["wlan0"], &["0000:03:00.0"]);

    let assert = wmon()
        .args(["--format", "json"])
        .arg("--sysfs-root")
        .arg(tmp.path())
        .assert()
        .success();

    let radios: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(radios[0]["name"], "phy0");
    assert_eq!(radios[0]["pci_bus"], "0000:03:00.0");
    assert_eq!(radios[0]["net_ifs"][0], "wlan0");
}
