//! Scenario: config layers reach the CLI
//!
//! GREEN when:
//! - `fares` prints the built-in menu with no config
//! - `--config` replaces the menu and receipt wording
//! - `$BUSTICKET_CONFIG` is used when `--config` is absent
//! - `--strict-config` rejects unknown keys; the default only warns

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn busticket() -> Command {
    let mut cmd = Command::cargo_bin("busticket").expect("binary builds");
    cmd.env_remove("BUSTICKET_CONFIG").env("RUST_LOG", "off");
    cmd
}

fn yaml_file(contents: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f
}

const SITE_YAML: &str = "\
fares:
  - destination: Lipa
    fare: \"45.50\"
  - destination: Tanauan
    fare: 60
receipt:
  footer: Ingat po!
";

#[test]
fn builtin_menu_without_config() {
    busticket()
        .arg("fares")
        .assert()
        .success()
        .stdout("Candelaria - ₱100\nSan Juan - ₱85\nRosario - ₱70\nIbaan - ₱55\nBalagtas - ₱40\n");
}

#[test]
fn config_flag_replaces_menu_and_footer() {
    let site = yaml_file(SITE_YAML);
    busticket()
        .arg("--config")
        .arg(site.path())
        .arg("fares")
        .assert()
        .success()
        .stdout("Lipa - ₱45.50\nTanauan - ₱60\n");

    busticket()
        .arg("--config")
        .arg(site.path())
        .arg("console")
        .write_stdin("sell Ana 30 Lipa 50\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Change: ₱4.50"))
        .stdout(predicate::str::contains("Ingat po!"));
}

#[test]
fn env_var_supplies_config_paths() {
    let site = yaml_file(SITE_YAML);
    busticket()
        .env("BUSTICKET_CONFIG", site.path())
        .arg("fares")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Lipa"));
}

#[test]
fn strict_config_rejects_unknown_keys() {
    let typo = yaml_file("reciept:\n  title: X\n");
    busticket()
        .arg("--config")
        .arg(typo.path())
        .arg("fares")
        .assert()
        .success();

    busticket()
        .arg("--strict-config")
        .arg("--config")
        .arg(typo.path())
        .arg("fares")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CONFIG_UNUSED_KEYS"));
}

#[test]
fn config_hash_is_printed() {
    busticket()
        .arg("config-hash")
        .assert()
        .success()
        .stdout(predicate::str::is_match("^config_hash=[0-9a-f]{64}\n\\{\\}\n$").unwrap());
}
