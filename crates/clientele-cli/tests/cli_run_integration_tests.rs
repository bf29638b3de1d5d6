//! CLI integration tests
//!
//! Spawns the real binary against a scratch store and checks the printed
//! report listings and failure behavior.

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

const CLIENTS_CSV: &str = "\
Client_ID,Nom,Prénom,Email,Téléphone,Date_Naissance,Adresse,Consentement_Marketing
61,Durand,Claire,claire.durand@example.com,0601020304,1985-04-12,4 rue des Lilas,1
62,Martin,Paul,paul.martin@example.com,0605040302,1990-11-30,12 avenue de la Gare,0
";

const ORDERS_CSV: &str = "\
Commande_ID,Client_ID,Date_Commande,Montant_Commande
1,61,2023-03-10,50.0
2,61,2023-05-17,75.5
3,62,2022-10-01,120.0
";

fn setup_exports(temp_dir: &TempDir) -> (PathBuf, PathBuf, PathBuf) {
    let clients = temp_dir.path().join("clients.csv");
    let orders = temp_dir.path().join("orders.csv");
    let db = temp_dir.path().join("store.db");
    fs::write(&clients, CLIENTS_CSV).unwrap();
    fs::write(&orders, ORDERS_CSV).unwrap();
    (clients, orders, db)
}

#[test]
fn test_cli_run_prints_all_reports() {
    let temp_dir = TempDir::new().unwrap();
    let (clients, orders, db) = setup_exports(&temp_dir);

    let cli_bin = env!("CARGO_BIN_EXE_clientele-cli");
    let output = Command::new(cli_bin)
        .args([
            "run",
            "--profile",
            "external",
            "--db",
            db.to_str().unwrap(),
            "--clients",
            clients.to_str().unwrap(),
            "--orders",
            orders.to_str().unwrap(),
            "--client",
            "61",
        ])
        .output()
        .expect("Failed to execute CLI");

    assert!(
        output.status.success(),
        "CLI run should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Loaded 2 clients and 3 orders"));
    assert!(stdout.contains("Clients with marketing consent:"));
    assert!(stdout.contains("61 Durand Claire <claire.durand@example.com>"));
    // Consent = 0 never appears in the consent listing
    let consent_section = stdout
        .split("Orders for client")
        .next()
        .unwrap_or_default();
    assert!(!consent_section.contains("Martin"));
    assert!(stdout.contains("Total amount for client 61: 125.5"));
    // 62's 120.0 order clears the default threshold; 61's orders do not
    assert!(stdout.contains("Clients with orders over 100:"));
    assert!(stdout.contains("62 Martin Paul"));
    // 62 only ordered in 2022, so the recent listing holds just 61
    assert!(stdout.contains("Clients with orders after 2023-01-01:"));
}

#[test]
fn test_cli_load_then_report() {
    let temp_dir = TempDir::new().unwrap();
    let (clients, orders, db) = setup_exports(&temp_dir);
    let cli_bin = env!("CARGO_BIN_EXE_clientele-cli");

    let load = Command::new(cli_bin)
        .args([
            "load",
            "--profile",
            "external",
            "--db",
            db.to_str().unwrap(),
            "--clients",
            clients.to_str().unwrap(),
            "--orders",
            orders.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute CLI");
    assert!(
        load.status.success(),
        "Stderr: {}",
        String::from_utf8_lossy(&load.stderr)
    );

    let report = Command::new(cli_bin)
        .args(["report", "--db", db.to_str().unwrap(), "--client", "61"])
        .output()
        .expect("Failed to execute CLI");
    assert!(report.status.success());

    let stdout = String::from_utf8_lossy(&report.stdout);
    assert!(stdout.contains("Total amount for client 61: 125.5"));
    assert!(stdout.contains("#1 2023-03-10 50.00"));
}

#[test]
fn test_cli_run_fails_on_malformed_export() {
    let temp_dir = TempDir::new().unwrap();
    let (clients, _, db) = setup_exports(&temp_dir);

    let bad_orders = temp_dir.path().join("bad_orders.csv");
    fs::write(
        &bad_orders,
        "Commande_ID,Client_ID,Date_Commande,Montant_Commande\n1,61,2023-03-10,beaucoup\n",
    )
    .unwrap();

    let cli_bin = env!("CARGO_BIN_EXE_clientele-cli");
    let output = Command::new(cli_bin)
        .args([
            "run",
            "--profile",
            "external",
            "--db",
            db.to_str().unwrap(),
            "--clients",
            clients.to_str().unwrap(),
            "--orders",
            bad_orders.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute CLI");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_COERCION"));
}
