// Build-Script: Wird vor dem Kompilieren ausgeführt
// Backt optionale Overrides aus .env in das Binary ein

const FORWARDED_VARS: [&str; 4] = [
    "GALILEO_LED_PIN",
    "GALILEO_BLINK_INTERVAL_MS",
    "GALILEO_GPIO_ROOT",
    "GALILEO_DEBUG",
];

fn main() {
    // Lade .env file
    // Fehler ignorieren wenn .env nicht existiert (dann gelten die Defaults aus config.rs)
    // Nur eine tatsächlich gefundene .env wird beobachtet
    match dotenvy::dotenv() {
        Ok(path) => println!("cargo:rerun-if-changed={}", path.display()),
        Err(e) => println!("cargo:warning=.env file nicht gefunden ({}), nutze Defaults", e),
    }

    // Gebe Konfiguration an Rust-Compiler weiter
    // Die Werte werden zur Compile-Zeit in den Code eingebacken
    for var in FORWARDED_VARS {
        println!("cargo:rerun-if-env-changed={}", var);
        if let Ok(value) = std::env::var(var) {
            println!("cargo:rustc-env={}={}", var, value);
        }
    }
}
