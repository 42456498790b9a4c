use std::env;

fn main() {
    // Read store geometry from environment variables (optional)
    // These select the EEPROM end address for both EEPROM backends

    // Last valid EEPROM address (decimal or 0x-prefixed hex)
    if let Ok(e2end) = env::var("STORE_E2END") {
        println!("cargo:rustc-env=STORE_E2END={}", e2end);
        println!("cargo:warning=Using STORE_E2END from environment: {}", e2end);
    } else {
        println!("cargo:rustc-env=STORE_E2END=4095");
    }

    // Rerun if environment variables change
    println!("cargo:rerun-if-env-changed=STORE_E2END");
}
