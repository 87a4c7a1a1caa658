//! Host-side helper: `cargo run` builds the WASM bundle into `static/pkg` and
//! serves `static/` locally so the background can be viewed in a browser.

use std::process::{Command, Stdio};
use std::{env, thread, time::Duration};

const PORT: &str = "8000";

fn main() {
    // Only meaningful on non-wasm targets.
    if env::var("TARGET").unwrap_or_default() == "wasm32-unknown-unknown" {
        return;
    }

    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack finished with errors. Ensure the wasm32-unknown-unknown target is installed.");
            std::process::exit(1);
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH. Serving whatever is already in static/pkg.");
        }
    }

    println!("Launching local server at http://127.0.0.1:{PORT} …");
    let server = Command::new("python3")
        .args(["-m", "http.server", PORT, "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();
    if let Err(e) = server {
        eprintln!("failed to start http server: {e}");
        std::process::exit(1);
    }

    // Keep process alive
    loop {
        thread::sleep(Duration::from_secs(60));
    }
}
