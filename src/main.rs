//! Host-side helper: `cargo run` bundles the page script with wasm-pack and
//! serves `static/` locally for previewing the portfolio.
//!
//! `PORTFOLIO_PORT` overrides the port (default 8000); `--no-build` serves
//! whatever bundle is already in `static/pkg`.

use std::process::{Command, ExitCode, Stdio};
use std::{env, io};

const DEFAULT_PORT: u16 = 8000;

fn build_bundle() -> Result<(), String> {
    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
    {
        Ok(st) if st.success() => Ok(()),
        Ok(st) => Err(format!(
            "wasm-pack finished with {st}. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/)."
        )),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            eprintln!("wasm-pack not found in PATH. Serving the existing bundle, which may be stale.");
            Ok(())
        }
        Err(e) => Err(format!("running wasm-pack: {e}")),
    }
}

fn port() -> u16 {
    match env::var("PORTFOLIO_PORT") {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("ignoring PORTFOLIO_PORT={raw:?}, using {DEFAULT_PORT}");
            DEFAULT_PORT
        }),
        Err(_) => DEFAULT_PORT,
    }
}

fn main() -> ExitCode {
    let skip_build = env::args().skip(1).any(|a| a == "--no-build");
    if !skip_build {
        if let Err(msg) = build_bundle() {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    }

    let port = port();
    println!("Serving static/ at http://127.0.0.1:{port} …");
    let server = Command::new("python3")
        .args(["-m", "http.server", &port.to_string(), "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .status();

    match server {
        Ok(st) if st.success() => ExitCode::SUCCESS,
        Ok(st) => {
            eprintln!("http server exited with {st}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("failed to start http server: {e}");
            ExitCode::FAILURE
        }
    }
}
