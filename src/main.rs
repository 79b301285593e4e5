//! Minimal default binary.
//!
//! The HTTP server lives in `src/bin/api_server.rs`; this entrypoint only
//! points there so `cargo run` without `--bin` does something sensible.

fn main() {
    println!("kasir-api: run the server binary:");
    println!("  cargo run --bin api_server");
}
