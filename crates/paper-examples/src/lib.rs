// File: crates/paper-examples/src/lib.rs
// Summary: Bits shared by the example binaries: log setup and output naming.

use std::path::PathBuf;

use anyhow::Result;
use paper_core::{RenderOptions, Sheet};

/// Log to stderr, `warn` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// `target/out/<file_name>`
pub fn out_path(file_name: &str) -> PathBuf {
    PathBuf::from("target/out").join(file_name)
}

/// Render `sheet` into `target/out/<file_name>` and report it on stdout.
pub fn write(sheet: &Sheet, opts: &RenderOptions, file_name: &str) -> Result<()> {
    let out = out_path(file_name);
    sheet.render_to_file(opts, &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
