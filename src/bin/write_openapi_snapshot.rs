// src/bin/write_openapi_snapshot.rs
use anyhow::Result;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    inkpot::presentation::http::openapi::write_openapi_snapshot()?;
    println!(
        "OpenAPI snapshot written to {}",
        inkpot::presentation::http::openapi::snapshot_path()
    );
    Ok(())
}
