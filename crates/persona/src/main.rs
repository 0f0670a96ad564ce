#[cfg(feature = "native")]
use clap::Parser;
#[cfg(feature = "native")]
use persona::{cli::Args, init_logging};

#[cfg(feature = "native")]
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir();

    init_logging(&data_dir, &args.log_level)?;

    persona::cli::run(args, &data_dir)?;

    tracing::info!("Persona shutting down");
    Ok(())
}

#[cfg(not(feature = "native"))]
fn main() {
    // Web entry point is handled via wasm_bindgen in lib.rs
    panic!("This binary requires the 'native' feature. For web, use trunk to build the WASM target.");
}
