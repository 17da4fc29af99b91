//! Crea el archivo de inventario con datos semilla,
//! `seed-data/inventories.json` con 200 registros.

use std::process::ExitCode;

use clap::Parser;
use semillero::generators::semillero::Semillero;
use tracing::{error, Level};

/// Los logs van a stderr, stdout queda para la confirmacion
fn inicializar_logs() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    inicializar_logs();
    let semillero = Semillero::parse();

    match semillero.ejecutar() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
