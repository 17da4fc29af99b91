//! Este modulo define tipos de errores que pueden darse en
//! la ejecucion

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Enumerativo que engloba a todos los tipos de errores posibles desde
/// todos los modulos
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    ErrorDeEscritura(#[from] ErrorDeEscritura),
}

/// Enumerativo que define los errores que pueden darse al volcar
/// los registros generados a disco
#[derive(Debug, Error)]
pub enum ErrorDeEscritura {
    #[error("no se pudo escribir el archivo {}: {fuente}", ruta.display())]
    Archivo {
        ruta: PathBuf,
        #[source]
        fuente: io::Error,
    },
    #[error("no se pudo serializar el inventario en {}: {fuente}", ruta.display())]
    Serializacion {
        ruta: PathBuf,
        #[source]
        fuente: serde_json::Error,
    },
}
