//! Este modulo permite generar archivos de inventario aleatorios para usar
//! como datos semilla. Los archivos generados son en formato json, con una
//! lista de registros ordenada por id de producto, donde lo reservado de
//! cada producto nunca supera a lo disponible.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use chrono::{DateTime, Duration, SubsecRound, Utc};
use rand::Rng;
use tracing::debug;

use crate::aliases::{CantidadProducto, DiasAtras, IdProducto};
use crate::errores::ErrorDeEscritura;
use crate::inventario::RegistroInventario;

/// Maxima cantidad disponible de un producto
pub const MAX_DISPONIBLE: CantidadProducto = 500;

/// Tope de unidades reservadas, independientemente de lo disponible
pub const MAX_RESERVADO: CantidadProducto = 50;

/// Rango de dias hacia atras en que pudo actualizarse un registro
pub const DIAS_ATRAS_MIN: DiasAtras = 1;
pub const DIAS_ATRAS_MAX: DiasAtras = 30;

/// Sortea la cantidad reservada para un producto, entre cero y el menor
/// entre el tope de reservas y lo disponible
fn sortear_reservado<R: Rng + ?Sized>(disponible: CantidadProducto, rng: &mut R) -> CantidadProducto {
    rng.gen_range(0..=MAX_RESERVADO.min(disponible))
}

/// Arma un registro a partir de una cantidad disponible y una antiguedad ya
/// decididas, sorteando solo lo reservado
pub(crate) fn registro_con_disponible<R: Rng + ?Sized>(
    id: IdProducto,
    disponible: CantidadProducto,
    dias_atras: DiasAtras,
    ahora: DateTime<Utc>,
    rng: &mut R,
) -> RegistroInventario {
    let actualizado = ahora.trunc_subsecs(0) - Duration::days(dias_atras);
    let reservado = sortear_reservado(disponible, rng);
    RegistroInventario::new(id, disponible, reservado, actualizado)
}

/// Genera un registro de inventario aleatorio para el producto dado, tomando
/// `ahora` como referencia para la fecha de actualizacion
pub fn generar_registro<R: Rng + ?Sized>(
    id: IdProducto,
    ahora: DateTime<Utc>,
    rng: &mut R,
) -> RegistroInventario {
    let dias_atras = rng.gen_range(DIAS_ATRAS_MIN..=DIAS_ATRAS_MAX);
    let disponible = rng.gen_range(0..=MAX_DISPONIBLE);
    registro_con_disponible(id, disponible, dias_atras, ahora, rng)
}

/// Genera `cantidad` registros con ids consecutivos desde 1
pub fn generar_registros<R: Rng + ?Sized>(
    cantidad: IdProducto,
    ahora: DateTime<Utc>,
    rng: &mut R,
) -> Vec<RegistroInventario> {
    (1..=cantidad)
        .map(|id| generar_registro(id, ahora, rng))
        .collect()
}

/// A partir de una ruta de archivo, una cantidad de registros y un instante de
/// referencia genera un archivo de inventario, pisando el contenido previo.
/// El directorio debe existir. Devuelve la cantidad de registros escritos.
pub fn generar_arch_inventario<P: AsRef<Path>, R: Rng + ?Sized>(
    ruta: P,
    cantidad: IdProducto,
    ahora: DateTime<Utc>,
    rng: &mut R,
) -> Result<usize, ErrorDeEscritura> {
    let ruta = ruta.as_ref();
    let registros = generar_registros(cantidad, ahora, rng);
    debug!(cantidad = registros.len(), "registros generados");

    let error_archivo = |fuente: io::Error| ErrorDeEscritura::Archivo {
        ruta: ruta.to_path_buf(),
        fuente,
    };

    let file = File::create(ruta).map_err(error_archivo)?;
    let mut escritor = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut escritor, &registros).map_err(|fuente| {
        if fuente.is_io() {
            error_archivo(fuente.into())
        } else {
            ErrorDeEscritura::Serializacion {
                ruta: ruta.to_path_buf(),
                fuente,
            }
        }
    })?;
    escritor.flush().map_err(error_archivo)?;

    debug!(ruta = %ruta.display(), "archivo de inventario escrito");
    Ok(registros.len())
}
