//! Este modulo contiene el generador de datos semilla tal como lo ejecuta el
//! programa: sin opciones, siempre la misma ruta y la misma cantidad

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::Parser;
use colored::Colorize;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use crate::aliases::IdProducto;
use crate::errores::Error;
use crate::generators::inventario_gen::generar_arch_inventario;
use crate::{CANTIDAD_REGISTROS, RUTA_INVENTARIO};

/// Genera un archivo json de registros de inventario aleatorios para usar
/// como datos semilla. No acepta argumentos: la ruta y la cantidad son fijas
/// y el generador se siembra con entropia del sistema.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Semillero {
    #[arg(skip = PathBuf::from(RUTA_INVENTARIO))]
    salida: PathBuf,

    #[arg(skip = CANTIDAD_REGISTROS)]
    cantidad: IdProducto,

    #[arg(skip)]
    semilla: Option<u64>,
}

impl Semillero {
    /// Crea un semillero con otra ruta, cantidad o semilla. Pensado para usar
    /// el generador desde codigo, el programa siempre usa los valores fijos.
    pub fn new(salida: impl Into<PathBuf>, cantidad: IdProducto, semilla: Option<u64>) -> Self {
        Self {
            salida: salida.into(),
            cantidad,
            semilla,
        }
    }

    /// Ruta del archivo que se va a generar
    pub fn get_salida(&self) -> &Path {
        &self.salida
    }

    fn rng(&self) -> StdRng {
        match self.semilla {
            Some(semilla) => StdRng::seed_from_u64(semilla),
            None => StdRng::from_entropy(),
        }
    }

    /// Genera el archivo tomando `ahora` como referencia e imprime por
    /// pantalla la confirmacion. Devuelve la cantidad de registros escritos.
    pub fn ejecutar_en(&self, ahora: DateTime<Utc>) -> Result<usize, Error> {
        info!(
            salida = %self.salida.display(),
            cantidad = self.cantidad,
            semilla = ?self.semilla,
            "generando inventario"
        );
        let mut rng = self.rng();
        let escritos = generar_arch_inventario(&self.salida, self.cantidad, ahora, &mut rng)?;

        println!(
            "OK: se generaron {} registros de inventario",
            escritos.to_string().blue()
        );
        println!("Archivo: {}", self.salida.display().to_string().blue());
        Ok(escritos)
    }

    /// Genera el archivo con el instante actual como referencia
    pub fn ejecutar(&self) -> Result<usize, Error> {
        self.ejecutar_en(Utc::now())
    }
}

impl Default for Semillero {
    fn default() -> Self {
        Self::new(RUTA_INVENTARIO, CANTIDAD_REGISTROS, None)
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use super::*;
    use crate::errores::ErrorDeEscritura;
    use crate::inventario;

    #[test]
    fn valores_fijos() {
        let semillero = Semillero::try_parse_from(["generators"]).unwrap();

        assert_eq!(semillero.salida, PathBuf::from("seed-data/inventories.json"));
        assert_eq!(semillero.cantidad, 200);
        assert_eq!(semillero.semilla, None);
    }

    #[test]
    fn no_acepta_argumentos() {
        assert!(Semillero::try_parse_from(["generators", "-c", "10"]).is_err());
        assert!(Semillero::try_parse_from(["generators", "--salida", "otro.json"]).is_err());
        assert!(Semillero::try_parse_from(["generators", "--semilla", "4"]).is_err());
        assert!(Semillero::try_parse_from(["generators", "otro.json"]).is_err());
    }

    #[test]
    fn por_defecto_coincide_con_el_programa() {
        let parseado = Semillero::try_parse_from(["generators"]).unwrap();
        let por_defecto = Semillero::default();

        assert_eq!(parseado.salida, por_defecto.salida);
        assert_eq!(parseado.cantidad, por_defecto.cantidad);
        assert_eq!(parseado.semilla, por_defecto.semilla);
    }

    #[test]
    fn misma_semilla_mismo_archivo() {
        let dir = tempfile::tempdir().unwrap();
        let ruta_a = dir.path().join("a.json");
        let ruta_b = dir.path().join("b.json");
        let ahora = Utc::now();

        for ruta in [&ruta_a, &ruta_b] {
            let semillero = Semillero::new(ruta, 20, Some(77));
            assert_eq!(semillero.get_salida(), ruta.as_path());
            assert_eq!(semillero.ejecutar_en(ahora).unwrap(), 20);
        }

        let a = fs::read_to_string(&ruta_a).unwrap();
        let b = fs::read_to_string(&ruta_b).unwrap();
        assert_eq!(a, b);
        assert_eq!(inventario::from_reader(&mut a.as_bytes()).unwrap().len(), 20);
    }

    #[test]
    fn propaga_error_de_escritura() {
        let dir = tempfile::tempdir().unwrap();
        let salida = dir.path().join("no-existe/inventories.json");
        let semillero = Semillero::new(&salida, 1, None);

        match semillero.ejecutar() {
            Err(Error::ErrorDeEscritura(ErrorDeEscritura::Archivo { ruta, fuente })) => {
                assert_eq!(ruta, salida);
                assert_eq!(fuente.kind(), std::io::ErrorKind::NotFound);
            }
            otro => panic!("se esperaba un error de escritura, vino {otro:?}"),
        }
    }

    #[test]
    fn mensaje_de_error_legible() {
        let dir = tempfile::tempdir().unwrap();
        let semillero = Semillero::new(dir.path().join("no-existe/inventories.json"), 1, None);

        let err = semillero.ejecutar().unwrap_err();
        assert!(err.to_string().starts_with("no se pudo escribir el archivo"));
    }
}
