//! Este modulo define la estructura de los registros de inventario, que son
//! volcados a los archivos de datos semilla

use std::{fmt, io::Read};

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::aliases::{CantidadProducto, IdProducto};

/// Formato de las fechas en los archivos semilla, siempre en UTC y con
/// precision de segundos
pub const FORMATO_FECHA: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Un registro de inventario esta definido por un id de producto, la cantidad
/// disponible, la cantidad reservada y el momento de su ultima actualizacion.
/// La cantidad reservada nunca supera a la disponible.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RegistroInventario {
    #[serde(rename = "productId")]
    id_producto: IdProducto,
    #[serde(rename = "quantityAvailable")]
    disponible: CantidadProducto,
    #[serde(rename = "quantityReserved")]
    reservado: CantidadProducto,
    #[serde(rename = "updatedAt", with = "formato_fecha")]
    actualizado: DateTime<Utc>,
}

impl RegistroInventario {
    /// Crea un nuevo registro. Quien lo construye es responsable de respetar
    /// que lo reservado no supere a lo disponible.
    pub(crate) fn new(
        id_producto: IdProducto,
        disponible: CantidadProducto,
        reservado: CantidadProducto,
        actualizado: DateTime<Utc>,
    ) -> Self {
        debug_assert!(reservado <= disponible);
        Self {
            id_producto,
            disponible,
            reservado,
            actualizado,
        }
    }

    /// Obtiene el ID del producto
    pub fn get_id(&self) -> IdProducto {
        self.id_producto
    }

    /// Obtiene la cantidad disponible del producto
    pub fn get_disponible(&self) -> CantidadProducto {
        self.disponible
    }

    /// Obtiene la cantidad reservada del producto
    pub fn get_reservado(&self) -> CantidadProducto {
        self.reservado
    }

    /// Obtiene el momento de la ultima actualizacion del registro
    pub fn get_actualizado(&self) -> DateTime<Utc> {
        self.actualizado
    }
}

impl fmt::Display for RegistroInventario {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "producto {} con {} unidades disponibles ",
            self.get_id().to_string().blue(),
            self.get_disponible().to_string().blue()
        )?;
        write!(
            f,
            "y {} reservadas ({})",
            self.get_reservado().to_string().blue(),
            self.get_actualizado().format(FORMATO_FECHA)
        )
    }
}

/// Parsea un lector de bytes (en formato json) en un vector de registros de
/// inventario. Simplemente encapsula las funcionalidades de la libreria de json.
pub fn from_reader(reader: &mut dyn Read) -> serde_json::Result<Vec<RegistroInventario>> {
    serde_json::from_reader(reader)
}

mod formato_fecha {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    use super::FORMATO_FECHA;

    pub fn serialize<S: Serializer>(fecha: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&fecha.format(FORMATO_FECHA))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let texto = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&texto, FORMATO_FECHA)
            .map(|fecha| fecha.and_utc())
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;

    fn registro_ejemplo() -> RegistroInventario {
        let fecha = Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 5).unwrap();
        RegistroInventario::new(7, 120, 33, fecha)
    }

    #[test]
    fn serializa_claves_en_orden() {
        let json = serde_json::to_string(&registro_ejemplo()).unwrap();
        assert_eq!(
            json,
            r#"{"productId":7,"quantityAvailable":120,"quantityReserved":33,"updatedAt":"2024-01-15T08:30:05Z"}"#
        );
    }

    #[test]
    fn lee_archivo_del_seeder() {
        let json = r#"[
  {
    "productId": 1,
    "quantityAvailable": 0,
    "quantityReserved": 0,
    "updatedAt": "2024-01-02T23:59:59Z"
  }
]"#;
        let registros = from_reader(&mut json.as_bytes()).unwrap();

        assert_eq!(registros.len(), 1);
        assert_eq!(registros[0].get_id(), 1);
        assert_eq!(registros[0].get_reservado(), 0);
        assert_eq!(
            registros[0].get_actualizado(),
            Utc.with_ymd_and_hms(2024, 1, 2, 23, 59, 59).unwrap()
        );
    }

    #[test]
    fn se_muestra_legible() {
        colored::control::set_override(false);
        assert_eq!(
            registro_ejemplo().to_string(),
            "producto 7 con 120 unidades disponibles y 33 reservadas (2024-01-15T08:30:05Z)"
        );
    }

    #[test]
    fn rechaza_fecha_sin_zona() {
        let json = r#"[{"productId":1,"quantityAvailable":3,"quantityReserved":1,"updatedAt":"2024-01-02 10:00:00"}]"#;
        assert!(from_reader(&mut json.as_bytes()).is_err());
    }
}
