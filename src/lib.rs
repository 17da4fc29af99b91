pub mod aliases;
pub mod errores;
pub mod generators;
pub mod inventario;

use aliases::IdProducto;

/// Cantidad de registros de inventario a generar
pub const CANTIDAD_REGISTROS: IdProducto = 200;

/// Archivo donde se vuelcan los datos semilla de inventario
pub const RUTA_INVENTARIO: &str = "seed-data/inventories.json";
