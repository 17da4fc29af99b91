//! Este modulo define aliases a los distintos tipos de datos
//! para hacer sencillo el pase de uno al otro y dar mayor
//! claridad al codigo

pub type IdProducto = u32;
pub type CantidadProducto = u32;
pub type DiasAtras = i64;
