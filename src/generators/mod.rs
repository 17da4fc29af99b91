pub mod inventario_gen;
pub mod semillero;
