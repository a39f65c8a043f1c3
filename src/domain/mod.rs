// Domain layer: candidate models and ports. No dependencies beyond std and serde.

pub mod model;
pub mod ports;
