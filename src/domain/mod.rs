// Domain layer: core models, vocabularies and ports. No external dependencies beyond serde.

pub mod categories;
pub mod model;
pub mod ports;
