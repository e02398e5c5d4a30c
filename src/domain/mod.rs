// Domain layer: models and ports (interfaces to the indexer's collaborators).

pub mod model;
pub mod ports;
