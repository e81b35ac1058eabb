pub mod table;
pub mod annotated;
pub mod noise;

pub use annotated::AnnotatedTable;
pub use noise::{characterize, characterize_with, NoiseCfg, NoiseLevel, NoiseReport, Usability};
pub use table::{build_backward, build_central, build_forward, DifferenceTable, TableKind};
