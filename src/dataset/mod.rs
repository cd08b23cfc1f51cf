pub mod gates;
pub mod records;

pub use gates::GateKind;
pub use records::Dataset;
