pub mod mse;

pub use mse::MseCost;
