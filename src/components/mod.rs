pub mod header;
pub mod liquid_filter;

pub use header::Header;
pub use liquid_filter::LiquidDisplacementFilter;
