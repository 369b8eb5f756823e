//! Statistics export

pub mod excel;

pub use excel::export_yearly_costs;
