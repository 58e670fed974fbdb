pub mod calculate_work_units;
pub mod grid_to_complex;
