pub mod force_model;
pub mod simulator;
