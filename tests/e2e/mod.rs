pub mod auto_mode;
pub mod lifecycle;
pub mod scenario_files;
