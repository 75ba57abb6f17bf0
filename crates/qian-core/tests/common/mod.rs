pub mod slip_dir;
