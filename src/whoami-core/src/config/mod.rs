pub mod directories;
pub mod model;
