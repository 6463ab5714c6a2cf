pub mod batch;
pub mod command;
pub mod config;
pub mod exec;
pub mod geometry;
pub mod slab;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
