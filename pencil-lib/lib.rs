pub mod config;
pub mod pencil;

pub use config::PencilConfig;
pub use pencil::Pencil;
