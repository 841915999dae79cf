pub mod chars;
pub mod durability;

pub use durability::Durability;
