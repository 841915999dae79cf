//! Resource limits for a [`Pencil`](crate::pencil::Pencil), readable from
//! TOML.
//!
//! Every key is optional; a missing key means the resource never wears out.
//!
//! ```toml
//! point-durability  = 40000
//! length            = 10
//! eraser-durability = 500
//! ```

use pencil_core::Durability;
use serde::{
  Deserialize,
  Serialize,
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("invalid pencil config: {0}")]
  Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct PencilConfig {
  pub point_durability:  Option<u64>,
  pub length:            Option<u64>,
  pub eraser_durability: Option<u64>,
}

impl PencilConfig {
  pub fn from_toml(source: &str) -> Result<Self> {
    let config = toml::from_str(source)?;
    tracing::trace!(?config, "parsed pencil config");
    Ok(config)
  }

  pub fn point_durability(&self) -> Durability {
    self.point_durability.into()
  }

  pub fn length(&self) -> Durability {
    self.length.into()
  }

  pub fn eraser_durability(&self) -> Durability {
    self.eraser_durability.into()
  }
}
