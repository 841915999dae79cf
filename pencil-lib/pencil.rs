//! A pencil writing onto a sheet of paper.
//!
//! The [`Pencil`] owns its paper together with three wear counters:
//!
//! - **point durability** - spent by every visible character written. Capitals
//!   cost [`CAPITAL_COST`], everything else [`GLYPH_COST`], whitespace is free.
//!   A dull point writes [`BLANK`] instead of the glyph.
//! - **length** - how many more times the point can be sharpened back to its
//!   initial durability.
//! - **eraser durability** - spent by every visible character erased. Never
//!   restored.
//!
//! Erasing leaves an edit position behind, pointing at the left-most erased
//! char. A single [`Pencil::edit`] may then write into the gap; any glyph that
//! lands on text that was not erased becomes a [`COLLISION_MARKER`]. Writing
//! forfeits the edit position.
//!
//! All positions are char indices into the paper.
//!
//! ```ignore
//! use pencil_lib::pencil::Pencil;
//!
//! let mut pencil = Pencil::new("An apple a day keeps the doctor away");
//! pencil.erase("apple").edit("artichoke");
//! assert_eq!(pencil.text(), "An artich@k@ay keeps the doctor away");
//! ```

use std::fmt;

use pencil_core::{
  Durability,
  chars::{
    CAPITAL_COST,
    CharCategory,
    GLYPH_COST,
    categorize_char,
    char_is_whitespace,
    downgrade_case,
    stroke_cost,
  },
};
use ropey::Rope;

use crate::config::PencilConfig;

/// Written in place of a glyph by a dull point, and left behind by the eraser.
pub const BLANK: char = ' ';
/// Written by an edit wherever it runs into text that was not erased.
pub const COLLISION_MARKER: char = '@';
/// Eraser units consumed by erasing one visible character.
pub const ERASE_COST: u64 = 1;

#[derive(Debug, Clone, Default)]
pub struct Pencil {
  paper:                Rope,
  point_durability:     Durability,
  max_point_durability: Durability,
  length:               Durability,
  eraser_durability:    Durability,
  edit_position:        Option<usize>,
}

impl Pencil {
  /// A pencil that never dulls, never runs out of length and never wears its
  /// eraser.
  pub fn new(paper: &str) -> Self {
    Self {
      paper: Rope::from(paper),
      ..Self::default()
    }
  }

  pub fn from_config(paper: &str, config: &PencilConfig) -> Self {
    Self {
      paper: Rope::from(paper),
      point_durability: config.point_durability(),
      max_point_durability: config.point_durability(),
      length: config.length(),
      eraser_durability: config.eraser_durability(),
      edit_position: None,
    }
  }

  /// Limit the point. Sharpening restores it to this value.
  pub fn with_point_durability(mut self, durability: u64) -> Self {
    self.point_durability = Durability::Limited(durability);
    self.max_point_durability = self.point_durability;
    self
  }

  pub fn with_length(mut self, length: u64) -> Self {
    self.length = Durability::Limited(length);
    self
  }

  pub fn with_eraser_durability(mut self, durability: u64) -> Self {
    self.eraser_durability = Durability::Limited(durability);
    self
  }

  pub fn paper(&self) -> &Rope {
    &self.paper
  }

  pub fn text(&self) -> String {
    self.paper.to_string()
  }

  pub fn point_durability(&self) -> Durability {
    self.point_durability
  }

  pub fn max_point_durability(&self) -> Durability {
    self.max_point_durability
  }

  pub fn length(&self) -> Durability {
    self.length
  }

  pub fn eraser_durability(&self) -> Durability {
    self.eraser_durability
  }

  /// Start of the most recent erasure, if it can still be edited.
  pub fn edit_position(&self) -> Option<usize> {
    self.edit_position
  }

  /// Append `text` to the paper, wearing the point as it goes.
  pub fn write(&mut self, text: &str) -> &mut Self {
    self.edit_position = None;

    let was_dull = self.point_durability.is_exhausted();
    let rendered: String = text.chars().map(|ch| self.stroke(ch)).collect();
    self.paper.insert(self.paper.len_chars(), &rendered);

    if !was_dull && self.point_durability.is_exhausted() {
      tracing::debug!("pencil point went dull while writing");
    }
    tracing::trace!(
      written = rendered.chars().count(),
      point_durability = %self.point_durability,
      "write"
    );
    self
  }

  /// Restore the point at the cost of one unit of length. Does nothing once
  /// the pencil is too short to sharpen.
  pub fn sharpen(&mut self) -> &mut Self {
    if self.length.is_exhausted() {
      tracing::debug!("pencil is too short to sharpen");
      return self;
    }

    self.length.degrade(1);
    self.point_durability = self.max_point_durability;
    tracing::trace!(
      length = %self.length,
      point_durability = %self.point_durability,
      "sharpen"
    );
    self
  }

  /// Erase the last occurrence of `text`, right to left, until the eraser
  /// wears out.
  pub fn erase(&mut self, text: &str) -> &mut Self {
    if text.is_empty() {
      return self;
    }
    let Some(start) = self.find_last(text) else {
      tracing::debug!(text, "nothing to erase");
      return self;
    };
    let end = start + text.chars().count();

    for pos in (start..end).rev() {
      if self.eraser_durability.is_exhausted() {
        tracing::debug!(stopped_at = pos, "eraser worn out");
        break;
      }
      if !char_is_whitespace(self.paper.char(pos)) {
        self.eraser_durability.degrade(ERASE_COST);
      }
      self.replace_char(pos, BLANK);
      self.edit_position = Some(pos);
    }

    tracing::trace!(
      start,
      end,
      edit_position = ?self.edit_position,
      eraser_durability = %self.eraser_durability,
      "erase"
    );
    self
  }

  /// Write `text` into the gap left by the last erase. The edit position is
  /// consumed whether or not anything was written.
  pub fn edit(&mut self, text: &str) -> &mut Self {
    let Some(start) = self.edit_position.take() else {
      tracing::debug!("no erased text to edit");
      return self;
    };

    let mut collisions = 0usize;
    for (pos, ch) in (start..).zip(text.chars()) {
      if pos >= self.paper.len_chars() {
        let rendered = self.stroke(ch);
        self.paper.insert_char(pos, rendered);
      } else if char_is_whitespace(self.paper.char(pos)) {
        let rendered = self.stroke(ch);
        self.replace_char(pos, rendered);
      } else {
        self.replace_char(pos, COLLISION_MARKER);
        collisions += 1;
      }
    }

    if collisions > 0 {
      tracing::debug!(collisions, "edit collided with existing text");
    }
    tracing::trace!(
      start,
      point_durability = %self.point_durability,
      "edit"
    );
    self
  }

  /// Render a single character with the current point and wear it down.
  fn stroke(&mut self, ch: char) -> char {
    let category = categorize_char(ch);
    let rendered = match category {
      CharCategory::Whitespace => ch,
      _ if self.point_durability.is_exhausted() => BLANK,
      CharCategory::Capital if !self.point_durability.can_afford(CAPITAL_COST) => {
        downgrade_case(ch)
      },
      CharCategory::Capital | CharCategory::Glyph => ch,
    };
    self.point_durability.degrade(stroke_cost(category));
    rendered
  }

  fn find_last(&self, text: &str) -> Option<usize> {
    let haystack = self.paper.to_string();
    haystack
      .rfind(text)
      .map(|byte| self.paper.byte_to_char(byte))
  }

  fn replace_char(&mut self, pos: usize, ch: char) {
    self.paper.remove(pos..pos + 1);
    self.paper.insert_char(pos, ch);
  }
}

impl fmt::Display for Pencil {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.paper)
  }
}
