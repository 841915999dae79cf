/// How a single character is treated by the point of a pencil.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CharCategory {
  /// Blank space. Written verbatim and never wears the point or eraser.
  Whitespace,
  /// Uppercase letter. Costs a double stroke.
  Capital,
  /// Any other visible character.
  Glyph,
}

/// Point units consumed by a capital letter.
pub const CAPITAL_COST: u64 = 2;
/// Point units consumed by any other visible character.
pub const GLYPH_COST: u64 = 1;

pub fn categorize_char(ch: char) -> CharCategory {
  match ch {
    c if char_is_whitespace(c) => CharCategory::Whitespace,
    c if char_is_capital(c) => CharCategory::Capital,
    _ => CharCategory::Glyph,
  }
}

#[inline]
pub fn char_is_whitespace(ch: char) -> bool {
  matches!(
    ch,
    '\u{0020}' | // Space
    '\u{0009}' | // Character Tabulation
    '\u{000A}' | // Line Feed
    '\u{000D}'   // Carriage Return
  )
}

#[inline]
pub fn char_is_capital(ch: char) -> bool {
  ch.is_uppercase()
}

/// Lowercase form of `ch`, limited to a single char so that a downgraded
/// glyph occupies exactly one position on the paper. Characters whose
/// lowercase mapping is empty are returned unchanged.
#[inline]
pub fn downgrade_case(ch: char) -> char {
  ch.to_lowercase().next().unwrap_or(ch)
}

#[inline]
pub const fn stroke_cost(category: CharCategory) -> u64 {
  match category {
    CharCategory::Whitespace => 0,
    CharCategory::Capital => CAPITAL_COST,
    CharCategory::Glyph => GLYPH_COST,
  }
}
