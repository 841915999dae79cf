//! Benchmarks for character classification in pencil-core.
//!
//! Run with: `cargo bench -p pencil-core --bench chars`

use divan::{
  Bencher,
  black_box,
};
use pencil_core::chars::{
  CharCategory,
  categorize_char,
  downgrade_case,
  stroke_cost,
};

fn main() {
  divan::main();
}

mod categorize {
  use super::*;

  #[divan::bench]
  fn whitespace(bencher: Bencher) {
    bencher.bench(|| {
      assert_eq!(categorize_char(black_box(' ')), CharCategory::Whitespace);
    });
  }

  #[divan::bench]
  fn capital_ascii(bencher: Bencher) {
    bencher.bench(|| {
      assert_eq!(categorize_char(black_box('Q')), CharCategory::Capital);
    });
  }

  #[divan::bench]
  fn capital_unicode(bencher: Bencher) {
    bencher.bench(|| {
      assert_eq!(categorize_char(black_box('Ж')), CharCategory::Capital);
    });
  }

  #[divan::bench]
  fn glyph(bencher: Bencher) {
    bencher.bench(|| {
      assert_eq!(categorize_char(black_box('q')), CharCategory::Glyph);
    });
  }
}

#[divan::bench]
fn downgrade(bencher: Bencher) {
  bencher.bench(|| downgrade_case(black_box('É')));
}

#[divan::bench]
fn cost_of_sentence(bencher: Bencher) {
  let text = "She sells Sea Shells down by the sea shore.\n";
  bencher.bench(|| {
    black_box(text)
      .chars()
      .map(|ch| stroke_cost(categorize_char(ch)))
      .sum::<u64>()
  });
}
