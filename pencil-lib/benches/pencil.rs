//! Benchmarks for the pencil's write/erase/edit cycle.
//!
//! Run with: `cargo bench -p pencil-lib --bench pencil`

use divan::{
  Bencher,
  black_box,
};
use pencil_lib::Pencil;

fn main() {
  divan::main();
}

const LINE: &str = "How much Wood would a Woodchuck chuck if a woodchuck could chuck wood?\n";

#[divan::bench(args = [1, 100, 1000])]
fn write_unlimited(bencher: Bencher, lines: usize) {
  let text = LINE.repeat(lines);
  bencher.bench(|| {
    let mut pencil = Pencil::new("");
    pencil.write(black_box(&text));
    pencil
  });
}

#[divan::bench(args = [1, 100, 1000])]
fn write_until_dull(bencher: Bencher, lines: usize) {
  let text = LINE.repeat(lines);
  bencher.bench(|| {
    let mut pencil = Pencil::new("").with_point_durability(500);
    pencil.write(black_box(&text));
    pencil
  });
}

#[divan::bench(args = [1, 100, 1000])]
fn erase_and_edit(bencher: Bencher, lines: usize) {
  let paper = LINE.repeat(lines);
  bencher.bench(|| {
    let mut pencil = Pencil::new(&paper);
    pencil.erase(black_box("woodchuck")).edit(black_box("groundhog"));
    pencil
  });
}
