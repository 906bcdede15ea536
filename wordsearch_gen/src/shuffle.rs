use std::cmp::Reverse;

use itertools::Itertools;
use rand::{seq::SliceRandom, Rng};

use crate::word::Word;

/// Words grouped by clean length, longest bucket first.
#[derive(Clone, Debug)]
pub struct LengthBuckets<'w> {
  buckets: Vec<Vec<&'w Word>>,
}

impl<'w> LengthBuckets<'w> {
  pub fn new(words: &'w [Word]) -> Self {
    let buckets = words
      .iter()
      .into_group_map_by(|word| word.len())
      .into_iter()
      .sorted_by_key(|&(len, _)| Reverse(len))
      .map(|(_, bucket)| bucket)
      .collect();
    Self { buckets }
  }

  /// Permutes each bucket independently and writes the concatenation,
  /// longest words first, into `order`.
  pub fn shuffle_into<R: Rng + ?Sized>(&mut self, rng: &mut R, order: &mut Vec<&'w Word>) {
    order.clear();
    for bucket in self.buckets.iter_mut() {
      bucket.shuffle(rng);
      order.extend(bucket.iter().copied());
    }
  }
}
