// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Exact top-K ranker over a stream of keys.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use crate::ranker::ranked_index::RankedIndex;

#[derive(Debug, Clone, Copy)]
struct Counter {
    count: u64,
    sequence: u64,
}

/// Streaming ranker reporting the keys with the highest occurrence counts.
///
/// See [`crate::ranker`] for the algorithm and its guarantees.
#[derive(Debug, Clone)]
pub struct TopKRanker<K> {
    counts: HashMap<K, Counter>,
    ranked: RankedIndex<K>,
    total_weight: u64,
}

impl<K: Eq + Hash> TopKRanker<K> {
    /// Creates a ranker reporting at most `capacity` keys.
    ///
    /// A capacity of zero is allowed; such a ranker still counts keys but never ranks any.
    pub fn new(capacity: usize) -> Self {
        Self {
            counts: HashMap::new(),
            ranked: RankedIndex::new(capacity),
            total_weight: 0,
        }
    }

    /// Returns the maximum number of ranked keys.
    pub fn capacity(&self) -> usize {
        self.ranked.capacity()
    }

    /// Returns the number of keys currently ranked.
    ///
    /// This is `min(capacity, num_distinct)`.
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    /// Returns true if no key is ranked.
    pub fn is_empty(&self) -> bool {
        self.ranked.len() == 0
    }

    /// Returns the number of distinct keys seen.
    pub fn num_distinct(&self) -> usize {
        self.counts.len()
    }

    /// Returns the number of updates applied.
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Returns the exact number of occurrences of `key`, zero if it was never seen.
    pub fn count<Q>(&self, key: &Q) -> u64
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(key).map_or(0, |counter| counter.count)
    }

    /// Records one occurrence of `key`.
    ///
    /// The key is copied into owned storage only when it is seen for the first time, or when it
    /// enters the ranked index from outside.
    pub fn update<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        self.total_weight += 1;
        let (count, sequence) = match self.counts.get_mut(key) {
            Some(counter) => {
                counter.count += 1;
                (counter.count, counter.sequence)
            }
            None => {
                let sequence = self.counts.len() as u64;
                self.counts.insert(key.to_owned(), Counter { count: 1, sequence });
                (1, sequence)
            }
        };

        if self.ranked.capacity() == 0 {
            return;
        }

        // a ranked key is filed under its previous count and must be relocated
        let stale = self.ranked.remove(count - 1, sequence);
        if !self.ranked.is_full() {
            let key = stale.unwrap_or_else(|| key.to_owned());
            self.ranked.insert(count, sequence, key);
            return;
        }

        match self.ranked.min_count() {
            Some(min_count) if count > min_count => {
                self.ranked.pop_min();
                self.ranked.insert(count, sequence, key.to_owned());
            }
            _ => {}
        }
    }

    /// Calls `f` with every ranked key and its count, highest count first.
    pub fn visit<F>(&self, mut f: F)
    where
        F: FnMut(&K, u64),
    {
        for (key, count) in self.iter() {
            f(key, count);
        }
    }

    /// Iterates ranked keys with their counts, highest count first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, u64)> + ExactSizeIterator {
        self.ranked.iter().rev()
    }

    /// Returns a snapshot of the ranked keys with their counts, highest count first.
    pub fn top(&self) -> Vec<(K, u64)>
    where
        K: Clone,
    {
        self.iter().map(|(key, count)| (key.clone(), count)).collect()
    }

    /// Resets the ranker to an empty state, keeping its capacity.
    pub fn reset(&mut self) {
        self.counts.clear();
        self.ranked.clear();
        self.total_weight = 0;
    }
}
