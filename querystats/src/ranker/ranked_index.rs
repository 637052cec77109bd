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

//! Bounded ordered index over `(count, key)` pairs.

use std::collections::BTreeMap;

/// Position of a key in the ranked index.
///
/// The sequence number is unique per key, which makes every position unique even when counts tie.
type Slot = (u64, u64);

/// Ordered index of at most `capacity` ranked keys, smallest count first.
#[derive(Debug, Clone)]
pub(super) struct RankedIndex<K> {
    capacity: usize,
    entries: BTreeMap<Slot, K>,
}

impl<K> RankedIndex<K> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: BTreeMap::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Returns the smallest ranked count, or `None` if the index is empty.
    pub fn min_count(&self) -> Option<u64> {
        self.entries.first_key_value().map(|(&(count, _), _)| count)
    }

    /// Inserts a key at `(count, sequence)`.
    ///
    /// The caller guarantees there is room, either because the index is not full or because it
    /// evicts the minimum right before.
    pub fn insert(&mut self, count: u64, sequence: u64, key: K) {
        debug_assert!(self.entries.len() < self.capacity, "ranked index overflow");
        self.entries.insert((count, sequence), key);
    }

    /// Removes the entry at `(count, sequence)`, returning its key if it was ranked.
    pub fn remove(&mut self, count: u64, sequence: u64) -> Option<K> {
        self.entries.remove(&(count, sequence))
    }

    /// Evicts one entry carrying the smallest count.
    pub fn pop_min(&mut self) -> Option<K> {
        self.entries.pop_first().map(|(_, key)| key)
    }

    /// Iterates ranked keys with their counts, smallest count first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, u64)> + ExactSizeIterator {
        self.entries.iter().map(|(&(count, _), key)| (key, count))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
