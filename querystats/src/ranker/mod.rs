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

//! Exact streaming top-K frequency ranking.
//!
//! # Overview
//!
//! [`TopKRanker`] consumes an unbounded sequence of keys and, at any point, can report the `K`
//! keys with the highest occurrence counts seen so far, in descending count order.
//!
//! Unlike the approximate heavy-hitter sketches, the ranker keeps an exact count for every
//! distinct key. What it avoids is sorting that full table: next to the counts it maintains a
//! ranked index holding at most `K` `(count, key)` entries, updated online as counts change.
//!
//! # Algorithm
//!
//! On every update the key's count is incremented. If the key already sits in the ranked index,
//! its entry is relocated under the new count. Otherwise, when the index is full, the key enters
//! only if its new count exceeds the smallest ranked count, which is then evicted.
//!
//! Because counts grow by exactly one per update, a key outside the index can never have a count
//! larger than the smallest ranked count. The index therefore always holds exactly the `K` largest
//! counts among all keys seen.
//!
//! # Complexity
//!
//! The ranked index is an ordered map keyed by `(count, sequence)`, where `sequence` is the order
//! in which the key was first seen. Insertion, removal of a specific entry and minimum lookup are
//! all `O(log K)`, so an update costs one hash lookup plus `O(log K)`. Auxiliary ranking state is
//! `O(K)`; the count table is `O(U)` over `U` distinct keys.
//!
//! # Ties
//!
//! Among keys with equal counts, the earliest seen key is evicted first and, when visiting, later
//! seen keys are yielded first. Callers should not rely on any particular order among ties.
//!
//! # Examples
//!
//! ```
//! # use querystats::ranker::TopKRanker;
//! let mut ranker = TopKRanker::<String>::new(2);
//! for query in ["foo", "bar", "foo", "baz", "foo", "bar"] {
//!     ranker.update(query);
//! }
//! let top: Vec<_> = ranker.iter().map(|(q, c)| (q.as_str(), c)).collect();
//! assert_eq!(top, vec![("foo", 3), ("bar", 2)]);
//! ```

mod ranked_index;
mod top_k;

pub use self::top_k::TopKRanker;
