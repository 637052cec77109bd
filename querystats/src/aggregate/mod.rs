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

//! Range-filtered aggregation over query logs.
//!
//! A single pass reads `(timestamp, query)` records, keeps those whose timestamp lies in an
//! inclusive [`TimestampRange`], and feeds their queries either to a
//! [`TopKRanker`](crate::ranker::TopKRanker) or to a [`DistinctCounter`].
//!
//! Queries are opaque byte strings; they are compared exactly and never decoded.
//!
//! Malformed records are logged as warnings and skipped; they never abort a run. Failing to read
//! the input does.
//!
//! # Examples
//!
//! ```
//! # use querystats::aggregate::TimestampRange;
//! # use querystats::aggregate::distinct_queries;
//! # use querystats::aggregate::top_queries;
//! let log = "1\tfoo\n2\tbar\n3\tfoo\n4\tfoo\n";
//! let range = TimestampRange::unbounded();
//!
//! let (top, _) = top_queries(log.as_bytes(), &range, 2).unwrap();
//! assert_eq!(top, vec![(b"foo".to_vec(), 3), (b"bar".to_vec(), 1)]);
//!
//! let (distinct, _) = distinct_queries(log.as_bytes(), &range).unwrap();
//! assert_eq!(distinct, 2);
//! ```

mod distinct;
mod range;
mod scan;

pub use self::distinct::DistinctCounter;
pub use self::range::TimestampRange;
pub use self::scan::Summary;
pub use self::scan::distinct_queries;
pub use self::scan::for_each_query;
pub use self::scan::top_queries;
