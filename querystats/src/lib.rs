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

//! Exact statistics over timestamped query logs.
//!
//! This crate answers two questions about a log of `(timestamp, query)` records, optionally
//! restricted to an inclusive timestamp range:
//!
//! * which `K` queries occurred most often, see [`ranker`];
//! * how many distinct queries occurred, see [`aggregate::DistinctCounter`].
//!
//! Timestamps are non-negative integers of arbitrary precision, see [`timestamp`]. Input parsing
//! lives in [`tsv`] and the single-pass, range-filtered drivers in [`aggregate`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod aggregate;
pub mod error;
pub mod ranker;
pub mod timestamp;
pub mod tsv;
