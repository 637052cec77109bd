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

//! Reading timestamped query records from tab-separated text.
//!
//! Each input line holds exactly two tab-separated fields:
//!
//! ```text
//! <timestamp><TAB><query>
//! ```
//!
//! Lines are handled as raw bytes; only the timestamp cell must be ASCII digits.
//!
//! [`TsvReader`] splits the input into [`Row`]s, borrowing from a single reused line buffer, and
//! [`Record::from_row`] validates a row into a [`Record`]. Rows with the wrong number of cells or an
//! invalid timestamp produce an [`ErrorKind::InvalidData`](crate::error::ErrorKind::InvalidData)
//! error that only concerns that row.
//!
//! # Examples
//!
//! ```
//! # use querystats::tsv::Record;
//! # use querystats::tsv::TsvReader;
//! let mut reader = TsvReader::new("1\tfoo\n2\tbar\n".as_bytes());
//! let row = reader.next_row().unwrap().unwrap();
//! let record = Record::from_row(&row).unwrap();
//! assert_eq!(record.query(), b"foo");
//! ```

mod reader;
mod record;

pub use self::reader::Row;
pub use self::reader::TsvReader;
pub use self::record::Record;
