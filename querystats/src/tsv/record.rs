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

use crate::error::Error;
use crate::timestamp::Timestamp;
use crate::tsv::Row;

/// A validated `(timestamp, query)` pair borrowing from its row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    timestamp: Timestamp<'a>,
    query: &'a [u8],
}

impl<'a> Record<'a> {
    /// Validates a row holding exactly a timestamp cell and a query cell.
    ///
    /// The query is kept verbatim as bytes: it may be empty, need not be UTF-8 and is never
    /// normalized.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorKind::InvalidData`](crate::error::ErrorKind::InvalidData) error if the row
    /// does not have exactly two cells or if the first cell is not a valid timestamp.
    pub fn from_row(row: &Row<'a>) -> Result<Self, Error> {
        let mut cells = row.cells();
        let (Some(timestamp), Some(query)) = (cells.next(), cells.next()) else {
            return Err(Error::invalid_record("invalid line: less than 2 columns"));
        };
        if cells.next().is_some() {
            return Err(Error::invalid_record("invalid line: more than 2 columns"));
        }
        let timestamp = Timestamp::parse_bytes(timestamp).map_err(|err| {
            Error::invalid_record(format!("invalid line: {}", err.message()))
        })?;
        Ok(Self { timestamp, query })
    }

    /// Returns the record timestamp.
    pub fn timestamp(&self) -> &Timestamp<'a> {
        &self.timestamp
    }

    /// Returns the raw query bytes.
    pub fn query(&self) -> &'a [u8] {
        self.query
    }
}
