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

use std::io::BufRead;

use crate::aggregate::DistinctCounter;
use crate::aggregate::TimestampRange;
use crate::error::Error;
use crate::ranker::TopKRanker;
use crate::tsv::Record;
use crate::tsv::TsvReader;

/// Counters describing one pass over the input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Lines read.
    pub rows: u64,
    /// Lines skipped because they were malformed.
    pub skipped: u64,
    /// Valid records whose timestamp fell within the range.
    pub matched: u64,
}

/// Reads every record from `input` and calls `f` with the query of each record within `range`.
///
/// Malformed lines are logged at warning level and skipped.
///
/// # Errors
///
/// Returns an [`ErrorKind::Io`](crate::error::ErrorKind::Io) error if `input` cannot be read.
/// Queries already passed to `f` stay delivered.
pub fn for_each_query<R, F>(input: R, range: &TimestampRange, mut f: F) -> Result<Summary, Error>
where
    R: BufRead,
    F: FnMut(&[u8]),
{
    let mut reader = TsvReader::new(input);
    let mut summary = Summary::default();
    while let Some(row) = reader.next_row()? {
        summary.rows += 1;

        let record = match Record::from_row(&row) {
            Ok(record) => record,
            Err(err) => {
                summary.skipped += 1;
                tracing::warn!(
                    line = row.line_number(),
                    text = ?String::from_utf8_lossy(row.text()),
                    "{err}"
                );
                continue;
            }
        };
        if range.contains(record.timestamp()) {
            summary.matched += 1;
            f(record.query());
        }
    }

    tracing::debug!(
        rows = summary.rows,
        skipped = summary.skipped,
        matched = summary.matched,
        start = %range.start(),
        end = %range.end(),
        "finished reading query log"
    );
    Ok(summary)
}

/// Returns the `n` most frequent queries within `range` as raw bytes, highest count first.
///
/// When `n` is zero the input is not read and an empty result is returned.
pub fn top_queries<R: BufRead>(
    input: R,
    range: &TimestampRange,
    n: usize,
) -> Result<(Vec<(Vec<u8>, u64)>, Summary), Error> {
    if n == 0 {
        return Ok((Vec::new(), Summary::default()));
    }
    let mut ranker = TopKRanker::<Vec<u8>>::new(n);
    let summary = for_each_query(input, range, |query| ranker.update(query))?;
    tracing::debug!(
        distinct = ranker.num_distinct(),
        ranked = ranker.len(),
        "ranked queries"
    );
    Ok((ranker.top(), summary))
}

/// Returns the number of distinct queries within `range`.
pub fn distinct_queries<R: BufRead>(
    input: R,
    range: &TimestampRange,
) -> Result<(usize, Summary), Error> {
    let mut counter = DistinctCounter::new();
    let summary = for_each_query(input, range, |query| counter.update(query))?;
    Ok((counter.len(), summary))
}
