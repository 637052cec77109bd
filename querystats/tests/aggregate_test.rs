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

use std::io;
use std::io::BufReader;
use std::io::Read;

use googletest::prelude::*;
use querystats::aggregate::DistinctCounter;
use querystats::aggregate::Summary;
use querystats::aggregate::TimestampRange;
use querystats::aggregate::distinct_queries;
use querystats::aggregate::for_each_query;
use querystats::aggregate::top_queries;
use querystats::error::ErrorKind;
use querystats::timestamp::Timestamp;

const LOG: &str = "1\tfoo\n2\tbar\n3\tfoo\n4\tfoo\n";

fn range(start: &str, end: &str) -> TimestampRange {
    TimestampRange::new(start.parse().unwrap(), end.parse().unwrap()).unwrap()
}

fn top(input: &str, range: &TimestampRange, n: usize) -> Vec<(String, u64)> {
    let (rows, _) = top_queries(input.as_bytes(), range, n).unwrap();
    rows.into_iter()
        .map(|(query, count)| (String::from_utf8(query).unwrap(), count))
        .collect()
}

fn distinct(input: &str, range: &TimestampRange) -> usize {
    distinct_queries(input.as_bytes(), range).unwrap().0
}

#[test]
fn test_end_to_end() {
    let all = TimestampRange::unbounded();
    assert_eq!(top(LOG, &all, 1), vec![("foo".to_string(), 3)]);
    assert_eq!(
        top(LOG, &all, 2),
        vec![("foo".to_string(), 3), ("bar".to_string(), 1)]
    );
    assert_eq!(top(LOG, &all, 5).len(), 2);
    assert_eq!(distinct(LOG, &all), 2);
}

#[test]
fn test_top_zero_reads_nothing() {
    let (rows, summary) = top_queries(LOG.as_bytes(), &TimestampRange::default(), 0).unwrap();
    assert!(rows.is_empty());
    assert_eq!(summary, Summary::default());
}

#[test]
fn test_malformed_rows_are_skipped() {
    let input = "1\tfoo\n2\tfoo\tbar\nabc\tbaz\nno tab here\n";
    let (rows, summary) = top_queries(input.as_bytes(), &TimestampRange::unbounded(), 3).unwrap();
    assert_eq!(rows, vec![(b"foo".to_vec(), 1)]);
    assert_that!(summary.rows, eq(4u64));
    assert_that!(summary.skipped, eq(3u64));
    assert_that!(summary.matched, eq(1u64));

    let (count, _) = distinct_queries(input.as_bytes(), &TimestampRange::unbounded()).unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_non_utf8_queries_are_counted() {
    let input: &[u8] = b"1\tcaf\xe9\n2\tcaf\xe9\n3\tfoo\n";
    let all = TimestampRange::unbounded();

    let (count, summary) = distinct_queries(input, &all).unwrap();
    assert_eq!(count, 2);
    assert_eq!(
        summary,
        Summary {
            rows: 3,
            skipped: 0,
            matched: 3
        }
    );

    let (rows, _) = top_queries(input, &all, 2).unwrap();
    assert_eq!(rows, vec![(b"caf\xe9".to_vec(), 2), (b"foo".to_vec(), 1)]);

    // distinct byte sequences stay distinct even when they decode to the same lossy text
    let (count, _) = distinct_queries(&b"1\t\xff\n2\t\xfe\n"[..], &all).unwrap();
    assert_eq!(count, 2);
}

#[test]
fn test_range_bounds_are_inclusive() {
    assert_eq!(distinct(LOG, &range("2", "3")), 2);
    assert_eq!(top(LOG, &range("2", "3"), 2).len(), 2);
    assert_eq!(top(LOG, &range("3", "4"), 5), vec![("foo".to_string(), 2)]);
    assert_eq!(distinct(LOG, &range("2", "2")), 1);
    assert_eq!(distinct(LOG, &range("5", "10")), 0);
    assert_eq!(distinct(LOG, &range("0", "0")), 0);

    // bounds compare by value, not by text
    assert_eq!(distinct(LOG, &range("0002", "03")), 2);
    assert_eq!(distinct("10\tx\n9\ty\n", &range("9", "9")), 1);
}

#[test]
fn test_range() {
    let full = TimestampRange::unbounded();
    assert_eq!(*full.start(), Timestamp::MIN);
    assert_eq!(*full.end(), Timestamp::MAX);
    assert_eq!(full, TimestampRange::default());
    assert!(full.contains(&Timestamp::parse(&"9".repeat(500)).unwrap()));

    let open_ended = TimestampRange::new("5".parse().unwrap(), Timestamp::MAX).unwrap();
    assert!(!open_ended.contains(&Timestamp::parse("4").unwrap()));
    assert!(open_ended.contains(&Timestamp::parse("5").unwrap()));
    assert!(open_ended.contains(&Timestamp::parse("123456789012345678901234").unwrap()));

    let err = TimestampRange::new("10".parse().unwrap(), "9".parse().unwrap()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(!err.is_record_level());
    assert_eq!(
        err.message(),
        "start timestamp 10 is greater than end timestamp 9"
    );

    let err = TimestampRange::new(Timestamp::MAX, Timestamp::MIN).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_for_each_query_order() {
    let mut seen = Vec::new();
    let summary = for_each_query(LOG.as_bytes(), &range("2", "4"), |query| {
        seen.push(String::from_utf8_lossy(query).into_owned())
    })
    .unwrap();
    assert_eq!(seen, vec!["bar", "foo", "foo"]);
    assert_eq!(
        summary,
        Summary {
            rows: 4,
            skipped: 0,
            matched: 3
        }
    );
}

struct FailingReader {
    remaining: &'static [u8],
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.remaining.is_empty() {
            return Err(io::Error::other("disk on fire"));
        }
        let n = buf.len().min(self.remaining.len());
        buf[..n].copy_from_slice(&self.remaining[..n]);
        self.remaining = &self.remaining[n..];
        Ok(n)
    }
}

#[test]
fn test_read_failure_aborts() {
    let input = BufReader::new(FailingReader {
        remaining: b"1\tfoo\n",
    });
    let mut seen = 0;
    let err = for_each_query(input, &TimestampRange::unbounded(), |_| seen += 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(!err.is_record_level());
    assert!(err.to_string().contains("disk on fire"), "{err}");
    assert_eq!(seen, 1);
}

#[test]
fn test_distinct_counter() {
    let mut counter = DistinctCounter::new();
    assert!(counter.is_empty());
    for query in ["a", "b", "a", "A", "a ", ""] {
        counter.update(query.as_bytes());
    }
    assert_eq!(counter.len(), 5);
    assert!(!counter.is_empty());
}
