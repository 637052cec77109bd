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

//! Arbitrary-precision timestamps.
//!
//! A timestamp is a non-negative integer of any length, kept as its canonical
//! digit string (no leading zeros, except for zero itself which is `"0"`).
//! Comparing two canonical digit strings first by length and then
//! lexicographically is the same as comparing the integers they denote, so no
//! numeric conversion is ever needed and no value can overflow.
//!
//! Parsed timestamps borrow their digits from the input text, which keeps
//! per-record parsing allocation free.
//!
//! # Examples
//!
//! ```
//! # use querystats::timestamp::Timestamp;
//! let a = Timestamp::parse("007").unwrap();
//! let b = Timestamp::parse("10").unwrap();
//! assert!(a < b);
//! assert_eq!(a.to_string(), "7");
//! assert!(b < Timestamp::MAX);
//! ```

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone)]
enum Repr<'a> {
    /// Canonical digit string.
    Finite(Cow<'a, str>),
    /// Larger than every finite timestamp.
    Unbounded,
}

/// A non-negative integer timestamp of arbitrary precision, or the unbounded
/// sentinel [`Timestamp::MAX`].
#[derive(Debug, Clone)]
pub struct Timestamp<'a> {
    repr: Repr<'a>,
}

impl Timestamp<'static> {
    /// The smallest timestamp, zero.
    pub const MIN: Timestamp<'static> = Timestamp {
        repr: Repr::Finite(Cow::Borrowed("0")),
    };

    /// A timestamp greater than every finite timestamp.
    pub const MAX: Timestamp<'static> = Timestamp {
        repr: Repr::Unbounded,
    };
}

impl<'a> Timestamp<'a> {
    /// Parses a timestamp from a string of ASCII digits.
    ///
    /// Leading zeros are stripped; at least one digit is always kept. The
    /// returned timestamp borrows from `text`.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorKind::InvalidData`](crate::error::ErrorKind::InvalidData)
    /// error if `text` is empty or contains anything other than `0`-`9`.
    pub fn parse(text: &'a str) -> Result<Self, Error> {
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::invalid_timestamp(text));
        }
        let start = text
            .bytes()
            .position(|b| b != b'0')
            .unwrap_or(text.len() - 1);
        Ok(Self {
            repr: Repr::Finite(Cow::Borrowed(&text[start..])),
        })
    }

    /// Parses a timestamp from raw bytes, which must all be ASCII digits.
    ///
    /// # Errors
    ///
    /// Same as [`Timestamp::parse`]; the error message shows `bytes` lossily decoded.
    pub fn parse_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        match std::str::from_utf8(bytes) {
            Ok(text) => Self::parse(text),
            Err(_) => Err(Error::invalid_timestamp(&String::from_utf8_lossy(bytes))),
        }
    }

    /// Returns true for the unbounded sentinel.
    pub fn is_unbounded(&self) -> bool {
        matches!(self.repr, Repr::Unbounded)
    }

    /// Returns the canonical digits, or `None` for the unbounded sentinel.
    pub fn digits(&self) -> Option<&str> {
        match &self.repr {
            Repr::Finite(digits) => Some(&**digits),
            Repr::Unbounded => None,
        }
    }

    /// Detaches this timestamp from the text it was parsed from.
    pub fn into_owned(self) -> Timestamp<'static> {
        let repr = match self.repr {
            Repr::Finite(digits) => Repr::Finite(Cow::Owned(digits.into_owned())),
            Repr::Unbounded => Repr::Unbounded,
        };
        Timestamp { repr }
    }
}

impl FromStr for Timestamp<'static> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timestamp::parse(s).map(Timestamp::into_owned)
    }
}

impl Ord for Timestamp<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.repr, &other.repr) {
            (Repr::Unbounded, Repr::Unbounded) => Ordering::Equal,
            (Repr::Unbounded, Repr::Finite(_)) => Ordering::Greater,
            (Repr::Finite(_), Repr::Unbounded) => Ordering::Less,
            // canonical form: shorter means smaller, equal length compares digit by digit
            (Repr::Finite(a), Repr::Finite(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
        }
    }
}

impl PartialOrd for Timestamp<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Timestamp<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Timestamp<'_> {}

impl fmt::Display for Timestamp<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Finite(digits) => f.write_str(digits),
            Repr::Unbounded => f.write_str("infinity"),
        }
    }
}
