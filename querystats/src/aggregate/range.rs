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

/// Inclusive timestamp range `[start, end]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampRange {
    start: Timestamp<'static>,
    end: Timestamp<'static>,
}

impl TimestampRange {
    /// Creates a range from `start` to `end`, both included.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument) error
    /// if `start` is greater than `end`.
    pub fn new(start: Timestamp<'static>, end: Timestamp<'static>) -> Result<Self, Error> {
        if start > end {
            return Err(Error::invalid_argument(format!(
                "start timestamp {start} is greater than end timestamp {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Creates the range covering every timestamp, `[MIN, MAX]`.
    pub fn unbounded() -> Self {
        Self {
            start: Timestamp::MIN,
            end: Timestamp::MAX,
        }
    }

    /// Returns the lower bound.
    pub fn start(&self) -> &Timestamp<'static> {
        &self.start
    }

    /// Returns the upper bound.
    pub fn end(&self) -> &Timestamp<'static> {
        &self.end
    }

    /// Returns true if `timestamp` lies within the range, bounds included.
    pub fn contains(&self, timestamp: &Timestamp<'_>) -> bool {
        self.start <= *timestamp && *timestamp <= self.end
    }
}

impl Default for TimestampRange {
    fn default() -> Self {
        Self::unbounded()
    }
}
