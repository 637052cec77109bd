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

use std::collections::HashSet;

/// Exact count of distinct queries.
#[derive(Debug, Default, Clone)]
pub struct DistinctCounter {
    queries: HashSet<Vec<u8>>,
}

impl DistinctCounter {
    /// Creates an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `query`, allocating only the first time it is seen.
    pub fn update(&mut self, query: &[u8]) {
        if !self.queries.contains(query) {
            self.queries.insert(query.to_vec());
        }
    }

    /// Returns the number of distinct queries recorded.
    pub fn len(&self) -> usize {
        self.queries.len()
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}
