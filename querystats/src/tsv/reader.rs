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

use crate::error::Error;

const DEFAULT_DELIMITER: u8 = b'\t';

/// Line-oriented reader splitting delimited text into rows of cells.
#[derive(Debug)]
pub struct TsvReader<R> {
    input: R,
    delimiter: u8,
    line: Vec<u8>,
    line_number: u64,
}

impl<R: BufRead> TsvReader<R> {
    /// Creates a reader splitting cells on tabs.
    pub fn new(input: R) -> Self {
        Self::with_delimiter(input, DEFAULT_DELIMITER)
    }

    /// Creates a reader splitting cells on `delimiter`.
    pub fn with_delimiter(input: R, delimiter: u8) -> Self {
        Self {
            input,
            delimiter,
            line: Vec::new(),
            line_number: 0,
        }
    }

    /// Returns the number of lines read so far.
    pub fn line_number(&self) -> u64 {
        self.line_number
    }

    /// Reads the next row, or returns `Ok(None)` at the end of input.
    ///
    /// A trailing `\n` or `\r\n` is not part of the row. Rows are raw bytes: no encoding is
    /// assumed.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorKind::Io`](crate::error::ErrorKind::Io) error if the input cannot be read.
    pub fn next_row(&mut self) -> Result<Option<Row<'_>>, Error> {
        self.line.clear();
        let read = self
            .input
            .read_until(b'\n', &mut self.line)
            .map_err(|err| Error::io("failed to read input", err))?;
        if read == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        let mut end = self.line.len();
        if self.line[..end].ends_with(b"\n") {
            end -= 1;
            if self.line[..end].ends_with(b"\r") {
                end -= 1;
            }
        }
        Ok(Some(Row {
            text: &self.line[..end],
            delimiter: self.delimiter,
            line_number: self.line_number,
        }))
    }
}

/// One line of input, split lazily into cells.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    text: &'a [u8],
    delimiter: u8,
    line_number: u64,
}

impl<'a> Row<'a> {
    /// Returns the one-based line number of this row.
    pub fn line_number(&self) -> u64 {
        self.line_number
    }

    /// Returns the full text of the row, without the line terminator.
    pub fn text(&self) -> &'a [u8] {
        self.text
    }

    /// Iterates the cells of the row.
    ///
    /// An empty line has a single empty cell.
    pub fn cells(&self) -> impl Iterator<Item = &'a [u8]> + use<'a> {
        let delimiter = self.delimiter;
        self.text.split(move |&b| b == delimiter)
    }

    /// Returns the number of cells in the row.
    pub fn num_cells(&self) -> usize {
        self.text.iter().filter(|&&b| b == self.delimiter).count() + 1
    }
}
