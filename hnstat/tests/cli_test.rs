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

use std::io::Write;
use std::process::Command;
use std::process::Output;

use insta::assert_snapshot;
use tempfile::NamedTempFile;

const LOG: &str = "1\tfoo\n2\tbar\n3\tfoo\n4\tfoo\n";

fn log_file(contents: impl AsRef<[u8]>) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_ref()).unwrap();
    file.flush().unwrap();
    file
}

fn hnstat(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hnstat"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

fn assert_fails(output: &Output, message: &str) {
    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "unexpected output: {}", stdout(output));
    let stderr = stderr(output);
    assert_eq!(stderr.lines().count(), 1, "{stderr}");
    assert!(stderr.starts_with("hnstat: "), "{stderr}");
    assert!(stderr.contains(message), "{stderr}");
}

#[test]
fn test_top() {
    let file = log_file(LOG);
    let path = file.path().to_str().unwrap();

    let output = hnstat(&["top", "1", path]);
    assert!(output.status.success());
    assert_snapshot!(stdout(&output).trim_end(), @"foo 3");

    let output = hnstat(&["top", "2", path]);
    assert!(output.status.success());
    assert_snapshot!(stdout(&output).trim_end(), @r"
    foo 3
    bar 1
    ");
    assert!(stderr(&output).is_empty());
}

#[test]
fn test_top_zero_prints_nothing() {
    let file = log_file(LOG);
    let output = hnstat(&["top", "0", file.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_distinct() {
    let file = log_file(LOG);
    let output = hnstat(&["distinct", file.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert_snapshot!(stdout(&output).trim_end(), @"2");
}

#[test]
fn test_range_options() {
    let file = log_file(LOG);
    let path = file.path().to_str().unwrap();

    let output = hnstat(&["top", "5", "--from", "3", "--to", "004", path]);
    assert!(output.status.success());
    assert_snapshot!(stdout(&output).trim_end(), @"foo 2");

    let output = hnstat(&["--to", "2", "distinct", path]);
    assert!(output.status.success());
    assert_snapshot!(stdout(&output).trim_end(), @"2");

    let output = hnstat(&["distinct", "--from", "2", "--to", "2", path]);
    assert_snapshot!(stdout(&output).trim_end(), @"1");

    let output = hnstat(&["distinct", "--from", "99999999999999999999999999", path]);
    assert_snapshot!(stdout(&output).trim_end(), @"0");
}

#[test]
fn test_malformed_row_is_reported_and_skipped() {
    let file = log_file("1\tfoo\n2\tbar\tbaz\n");
    let output = hnstat(&["top", "10", file.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert_snapshot!(stdout(&output).trim_end(), @"foo 1");

    let stderr = stderr(&output);
    assert!(stderr.contains("more than 2 columns"), "{stderr}");
    assert!(stderr.contains("line=2"), "{stderr}");
}

#[test]
fn test_non_utf8_queries_are_printed_verbatim() {
    let file = log_file(b"1\tcaf\xe9\n2\tcaf\xe9\n3\tfoo\n");
    let path = file.path().to_str().unwrap();

    let output = hnstat(&["top", "2", path]);
    assert!(output.status.success());
    assert_eq!(output.stdout, b"caf\xe9 2\nfoo 1\n");
    assert!(output.stderr.is_empty());

    let output = hnstat(&["distinct", path]);
    assert!(output.status.success());
    assert_snapshot!(stdout(&output).trim_end(), @"2");
}

#[test]
fn test_invocation_errors() {
    let file = log_file(LOG);
    let path = file.path().to_str().unwrap();

    assert_fails(&hnstat(&["top", "many", path]), "many");
    assert_fails(&hnstat(&["top", "-1", path]), "-1");
    assert_fails(&hnstat(&["top", "+3", path]), "\"+3\" is not an integer");
    assert_fails(&hnstat(&["top", "3"]), "INPUT");
    assert_fails(&hnstat(&["distinct"]), "INPUT");
    assert_fails(&hnstat(&["median", path]), "median");
    assert_fails(&hnstat(&[]), "hnstat: missing command");
    assert_fails(&hnstat(&["--to", "2"]), "hnstat: missing command");
    assert_fails(
        &hnstat(&["distinct", "--from", "yesterday", path]),
        "\"yesterday\" is not a valid timestamp",
    );
    assert_fails(
        &hnstat(&["distinct", "--to", "-5", path]),
        "\"-5\" is not a valid timestamp",
    );
    assert_fails(
        &hnstat(&["distinct", "--from", "5", "--to", "4", path]),
        "start timestamp 5 is greater than end timestamp 4",
    );
    assert_fails(
        &hnstat(&["top", "1", "/nonexistent/hnstat/queries.tsv"]),
        "not readable",
    );
}

#[test]
fn test_help() {
    let output = hnstat(&["--help"]);
    assert!(output.status.success());
    let help = stdout(&output);
    assert!(help.contains("top"));
    assert!(help.contains("distinct"));
    assert!(help.contains("--from"));
}
