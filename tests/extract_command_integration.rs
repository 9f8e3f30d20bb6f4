//! End-to-end tests for the `extract` command.
//!
//! Each test lays out a data directory of benchmark logs plus a
//! configuration file in a temp directory, runs the full pipeline through
//! `perf_trend::run`, and inspects the persisted CSV datasets.

use camino::{Utf8Path, Utf8PathBuf};
use perf_trend::Host;
use std::fs;
use std::io::Cursor;

/// Test host that captures output to in-memory buffers.
struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
}

impl TestHost {
    const fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
        }
    }

    fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl std::io::Write {
        Cursor::new(&mut self.output_buf)
    }

    fn error(&mut self) -> impl std::io::Write {
        Cursor::new(&mut self.error_buf)
    }

    fn exit(&mut self, _code: i32) {}
}

struct Fixture {
    _tmp: tempfile::TempDir,
    data_dir: Utf8PathBuf,
    output_dir: Utf8PathBuf,
    config: Utf8PathBuf,
}

/// A workspace with a single-rule configuration: the value of the line
/// after `RESULT`, between `value=` and ` done`.
fn fixture() -> Fixture {
    let tmp = tempfile::tempdir().unwrap();
    let root = Utf8Path::from_path(tmp.path()).unwrap();

    let data_dir = root.join("data");
    let output_dir = root.join("out");
    fs::create_dir(&data_dir).unwrap();

    let config = root.join("perf-trend.toml");
    fs::write(
        &config,
        r#"
[[rule_set]]
name = "bench_results"

[[rule_set.rule]]
anchor = "RESULT"
offset = 1
left_bound = "value="
right_bound = " done"
"#,
    )
    .unwrap();

    Fixture {
        _tmp: tmp,
        data_dir,
        output_dir,
        config,
    }
}

fn write_log(fixture: &Fixture, date: &str, id: u32, content: &str) {
    let name = format!("perf_results_{date}_vm-{id}_SD");
    fs::write(fixture.data_dir.join(name), content).unwrap();
}

fn run_extract(fixture: &Fixture, extra: &[&str]) -> (TestHost, perf_trend::Result<()>) {
    let mut host = TestHost::new();
    let mut args = vec![
        "perf-trend",
        "extract",
        fixture.data_dir.as_str(),
        "--config",
        fixture.config.as_str(),
        "--output-dir",
        fixture.output_dir.as_str(),
        "--color",
        "never",
        "--log-level",
        "none",
    ];
    args.extend_from_slice(extra);

    let result = perf_trend::run(&mut host, args);
    (host, result)
}

#[test]
fn test_full_pipeline_produces_both_csv_files() {
    let fixture = fixture();
    write_log(&fixture, "2024-06-01", 1, "RESULT\nvalue=10 done\n");
    write_log(&fixture, "2024-06-02", 2, "RESULT\nvalue=20 done\n");
    write_log(&fixture, "2024-06-03", 3, "RESULT\nvalue=90 done\n");

    let (_host, result) = run_extract(&fixture, &[]);
    result.unwrap();

    let full = fs::read_to_string(fixture.output_dir.join("bench_results.csv")).unwrap();
    let raw = fs::read_to_string(fixture.output_dir.join("bench_results_raw.csv")).unwrap();

    let lines: Vec<&str> = full.lines().collect();
    assert_eq!(lines[0], "index,build_machine,build_id,boot_src,build_date,RESULT");
    assert_eq!(lines[1], "0,vm,1,SD,2024-06-01,10");
    assert_eq!(lines[2], "1,vm,2,SD,2024-06-02,20");
    assert_eq!(lines[3], "2,vm,3,SD,2024-06-03,90");

    // Statistics block: latest deviation, average, std dev, separator, max, min.
    assert_eq!(lines.len(), 10);
    assert!(lines[5].starts_with(",,,,average,40"));
    assert!(lines[8].starts_with(",,,,max,90"));
    assert!(lines[9].starts_with(",,,,min,10"));

    // The raw copy is the full file minus the statistics block.
    assert!(full.starts_with(&raw));
    assert_eq!(raw.lines().count(), 4);
}

#[test]
fn test_latest_build_regression_is_flagged() {
    let fixture = fixture();
    write_log(&fixture, "2024-06-01", 1, "RESULT\nvalue=10 done\n");
    write_log(&fixture, "2024-06-02", 2, "RESULT\nvalue=20 done\n");
    write_log(&fixture, "2024-06-03", 3, "RESULT\nvalue=90 done\n");

    let (host, result) = run_extract(&fixture, &[]);
    result.unwrap();

    // Value 90 is more than one sample std dev (~43.6) above the mean of 40.
    let full = fs::read_to_string(fixture.output_dir.join("bench_results.csv")).unwrap();
    let latest_line = full.lines().find(|l| l.contains("latest deviation")).unwrap();
    let cell = latest_line.rsplit(',').next().unwrap();
    assert!(cell.parse::<f64>().unwrap() > 1.0);

    let console = host.output_str();
    assert!(console.contains("RESULT"));
    assert!(console.contains("latest build +"));
}

#[test]
fn test_missing_benchmark_becomes_an_empty_cell() {
    let fixture = fixture();
    write_log(&fixture, "2024-06-01", 1, "RESULT\nvalue=10 done\n");
    write_log(&fixture, "2024-06-02", 2, "nothing to see here\n");
    write_log(&fixture, "2024-06-03", 3, "RESULT\nvalue=30 done\n");

    let (_host, result) = run_extract(&fixture, &[]);
    result.unwrap();

    let full = fs::read_to_string(fixture.output_dir.join("bench_results.csv")).unwrap();
    let lines: Vec<&str> = full.lines().collect();
    assert_eq!(lines[2], "1,vm,2,SD,2024-06-02,");

    // Absent values are excluded from the statistics, not treated as zero.
    assert!(lines[5].starts_with(",,,,average,20"));
}

#[test]
fn test_normalize_rescales_each_column() {
    let fixture = fixture();
    write_log(&fixture, "2024-06-01", 1, "RESULT\nvalue=25 done\n");
    write_log(&fixture, "2024-06-02", 2, "RESULT\nvalue=50 done\n");
    write_log(&fixture, "2024-06-03", 3, "RESULT\nvalue=200 done\n");

    let (_host, result) = run_extract(&fixture, &["--normalize"]);
    result.unwrap();

    let full = fs::read_to_string(fixture.output_dir.join("bench_results.csv")).unwrap();
    let lines: Vec<&str> = full.lines().collect();
    assert_eq!(lines[1], "0,vm,1,SD,2024-06-01,12.5");
    assert_eq!(lines[2], "1,vm,2,SD,2024-06-02,25");
    assert_eq!(lines[3], "2,vm,3,SD,2024-06-03,100");
    assert!(lines[8].starts_with(",,,,max,100"));
}

#[test]
fn test_json_report_is_written() {
    let fixture = fixture();
    write_log(&fixture, "2024-06-01", 1, "RESULT\nvalue=10 done\n");
    write_log(&fixture, "2024-06-02", 2, "RESULT\nvalue=20 done\n");

    let json_path = fixture.output_dir.join("report.json");
    let (_host, result) = run_extract(&fixture, &["--json", json_path.as_str()]);
    result.unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(parsed["datasets"][0]["dataset"], "bench_results");
    assert_eq!(parsed["datasets"][0]["columns"][0]["samples"], 2);
    assert_eq!(parsed["datasets"][0]["columns"][0]["mean"], 15.0);
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let fixture = fixture();
    write_log(&fixture, "2024-06-01", 1, "RESULT\nvalue=10 done\n");
    write_log(&fixture, "2024-06-02", 2, "RESULT\nvalue=90 done\n");

    let (_host, result) = run_extract(&fixture, &[]);
    result.unwrap();
    let first = fs::read_to_string(fixture.output_dir.join("bench_results.csv")).unwrap();
    let first_raw = fs::read_to_string(fixture.output_dir.join("bench_results_raw.csv")).unwrap();

    let (_host, result) = run_extract(&fixture, &[]);
    result.unwrap();
    let second = fs::read_to_string(fixture.output_dir.join("bench_results.csv")).unwrap();
    let second_raw = fs::read_to_string(fixture.output_dir.join("bench_results_raw.csv")).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_raw, second_raw);
}

#[test]
fn test_no_matching_logs_is_an_error() {
    let fixture = fixture();
    fs::write(fixture.data_dir.join("notes.txt"), "not a benchmark log").unwrap();

    let (_host, result) = run_extract(&fixture, &[]);
    assert!(result.is_err());
}

#[test]
fn test_builtin_rule_sets_apply_without_a_config() {
    let tmp = tempfile::tempdir().unwrap();
    let root = Utf8Path::from_path(tmp.path()).unwrap();
    let data_dir = root.join("data");
    let output_dir = root.join("out");
    fs::create_dir(&data_dir).unwrap();

    fs::write(
        data_dir.join("perf_results_2024-06-01_vm-1_SD"),
        "# Running 'sched/pipe' benchmark:\n\n\n\n\n      12.345 usecs/op\n",
    )
    .unwrap();

    let mut host = TestHost::new();
    let result = perf_trend::run(
        &mut host,
        [
            "perf-trend",
            "extract",
            data_dir.as_str(),
            "--output-dir",
            output_dir.as_str(),
            "--color",
            "never",
            "--log-level",
            "none",
        ],
    );
    result.unwrap();

    let perf = fs::read_to_string(output_dir.join("perf_results.csv")).unwrap();
    assert!(perf.lines().next().unwrap().contains("sched/pipe"));
    assert!(perf.contains("0,vm,1,SD,2024-06-01,12.345"));

    let find_bit = fs::read_to_string(output_dir.join("perf_find_bit_results.csv")).unwrap();
    assert!(find_bit.lines().next().unwrap().contains("1 bits set of 1 bits"));
}
