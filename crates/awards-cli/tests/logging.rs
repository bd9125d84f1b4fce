//! JSON logging of a directory run.
//!
//! Installs the global subscriber, so this file holds a single test.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use awards_cli::cli::RunArgs;
use awards_cli::commands::run_all;
use awards_cli::logging::{LogConfig, LogFormat, init_logging_with_writer};
use awards_model::CleanOptions;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn json_logs_close_the_run_span() {
    let captured = Captured::default();
    let mut config = LogConfig::default()
        .with_level(LevelFilter::INFO)
        .with_format(LogFormat::Json)
        .with_ansi(false);
    config.use_env_filter = false;
    init_logging_with_writer(&config, captured.clone());

    let input = tempfile::tempdir().expect("input dir");
    let args = RunArgs {
        input_dir: input.path().to_path_buf(),
        output_dir: None,
    };
    run_all(&args, &CleanOptions::default(), true).expect("run");

    let output = String::from_utf8(captured.0.lock().expect("buffer lock").clone()).expect("utf8");
    let lines: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).expect("json line"))
        .collect();
    assert!(lines.iter().any(|line| line["fields"]["message"] == "no entity tables found"));
    assert!(lines.iter().any(|line| line["fields"]["message"] == "run complete"));
    assert!(lines.iter().any(|line| {
        line["fields"]["message"] == "close" && line["span"]["name"] == "run"
    }));
}
