//! Binary entrypoint: read JSON lines from stdin, write one report to stdout.
//!
//! Each input line is an InboundAlarm. Invalid lines produce an ErrorOutput
//! JSON line and are excluded from the batch. After EOF the whole batch is
//! analyzed and a single AnalysisReport JSON document is written.
//!
//! Usage:
//!   rca-engine                              # read alarms from stdin
//!   rca-engine --synthetic N [--seed S]     # analyze N generated alarms
//!   rca-engine --eps X --min-points K       # override clustering parameters

use rca_engine::types::ErrorOutput;
use rca_engine::{normalize, synthetic, Config, Engine, InboundAlarm};
use std::io::{self, BufRead, Write};
use std::process;

struct Args {
  synthetic: Option<usize>,
  seed: u64,
  eps: f64,
  min_points: usize,
}

fn parse_args() -> Args {
  let mut args = Args {
    synthetic: None,
    seed: 0,
    eps: Config::default().eps,
    min_points: Config::default().min_points,
  };

  let mut iter = std::env::args().skip(1);
  while let Some(flag) = iter.next() {
    let mut value = |name: &str| {
      iter.next().unwrap_or_else(|| {
        eprintln!("rca-engine: {} requires a value", name);
        process::exit(2);
      })
    };
    match flag.as_str() {
      "--synthetic" => {
        args.synthetic = Some(parse_value(&value("--synthetic"), "--synthetic"));
      }
      "--seed" => args.seed = parse_value(&value("--seed"), "--seed"),
      "--eps" => args.eps = parse_value(&value("--eps"), "--eps"),
      "--min-points" => args.min_points = parse_value(&value("--min-points"), "--min-points"),
      other => {
        eprintln!("rca-engine: unknown flag: {}", other);
        process::exit(2);
      }
    }
  }

  args
}

fn parse_value<T: std::str::FromStr>(raw: &str, name: &str) -> T {
  raw.parse().unwrap_or_else(|_| {
    eprintln!("rca-engine: invalid value for {}: {}", name, raw);
    process::exit(2);
  })
}

fn read_stdin_batch(out: &mut impl Write) -> Vec<InboundAlarm> {
  let stdin = io::stdin();
  let mut batch = Vec::new();

  for line in stdin.lock().lines() {
    let line = match line {
      Ok(l) => l,
      Err(e) => {
        eprintln!("rca-engine: read error: {}", e);
        process::exit(1);
      }
    };

    // Skip blank lines.
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    match serde_json::from_str::<InboundAlarm>(trimmed) {
      Ok(raw) => batch.push(raw),
      Err(e) => {
        let err = ErrorOutput::new(format!("json parse: {}", e));
        let _ = serde_json::to_writer(&mut *out, &err);
        let _ = writeln!(out);
      }
    }
  }

  batch
}

fn main() {
  let args = parse_args();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());

  let raw_batch = match args.synthetic {
    Some(count) => synthetic::generate(count, args.seed),
    None => read_stdin_batch(&mut out),
  };

  // Normalize, reporting invalid alarms and excluding them from the batch.
  let mut alarms = Vec::with_capacity(raw_batch.len());
  for raw in &raw_batch {
    match normalize::normalize(raw) {
      Ok(alarm) => alarms.push(alarm),
      Err(e) => {
        let err = match &e {
          rca_engine::EngineError::Validation { field, reason } => {
            ErrorOutput::new(reason.clone()).with_field(field.clone())
          }
          _ => ErrorOutput::new(e.to_string()),
        };
        let _ = serde_json::to_writer(&mut out, &err);
        let _ = writeln!(out);
      }
    }
  }

  if alarms.is_empty() {
    let _ = out.flush();
    eprintln!("rca-engine: no valid alarms in batch");
    process::exit(1);
  }

  let engine = Engine::new(Config {
    eps: args.eps,
    min_points: args.min_points,
    ..Config::default()
  });

  match engine.analyze(&alarms) {
    Ok(report) => {
      let _ = serde_json::to_writer(&mut out, &report);
      let _ = writeln!(out);
    }
    Err(e) => {
      let _ = out.flush();
      eprintln!("rca-engine: {}", e);
      process::exit(1);
    }
  }

  let _ = out.flush();
}
