use serde::Serialize;
use std::io::Write as _;
use time::Duration;

use crate::cli::OutputFormat;

#[derive(Debug, Serialize)]
pub(crate) struct Report {
    pub nanoseconds: i128,
    pub phrase: String,
    pub directional: String,
}

impl Report {
    pub(crate) fn new(duration: Duration) -> Self {
        Self {
            nanoseconds: duration.whole_nanoseconds(),
            phrase: roughly_core::rough_duration(duration),
            directional: roughly_core::rough_duration_direction(duration),
        }
    }
}

pub(crate) fn print_report(format: OutputFormat, bare: bool, report: &Report) {
    match format {
        OutputFormat::HumanReadable => {
            if bare {
                println!("{}", report.phrase);
            } else {
                println!("{}", report.directional);
            }
        }
        OutputFormat::Json => emit_json_line(report),
    }
}

fn emit_json_line<T: Serialize>(line: &T) {
    let mut out = std::io::stdout().lock();
    if serde_json::to_writer(&mut out, line).is_ok() {
        let _ = writeln!(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn report_carries_both_phrase_forms() {
        let report = Report::new(Duration::seconds(-92));

        assert_eq!(report.nanoseconds, -92_000_000_000);
        assert_eq!(report.phrase, "2 minutes");
        assert_eq!(report.directional, "in 2 minutes");
    }

    #[test]
    fn report_serializes_to_flat_json() {
        let report = Report::new(Duration::seconds(92));

        let v: Value = match serde_json::to_value(&report) {
            Ok(v) => v,
            Err(err) => panic!("to_value failed: {err}"),
        };
        assert_eq!(
            v.get("phrase").and_then(Value::as_str),
            Some("2 minutes")
        );
        assert_eq!(
            v.get("directional").and_then(Value::as_str),
            Some("2 minutes ago")
        );
        assert_eq!(
            v.get("nanoseconds").and_then(Value::as_i64),
            Some(92_000_000_000)
        );
    }
}
