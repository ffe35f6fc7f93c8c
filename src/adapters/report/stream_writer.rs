//! Stream Report Writer - Writes the cost-effectiveness table to any `io::Write`.

use std::io::{self, Write};
use std::sync::Mutex;

use super::render_text;
use crate::config::{ReportConfig, ReportFormat};
use crate::domain::analysis::CeTable;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ReportWriter;

/// Renders a table in the configured format.
pub fn render_report(table: &CeTable, config: &ReportConfig) -> Result<String, DomainError> {
    match config.format {
        ReportFormat::Text => Ok(render_text(table, config.precision)),
        ReportFormat::Json => serde_json::to_string_pretty(table)
            .map(|json| json + "\n")
            .map_err(|e| DomainError::new(ErrorCode::ReportFailed, e.to_string())),
        ReportFormat::Yaml => serde_yaml::to_string(table)
            .map_err(|e| DomainError::new(ErrorCode::ReportFailed, e.to_string())),
    }
}

/// Report writer over a byte sink such as stdout or a file.
pub struct StreamReportWriter<W> {
    sink: Mutex<W>,
    config: ReportConfig,
}

impl<W: Write + Send> StreamReportWriter<W> {
    pub fn new(sink: W, config: ReportConfig) -> Self {
        Self {
            sink: Mutex::new(sink),
            config,
        }
    }

    /// Consumes the writer and returns the sink.
    pub fn into_inner(self) -> W {
        self.sink
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StreamReportWriter<io::Stdout> {
    pub fn stdout(config: ReportConfig) -> Self {
        Self::new(io::stdout(), config)
    }
}

impl<W: Write + Send> ReportWriter for StreamReportWriter<W> {
    fn write_report(&self, table: &CeTable) -> Result<(), DomainError> {
        let rendered = render_report(table, &self.config)?;

        let mut sink = self
            .sink
            .lock()
            .map_err(|_| DomainError::new(ErrorCode::InternalError, "Report sink lock poisoned"))?;
        sink.write_all(rendered.as_bytes())
            .map_err(|e| DomainError::new(ErrorCode::ReportFailed, e.to_string()))?;
        sink.flush()
            .map_err(|e| DomainError::new(ErrorCode::ReportFailed, e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{FrontierAnalyzer, Strategy};

    fn table() -> CeTable {
        FrontierAnalyzer::new(vec![
            Strategy::new("A", 0.0, 0.0).unwrap(),
            Strategy::new("B", 10.0, 5.0).unwrap(),
            Strategy::new("C", 20.0, 5.0).unwrap(),
        ])
        .unwrap()
        .build_icer_table()
        .unwrap()
    }

    fn config(format: ReportFormat) -> ReportConfig {
        ReportConfig {
            format,
            ..Default::default()
        }
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_text_report() {
        let writer = StreamReportWriter::new(Vec::new(), config(ReportFormat::Text));
        writer.write_report(&table()).unwrap();

        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert!(output.starts_with("Name"));
        assert!(output.contains("Dominated"));
    }

    #[test]
    fn writes_json_report() {
        let writer = StreamReportWriter::new(Vec::new(), config(ReportFormat::Json));
        writer.write_report(&table()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&writer.into_inner()).unwrap();
        let rows = value["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["icer"], "not_applicable");
        assert_eq!(rows[1]["icer"]["ratio"], 2.0);
        assert_eq!(rows[2]["icer"], "dominated");
        assert_eq!(rows[2]["dominance"]["status"], "simple");
        assert_eq!(rows[2]["dominance"]["by"], "B");
    }

    #[test]
    fn writes_yaml_report() {
        let writer = StreamReportWriter::new(Vec::new(), config(ReportFormat::Yaml));
        writer.write_report(&table()).unwrap();

        let value: serde_yaml::Value = serde_yaml::from_slice(&writer.into_inner()).unwrap();
        assert_eq!(value["rows"][1]["name"], serde_yaml::Value::from("B"));
    }

    #[test]
    fn sink_failure_is_report_failed() {
        let writer = StreamReportWriter::new(BrokenSink, config(ReportFormat::Text));
        let err = writer.write_report(&table()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ReportFailed);
    }
}
