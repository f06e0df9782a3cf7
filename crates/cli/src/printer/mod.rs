use std::io::{self, Write};

use datefind_engine::FindSummary;

/// Trait for writing the end-of-run summary.
pub trait StatusWriter {
    fn write_status(&mut self, msg: &str) -> io::Result<()>;
}

/// Default status writer that outputs to stdout.
pub struct StdoutWriter;

impl StatusWriter for StdoutWriter {
    fn write_status(&mut self, msg: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{msg}")?;
        out.flush()
    }
}

/// Buffering status writer for testing.
#[cfg(test)]
#[derive(Default)]
pub struct BufferedWriter {
    buf: Vec<String>,
}

#[cfg(test)]
impl BufferedWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.buf
    }
}

#[cfg(test)]
impl StatusWriter for BufferedWriter {
    fn write_status(&mut self, msg: &str) -> io::Result<()> {
        self.buf.push(msg.to_owned());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Human,
    /// A single JSON object for machine consumption.
    Json,
}

pub fn print_summary(
    out: &mut dyn StatusWriter,
    summary: &FindSummary,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Human => {
            out.write_status(&format!("Files found: {}", summary.files_found))?;
            if summary.skipped > 0 {
                out.write_status(&format!("Skipped: {}", summary.skipped))?;
            }
            out.write_status(&format!(
                "Output info to: {} folder",
                summary.output_dir.display()
            ))
        }
        OutputFormat::Json => {
            let line = serde_json::to_string(summary).map_err(io::Error::other)?;
            out.write_status(&line)
        }
    }
}
