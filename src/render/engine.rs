//! Layout engines: turning DOT text into image bytes
//!
//! Two implementations:
//! - `GraphvizEngine`: spawns the Graphviz `dot` program (production)
//! - `MockEngine`: returns preconfigured output (testing)

use super::format::Format;
use crate::graph::{ErdError, ErdResult};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::Mutex;
use tracing::{debug, warn};

/// Anything that can lay out a DOT graph and draw it
///
/// Abstracts over how the drawing happens so the diagram builder
/// doesn't depend on a Graphviz install.
pub trait LayoutEngine {
    /// Short name used in error messages
    fn name(&self) -> &str;

    /// Lay out `dot` and return the drawing in `format`
    fn layout(&self, dot: &str, format: Format) -> ErdResult<Vec<u8>>;
}

/// The Graphviz command-line engine
#[derive(Debug, Clone)]
pub struct GraphvizEngine {
    /// Program to run
    program: PathBuf,
    /// Layout algorithm passed as `-K` (dot, neato, fdp, circo, ...)
    layout: String,
}

impl Default for GraphvizEngine {
    fn default() -> Self {
        Self {
            program: PathBuf::from("dot"),
            layout: "dot".to_string(),
        }
    }
}

impl GraphvizEngine {
    /// Engine using `dot` from `PATH`
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific Graphviz executable
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Use a different layout algorithm
    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = layout.into();
        self
    }

    /// The configured executable
    pub fn program(&self) -> &std::path::Path {
        &self.program
    }

    /// Check whether the executable can be run at all
    pub fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("-V")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl LayoutEngine for GraphvizEngine {
    fn name(&self) -> &str {
        "graphviz"
    }

    fn layout(&self, dot: &str, format: Format) -> ErdResult<Vec<u8>> {
        let format_arg = format!("-T{}", format.engine_name());
        let layout_arg = format!("-K{}", self.layout);
        debug!(
            program = %self.program.display(),
            args = ?[&format_arg, &layout_arg],
            "running layout engine"
        );

        let mut child = Command::new(&self.program)
            .args([&format_arg, &layout_arg])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                ErdError::Render(format!(
                    "layout engine unavailable ({}): {}",
                    self.program.display(),
                    e
                ))
            })?;

        // Dropping stdin closes the pipe so the engine sees end of input.
        // A write error only matters if the engine went on to succeed.
        let send_result = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(dot.as_bytes()),
            None => Ok(()),
        };

        let output = child
            .wait_with_output()
            .map_err(|e| ErdError::Render(format!("failed to wait for engine: {}", e)))?;
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();

        if output.status.success() {
            send_result
                .map_err(|e| ErdError::Render(format!("failed to send graph to engine: {}", e)))?;
        } else {
            let reason = if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                stderr.to_string()
            };
            return Err(ErdError::Render(format!(
                "{} rejected the graph: {}",
                self.program.display(),
                reason
            )));
        }
        if !stderr.is_empty() {
            warn!(engine = %self.program.display(), "{}", stderr);
        }

        Ok(output.stdout)
    }
}

/// Mock engine for testing: records what it was asked and returns a fixed result
#[derive(Debug, Default)]
pub struct MockEngine {
    output: Option<Vec<u8>>,
    failure: Option<String>,
    calls: Mutex<Vec<(String, Format)>>,
}

impl MockEngine {
    /// Engine that answers every request with `output`
    pub fn returning(output: impl Into<Vec<u8>>) -> Self {
        Self {
            output: Some(output.into()),
            ..Default::default()
        }
    }

    /// Engine that rejects every request with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Default::default()
        }
    }

    /// Every (dot, format) pair seen so far
    pub fn calls(&self) -> Vec<(String, Format)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl LayoutEngine for MockEngine {
    fn name(&self) -> &str {
        "mock"
    }

    fn layout(&self, dot: &str, format: Format) -> ErdResult<Vec<u8>> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((dot.to_string(), format));
        }
        if let Some(message) = &self.failure {
            return Err(ErdError::Render(message.clone()));
        }
        Ok(self.output.clone().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_records_requests() {
        let engine = MockEngine::returning(b"PNG".to_vec());
        let out = engine.layout("digraph {}", Format::Png).unwrap();
        assert_eq!(out, b"PNG");
        assert_eq!(engine.calls(), vec![("digraph {}".to_string(), Format::Png)]);
    }

    #[test]
    fn failing_mock_returns_render_error() {
        let engine = MockEngine::failing("syntax error in line 1");
        let err = engine.layout("digraph {", Format::Svg).unwrap_err();
        assert!(matches!(err, ErdError::Render(ref m) if m.contains("syntax error")));
    }

    #[test]
    fn missing_program_is_unavailable() {
        let engine = GraphvizEngine::new().with_program("/nonexistent/graphviz/dot");
        assert!(!engine.is_available());
        let err = engine.layout("digraph {}", Format::Png).unwrap_err();
        assert!(matches!(err, ErdError::Render(ref m) if m.contains("unavailable")));
    }

    #[test]
    fn builder_sets_program_and_layout() {
        let engine = GraphvizEngine::new().with_program("/opt/gv/bin/dot").with_layout("neato");
        assert_eq!(engine.program(), std::path::Path::new("/opt/gv/bin/dot"));
        assert_eq!(engine.layout, "neato");
    }
}
