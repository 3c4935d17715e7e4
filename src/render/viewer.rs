//! Opening a rendered file in the desktop's default viewer

use crate::graph::{ErdError, ErdResult};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Launches the platform file opener
#[derive(Debug, Clone)]
pub struct Viewer {
    program: String,
    args: Vec<String>,
}

impl Viewer {
    /// The opener for the current platform
    pub fn system() -> Self {
        if cfg!(target_os = "macos") {
            Self::with_command("open", Vec::<String>::new())
        } else if cfg!(target_os = "windows") {
            Self::with_command("cmd", ["/C", "start", ""])
        } else {
            Self::with_command("xdg-open", Vec::<String>::new())
        }
    }

    /// An opener that runs `program args... <path>`
    pub fn with_command<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Open `path` without waiting for the viewer to exit
    pub fn open(&self, path: &Path) -> ErdResult<()> {
        debug!(program = %self.program, path = %path.display(), "opening viewer");
        Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|e| ErdError::Viewer(format!("failed to launch {}: {}", self.program, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_opener_is_viewer_error() {
        let viewer = Viewer::with_command("/nonexistent/opener", ["--new-window"]);
        let err = viewer.open(Path::new("diagram.png")).unwrap_err();
        assert!(matches!(err, ErdError::Viewer(ref m) if m.contains("/nonexistent/opener")));
    }
}
