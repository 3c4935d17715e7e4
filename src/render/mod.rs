//! Rendering: DOT serialization, layout engines and output files

mod dot;
mod engine;
mod format;
mod viewer;

pub use dot::to_dot;
pub use engine::{GraphvizEngine, LayoutEngine, MockEngine};
pub use format::Format;
pub use viewer::Viewer;

use std::path::PathBuf;

/// Where and how a diagram is rendered
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Image file to write
    pub output: PathBuf,
    /// Format requested from the engine
    pub format: Format,
    /// Open the image once written
    pub open_viewer: bool,
    /// Also write the DOT source next to the image
    pub keep_source: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(crate::DEFAULT_OUTPUT)
    }
}

impl RenderOptions {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            format: Format::default(),
            open_viewer: false,
            keep_source: false,
        }
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn with_viewer(mut self, open_viewer: bool) -> Self {
        self.open_viewer = open_viewer;
        self
    }

    pub fn with_source(mut self, keep_source: bool) -> Self {
        self.keep_source = keep_source;
        self
    }

    /// Path the DOT source is written to, if it is kept
    ///
    /// `None` when the source would overwrite the image itself.
    pub fn source_path(&self) -> Option<PathBuf> {
        if !self.keep_source {
            return None;
        }
        let path = self.output.with_extension("gv");
        if path == self.output {
            None
        } else {
            Some(path)
        }
    }
}

/// What a successful render produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    /// The image file
    pub image: PathBuf,
    /// The DOT source file, when kept
    pub source: Option<PathBuf>,
    /// Size of the image in bytes
    pub bytes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_target_png_without_viewer() {
        let options = RenderOptions::default();
        assert_eq!(options.output, PathBuf::from("online_job_portal_erd.png"));
        assert_eq!(options.format, Format::Png);
        assert!(!options.open_viewer);
        assert_eq!(options.source_path(), None);
    }

    #[test]
    fn source_path_replaces_extension() {
        let options = RenderOptions::new("out/erd.png").with_source(true);
        assert_eq!(options.source_path(), Some(PathBuf::from("out/erd.gv")));
    }

    #[test]
    fn source_path_never_clobbers_image() {
        let options = RenderOptions::new("erd.gv").with_format(Format::Gv).with_source(true);
        assert_eq!(options.source_path(), None);
    }
}
