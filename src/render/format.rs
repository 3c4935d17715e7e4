//! Output formats understood by the layout engine

use crate::graph::ErdError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Image (or text) format the engine is asked to produce
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Png,
    Svg,
    Pdf,
    Jpeg,
    Gif,
    Bmp,
    Tiff,
    Webp,
    Ps,
    Eps,
    Json,
    /// Canonical DOT, laid out but not drawn
    Gv,
}

impl Format {
    /// Every supported format, in the order `formats` lists them
    pub const ALL: [Format; 12] = [
        Format::Png,
        Format::Svg,
        Format::Pdf,
        Format::Jpeg,
        Format::Gif,
        Format::Bmp,
        Format::Tiff,
        Format::Webp,
        Format::Ps,
        Format::Eps,
        Format::Json,
        Format::Gv,
    ];

    /// Value passed to Graphviz as `-T<name>`
    pub fn engine_name(&self) -> &'static str {
        match self {
            Format::Png => "png",
            Format::Svg => "svg",
            Format::Pdf => "pdf",
            Format::Jpeg => "jpeg",
            Format::Gif => "gif",
            Format::Bmp => "bmp",
            Format::Tiff => "tiff",
            Format::Webp => "webp",
            Format::Ps => "ps",
            Format::Eps => "eps",
            Format::Json => "json",
            Format::Gv => "gv",
        }
    }

    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Jpeg => "jpg",
            other => other.engine_name(),
        }
    }

    /// Whether the output is a raster image
    pub fn is_raster(&self) -> bool {
        matches!(
            self,
            Format::Png | Format::Jpeg | Format::Gif | Format::Bmp | Format::Tiff | Format::Webp
        )
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.engine_name())
    }
}

impl FromStr for Format {
    type Err = ErdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(Format::Png),
            "svg" => Ok(Format::Svg),
            "pdf" => Ok(Format::Pdf),
            "jpg" | "jpeg" => Ok(Format::Jpeg),
            "gif" => Ok(Format::Gif),
            "bmp" => Ok(Format::Bmp),
            "tif" | "tiff" => Ok(Format::Tiff),
            "webp" => Ok(Format::Webp),
            "ps" => Ok(Format::Ps),
            "eps" => Ok(Format::Eps),
            "json" => Ok(Format::Json),
            "gv" | "dot" | "canon" => Ok(Format::Gv),
            other => Err(ErdError::Render(format!("unsupported output format: {:?}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_png() {
        assert_eq!(Format::default(), Format::Png);
    }

    #[test]
    fn parses_aliases_case_insensitively() {
        assert_eq!("PNG".parse::<Format>().unwrap(), Format::Png);
        assert_eq!("jpg".parse::<Format>().unwrap(), Format::Jpeg);
        assert_eq!(" tif ".parse::<Format>().unwrap(), Format::Tiff);
        assert_eq!("dot".parse::<Format>().unwrap(), Format::Gv);
    }

    #[test]
    fn unsupported_format_is_render_error() {
        let err = "hologram".parse::<Format>().unwrap_err();
        assert!(matches!(err, ErdError::Render(ref msg) if msg.contains("hologram")));
    }

    #[test]
    fn every_listed_format_round_trips_through_its_engine_name() {
        for format in Format::ALL {
            assert_eq!(format.engine_name().parse::<Format>().unwrap(), format);
        }
    }

    #[test]
    fn jpeg_uses_short_extension() {
        assert_eq!(Format::Jpeg.extension(), "jpg");
        assert_eq!(Format::Jpeg.engine_name(), "jpeg");
        assert!(Format::Jpeg.is_raster());
        assert!(!Format::Svg.is_raster());
    }
}
