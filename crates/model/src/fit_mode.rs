//! Layout policies for placing content inside the target region.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a content image is placed inside the target region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitMode {
    /// Whole image scaled to fit inside the region, letterboxed.
    #[default]
    Contain,
    /// Whole image scaled to cover the region, centered, clipped by the region.
    FillCenter,
    /// Region filled from a user-pannable crop window of the image.
    PannableCover,
    /// Image repeated at native size from the region's top-left corner.
    Tile,
}

impl FitMode {
    pub const ALL: [FitMode; 4] = [
        FitMode::Contain,
        FitMode::FillCenter,
        FitMode::PannableCover,
        FitMode::Tile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FitMode::Contain => "contain",
            FitMode::FillCenter => "fill-center",
            FitMode::PannableCover => "pannable-cover",
            FitMode::Tile => "tile",
        }
    }

    /// Whether pointer drags inside the region pan the content.
    pub fn is_pannable(&self) -> bool {
        matches!(self, FitMode::PannableCover)
    }
}

impl fmt::Display for FitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a fit mode name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown fit mode: {0}. Use: contain, fill-center, pannable-cover, tile")]
pub struct ParseFitModeError(pub String);

impl FromStr for FitMode {
    type Err = ParseFitModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "contain" | "fit" => Ok(FitMode::Contain),
            "fill-center" | "fill" => Ok(FitMode::FillCenter),
            "pannable-cover" | "cover" => Ok(FitMode::PannableCover),
            "tile" => Ok(FitMode::Tile),
            other => Err(ParseFitModeError(other.to_string())),
        }
    }
}
