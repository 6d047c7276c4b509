//! Configuration for loading, laying out and rendering the atlas.
//!
//! Every field has a default matching the A1 poster the tool was designed
//! for, so a config file only needs to name what it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, graph::GraphShape, minimax::Outcome};

/// Drawing area in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl Default for PageSize {
    fn default() -> Self {
        Self {
            width_mm: 564.0,
            height_mm: 821.0,
        }
    }
}

/// Fractions of the page width given to each outcome band, left to right
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandFractions {
    pub o_wins: f64,
    pub draw: f64,
    pub x_wins: f64,
}

impl BandFractions {
    pub fn new(o_wins: f64, draw: f64, x_wins: f64) -> Self {
        Self {
            o_wins,
            draw,
            x_wins,
        }
    }

    /// Fraction of the page width for an outcome's band
    pub fn fraction(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::OWins => self.o_wins,
            Outcome::Draw => self.draw,
            Outcome::XWins => self.x_wins,
        }
    }

    /// Fraction of the page width to the left of an outcome's band
    pub fn offset(&self, outcome: Outcome) -> f64 {
        Outcome::ALL
            .iter()
            .take_while(|&&o| o != outcome)
            .map(|&o| self.fraction(o))
            .sum()
    }
}

impl Default for BandFractions {
    fn default() -> Self {
        Self::new(0.4, 0.2, 0.4)
    }
}

/// Full configuration for one atlas run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    pub page: PageSize,
    pub bands: BandFractions,
    /// Upper bound on a board glyph's side length
    pub max_node_size_mm: f64,
    /// Glyph size is at most band width / (node_spacing * nodes in band)
    pub node_spacing: f64,
    /// Vertical slack for routing informational edges
    pub jitter_mm: f64,
    /// Seed for edge jitter; `None` draws from the operating system
    pub seed: Option<u64>,
    pub graph: GraphShape,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            page: PageSize::default(),
            bands: BandFractions::default(),
            max_node_size_mm: 40.0,
            node_spacing: 1.5,
            jitter_mm: 20.0,
            seed: None,
            graph: GraphShape::default(),
        }
    }
}

impl AtlasConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the random seed for deterministic output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the page size in millimetres.
    pub fn with_page(mut self, width_mm: f64, height_mm: f64) -> Self {
        self.page = PageSize {
            width_mm,
            height_mm,
        };
        self
    }

    /// Set the outcome band fractions.
    pub fn with_bands(mut self, bands: BandFractions) -> Self {
        self.bands = bands;
        self
    }

    /// Pin or infer the number of board and edge lines in the input.
    pub fn with_graph_shape(mut self, shape: GraphShape) -> Self {
        self.graph = shape;
        self
    }

    /// Read a JSON config file; missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        let config: AtlasConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check numeric ranges before any stage runs.
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: String| Error::InvalidConfiguration { message };

        if !(self.page.width_mm > 0.0 && self.page.height_mm > 0.0) {
            return Err(invalid(format!(
                "page must have positive size, got {}x{} mm",
                self.page.width_mm, self.page.height_mm
            )));
        }

        let fractions = [self.bands.o_wins, self.bands.draw, self.bands.x_wins];
        if fractions.iter().any(|f| !f.is_finite() || *f < 0.0) {
            return Err(invalid(format!(
                "band fractions must be non-negative, got {fractions:?}"
            )));
        }
        let total: f64 = fractions.iter().sum();
        if (total - 1.0).abs() > 1e-9 {
            return Err(invalid(format!("band fractions must sum to 1, got {total}")));
        }

        if !(self.max_node_size_mm > 0.0) {
            return Err(invalid(format!(
                "max_node_size_mm must be positive, got {}",
                self.max_node_size_mm
            )));
        }
        if !(self.node_spacing > 0.0) {
            return Err(invalid(format!(
                "node_spacing must be positive, got {}",
                self.node_spacing
            )));
        }
        if !(self.jitter_mm >= 0.0) {
            return Err(invalid(format!(
                "jitter_mm must be non-negative, got {}",
                self.jitter_mm
            )));
        }

        Ok(())
    }
}
