//! Plot configuration.
//!
//! Labels, title, output path, grid and colors. Setters ignore empty text
//! so the defaults stay in force.

use crate::color::Rgba;
use crate::render::primitives::clamp_grid_density;
use std::path::{Path, PathBuf};

/// Default output path.
pub const DEFAULT_OUTPUT_PATH: &str = "plot.png";
/// Default title.
pub const DEFAULT_TITLE: &str = "plot title";
/// Default x-axis label.
pub const DEFAULT_X_LABEL: &str = "x-axis";
/// Default y-axis label.
pub const DEFAULT_Y_LABEL: &str = "y-axis";

/// Colors used for each layer of the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Theme {
    /// Canvas fill.
    pub background: Rgba,
    /// Border rectangle.
    pub border: Rgba,
    /// Grid lines.
    pub grid: Rgba,
    /// Labels and title.
    pub text: Rgba,
    /// Scatter dots.
    pub points: Rgba,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgba::GREY,
            border: Rgba::BLACK,
            grid: Rgba::DARK_GREY,
            text: Rgba::BLACK,
            points: Rgba::PURPLE,
        }
    }
}

/// Mutable plot settings, read once per plot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlotConfig {
    x_label: String,
    y_label: String,
    title: String,
    output_path: PathBuf,
    grid: Option<u32>,
    theme: Theme,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            x_label: DEFAULT_X_LABEL.to_string(),
            y_label: DEFAULT_Y_LABEL.to_string(),
            title: DEFAULT_TITLE.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            grid: None,
            theme: Theme::default(),
        }
    }
}

impl PlotConfig {
    /// Create a configuration with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the x-axis label. Empty text is ignored.
    pub fn set_x_label(&mut self, text: &str) -> &mut Self {
        replace_unless_empty(&mut self.x_label, text);
        self
    }

    /// Set the y-axis label. Empty text is ignored.
    pub fn set_y_label(&mut self, text: &str) -> &mut Self {
        replace_unless_empty(&mut self.y_label, text);
        self
    }

    /// Set the title. Empty text is ignored.
    pub fn set_title(&mut self, text: &str) -> &mut Self {
        replace_unless_empty(&mut self.title, text);
        self
    }

    /// Set the output path. The extension picks the format at export time.
    pub fn set_output_path<P: AsRef<Path>>(&mut self, path: P) -> &mut Self {
        self.output_path = path.as_ref().to_path_buf();
        self
    }

    /// Turn the grid on. A density of zero selects the default of 10 and
    /// densities above 800 are clamped to 800.
    pub fn enable_grid(&mut self, density: u32) -> &mut Self {
        self.grid = Some(clamp_grid_density(density));
        self
    }

    /// Replace the color theme.
    pub fn set_theme(&mut self, theme: Theme) -> &mut Self {
        self.theme = theme;
        self
    }

    /// The x-axis label.
    #[must_use]
    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    /// The y-axis label.
    #[must_use]
    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    /// The title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The output path.
    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Grid density, or `None` if the grid is disabled.
    #[must_use]
    pub const fn grid(&self) -> Option<u32> {
        self.grid
    }

    /// The color theme.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }
}

fn replace_unless_empty(slot: &mut String, text: &str) {
    if !text.is_empty() {
        text.clone_into(slot);
    }
}
