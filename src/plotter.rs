//! Plot orchestration.
//!
//! A [`Plotter`] owns its configuration and its framebuffer. Each call to
//! [`Plotter::plot`] runs the same fixed sequence: validate, draw the
//! canvas, draw the labels, draw the points, encode and write. Separate
//! plotters share nothing, so concurrent plots need one plotter each.

use crate::config::PlotConfig;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::{HEIGHT, WIDTH};
use crate::output::{self, OutputFormat};
use crate::plots::{draw_scatter, SampleSeries};
use crate::render::primitives::{draw_background, draw_border, draw_grid};
use crate::render::text::{check_label, draw_text, LabelWarning, TextLayout, LABEL_SCALE, TITLE_SCALE};
use std::path::{Path, PathBuf};

/// Top row of the x-axis label.
pub const X_LABEL_TOP: i64 = 920;
/// Left column of the y-axis label.
pub const Y_LABEL_LEFT: i64 = 50;
/// Top row of the title.
pub const TITLE_TOP: i64 = 50;

/// Outcome of a successful [`Plotter::plot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotReport {
    /// File that was written.
    pub path: PathBuf,
    /// Encoding used.
    pub format: OutputFormat,
    /// Number of points drawn.
    pub points: usize,
    /// Labels that exceeded the soft length limit.
    pub warnings: Vec<LabelWarning>,
}

/// Scatter plot renderer with its own canvas.
#[derive(Debug, Clone, Default)]
pub struct Plotter {
    config: PlotConfig,
    framebuffer: Framebuffer,
}

impl Plotter {
    /// Create a plotter with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a plotter from an existing configuration.
    #[must_use]
    pub fn with_config(config: PlotConfig) -> Self {
        Self {
            config,
            framebuffer: Framebuffer::new(),
        }
    }

    /// The current configuration.
    #[must_use]
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Mutable access to the configuration.
    pub fn config_mut(&mut self) -> &mut PlotConfig {
        &mut self.config
    }

    /// The canvas as of the last render.
    #[must_use]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Set the x-axis label. Empty text is ignored.
    pub fn set_x_label(&mut self, text: &str) -> &mut Self {
        self.config.set_x_label(text);
        self
    }

    /// Set the y-axis label. Empty text is ignored.
    pub fn set_y_label(&mut self, text: &str) -> &mut Self {
        self.config.set_y_label(text);
        self
    }

    /// Set the title. Empty text is ignored.
    pub fn set_title(&mut self, text: &str) -> &mut Self {
        self.config.set_title(text);
        self
    }

    /// Set the output path (`.png`, `.jpg` or `.jpeg`).
    pub fn set_output_path<P: AsRef<Path>>(&mut self, path: P) -> &mut Self {
        self.config.set_output_path(path);
        self
    }

    /// Turn the grid on. A density of zero selects the default of 10 and
    /// densities above 800 are clamped to 800.
    pub fn enable_grid(&mut self, density: u32) -> &mut Self {
        self.config.enable_grid(density);
        self
    }

    /// Render a series into the framebuffer without exporting it.
    ///
    /// Labels are validated before any pixel is touched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LabelTooLong`] if a label exceeds the hard limit.
    pub fn render(&mut self, series: &SampleSeries<'_>) -> Result<Vec<LabelWarning>> {
        let config = &self.config;
        let labels = [
            ("x-axis label", config.x_label()),
            ("y-axis label", config.y_label()),
            ("title", config.title()),
        ];
        let mut warnings = Vec::new();
        for (name, text) in labels {
            warnings.extend(check_label(name, text)?);
        }

        let theme = *config.theme();
        let fb = &mut self.framebuffer;

        log::debug!("drawing canvas (grid: {:?})", config.grid());
        draw_background(fb, theme.background);
        draw_border(fb, theme.border);
        draw_grid(fb, theme.grid, config.grid());

        let center_x = i64::from(WIDTH / 2);
        let center_y = i64::from(HEIGHT / 2);
        draw_text(
            fb,
            config.x_label(),
            TextLayout::Horizontal { center_x, top: X_LABEL_TOP },
            LABEL_SCALE,
            theme.text,
        );
        draw_text(
            fb,
            config.y_label(),
            TextLayout::Vertical { left: Y_LABEL_LEFT, center_y },
            LABEL_SCALE,
            theme.text,
        );
        draw_text(
            fb,
            config.title(),
            TextLayout::Horizontal { center_x, top: TITLE_TOP },
            TITLE_SCALE,
            theme.text,
        );

        log::debug!("drawing {} points", series.len());
        draw_scatter(fb, series, theme.points)?;

        Ok(warnings)
    }

    /// Render `x` against `y` and write the image to the configured path.
    ///
    /// `length` must equal the length of both arrays.
    ///
    /// # Errors
    ///
    /// Fails without writing a file if the arrays are empty, differ in
    /// length or disagree with `length`, if the output extension is not
    /// supported, or if a label is too long. Encoder and I/O failures are
    /// also returned.
    pub fn plot(&mut self, x: &[f32], y: &[f32], length: usize) -> Result<PlotReport> {
        let series = SampleSeries::new(x, y)?;
        if length != series.len() {
            return Err(Error::LengthArgumentMismatch {
                expected: length,
                actual: series.len(),
            });
        }
        let path = self.config.output_path().to_path_buf();
        OutputFormat::from_path(&path)?;

        let warnings = self.render(&series)?;
        let format = output::write_to_file(&self.framebuffer, &path)?;

        Ok(PlotReport {
            path,
            format,
            points: series.len(),
            warnings,
        })
    }
}
