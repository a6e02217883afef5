// File: crates/nobel-chart/src/config.rs
// Summary: Chart configuration (size, margins, labels, theme, STEM list) with TOML loading.

use std::fs;
use std::path::Path;

use chart_core::{Insets, RenderOptions};
use serde::Deserialize;

use crate::error::ConfigError;
use crate::group::{StemCategories, DEFAULT_STEM_CATEGORIES};

pub const DEFAULT_TITLE: &str = "Nobel Laureates in STEM vs Non-STEM by Year";

/// Everything the renderer needs besides the data. `width`/`height` are the
/// outer SVG size; the plot area is what remains inside the margins.
///
/// TOML keys are camelCase (`marginTop`, `xLabel`, `stemCategories`, ...);
/// omitted keys take their defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ChartConfig {
    pub margin_top: u32,
    pub margin_right: u32,
    pub margin_bottom: u32,
    pub margin_left: u32,
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub theme: String,
    pub stem_categories: Vec<String>,
    pub grid: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            margin_top: 50,
            margin_right: 30,
            margin_bottom: 60,
            margin_left: 70,
            width: 800,
            height: 400,
            title: DEFAULT_TITLE.to_string(),
            x_label: "Year".to_string(),
            y_label: "Number of Laureates".to_string(),
            theme: "light".to_string(),
            stem_categories: DEFAULT_STEM_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            grid: false,
        }
    }
}

impl ChartConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: ChartConfig = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        log::info!("Loading chart config from {}", path.display());
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let horizontal = self.margin_left.saturating_add(self.margin_right);
        let vertical = self.margin_top.saturating_add(self.margin_bottom);
        if horizontal >= self.width || vertical >= self.height {
            return Err(ConfigError::NoPlotArea { width: self.width, height: self.height, horizontal, vertical });
        }
        if chart_core::theme::lookup(&self.theme).is_none() {
            return Err(ConfigError::UnknownTheme(self.theme.clone()));
        }
        Ok(())
    }

    pub fn insets(&self) -> Insets {
        Insets::new(self.margin_left, self.margin_right, self.margin_top, self.margin_bottom)
    }

    pub fn stem_categories(&self) -> StemCategories {
        StemCategories::new(self.stem_categories.iter().cloned())
    }

    pub fn render_options(&self) -> Result<RenderOptions, ConfigError> {
        self.validate()?;
        let theme = chart_core::theme::lookup(&self.theme).ok_or_else(|| ConfigError::UnknownTheme(self.theme.clone()))?;
        Ok(RenderOptions {
            width: self.width as i32,
            height: self.height as i32,
            insets: self.insets(),
            theme,
            draw_grid: self.grid,
            ..RenderOptions::default()
        })
    }
}
