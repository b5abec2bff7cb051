use crate::i18n::Language;
use crate::shapes::Shape;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Language the report is rendered in
    pub language: Language,

    /// JSON file holding the shapes; standard input when unset
    pub shapes_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Numeric id ("1", "2") or ISO code ("es", "en")
            language: std::env::var("REPORT_LANGUAGE")
                .map(|v| Language::parse_or_default(&v))
                .unwrap_or_default(),

            shapes_file: std::env::var("SHAPES_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    /// Read and validate the configured shapes.
    pub fn load_shapes(&self) -> Result<Vec<Shape>> {
        let json = match &self.shapes_file {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read shapes file {}", path.display()))?,
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read shapes from stdin")?;
                buf
            }
        };

        parse_shapes(&json)
    }
}

/// Parse a JSON array of shapes.
pub fn parse_shapes(json: &str) -> Result<Vec<Shape>> {
    serde_json::from_str(json).context("Failed to parse shapes JSON")
}
