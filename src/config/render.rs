use crate::error::{LowPolyError, Result};
use crate::pipeline::RenderParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for the `lowpoly` tool.
#[derive(Clone, Debug, Deserialize)]
pub struct RenderToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub render: RenderParams,
    #[serde(default)]
    pub output: RenderOutputConfig,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenderOutputConfig {
    /// Directory for the SVG; defaults to the input's directory.
    pub dir: Option<PathBuf>,
    /// Where to write the conversion report as JSON.
    pub report_json: Option<PathBuf>,
}

impl RenderToolConfig {
    /// Directory the SVG document lands in.
    pub fn output_dir(&self) -> PathBuf {
        match &self.output.dir {
            Some(dir) => dir.clone(),
            None => self
                .input
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<RenderToolConfig> {
    let contents = fs::read_to_string(path).map_err(|e| LowPolyError::Config {
        path: path.to_path_buf(),
        message: format!("failed to read: {e}"),
    })?;
    serde_json::from_str(&contents).map_err(|e| LowPolyError::Config {
        path: path.to_path_buf(),
        message: format!("failed to parse: {e}"),
    })
}
