use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ratatui::style::Color;
use serde::Deserialize;

use crate::error::{AppError, Result};

const APP_DIR: &str = "course-menu";

/// 配置文件结构 (~/.config/course-menu/config.toml)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app_title: String,
    pub list_heading: String,
    pub accent: String,
    pub price_color: String,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_title: "Chrisoffel Menu".to_string(),
            list_heading: "Three Course Meals".to_string(),
            accent: "#FF5733".to_string(),
            price_color: "#28a745".to_string(),
            log_filter: "course_menu=info".to_string(),
        }
    }
}

impl AppConfig {
    /// 标题栏强调色，无法解析时回退到默认值
    pub fn accent_color(&self) -> Color {
        parse_color(&self.accent).unwrap_or(Color::Rgb(0xFF, 0x57, 0x33))
    }

    pub fn price_color(&self) -> Color {
        parse_color(&self.price_color).unwrap_or(Color::Rgb(0x28, 0xa7, 0x45))
    }
}

fn parse_color(value: &str) -> Option<Color> {
    match Color::from_str(value) {
        Ok(color) => Some(color),
        Err(_) => {
            tracing::debug!(value, "invalid colour in config, using default");
            None
        }
    }
}

/// 配置目录 (~/.config/course-menu/)
pub fn config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir()
        .ok_or(AppError::MissingDir("config"))?
        .join(APP_DIR);
    Ok(dir.join("config.toml"))
}

/// 数据目录 (~/.local/share/course-menu/)，日志写在这里
pub fn data_dir() -> Result<PathBuf> {
    let dir = dirs::data_dir()
        .ok_or(AppError::MissingDir("data"))?
        .join(APP_DIR);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// 从TOML文件加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|source| AppError::Config {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "app_title = \"Bistro\"\naccent = \"blue\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.app_title, "Bistro");
        assert_eq!(config.list_heading, "Three Course Meals");
        assert_eq!(config.accent_color(), Color::Blue);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "app_title = [").unwrap();

        match load_config(&path) {
            Err(AppError::Config { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_colours() {
        let config = AppConfig::default();
        assert_eq!(config.accent_color(), Color::Rgb(0xFF, 0x57, 0x33));
        assert_eq!(config.price_color(), Color::Rgb(0x28, 0xa7, 0x45));

        let bad = AppConfig {
            price_color: "not-a-colour".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(bad.price_color(), Color::Rgb(0x28, 0xa7, 0x45));
    }
}
