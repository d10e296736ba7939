use std::{
    collections::HashMap,
    env, fs,
    path::PathBuf,
    time::Duration,
};

use directories::BaseDirs;

use crate::error::{Result, ReviewError};

#[derive(Debug, Clone)]
pub struct Config {
    inner: HashMap<String, String>,
    pub config_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        let mut map = default_map();
        let config_path = default_config_path();

        // Read .reviewrc if exists
        if let Ok(text) = fs::read_to_string(&config_path) {
            map.extend(parse_rc(&text));
        }

        // Overlay environment variables (take precedence)
        for (k, v) in env::vars() {
            if is_config_key(&k) {
                map.insert(k, v);
            }
        }

        Self { inner: map, config_path }
    }

    /// Defaults overlaid with `pairs`; ignores the rc file and the environment.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = default_map();
        for (k, v) in pairs {
            map.insert(k.into(), v.into());
        }
        Self { inner: map, config_path: default_config_path() }
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.inner.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key).cloned()
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(|v| v.trim().parse::<u64>().ok())
    }

    pub fn get_path(&self, key: &str) -> Option<PathBuf> {
        self.get(key).map(PathBuf::from)
    }

    /// Value for `key`, rejecting missing or blank entries.
    pub fn require(&self, key: &str) -> Result<String> {
        self.get(key)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                ReviewError::config(format!(
                    "missing {key}. Set it in env or {}",
                    self.config_path.display()
                ))
            })
    }

    pub fn request_timeout(&self) -> Duration {
        let secs = self.get_u64("REQUEST_TIMEOUT").filter(|&s| s > 0);
        Duration::from_secs(secs.unwrap_or(60))
    }

    pub fn papers_dir(&self) -> PathBuf {
        self.get_path("PAPERS_DIR").unwrap_or_else(|| PathBuf::from("papers"))
    }

    pub fn report_path(&self) -> PathBuf {
        self.get_path("REPORT_PATH")
            .unwrap_or_else(|| PathBuf::from("risultati_confronto.xlsx"))
    }
}

/// Parse `KEY=VALUE` lines, skipping blanks and `#` comments.
fn parse_rc(text: &str) -> Vec<(String, String)> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect()
}

fn is_config_key(k: &str) -> bool {
    const KEYS: &[&str] = &[
        "GEMINI_API_KEY",
        "GEMINI_API_BASE",
        "GEMINI_MODEL",
        "OPENAI_API_KEY",
        "OPENAI_MODEL",
        "API_BASE_URL",
        "REQUEST_TIMEOUT",
        "PAPERS_DIR",
        "REPORT_PATH",
    ];

    KEYS.contains(&k)
}

fn default_config_path() -> PathBuf {
    let base = BaseDirs::new()
        .map(|b| b.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config"));
    base.join("paper_review").join(".reviewrc")
}

fn default_map() -> HashMap<String, String> {
    let mut m = HashMap::new();

    m.insert("PAPERS_DIR".into(), "papers".into());
    m.insert("REPORT_PATH".into(), "risultati_confronto.xlsx".into());
    m.insert("REQUEST_TIMEOUT".into(), "60".into());

    m.insert("GEMINI_MODEL".into(), "models/gemini-flash-latest".into());
    m.insert(
        "GEMINI_API_BASE".into(),
        "https://generativelanguage.googleapis.com/v1beta".into(),
    );
    m.insert("OPENAI_MODEL".into(), "gpt-5.1".into());
    m.insert("API_BASE_URL".into(), "default".into());

    // No default for GEMINI_API_KEY / OPENAI_API_KEY.
    m
}
