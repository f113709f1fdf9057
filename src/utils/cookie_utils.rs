use axum::http::{HeaderMap, header::COOKIE};
use std::collections::HashMap;

/// Anything that can hand back the raw (undecoded) value of a named cookie.
pub trait CookieSource {
    fn cookie(&self, name: &str) -> Option<String>;
}

/// Name to raw value mapping built from a combined `a=1; b=2` cookie string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    entries: HashMap<String, String>,
}

impl CookieJar {
    pub fn parse(raw: &str) -> Self {
        let mut jar = CookieJar::default();
        jar.extend_from(raw);
        jar
    }

    /// Adds the entries of `raw`; a repeated name overwrites the earlier value.
    fn extend_from(&mut self, raw: &str) {
        for entry in raw.split(';') {
            let Some((key, value)) = entry.trim().split_once('=') else {
                continue;
            };
            if key.is_empty() || value.is_empty() {
                continue;
            }
            self.entries.insert(key.to_string(), value.to_string());
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CookieSource for CookieJar {
    fn cookie(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_string)
    }
}

impl CookieSource for HeaderMap {
    fn cookie(&self, name: &str) -> Option<String> {
        let mut jar = CookieJar::default();
        for header in self.get_all(COOKIE) {
            if let Ok(raw) = header.to_str() {
                jar.extend_from(raw);
            }
        }
        jar.get(name).map(str::to_string)
    }
}
