// Demo settings, read from the environment so the binary needs no flags.
//
//   TILE_SPIRAL_WIDTH / TILE_SPIRAL_HEIGHT  window size in pixels (800x600)
//   TILE_SPIRAL_SEED                        fixed seed; unset = fresh spiral every run
//   TILE_SPIRAL_TILES                       tile budget (30)
//   TILE_SPIRAL_SNAPSHOT                    PNG path written on S (tile-spiral.png)

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub width: usize,
    pub height: usize,
    pub seed: Option<u64>,
    pub tile_count: usize,
    pub snapshot_path: PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            seed: None,
            tile_count: 30,
            snapshot_path: PathBuf::from("tile-spiral.png"),
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` but with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let mut cfg = Self::default();
        if let Some(v) = parse(&lookup, "TILE_SPIRAL_WIDTH")? {
            cfg.width = v;
        }
        if let Some(v) = parse(&lookup, "TILE_SPIRAL_HEIGHT")? {
            cfg.height = v;
        }
        cfg.seed = parse(&lookup, "TILE_SPIRAL_SEED")?;
        if let Some(v) = parse(&lookup, "TILE_SPIRAL_TILES")? {
            cfg.tile_count = v;
        }
        if let Some(v) = lookup("TILE_SPIRAL_SNAPSHOT").filter(|s| !s.trim().is_empty()) {
            cfg.snapshot_path = PathBuf::from(v);
        }
        if cfg.width == 0 || cfg.height == 0 {
            return Err(Error::Config(format!("window size {}x{} has no area", cfg.width, cfg.height)));
        }
        if cfg.width > i32::MAX as usize || cfg.height > i32::MAX as usize {
            return Err(Error::Config(format!("window size {}x{} too large", cfg.width, cfg.height)));
        }
        Ok(cfg)
    }
}

fn parse<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>, Error>
where
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| Error::Config(format!("{key}={raw:?}: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(DemoConfig::from_lookup(env(&[])).unwrap(), DemoConfig::default());
    }

    #[test]
    fn values_are_read() {
        let cfg = DemoConfig::from_lookup(env(&[
            ("TILE_SPIRAL_WIDTH", "1024"),
            ("TILE_SPIRAL_HEIGHT", " 768 "),
            ("TILE_SPIRAL_SEED", "42"),
            ("TILE_SPIRAL_TILES", "12"),
            ("TILE_SPIRAL_SNAPSHOT", "out/spiral.png"),
        ]))
        .unwrap();
        assert_eq!((cfg.width, cfg.height), (1024, 768));
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.tile_count, 12);
        assert_eq!(cfg.snapshot_path, PathBuf::from("out/spiral.png"));
    }

    #[test]
    fn garbage_is_a_config_error() {
        let err = DemoConfig::from_lookup(env(&[("TILE_SPIRAL_SEED", "abc")])).unwrap_err();
        assert!(matches!(err, Error::Config(ref m) if m.contains("TILE_SPIRAL_SEED")));
    }

    #[test]
    fn zero_window_is_rejected() {
        assert!(matches!(
            DemoConfig::from_lookup(env(&[("TILE_SPIRAL_WIDTH", "0")])),
            Err(Error::Config(_))
        ));
    }
}
