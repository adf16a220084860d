use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use laroulette_core::Thresholds;

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum Preset {
    /// 5 / 10 / 5
    #[default]
    Default,
    /// 5 / 9 / 7
    Alternate,
}

impl Preset {
    pub fn thresholds(&self) -> Thresholds {
        match self {
            Preset::Default => Thresholds::default(),
            Preset::Alternate => Thresholds::ALTERNATE,
        }
    }
}

#[derive(Debug, Clone, Args, Default)]
pub struct ThresholdArgs {
    /// Fichier JSON de seuils (basic_threshold, dozen_threshold, possibility_threshold)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Jeu de seuils de départ
    #[arg(long, value_enum, global = true, default_value = "default")]
    pub preset: Preset,

    /// Consécutifs pour les motifs basiques (couleur, parité, moitié)
    #[arg(long, global = true, value_parser = clap::value_parser!(i64).range(3..=20))]
    pub basic: Option<i64>,

    /// Consécutifs pour le motif des douzaines
    #[arg(long, global = true, value_parser = clap::value_parser!(i64).range(5..=30))]
    pub dozens: Option<i64>,

    /// Consécutifs pour les possibilités
    #[arg(long, global = true, value_parser = clap::value_parser!(i64).range(3..=20))]
    pub possibility: Option<i64>,
}

impl ThresholdArgs {
    /// Préréglage, puis fichier, puis options de la ligne de commande.
    pub fn resolve(&self) -> Result<Thresholds> {
        let base = match &self.config {
            Some(path) => load_thresholds(path)?,
            None => self.preset.thresholds(),
        };
        let thresholds = Thresholds::new(
            self.basic.unwrap_or(base.basic() as i64),
            self.dozens.unwrap_or(base.dozen() as i64),
            self.possibility.unwrap_or(base.possibility() as i64),
        )?;
        log::debug!("Seuils effectifs : {:?}", thresholds);
        Ok(thresholds)
    }
}

pub fn load_thresholds(path: &Path) -> Result<Thresholds> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let thresholds: Thresholds = serde_json::from_str(&json)
        .with_context(|| format!("JSON invalide dans {}", path.display()))?;
    Ok(thresholds)
}

pub fn save_thresholds(path: &Path, thresholds: &Thresholds) -> Result<()> {
    let json = serde_json::to_string_pretty(thresholds)?;
    std::fs::write(path, json)
        .with_context(|| format!("Impossible d'écrire {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let args = ThresholdArgs::default();
        assert_eq!(args.resolve().unwrap(), Thresholds::default());
    }

    #[test]
    fn test_resolve_preset_and_override() {
        let args = ThresholdArgs {
            preset: Preset::Alternate,
            possibility: Some(3),
            ..ThresholdArgs::default()
        };
        let t = args.resolve().unwrap();
        assert_eq!(t.basic(), 5);
        assert_eq!(t.dozen(), 9);
        assert_eq!(t.possibility(), 3);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seuils.json");
        save_thresholds(&path, &Thresholds::ALTERNATE).unwrap();
        assert_eq!(load_thresholds(&path).unwrap(), Thresholds::ALTERNATE);

        let args = ThresholdArgs {
            config: Some(path),
            basic: Some(4),
            ..ThresholdArgs::default()
        };
        let t = args.resolve().unwrap();
        assert_eq!(t.basic(), 4);
        assert_eq!(t.dozen(), 9);
    }

    #[test]
    fn test_load_rejects_zero_threshold() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seuils.json");
        std::fs::write(
            &path,
            r#"{"basic_threshold": 0, "dozen_threshold": 10, "possibility_threshold": 5}"#,
        )
        .unwrap();
        assert!(load_thresholds(&path).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_thresholds(Path::new("/nonexistent/seuils.json")).is_err());
    }
}
