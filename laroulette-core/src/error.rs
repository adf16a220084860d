use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouletteError {
    #[error("Numéro {0} hors limites (0-37, 37 = 00)")]
    InvalidOutcome(i64),

    #[error("Seuil invalide pour {name} : {value} (doit être strictement positif)")]
    InvalidConfiguration { name: &'static str, value: i64 },

    #[error("Impossible de lire le numéro '{0}'")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, RouletteError>;
