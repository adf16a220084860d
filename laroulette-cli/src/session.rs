use laroulette_core::{recommend_logged, Outcome, Recommendation, Thresholds};

/// Nombre de sorties à enregistrer avant de lancer l'analyse.
pub const MIN_ANALYSIS_LEN: usize = 3;

/// État de la session : historique (plus ancien en premier) et seuils.
#[derive(Debug, Clone, Default)]
pub struct Session {
    history: Vec<Outcome>,
    thresholds: Thresholds,
}

impl Session {
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            history: Vec::new(),
            thresholds,
        }
    }

    pub fn with_history(history: Vec<Outcome>, thresholds: Thresholds) -> Self {
        Self { history, thresholds }
    }

    pub fn add(&mut self, outcome: Outcome) {
        self.history.push(outcome);
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    pub fn history(&self) -> &[Outcome] {
        &self.history
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn set_thresholds(&mut self, thresholds: Thresholds) {
        self.thresholds = thresholds;
    }

    /// Les `n` dernières sorties, la plus récente d'abord.
    pub fn recent(&self, n: usize) -> Vec<Outcome> {
        self.history.iter().rev().take(n).copied().collect()
    }

    /// `None` tant que l'historique est trop court pour l'analyse.
    pub fn recommendations(&self) -> Option<Vec<Recommendation>> {
        if self.history.len() < MIN_ANALYSIS_LEN {
            return None;
        }
        Some(recommend_logged(&self.history, &self.thresholds))
    }
}
