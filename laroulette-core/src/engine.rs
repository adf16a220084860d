use std::fmt;

use serde::Serialize;

use crate::config::Thresholds;
use crate::dozens::detect_dozen_gap;
use crate::models::{Color, Dozen, Half, Outcome, Parity, PossibilitySet};
use crate::observer::{DetectionObserver, LogObserver, PatternName};
use crate::streak::{color_streak, half_streak, parity_streak, possibility_streak, Streak};

/// Catégorie d'une recommandation, utilisée uniquement pour la présentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Basic,
    Dozen,
    Possibility,
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternKind::Basic => write!(f, "basique"),
            PatternKind::Dozen => write!(f, "douzaines"),
            PatternKind::Possibility => write!(f, "possibilités"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "attribute", content = "value", rename_all = "lowercase")]
pub enum Bet {
    Color(Color),
    Parity(Parity),
    Half(Half),
    Dozen(Dozen),
    Possibility(PossibilitySet),
}

impl fmt::Display for Bet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bet::Color(c) => write!(f, "{c}"),
            Bet::Parity(p) => write!(f, "{p}"),
            Bet::Half(h) => write!(f, "{h}"),
            Bet::Dozen(d) => write!(f, "{d}"),
            Bet::Possibility(p) => write!(f, "{p}"),
        }
    }
}

/// Enregistrement de sortie. `suggested_value` est la forme affichée de `bet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub suggested_value: String,
    pub pattern_kind: PatternKind,
    pub run_length: usize,
    pub detail: String,
    pub bet: Bet,
}

impl Recommendation {
    pub fn new(bet: Bet, pattern_kind: PatternKind, run_length: usize, detail: String) -> Self {
        Self {
            suggested_value: bet.to_string(),
            pattern_kind,
            run_length,
            detail,
            bet,
        }
    }

    fn basic<T: fmt::Display>(pattern: PatternName, streak: &Streak<T>, bet: Bet) -> Self {
        Self::new(
            bet,
            PatternKind::Basic,
            streak.length,
            format!(
                "{} sorties consécutives en {} ({})",
                streak.length, pattern, streak.value
            ),
        )
    }
}

/// Recommandations pour l'historique donné (plus ancien en premier).
///
/// Ordre fixe : couleur, parité, moitié, douzaines, possibilités. Chaque
/// recommandation mise sur le contraire de la série détectée, ou sur la
/// douzaine absente.
pub fn recommend(
    history: &[Outcome],
    thresholds: &Thresholds,
    observer: &dyn DetectionObserver,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    let basic = thresholds.basic();

    if let Some(streak) = color_streak(history, basic, observer) {
        if let Some(opposite) = streak.value.complement() {
            recommendations.push(Recommendation::basic(
                PatternName::Color,
                &streak,
                Bet::Color(opposite),
            ));
        }
    }
    if let Some(streak) = parity_streak(history, basic, observer) {
        let bet = Bet::Parity(streak.value.complement());
        recommendations.push(Recommendation::basic(PatternName::Parity, &streak, bet));
    }
    if let Some(streak) = half_streak(history, basic, observer) {
        let bet = Bet::Half(streak.value.complement());
        recommendations.push(Recommendation::basic(PatternName::Half, &streak, bet));
    }

    if let Some(gap) = detect_dozen_gap(history, thresholds.dozen(), observer) {
        let [a, b] = gap.present;
        recommendations.push(Recommendation::new(
            Bet::Dozen(gap.missing),
            PatternKind::Dozen,
            gap.length,
            format!(
                "{} numéros consécutifs dans les douzaines {} et {}",
                gap.length,
                a.number(),
                b.number()
            ),
        ));
    }

    if let Some(streak) = possibility_streak(history, thresholds.possibility(), observer) {
        recommendations.push(Recommendation::new(
            Bet::Possibility(streak.value.complement()),
            PatternKind::Possibility,
            streak.length,
            format!("{} numéros consécutifs de {}", streak.length, streak.value),
        ));
    }

    recommendations
}

pub fn recommend_logged(history: &[Outcome], thresholds: &Thresholds) -> Vec<Recommendation> {
    let recommendations = recommend(history, thresholds, &LogObserver);
    log::info!(
        "{} recommandation(s) sur {} sorties",
        recommendations.len(),
        history.len()
    );
    recommendations
}
