use comfy_table::{presets::UTF8_FULL, Cell, Color as CellColor, ContentArrangement, Table};

use crate::import::ImportResult;
use crate::session::MIN_ANALYSIS_LEN;
use laroulette_core::stats::{DetailRow, HistoryStats};
use laroulette_core::{Color, Outcome, PatternKind, Recommendation, Thresholds};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn color_marker(color: Color) -> &'static str {
    match color {
        Color::Red => "🔴",
        Color::Black => "⚫",
        Color::Green => "🟢",
    }
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "—".to_string())
}

pub fn display_recommendations(recommendations: Option<&[Recommendation]>) {
    println!("\n🎯 Recommandations\n");

    let Some(recommendations) = recommendations else {
        println!("Enregistrez au moins {} numéros pour commencer l'analyse.", MIN_ANALYSIS_LEN);
        return;
    };
    if recommendations.is_empty() {
        println!("Aucun motif détecté. Continuez à enregistrer des numéros...");
        return;
    }

    let mut table = new_table(vec!["Miser sur", "Motif", "Série", "Détail"]);
    for rec in recommendations {
        let color = match rec.pattern_kind {
            PatternKind::Basic => CellColor::Red,
            PatternKind::Dozen => CellColor::Yellow,
            PatternKind::Possibility => CellColor::Cyan,
        };
        table.add_row(vec![
            Cell::new(&rec.suggested_value).fg(color),
            Cell::new(rec.pattern_kind.to_string()),
            Cell::new(rec.run_length),
            Cell::new(&rec.detail),
        ]);
    }
    println!("{table}");
}

/// `recent` est attendu du plus récent au plus ancien.
pub fn display_recent(recent: &[Outcome]) {
    if recent.is_empty() {
        println!("Aucun numéro enregistré.");
        return;
    }

    println!("\n🔢 Derniers {} numéros", recent.len());
    for (i, outcome) in recent.iter().enumerate() {
        let color = outcome.color();
        println!(
            "{:2}. {} {:>2} - {}",
            recent.len() - i,
            color_marker(color),
            outcome.to_string(),
            color
        );
    }
}

pub fn display_stats(stats: &HistoryStats) {
    println!("\n📊 Statistiques générales\n");

    let mut table = new_table(vec!["Total", "Rouges", "Noirs", "Verts (0/00)"]);
    table.add_row(vec![
        stats.total.to_string(),
        stats.red.to_string(),
        stats.black.to_string(),
        stats.green.to_string(),
    ]);
    println!("{table}");
}

pub fn display_detail_table(rows: &[DetailRow]) {
    if rows.is_empty() {
        println!("Aucun numéro à afficher.");
        return;
    }

    let mut table = new_table(vec![
        "#", "Numéro", "Couleur", "Parité", "Moitié", "Douzaine", "Possibilité",
    ]);
    for row in rows {
        let attrs = &row.attributes;
        table.add_row(vec![
            row.position.to_string(),
            row.outcome.to_string(),
            attrs.color.to_string(),
            or_dash(attrs.parity),
            or_dash(attrs.half),
            or_dash(attrs.dozen),
            or_dash(attrs.possibility),
        ]);
    }
    println!("{table}");
}

pub fn display_attributes(outcome: Outcome) {
    let attrs = outcome.attributes();
    let mut table = new_table(vec!["Attribut", "Valeur"]);
    table.add_row(vec!["Numéro".to_string(), outcome.to_string()]);
    table.add_row(vec![
        "Couleur".to_string(),
        format!("{} {}", color_marker(attrs.color), attrs.color),
    ]);
    table.add_row(vec!["Parité".to_string(), or_dash(attrs.parity)]);
    table.add_row(vec!["Moitié".to_string(), or_dash(attrs.half)]);
    table.add_row(vec!["Douzaine".to_string(), or_dash(attrs.dozen)]);
    table.add_row(vec!["Possibilité".to_string(), or_dash(attrs.possibility)]);
    println!("{table}");
}

pub fn display_thresholds(thresholds: &Thresholds) {
    let mut table = new_table(vec!["Paramètre", "Consécutifs"]);
    table.add_row(vec![
        "Motifs basiques (couleur, parité, moitié)".to_string(),
        thresholds.basic().to_string(),
    ]);
    table.add_row(vec!["Douzaines".to_string(), thresholds.dozen().to_string()]);
    table.add_row(vec![
        "Possibilités".to_string(),
        thresholds.possibility().to_string(),
    ]);
    println!("{table}");
}

pub fn display_import_summary(result: &ImportResult) {
    println!("Import terminé :");
    println!("  Total lignes lues : {}", result.total_records);
    println!("  Numéros importés  : {}", result.history.len());
    if result.errors > 0 {
        println!("  Erreurs           : {}", result.errors);
    }
}
