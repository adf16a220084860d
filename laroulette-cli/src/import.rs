use std::path::Path;

use anyhow::{Context, Result};

use laroulette_core::Outcome;

pub struct ImportResult {
    pub history: Vec<Outcome>,
    pub total_records: u32,
    pub errors: u32,
}

/// Chaque champ non vide d'un enregistrement est un numéro ; les enregistrements
/// sont lus dans l'ordre chronologique.
fn parse_record(record: &csv::StringRecord) -> Result<Vec<Outcome>> {
    record
        .iter()
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(|field| {
            field
                .parse::<Outcome>()
                .with_context(|| format!("Numéro invalide : '{}'", field))
        })
        .collect()
}

pub fn import_csv(path: &Path, delimiter: u8, has_headers: bool) -> Result<ImportResult> {
    let reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(has_headers)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Impossible d'ouvrir {:?}", path))?;
    Ok(read_records(reader))
}

fn read_records<R: std::io::Read>(mut reader: csv::Reader<R>) -> ImportResult {
    let mut result = ImportResult {
        history: Vec::new(),
        total_records: 0,
        errors: 0,
    };

    for record_result in reader.records() {
        result.total_records += 1;
        match record_result {
            Ok(record) => match parse_record(&record) {
                Ok(outcomes) => result.history.extend(outcomes),
                Err(e) => {
                    log::warn!("Erreur parsing ligne {}: {:#}", result.total_records, e);
                    result.errors += 1;
                }
            },
            Err(e) => {
                log::warn!("Erreur lecture ligne {}: {}", result.total_records, e);
                result.errors += 1;
            }
        }
    }

    result
}
