mod display;
mod import;
mod interactive;
mod session;
mod settings;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use laroulette_core::stats::compute_stats;
use laroulette_core::{Outcome, Thresholds};

use crate::display::{
    display_attributes, display_import_summary, display_recent, display_recommendations,
    display_stats, display_thresholds,
};
use crate::session::Session;
use crate::settings::{save_thresholds, ThresholdArgs};

#[derive(Parser)]
#[command(name = "laroulette", about = "Analyseur de séries pour la roulette américaine")]
struct Cli {
    #[command(flatten)]
    thresholds: ThresholdArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyser une suite de numéros (du plus ancien au plus récent)
    Analyze {
        /// Numéros sortis (0-37, 00 accepté)
        #[arg(required = true)]
        numbers: Vec<String>,

        /// Sortie JSON
        #[arg(long)]
        json: bool,
    },

    /// Afficher les attributs d'un numéro
    Classify {
        /// Numéro (0-37, 00 accepté)
        number: String,
    },

    /// Importer un historique depuis un fichier CSV puis l'analyser
    Import {
        /// Chemin vers le fichier CSV
        #[arg(short, long)]
        file: PathBuf,

        /// Séparateur de champs
        #[arg(short, long, default_value = ";")]
        delimiter: char,

        /// La première ligne est un en-tête
        #[arg(long)]
        header: bool,

        /// Sortie JSON
        #[arg(long)]
        json: bool,
    },

    /// Afficher les seuils effectifs
    Config {
        /// Enregistrer les seuils dans un fichier JSON
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Mode interactif (REPL)
    Interactive,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let thresholds = cli.thresholds.resolve()?;

    match cli.command {
        Command::Analyze { numbers, json } => cmd_analyze(&numbers, thresholds, json),
        Command::Classify { number } => cmd_classify(&number),
        Command::Import {
            file,
            delimiter,
            header,
            json,
        } => cmd_import(&file, delimiter, header, thresholds, json),
        Command::Config { save } => cmd_config(&thresholds, save),
        Command::Interactive => interactive::run_interactive(&mut Session::new(thresholds)),
    }
}

fn parse_numbers(numbers: &[String]) -> Result<Vec<Outcome>> {
    numbers
        .iter()
        .map(|s| s.parse::<Outcome>().with_context(|| format!("Numéro invalide : '{}'", s)))
        .collect()
}

fn report(session: &Session, json: bool) -> Result<()> {
    let recommendations = session.recommendations();
    if json {
        let list = recommendations.unwrap_or_default();
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }
    display_recent(&session.recent(10));
    display_recommendations(recommendations.as_deref());
    Ok(())
}

fn cmd_analyze(numbers: &[String], thresholds: Thresholds, json: bool) -> Result<()> {
    let history = parse_numbers(numbers)?;
    report(&Session::with_history(history, thresholds), json)
}

fn cmd_classify(number: &str) -> Result<()> {
    let outcome = number
        .parse::<Outcome>()
        .with_context(|| format!("Numéro invalide : '{}'", number))?;
    display_attributes(outcome);
    Ok(())
}

fn cmd_import(
    file: &Path,
    delimiter: char,
    header: bool,
    thresholds: Thresholds,
    json: bool,
) -> Result<()> {
    let delimiter = u8::try_from(delimiter).context("Le séparateur doit être un caractère ASCII")?;
    let result = import::import_csv(file, delimiter, header)?;
    if !json {
        display_import_summary(&result);
        display_stats(&compute_stats(&result.history));
    }
    report(&Session::with_history(result.history, thresholds), json)
}

fn cmd_config(thresholds: &Thresholds, save: Option<PathBuf>) -> Result<()> {
    display_thresholds(thresholds);
    if let Some(path) = save {
        save_thresholds(&path, thresholds)?;
        println!("\nSeuils sauvegardés dans {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_numbers() {
        let args: Vec<String> = ["1", "00", "0", "36"].iter().map(|s| s.to_string()).collect();
        let values: Vec<u8> = parse_numbers(&args).unwrap().iter().map(|o| o.value()).collect();
        assert_eq!(values, vec![1, 37, 0, 36]);
        assert!(parse_numbers(&["38".to_string()]).is_err());
    }

    #[test]
    fn test_threshold_flags_bounds() {
        let cli = Cli::try_parse_from(["laroulette", "--basic", "4", "analyze", "1", "3"]).unwrap();
        assert_eq!(cli.thresholds.basic, Some(4));
        assert!(Cli::try_parse_from(["laroulette", "--basic", "2", "analyze", "1"]).is_err());
        assert!(Cli::try_parse_from(["laroulette", "--dozens", "31", "analyze", "1"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["laroulette", "analyze", "1", "--preset", "alternate"]).unwrap();
        assert_eq!(cli.thresholds.resolve().unwrap(), Thresholds::ALTERNATE);
    }
}
