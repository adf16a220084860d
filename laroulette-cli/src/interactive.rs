use std::io::{self, Write};

use anyhow::{Context, Result};

use laroulette_core::stats::{compute_stats, detail_rows};
use laroulette_core::{Outcome, Thresholds};

use crate::display::{
    display_detail_table, display_recent, display_recommendations, display_stats,
    display_thresholds,
};
use crate::session::Session;

#[derive(Debug, PartialEq)]
enum InteractiveCommand {
    Add,
    Recommend,
    Recent,
    Stats,
    Table,
    Params,
    Clear,
    Quit,
}

fn parse_command(input: &str) -> Option<InteractiveCommand> {
    match input.trim().to_lowercase().as_str() {
        "1" | "ajouter" | "add" | "a" => Some(InteractiveCommand::Add),
        "2" | "recommandations" | "recommend" | "rec" => Some(InteractiveCommand::Recommend),
        "3" | "derniers" | "recent" | "hist" => Some(InteractiveCommand::Recent),
        "4" | "stats" | "statistiques" => Some(InteractiveCommand::Stats),
        "5" | "tableau" | "table" => Some(InteractiveCommand::Table),
        "6" | "parametres" | "paramètres" | "params" => Some(InteractiveCommand::Params),
        "7" | "effacer" | "clear" => Some(InteractiveCommand::Clear),
        "8" | "quitter" | "quit" | "q" | "exit" => Some(InteractiveCommand::Quit),
        _ => None,
    }
}

fn display_menu() {
    println!();
    println!("── Mode interactif ──");
    println!("  1. ajouter          Enregistrer un numéro (0-37, 00 accepté)");
    println!("  2. recommandations  Recommandations de mise");
    println!("  3. derniers         10 derniers numéros");
    println!("  4. stats            Statistiques générales");
    println!("  5. tableau          Tableau détaillé (20 derniers)");
    println!("  6. parametres       Modifier les seuils");
    println!("  7. effacer          Effacer l'historique");
    println!("  8. quitter          Quitter");
    println!();
}

fn prompt(msg: &str) -> Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Erreur de lecture")?;
    if read == 0 {
        anyhow::bail!("Fin de l'entrée");
    }
    Ok(input.trim().to_string())
}

fn prompt_with_default(msg: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}] : ", msg, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

fn prompt_outcome() -> Result<Outcome> {
    loop {
        let input = prompt("Numéro sorti (0-37, 37 = 00) : ")?;
        match input.parse::<Outcome>() {
            Ok(outcome) => return Ok(outcome),
            Err(e) => println!("{e}. Réessayez."),
        }
    }
}

fn prompt_bounded(msg: &str, current: usize, min: i64, max: i64) -> Result<i64> {
    loop {
        let input = prompt_with_default(msg, &current.to_string())?;
        match input.parse::<i64>() {
            Ok(v) if (min..=max).contains(&v) => return Ok(v),
            _ => println!("Valeur attendue entre {min} et {max}. Réessayez."),
        }
    }
}

fn cmd_add_interactive(session: &mut Session) -> Result<()> {
    let outcome = prompt_outcome()?;
    session.add(outcome);
    println!("Numéro {} ajouté !", outcome);
    display_recommendations(session.recommendations().as_deref());
    Ok(())
}

fn cmd_params_interactive(session: &mut Session) -> Result<()> {
    let current = *session.thresholds();
    display_thresholds(&current);
    let basic = prompt_bounded("Consécutifs pour les motifs basiques", current.basic(), 3, 20)?;
    let dozen = prompt_bounded("Consécutifs pour les douzaines", current.dozen(), 5, 30)?;
    let possibility =
        prompt_bounded("Consécutifs pour les possibilités", current.possibility(), 3, 20)?;
    session.set_thresholds(Thresholds::new(basic, dozen, possibility)?);
    println!("Paramètres mis à jour !");
    Ok(())
}

fn cmd_clear_interactive(session: &mut Session) -> Result<()> {
    let confirm = prompt("Effacer tout l'historique ? (o/n) : ")?;
    if confirm.to_lowercase() == "o" {
        session.clear();
        println!("Historique effacé !");
    } else {
        println!("Effacement annulé.");
    }
    Ok(())
}

pub fn run_interactive(session: &mut Session) -> Result<()> {
    println!("Bienvenue dans l'analyseur de roulette américaine !");

    loop {
        display_menu();
        let input = match prompt("> ") {
            Ok(s) => s,
            Err(_) => break, // EOF / Ctrl+D
        };

        if input.is_empty() {
            continue;
        }

        let result = match parse_command(&input) {
            Some(InteractiveCommand::Quit) => {
                println!("Au revoir !");
                break;
            }
            Some(InteractiveCommand::Add) => cmd_add_interactive(session),
            Some(InteractiveCommand::Recommend) => {
                display_recommendations(session.recommendations().as_deref());
                Ok(())
            }
            Some(InteractiveCommand::Recent) => {
                display_recent(&session.recent(10));
                Ok(())
            }
            Some(InteractiveCommand::Stats) => {
                display_stats(&compute_stats(session.history()));
                Ok(())
            }
            Some(InteractiveCommand::Table) => {
                display_detail_table(&detail_rows(session.history(), 20));
                Ok(())
            }
            Some(InteractiveCommand::Params) => cmd_params_interactive(session),
            Some(InteractiveCommand::Clear) => cmd_clear_interactive(session),
            None => {
                println!("Commande inconnue : '{}'. Tapez un numéro (1-8) ou un nom de commande.", input);
                Ok(())
            }
        };
        if let Err(e) = result {
            println!("Erreur: {e:#}");
        }
    }

    Ok(())
}
