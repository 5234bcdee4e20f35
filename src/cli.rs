// src/cli.rs
//
// Ligne de commande (natif)
// -------------------------
// Sans --touches : la fenêtre s’ouvre.
// Avec --touches : le script est rejoué sans fenêtre, via la même table clavier,
// puis les champs observables sont écrits sur stdout (texte ou JSON).

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::app::clavier::{lire_script, ErreurScript};
use crate::noyau::base::format_pour_base;
use crate::noyau::{Base, EtatCalcul};

#[derive(Parser, Debug)]
#[command(name = "calculatrice-sci", version, about = "Calculatrice scientifique (DEC/HEX/OCT/BIN)")]
pub struct Args {
    /// Fichier de configuration TOML
    #[arg(short, long, value_name = "CHEMIN")]
    pub config: Option<PathBuf>,

    /// Base de départ (DEC, HEX, OCT, BIN)
    #[arg(short, long)]
    pub base: Option<Base>,

    /// Démarrer en degrés
    #[arg(long, conflicts_with = "radians")]
    pub degres: bool,

    /// Démarrer en radians
    #[arg(long)]
    pub radians: bool,

    /// Filtre du journal (ex. "debug", "calculatrice_sci=trace")
    #[arg(long, value_name = "FILTRE")]
    pub journal: Option<String>,

    /// Rejoue une suite de touches sans fenêtre, ex. "2*(3+4)=" ou "16 sqrt hex"
    #[arg(short, long, value_name = "SCRIPT")]
    pub touches: Option<String>,

    /// Sortie JSON (avec --touches)
    #[arg(long, requires = "touches")]
    pub json: bool,
}

impl Args {
    /// Some(true) = radians, Some(false) = degrés, None = laisser la config décider.
    pub fn mode_angle(&self) -> Option<bool> {
        if self.degres {
            Some(false)
        } else if self.radians {
            Some(true)
        } else {
            None
        }
    }
}

/// Joue le script depuis `depart`. Script illisible => rien n’est joué.
pub fn rejouer(script: &str, depart: EtatCalcul) -> Result<EtatCalcul, ErreurScript> {
    let cmds = lire_script(script)?;
    info!(commandes = cmds.len(), "rejeu du script");
    Ok(cmds.iter().fold(depart, |e, c| e.appliquer(c)))
}

pub fn rendu_texte(e: &EtatCalcul) -> String {
    let obs = e.observables();
    let mut s = String::new();

    let _ = writeln!(s, "affichage   : {}", obs.display);
    let _ = writeln!(s, "expression  : {}", obs.expression);
    match obs.memory {
        Some(m) => {
            let _ = writeln!(s, "mémoire     : {m}");
        }
        None => {
            let _ = writeln!(s, "mémoire     : -");
        }
    }
    let _ = writeln!(
        s,
        "mode        : {} {}{}",
        obs.number_base,
        if obs.is_radians { "RAD" } else { "DEG" },
        if obs.is_second_function { " 2nd" } else { "" }
    );
    if let (Some(g), Some(op)) = (e.valeur_precedente(), e.operation()) {
        let _ = writeln!(s, "en attente  : {}", op.trace(&format_pour_base(g, e.base), "…"));
    }
    if obs.parentheses_count > 0 {
        let _ = writeln!(s, "parenthèses : {}", obs.parentheses_count);
    }
    let _ = writeln!(s, "historique  : {} entrée(s)", e.historique.len());
    for h in &obs.history {
        let _ = writeln!(s, "  {} = {}", h.expression, h.resultat);
    }
    s
}

pub fn rendu_json(e: &EtatCalcul) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&e.observables())
}
