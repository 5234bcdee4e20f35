// src/config.rs
//
// Réglages de démarrage (natif)
// -----------------------------
// Fichier TOML, tous les champs optionnels :
//
//   radians = false      # démarrer en DEG
//   base = "HEX"         # DEC | HEX | OCT | BIN (minuscules acceptées)
//   journal = "debug"    # filtre tracing (RUST_LOG reste prioritaire)
//
// Recherche : --config <chemin> (doit exister), sinon
// <config_dir>/calculatrice-sci/config.toml (facultatif).
// Rien n’est jamais réécrit.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::noyau::Base;

const DOSSIER: &str = "calculatrice-sci";
const FICHIER: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ErreurConfig {
    #[error("lecture de {} impossible", .chemin.display())]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("configuration {} invalide", .chemin.display())]
    Syntaxe {
        chemin: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub radians: bool,
    pub base: Base,
    pub journal: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            radians: true,
            base: Base::Dec,
            journal: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn depuis_toml(texte: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(texte)
    }

    /// Les options de la ligne de commande l’emportent sur le fichier.
    pub fn surcharger(&mut self, base: Option<Base>, radians: Option<bool>, journal: Option<&str>) {
        if let Some(b) = base {
            self.base = b;
        }
        if let Some(r) = radians {
            self.radians = r;
        }
        if let Some(j) = journal {
            self.journal = j.to_string();
        }
    }
}

pub fn chemin_par_defaut() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(DOSSIER).join(FICHIER))
}

/// Chemin explicite : doit exister. Sinon : fichier par défaut s’il existe, sinon défauts.
pub fn charger(explicite: Option<&Path>) -> Result<Config, ErreurConfig> {
    if let Some(chemin) = explicite {
        return lire(chemin);
    }

    match chemin_par_defaut() {
        Some(chemin) if chemin.is_file() => lire(&chemin),
        _ => Ok(Config::default()),
    }
}

fn lire(chemin: &Path) -> Result<Config, ErreurConfig> {
    let texte = fs::read_to_string(chemin).map_err(|source| ErreurConfig::Lecture {
        chemin: chemin.to_path_buf(),
        source,
    })?;

    Config::depuis_toml(&texte).map_err(|source| ErreurConfig::Syntaxe {
        chemin: chemin.to_path_buf(),
        source,
    })
}
