// src/app/clavier.rs
//
// Clavier -> Commande
// -------------------
// Même table pour la fenêtre (événements egui) et le mode script (--touches).
//
// Caractères :
//   0-9, a-f / A-F (repliés en majuscules), .  + - * / ^  %  =  ( )
// Touches :
//   Entrée = "=", Retour arrière = backspace, Échap = AC, Suppr = CE
//
// Scripts : mots séparés par des blancs. Un mot nommé (sin, nPr, pi, ms, hex, 2nd…)
// passe avant la lecture caractère par caractère ; "e" est donc la constante,
// "E" le chiffre hexadécimal.

use thiserror::Error;

use crate::noyau::{Base, Commande, Constante, FonctionBinaire, FonctionUnaire, Operateur};

/// Touches non textuelles reconnues (indépendantes d’egui).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Entree,
    Retour,
    Echap,
    Suppr,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurScript {
    #[error("mot inconnu dans le script : {mot:?} (mot n° {position})")]
    MotInconnu { mot: String, position: usize },

    #[error("index d’historique invalide : {0:?}")]
    IndexHistorique(String),
}

pub fn commande_pour_touche(t: Touche) -> Commande {
    match t {
        Touche::Entree => Commande::Equals,
        Touche::Retour => Commande::Backspace,
        Touche::Echap => Commande::ClearAll,
        Touche::Suppr => Commande::ClearEntry,
    }
}

pub fn commande_pour_caractere(c: char) -> Option<Commande> {
    let cmd = match c {
        '0'..='9' => Commande::Chiffre(c),
        'a'..='f' | 'A'..='F' => Commande::Chiffre(c.to_ascii_uppercase()),
        '.' => Commande::Decimal,
        '+' => Commande::Operation(Operateur::Plus),
        '-' => Commande::Operation(Operateur::Moins),
        '*' => Commande::Operation(Operateur::Fois),
        '/' => Commande::Operation(Operateur::Divise),
        '^' => Commande::Operation(Operateur::Puissance),
        '%' => Commande::Percent,
        '=' => Commande::Equals,
        '(' => Commande::OpenParen,
        ')' => Commande::CloseParen,
        _ => return None,
    };
    Some(cmd)
}

/// Mots nommés du mode script.
fn commande_pour_mot(mot: &str) -> Result<Option<Commande>, ErreurScript> {
    let cmd = match mot {
        "clear" | "ac" => Commande::ClearAll,
        "ce" => Commande::ClearEntry,
        "neg" | "±" => Commande::ToggleSign,
        "bs" => Commande::Backspace,
        "enter" => Commande::Equals,
        "2nd" => Commande::ToggleSecondFunction,
        "angle" => Commande::ToggleAngleMode,
        "mc" => Commande::MemoryClear,
        "mr" => Commande::MemoryRecall,
        "m+" => Commande::MemoryAdd,
        "m-" => Commande::MemorySubtract,
        "ms" => Commande::MemoryStore,
        "hist-clear" => Commande::ClearHistory,
        _ => {
            if let Some(index) = mot.strip_prefix("hist:") {
                let i = index
                    .parse::<usize>()
                    .map_err(|_| ErreurScript::IndexHistorique(index.to_string()))?;
                return Ok(Some(Commande::Historique(i)));
            }
            return Ok(commande_nommee(mot));
        }
    };
    Ok(Some(cmd))
}

/// Noms du noyau : bases, fonctions, constantes, opérateurs.
/// "nCr=" termine une fonction à deux arguments.
fn commande_nommee(mot: &str) -> Option<Commande> {
    if let Some(nom) = mot.strip_suffix('=') {
        if let Ok(f) = nom.parse::<FonctionBinaire>() {
            return Some(Commande::DeuxArgumentsEgal(f));
        }
    }

    // bases en minuscules seulement : "DEC" resterait ambigu avec les chiffres D, E, C
    if mot.chars().all(|c| c.is_ascii_lowercase()) {
        if let Ok(b) = mot.parse::<Base>() {
            return Some(Commande::Base(b));
        }
    }

    mot.parse::<FonctionUnaire>()
        .map(Commande::Scientifique)
        .or_else(|_| mot.parse::<FonctionBinaire>().map(Commande::DeuxArguments))
        .or_else(|_| mot.parse::<Constante>().map(Commande::Constante))
        .or_else(|_| mot.parse::<Operateur>().map(Commande::Operation))
        .ok()
}

/// Découpe un script en commandes. Premier mot illisible => erreur (rien n’est joué).
pub fn lire_script(script: &str) -> Result<Vec<Commande>, ErreurScript> {
    let mut cmds = Vec::new();

    for (position, mot) in script.split_whitespace().enumerate() {
        if let Some(cmd) = commande_pour_mot(mot)? {
            cmds.push(cmd);
            continue;
        }

        let lettres: Option<Vec<Commande>> = mot.chars().map(commande_pour_caractere).collect();
        match lettres {
            Some(mut v) => cmds.append(&mut v),
            None => {
                return Err(ErreurScript::MotInconnu {
                    mot: mot.to_string(),
                    position: position + 1,
                })
            }
        }
    }

    Ok(cmds)
}
