// src/noyau/format.rs
//
// Présentation de l’affichage (écran seulement)
// ---------------------------------------------
// L’état garde le texte complet ; l’écran raccourcit les textes de plus de 12 caractères :
// - |x| >= 1e10 ou 0 < |x| < 1e-6 : notation exponentielle, 6 décimales ("1.234568e+15")
// - sinon : 10 chiffres significatifs ("3.141592654")
// Hors DEC, le texte est affiché tel quel.

use super::base::{parse_float, Base};

/// Longueur au-delà de laquelle l’écran raccourcit.
pub const LONGUEUR_ECRAN: usize = 12;

pub fn format_affichage(affichage: &str, base: Base) -> String {
    if base != Base::Dec || affichage.chars().count() <= LONGUEUR_ECRAN {
        return affichage.to_string();
    }

    let v = parse_float(affichage);
    if !v.is_finite() {
        return affichage.to_string();
    }

    let a = v.abs();
    if a >= 1e10 || (a < 1e-6 && v != 0.0) {
        exponentielle(v, 6)
    } else {
        precision(v, 10)
    }
}

/// `decimales` chiffres après la virgule, exposant signé ("e+10", "e-7").
fn exponentielle(v: f64, decimales: usize) -> String {
    let s = format!("{v:.decimales$e}");
    match s.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => s,
    }
}

/// `chiffres` chiffres significatifs, zéros de queue conservés.
fn precision(v: f64, chiffres: usize) -> String {
    // exposant APRÈS arrondi (9999999999.7 -> 1.000000000e+10)
    let sci = format!("{v:.*e}", chiffres - 1);
    let exp: i32 = sci
        .split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0);

    if exp < -6 || exp >= chiffres as i32 {
        return exponentielle(v, chiffres - 1);
    }

    let decimales = (chiffres as i32 - 1 - exp).max(0) as usize;
    format!("{v:.decimales$}")
}
