// src/noyau/base.rs
//
// Bases d’affichage (DEC / HEX / OCT / BIN)
// -----------------------------------------
// - chiffres légaux par base (A–F repliés en majuscules)
// - lecture de l’affichage vers un f64 (DEC : flottant ; autres : entier en radix)
// - formatage d’un f64 vers le texte de la base active
//
// NaN / ±Infinity ne lèvent jamais : ils s’écrivent "NaN", "Infinity", "-Infinity"
// et se relisent tels quels en DEC.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

use super::erreur::ErreurNom;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Base {
    #[default]
    #[serde(alias = "dec")]
    Dec,
    #[serde(alias = "hex")]
    Hex,
    #[serde(alias = "oct")]
    Oct,
    #[serde(alias = "bin")]
    Bin,
}

impl Base {
    pub const TOUTES: [Base; 4] = [Base::Dec, Base::Hex, Base::Oct, Base::Bin];

    pub fn radix(self) -> u32 {
        match self {
            Base::Dec => 10,
            Base::Hex => 16,
            Base::Oct => 8,
            Base::Bin => 2,
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Base::Dec => "DEC",
            Base::Hex => "HEX",
            Base::Oct => "OCT",
            Base::Bin => "BIN",
        }
    }

    /// Chiffre normalisé (majuscule) s’il est légal dans cette base, sinon None.
    pub fn normalise_chiffre(self, c: char) -> Option<char> {
        let c = c.to_ascii_uppercase();
        c.to_digit(self.radix()).map(|_| c)
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}

impl FromStr for Base {
    type Err = ErreurNom;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Base::TOUTES
            .into_iter()
            .find(|b| b.nom().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ErreurNom::Base(s.to_string()))
    }
}

/* ------------------------ Comptage ------------------------ */

/// Nombre de chiffres “de base” (0-9, A-F) dans un texte d’affichage.
/// Le signe et le point ne comptent pas.
pub fn nombre_chiffres(affichage: &str) -> usize {
    affichage.chars().filter(|c| c.is_ascii_hexdigit()).count()
}

/* ------------------------ Lecture ------------------------ */

/// Valeur décimale de l’affichage, interprété dans `base`.
/// Texte illisible => NaN (jamais d’erreur).
pub fn valeur_decimale(affichage: &str, base: Base) -> f64 {
    match base {
        Base::Dec => parse_float(affichage),
        _ => parse_entier(affichage, base.radix()),
    }
}

/// Lecture flottante “préfixe” : on garde le plus long début lisible.
/// "12." -> 12 ; "3abc" -> 3 ; "-" -> NaN ; "Infinity" -> inf ; "NaN" -> NaN.
pub fn parse_float(s: &str) -> f64 {
    let s = s.trim();
    let corps = s.strip_prefix(['+', '-']).unwrap_or(s);
    if corps.starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    // candidats ASCII seulement => découpe par octet sûre
    let fin = s
        .find(|c: char| !matches!(c, '0'..='9' | '+' | '-' | '.' | 'e' | 'E'))
        .unwrap_or(s.len());

    (1..=fin)
        .rev()
        .find_map(|n| s[..n].parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Lecture entière en `radix` : signe optionnel puis chiffres valides (préfixe).
/// Aucun chiffre => NaN. Au-delà de u64 : passage par BigInt.
fn parse_entier(s: &str, radix: u32) -> f64 {
    let s = s.trim();
    let (negatif, corps) = match s.strip_prefix('-') {
        Some(reste) => (true, reste),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let fin = corps
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(corps.len());
    if fin == 0 {
        return f64::NAN;
    }

    let v = BigInt::parse_bytes(corps[..fin].as_bytes(), radix)
        .and_then(|n| n.to_f64())
        .unwrap_or(f64::NAN);

    if negatif {
        -v
    } else {
        v
    }
}

/* ------------------------ Formatage ------------------------ */

/// Texte d’un nombre : forme la plus courte qui se relit à l’identique.
/// Notation exponentielle pour |v| >= 1e21 ou 0 < |v| < 1e-6 ("1e+21", "1.5e-7").
pub fn format_nombre(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        // -0 s’affiche "0"
        return "0".to_string();
    }

    let a = v.abs();
    if a >= 1e21 || a < 1e-6 {
        let s = format!("{v:e}");
        return match s.split_once('e') {
            Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
            _ => s,
        };
    }

    format!("{v}")
}

/// Texte de `valeur` dans `base`.
/// DEC : nombre brut (pas de troncature). HEX/OCT/BIN : plancher puis radix (HEX en majuscules).
pub fn format_pour_base(valeur: f64, base: Base) -> String {
    if !valeur.is_finite() || base == Base::Dec {
        return format_nombre(valeur);
    }

    match BigInt::from_f64(valeur.floor()) {
        Some(n) => {
            let s = n.to_str_radix(base.radix());
            if base == Base::Hex {
                s.to_uppercase()
            } else {
                s
            }
        }
        None => format_nombre(valeur),
    }
}
