// src/noyau/constantes.rs

use std::f64::consts;
use std::fmt;
use std::str::FromStr;

use super::erreur::ErreurNom;

/// Euler–Mascheroni (absente de std::f64::consts en stable).
const GAMMA: f64 = 0.577_215_664_901_532_9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Constante {
    Pi,
    E,
    Phi,
    Gamma,
    Racine2,
    Ln2,
    Ln10,
}

impl Constante {
    pub const TOUTES: [Constante; 7] = [
        Constante::Pi,
        Constante::E,
        Constante::Phi,
        Constante::Gamma,
        Constante::Racine2,
        Constante::Ln2,
        Constante::Ln10,
    ];

    pub fn valeur(self) -> f64 {
        match self {
            Constante::Pi => consts::PI,
            Constante::E => consts::E,
            Constante::Phi => (1.0 + 5f64.sqrt()) / 2.0,
            Constante::Gamma => GAMMA,
            Constante::Racine2 => consts::SQRT_2,
            Constante::Ln2 => consts::LN_2,
            Constante::Ln10 => consts::LN_10,
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Constante::Pi => "π",
            Constante::E => "e",
            Constante::Phi => "φ",
            Constante::Gamma => "γ",
            Constante::Racine2 => "√2",
            Constante::Ln2 => "ln2",
            Constante::Ln10 => "ln10",
        }
    }

    /// Nom ASCII accepté au clavier / en script (quand le symbole n’est pas ASCII).
    fn alias(self) -> Option<&'static str> {
        match self {
            Constante::Pi => Some("pi"),
            Constante::Phi => Some("phi"),
            Constante::Gamma => Some("gamma"),
            Constante::Racine2 => Some("sqrt2"),
            _ => None,
        }
    }
}

impl fmt::Display for Constante {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

impl FromStr for Constante {
    type Err = ErreurNom;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Constante::TOUTES
            .into_iter()
            .find(|c| c.symbole() == s || c.alias() == Some(s))
            .ok_or_else(|| ErreurNom::Constante(s.to_string()))
    }
}
