// src/noyau/calcul.rs
//
// Opérations binaires
// -------------------
// - Operateur       : + - × ÷ ^ mod yroot (posés par perform_operation)
// - FonctionBinaire : gcd lcm nPr nCr (posés par perform_two_arg_scientific)
//
// Politique “NaN collant” : aucune opération ne panique ni ne renvoie d’erreur ;
// un résultat indéfini devient NaN (ou ±Infinity) et contamine la suite.

use std::fmt;
use std::str::FromStr;

use super::erreur::ErreurNom;

/// Au-delà, n! dépasse f64::MAX.
const FACTORIELLE_MAX: f64 = 170.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
    Modulo,
    RacineY,
}

impl Operateur {
    pub const TOUS: [Operateur; 7] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
        Operateur::Puissance,
        Operateur::Modulo,
        Operateur::RacineY,
    ];

    /// Symbole affiché dans la trace.
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "×",
            Operateur::Divise => "÷",
            Operateur::Puissance => "^",
            Operateur::Modulo => "mod",
            Operateur::RacineY => "yroot",
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

impl FromStr for Operateur {
    type Err = ErreurNom;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "*" => return Ok(Operateur::Fois),
            "/" => return Ok(Operateur::Divise),
            _ => {}
        }
        Operateur::TOUS
            .into_iter()
            .find(|op| op.symbole() == s)
            .ok_or_else(|| ErreurNom::Operateur(s.to_string()))
    }
}

/// a op b, évalué immédiatement (aucune priorité).
pub fn calculate(a: f64, b: f64, op: Operateur) -> f64 {
    match op {
        Operateur::Plus => a + b,
        Operateur::Moins => a - b,
        Operateur::Fois => a * b,
        Operateur::Divise => {
            if b != 0.0 {
                a / b
            } else {
                f64::NAN
            }
        }
        Operateur::Puissance => puissance(a, b),
        // reste tronqué : signe de a
        Operateur::Modulo => a % b,
        Operateur::RacineY => puissance(a, 1.0 / b),
    }
}

/// powf, mais NaN dès qu’un opérande l’est (powf(1, NaN) vaut 1 en IEEE).
fn puissance(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.powf(b)
    }
}

/* ------------------------ Fonctions à deux arguments ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FonctionBinaire {
    Pgcd,
    Ppcm,
    Arrangements,
    Combinaisons,
}

impl FonctionBinaire {
    pub const TOUTES: [FonctionBinaire; 4] = [
        FonctionBinaire::Pgcd,
        FonctionBinaire::Ppcm,
        FonctionBinaire::Arrangements,
        FonctionBinaire::Combinaisons,
    ];

    pub fn nom(self) -> &'static str {
        match self {
            FonctionBinaire::Pgcd => "gcd",
            FonctionBinaire::Ppcm => "lcm",
            FonctionBinaire::Arrangements => "nPr",
            FonctionBinaire::Combinaisons => "nCr",
        }
    }

    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            FonctionBinaire::Pgcd => pgcd(a, b),
            FonctionBinaire::Ppcm => ppcm(a, b),
            FonctionBinaire::Arrangements => arrangements(a, b),
            FonctionBinaire::Combinaisons => combinaisons(a, b),
        }
    }
}

impl fmt::Display for FonctionBinaire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}

impl FromStr for FonctionBinaire {
    type Err = ErreurNom;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FonctionBinaire::TOUTES
            .into_iter()
            .find(|f| f.nom() == s)
            .ok_or_else(|| ErreurNom::Fonction(s.to_string()))
    }
}

/// n! par produit itératif. n < 0 => NaN ; n > 170 => Infinity.
/// Un n non entier multiplie jusqu’à ⌊n⌋.
pub fn factorielle(n: f64) -> f64 {
    if n.is_nan() || n < 0.0 {
        return f64::NAN;
    }
    if n > FACTORIELLE_MAX {
        return f64::INFINITY;
    }
    (2..=(n as u32)).fold(1.0, |acc, i| acc * f64::from(i))
}

/// Euclide sur |⌊a⌋| et |⌊b⌋|. Opérande non fini => NaN.
pub fn pgcd(a: f64, b: f64) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return f64::NAN;
    }
    let mut a = a.floor().abs();
    let mut b = b.floor().abs();
    while b != 0.0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// |⌊a⌋·⌊b⌋| / pgcd. ppcm(0, 0) = NaN (0/0).
pub fn ppcm(a: f64, b: f64) -> f64 {
    (a.floor() * b.floor()).abs() / pgcd(a, b)
}

fn hors_domaine_combinatoire(n: f64, r: f64) -> bool {
    n.is_nan() || r.is_nan() || r > n || n < 0.0 || r < 0.0
}

/// nPr = n! / (n-r)!, calculé comme n·(n-1)·…·(n-r+1).
pub fn arrangements(n: f64, r: f64) -> f64 {
    if hors_domaine_combinatoire(n, r) {
        return f64::NAN;
    }
    let (n, r) = (n.floor(), r.floor());

    let mut acc: f64 = 1.0;
    let mut i = 0.0;
    // chaque facteur >= 2 sauf le dernier : débordement en ~1000 tours au pire
    while i < r && acc.is_finite() {
        acc *= n - i;
        i += 1.0;
    }
    acc
}

/// nCr = n! / (r!·(n-r)!), forme multiplicative (entière à chaque étape).
pub fn combinaisons(n: f64, r: f64) -> f64 {
    if hors_domaine_combinatoire(n, r) {
        return f64::NAN;
    }
    let (n, r) = (n.floor(), r.floor());
    let k = r.min(n - r);

    let mut acc: f64 = 1.0;
    let mut i = 1.0;
    while i <= k && acc.is_finite() {
        acc = acc * (n - k + i) / i;
        i += 1.0;
    }
    acc
}
