// src/noyau/scientifique.rs
//
// Fonctions scientifiques à un argument
// -------------------------------------
// Enum fermé + fiche statique (nom, domaine d’angle, pointeur de fonction).
// Le `match` de `fiche()` est exhaustif : ajouter une variante sans fiche ne compile pas.
//
// Domaine d’angle :
// - EntreeAngle : sin/cos/tan (l’argument est converti degrés -> radians si mode DEG)
// - SortieAngle : asin/acos/atan (le résultat est converti radians -> degrés si mode DEG)
// - Libre       : tout le reste (hyperboliques compris, toujours en radians)

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use super::calcul::factorielle;
use super::erreur::ErreurNom;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FonctionUnaire {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
    Log,
    Ln,
    Log2,
    Racine,
    RacineCubique,
    Carre,
    Cube,
    Inverse,
    Exp,
    DixPuissance,
    DeuxPuissance,
    Factorielle,
    Abs,
    Plancher,
    Plafond,
    Arrondi,
    Signe,
    Aleatoire,
    DegVersRad,
    RadVersDeg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Domaine {
    EntreeAngle,
    SortieAngle,
    Libre,
}

struct Fiche {
    nom: &'static str,
    domaine: Domaine,
    calcul: fn(f64) -> f64,
}

fn decrit(nom: &'static str, domaine: Domaine, calcul: fn(f64) -> f64) -> Fiche {
    Fiche {
        nom,
        domaine,
        calcul,
    }
}

impl FonctionUnaire {
    pub const TOUTES: [FonctionUnaire; 32] = {
        use FonctionUnaire::*;
        [
            Sin, Cos, Tan, Asin, Acos, Atan, Sinh, Cosh, Tanh, Asinh, Acosh, Atanh, Log, Ln,
            Log2, Racine, RacineCubique, Carre, Cube, Inverse, Exp, DixPuissance, DeuxPuissance,
            Factorielle, Abs, Plancher, Plafond, Arrondi, Signe, Aleatoire, DegVersRad,
            RadVersDeg,
        ]
    };

    fn fiche(self) -> Fiche {
        use Domaine::*;
        use FonctionUnaire::*;

        match self {
            Sin => decrit("sin", EntreeAngle, f64::sin),
            Cos => decrit("cos", EntreeAngle, f64::cos),
            Tan => decrit("tan", EntreeAngle, f64::tan),
            Asin => decrit("asin", SortieAngle, f64::asin),
            Acos => decrit("acos", SortieAngle, f64::acos),
            Atan => decrit("atan", SortieAngle, f64::atan),

            Sinh => decrit("sinh", Libre, f64::sinh),
            Cosh => decrit("cosh", Libre, f64::cosh),
            Tanh => decrit("tanh", Libre, f64::tanh),
            Asinh => decrit("asinh", Libre, f64::asinh),
            Acosh => decrit("acosh", Libre, f64::acosh),
            Atanh => decrit("atanh", Libre, f64::atanh),

            Log => decrit("log", Libre, f64::log10),
            Ln => decrit("ln", Libre, f64::ln),
            Log2 => decrit("log2", Libre, f64::log2),

            Racine => decrit("sqrt", Libre, f64::sqrt),
            RacineCubique => decrit("cbrt", Libre, f64::cbrt),
            Carre => decrit("x2", Libre, |x| x * x),
            Cube => decrit("x3", Libre, |x| x * x * x),
            Inverse => decrit("1/x", Libre, |x| 1.0 / x),
            Exp => decrit("exp", Libre, f64::exp),
            DixPuissance => decrit("10x", Libre, |x| 10f64.powf(x)),
            DeuxPuissance => decrit("2x", Libre, f64::exp2),

            Factorielle => decrit("fact", Libre, |x| factorielle(x.floor())),
            Abs => decrit("abs", Libre, f64::abs),
            Plancher => decrit("floor", Libre, f64::floor),
            Plafond => decrit("ceil", Libre, f64::ceil),
            Arrondi => decrit("round", Libre, arrondi),
            Signe => decrit("sign", Libre, signe),
            Aleatoire => decrit("rand", Libre, |_| rand::random::<f64>()),
            DegVersRad => decrit("dtor", Libre, deg_vers_rad),
            RadVersDeg => decrit("rtod", Libre, rad_vers_deg),
        }
    }

    pub fn nom(self) -> &'static str {
        self.fiche().nom
    }

    /// Applique la fonction en tenant compte du mode d’angle.
    pub fn appliquer(self, x: f64, radians: bool) -> f64 {
        let f = self.fiche();
        match f.domaine {
            Domaine::EntreeAngle if !radians => (f.calcul)(deg_vers_rad(x)),
            Domaine::SortieAngle if !radians => rad_vers_deg((f.calcul)(x)),
            _ => (f.calcul)(x),
        }
    }
}

impl fmt::Display for FonctionUnaire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}

impl FromStr for FonctionUnaire {
    type Err = ErreurNom;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FonctionUnaire::TOUTES
            .into_iter()
            .find(|f| f.nom() == s)
            .ok_or_else(|| ErreurNom::Fonction(s.to_string()))
    }
}

fn deg_vers_rad(x: f64) -> f64 {
    x * PI / 180.0
}

fn rad_vers_deg(x: f64) -> f64 {
    x * 180.0 / PI
}

/// Arrondi demi-supérieur : round(2.5) = 3, round(-2.5) = -2.
fn arrondi(x: f64) -> f64 {
    let plancher = x.floor();
    if x - plancher >= 0.5 {
        plancher + 1.0
    } else {
        plancher
    }
}

/// -1, 0 ou 1 (±0 conservé, NaN propagé).
fn signe(x: f64) -> f64 {
    if x.is_nan() || x == 0.0 {
        x
    } else {
        x.signum()
    }
}
