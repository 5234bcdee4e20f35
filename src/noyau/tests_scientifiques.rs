//! Tests scientifiques (campagne) : fonctions à un et deux arguments, vues depuis l’affichage.
//!
//! But : vérifier ce que l’utilisateur LIT, pas seulement la valeur f64.
//! - budget temps global
//! - identités trig en RAD et en DEG
//! - domaines indéfinis -> "NaN" / "Infinity" / "-Infinity"
//! - chaque fonction reste utilisable dans une suite de calculs

use std::time::{Duration, Instant};

use super::{Commande, EtatCalcul, FonctionBinaire, FonctionUnaire, Operateur};

fn saisir(e: EtatCalcul, texte: &str) -> EtatCalcul {
    texte.chars().fold(e, |e, c| match c {
        '.' => e.input_decimal(),
        '-' => e.toggle_sign(),
        _ => e.input_digit(c),
    })
}

/// Affichage après f(x), mode d’angle choisi.
fn lire(f: FonctionUnaire, x: &str, radians: bool) -> String {
    let mut e = EtatCalcul::default();
    if !radians {
        e = e.toggle_angle_mode();
    }
    saisir(e, x).perform_scientific(f).affichage
}

fn valeur(f: FonctionUnaire, x: &str, radians: bool) -> f64 {
    lire(f, x, radians).parse().unwrap_or(f64::NAN)
}

fn proche(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Trigonométrie ------------------------ */

#[test]
fn sci_angles_remarquables_en_degres() {
    assert_eq!(lire(FonctionUnaire::Sin, "90", false), "1");
    assert_eq!(lire(FonctionUnaire::Cos, "0", false), "1");
    assert!(proche(valeur(FonctionUnaire::Sin, "30", false), 0.5));
    assert!(proche(valeur(FonctionUnaire::Tan, "45", false), 1.0));
    assert!(proche(valeur(FonctionUnaire::Cos, "60", false), 0.5));
}

#[test]
fn sci_inverses_en_degres() {
    assert!(proche(valeur(FonctionUnaire::Asin, "0.5", false), 30.0));
    assert!(proche(valeur(FonctionUnaire::Acos, "0", false), 90.0));
    assert_eq!(lire(FonctionUnaire::Atan, "0", false), "0");
}

#[test]
fn sci_symetries_en_radians() {
    for x in ["0.3", "1.2", "2.5"] {
        let s = valeur(FonctionUnaire::Sin, x, true);
        let s_neg = valeur(FonctionUnaire::Sin, &format!("{x}-"), true);
        assert!(proche(s, -s_neg), "sin impaire x={x}");

        let c = valeur(FonctionUnaire::Cos, x, true);
        let c_neg = valeur(FonctionUnaire::Cos, &format!("{x}-"), true);
        assert!(proche(c, c_neg), "cos paire x={x}");

        assert!(proche(s * s + c * c, 1.0), "sin²+cos² x={x}");
    }
}

#[test]
fn sci_aller_retour_degres_radians() {
    let e = saisir(EtatCalcul::default(), "180").perform_scientific(FonctionUnaire::DegVersRad);
    let rad: f64 = e.affichage.parse().unwrap_or(f64::NAN);
    assert!(proche(rad, std::f64::consts::PI));
    let e = e.perform_scientific(FonctionUnaire::RadVersDeg);
    let deg: f64 = e.affichage.parse().unwrap_or(f64::NAN);
    assert!(proche(deg, 180.0));
}

/* ------------------------ Domaines indéfinis ------------------------ */

#[test]
fn sci_indefinis_visibles() {
    assert_eq!(lire(FonctionUnaire::Asin, "2", true), "NaN");
    assert_eq!(lire(FonctionUnaire::Acosh, "0.5", true), "NaN");
    assert_eq!(lire(FonctionUnaire::Ln, "1-", true), "NaN");
    assert_eq!(lire(FonctionUnaire::Racine, "4-", true), "NaN");
    assert_eq!(lire(FonctionUnaire::Log, "0", true), "-Infinity");
    assert_eq!(lire(FonctionUnaire::Inverse, "0", true), "Infinity");
    assert_eq!(lire(FonctionUnaire::Atanh, "1", true), "Infinity");
}

#[test]
fn sci_indefini_contamine_la_suite() {
    let e = saisir(EtatCalcul::default(), "2")
        .perform_operation(Operateur::Plus)
        .input_digit('1')
        .toggle_sign()
        .perform_scientific(FonctionUnaire::Racine)
        .perform_equals();
    assert_eq!(e.affichage, "NaN");
    assert_eq!(e.expression, "2 + NaN =");
}

/* ------------------------ Puissances, logs ------------------------ */

#[test]
fn sci_puissances_et_logs() {
    assert_eq!(lire(FonctionUnaire::Carre, "12", true), "144");
    assert_eq!(lire(FonctionUnaire::Cube, "3-", true), "-27");
    assert_eq!(lire(FonctionUnaire::DixPuissance, "3", true), "1000");
    assert_eq!(lire(FonctionUnaire::DeuxPuissance, "10", true), "1024");
    assert_eq!(lire(FonctionUnaire::Log, "1000", true), "3");
    assert_eq!(lire(FonctionUnaire::Log2, "1024", true), "10");
    assert_eq!(lire(FonctionUnaire::Ln, "1", true), "0");
    assert_eq!(lire(FonctionUnaire::Exp, "0", true), "1");
    assert_eq!(lire(FonctionUnaire::RacineCubique, "27", true), "3");
    assert_eq!(lire(FonctionUnaire::Inverse, "4", true), "0.25");
}

#[test]
fn sci_grands_nombres_en_exposant() {
    assert_eq!(lire(FonctionUnaire::DixPuissance, "21", true), "1e+21");
    assert!(lire(FonctionUnaire::DixPuissance, "7-", true).contains("e-"));
    assert_eq!(lire(FonctionUnaire::Factorielle, "25", true), "1.5511210043330986e+25");
}

#[test]
fn sci_arrondis() {
    assert_eq!(lire(FonctionUnaire::Arrondi, "2.5", true), "3");
    assert_eq!(lire(FonctionUnaire::Arrondi, "2.5-", true), "-2");
    assert_eq!(lire(FonctionUnaire::Plancher, "1.5-", true), "-2");
    assert_eq!(lire(FonctionUnaire::Plafond, "1.2", true), "2");
    assert_eq!(lire(FonctionUnaire::Abs, "7-", true), "7");
    assert_eq!(lire(FonctionUnaire::Signe, "7-", true), "-1");
}

/* ------------------------ Deux arguments ------------------------ */

fn deux_args(f: FonctionBinaire, a: &str, b: &str) -> String {
    let e = saisir(EtatCalcul::default(), a).perform_two_arg_scientific(f);
    saisir(e, b).perform_two_arg_equals(f).affichage
}

#[test]
fn sci_deux_arguments() {
    assert_eq!(deux_args(FonctionBinaire::Pgcd, "48", "36"), "12");
    assert_eq!(deux_args(FonctionBinaire::Ppcm, "4", "6"), "12");
    assert_eq!(deux_args(FonctionBinaire::Arrangements, "10", "3"), "720");
    assert_eq!(deux_args(FonctionBinaire::Combinaisons, "10", "3"), "120");
    assert_eq!(deux_args(FonctionBinaire::Combinaisons, "3", "10"), "NaN");
    assert_eq!(deux_args(FonctionBinaire::Ppcm, "0", "0"), "NaN");
}

#[test]
fn sci_deux_arguments_enchaines_par_operateur() {
    // gcd(12, 18) puis × 2 : la fonction en attente est évaluée comme un opérateur
    let e = saisir(EtatCalcul::default(), "12")
        .perform_two_arg_scientific(FonctionBinaire::Pgcd);
    let e = saisir(e, "18").perform_operation(Operateur::Fois);
    assert_eq!(e.affichage, "6");
    assert_eq!(e.expression, "6 ×");
    let e = saisir(e, "2").perform_equals();
    assert_eq!(e.affichage, "12");
}

/* ------------------------ Stress contrôlé ------------------------ */

#[test]
fn sci_toutes_les_fonctions_sur_une_grille() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let grille = ["0", "1", "0.5", "2-", "90", "171", "1000000"];
    for f in FonctionUnaire::TOUTES {
        for x in grille {
            for radians in [true, false] {
                budget(t0, max);
                let affiche = lire(f, x, radians);
                assert!(!affiche.is_empty(), "f={f} x={x}");

                // l’affichage se relit et sert d’opérande
                let e = saisir(EtatCalcul::default(), x)
                    .appliquer(&Commande::Scientifique(f))
                    .appliquer(&Commande::Operation(Operateur::Plus))
                    .appliquer(&Commande::Chiffre('1'))
                    .appliquer(&Commande::Equals);
                assert!(!e.affichage.is_empty());
                assert_eq!(e.historique.len(), 1);
            }
        }
    }
}
