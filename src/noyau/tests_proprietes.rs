//! Propriétés observables de la calculatrice, jouées de bout en bout via `Commande`.
//!
//! - saisie puis backspace : retour à "0"
//! - gauche à droite, sans priorité
//! - NaN collant (division par zéro, factorielle négative…)
//! - conversions de base aller-retour
//! - historique borné, plus récent en tête
//! - mémoire vide traitée comme 0 par M+
//! - parenthèses réellement évaluées

use proptest::prelude::*;

use super::{Base, Commande, Constante, EtatCalcul, FonctionUnaire, Operateur, LIMITE_HISTORIQUE};

fn jouer(cmds: &[Commande]) -> EtatCalcul {
    cmds.iter()
        .fold(EtatCalcul::default(), |e, c| e.appliquer(c))
}

fn nombre(s: &str) -> Vec<Commande> {
    s.chars()
        .map(|c| match c {
            '.' => Commande::Decimal,
            _ => Commande::Chiffre(c),
        })
        .collect()
}

fn suite(morceaux: &[&[Commande]]) -> Vec<Commande> {
    morceaux.concat()
}

/* ------------------------ Saisie ------------------------ */

proptest! {
    #[test]
    fn chiffre_puis_backspace_revient_a_zero(d in 0u32..10) {
        let c = char::from_digit(d, 10).unwrap_or('0');
        let e = jouer(&[Commande::Chiffre(c), Commande::Backspace]);
        prop_assert_eq!(e.affichage.as_str(), "0");
    }

    #[test]
    fn saisie_entiere_effacee_revient_a_zero(saisie in "[1-9][0-9]{0,14}") {
        let mut e = jouer(&nombre(&saisie));
        prop_assert_eq!(e.affichage.as_str(), saisie.as_str());
        for _ in 0..saisie.len() {
            e = e.backspace();
        }
        prop_assert_eq!(e.affichage.as_str(), "0");
    }

    #[test]
    fn affichage_jamais_vide_apres_backspaces(
        saisie in "[0-9]{1,15}",
        n in 0usize..20,
    ) {
        let mut e = jouer(&nombre(&saisie));
        for _ in 0..n {
            e = e.backspace();
            prop_assert!(!e.affichage.is_empty());
        }
    }

    #[test]
    fn jamais_plus_de_quinze_chiffres(saisie in "[0-9]{1,30}") {
        let e = jouer(&nombre(&saisie));
        let n = e.affichage.chars().filter(char::is_ascii_digit).count();
        prop_assert!(n <= 15);
    }

    #[test]
    fn conversion_aller_retour_entiers(n in 0u64..1_000_000_000) {
        let e = jouer(&nombre(&n.to_string()));
        for b in [Base::Hex, Base::Oct, Base::Bin] {
            let retour = e.set_number_base(b).set_number_base(Base::Dec);
            prop_assert_eq!(retour.affichage, n.to_string());
        }
    }

    #[test]
    fn addition_commutative(a in 0u32..100_000, b in 0u32..100_000) {
        let ab = jouer(&suite(&[
            &nombre(&a.to_string()),
            &[Commande::Operation(Operateur::Plus)],
            &nombre(&b.to_string()),
            &[Commande::Equals],
        ]));
        let ba = jouer(&suite(&[
            &nombre(&b.to_string()),
            &[Commande::Operation(Operateur::Plus)],
            &nombre(&a.to_string()),
            &[Commande::Equals],
        ]));
        prop_assert_eq!(ab.affichage, ba.affichage);
    }
}

/* ------------------------ Arithmétique ------------------------ */

#[test]
fn un_plus_egal_double() {
    let e = jouer(&[
        Commande::Chiffre('1'),
        Commande::Operation(Operateur::Plus),
        Commande::Equals,
    ]);
    assert_eq!(e.affichage, "2");
}

#[test]
fn sans_priorite_operatoire() {
    let e = jouer(&suite(&[
        &nombre("2"),
        &[Commande::Operation(Operateur::Plus)],
        &nombre("3"),
        &[Commande::Operation(Operateur::Fois)],
        &nombre("4"),
        &[Commande::Equals],
    ]));
    assert_eq!(e.affichage, "20");
}

#[test]
fn flottants_non_arrondis() {
    let e = jouer(&suite(&[
        &nombre("0.1"),
        &[Commande::Operation(Operateur::Plus)],
        &nombre("0.2"),
        &[Commande::Equals],
    ]));
    assert_eq!(e.affichage, "0.30000000000000004");
}

#[test]
fn nan_collant() {
    let e = jouer(&suite(&[
        &nombre("5"),
        &[Commande::Operation(Operateur::Divise)],
        &nombre("0"),
        &[Commande::Equals],
    ]));
    assert_eq!(e.affichage, "NaN");

    for op in Operateur::TOUS {
        let suite = e.perform_operation(op).input_digit('3').perform_equals();
        assert_eq!(suite.affichage, "NaN", "op={op}");
    }
}

#[test]
fn factorielles_observables() {
    let fact = Commande::Scientifique(FonctionUnaire::Factorielle);

    let e = jouer(&suite(&[&nombre("5"), &[fact]]));
    assert_eq!(e.affichage, "120");

    let e = jouer(&suite(&[&nombre("171"), &[fact]]));
    assert_eq!(e.affichage, "Infinity");

    let e = jouer(&suite(&[&nombre("3"), &[Commande::ToggleSign, fact]]));
    assert_eq!(e.affichage, "NaN");
}

/* ------------------------ Bases ------------------------ */

#[test]
fn hex_aller_retour() {
    let e = jouer(&suite(&[&nombre("255"), &[Commande::Base(Base::Hex)]]));
    assert_eq!(e.affichage, "FF");
    let e = e.appliquer(&Commande::Base(Base::Dec));
    assert_eq!(e.affichage, "255");
}

#[test]
fn calcul_en_hex() {
    let e = jouer(&[
        Commande::Base(Base::Hex),
        Commande::Chiffre('A'),
        Commande::Operation(Operateur::Plus),
        Commande::Chiffre('6'),
        Commande::Equals,
    ]);
    assert_eq!(e.affichage, "10");
    assert_eq!(e.expression, "A + 6 =");
    let h = e.historique.get(0).map(|h| (h.resultat.as_str(), h.base));
    assert_eq!(h, Some(("10", Base::Hex)));
}

#[test]
fn negatif_hors_dec_garde_le_signe() {
    let e = jouer(&suite(&[
        &nombre("3"),
        &[Commande::Operation(Operateur::Moins)],
        &nombre("8"),
        &[Commande::Equals, Commande::Base(Base::Bin)],
    ]));
    assert_eq!(e.affichage, "-101");
    assert_eq!(e.set_number_base(Base::Dec).affichage, "-5");
}

/* ------------------------ Historique ------------------------ */

#[test]
fn historique_borne_plus_recent_en_tete() {
    let mut e = EtatCalcul::default();
    for i in 0..60u32 {
        for c in nombre(&i.to_string()) {
            e = e.appliquer(&c);
        }
        e = e
            .appliquer(&Commande::Operation(Operateur::Plus))
            .appliquer(&Commande::Chiffre('0'))
            .appliquer(&Commande::Equals)
            .appliquer(&Commande::ClearAll);
    }

    assert_eq!(e.historique.len(), LIMITE_HISTORIQUE);
    let premier = e.historique.get(0).map(|h| h.expression.as_str());
    assert_eq!(premier, Some("59 + 0"));
    let dernier = e.historique.get(LIMITE_HISTORIQUE - 1).map(|h| h.expression.as_str());
    assert_eq!(dernier, Some("10 + 0"));

    let ids: Vec<u64> = e.historique.iter().map(|h| h.id).collect();
    assert!(ids.windows(2).all(|w| w[0] > w[1]));
}

/* ------------------------ Mémoire ------------------------ */

#[test]
fn memoire_vide_vaut_zero() {
    let e = jouer(&suite(&[&nombre("5"), &[Commande::MemoryAdd]]));
    assert_eq!(e.memoire, Some(5.0));

    let e = e
        .appliquer(&Commande::ClearAll)
        .appliquer(&Commande::MemoryRecall);
    assert_eq!(e.affichage, "5");

    let e = jouer(&suite(&[&nombre("5"), &[Commande::MemorySubtract]]));
    assert_eq!(e.memoire, Some(-5.0));
}

/* ------------------------ Constantes ------------------------ */

#[test]
fn pi_selon_la_base() {
    let e = jouer(&[Commande::Constante(Constante::Pi)]);
    assert_eq!(e.affichage, "3.141592653589793");

    let e = jouer(&[Commande::Base(Base::Hex), Commande::Constante(Constante::Pi)]);
    assert_eq!(e.affichage, "3");
}

/* ------------------------ Parenthèses ------------------------ */

#[test]
fn parentheses_deux_fois_trois_plus_quatre() {
    let e = jouer(&suite(&[
        &nombre("2"),
        &[Commande::Operation(Operateur::Fois), Commande::OpenParen],
        &nombre("3"),
        &[Commande::Operation(Operateur::Plus)],
        &nombre("4"),
        &[Commande::CloseParen, Commande::Equals],
    ]));
    assert_eq!(e.affichage, "14");
    assert_eq!(e.profondeur_parentheses(), 0);
}

#[test]
fn clear_all_ferme_les_parentheses() {
    let e = jouer(&[Commande::OpenParen, Commande::OpenParen, Commande::ClearAll]);
    assert_eq!(e.profondeur_parentheses(), 0);
    assert_eq!(e.observables().parentheses_count, 0);
}
