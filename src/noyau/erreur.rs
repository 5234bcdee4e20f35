// src/noyau/erreur.rs
//
// Le noyau ne connaît pas d’erreur de calcul (NaN / Infinity circulent comme des nombres).
// Seule la traduction d’un nom (bouton, mot de script, config) vers un type fermé peut échouer.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurNom {
    #[error("opérateur inconnu : {0:?}")]
    Operateur(String),

    #[error("fonction inconnue : {0:?}")]
    Fonction(String),

    #[error("constante inconnue : {0:?}")]
    Constante(String),

    #[error("base inconnue : {0:?} (attendu DEC, HEX, OCT ou BIN)")]
    Base(String),
}
