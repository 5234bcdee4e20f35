//! Noyau de la calculatrice scientifique
//!
//! Organisation interne :
//! - etat.rs        : EtatCalcul (affichage, opération en attente, pile de parenthèses…)
//! - commandes.rs   : toutes les commandes (état, entrée) -> nouvel état + `Commande`
//! - base.rs        : DEC / HEX / OCT / BIN, lecture et formatage des nombres
//! - calcul.rs      : opérateurs binaires, gcd / lcm / nPr / nCr, factorielle
//! - scientifique.rs: fonctions à un argument (trig en RAD/DEG, log, puissances…)
//! - constantes.rs  : π, e, φ, γ, √2, ln2, ln10
//! - historique.rs  : journal borné des calculs
//! - format.rs      : raccourci d’affichage pour l’écran
//!
//! Aucun I/O ici : le noyau est pur, les hôtes (fenêtre, script) remplacent l’état d’un bloc.

pub mod base;
pub mod calcul;
pub mod commandes;
pub mod constantes;
pub mod erreur;
pub mod etat;
pub mod format;
pub mod historique;
pub mod scientifique;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_scientifiques;


// API publique
pub use base::Base;
pub use calcul::{FonctionBinaire, Operateur};
pub use commandes::Commande;
pub use constantes::Constante;
pub use erreur::ErreurNom;
pub use etat::{EtatCalcul, Observables};
pub use format::format_affichage;
pub use historique::{EntreeHistorique, LIMITE_HISTORIQUE};
pub use scientifique::FonctionUnaire;
