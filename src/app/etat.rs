//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter l’`EtatCalcul` du noyau + les bascules purement visuelles
//! (mode scientifique, panneau d’historique).
//!
//! Contrats :
//! - Aucune logique de calcul ici : chaque action passe par `executer(Commande)`.
//! - L’état du noyau est remplacé d’un bloc, jamais modifié champ par champ.

use tracing::debug;

use crate::noyau::{Base, Commande, EtatCalcul};

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- noyau ---
    pub calc: EtatCalcul,

    // --- UX ---
    pub scientifique: bool,
    pub historique_visible: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::avec_reglages(true, Base::Dec)
    }
}

impl AppCalc {
    /// Démarrage avec les réglages de la config / ligne de commande.
    /// Une base autre que DEC ouvre directement le mode scientifique (sélecteur visible).
    pub fn avec_reglages(radians: bool, base: Base) -> Self {
        Self {
            calc: EtatCalcul::avec_reglages(radians, base),
            scientifique: base != Base::Dec,
            historique_visible: false,
        }
    }

    pub fn executer(&mut self, cmd: Commande) {
        self.calc = self.calc.appliquer(&cmd);
    }

    /// Rappel depuis le panneau : le panneau se referme.
    pub fn choisir_historique(&mut self, index: usize) {
        self.executer(Commande::Historique(index));
        self.historique_visible = false;
    }

    pub fn basculer_scientifique(&mut self) {
        self.scientifique = !self.scientifique;
        debug!(scientifique = self.scientifique, "mode d’affichage");
    }

    pub fn basculer_historique(&mut self) {
        self.historique_visible = !self.historique_visible;
    }
}
