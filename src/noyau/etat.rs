//! src/noyau/etat.rs
//!
//! État de calcul (une instance par session).
//!
//! Contrats :
//! - `affichage` n’est jamais vide.
//! - Opérande gauche et opération en attente vivent ensemble dans `en_attente` :
//!   l’une ne peut pas exister sans l’autre.
//! - Mémoire, historique, mode d’angle et base survivent à `clear_all` ; le reste est remis à zéro.
//! - Chaque commande (voir commandes.rs) rend un NOUVEL état : pas d’instance globale.

use serde::Serialize;

use super::base::Base;
use super::calcul::{calculate, FonctionBinaire, Operateur};
use super::historique::{EntreeHistorique, Historique};

/// Affichage de départ (et plancher de backspace).
pub const AFFICHAGE_ZERO: &str = "0";

/// Nombre maximal de chiffres saisis (signe et point exclus).
pub const CHIFFRES_MAX: usize = 15;

/// Ce qui attend son opérande droit : un opérateur arithmétique ou une fonction à deux arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationEnAttente {
    Arithmetique(Operateur),
    Fonction(FonctionBinaire),
}

impl OperationEnAttente {
    pub fn evaluer(self, gauche: f64, droite: f64) -> f64 {
        match self {
            OperationEnAttente::Arithmetique(op) => calculate(gauche, droite, op),
            OperationEnAttente::Fonction(f) => f.appliquer(gauche, droite),
        }
    }

    /// Trace complète "a op b" ou "f(a, b)", opérandes déjà formatés.
    pub fn trace(self, gauche: &str, droite: &str) -> String {
        match self {
            OperationEnAttente::Arithmetique(op) => format!("{gauche} {op} {droite}"),
            OperationEnAttente::Fonction(f) => format!("{f}({gauche}, {droite})"),
        }
    }
}

/// Opérande gauche + opération, posés ensemble.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnAttente {
    pub gauche: f64,
    pub operation: OperationEnAttente,
}

/// Un groupe de parenthèses ouvert : le contexte extérieur mis de côté.
#[derive(Clone, Debug, PartialEq)]
pub struct Cadre {
    /// Calcul extérieur suspendu (repris à la fermeture).
    pub en_attente: Option<EnAttente>,
    /// Trace à l’ouverture, "(" compris ; préfixe des traces du groupe.
    pub trace: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EtatCalcul {
    // --- valeur courante ---
    pub affichage: String,
    pub expression: String,

    // --- calcul en cours ---
    pub en_attente: Option<EnAttente>,
    pub attente_operande: bool,
    /// L’affichage tient le résultat d’un groupe qui vient d’être fermé :
    /// un opérande acquis, qu’un opérateur évalue au lieu de le remplacer.
    pub groupe_ferme: bool,
    pub pile_expressions: Vec<Cadre>,

    // --- persistant (survit à AC) ---
    pub memoire: Option<f64>,
    pub historique: Historique,
    pub radians: bool,
    pub base: Base,

    pub seconde_fonction: bool,
}

impl Default for EtatCalcul {
    fn default() -> Self {
        Self::avec_reglages(true, Base::Dec)
    }
}

impl EtatCalcul {
    /// État neuf avec un mode d’angle et une base de départ (config / ligne de commande).
    pub fn avec_reglages(radians: bool, base: Base) -> Self {
        Self {
            affichage: AFFICHAGE_ZERO.to_string(),
            expression: String::new(),
            en_attente: None,
            attente_operande: false,
            groupe_ferme: false,
            pile_expressions: Vec::new(),
            memoire: None,
            historique: Historique::default(),
            radians,
            base,
            seconde_fonction: false,
        }
    }

    /// Opérande gauche en attente (previousValue).
    pub fn valeur_precedente(&self) -> Option<f64> {
        self.en_attente.map(|p| p.gauche)
    }

    /// Opération en attente (operator).
    pub fn operation(&self) -> Option<OperationEnAttente> {
        self.en_attente.map(|p| p.operation)
    }

    /// Profondeur d’imbrication des parenthèses (parenthesesCount).
    pub fn profondeur_parentheses(&self) -> usize {
        self.pile_expressions.len()
    }

    /// Préfixe de trace du groupe courant ("" hors parenthèses).
    pub(crate) fn prefixe_trace(&self) -> &str {
        self.pile_expressions
            .last()
            .map_or("", |cadre| cadre.trace.as_str())
    }
}

/// Champs observables, tels qu’un hôte les lit (fenêtre, sortie JSON).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Observables<'a> {
    pub display: &'a str,
    pub expression: &'a str,
    pub memory: Option<f64>,
    pub history: Vec<&'a EntreeHistorique>,
    pub is_radians: bool,
    pub number_base: Base,
    pub is_second_function: bool,
    pub parentheses_count: usize,
}

impl EtatCalcul {
    pub fn observables(&self) -> Observables<'_> {
        Observables {
            display: &self.affichage,
            expression: &self.expression,
            memory: self.memoire,
            history: self.historique.iter().collect(),
            is_radians: self.radians,
            number_base: self.base,
            is_second_function: self.seconde_fonction,
            parentheses_count: self.profondeur_parentheses(),
        }
    }
}
