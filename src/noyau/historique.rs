// src/noyau/historique.rs
//
// Historique borné des calculs terminés par "="
// - plus récent en tête
// - au plus LIMITE_HISTORIQUE entrées (les plus anciennes tombent)
// - identifiants : compteur monotone, jamais réutilisé (même après vider())

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::base::Base;

pub const LIMITE_HISTORIQUE: usize = 50;

/// Entrée immuable : créée par "=", jamais modifiée.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EntreeHistorique {
    pub id: u64,
    pub expression: String,
    #[serde(rename = "result")]
    pub resultat: String,
    /// Base dans laquelle `resultat` est écrit.
    pub base: Base,
    #[serde(rename = "timestamp")]
    pub horodatage: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Historique {
    entrees: VecDeque<EntreeHistorique>,
    prochain_id: u64,
}

impl Historique {
    /// Ajoute en tête et tronque. Retourne l’id attribué.
    pub fn ajouter(&mut self, expression: String, resultat: String, base: Base) -> u64 {
        self.prochain_id += 1;
        let id = self.prochain_id;

        self.entrees.push_front(EntreeHistorique {
            id,
            expression,
            resultat,
            base,
            horodatage: Utc::now(),
        });
        self.entrees.truncate(LIMITE_HISTORIQUE);

        id
    }

    pub fn vider(&mut self) {
        self.entrees.clear();
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }

    /// 0 = plus récente.
    pub fn get(&self, index: usize) -> Option<&EntreeHistorique> {
        self.entrees.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntreeHistorique> {
        self.entrees.iter()
    }
}
