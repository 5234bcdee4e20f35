// src/app.rs
//
// Calculatrice scientifique, module App (racine)
// -----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs + clavier.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier : lu ici, une fois par frame, sur les événements globaux.
// - Event::Text  : caractères (chiffres, opérateurs, parenthèses…)
// - Event::Key   : Entrée / Retour arrière / Échap / Suppr
// Aucun champ texte dans la vue : pas de double déclenchement possible.

pub mod clavier;
pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use clavier::{commande_pour_caractere, commande_pour_touche, Touche};
use crate::noyau::Commande;

fn touche_egui(key: egui::Key) -> Option<Touche> {
    match key {
        egui::Key::Enter => Some(Touche::Entree),
        egui::Key::Backspace => Some(Touche::Retour),
        egui::Key::Escape => Some(Touche::Echap),
        egui::Key::Delete => Some(Touche::Suppr),
        _ => None,
    }
}

/// Commandes issues du clavier pendant cette frame, dans l’ordre de frappe.
fn commandes_clavier(ctx: &egui::Context) -> Vec<Commande> {
    ctx.input(|i| {
        i.events
            .iter()
            .flat_map(|ev| -> Vec<Commande> {
                match ev {
                    egui::Event::Text(t) => {
                        t.chars().filter_map(commande_pour_caractere).collect()
                    }
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } if !modifiers.command => touche_egui(*key)
                        .map(commande_pour_touche)
                        .into_iter()
                        .collect(),
                    _ => Vec::new(),
                }
            })
            .collect()
    })
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for cmd in commandes_clavier(ctx) {
            self.executer(cmd);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
