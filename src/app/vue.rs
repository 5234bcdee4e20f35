// src/app/vue.rs
//
// Vue egui (natif + web)
// -----------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Chaque bouton émet UNE Commande (aucun calcul ici)
// - Mode standard : mémoire + pavé principal
// - Mode scientifique : sélecteur de base, 2nd, RAD/DEG, rangées de fonctions
// - Rangée A–F visible seulement en HEX
//
// Le clavier est géré dans app.rs (événements globaux), pas ici.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{
    format_affichage, Base, Commande, Constante, FonctionBinaire, FonctionUnaire, Operateur,
};

const TOUCHE: [f32; 2] = [64.0, 40.0];
const FONCTION: [f32; 2] = [52.0, 30.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_entete(ui);

                if self.scientifique {
                    ui.add_space(4.0);
                    self.ui_bases(ui);
                }

                ui.add_space(6.0);
                self.ui_ecran(ui);

                ui.add_space(6.0);
                self.ui_memoire(ui);

                if self.scientifique {
                    ui.add_space(6.0);
                    self.ui_scientifique(ui);
                }

                ui.add_space(6.0);
                self.ui_pave_principal(ui);

                ui.add_space(8.0);
                ui.weak("Clavier accepté • 2nd pour les fonctions inverses");

                if self.historique_visible {
                    ui.add_space(8.0);
                    ui.separator();
                    self.ui_historique(ui);
                }
            });
    }

    fn ui_entete(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let libelle = if self.scientifique {
                "‹ Standard"
            } else {
                "Scientifique ›"
            };
            if ui.button(libelle).clicked() {
                self.basculer_scientifique();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let historique = egui::Button::new("Historique").selected(self.historique_visible);
                if ui.add(historique).clicked() {
                    self.basculer_historique();
                }

                if self.scientifique {
                    let angle = if self.calc.radians { "RAD" } else { "DEG" };
                    if ui.button(angle).clicked() {
                        self.executer(Commande::ToggleAngleMode);
                    }
                    let seconde = egui::Button::new("2nd").selected(self.calc.seconde_fonction);
                    if ui.add(seconde).clicked() {
                        self.executer(Commande::ToggleSecondFunction);
                    }
                }
            });
        });
    }

    fn ui_bases(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for base in Base::TOUTES {
                let actif = self.calc.base == base;
                let resp = ui.add_sized(FONCTION, egui::Button::new(base.nom()).selected(actif));
                if resp.clicked() {
                    self.executer(Commande::Base(base));
                }
            }
        });
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let obs = self.calc.observables();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.horizontal(|ui| {
                    if obs.memory.is_some() {
                        ui.label(egui::RichText::new("M").small().strong());
                    }
                    if obs.parentheses_count > 0 {
                        ui.label(egui::RichText::new(format!("( {}", obs.parentheses_count)).small());
                    }
                    // espace insécable : la ligne garde sa hauteur quand la trace est vide
                    let trace = if obs.expression.is_empty() {
                        "\u{a0}"
                    } else {
                        obs.expression
                    };
                    ui.label(egui::RichText::new(trace).monospace().weak());
                });

                let texte = format_affichage(obs.display, obs.number_base);
                let taille = match texte.chars().count() {
                    0..=8 => 40.0,
                    9..=10 => 34.0,
                    _ => 28.0,
                };
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(texte).monospace().size(taille).strong());
                });
            });
    }

    fn ui_memoire(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            self.touche(ui, FONCTION, "MC", Commande::MemoryClear);
            self.touche(ui, FONCTION, "MR", Commande::MemoryRecall);
            self.touche(ui, FONCTION, "M+", Commande::MemoryAdd);
            self.touche(ui, FONCTION, "M-", Commande::MemorySubtract);
            self.touche(ui, FONCTION, "MS", Commande::MemoryStore);
        });
    }

    fn ui_scientifique(&mut self, ui: &mut egui::Ui) {
        use FonctionUnaire as F;

        // constantes + parenthèses
        ui.horizontal_wrapped(|ui| {
            for c in Constante::TOUTES {
                self.touche(ui, FONCTION, c.symbole(), Commande::Constante(c));
            }
            self.touche(ui, FONCTION, "(", Commande::OpenParen);
            self.touche(ui, FONCTION, ")", Commande::CloseParen);
            self.touche(ui, FONCTION, "RND", Commande::Scientifique(F::Aleatoire));
        });

        let seconde = self.calc.seconde_fonction;

        // trigonométrie
        ui.horizontal(|ui| {
            let rangee: [(&str, F); 6] = if seconde {
                [
                    ("sin⁻¹", F::Asin),
                    ("cos⁻¹", F::Acos),
                    ("tan⁻¹", F::Atan),
                    ("sinh⁻¹", F::Asinh),
                    ("cosh⁻¹", F::Acosh),
                    ("tanh⁻¹", F::Atanh),
                ]
            } else {
                [
                    ("sin", F::Sin),
                    ("cos", F::Cos),
                    ("tan", F::Tan),
                    ("sinh", F::Sinh),
                    ("cosh", F::Cosh),
                    ("tanh", F::Tanh),
                ]
            };
            for (libelle, f) in rangee {
                self.touche(ui, FONCTION, libelle, Commande::Scientifique(f));
            }
        });

        // logs + puissances
        ui.horizontal(|ui| {
            let rangee: [(&str, Commande); 6] = if seconde {
                [
                    ("10ˣ", Commande::Scientifique(F::DixPuissance)),
                    ("2ˣ", Commande::Scientifique(F::DeuxPuissance)),
                    ("eˣ", Commande::Scientifique(F::Exp)),
                    ("ʸ√x", Commande::Operation(Operateur::RacineY)),
                    ("→°", Commande::Scientifique(F::RadVersDeg)),
                    ("→rad", Commande::Scientifique(F::DegVersRad)),
                ]
            } else {
                [
                    ("log", Commande::Scientifique(F::Log)),
                    ("log₂", Commande::Scientifique(F::Log2)),
                    ("ln", Commande::Scientifique(F::Ln)),
                    ("xʸ", Commande::Operation(Operateur::Puissance)),
                    ("√", Commande::Scientifique(F::Racine)),
                    ("∛", Commande::Scientifique(F::RacineCubique)),
                ]
            };
            for (libelle, cmd) in rangee {
                self.touche(ui, FONCTION, libelle, cmd);
            }
        });

        // fonctions spéciales
        ui.horizontal(|ui| {
            self.touche(ui, FONCTION, "x²", Commande::Scientifique(F::Carre));
            self.touche(ui, FONCTION, "x³", Commande::Scientifique(F::Cube));
            self.touche(ui, FONCTION, "1/x", Commande::Scientifique(F::Inverse));
            self.touche(ui, FONCTION, "n!", Commande::Scientifique(F::Factorielle));
            self.touche(ui, FONCTION, "|x|", Commande::Scientifique(F::Abs));
            self.touche(ui, FONCTION, "mod", Commande::Operation(Operateur::Modulo));
        });

        // arrondis
        ui.horizontal(|ui| {
            self.touche(ui, FONCTION, "⌊x⌋", Commande::Scientifique(F::Plancher));
            self.touche(ui, FONCTION, "⌈x⌉", Commande::Scientifique(F::Plafond));
            self.touche(ui, FONCTION, "rnd", Commande::Scientifique(F::Arrondi));
            self.touche(ui, FONCTION, "sgn", Commande::Scientifique(F::Signe));
        });

        // fonctions à deux arguments : "=" termine
        ui.horizontal(|ui| {
            for f in FonctionBinaire::TOUTES {
                self.touche(ui, FONCTION, f.nom(), Commande::DeuxArguments(f));
            }
        });

        if self.calc.base == Base::Hex {
            ui.horizontal(|ui| {
                for c in ['A', 'B', 'C', 'D', 'E', 'F'] {
                    self.touche(ui, FONCTION, &c.to_string(), Commande::Chiffre(c));
                }
            });
        }
    }

    fn ui_pave_principal(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_principal")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.touche(ui, TOUCHE, "AC", Commande::ClearAll);
                self.touche(ui, TOUCHE, "±", Commande::ToggleSign);
                self.touche(ui, TOUCHE, "%", Commande::Percent);
                self.touche(ui, TOUCHE, "÷", Commande::Operation(Operateur::Divise));
                ui.end_row();

                for (rangee, op) in [
                    (['7', '8', '9'], Operateur::Fois),
                    (['4', '5', '6'], Operateur::Moins),
                    (['1', '2', '3'], Operateur::Plus),
                ] {
                    for c in rangee {
                        self.touche(ui, TOUCHE, &c.to_string(), Commande::Chiffre(c));
                    }
                    self.touche(ui, TOUCHE, op.symbole(), Commande::Operation(op));
                    ui.end_row();
                }

                self.touche(ui, TOUCHE, "⌫", Commande::Backspace);
                self.touche(ui, TOUCHE, "0", Commande::Chiffre('0'));
                self.touche(ui, TOUCHE, ".", Commande::Decimal);
                self.touche(ui, TOUCHE, "=", Commande::Equals);
                ui.end_row();
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.strong("Historique");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Fermer").clicked() {
                    self.historique_visible = false;
                }
                if ui.button("Effacer").clicked() {
                    self.executer(Commande::ClearHistory);
                }
            });
        });

        if self.calc.historique.is_empty() {
            ui.weak("Aucun calcul pour l’instant");
            return;
        }

        // Clic sur une entrée => rappel (après la boucle : on ne modifie pas pendant l’itération)
        let mut choisi = None;
        for (index, entree) in self.calc.historique.iter().enumerate() {
            let texte = format!("{}\n= {}", entree.expression, entree.resultat);
            let resp = ui
                .add(egui::Button::new(egui::RichText::new(texte).monospace()).wrap())
                .on_hover_text(format!(
                    "{} • {}",
                    entree.base,
                    entree.horodatage.format("%H:%M:%S")
                ));
            if resp.clicked() {
                choisi = Some(index);
            }
        }
        if let Some(index) = choisi {
            self.choisir_historique(index);
        }
    }

    fn touche(&mut self, ui: &mut egui::Ui, taille: [f32; 2], libelle: &str, cmd: Commande) {
        if ui.add_sized(taille, egui::Button::new(libelle)).clicked() {
            self.executer(cmd);
        }
    }
}
