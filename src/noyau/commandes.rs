//! src/noyau/commandes.rs
//!
//! Commandes de la calculatrice : (état, entrée) -> nouvel état.
//!
//! Chaque méthode prend `&self` et rend un `EtatCalcul` neuf ; l’hôte remplace son état
//! d’un bloc (`etat = etat.appliquer(&cmd)`), jamais champ par champ.
//!
//! Entrée invalide (chiffre hors base, point hors DEC, 16e chiffre, ")" sans "(",
//! "=" sans opération…) : l’état revient inchangé, sans signal d’erreur.
//! Résultat indéfini : NaN / Infinity dans l’affichage, propagé aux calculs suivants.

use tracing::{debug, trace};

use super::base::{format_nombre, format_pour_base, nombre_chiffres, parse_float, valeur_decimale, Base};
use super::calcul::{FonctionBinaire, Operateur};
use super::constantes::Constante;
use super::etat::{
    Cadre, EnAttente, EtatCalcul, OperationEnAttente, AFFICHAGE_ZERO, CHIFFRES_MAX,
};
use super::historique::EntreeHistorique;
use super::scientifique::FonctionUnaire;

/// Toutes les entrées qu’un hôte peut transmettre au noyau.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Commande {
    ClearAll,
    ClearEntry,
    Chiffre(char),
    Decimal,
    ToggleSign,
    Percent,
    Operation(Operateur),
    Equals,
    Backspace,
    Scientifique(FonctionUnaire),
    DeuxArguments(FonctionBinaire),
    DeuxArgumentsEgal(FonctionBinaire),
    Constante(Constante),
    ToggleAngleMode,
    Base(Base),
    ToggleSecondFunction,
    MemoryClear,
    MemoryRecall,
    MemoryAdd,
    MemorySubtract,
    MemoryStore,
    /// Rappel d’une entrée d’historique par position (0 = plus récente).
    Historique(usize),
    ClearHistory,
    OpenParen,
    CloseParen,
}

impl EtatCalcul {
    /// Point d’entrée unique des hôtes (fenêtre, clavier, script).
    pub fn appliquer(&self, cmd: &Commande) -> EtatCalcul {
        debug!(?cmd, affichage = %self.affichage, "commande");

        match *cmd {
            Commande::ClearAll => self.clear_all(),
            Commande::ClearEntry => self.clear_entry(),
            Commande::Chiffre(c) => self.input_digit(c),
            Commande::Decimal => self.input_decimal(),
            Commande::ToggleSign => self.toggle_sign(),
            Commande::Percent => self.input_percent(),
            Commande::Operation(op) => self.perform_operation(op),
            Commande::Equals => self.perform_equals(),
            Commande::Backspace => self.backspace(),
            Commande::Scientifique(f) => self.perform_scientific(f),
            Commande::DeuxArguments(f) => self.perform_two_arg_scientific(f),
            Commande::DeuxArgumentsEgal(f) => self.perform_two_arg_equals(f),
            Commande::Constante(c) => self.insert_constant(c),
            Commande::ToggleAngleMode => self.toggle_angle_mode(),
            Commande::Base(b) => self.set_number_base(b),
            Commande::ToggleSecondFunction => self.toggle_second_function(),
            Commande::MemoryClear => self.memory_clear(),
            Commande::MemoryRecall => self.memory_recall(),
            Commande::MemoryAdd => self.memory_add(),
            Commande::MemorySubtract => self.memory_subtract(),
            Commande::MemoryStore => self.memory_store(),
            Commande::Historique(index) => match self.historique.get(index) {
                Some(entree) => self.select_history_entry(entree),
                None => self.inchange("entrée d’historique absente"),
            },
            Commande::ClearHistory => self.clear_history(),
            Commande::OpenParen => self.input_open_paren(),
            Commande::CloseParen => self.input_close_paren(),
        }
    }

    fn inchange(&self, raison: &str) -> EtatCalcul {
        trace!(raison, "entrée ignorée");
        self.clone()
    }

    /// Valeur de l’affichage dans la base active.
    fn valeur(&self) -> f64 {
        valeur_decimale(&self.affichage, self.base)
    }

    fn formate(&self, v: f64) -> String {
        format_pour_base(v, self.base)
    }

    /* ------------------------ Effacement ------------------------ */

    /// AC : tout remettre à zéro sauf mémoire, historique, angle, base.
    pub fn clear_all(&self) -> EtatCalcul {
        EtatCalcul {
            memoire: self.memoire,
            historique: self.historique.clone(),
            ..EtatCalcul::avec_reglages(self.radians, self.base)
        }
    }

    /// CE : efface seulement la saisie courante.
    pub fn clear_entry(&self) -> EtatCalcul {
        EtatCalcul {
            affichage: AFFICHAGE_ZERO.to_string(),
            attente_operande: false,
            groupe_ferme: false,
            ..self.clone()
        }
    }

    /* ------------------------ Saisie ------------------------ */

    pub fn input_digit(&self, chiffre: char) -> EtatCalcul {
        let Some(c) = self.base.normalise_chiffre(chiffre) else {
            return self.inchange("chiffre hors base");
        };

        let mut e = self.clone();
        if self.attente_operande {
            e.affichage = c.to_string();
            e.attente_operande = false;
            e.groupe_ferme = false;
            return e;
        }

        let nouveau = if self.affichage == AFFICHAGE_ZERO {
            c.to_string()
        } else {
            format!("{}{c}", self.affichage)
        };
        if nombre_chiffres(&nouveau) > CHIFFRES_MAX {
            return self.inchange("trop de chiffres");
        }

        e.affichage = nouveau;
        e
    }

    /// Point décimal : DEC seulement, un seul par nombre.
    pub fn input_decimal(&self) -> EtatCalcul {
        if self.base != Base::Dec {
            return self.inchange("point hors DEC");
        }

        let mut e = self.clone();
        if self.attente_operande {
            e.affichage = "0.".to_string();
            e.attente_operande = false;
            e.groupe_ferme = false;
        } else if self.affichage.contains('.') {
            return self.inchange("point déjà présent");
        } else {
            e.affichage.push('.');
        }
        e
    }

    pub fn toggle_sign(&self) -> EtatCalcul {
        let affichage = match self.affichage.strip_prefix('-') {
            Some(reste) => reste.to_string(),
            None => format!("-{}", self.affichage),
        };
        EtatCalcul {
            affichage,
            ..self.clone()
        }
    }

    /// x / 100, toujours lu et écrit en décimal (ignore la base active).
    pub fn input_percent(&self) -> EtatCalcul {
        let v = parse_float(&self.affichage);
        if v.is_nan() {
            return self.inchange("pourcentage d’une valeur illisible");
        }
        EtatCalcul {
            affichage: format_nombre(v / 100.0),
            attente_operande: true,
            ..self.clone()
        }
    }

    pub fn backspace(&self) -> EtatCalcul {
        if self.attente_operande {
            return self.inchange("backspace sur un résultat");
        }

        let mut affichage = self.affichage.clone();
        affichage.pop();
        if affichage.is_empty() || affichage == "-" {
            affichage = AFFICHAGE_ZERO.to_string();
        }
        EtatCalcul {
            affichage,
            ..self.clone()
        }
    }

    /* ------------------------ Opérations binaires ------------------------ */

    pub fn perform_operation(&self, op: Operateur) -> EtatCalcul {
        self.poser(OperationEnAttente::Arithmetique(op))
    }

    /// Pose une opération en attente ; si un opérande a été saisi depuis la précédente,
    /// celle-ci est d’abord évaluée (gauche à droite, sans priorité).
    fn poser(&self, operation: OperationEnAttente) -> EtatCalcul {
        let entree = self.valeur();
        let symbole = match operation {
            OperationEnAttente::Arithmetique(op) => op.symbole(),
            OperationEnAttente::Fonction(f) => f.nom(),
        };

        let mut e = self.clone();
        let (gauche, texte) = match self.en_attente {
            // 1) premier opérande
            None => (entree, self.affichage.clone()),

            // 2) opérande saisi (ou groupe fermé) depuis la dernière opération : on évalue
            Some(p) if !self.attente_operande || self.groupe_ferme => {
                let resultat = p.operation.evaluer(p.gauche, entree);
                let texte = self.formate(resultat);
                e.affichage = texte.clone();
                (resultat, texte)
            }

            // 3) opération pressée deux fois : on remplace seulement l’opération
            Some(p) => (p.gauche, self.affichage.clone()),
        };

        e.en_attente = Some(EnAttente { gauche, operation });
        e.expression = format!("{}{texte} {symbole}", self.prefixe_trace());
        e.attente_operande = true;
        e.groupe_ferme = false;
        e
    }

    /// "=" : évalue l’opération en attente avec l’affichage comme opérande droit,
    /// et ajoute le calcul à l’historique. Les parenthèses encore ouvertes sont fermées d’abord ;
    /// si rien n’attend au-dehors, c’est le groupe fermé qui entre dans l’historique.
    pub fn perform_equals(&self) -> EtatCalcul {
        let mut e = self.clone();
        while e.profondeur_parentheses() > 0 {
            e = e.input_close_paren();
        }

        let Some(p) = e.en_attente else {
            if self.profondeur_parentheses() == 0 {
                return self.inchange("égal sans opération");
            }
            // Seuls des groupes étaient ouverts : le groupe fermé est le calcul complet.
            let complete = e.expression.clone();
            e.historique
                .ajouter(complete.clone(), e.affichage.clone(), e.base);
            e.expression = format!("{complete} =");
            e.groupe_ferme = false;
            return e;
        };

        let resultat = p.operation.evaluer(p.gauche, e.valeur());
        let texte = e.formate(resultat);
        let complete = p.operation.trace(&e.formate(p.gauche), &e.affichage);

        e.historique
            .ajouter(complete.clone(), texte.clone(), e.base);
        e.expression = format!("{complete} =");
        e.affichage = texte;
        e.en_attente = None;
        e.attente_operande = true;
        e.groupe_ferme = false;
        e
    }

    /* ------------------------ Fonctions scientifiques ------------------------ */

    pub fn perform_scientific(&self, f: FonctionUnaire) -> EtatCalcul {
        let v = self.valeur();
        if v.is_nan() {
            return self.inchange("fonction sur NaN");
        }

        let resultat = f.appliquer(v, self.radians);
        EtatCalcul {
            affichage: self.formate(resultat),
            expression: format!("{}{f}({})", self.prefixe_trace(), self.affichage),
            attente_operande: true,
            groupe_ferme: false,
            ..self.clone()
        }
    }

    /// gcd / lcm / nPr / nCr : premier argument mis en attente comme pour un opérateur.
    pub fn perform_two_arg_scientific(&self, f: FonctionBinaire) -> EtatCalcul {
        let v = self.valeur();
        if v.is_nan() {
            return self.inchange("fonction sur NaN");
        }

        EtatCalcul {
            en_attente: Some(EnAttente {
                gauche: v,
                operation: OperationEnAttente::Fonction(f),
            }),
            expression: format!("{}{f}({},", self.prefixe_trace(), self.affichage),
            attente_operande: true,
            groupe_ferme: false,
            ..self.clone()
        }
    }

    /// Termine f(gauche, affichage). Sans opérande gauche : inchangé.
    /// Pas d’entrée d’historique (seul "=" en crée).
    pub fn perform_two_arg_equals(&self, f: FonctionBinaire) -> EtatCalcul {
        let Some(gauche) = self.valeur_precedente() else {
            return self.inchange("fonction à deux arguments sans premier argument");
        };

        let resultat = f.appliquer(gauche, self.valeur());
        let trace = OperationEnAttente::Fonction(f).trace(&self.formate(gauche), &self.affichage);
        EtatCalcul {
            affichage: self.formate(resultat),
            expression: format!("{}{trace} =", self.prefixe_trace()),
            en_attente: None,
            attente_operande: true,
            groupe_ferme: false,
            ..self.clone()
        }
    }

    pub fn insert_constant(&self, c: Constante) -> EtatCalcul {
        EtatCalcul {
            affichage: self.formate(c.valeur()),
            attente_operande: true,
            groupe_ferme: false,
            ..self.clone()
        }
    }

    /* ------------------------ Modes ------------------------ */

    pub fn toggle_angle_mode(&self) -> EtatCalcul {
        EtatCalcul {
            radians: !self.radians,
            ..self.clone()
        }
    }

    pub fn toggle_second_function(&self) -> EtatCalcul {
        EtatCalcul {
            seconde_fonction: !self.seconde_fonction,
            ..self.clone()
        }
    }

    /// Relit l’affichage dans l’ancienne base, le réécrit dans la nouvelle.
    /// Quitter DEC tronque la partie fractionnaire.
    pub fn set_number_base(&self, base: Base) -> EtatCalcul {
        EtatCalcul {
            affichage: format_pour_base(self.valeur(), base),
            base,
            ..self.clone()
        }
    }

    /* ------------------------ Mémoire ------------------------ */

    pub fn memory_clear(&self) -> EtatCalcul {
        EtatCalcul {
            memoire: None,
            ..self.clone()
        }
    }

    pub fn memory_recall(&self) -> EtatCalcul {
        let Some(m) = self.memoire else {
            return self.inchange("mémoire vide");
        };
        EtatCalcul {
            affichage: self.formate(m),
            attente_operande: true,
            groupe_ferme: false,
            ..self.clone()
        }
    }

    pub fn memory_add(&self) -> EtatCalcul {
        self.ecrire_memoire(|m, v| m.unwrap_or(0.0) + v)
    }

    pub fn memory_subtract(&self) -> EtatCalcul {
        self.ecrire_memoire(|m, v| m.unwrap_or(0.0) - v)
    }

    pub fn memory_store(&self) -> EtatCalcul {
        self.ecrire_memoire(|_, v| v)
    }

    fn ecrire_memoire(&self, maj: impl FnOnce(Option<f64>, f64) -> f64) -> EtatCalcul {
        let v = self.valeur();
        if v.is_nan() {
            return self.inchange("mémoire : valeur NaN");
        }
        EtatCalcul {
            memoire: Some(maj(self.memoire, v)),
            attente_operande: true,
            ..self.clone()
        }
    }

    /* ------------------------ Historique ------------------------ */

    /// Reprend le résultat d’un calcul passé comme valeur courante.
    /// Le résultat est converti si la base a changé depuis.
    pub fn select_history_entry(&self, entree: &EntreeHistorique) -> EtatCalcul {
        let affichage = if entree.base == self.base {
            entree.resultat.clone()
        } else {
            format_pour_base(valeur_decimale(&entree.resultat, entree.base), self.base)
        };

        EtatCalcul {
            affichage,
            expression: String::new(),
            en_attente: None,
            attente_operande: true,
            groupe_ferme: false,
            ..self.clone()
        }
    }

    pub fn clear_history(&self) -> EtatCalcul {
        let mut e = self.clone();
        e.historique.vider();
        e
    }

    /* ------------------------ Parenthèses ------------------------ */

    /// "(" : met de côté le calcul extérieur et repart de zéro dans le groupe.
    pub fn input_open_paren(&self) -> EtatCalcul {
        let base_trace = if self.en_attente.is_some() {
            self.expression.as_str()
        } else {
            self.prefixe_trace()
        };
        let trace = if base_trace.is_empty() {
            "(".to_string()
        } else {
            format!("{base_trace} (")
        };

        let mut e = self.clone();
        e.pile_expressions.push(Cadre {
            en_attente: self.en_attente,
            trace: trace.clone(),
        });
        e.en_attente = None;
        e.affichage = AFFICHAGE_ZERO.to_string();
        e.expression = trace;
        e.attente_operande = true;
        e.groupe_ferme = false;
        e
    }

    /// ")" : évalue le groupe, reprend le calcul extérieur avec le résultat comme opérande.
    pub fn input_close_paren(&self) -> EtatCalcul {
        let mut e = self.clone();
        let Some(cadre) = e.pile_expressions.pop() else {
            return self.inchange("parenthèse fermante sans ouvrante");
        };

        let interieur = match self.en_attente {
            Some(p) => {
                let resultat = p.operation.evaluer(p.gauche, self.valeur());
                let trace = p.operation.trace(&self.formate(p.gauche), &self.affichage);
                e.affichage = self.formate(resultat);
                trace
            }
            None => self.affichage.clone(),
        };

        e.en_attente = cadre.en_attente;
        e.expression = format!("{}{interieur})", cadre.trace);
        e.attente_operande = true;
        e.groupe_ferme = true;
        e
    }
}
