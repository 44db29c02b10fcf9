// src/noyau/session.rs
//
// Session de calcul : le tampon de saisie + l’expression + le fil d’exécution
// d’une touche. C’est l’unique porte d’entrée du noyau pour l’UI.
//
// Machine d’états (tampon + expression combinés) :
//   Vide → Saisie(base) → [Saisie(exposant)] → opérande vidé
//        → { AttenteOperande | Resultat }
// `Resultat` est ré-entrant : un chiffre repart sur une expression neuve,
// un opérateur enchaîne sur le résultat.

use super::erreurs::ErreurCalc;
use super::expression::{Etat, Expression, Op};
use super::format::format_valeur;
use super::tampon::Tampon;

/// Trace d’expression au repos. Choix produit : un tiret plutôt qu’une chaîne
/// vide, pour que la zone ne “saute” pas (voir DESIGN.md).
pub const TRACE_REPOS: &str = "–";

/// Une touche du pavé. Fermée et dispatchée par match exhaustif : pas de code
/// d’action en chaîne de caractères.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(u8),
    Decimale,
    Operateur(Op),
    Signe,
    Supprimer,
    Exposant,
    Effacer,
    Egal,
}

/// Mode courant, pour que la vue distingue saisie / attente / résultat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Saisie,
    AttenteOperande,
    Resultat,
}

/// Ce que le noyau donne à afficher. Le noyau ne touche jamais à la
/// présentation : l’UI rend ces chaînes comme elle l’entend.
#[derive(Clone, Debug)]
pub struct Affichage {
    pub ecran: String,
    pub trace: String,
    pub mode: Mode,
}

#[derive(Clone, Debug)]
pub struct Session {
    tampon: Tampon,
    expression: Expression,
    /// Vrai après un « = » réussi : le prochain chiffre repart à neuf,
    /// un opérateur enchaîne sur le résultat.
    termine: bool,
    trace: String,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            tampon: Tampon::new(),
            expression: Expression::new(),
            termine: false,
            trace: TRACE_REPOS.to_string(),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Traite une touche, à fond et d’un bloc (aucune attente, aucun recouvrement).
    ///
    /// En cas d’erreur l’état reste intact, à une exception près, documentée :
    /// la division par zéro rejette l’opérande droit (tampon vidé, expression
    /// repliée sur `[a op]`) pour permettre la re-saisie.
    pub fn appuyer(&mut self, touche: Touche) -> Result<(), ErreurCalc> {
        tracing::debug!(?touche, "touche pavé");

        match touche {
            Touche::Chiffre(d) => {
                self.reprise_apres_egal();
                self.tampon.saisir_chiffre(d);
                Ok(())
            }
            Touche::Decimale => {
                self.reprise_apres_egal();
                self.tampon.saisir_virgule()
            }
            Touche::Signe => {
                self.reprise_apres_egal();
                self.tampon.basculer_signe();
                Ok(())
            }
            Touche::Exposant => {
                self.reprise_apres_egal();
                self.tampon.saisir_exposant()
            }
            Touche::Supprimer => self.tampon.effacer_derniere(),
            Touche::Effacer => {
                self.tout_effacer();
                Ok(())
            }
            Touche::Operateur(op) => self.appuyer_operateur(op),
            Touche::Egal => self.appuyer_egal(),
        }
    }

    /// Après un « = », un chiffre démarre une expression neuve (l’opérateur,
    /// lui, enchaîne : il ne passe pas par ici).
    fn reprise_apres_egal(&mut self) {
        if self.termine {
            self.expression.tout_effacer();
            self.trace = TRACE_REPOS.to_string();
            self.termine = false;
        }
    }

    fn appuyer_operateur(&mut self, op: Op) -> Result<(), ErreurCalc> {
        self.termine = false;

        if !self.tampon.est_vide() {
            let v = self.tampon.vider()?;
            self.expression.pousser_operande(v);
        }

        // Peut évaluer un triplet complet au passage (enchaînement gauche-droite).
        self.expression.pousser_operateur(op)?;

        if let Etat::Attente(a, o) = self.expression.etat() {
            self.trace = format!("{} {o}", format_valeur(a));
        }
        Ok(())
    }

    fn appuyer_egal(&mut self) -> Result<(), ErreurCalc> {
        // « = » exige les trois éléments. On vérifie AVANT de vider le tampon :
        // un « 5 = » précoce ne doit pas consommer la saisie.
        match (self.tampon.est_vide(), self.expression.etat()) {
            (false, Etat::Attente(..)) => {
                let v = self.tampon.vider()?;
                self.expression.pousser_operande(v);
            }
            _ => return Err(ErreurCalc::ExpressionIncomplete),
        }

        let Etat::Complete(a, op, b) = self.expression.etat() else {
            return Err(ErreurCalc::ExpressionIncomplete);
        };

        self.expression.evaluer()?;

        self.trace = format!("{} {op} {} =", format_valeur(a), format_valeur(b));
        self.termine = true;
        Ok(())
    }

    fn tout_effacer(&mut self) {
        self.tampon.tout_effacer();
        self.expression.tout_effacer();
        self.termine = false;
        self.trace = TRACE_REPOS.to_string();
    }

    /* ------------------------ Contrat d’affichage ------------------------ */

    /// Vrai tant que le segment en cours commence par un signe non confirmé.
    pub fn signe_en_attente(&self) -> bool {
        self.tampon.signe_en_attente()
    }

    pub fn affichage(&self) -> Affichage {
        let ecran = if !self.tampon.est_vide() {
            self.tampon.texte()
        } else {
            match self.expression.etat() {
                Etat::Vide => "0".to_string(),
                Etat::Operande(v) | Etat::Attente(v, _) | Etat::Complete(_, _, v) => {
                    format_valeur(v)
                }
            }
        };

        let mode = if self.termine {
            Mode::Resultat
        } else if self.tampon.est_vide() && matches!(self.expression.etat(), Etat::Attente(..)) {
            Mode::AttenteOperande
        } else {
            Mode::Saisie
        };

        Affichage {
            ecran,
            trace: self.trace.clone(),
            mode,
        }
    }
}
