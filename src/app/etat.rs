//! src/app/etat.rs
//!
//! État UI : la session de calcul + le canal d’erreur et sa minuterie.
//!
//! Rôle : router les touches vers le noyau, déposer les messages d’erreur et
//! les faire revenir tout seuls après délai. Aucune logique d’affichage ici.
//!
//! Contrats :
//! - Toute interaction ANNULE la minuterie en cours (le message est remplacé
//!   ou effacé, jamais les deux en concurrence).
//! - Aucune erreur n’est fatale : la session reste utilisable après chaque rejet.

use crate::noyau::{Affichage, Minuterie, Session, Touche, DELAI_ERREUR_S};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    session: Session,

    // --- canal d’erreur ---
    pub erreur: String, // vide si aucun message
    minuterie: Minuterie,
}

impl AppCalc {
    /// Traite une touche du pavé. `maintenant` : temps egui en secondes
    /// (`input.time`), même horloge en natif et en wasm.
    pub fn appuyer(&mut self, touche: Touche, maintenant: f64) {
        // Nouvelle interaction : le message courant est périmé.
        self.effacer_erreur();

        if let Err(e) = self.session.appuyer(touche) {
            tracing::debug!(erreur = %e, ?touche, "saisie rejetée");
            self.deposer_erreur(e.to_string(), maintenant);
        }
    }

    /// À appeler chaque frame : fait revenir l’écran après le délai d’erreur.
    pub fn tic(&mut self, maintenant: f64) {
        if self.minuterie.echue(maintenant) {
            self.erreur.clear();
        }
    }

    /// Temps restant avant l’auto-effacement (None si aucun message armé).
    /// Sert à la vue pour programmer son prochain rafraîchissement.
    pub fn restant_erreur(&self, maintenant: f64) -> Option<f64> {
        self.minuterie.restant(maintenant)
    }

    pub fn affichage(&self) -> Affichage {
        self.session.affichage()
    }

    /// Vrai tant qu’un signe non confirmé ouvre le segment en cours
    /// (la vue met le bouton +/- en évidence).
    pub fn signe_en_attente(&self) -> bool {
        self.session.signe_en_attente()
    }

    fn deposer_erreur(&mut self, msg: String, maintenant: f64) {
        self.erreur = msg;
        self.minuterie.programmer(maintenant, DELAI_ERREUR_S);
    }

    fn effacer_erreur(&mut self) {
        self.erreur.clear();
        self.minuterie.annuler();
    }
}
