// src/noyau/minuterie.rs
//
// Minuterie annulable pour l’auto-effacement des messages d’erreur.
//
// Aucune horloge ici : l’appelant fournit “maintenant” en secondes (côté UI,
// egui donne `input.time`, valable en natif comme en wasm ; côté tests, un
// simple f64). Une seule échéance à la fois : reprogrammer remplace, toute
// interaction annule.

/// Délai d’affichage d’un message d’erreur avant retour à l’écran précédent.
pub const DELAI_ERREUR_S: f64 = 3.0;

#[derive(Clone, Copy, Debug, Default)]
pub struct Minuterie {
    echeance: Option<f64>,
}

impl Minuterie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Programme (ou reprogramme) l’échéance à `maintenant + delai`.
    pub fn programmer(&mut self, maintenant: f64, delai: f64) {
        self.echeance = Some(maintenant + delai);
    }

    /// Annule l’échéance en cours : la prochaine `echue` ne tirera pas.
    pub fn annuler(&mut self) {
        self.echeance = None;
    }

    /// Temps restant avant l’échéance (None si désarmée).
    pub fn restant(&self, maintenant: f64) -> Option<f64> {
        self.echeance.map(|e| (e - maintenant).max(0.0))
    }

    /// Tire une seule fois : vrai quand l’échéance est atteinte, puis désarme.
    pub fn echue(&mut self, maintenant: f64) -> bool {
        match self.echeance {
            Some(e) if maintenant >= e => {
                self.echeance = None;
                true
            }
            _ => false,
        }
    }
}
