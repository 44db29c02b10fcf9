// src/app.rs
//
// Calculatrice Pavé — module App (racine)
// ---------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Les touches passent par les boutons du pavé et le clavier (vue.rs).
// - Ici, seul raccourci global : ESC = tout effacer (safe natif + web).

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use crate::noyau::Touche;
use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (esc, maintenant) = ctx.input(|i| (i.key_pressed(egui::Key::Escape), i.time));
        if esc {
            self.appuyer(Touche::Effacer, maintenant);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
