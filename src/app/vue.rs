// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Pavé tactile : gros boutons, pas de champ texte
// - Clavier : chiffres/opérateurs au vol (Event::Text), Enter évalue,
//   Backspace supprime — pas de TextEdit, donc pas de double déclenchement
// - Le message d’erreur revient tout seul (minuterie d’etat.rs) : on programme
//   un repaint à l’échéance, sinon egui dort et le message resterait affiché
//
// Disposition du pavé :
//   C    DEL  EXP  /
//   7    8    9    *
//   4    5    6    -
//   1    2    3    +
//   +/-  0    .    =

use std::time::Duration;

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Mode, Op, Touche};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // input.time : même horloge en natif et en wasm
        let maintenant = ui.input(|i| i.time);
        self.tic(maintenant);
        self.touches_clavier(ui, maintenant);

        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice Pavé");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);

        self.ui_pave(ui, maintenant);

        // Repaint à l’échéance du message (sinon il ne s’effacerait qu’au
        // prochain événement souris/clavier).
        if let Some(restant) = self.restant_erreur(maintenant) {
            ui.ctx()
                .request_repaint_after(Duration::from_secs_f64(restant.max(0.05)));
        }
    }

    /// Saisie clavier : mêmes touches que le pavé, au vol.
    fn touches_clavier(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        let evenements = ui.input(|i| i.events.clone());
        for ev in evenements {
            match ev {
                egui::Event::Text(t) => {
                    for c in t.chars() {
                        match c {
                            '0'..='9' => {
                                self.appuyer(Touche::Chiffre(c as u8 - b'0'), maintenant)
                            }
                            '.' | ',' => self.appuyer(Touche::Decimale, maintenant),
                            '=' => self.appuyer(Touche::Egal, maintenant),
                            c => {
                                if let Some(op) = Op::depuis_symbole(c) {
                                    self.appuyer(Touche::Operateur(op), maintenant);
                                }
                            }
                        }
                    }
                }
                egui::Event::Key {
                    key: egui::Key::Enter,
                    pressed: true,
                    ..
                } => self.appuyer(Touche::Egal, maintenant),
                egui::Event::Key {
                    key: egui::Key::Backspace,
                    pressed: true,
                    ..
                } => self.appuyer(Touche::Supprimer, maintenant),
                _ => {}
            }
        }
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let affichage = self.affichage();

        // Trace d’expression ("5 + 3 =" ; tiret au repos)
        ui.label(&affichage.trace);

        // Écran principal
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let texte = egui::RichText::new(affichage.ecran.as_str())
                        .monospace()
                        .size(28.0);
                    match affichage.mode {
                        Mode::Resultat => ui.label(texte.strong()),
                        Mode::Saisie | Mode::AttenteOperande => ui.label(texte),
                    };
                });
            });

        if !self.erreur.is_empty() {
            ui.add_space(4.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "C", "Tout effacer", Touche::Effacer, maintenant);
                self.bouton(
                    ui,
                    "DEL",
                    "Efface le dernier symbole",
                    Touche::Supprimer,
                    maintenant,
                );
                self.bouton(
                    ui,
                    "EXP",
                    "Ouvre l’exposant (base^exposant)",
                    Touche::Exposant,
                    maintenant,
                );
                self.bouton_op(ui, Op::Division, maintenant);
                ui.end_row();

                self.bouton_chiffre(ui, 7, maintenant);
                self.bouton_chiffre(ui, 8, maintenant);
                self.bouton_chiffre(ui, 9, maintenant);
                self.bouton_op(ui, Op::Fois, maintenant);
                ui.end_row();

                self.bouton_chiffre(ui, 4, maintenant);
                self.bouton_chiffre(ui, 5, maintenant);
                self.bouton_chiffre(ui, 6, maintenant);
                self.bouton_op(ui, Op::Moins, maintenant);
                ui.end_row();

                self.bouton_chiffre(ui, 1, maintenant);
                self.bouton_chiffre(ui, 2, maintenant);
                self.bouton_chiffre(ui, 3, maintenant);
                self.bouton_op(ui, Op::Plus, maintenant);
                ui.end_row();

                self.bouton_signe(ui, maintenant);
                self.bouton_chiffre(ui, 0, maintenant);
                self.bouton(ui, ".", "Virgule décimale", Touche::Decimale, maintenant);
                self.bouton(ui, "=", "Évalue l’expression", Touche::Egal, maintenant);
                ui.end_row();
            });
    }

    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, d: u8, maintenant: f64) {
        let label = ((b'0' + d) as char).to_string();
        let resp = ui.add_sized([56.0, 40.0], egui::Button::new(label));
        if resp.clicked() {
            self.appuyer(Touche::Chiffre(d), maintenant);
        }
    }

    /// Bouton +/- : en gras tant que le signe bascule n’est pas confirmé.
    fn bouton_signe(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        let mut label = egui::RichText::new("+/-");
        if self.signe_en_attente() {
            label = label.strong();
        }
        let resp = ui
            .add_sized([56.0, 40.0], egui::Button::new(label))
            .on_hover_text("Bascule le signe du segment en cours");
        if resp.clicked() {
            self.appuyer(Touche::Signe, maintenant);
        }
    }

    fn bouton_op(&mut self, ui: &mut egui::Ui, op: Op, maintenant: f64) {
        let resp = ui.add_sized([56.0, 40.0], egui::Button::new(op.to_string()));
        if resp.clicked() {
            self.appuyer(Touche::Operateur(op), maintenant);
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, touche: Touche, maintenant: f64) {
        let resp = ui
            .add_sized([56.0, 40.0], egui::Button::new(label))
            .on_hover_text(tip);
        if resp.clicked() {
            self.appuyer(touche, maintenant);
        }
    }
}
