// src/app.rs
//
// Calculatrice Scientifique — module App (racine)
// -----------------------------------------------
// Rôle :
// - déclarer les sous-modules (etat.rs + vue.rs)
// - ré-exporter AppCalc (pour main.rs : use app::AppCalc;)
// - fournir l'impl eframe::App
//
// Enter/Backspace sont gérés dans vue.rs, au bon endroit : là où on
// sait si le champ X a le focus.

pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // raccourci global minimal : ESC = remise à zéro (comme AC)
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.appui("AC");
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
