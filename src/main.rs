// src/main.rs
//
// Calculatrice Scientifique — point d'entrée natif
// ------------------------------------------------
// Ici : options de fenêtre et démarrage eframe, rien d'autre.
// L'impl eframe::App vit dans src/app.rs.

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

const TITRE_APP: &str = "Calculatrice Scientifique";

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([560.0, 760.0])
            .with_min_inner_size([440.0, 620.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
}
