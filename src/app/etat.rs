//! src/app/etat.rs
//!
//! État UI (sans vue, sans logique de calcul au-delà de la session).
//!
//! Rôle : porter la session du noyau, le texte de X, la fenêtre de
//! tracé et les dernières polylignes, et offrir des actions simples.
//!
//! Contrats :
//! - Aucun dessin ici, aucune dépendance egui.
//! - Actions déterministes, sans effet de bord caché.
//! - Garde-fou : pas de tracé sur une fenêtre dégénérée.

use crate::noyau::{Courbe, Session};

/// Fenêtre de tracé par défaut, en unités d'axe.
const FENETRE_DEFAUT: (f64, f64, f64, f64) = (-5.0, 5.0, -5.0, 5.0);

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub session: Session,

    // --- variable libre (texte brut, la session juge) ---
    pub valeur_x: String,

    // --- fenêtre de tracé ---
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,

    // --- dernières polylignes calculées ---
    pub courbes: Vec<Courbe>,
}

impl Default for AppCalc {
    fn default() -> Self {
        let (x_min, x_max, y_min, y_max) = FENETRE_DEFAUT;
        Self {
            session: Session::nouvelle(),
            valeur_x: "0".to_string(),
            x_min,
            x_max,
            y_min,
            y_max,
            courbes: Vec::new(),
        }
    }
}

impl AppCalc {
    /// Un appui de bouton : X est resynchronisé d'abord, pour que
    /// `=` évalue toujours avec la valeur à l'écran. `AC` efface
    /// aussi le tracé.
    pub fn appui(&mut self, etiquette: &str) {
        self.session.definir_variable(&self.valeur_x);
        self.session.bouton(etiquette);
        if etiquette == "AC" {
            self.courbes.clear();
        }
    }

    /// Lance le tracé avec les densités fournies par la vue
    /// (pixels par unité d'axe).
    pub fn tracer(&mut self, x_pix: i32, y_pix: i32) {
        // fenêtre dégénérée : on ne trace rien
        if !(self.x_min < self.x_max && self.y_min < self.y_max) {
            self.courbes.clear();
            return;
        }
        self.courbes = self.session.tracer(
            self.x_min, self.x_max, x_pix, self.y_min, self.y_max, y_pix,
        );
    }
}
