// src/app/vue.rs
//
// Vue (UI egui)
// -------------
// Objectifs :
// - pavé complet : chiffres, point, E+/E-, X, opérateurs, fonctions
// - chaque bouton envoie son lexème tel quel à la session
// - clavier : Enter évalue, Backspace retire le dernier lexème
//   (sauf quand le champ X a le focus, il garde son édition)
// - panneau de tracé : bornes de fenêtre + canevas à polylignes
//
// Les densités passées au noyau sont des pixels PAR UNITÉ d'axe :
// largeur du canevas divisée par l'étendue en x, pareil en y.

use eframe::egui;

use super::etat::AppCalc;

/// Hauteur du canevas de tracé.
const HAUTEUR_CANEVAS: f32 = 260.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice Scientifique");
                ui.add_space(6.0);

                self.ui_affichages(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_trace(ui);
            });
    }

    /* ------------------------ Affichages ------------------------ */

    fn ui_affichages(&mut self, ui: &mut egui::Ui) {
        ui.label("Expression :");
        Self::champ_monospace(ui, "expression_out", &self.session.expression());

        ui.add_space(6.0);

        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", self.session.resultat());
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str) {
        // lecture seule, cadre stable, sans TextEdit interactif
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(ui.text_style_height(&egui::TextStyle::Monospace));
                    ui.monospace(contenu);
                });
            });
    }

    /* ------------------------ Pavés de boutons ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        // actions + champ X
        ui.horizontal(|ui| {
            self.bouton_action(ui, "AC", "Efface expression, résultat et tracé");
            self.bouton_action(ui, "<-", "Retire le dernier lexème");
            self.bouton_action(ui, "=", "Évalue l'expression");

            ui.separator();

            ui.label("X =");
            let champ_x = ui.add(
                egui::TextEdit::singleline(&mut self.valeur_x)
                    .desired_width(120.0)
                    .hint_text("valeur de X"),
            );

            // Enter évalue, même depuis le champ X ; Backspace ne
            // retire un lexème que hors édition de X
            let (entree, retour) = ui.input(|i| {
                (
                    i.key_pressed(egui::Key::Enter),
                    i.key_pressed(egui::Key::Backspace),
                )
            });
            if entree {
                self.appui("=");
            }
            if retour && !champ_x.has_focus() {
                self.appui("<-");
            }
        });

        ui.add_space(8.0);

        // fonctions
        ui.horizontal_wrapped(|ui| {
            for nom in ["sin", "cos", "tan", "asin", "acos", "atan"] {
                self.bouton_lexeme(ui, nom, nom);
            }
        });
        ui.horizontal_wrapped(|ui| {
            for nom in ["sqrt", "ln", "log", "mod", "^"] {
                self.bouton_lexeme(ui, nom, nom);
            }
            self.bouton_lexeme(ui, "u+", "unary +");
            self.bouton_lexeme(ui, "u-", "unary -");
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_lexeme(ui, "7", "7");
                self.bouton_lexeme(ui, "8", "8");
                self.bouton_lexeme(ui, "9", "9");
                self.bouton_lexeme(ui, "(", "(");
                self.bouton_lexeme(ui, ")", ")");
                ui.end_row();

                self.bouton_lexeme(ui, "4", "4");
                self.bouton_lexeme(ui, "5", "5");
                self.bouton_lexeme(ui, "6", "6");
                self.bouton_lexeme(ui, "*", "*");
                self.bouton_lexeme(ui, "/", "/");
                ui.end_row();

                self.bouton_lexeme(ui, "1", "1");
                self.bouton_lexeme(ui, "2", "2");
                self.bouton_lexeme(ui, "3", "3");
                self.bouton_lexeme(ui, "+", "+");
                self.bouton_lexeme(ui, "-", "-");
                ui.end_row();

                self.bouton_lexeme(ui, "0", "0");
                self.bouton_lexeme(ui, ".", ".");
                self.bouton_lexeme(ui, "X", "X");
                self.bouton_lexeme(ui, "E+", "E+");
                self.bouton_lexeme(ui, "E-", "E-");
                ui.end_row();
            });
    }

    /// Bouton qui envoie `etiquette` à la session, affiché `affiche`.
    fn bouton_lexeme(&mut self, ui: &mut egui::Ui, affiche: &str, etiquette: &str) {
        let reponse = ui
            .add_sized([46.0, 28.0], egui::Button::new(affiche))
            .on_hover_text(etiquette);
        if reponse.clicked() {
            self.appui(etiquette);
        }
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, etiquette: &str, bulle: &str) {
        let reponse = ui
            .add_sized([56.0, 30.0], egui::Button::new(etiquette))
            .on_hover_text(bulle);
        if reponse.clicked() {
            self.appui(etiquette);
        }
    }

    /* ------------------------ Tracé ------------------------ */

    fn ui_trace(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Tracé")
            .default_open(true)
            .show(ui, |ui| {
                let mut tracer_demande = false;

                ui.horizontal_wrapped(|ui| {
                    ui.label("x :");
                    ui.add(egui::DragValue::new(&mut self.x_min).speed(0.1));
                    ui.label("à");
                    ui.add(egui::DragValue::new(&mut self.x_max).speed(0.1));

                    ui.separator();

                    ui.label("y :");
                    ui.add(egui::DragValue::new(&mut self.y_min).speed(0.1));
                    ui.label("à");
                    ui.add(egui::DragValue::new(&mut self.y_max).speed(0.1));

                    ui.add_space(10.0);

                    if ui.add_sized([72.0, 28.0], egui::Button::new("Tracer")).clicked() {
                        tracer_demande = true;
                    }
                });

                ui.add_space(6.0);

                let (reponse, peintre) = ui.allocate_painter(
                    egui::vec2(ui.available_width(), HAUTEUR_CANEVAS),
                    egui::Sense::hover(),
                );
                let cadre = reponse.rect;

                if tracer_demande {
                    // pixels par unité d'axe, au moins 1
                    let x_pix = (f64::from(cadre.width()) / (self.x_max - self.x_min))
                        .round()
                        .max(1.0) as i32;
                    let y_pix = (f64::from(cadre.height()) / (self.y_max - self.y_min))
                        .round()
                        .max(1.0) as i32;
                    self.tracer(x_pix, y_pix);
                }

                self.peindre_courbes(ui, &peintre, cadre);
            });
    }

    fn peindre_courbes(&self, ui: &egui::Ui, peintre: &egui::Painter, cadre: egui::Rect) {
        peintre.rect_filled(cadre, 2.0, ui.visuals().extreme_bg_color);

        // repère, ordonnée inversée : l'écran descend, l'axe monte
        let vers_ecran = egui::emath::RectTransform::from_to(
            egui::Rect::from_x_y_ranges(
                self.x_min as f32..=self.x_max as f32,
                self.y_max as f32..=self.y_min as f32,
            ),
            cadre,
        );

        // axes si l'origine traverse la fenêtre
        let gris = ui.visuals().weak_text_color();
        if self.x_min < 0.0 && self.x_max > 0.0 {
            let haut = vers_ecran.transform_pos(egui::pos2(0.0, self.y_max as f32));
            let bas = vers_ecran.transform_pos(egui::pos2(0.0, self.y_min as f32));
            peintre.line_segment([haut, bas], egui::Stroke::new(1.0, gris));
        }
        if self.y_min < 0.0 && self.y_max > 0.0 {
            let gauche = vers_ecran.transform_pos(egui::pos2(self.x_min as f32, 0.0));
            let droite = vers_ecran.transform_pos(egui::pos2(self.x_max as f32, 0.0));
            peintre.line_segment([gauche, droite], egui::Stroke::new(1.0, gris));
        }

        let pinceau = egui::Stroke::new(1.5, egui::Color32::from_rgb(0x4a, 0x9e, 0xd9));
        for courbe in &self.courbes {
            let points: Vec<egui::Pos2> = courbe
                .iter()
                .map(|&(x, y)| vers_ecran.transform_pos(egui::pos2(x as f32, y as f32)))
                .collect();
            if points.len() == 1 {
                peintre.circle_filled(points[0], 1.5, pinceau.color);
            } else {
                peintre.add(egui::Shape::line(points, pinceau));
            }
        }
    }
}
