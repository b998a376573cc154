// src/noyau/session.rs
//
// Session : le point d'entrée unique du noyau.
//
// Possède la saisie, les deux piles de travail, la variable libre et
// la zone résultat. Les erreurs de conversion et d'évaluation sont
// attrapées ICI et nulle part ailleurs : elles deviennent le texte de
// la zone résultat, la saisie et la variable restent intactes.
//
// Entrées :
// - bouton(etiquette)     : AC, =, <-, ou lexème à ajouter
// - definir_variable(txt) : contenu textuel de X
// - tracer(...)           : polylignes de la fenêtre demandée
// Sorties :
// - expression() / resultat()

use super::erreur::ErreurCalc;
use super::eval::{evaluer, PileValeurs};
use super::graphe::{self, Courbe};
use super::jetons::decouper;
use super::nombre;
use super::rpn::{en_rpn, PileOperateurs};
use super::saisie::Saisie;

/// Une calculatrice complète. Les sessions sont indépendantes entre
/// elles ; chacune se manipule depuis un seul fil.
#[derive(Clone, Debug, Default)]
pub struct Session {
    saisie: Saisie,
    pile_operateurs: PileOperateurs,
    pile_valeurs: PileValeurs,
    variable: String,
    resultat: String,
}

impl Session {
    pub fn nouvelle() -> Session {
        Session::default()
    }

    /// Dispatch des boutons. Toute étiquette non réservée est un
    /// lexème et rejoint la saisie telle quelle.
    pub fn bouton(&mut self, etiquette: &str) {
        match etiquette {
            "AC" => {
                self.saisie.vider();
                self.resultat.clear();
            }
            "=" => {
                self.resultat = match self.calculer() {
                    Ok(valeur) => nombre::texte_lisible(valeur),
                    Err(erreur) => erreur.to_string(),
                };
                log::debug!("= {:?} -> {:?}", self.saisie.affichage(), self.resultat);
            }
            "<-" => self.saisie.retirer_dernier(),
            lexeme => self.saisie.ajouter(lexeme),
        }
    }

    /// Remplace le contenu textuel de la variable libre X.
    pub fn definir_variable(&mut self, texte: &str) {
        self.variable = texte.to_string();
    }

    /// Forme affichable de l'expression courante.
    pub fn expression(&self) -> String {
        self.saisie.affichage()
    }

    /// Dernier résultat : nombre en décimal lisible, ou message
    /// d'erreur mot pour mot.
    pub fn resultat(&self) -> &str {
        &self.resultat
    }

    /// Pipeline complet sur la saisie courante, avec la variable
    /// de la session.
    fn calculer(&mut self) -> Result<f64, ErreurCalc> {
        let jetons = decouper(self.saisie.lexemes());
        let rpn = en_rpn(&jetons, &mut self.pile_operateurs)?;
        evaluer(&rpn, &self.variable, &mut self.pile_valeurs)
    }

    /// Trace l'expression vue comme fonction de X sur la fenêtre
    /// donnée (densités en pixels par unité d'axe).
    ///
    /// Saisie vide : aucune polyligne. Erreur d'évaluation : aucune
    /// polyligne et le message part dans la zone résultat. La
    /// variable de la session n'est pas touchée, chaque abscisse est
    /// passée en encodage hexadécimal exact le temps d'un calcul.
    pub fn tracer(
        &mut self,
        x_lo: f64,
        x_hi: f64,
        x_pix: i32,
        y_lo: f64,
        y_hi: f64,
        y_pix: i32,
    ) -> Vec<Courbe> {
        if self.expression().is_empty() {
            return Vec::new();
        }

        let Session {
            saisie,
            pile_operateurs,
            pile_valeurs,
            ..
        } = self;

        let trace = graphe::graphes(
            |x| {
                let abscisse = nombre::texte_exact(x);
                let jetons = decouper(saisie.lexemes());
                let rpn = en_rpn(&jetons, pile_operateurs)?;
                evaluer(&rpn, &abscisse, pile_valeurs)
            },
            x_lo,
            x_hi,
            x_pix,
            y_lo,
            y_hi,
            y_pix,
        );

        match trace {
            Ok(courbes) => {
                log::debug!(
                    "tracé [{x_lo}, {x_hi}] x [{y_lo}, {y_hi}] : {} polyligne(s)",
                    courbes.len()
                );
                courbes
            }
            Err(erreur) => {
                self.resultat = erreur.to_string();
                Vec::new()
            }
        }
    }
}
