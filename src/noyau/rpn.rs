// src/noyau/rpn.rs
//
// Shunting-yard : jetons infixes -> jetons postfixes.
//
// Trois classes d'opérateurs, trois traitements :
// - binaires gauches  : dépilés à précédence supérieure OU égale
// - binaires droits   : dépilés à précédence strictement supérieure
// - unaires préfixes  : jamais comparés, poussés comme les autres mais
//   vidés dès qu'un opérande sort (littéral ou parenthèse fermante).
//   C'est ce qui donne `sin u- 2 -> 2 u- sin`.
//
// La comparaison de précédence ne voit QUE les binaires : un unaire en
// sommet de pile coupe le dépilement, il reste collé à son opérande.

use super::catalogue::{Associativite, Fonction};
use super::erreur::ErreurCalc;

/// Pile d'opérateurs du tri. Ne contient que des noms du catalogue
/// et des parenthèses gauches. Possédée par la session, remise à
/// zéro à chaque conversion.
#[derive(Clone, Debug, Default)]
pub struct PileOperateurs {
    jetons: Vec<String>,
}

impl PileOperateurs {
    pub fn vider(&mut self) {
        self.jetons.clear();
    }

    pub fn est_vide(&self) -> bool {
        self.jetons.is_empty()
    }

    fn pousser(&mut self, jeton: &str) {
        self.jetons.push(jeton.to_string());
    }

    /// Dépile les unaires en sommet, dans l'ordre de sortie.
    /// S'arrête sur une parenthèse ou un binaire.
    fn depiler_unaires(&mut self) -> Vec<String> {
        let mut sortis = Vec::new();
        while let Some(haut) = self.jetons.last() {
            match Fonction::depuis_nom(haut) {
                Some(f) if f.arite() == 1 => sortis.push(self.jetons.pop().unwrap_or_default()),
                _ => break,
            }
        }
        sortis
    }

    /// Dépile les binaires en sommet. S'arrête sur une parenthèse
    /// ou un unaire.
    fn depiler_binaires(&mut self) -> Vec<String> {
        let mut sortis = Vec::new();
        while let Some(haut) = self.jetons.last() {
            match Fonction::depuis_nom(haut) {
                Some(f) if f.arite() > 1 => sortis.push(self.jetons.pop().unwrap_or_default()),
                _ => break,
            }
        }
        sortis
    }

    /// Dépile les binaires qui priment sur l'opérateur entrant :
    /// précédence supérieure, ou égale si l'entrant associe à gauche.
    /// Les unaires coupent la descente sans être comparés.
    fn depiler_prioritaires(&mut self, entrant: Fonction) -> Vec<String> {
        let mut sortis = Vec::new();
        while let Some(haut) = self.jetons.last() {
            let Some(f) = Fonction::depuis_nom(haut) else {
                break; // parenthèse gauche
            };
            if f.arite() <= 1 {
                break;
            }
            let prime = f.precedence() > entrant.precedence()
                || (f.precedence() == entrant.precedence()
                    && entrant.associativite() == Associativite::Gauche);
            if !prime {
                break;
            }
            sortis.push(self.jetons.pop().unwrap_or_default());
        }
        sortis
    }

    /// Retire la parenthèse gauche en sommet, si c'en est une.
    fn depiler_parenthese(&mut self) {
        if self.jetons.last().map(String::as_str) == Some("(") {
            self.jetons.pop();
        }
    }
}

/// Convertit une suite de jetons infixes en postfixe.
///
/// Échoue sur `missing left parenthesis` (fermante orpheline) ou
/// `missing right parenthesis` (la pile n'est pas vide à la fin,
/// parenthèse ouverte ou unaire jamais suivi d'un opérande).
pub fn en_rpn(jetons: &[String], pile: &mut PileOperateurs) -> Result<Vec<String>, ErreurCalc> {
    pile.vider();
    let mut sortie: Vec<String> = Vec::new();

    for jeton in jetons {
        if let Some(entrant) = Fonction::depuis_nom(jeton) {
            sortie.append(&mut pile.depiler_prioritaires(entrant));
            pile.pousser(jeton);
        } else if jeton == "(" {
            pile.pousser(jeton);
        } else if jeton == ")" {
            sortie.append(&mut pile.depiler_binaires());
            if pile.est_vide() {
                return Err(ErreurCalc::ParentheseGaucheManquante);
            }
            pile.depiler_parenthese();
            sortie.append(&mut pile.depiler_unaires());
        } else {
            // opérande : sortie directe, puis vidage des unaires en attente
            sortie.push(jeton.clone());
            sortie.append(&mut pile.depiler_unaires());
        }
    }

    sortie.append(&mut pile.depiler_binaires());
    if !pile.est_vide() {
        return Err(ErreurCalc::ParentheseDroiteManquante);
    }
    Ok(sortie)
}
