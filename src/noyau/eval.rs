// src/noyau/eval.rs
//
// Évaluation d'une suite postfixe.
//
// Pile de doubles, un jeton à la fois :
// - nom du catalogue : on dépile l'arité, on applique, on rempile
// - `X`              : on lit la variable libre comme n'importe quel
//                      littéral (mêmes règles, mêmes erreurs)
// - autre            : littéral numérique, lu par nombre::vers_f64
//
// Le résultat est le sommet après le dernier jeton ; une suite vide
// vaut zéro. Les anomalies IEEE (division par zéro, domaines trig,
// NaN, infinis) ne sont PAS des erreurs : elles circulent comme
// valeurs jusqu'à l'affichage.

use super::catalogue::Fonction;
use super::erreur::ErreurCalc;
use super::nombre;

/// Pile de valeurs de l'évaluation. Possédée par la session,
/// remise à zéro à chaque évaluation.
#[derive(Clone, Debug, Default)]
pub struct PileValeurs {
    valeurs: Vec<f64>,
}

impl PileValeurs {
    pub fn vider(&mut self) {
        self.valeurs.clear();
    }

    fn empiler(&mut self, valeur: f64) {
        self.valeurs.push(valeur);
    }

    /// Dépile `arite` opérandes, sommet en tête de liste.
    fn depiler(&mut self, arite: usize) -> Result<Vec<f64>, ErreurCalc> {
        let mut operandes = Vec::with_capacity(arite);
        for _ in 0..arite {
            match self.valeurs.pop() {
                Some(v) => operandes.push(v),
                None => return Err(ErreurCalc::ArgumentsInsuffisants),
            }
        }
        Ok(operandes)
    }

    fn sommet(&self) -> Option<f64> {
        self.valeurs.last().copied()
    }
}

/// Évalue `rpn` avec `variable` comme valeur textuelle de `X`.
pub fn evaluer(
    rpn: &[String],
    variable: &str,
    pile: &mut PileValeurs,
) -> Result<f64, ErreurCalc> {
    pile.vider();
    for jeton in rpn {
        if let Some(fonction) = Fonction::depuis_nom(jeton) {
            let operandes = pile.depiler(fonction.arite())?;
            pile.empiler(fonction.applique(&operandes));
        } else if jeton == "X" {
            pile.empiler(nombre::vers_f64(variable)?);
        } else {
            pile.empiler(nombre::vers_f64(jeton)?);
        }
    }
    Ok(pile.sommet().unwrap_or(0.0))
}
