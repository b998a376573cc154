//! Campagne du convertisseur : scénarios postfixes de référence.
//!
//! Chaque cas part des LEXÈMES (comme au clavier), traverse le
//! découpage puis le tri, et se compare au postfixe attendu.
//! Deux invariants sont vérifiés au passage sur chaque succès :
//! - aucune parenthèse ne survit dans la sortie
//! - chaque opérateur de l'entrée se retrouve dans la sortie,
//!   ni plus ni moins

use pretty_assertions::assert_eq;

use super::catalogue::Fonction;
use super::erreur::ErreurCalc;
use super::jetons::decouper;
use super::rpn::{en_rpn, PileOperateurs};

fn postfixe(lexemes: &[&str]) -> Result<Vec<String>, ErreurCalc> {
    let saisie: Vec<String> = lexemes.iter().map(|l| l.to_string()).collect();
    let jetons = decouper(&saisie);
    let sortie = en_rpn(&jetons, &mut PileOperateurs::default())?;

    assert!(
        sortie.iter().all(|j| j != "(" && j != ")"),
        "parenthèse dans le postfixe: {sortie:?}"
    );
    let operateurs = |suite: &[String]| {
        suite
            .iter()
            .filter(|j| Fonction::depuis_nom(j).is_some())
            .count()
    };
    assert_eq!(
        operateurs(&jetons),
        operateurs(&sortie),
        "opérateurs perdus ou inventés pour {lexemes:?}"
    );

    Ok(sortie)
}

fn verifie(lexemes: &[&str], attendu: &[&str]) {
    let sortie = postfixe(lexemes).unwrap_or_else(|e| panic!("{lexemes:?}: {e}"));
    let attendu: Vec<String> = attendu.iter().map(|j| j.to_string()).collect();
    assert_eq!(sortie, attendu, "entrée {lexemes:?}");
}

fn verifie_erreur(lexemes: &[&str], attendu: ErreurCalc) {
    assert_eq!(postfixe(lexemes), Err(attendu), "entrée {lexemes:?}");
}

/* ------------------------ bases ------------------------ */

#[test]
fn campagne_atomes() {
    verifie(&["1"], &["1"]);
    verifie(&["(", "1", ")"], &["1"]);
    verifie(&["(", ")"], &[]);
    verifie(&["1", "2"], &["12"]);
    verifie(&["X"], &["X"]);
}

#[test]
fn campagne_binaires() {
    verifie(
        &["3", "+", "4", "*", "2", "/", "(", "1", "-", "5", ")", "^", "2", "^", "3"],
        &["3", "4", "2", "*", "1", "5", "-", "2", "3", "^", "^", "/", "+"],
    );
    verifie(
        &["3", "+", "4", "*", "2", "/", "(", "1", "-", "5", ")", "^", "2", "^", "7", "7"],
        &["3", "4", "2", "*", "1", "5", "-", "2", "77", "^", "^", "/", "+"],
    );
    verifie(&["2", "^", "3", "^", "4"], &["2", "3", "4", "^", "^"]);
    verifie(
        &["4", "*", "5", "/", "(", "7", "mod", "unary +", "unary -", "2", ")"],
        &["4", "5", "*", "7", "2", "unary -", "unary +", "mod", "/"],
    );
}

/* ------------------------ fonctions préfixes ------------------------ */

#[test]
fn campagne_fonctions() {
    verifie(&["sin", "1"], &["1", "sin"]);
    verifie(&["sin", "1", "2"], &["12", "sin"]);
    verifie(&["sin", "cos", "2"], &["2", "cos", "sin"]);
    verifie(&["sin", "2", "cos", "3"], &["2", "sin", "3", "cos"]);
    verifie(
        &["sin", "(", "cos", "2", "+", "5", ")"],
        &["2", "cos", "5", "+", "sin"],
    );
    verifie(
        &["sin", "(", "cos", "(", "2", "+", "5", ")", "/", "3", "*", "7", ")"],
        &["2", "5", "+", "cos", "3", "/", "7", "*", "sin"],
    );
}

#[test]
fn campagne_lexemes_inconnus() {
    // l'inconnu est matière à nombre, le tri ne bronche pas
    verifie(&["#", "sin", "2"], &["#", "2", "sin"]);
    verifie(&["sin", "#", "2"], &["#2", "sin"]);
}

/* ------------------------ unaires préfixes ------------------------ */

#[test]
fn campagne_unaires_simples() {
    verifie(&["unary +", "1"], &["1", "unary +"]);
    verifie(&["unary -", "1"], &["1", "unary -"]);
    verifie(&["unary +", "unary -", "2"], &["2", "unary -", "unary +"]);
    verifie(
        &["unary -", "2", "unary -", "3"],
        &["2", "unary -", "3", "unary -"],
    );
    verifie(
        &["unary -", "2", "unary +", "3"],
        &["2", "unary -", "3", "unary +"],
    );
    verifie(
        &["unary +", "unary -", "2", "3"],
        &["23", "unary -", "unary +"],
    );
}

#[test]
fn campagne_unaires_et_parentheses() {
    verifie(
        &["unary -", "(", "2", "/", "3", ")"],
        &["2", "3", "/", "unary -"],
    );
    verifie(
        &["unary -", "(", "3", "+", "4", "*", "2", "/", "(", "1", "-", "5", ")", "^", "2", "^",
          "3", ")"],
        &["3", "4", "2", "*", "1", "5", "-", "2", "3", "^", "^", "/", "+", "unary -"],
    );
    verifie(
        &["unary +", "unary -", "(", "2", ")", "3"],
        &["2", "unary -", "unary +", "3"],
    );
    verifie(
        &["(", "unary +", "unary -", "2", ")", "3"],
        &["2", "unary -", "unary +", "3"],
    );
    verifie(
        &["unary +", "unary -", "(", "unary +", "unary -", "2", ")", "3"],
        &["2", "unary -", "unary +", "unary -", "unary +", "3"],
    );
}

#[test]
fn campagne_unaires_et_fonctions() {
    verifie(
        &["unary -", "2", "cos", "3"],
        &["2", "unary -", "3", "cos"],
    );
    verifie(
        &["sin", "unary +", "unary -", "2", "3"],
        &["23", "unary -", "unary +", "sin"],
    );
    verifie(
        &["sin", "unary -", "2", "cos", "unary -", "3"],
        &["2", "unary -", "sin", "3", "unary -", "cos"],
    );
    verifie(
        &["sin", "unary -", "2", "cos", "unary +", "3"],
        &["2", "unary -", "sin", "3", "unary +", "cos"],
    );
    verifie(
        &["sin", "(", "unary -", "2", ")", "cos", "(", "unary +", "3", ")"],
        &["2", "unary -", "sin", "3", "unary +", "cos"],
    );
    verifie(
        &["sin", "unary -", "2", "*", "cos", "unary +", "3"],
        &["2", "unary -", "sin", "3", "unary +", "cos", "*"],
    );
    verifie(
        &["sin", "(", "unary -", "2", ")", "*", "cos", "(", "unary +", "3", ")"],
        &["2", "unary -", "sin", "3", "unary +", "cos", "*"],
    );
    verifie(
        &["unary -", "sin", "2", "unary +", "cos", "3"],
        &["2", "sin", "unary -", "3", "cos", "unary +"],
    );
}

#[test]
fn campagne_unaires_et_binaires() {
    verifie(
        &["unary -", "2", "+", "unary -", "3"],
        &["2", "unary -", "3", "unary -", "+"],
    );
    verifie(
        &["unary -", "2", "+", "unary +", "3"],
        &["2", "unary -", "3", "unary +", "+"],
    );
    verifie(
        &["unary +", "2", "+", "unary -", "3"],
        &["2", "unary +", "3", "unary -", "+"],
    );
    verifie(
        &["2", "^", "unary -", "1", "^", "4"],
        &["2", "1", "unary -", "4", "^", "^"],
    );
    verifie(
        &["6", "/", "unary -", "1", "*", "unary -", "2"],
        &["6", "1", "unary -", "/", "2", "unary -", "*"],
    );
    // les unaires en pile masquent les binaires en dessous
    verifie(
        &["3", "*", "+", "-", "/", "unary +", "unary -", "2"],
        &["3", "*", "+", "2", "unary -", "unary +", "/", "-"],
    );
}

/* ------------------------ échecs structurels ------------------------ */

#[test]
fn campagne_parentheses_orphelines() {
    verifie_erreur(&[")"], ErreurCalc::ParentheseGaucheManquante);
    verifie_erreur(&["2", "+", "3", ")"], ErreurCalc::ParentheseGaucheManquante);
    verifie_erreur(&["2", "3", ")"], ErreurCalc::ParentheseGaucheManquante);

    verifie_erreur(&["("], ErreurCalc::ParentheseDroiteManquante);
    verifie_erreur(&["sin"], ErreurCalc::ParentheseDroiteManquante);
    verifie_erreur(&["1", "sin"], ErreurCalc::ParentheseDroiteManquante);
    verifie_erreur(&["2", "#", "sin"], ErreurCalc::ParentheseDroiteManquante);
    verifie_erreur(&["unary +"], ErreurCalc::ParentheseDroiteManquante);
    verifie_erreur(&["unary -"], ErreurCalc::ParentheseDroiteManquante);
    verifie_erreur(&["2", "unary -"], ErreurCalc::ParentheseDroiteManquante);
    verifie_erreur(
        &["2", "unary -", "+", "3"],
        ErreurCalc::ParentheseDroiteManquante,
    );
    verifie_erreur(&["(", "sin", ")"], ErreurCalc::ParentheseDroiteManquante);
}
