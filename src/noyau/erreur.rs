// src/noyau/erreur.rs
//
// Erreurs du noyau : trois familles seulement.
// - structurelle : parenthèse orpheline détectée à la conversion RPN
// - arité        : pile de valeurs trop courte pour un opérateur
// - numérique    : jeton illisible comme double (avec le jeton fautif)
//
// Les textes affichés sont FIGÉS mot pour mot : c'est le contrat
// d'affichage de la calculatrice, on ne les reformule pas.

use thiserror::Error;

/// Erreur levée par la conversion RPN ou l'évaluation.
/// `Display` rend exactement la chaîne déposée dans la zone résultat.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ErreurCalc {
    #[error("missing left parenthesis")]
    ParentheseGaucheManquante,

    #[error("missing right parenthesis")]
    ParentheseDroiteManquante,

    #[error("not enough arguments")]
    ArgumentsInsuffisants,

    #[error(transparent)]
    Nombre(#[from] ErreurNombre),
}

/// Échec de lecture d'un jeton comme nombre.
/// La chaîne portée est le jeton fautif, tel quel.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ErreurNombre {
    /// Aucun préfixe du jeton n'est un nombre.
    #[error("std::stod error: string <{0}> is unconvertable to number")]
    Inconvertible(String),

    /// Le nombre déborde la capacité d'un double.
    #[error("std::stod error: string <{0}> is to big for current number type (double)")]
    TropGrand(String),

    /// Un préfixe se lit, mais il reste des caractères derrière.
    #[error("string <{0}> is unconvertable to number")]
    LectureIncomplete(String),
}
