//! Noyau de la calculatrice scientifique
//!
//! Organisation interne :
//! - catalogue.rs : les opérations nommées (arité, précédence, calcul)
//! - saisie.rs    : la suite de lexèmes entrés bouton par bouton
//! - jetons.rs    : découpage des lexèmes en jetons
//! - rpn.rs       : shunting-yard, infixe -> postfixe
//! - eval.rs      : évaluation postfixe avec variable libre X
//! - nombre.rs    : lecture strtod et rendus décimal / hexadécimal
//! - graphe.rs    : traceur adaptatif + découpe en polylignes
//! - erreur.rs    : les trois familles d'erreurs, textes figés
//! - session.rs   : la façade qui relie tout

pub mod catalogue;
pub mod erreur;
pub mod eval;
pub mod graphe;
pub mod jetons;
pub mod nombre;
pub mod rpn;
pub mod saisie;
pub mod session;

#[cfg(test)]
mod tests_convertisseur;


// API publique minimale
pub use graphe::Courbe;
pub use session::Session;
