//! Noyau RPN (flottant, f64)
//!
//! Organisation interne :
//! - jetons.rs   : découpage en jetons (blancs)
//! - table.rs    : table fixe opérateurs / fonctions
//! - pile.rs     : pile d’opérandes
//! - rpn.rs      : machine à états (jetons -> valeur)
//! - erreur.rs   : erreurs typées
//! - format.rs   : affichage décimal
//! - eval.rs     : pipeline complet

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod pile;
pub mod rpn;
pub mod table;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::ErreurRpn;
pub use eval::{eval_expression, evaluer};
