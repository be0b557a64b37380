// src/noyau/erreur.rs

use thiserror::Error;

/// Échecs de l’évaluation RPN.
///
/// Toute erreur interrompt l’évaluation au premier jeton fautif ;
/// la pile est abandonnée (aucun résultat partiel).
/// Les positions sont l’index du jeton (à partir de 0).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurRpn {
    #[error("jeton invalide : {jeton:?} (position {position})")]
    JetonInvalide { jeton: String, position: usize },

    #[error(
        "opérandes insuffisants pour {symbole:?} (position {position}) : \
         {requis} requis, {disponibles} sur la pile"
    )]
    OperandesInsuffisants {
        symbole: String,
        position: usize,
        requis: usize,
        disponibles: usize,
    },

    #[error("division par zéro (position {position})")]
    DivisionParZero { position: usize },

    /// Pile finale vide ou à plusieurs valeurs (instantané après le dernier jeton).
    #[error("expression incomplète : pile {}", format_pile(.pile))]
    ExpressionIncomplete { pile: Vec<f64> },
}

/// Pile en texte pour diagnostic : "[5.0 4.0]" (une décimale, comme la référence).
pub fn format_pile(pile: &[f64]) -> String {
    let parts: Vec<String> = pile.iter().map(|v| format!("{v:.1}")).collect();
    format!("[{}]", parts.join(" "))
}
