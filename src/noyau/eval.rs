//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN (pile) -> valeur -> affichage
//!
//! Aucun état entre deux appels : même entrée => même sortie.

use tracing::instrument;

use super::erreur::ErreurRpn;
use super::format::formater;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{evaluer_jetons, evaluer_jetons_trace, Etape};

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub etapes: Vec<Etape>,
}

/// Évalue une expression RPN : valeur seule (f64).
pub fn evaluer(expr: &str) -> Result<f64, ErreurRpn> {
    evaluer_jetons(&tokenize(expr))
}

/// API publique (front-ends) : évalue une expression et retourne:
/// - la valeur brute
/// - le texte affiché (`decimales` chiffres, zéros finaux retirés)
/// - la démarche (jetons + pile après chaque étape)
#[instrument(level = "debug", skip_all, fields(longueur = expr_str.len()))]
pub fn eval_expression(
    expr_str: &str,
    decimales: usize,
) -> Result<(f64, String, DemarcheNoyau), ErreurRpn> {
    let jetons = tokenize(expr_str);
    let (valeur, etapes) = evaluer_jetons_trace(&jetons)?;

    let d = DemarcheNoyau {
        jetons: format_tokens(&jetons),
        etapes,
    };

    Ok((valeur, formater(valeur, decimales), d))
}
