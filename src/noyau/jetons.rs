// src/noyau/jetons.rs

/// Découpe une ligne en jetons séparés par des blancs.
///
/// - espaces, tabulations, retours ligne : même traitement
/// - entrée vide ou blanche => aucun jeton
/// - jamais de jeton vide, jamais d’erreur
///
/// Les jetons empruntent la ligne : aucune copie.
pub fn tokenize(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[&str]) -> String {
    tokens.join(" ")
}
