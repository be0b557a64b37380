// src/noyau/format.rs
//
// Affichage du résultat (uniquement pour l’affichage : ne jamais recalculer à partir du texte).

/// Précision de référence.
pub const DECIMALES_DEFAUT: usize = 3;

/// Garde-fou : au-delà, le bruit binaire de f64 devient visible.
pub const DECIMALES_MAX: usize = 12;

/// Formate `valeur` avec `decimales` chiffres, puis retire les `0` finaux
/// et un `.` pendant.
///
/// - "5.000" -> "5", "0.667" -> "0.667", "2.500" -> "2.5"
/// - sans point décimal (decimales == 0, NaN, inf) : rien n’est retiré
/// - "-0" -> "0"
pub fn formater(valeur: f64, decimales: usize) -> String {
    let decimales = decimales.min(DECIMALES_MAX);
    let brut = format!("{valeur:.decimales$}");

    let net = if brut.contains('.') {
        brut.trim_end_matches('0').trim_end_matches('.')
    } else {
        brut.as_str()
    };

    if net == "-0" {
        "0".to_string()
    } else {
        net.to_string()
    }
}
