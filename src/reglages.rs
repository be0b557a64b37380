//! src/reglages.rs
//!
//! Réglages partagés par les front-ends (console + UI).
//!
//! Contrats :
//! - Le noyau ne lit aucun réglage : il reçoit des paramètres.
//! - Défense en profondeur : longueur d’entrée bornée AVANT le noyau,
//!   précision d’affichage bornée.

pub use crate::noyau::format::{DECIMALES_DEFAUT, DECIMALES_MAX};

/// Garde-fou : longueur maximale d’une ligne (octets).
pub const LONGUEUR_MAX_ENTREE: usize = 4096;

/// Précision d’affichage bornée à `0..=DECIMALES_MAX`.
pub fn borne_decimales(decimales: usize) -> usize {
    decimales.min(DECIMALES_MAX)
}

/// Message affiché pour une entrée de `octets` octets au-delà de la borne.
pub fn message_trop_longue(octets: usize) -> String {
    format!("entrée trop longue : {octets} octets (maximum {LONGUEUR_MAX_ENTREE})")
}

/// Refuse une entrée trop longue (message prêt à afficher).
pub fn controle_longueur(entree: &str) -> Result<&str, String> {
    if entree.len() > LONGUEUR_MAX_ENTREE {
        return Err(message_trop_longue(entree.len()));
    }
    Ok(entree)
}
