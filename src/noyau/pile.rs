// src/noyau/pile.rs
//
// Pile d’opérandes : seule mémoire de travail de l’évaluation.
// Une pile par appel : jamais partagée, jamais réutilisée.

use num_traits::Float;

#[derive(Clone, Debug, Default)]
pub struct Pile<F> {
    valeurs: Vec<F>,
}

impl<F: Float> Pile<F> {
    pub fn new() -> Self {
        Self { valeurs: Vec::new() }
    }

    pub fn push(&mut self, v: F) {
        self.valeurs.push(v);
    }

    /// Dépile les `n` dernières valeurs, dans l’ordre d’empilement
    /// (la plus ancienne d’abord).
    ///
    /// `None` si la profondeur est insuffisante : la pile n’est alors PAS modifiée.
    pub fn pop_n(&mut self, n: usize) -> Option<Vec<F>> {
        let len = self.valeurs.len();
        if len < n {
            return None;
        }
        Some(self.valeurs.split_off(len - n))
    }

    pub fn profondeur(&self) -> usize {
        self.valeurs.len()
    }

    /// Consomme la pile : `Some(v)` si et seulement si elle contient exactement une valeur.
    pub fn into_unique(mut self) -> Result<F, Vec<F>> {
        if self.valeurs.len() == 1 {
            if let Some(v) = self.valeurs.pop() {
                return Ok(v);
            }
        }
        Err(self.valeurs)
    }

    /// Copie en f64 (diagnostic / démarche).
    pub fn instantane(&self) -> Vec<f64> {
        en_f64(&self.valeurs)
    }
}

/// Conversion diagnostic : une valeur non représentable devient NaN.
pub fn en_f64<F: Float>(valeurs: &[F]) -> Vec<f64> {
    valeurs
        .iter()
        .map(|v| v.to_f64().unwrap_or(f64::NAN))
        .collect()
}
