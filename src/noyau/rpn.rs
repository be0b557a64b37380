// src/noyau/rpn.rs
//
// RPN -> valeur (machine à états sur la pile)
// Pour chaque jeton, dans l’ordre:
// - opérateur binaire : il faut 2 valeurs ; x (empilé avant) op y (empilé après)
// - fonction unaire   : il faut 1 valeur
// - sinon             : littéral réel, ou JetonInvalide
//
// Règles:
// - Premier échec => arrêt immédiat, la pile est jetée.
// - Fin des jetons : exactement une valeur, sinon ExpressionIncomplete
//   (avec la pile finale, donc APRÈS le dernier empilement réussi).
// - Entrée vide => pile vide => ExpressionIncomplete (pas d’erreur “vide” dédiée).

use std::str::FromStr;

use num_traits::Float;
use tracing::{debug, trace};

use super::erreur::ErreurRpn;
use super::pile::{en_f64, Pile};
use super::table::{lookup, Operation};

/// Classement d’un jeton.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nature {
    Litteral,
    Operateur,
    Fonction,
}

/// Une étape de la démarche : le jeton et la pile juste après.
#[derive(Clone, Debug, PartialEq)]
pub struct Etape {
    pub position: usize,
    pub jeton: String,
    pub nature: Nature,
    pub pile: Vec<f64>,
}

/// État de l’évaluation : la pile, plus la position du prochain jeton.
#[derive(Debug)]
pub struct Evaluateur<F> {
    pile: Pile<F>,
    position: usize,
}

impl<F: Float + FromStr> Default for Evaluateur<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float + FromStr> Evaluateur<F> {
    pub fn new() -> Self {
        Self {
            pile: Pile::new(),
            position: 0,
        }
    }

    pub fn profondeur(&self) -> usize {
        self.pile.profondeur()
    }

    pub fn instantane(&self) -> Vec<f64> {
        self.pile.instantane()
    }

    /// Consomme un jeton.
    ///
    /// En cas d’erreur, l’évaluateur ne doit plus servir : l’appelant abandonne
    /// (c’est ce que fait `?` dans `evaluer_jetons`).
    pub fn etape(&mut self, jeton: &str) -> Result<Nature, ErreurRpn> {
        let position = self.position;
        self.position += 1;

        let nature = match lookup(jeton) {
            Some(op) => {
                self.appliquer(op, position)?;
                match op {
                    Operation::Binaire(_) => Nature::Operateur,
                    Operation::Unaire(_) => Nature::Fonction,
                }
            }
            None => {
                let v = jeton.parse::<F>().map_err(|_| {
                    debug!(jeton, position, "jeton invalide");
                    ErreurRpn::JetonInvalide {
                        jeton: jeton.to_string(),
                        position,
                    }
                })?;
                self.pile.push(v);
                Nature::Litteral
            }
        };

        trace!(jeton, position, profondeur = self.pile.profondeur(), ?nature, "étape");
        Ok(nature)
    }

    fn appliquer(&mut self, op: Operation, position: usize) -> Result<(), ErreurRpn> {
        let requis = op.arite();
        let disponibles = self.pile.profondeur();

        let args = self.pile.pop_n(requis).ok_or_else(|| {
            debug!(symbole = op.symbole(), position, requis, disponibles, "opérandes insuffisants");
            ErreurRpn::OperandesInsuffisants {
                symbole: op.symbole().to_string(),
                position,
                requis,
                disponibles,
            }
        })?;

        let v = match (op, args.as_slice()) {
            (Operation::Binaire(b), &[x, y]) => b.appliquer(x, y).ok_or_else(|| {
                debug!(position, "division par zéro");
                ErreurRpn::DivisionParZero { position }
            })?,
            (Operation::Unaire(f), &[x]) => f.appliquer(x),
            // pop_n rend exactement `requis` valeurs
            _ => unreachable!("arité incohérente"),
        };

        self.pile.push(v);
        Ok(())
    }

    /// Fin des jetons : la pile doit contenir exactement une valeur.
    pub fn terminer(self) -> Result<F, ErreurRpn> {
        self.pile.into_unique().map_err(|reste| {
            debug!(profondeur = reste.len(), "expression incomplète");
            ErreurRpn::ExpressionIncomplete {
                pile: en_f64(&reste),
            }
        })
    }
}

/// Évalue une suite de jetons (tout ou rien).
pub fn evaluer_jetons<F: Float + FromStr>(jetons: &[&str]) -> Result<F, ErreurRpn> {
    let mut ev = Evaluateur::new();
    for j in jetons {
        ev.etape(j)?;
    }
    ev.terminer()
}

/// Comme `evaluer_jetons`, en gardant la pile après chaque étape (démarche).
pub fn evaluer_jetons_trace<F: Float + FromStr>(
    jetons: &[&str],
) -> Result<(F, Vec<Etape>), ErreurRpn> {
    let mut ev = Evaluateur::new();
    let mut etapes = Vec::with_capacity(jetons.len());

    for (position, j) in jetons.iter().enumerate() {
        let nature = ev.etape(j)?;
        etapes.push(Etape {
            position,
            jeton: (*j).to_string(),
            nature,
            pile: ev.instantane(),
        });
    }

    let v = ev.terminer()?;
    Ok((v, etapes))
}
