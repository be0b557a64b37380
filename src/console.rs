//! src/console.rs
//!
//! Boucle console : une ligne lue = une évaluation.
//!
//! Sortie (une ligne par message) :
//! - invite "Entrez une expression :" au départ et après chaque résultat
//! - "Résultat : <texte>" si l’évaluation réussit
//! - le message d’erreur sinon (pas de nouvelle invite, on attend la ligne suivante)
//!
//! Aucune erreur du noyau n’arrête la boucle ; seules les erreurs d’E/S remontent.
//!
//! Lecture en octets, bornée :
//! - au plus LONGUEUR_MAX_ENTREE + 1 octets gardés en mémoire par ligne ;
//!   le reste d’une ligne trop longue est consommé puis jeté
//! - octets non UTF-8 remplacés par U+FFFD : le jeton devient invalide,
//!   la boucle continue

use std::io::{self, BufRead, Read, Write};

use tracing::{debug, info};

use crate::noyau::evaluer;
use crate::noyau::format::formater;
use crate::reglages::{borne_decimales, message_trop_longue, LONGUEUR_MAX_ENTREE};

const INVITE: &str = "Entrez une expression :";

pub fn boucle<R: BufRead, W: Write>(
    mut entree: R,
    mut sortie: W,
    decimales: usize,
) -> io::Result<()> {
    let decimales = borne_decimales(decimales);
    info!(decimales, "boucle console");

    writeln!(sortie, "{INVITE}")?;

    let mut buf: Vec<u8> = Vec::with_capacity(256);
    loop {
        buf.clear();
        let lus = (&mut entree)
            .take(LONGUEUR_MAX_ENTREE as u64 + 1)
            .read_until(b'\n', &mut buf)?;
        if lus == 0 {
            break;
        }

        let fin_de_ligne = buf.last() == Some(&b'\n');
        if fin_de_ligne {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        } else if buf.len() > LONGUEUR_MAX_ENTREE {
            let reste = vider_ligne(&mut entree)?;
            debug!(octets = buf.len() + reste, "ligne trop longue");
            writeln!(sortie, "{}", message_trop_longue(buf.len() + reste))?;
            continue;
        }

        let ligne = String::from_utf8_lossy(&buf);

        match evaluer(&ligne) {
            Ok(v) => {
                writeln!(sortie, "Résultat : {}", formater(v, decimales))?;
                writeln!(sortie, "{INVITE}")?;
            }
            Err(e) => {
                debug!(%e, "ligne refusée");
                writeln!(sortie, "{e}")?;
            }
        }
        sortie.flush()?;
    }

    Ok(())
}

/// Consomme la fin de la ligne courante (jusqu’au '\n' inclus) sans la garder.
/// Retourne le nombre d’octets jetés, '\n' non compté.
fn vider_ligne<R: BufRead>(entree: &mut R) -> io::Result<usize> {
    let mut jetes = 0;
    loop {
        let dispo = entree.fill_buf()?;
        if dispo.is_empty() {
            return Ok(jetes);
        }
        match dispo.iter().position(|&b| b == b'\n') {
            Some(i) => {
                entree.consume(i + 1);
                return Ok(jetes + i);
            }
            None => {
                let n = dispo.len();
                entree.consume(n);
                jetes += n;
            }
        }
    }
}
