// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue, Backspace efface (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Pavé des symboles généré depuis la table du noyau (pas de liste en double)

use eframe::egui;
use tracing::debug;

use super::etat::{AppCalc, Demarche};
use crate::noyau::format::formater;
use crate::noyau::rpn::{Etape, Nature};
use crate::noyau::table::{descripteurs, lookup, Operation};
use crate::reglages::{controle_longueur, DECIMALES_MAX};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice RPN");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée (notation postfixe) :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2 3 +, 10 3 2 + -, 4 sqrt, 1 sin")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter évalue (seulement si le champ est focus)
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("Décimales :");
            let mut d = self.decimales as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=DECIMALES_MAX as u32),
            );
            if resp.changed() {
                self.set_decimales(d as usize);
            }
        });

        ui.add_space(8.0);

        // Symboles : directement depuis la table
        ui.horizontal_wrapped(|ui| {
            for d in descripteurs() {
                if let Operation::Binaire(_) = d.operation {
                    self.bouton_symbole(ui, d.symbole);
                }
            }
            ui.separator();
            for d in descripteurs() {
                if let Operation::Unaire(_) = d.operation {
                    self.bouton_symbole(ui, d.symbole);
                }
            }

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_rpn")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_chiffre(ui, "7");
                self.bouton_chiffre(ui, "8");
                self.bouton_chiffre(ui, "9");
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                ui.end_row();

                self.bouton_chiffre(ui, "4");
                self.bouton_chiffre(ui, "5");
                self.bouton_chiffre(ui, "6");
                self.bouton_action(ui, "ESP", "Sépare deux jetons", Action::Espace);
                ui.end_row();

                self.bouton_chiffre(ui, "1");
                self.bouton_chiffre(ui, "2");
                self.bouton_chiffre(ui, "3");
                self.bouton_chiffre(ui, ".");
                ui.end_row();

                self.bouton_chiffre(ui, "0");
                ui.label("");
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 2);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                ui.label("Jetons :");
                Self::champ_monospace(ui, "demarche_jetons", &self.demarche.jetons, 1);

                ui.add_space(4.0);
                ui.label("Pile après chaque jeton :");
                let texte = self.demarche.etapes.join("\n");
                let rows = self.demarche.etapes.len().max(1);
                Self::champ_monospace(ui, "demarche_pile", &texte, rows);
            });
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => retirer_dernier(&mut self.entree),
                Action::Espace => {
                    if !self.entree.is_empty() && !self.entree.ends_with(' ') {
                        self.entree.push(' ');
                    }
                }
            }
            self.focus_entree = true;
        }
    }

    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, chiffre: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(chiffre));
        if resp.clicked() {
            // chiffres : pas d’espaces auto (on construit un littéral)
            self.entree.push_str(chiffre);
            self.focus_entree = true;
        }
    }

    fn bouton_symbole(&mut self, ui: &mut egui::Ui, symbole: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(symbole));
        if resp.clicked() {
            inserer_symbole(&mut self.entree, symbole);
            self.focus_entree = true;
        }
    }

    /// Évalue l’entrée via le noyau, puis dépose résultat/démarche dans l’état UI.
    fn eval_via_noyau(&mut self) {
        let s = match controle_longueur(&self.entree) {
            Ok(s) => s,
            Err(msg) => {
                self.set_erreur(msg);
                return;
            }
        };

        match crate::noyau::eval_expression(s, self.decimales) {
            Ok((_valeur, texte, d_noyau)) => {
                let d_ui = Demarche {
                    jetons: d_noyau.jetons,
                    etapes: d_noyau
                        .etapes
                        .iter()
                        .map(|e| ligne_etape(e, self.decimales))
                        .collect(),
                };
                self.set_resultats(texte, d_ui);
            }
            Err(e) => {
                debug!(%e, "évaluation refusée");
                self.set_erreur(e.to_string());
            }
        }
    }
}

/// "2: +      [5]" — position, jeton, nature, pile après l’étape.
fn ligne_etape(e: &Etape, decimales: usize) -> String {
    let nature = match e.nature {
        Nature::Litteral => "nombre",
        Nature::Operateur => "opérateur",
        Nature::Fonction => "fonction",
    };
    let pile: Vec<String> = e.pile.iter().map(|v| formater(*v, decimales)).collect();
    format!("{}: {:<6} {:<9} [{}]", e.position, e.jeton, nature, pile.join(" "))
}

/// Ajoute un symbole comme jeton à part entière (espace avant/après).
fn inserer_symbole(entree: &mut String, symbole: &str) {
    while entree.ends_with(' ') {
        entree.pop();
    }
    if !entree.is_empty() {
        entree.push(' ');
    }
    entree.push_str(symbole);
    entree.push(' ');
}

/// Backspace “intelligent” : un symbole de la table part d’un coup, sinon un caractère.
fn retirer_dernier(entree: &mut String) {
    while entree.ends_with(' ') {
        entree.pop();
    }

    let dernier = entree.rsplit(' ').next().unwrap_or("");
    if lookup(dernier).is_some() {
        let garde = entree.len() - dernier.len();
        entree.truncate(garde);
    } else {
        entree.pop();
    }

    while entree.ends_with(' ') {
        entree.pop();
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
    Espace,
}
