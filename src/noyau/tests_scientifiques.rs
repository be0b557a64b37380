//! Tests scientifiques (campagne) : scénarios + limites + choix documentés.
//!
//! Notes :
//! - Tolérance relative 1e-3 (absolue si la valeur attendue est nulle), alignée
//!   sur la précision d’affichage à 3 décimales.
//! - Les valeurs “≈” viennent de la table de référence (radians).
//! - `^` ne lève jamais DivisionParZero : 0^-1 = +inf, (-8)^(1/3) = NaN.
//! - ExpressionIncomplete rapporte la pile APRÈS le dernier jeton.

use std::time::{Duration, Instant};

use super::erreur::ErreurRpn;
use super::eval::{eval_expression, evaluer};
use super::format::{formater, DECIMALES_DEFAUT};

fn proche(a: f64, b: f64, tol: f64) -> bool {
    if a == b {
        return true;
    }
    let diff = (a - b).abs();
    if b == 0.0 {
        return diff < tol;
    }
    diff / b.abs() < tol
}

fn eval_ok(expr: &str) -> f64 {
    evaluer(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, attendu: f64, tol: f64) {
    let v = eval_ok(expr);
    assert!(proche(v, attendu, tol), "expr={expr:?} attendu≈{attendu} obtenu={v}");
}

fn assert_txt(expr: &str, attendu: &str) {
    let (_v, txt, _d) =
        eval_expression(expr, DECIMALES_DEFAUT).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    assert_eq!(txt, attendu, "expr={expr:?}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Limites ------------------------ */

#[test]
fn sci_vide_est_incomplete() {
    for s in ["", "   ", "\t\n"] {
        assert_eq!(
            evaluer(s),
            Err(ErreurRpn::ExpressionIncomplete { pile: vec![] }),
            "expr={s:?}"
        );
    }
}

#[test]
fn sci_jeton_invalide() {
    assert_eq!(
        evaluer("abc"),
        Err(ErreurRpn::JetonInvalide {
            jeton: "abc".into(),
            position: 0
        })
    );
    // sensible à la casse : "SIN" n’est pas une fonction, et pas un nombre
    assert!(matches!(
        evaluer("1 SIN"),
        Err(ErreurRpn::JetonInvalide { position: 1, .. })
    ));
    // opérateurs collés : un seul jeton, invalide
    assert!(matches!(evaluer("2 3+"), Err(ErreurRpn::JetonInvalide { .. })));
}

#[test]
fn sci_operandes_insuffisants() {
    assert_eq!(
        evaluer("10 *"),
        Err(ErreurRpn::OperandesInsuffisants {
            symbole: "*".into(),
            position: 1,
            requis: 2,
            disponibles: 1,
        })
    );
}

#[test]
fn sci_division_par_zero() {
    assert_eq!(evaluer("10 0 /"), Err(ErreurRpn::DivisionParZero { position: 2 }));
    assert_eq!(evaluer("10 -0 /"), Err(ErreurRpn::DivisionParZero { position: 2 }));
    // diviseur calculé nul
    assert_eq!(
        evaluer("1 2 2 - /"),
        Err(ErreurRpn::DivisionParZero { position: 4 })
    );
    // pas de tolérance : un diviseur minuscule reste valide
    assert!(evaluer("1 1e-300 /").is_ok());
}

#[test]
fn sci_pile_finale_apres_dernier_jeton() {
    assert_eq!(
        evaluer("2 3 + 4"),
        Err(ErreurRpn::ExpressionIncomplete {
            pile: vec![5.0, 4.0]
        })
    );
    assert_eq!(
        evaluer("1 2 3"),
        Err(ErreurRpn::ExpressionIncomplete {
            pile: vec![1.0, 2.0, 3.0]
        })
    );
}

#[test]
fn sci_puissance_sans_division_par_zero() {
    let v = eval_ok("0 -1 ^");
    assert!(v.is_infinite() && v > 0.0);

    let v = eval_ok("-8 0.5 ^");
    assert!(v.is_nan());

    assert_eq!(eval_ok("0 0 ^"), 1.0);
}

/* ------------------------ Scénarios ------------------------ */

#[test]
fn sci_scenarios() {
    assert_txt("2 3 ^", "8");
    assert_txt("10 3 2 + -", "5");
    assert_txt("4 sqrt", "2");
    assert_txt("2 3 +", "5");
    assert_proche("1 sin", 0.841, 1e-3);
    assert_proche("90 ctg", -0.501, 1e-3);
}

#[test]
fn sci_ordre_des_operandes() {
    assert_eq!(eval_ok("10 3 -"), 7.0);
    assert_eq!(eval_ok("3 10 -"), -7.0);
    assert_eq!(eval_ok("2 3 ^"), 8.0);
    assert_eq!(eval_ok("3 2 ^"), 9.0);
    assert_eq!(eval_ok("8 2 /"), 4.0);
}

#[test]
fn sci_table_de_reference() {
    let cas: &[(&str, f64)] = &[
        ("2 3 +", 5.0),
        ("2 3 -", -1.0),
        ("2 3 *", 6.0),
        ("2 3 /", 0.667),
        ("2 3 ^", 8.0),
        ("2.5 3.05 +", 5.55),
        ("10 3 2 + -", 5.0),
        ("10 3 * 2 ^", 900.0),
        ("1 2 3 4 5 6 7 8 9 10 + + + + + + + + +", 55.0),
        ("1 sin", 0.841),
        ("180 cos", -0.598),
        ("360 tan", -3.383),
        ("90 ctg", -0.501),
        ("-1 acos", 3.141),
        ("1 asin", 1.57),
        ("1 atan", 0.785),
        ("4 sqrt", 2.0),
        ("4 16 sqrt sqrt +", 6.0),
        ("4 16 16 sqrt sqrt + +", 22.0),
    ];

    for (expr, attendu) in cas {
        assert_proche(expr, *attendu, 1e-3);
    }
}

#[test]
fn sci_un_seul_nombre() {
    assert_eq!(eval_ok("10"), 10.0);
    assert_eq!(eval_ok("  -2.5  "), -2.5);
    assert_eq!(eval_ok("1e3"), 1000.0);
}

#[test]
fn sci_litteraux_decimaux_seulement() {
    // notation décimale uniquement : ni hexadécimal ni séparateur '_'
    for j in ["0x10", "0x1p-2", "1_000"] {
        assert_eq!(
            evaluer(j),
            Err(ErreurRpn::JetonInvalide {
                jeton: j.to_string(),
                position: 0
            }),
            "jeton={j:?}"
        );
    }
    assert_eq!(eval_ok(".5"), 0.5);
    assert_eq!(eval_ok("+5"), 5.0);
    assert!(eval_ok("inf").is_infinite());
}

/* ------------------------ Propriétés ------------------------ */

#[test]
fn sci_idempotence() {
    for s in ["1 sin 2 cos +", "10 0 /", "2 3 + 4", "abc", "7 2 ^ sqrt"] {
        assert_eq!(evaluer(s), evaluer(s), "expr={s:?}");
        let a = eval_expression(s, 3).map(|(v, t, _)| (v, t));
        let b = eval_expression(s, 3).map(|(v, t, _)| (v, t));
        assert_eq!(a, b, "expr={s:?}");
    }
}

#[test]
fn sci_format_apres_calcul_seulement() {
    // 1/3 * 3 doit être calculé sur la valeur brute, pas sur "0.333"
    let v = eval_ok("1 3 / 3 *");
    assert!(proche(v, 1.0, 1e-12));
    assert_eq!(formater(v, DECIMALES_DEFAUT), "1");
}

#[test]
fn sci_stress_longue_chaine() {
    let start = Instant::now();
    let max = Duration::from_secs(2);

    // 1 1 + 1 + 1 + ... (profondeur bornée à 2)
    let mut s = String::from("1");
    for _ in 0..20_000 {
        s.push_str(" 1 +");
    }
    assert_eq!(eval_ok(&s), 20_001.0);
    budget(start, max);

    // 5000 littéraux puis 4999 "+" (profondeur max 5000)
    let n = 5000;
    let mut s = String::new();
    for i in 0..n {
        s.push_str(&format!("{i} "));
    }
    for _ in 0..n - 1 {
        s.push_str("+ ");
    }
    assert_eq!(eval_ok(&s), (n * (n - 1) / 2) as f64);
    budget(start, max);
}

#[test]
fn sci_threads_independants() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let expr = format!("{i} 2 ^ 1 +");
                evaluer(&expr)
            })
        })
        .collect();

    for (i, h) in handles.into_iter().enumerate() {
        let v = h.join().expect("thread").expect("eval");
        assert_eq!(v, (i * i + 1) as f64);
    }
}
