//! Tests scientifiques (campagne) : scénarios de référence + invariants + limites contrôlées.
//!
//! Notes (aligné avec l’état actuel du noyau) :
//! - Les fonctions trigonométriques travaillent en degrés : cos(60) vaut 0.5 à 1 ulp près,
//!   on compare donc les flottants avec une tolérance.
//! - Un opérateur final pendant ("2+") passe la traduction et échoue à l’évaluation
//!   (pile insuffisante => Unbalanced).
//! - Stress : tailles bornées + budget temps global.
//! - Concurrence : aucun état partagé, les appels parallèles rendent les mêmes résultats.

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;

use super::{
    calc_double, calc_int, calc_long, eval_double, evalue_rpn, to_rpn, Erreur, ErrorKind, Resultat,
    Rpn,
};

const EPS: f64 = 1e-12;

fn eval_ok(expr: &str) -> f64 {
    eval_double(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    assert!(
        (v - attendu).abs() < EPS,
        "expr={expr:?} : {v} au lieu de {attendu}"
    );
}

fn assert_kind(expr: &str, attendu: ErrorKind) {
    let r = calc_double(expr);
    assert_eq!(r.erreur, attendu, "expr={expr:?}");
    assert_eq!(r.valeur, 0.0, "expr={expr:?} : valeur non nulle en échec");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Scénarios de référence ------------------------ */

#[test]
fn sci_scenarios_double() {
    assert_proche("2 + 2", 4.0);
    assert_proche("2 + 2 * 2", 6.0);
    assert_proche("(2 + 2) * 2", 8.0);
    assert_proche("(2 - 2) + 2", 2.0);
    assert_proche("1 << 8", 256.0);
    assert_proche("64/8", 8.0);
    assert_proche("sqrt(4)-2", 0.0);
    assert_proche("cos(60)", 0.5);
    assert_proche("sin(60)", 0.866_025_403_784_438_6);
}

#[test]
fn sci_scenarios_malformes() {
    assert_kind("2 + @", ErrorKind::InvalidOperand);
    assert_kind("((2+2)", ErrorKind::Unbalanced);
    assert_kind("(2+2", ErrorKind::Unbalanced);
    assert_kind("2+2)", ErrorKind::Unbalanced);
    assert_kind(")(", ErrorKind::Unbalanced);
}

#[test]
fn sci_memes_scenarios_entiers() {
    for (expr, attendu) in [
        ("2 + 2", 4),
        ("2 + 2 * 2", 6),
        ("(2 + 2) * 2", 8),
        ("(2 - 2) + 2", 2),
        ("1 << 8", 256),
        ("64/8", 8),
        ("sqrt(4)-2", 0),
    ] {
        assert_eq!(calc_int(expr).ok(), Some(attendu), "int expr={expr:?}");
        assert_eq!(
            calc_long(expr).ok(),
            Some(attendu as i64),
            "long expr={expr:?}"
        );
    }
}

/* ------------------------ Invariants ------------------------ */

#[test]
fn sci_parenthesages_equivalents() {
    let pairs = [
        ("2+2*2", "2+(2*2)"),
        ("1-2-3", "(1-2)-3"),
        ("2*3+4*5", "(2*3)+(4*5)"),
        // << (17) lie plus fort que + (16)
        ("1 << 2 + 3", "(1 << 2) + 3"),
        ("8/4/2", "((8/4)/2)"),
    ];
    for (a, b) in pairs {
        assert_eq!(to_rpn(a).unwrap(), to_rpn(b).unwrap(), "{a:?} vs {b:?}");
    }
}

#[test]
fn sci_aller_retour_rpn() {
    // évaluer la RPN produite == évaluer l’expression
    for expr in [
        "2 + 2 * 2",
        "(1 + 2) * (3 - 4) / 5",
        "-3 ** 2",
        "2 * -3 + 1",
        "cos(60) + sin(30)",
        "sqrt(sqrt(16)) + lb(8) + lg(100)",
        "1 == 1 && 2 < 3",
        "7 \\ 2 % 3",
        "6 !| 3 ^ 1",
    ] {
        let direct = eval_ok(expr);
        let rpn = to_rpn(expr).unwrap();
        let via = evalue_rpn::<f64>(rpn.as_str()).unwrap();
        assert_eq!(direct.to_bits(), via.to_bits(), "expr={expr:?} rpn={rpn}");
    }
}

#[test]
fn sci_associativite_gauche() {
    assert_proche("10 - 4 - 3", 3.0);
    assert_proche("64 / 8 / 2", 4.0);
    assert_proche("2 ** 3 ** 2", 64.0);
    assert_proche("100 % 7 % 3", 2.0);
}

#[test]
fn sci_signe_unaire() {
    assert_proche("-2", -2.0);
    assert_proche("+2", 2.0);
    assert_proche("-2 + 5", 3.0);
    assert_proche("2 * -3", -6.0);
    assert_proche("2 - -3", 5.0);
    assert_proche("-(2 + 3) * 2", -10.0);
    assert_proche("-sqrt(16)", -4.0);
    assert_proche("sin(-30)", -0.5);
    // le signe garde la précédence de +/- : -(3**2)
    assert_proche("-3 ** 2", -9.0);
}

#[test]
fn sci_fonctions_imbriquees() {
    assert_proche("sqrt(sqrt(16))", 2.0);
    assert_proche("asin(sin(30))", 30.0);
    assert_proche("acos(cos(45))", 45.0);
    assert_proche("atan(tan(60))", 60.0);
    assert_proche("ln(exp(2))", 2.0);
    assert_proche("lb(1024) + lg(1000)", 13.0);
    assert_proche("2 * sqrt((4 + 5)) + 1", 7.0);
}

#[test]
fn sci_operateur_final_pendant() {
    assert_eq!(to_rpn("2+").unwrap().as_str(), "2 +");
    assert_kind("2+", ErrorKind::Unbalanced);
    assert_kind("2 * (3 +)", ErrorKind::Unbalanced);
}

#[test]
fn sci_valeurs_restantes() {
    assert_kind("2 3", ErrorKind::EvalErr);
    assert_kind("(2)(3)", ErrorKind::EvalErr);
    assert_kind("", ErrorKind::EvalErr);
    assert_kind("   ", ErrorKind::EvalErr);
}

#[test]
fn sci_fonctions_mal_formees() {
    assert_kind("sin 30", ErrorKind::Unbalanced);
    assert_kind("sqrt", ErrorKind::Unbalanced);
    assert_kind("sqrt(", ErrorKind::Unbalanced);
    // pas de préfixe ni de casse : `sinx` et `SIN` sont des opérandes illisibles
    assert_kind("sinx(1)", ErrorKind::InvalidOperand);
    assert_kind("SIN(30)", ErrorKind::InvalidOperand);
}

/* ------------------------ Concurrence ------------------------ */

const SCENARIOS: [&str; 9] = [
    "2 + 2",
    "2 + 2 * 2",
    "(2 + 2) * 2",
    "1 << 8",
    "sqrt(4)-2",
    "cos(60)",
    "((2+2)",
    "2 + @",
    "1 / 0",
];

#[test]
fn sci_types_publics_send_sync() {
    fn partageable<T: Send + Sync>() {}
    partageable::<Rpn>();
    partageable::<Erreur>();
    partageable::<ErrorKind>();
    partageable::<Resultat<f64>>();
    partageable::<Resultat<i64>>();
}

#[test]
fn sci_appels_concurrents_identiques() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    let reference: Vec<_> = SCENARIOS
        .iter()
        .map(|e| (calc_double(e), calc_long(e)))
        .collect();

    std::thread::scope(|s| {
        let fils: Vec<_> = (0..8)
            .map(|_| {
                s.spawn(|| {
                    (0..50)
                        .flat_map(|_| SCENARIOS.iter().map(|e| (calc_double(e), calc_long(e))))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for f in fils {
            let obtenus = f.join().unwrap();
            for (i, (d, l)) in obtenus.into_iter().enumerate() {
                let k = i % SCENARIOS.len();
                let (d0, l0) = reference[k];
                assert_eq!(d.valeur.to_bits(), d0.valeur.to_bits(), "{}", SCENARIOS[k]);
                assert_eq!(d.erreur, d0.erreur, "{}", SCENARIOS[k]);
                assert_eq!(l, l0, "{}", SCENARIOS[k]);
            }
        }
    });
    budget(t0, max);
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_profondeur_parentheses() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let profondeur = 2000;
    let expr = format!("{}1{}", "(".repeat(profondeur), ")".repeat(profondeur));
    budget(t0, max);
    assert_proche(&expr, 1.0);

    // sqrt(x) * sqrt(x) imbriqué : reste exactement 4
    let mut expr = "4".to_string();
    for _ in 0..200 {
        expr = format!("sqrt({expr}) * sqrt({expr})");
        if expr.len() > 50_000 {
            break;
        }
    }
    budget(t0, max);
    assert_proche(&expr, 4.0);
    budget(t0, max);
}

#[test]
fn sci_stress_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let n = 10_000;
    let expr = vec!["1"; n].join(" + ");
    budget(t0, max);
    assert_eq!(calc_long(&expr).ok(), Some(n as i64));

    let expr = vec!["3"; n].join(" - ");
    assert_eq!(calc_long(&expr).ok(), Some(3 - 3 * (n as i64 - 1)));
    budget(t0, max);
}
