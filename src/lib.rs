//! Calculatrice RPN — moteur d’expressions embarquable
//!
//! Une formule texte (`"(2+2)*2"`, `"cos(60)"`) est traduite en notation polonaise
//! inversée puis réduite sur une pile, dans le type numérique choisi par l’appelant
//! (`i32`, `i64` ou `f64`).
//!
//! ```
//! use calculatrice_rpn::{calc_double, eval_long, to_rpn, ErrorKind};
//!
//! assert_eq!(eval_long("(2 + 2) * 2").unwrap(), 8);
//! assert_eq!(to_rpn("2 + 2 * 2").unwrap().as_str(), "2 2 2 * +");
//!
//! let r = calc_double("((2+2)");
//! assert_eq!(r.erreur, ErrorKind::Unbalanced);
//! assert_eq!(r.valeur, 0.0);
//! ```
//!
//! Opérateurs (précédence décroissante, tous associatifs à gauche) :
//! - `*` `/` `\` `**` (19), `%` (18), `<<` `>>` (17), `-` `+` (16)
//! - `^` `&` `|` `!|` `!&` (15), `&&` `||` (14)
//! - `==` `<` `>` `>=` `!=` `<=` (13)
//!
//! Fonctions : `sin cos tan asin acos atan` (degrés), `sqrt exp lb lg ln`.
//!
//! Diagnostic : l’expression et sa RPN sont tracées via `log` (niveau debug).
//! Aucun logger n’est installé par la bibliothèque.

pub mod noyau;

pub use noyau::{
    calc, calc_double, calc_int, calc_long, eval_double, eval_int, eval_long, evalue, evalue_rpn,
    to_rpn, Erreur, ErrorKind, Nombre, Resultat, Rpn,
};
