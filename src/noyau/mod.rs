//! Noyau d’évaluation d’expressions
//!
//! Organisation interne :
//! - jetons.rs  : classification (opérateurs, fonctions, opérandes)
//! - rpn.rs     : shunting-yard -> RPN texte
//! - nombre.rs  : capacité numérique du résultat (i32 / i64 / f64)
//! - trig.rs    : sémantique des fonctions (degrés)
//! - eval.rs    : évaluateur RPN + pipeline complet
//! - erreur.rs  : erreurs détaillées + classification

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod nombre;
pub mod rpn;
pub mod trig;

#[cfg(test)]
mod tests_scientifiques;



// API publique minimale
pub use erreur::{Erreur, ErrorKind};
pub use eval::{
    calc, calc_double, calc_int, calc_long, eval_double, eval_int, eval_long, evalue, evalue_rpn,
    Resultat,
};
pub use nombre::Nombre;
pub use rpn::Rpn;

/// Traduction RPN d’une expression (diagnostic / tests).
pub fn to_rpn(expr: &str) -> Result<Rpn, Erreur> {
    eval::traduit(expr)
}
