//! Noyau — évaluation (pipeline réel)
//!
//! texte -> RPN (rpn.rs) -> pile de valeurs (ici) -> une seule valeur
//!
//! - `evalue_rpn` : évaluateur générique sur le type du résultat (`Nombre`)
//! - `evalue` / `eval_*` : façade `Result`
//! - `calc` / `calc_*` : façade « valeur + classification », ne propage jamais d’erreur

use log::{debug, trace};

use super::erreur::{Erreur, ErrorKind, Result};
use super::jetons::{
    classe_fonction, classe_operateur, est_caractere_operateur, longueur_operande, Operateur,
};
use super::nombre::Nombre;
use super::rpn::{to_rpn, Rpn};
use super::trig;

/* ------------------------ Évaluateur RPN ------------------------ */

/// Réduit une suite RPN à une seule valeur de type `T`.
///
/// Les opérandes sont lues comme des f64 puis converties (troncature pour les entiers).
pub fn evalue_rpn<T: Nombre>(rpn: &str) -> Result<T> {
    let octets = rpn.as_bytes();
    let mut pile: Vec<T> = Vec::new();

    let mut i: usize = 0;
    while i < octets.len() {
        if octets[i].is_ascii_whitespace() {
            i += 1;
            continue;
        }

        // Opérateur binaire : op2 est dépilé en premier
        if let Some((op, n)) = classe_operateur(rpn, i) {
            let (Some(op2), Some(op1)) = (pile.pop(), pile.pop()) else {
                return Err(Erreur::PileInsuffisante {
                    jeton: op.symbole().to_string(),
                });
            };
            let r = applique_operateur(op, op1, op2)?;
            trace!("{op1} {op} {op2} = {r}");
            pile.push(r);
            i += n;
            continue;
        }

        // Fonction unaire
        if let Some((fonction, n)) = classe_fonction(rpn, i) {
            let x = pile.pop().ok_or_else(|| Erreur::PileInsuffisante {
                jeton: fonction.nom().to_string(),
            })?;
            let r = x
                .en_f64()
                .map(|x| trig::applique(fonction, x))
                .and_then(T::depuis_f64)
                .ok_or(Erreur::HorsDomaine { fonction })?;
            trace!("{fonction}({x}) = {r}");
            pile.push(r);
            i += n;
            continue;
        }

        // Symbole qui ressemble à un opérateur sans être dans la table
        if est_caractere_operateur(octets[i]) {
            let n = octets[i..]
                .iter()
                .take_while(|b| est_caractere_operateur(**b))
                .count();
            return Err(Erreur::OperateurInconnu {
                jeton: rpn[i..i + n].to_string(),
                position: i,
            });
        }

        // Opérande
        let n = longueur_operande(rpn, i);
        if n == 0 {
            let jeton = rpn[i..].chars().next().map(String::from).unwrap_or_default();
            return Err(Erreur::OperandeInvalide { jeton, position: i });
        }
        let jeton = &rpn[i..i + n];
        let v = jeton
            .parse::<f64>()
            .ok()
            .and_then(T::depuis_f64)
            .ok_or_else(|| Erreur::NombreInvalide {
                jeton: jeton.to_string(),
            })?;
        pile.push(v);
        i += n;
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(Erreur::ValeursRestantes {
            restantes: pile.len(),
        }),
    }
}

fn applique_operateur<T: Nombre>(op: Operateur, a: T, b: T) -> Result<T> {
    use Operateur::*;

    if op.est_entier() {
        return entier(op, a, b).ok_or(Erreur::Arithmetique { operateur: op });
    }

    let r = match op {
        Mul => a.multiplie(b),
        Div => a.divise(b),
        // quotient tronqué
        IDiv => a.divise(b).and_then(T::tronque),
        Sub => a.soustrait(b),
        Add => a.ajoute(b),
        Pow => puissance(a, b),

        LAnd => Some(T::booleen(a.est_vrai() && b.est_vrai())),
        LOr => Some(T::booleen(a.est_vrai() || b.est_vrai())),

        Eq => Some(T::booleen(a == b)),
        Ne => Some(T::booleen(a != b)),
        Lt => Some(T::booleen(a < b)),
        Gt => Some(T::booleen(a > b)),
        Lte => Some(T::booleen(a <= b)),
        Gte => Some(T::booleen(a >= b)),

        Mod | Shl | Shr | Xor | BAnd | BOr | Nor | Nand => None,
    };

    r.ok_or(Erreur::Arithmetique { operateur: op })
}

/// Opérateurs entiers : les deux opérandes passent par i64.
fn entier<T: Nombre>(op: Operateur, a: T, b: T) -> Option<T> {
    use Operateur::*;

    let x = a.en_entier()?;
    let y = b.en_entier()?;
    let r = match op {
        Mod => x.checked_rem(y)?,
        Shl => x.checked_shl(u32::try_from(y).ok()?)?,
        Shr => x.checked_shr(u32::try_from(y).ok()?)?,
        Xor => x ^ y,
        BAnd => x & y,
        BOr => x | y,
        Nor => !(x | y),
        Nand => !(x & y),
        _ => return None,
    };
    T::depuis_entier(r)
}

fn puissance<T: Nombre>(a: T, b: T) -> Option<T> {
    T::depuis_f64(a.en_f64()?.powf(b.en_f64()?))
}

/* ------------------------ Façade ------------------------ */

/// Valeur toujours utilisable (zéro en cas d’échec) + classification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resultat<T> {
    pub valeur: T,
    pub erreur: ErrorKind,
}

impl<T> Resultat<T> {
    pub fn is_ok(&self) -> bool {
        self.erreur.is_ok()
    }

    /// La valeur, seulement si la classification est `Ok`.
    pub fn ok(self) -> Option<T> {
        self.is_ok().then_some(self.valeur)
    }
}

/// Traduction RPN seule (diagnostic / tests).
pub fn traduit(expr: &str) -> Result<Rpn> {
    debug!("EXPR: '{expr}'");
    let rpn = to_rpn(expr)?;
    debug!("RPN: '{rpn}'");
    Ok(rpn)
}

/// API publique : texte -> RPN -> valeur de type `T`.
pub fn evalue<T: Nombre>(expr: &str) -> Result<T> {
    let rpn = traduit(expr)?;
    evalue_rpn(rpn.as_str())
}

/// Même chaîne que `evalue`, mais l’échec est rapporté dans `erreur` (valeur = 0).
pub fn calc<T: Nombre>(expr: &str) -> Resultat<T> {
    match evalue::<T>(expr) {
        Ok(valeur) => Resultat {
            valeur,
            erreur: ErrorKind::Ok,
        },
        Err(e) => {
            debug!("échec {} ({}) : {e}", T::NOM, e.kind());
            Resultat {
                valeur: T::zero(),
                erreur: e.kind(),
            }
        }
    }
}

pub fn eval_int(expr: &str) -> Result<i32> {
    evalue(expr)
}

pub fn eval_long(expr: &str) -> Result<i64> {
    evalue(expr)
}

pub fn eval_double(expr: &str) -> Result<f64> {
    evalue(expr)
}

pub fn calc_int(expr: &str) -> Resultat<i32> {
    calc(expr)
}

pub fn calc_long(expr: &str) -> Resultat<i64> {
    calc(expr)
}

pub fn calc_double(expr: &str) -> Resultat<f64> {
    calc(expr)
}
