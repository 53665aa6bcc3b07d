// src/noyau/rpn.rs
//
// Shunting-yard -> RPN (texte)
// Objectif:
// - Convertir l’expression infixe en une suite de jetons postfixés séparés par un espace
//
// Règles:
// - Fonction (sin, cos, …):
//    - on mémorise (profondeur de parenthèses, fonction) au moment de l’appel
//    - elle sort seulement quand SA parenthèse fermante est traitée
// - Signe unaire:
//    - si '+'/'-' arrive quand on attend une valeur, on injecte 0 : "-x" => "0 x -"
//    - il est empilé sans rien dépiler (rien à sa gauche ne peut être complété par lui)
// - Associativité à gauche partout : à précédence égale, l’opérateur empilé sort d’abord.

use std::fmt;

use super::erreur::{Erreur, Result};
use super::jetons::{classe_fonction, classe_operateur, longueur_operande, Fonction, Operateur};

/// Séparateur unique entre deux jetons RPN.
pub const SEPARATEUR: &str = " ";

/// Traduction RPN d’une expression, prête pour l’évaluateur.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rpn(String);

impl Rpn {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Rpn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Rpn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Élément de la pile d’opérateurs.
#[derive(Clone, Copy, Debug)]
enum Empile {
    Ouvrante,
    Op(Operateur),
}

/// Appel de fonction en attente de sa parenthèse fermante.
#[derive(Clone, Copy, Debug)]
struct Appel {
    profondeur: usize,
    fonction: Fonction,
}

/// Convertit une expression infixe en RPN (notation polonaise inversée).
///
/// Exemple:
///   "2 + sin(30) * 2"  =>  "2 30 sin 2 * +"
///
/// Une expression vide donne une RPN vide (l’évaluateur la refusera).
pub fn to_rpn(expr: &str) -> Result<Rpn> {
    let octets = expr.as_bytes();

    let mut sortie: Vec<&str> = Vec::new();
    let mut ops: Vec<Empile> = Vec::new();
    let mut appels: Vec<Appel> = Vec::new();
    let mut profondeur: usize = 0;

    // Vrai en début d’expression, après '(' et après un opérateur.
    // Sert à détecter le signe unaire.
    let mut attend_operande = true;

    let mut i: usize = 0;
    while i < octets.len() {
        let c = octets[i];

        if c.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == b'(' {
            profondeur += 1;
            ops.push(Empile::Ouvrante);
            attend_operande = true;
            i += 1;
            continue;
        }
        if c == b')' {
            // dépile jusqu’à '('
            loop {
                match ops.pop() {
                    None => return Err(Erreur::FermanteOrpheline { position: i }),
                    Some(Empile::Ouvrante) => break,
                    Some(Empile::Op(op)) => sortie.push(op.symbole()),
                }
            }
            profondeur -= 1;

            // la fonction ouverte à cette profondeur s’applique à l’argument qui vient de se fermer
            if let Some(appel) = appels.last() {
                if appel.profondeur == profondeur {
                    sortie.push(appel.fonction.nom());
                    appels.pop();
                }
            }

            attend_operande = false;
            i += 1;
            continue;
        }

        // Fonction : rien n’est émis maintenant
        if let Some((fonction, n)) = classe_fonction(expr, i) {
            let suite = octets[i + n..]
                .iter()
                .copied()
                .find(|b| !b.is_ascii_whitespace());
            if suite != Some(b'(') {
                return Err(Erreur::FonctionSansParenthese {
                    fonction,
                    position: i,
                });
            }
            appels.push(Appel {
                profondeur,
                fonction,
            });
            i += n;
            continue;
        }

        // Opérateurs
        if let Some((op, n)) = classe_operateur(expr, i) {
            if attend_operande {
                if !matches!(op, Operateur::Add | Operateur::Sub) {
                    return Err(Erreur::OperandeInvalide {
                        jeton: op.symbole().to_string(),
                        position: i,
                    });
                }
                sortie.push("0");
            } else {
                // dépile tant que le sommet est au moins aussi prioritaire
                while let Some(Empile::Op(sommet)) = ops.last().copied() {
                    if op.precedence() > sommet.precedence() {
                        break;
                    }
                    sortie.push(sommet.symbole());
                    ops.pop();
                }
            }

            ops.push(Empile::Op(op));
            attend_operande = true;
            i += n;
            continue;
        }

        // Opérande
        let n = longueur_operande(expr, i);
        if n == 0 {
            let jeton = expr[i..].chars().next().map(String::from).unwrap_or_default();
            return Err(Erreur::OperandeInvalide { jeton, position: i });
        }
        sortie.push(&expr[i..i + n]);
        attend_operande = false;
        i += n;
    }

    // vide la pile ops
    while let Some(e) = ops.pop() {
        match e {
            Empile::Ouvrante => return Err(Erreur::ParenthesesNonFermees),
            Empile::Op(op) => sortie.push(op.symbole()),
        }
    }
    // parenthèses équilibrées => chaque appel a été fermé
    debug_assert!(appels.is_empty(), "appels en attente: {appels:?}");

    Ok(Rpn(sortie.join(SEPARATEUR)))
}
