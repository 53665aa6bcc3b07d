// src/noyau/erreur.rs
//
// Erreurs du noyau
// ----------------
// - `Erreur` : erreur détaillée (position, jeton fautif), propagée avec `?`
// - `ErrorKind` : classification stable (codes 0..=4) renvoyée par la façade

use std::fmt;

use super::jetons::{Fonction, Operateur};

/// Classification d’une évaluation. Une seule à la fois.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    #[default]
    Ok,
    /// Parenthèses mal appariées ou pile de valeurs insuffisante.
    Unbalanced,
    /// Incohérence de la table des opérateurs.
    InvalidOperator,
    /// Jeton attendu comme opérande illisible.
    InvalidOperand,
    /// Tout le reste (valeurs restantes, faute arithmétique, entrée vide…).
    EvalErr,
}

impl ErrorKind {
    /// Code numérique historique.
    pub fn code(self) -> i32 {
        match self {
            ErrorKind::Ok => 0,
            ErrorKind::Unbalanced => 1,
            ErrorKind::InvalidOperator => 2,
            ErrorKind::InvalidOperand => 3,
            ErrorKind::EvalErr => 4,
        }
    }

    pub fn is_ok(self) -> bool {
        self == ErrorKind::Ok
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::Ok => "ok",
            ErrorKind::Unbalanced => "unbalanced",
            ErrorKind::InvalidOperator => "invalidoperator",
            ErrorKind::InvalidOperand => "invalidoperand",
            ErrorKind::EvalErr => "evalerr",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Erreur {
    #[error("parenthèse fermante sans ouvrante (octet {position})")]
    FermanteOrpheline { position: usize },

    #[error("parenthèses non fermées")]
    ParenthesesNonFermees,

    #[error("fonction `{fonction}` sans parenthèse (octet {position})")]
    FonctionSansParenthese { fonction: Fonction, position: usize },

    #[error("pas assez de valeurs pour `{jeton}`")]
    PileInsuffisante { jeton: String },

    #[error("opérateur inconnu `{jeton}` (octet {position})")]
    OperateurInconnu { jeton: String, position: usize },

    #[error("opérande attendue (octet {position}, `{jeton}`)")]
    OperandeInvalide { jeton: String, position: usize },

    #[error("nombre invalide `{jeton}`")]
    NombreInvalide { jeton: String },

    #[error("{restantes} valeur(s) sur la pile au lieu d’une seule")]
    ValeursRestantes { restantes: usize },

    #[error("faute arithmétique sur `{operateur}`")]
    Arithmetique { operateur: Operateur },

    #[error("`{fonction}` : résultat non représentable")]
    HorsDomaine { fonction: Fonction },
}

impl Erreur {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Erreur::FermanteOrpheline { .. }
            | Erreur::ParenthesesNonFermees
            | Erreur::FonctionSansParenthese { .. }
            | Erreur::PileInsuffisante { .. } => ErrorKind::Unbalanced,

            Erreur::OperateurInconnu { .. } => ErrorKind::InvalidOperator,

            Erreur::OperandeInvalide { .. } | Erreur::NombreInvalide { .. } => {
                ErrorKind::InvalidOperand
            }

            Erreur::ValeursRestantes { .. }
            | Erreur::Arithmetique { .. }
            | Erreur::HorsDomaine { .. } => ErrorKind::EvalErr,
        }
    }
}

impl From<&Erreur> for ErrorKind {
    fn from(e: &Erreur) -> Self {
        e.kind()
    }
}

pub type Result<T, E = Erreur> = std::result::Result<T, E>;
