// src/noyau/jetons.rs
//
// Classification des jetons (opérateurs, fonctions, opérandes)
// ------------------------------------------------------------
// Fonctions pures : à partir d’une position (octet) dans le texte, on dit si un
// opérateur, une fonction ou une opérande commence ici, et sur quelle longueur.
// Les espaces ne sont pas des jetons : c’est à l’appelant de les sauter.

use std::fmt;

/* ------------------------ Table des opérateurs ------------------------ */

/// Opérateurs binaires (arité 2, associatifs à gauche).
///
/// L’ordre des variantes suit les identifiants historiques (1..=22).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Mul,  // *
    Div,  // /
    IDiv, // \
    Mod,  // %
    Shl,  // <<
    Shr,  // >>
    Sub,  // -
    Add,  // +
    Xor,  // ^
    BAnd, // &
    BOr,  // |
    Nor,  // !|
    Nand, // !&
    LAnd, // &&
    LOr,  // ||
    Eq,   // ==
    Lt,   // <
    Gt,   // >
    Gte,  // >=
    Ne,   // !=
    Lte,  // <=
    Pow,  // **
}

/// Table complète : (opérateur, symbole, précédence). Plus grand = plus prioritaire.
static OPERATEURS: [(Operateur, &str, u8); 22] = [
    (Operateur::Mul, "*", 19),
    (Operateur::Div, "/", 19),
    (Operateur::IDiv, "\\", 19),
    (Operateur::Mod, "%", 18),
    (Operateur::Shl, "<<", 17),
    (Operateur::Shr, ">>", 17),
    (Operateur::Sub, "-", 16),
    (Operateur::Add, "+", 16),
    (Operateur::Xor, "^", 15),
    (Operateur::BAnd, "&", 15),
    (Operateur::BOr, "|", 15),
    (Operateur::Nor, "!|", 15),
    (Operateur::Nand, "!&", 15),
    (Operateur::LAnd, "&&", 14),
    (Operateur::LOr, "||", 14),
    (Operateur::Eq, "==", 13),
    (Operateur::Lt, "<", 13),
    (Operateur::Gt, ">", 13),
    (Operateur::Gte, ">=", 13),
    (Operateur::Ne, "!=", 13),
    (Operateur::Lte, "<=", 13),
    (Operateur::Pow, "**", 19),
];

/// Caractères qui peuvent composer un opérateur.
const CARACTERES_OPERATEUR: &[u8] = b"<>=*/%+-^&|\\!";

impl Operateur {
    /// Toutes les entrées, dans l’ordre de la table.
    pub fn tous() -> impl Iterator<Item = Operateur> {
        OPERATEURS.iter().map(|(op, _, _)| *op)
    }

    fn entree(self) -> &'static (Operateur, &'static str, u8) {
        // la table est indexée dans l’ordre des variantes
        &OPERATEURS[self as usize]
    }

    pub fn symbole(self) -> &'static str {
        self.entree().1
    }

    pub fn precedence(self) -> u8 {
        self.entree().2
    }

    /// Identifiant stable (1..=22).
    pub fn id(self) -> u32 {
        self as u32 + 1
    }

    /// Recherche exacte d’un symbole complet.
    pub fn depuis_symbole(s: &str) -> Option<Operateur> {
        OPERATEURS
            .iter()
            .find(|(_, sym, _)| *sym == s)
            .map(|(op, _, _)| *op)
    }

    /// Opérateurs purement entiers : opérandes tronquées en i64 avant le calcul.
    pub fn est_entier(self) -> bool {
        use Operateur::*;
        matches!(self, Mod | Shl | Shr | Xor | BAnd | BOr | Nor | Nand)
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

/* ------------------------ Table des fonctions ------------------------ */

/// Fonctions unaires reconnues (`nom(arg)`), identifiants 23..=33.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,
    Exp,
    Lb,
    Lg,
    Ln,
}

static FONCTIONS: [(Fonction, &str); 11] = [
    (Fonction::Sin, "sin"),
    (Fonction::Cos, "cos"),
    (Fonction::Tan, "tan"),
    (Fonction::Asin, "asin"),
    (Fonction::Acos, "acos"),
    (Fonction::Atan, "atan"),
    (Fonction::Sqrt, "sqrt"),
    (Fonction::Exp, "exp"),
    (Fonction::Lb, "lb"),
    (Fonction::Lg, "lg"),
    (Fonction::Ln, "ln"),
];

impl Fonction {
    pub fn toutes() -> impl Iterator<Item = Fonction> {
        FONCTIONS.iter().map(|(f, _)| *f)
    }

    pub fn nom(self) -> &'static str {
        FONCTIONS[self as usize].1
    }

    /// Identifiant stable, à la suite des opérateurs.
    pub fn id(self) -> u32 {
        OPERATEURS.len() as u32 + 1 + self as u32
    }

    /// Noms sensibles à la casse : `SIN` n’est pas une fonction.
    pub fn depuis_nom(s: &str) -> Option<Fonction> {
        FONCTIONS.iter().find(|(_, nom)| *nom == s).map(|(f, _)| *f)
    }
}

impl fmt::Display for Fonction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}

/* ------------------------ Classifieur ------------------------ */

/// Opérateur le plus long commençant à `pos` (2 caractères, puis 1).
///
/// Retourne l’opérateur et la longueur consommée (en octets).
pub fn classe_operateur(texte: &str, pos: usize) -> Option<(Operateur, usize)> {
    let reste = texte.as_bytes().get(pos..)?;
    for longueur in [2, 1] {
        let Some(candidat) = reste.get(..longueur) else {
            continue;
        };
        if let Some(op) = OPERATEURS
            .iter()
            .find(|(_, sym, _)| sym.as_bytes() == candidat)
            .map(|(op, _, _)| *op)
        {
            return Some((op, longueur));
        }
    }
    None
}

/// Fonction dont le nom est EXACTEMENT la suite alphabétique commençant à `pos`.
pub fn classe_fonction(texte: &str, pos: usize) -> Option<(Fonction, usize)> {
    let reste = texte.as_bytes().get(pos..)?;
    let longueur = reste
        .iter()
        .take_while(|b| b.is_ascii_alphabetic())
        .count();
    if longueur == 0 {
        return None;
    }
    let mot = texte.get(pos..pos + longueur)?;
    Fonction::depuis_nom(mot).map(|f| (f, longueur))
}

/// Longueur de l’opérande à `pos` : suite maximale de [A-Za-z0-9.].
/// 0 = pas une opérande.
pub fn longueur_operande(texte: &str, pos: usize) -> usize {
    texte
        .as_bytes()
        .get(pos..)
        .map(|reste| {
            reste
                .iter()
                .take_while(|b| b.is_ascii_alphanumeric() || **b == b'.')
                .count()
        })
        .unwrap_or(0)
}

/// Vrai si l’octet peut faire partie d’un symbole d’opérateur.
pub fn est_caractere_operateur(b: u8) -> bool {
    CARACTERES_OPERATEUR.contains(&b)
}
