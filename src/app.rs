// src/app.rs
//
// Calculatrice RPN — front-end ligne de commande
// ----------------------------------------------
// Rôle:
// - Décrire les arguments (clap)
// - Évaluer chaque expression (arguments, sinon une par ligne sur stdin)
// - Valeur (ou RPN) sur stdout, erreurs sur stderr, code 1 si au moins un échec
//
// Aucune logique de calcul ici : tout passe par la bibliothèque.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};

use calculatrice_rpn::{evalue, to_rpn, Erreur};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TypeResultat {
    Int,
    Long,
    Double,
}

#[derive(Debug, Parser)]
#[command(about = "Évalue des expressions arithmétiques, binaires et logiques (via RPN).")]
pub struct Args {
    /// Expressions à évaluer (sinon : une par ligne sur l’entrée standard).
    expressions: Vec<String>,

    /// Type numérique du résultat.
    #[arg(long = "type", value_enum, default_value_t = TypeResultat::Double)]
    type_resultat: TypeResultat,

    /// Affiche la traduction RPN au lieu de la valeur.
    #[arg(long)]
    rpn: bool,
}

pub fn run(args: Args) -> Result<()> {
    let expressions = if args.expressions.is_empty() {
        lire_stdin()?
    } else {
        args.expressions.clone()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut echecs = 0usize;

    for expr in &expressions {
        match traite(expr, &args) {
            Ok(s) => writeln!(out, "{s}").context("écriture stdout")?,
            Err(e) => {
                eprintln!("erreur ({}): {e}", e.kind());
                echecs += 1;
            }
        }
    }

    if echecs > 0 {
        bail!("{echecs} expression(s) en échec sur {}", expressions.len());
    }
    Ok(())
}

fn lire_stdin() -> Result<Vec<String>> {
    let mut lignes = Vec::new();
    for ligne in io::stdin().lock().lines() {
        let ligne = ligne.context("lecture stdin")?;
        let ligne = ligne.trim();
        if !ligne.is_empty() {
            lignes.push(ligne.to_string());
        }
    }
    Ok(lignes)
}

/// Une expression -> une ligne de sortie.
fn traite(expr: &str, args: &Args) -> Result<String, Erreur> {
    if args.rpn {
        return to_rpn(expr).map(|r| r.into_string());
    }
    match args.type_resultat {
        TypeResultat::Int => evalue::<i32>(expr).map(|v| v.to_string()),
        TypeResultat::Long => evalue::<i64>(expr).map(|v| v.to_string()),
        TypeResultat::Double => evalue::<f64>(expr).map(|v| v.to_string()),
    }
}
