// src/main.rs
//
// Calculatrice RPN — point d’entrée ligne de commande
// ---------------------------------------------------
// Exemples:
//   calculatrice_rpn "(2+2)*2" "cos(60)"
//   calculatrice_rpn --type int "7/2"
//   calculatrice_rpn --rpn "2 + sin(30) * 2"
//   echo "1 << 8" | calculatrice_rpn --type long

use clap::Parser;

mod app;

fn main() -> anyhow::Result<()> {
    app::run(app::Args::parse())
}
