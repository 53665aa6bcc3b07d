// src/noyau/trig.rs
//
// Sémantique des fonctions unaires
// --------------------------------
// - sin/cos/tan : argument en DEGRÉS (converti en radians)
// - asin/acos/atan : résultat en DEGRÉS
// - lb = log2, lg = log10, ln = log naturel
// Calcul toujours en f64 ; la conversion vers le type du résultat est faite par l’appelant.

use std::f64::consts::PI;

use super::jetons::Fonction;

/// Facteur degrés -> radians.
const DEG_VERS_RAD: f64 = PI / 180.0;
const RAD_VERS_DEG: f64 = 180.0 / PI;

pub fn applique(f: Fonction, x: f64) -> f64 {
    match f {
        Fonction::Sin => (x * DEG_VERS_RAD).sin(),
        Fonction::Cos => (x * DEG_VERS_RAD).cos(),
        Fonction::Tan => (x * DEG_VERS_RAD).tan(),
        Fonction::Asin => x.asin() * RAD_VERS_DEG,
        Fonction::Acos => x.acos() * RAD_VERS_DEG,
        Fonction::Atan => x.atan() * RAD_VERS_DEG,
        Fonction::Sqrt => x.sqrt(),
        Fonction::Exp => x.exp(),
        Fonction::Lb => x.log2(),
        Fonction::Lg => x.log10(),
        Fonction::Ln => x.ln(),
    }
}
