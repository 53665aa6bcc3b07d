// src/noyau/nombre.rs
//
// Capacité numérique du résultat (i32 / i64 / f64)
// ------------------------------------------------
// Un seul évaluateur générique ; chaque type dit comment faire les quatre
// opérations sans paniquer (débordement, division entière par zéro => None).
// Les opérateurs « entiers » passent par i64 (troncature vers zéro).

use std::fmt;

use num_traits::{Num, NumCast};

pub trait Nombre:
    Num + NumCast + PartialOrd + Copy + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Nom court du type (traces, CLI).
    const NOM: &'static str;

    fn ajoute(self, rhs: Self) -> Option<Self>;
    fn soustrait(self, rhs: Self) -> Option<Self>;
    fn multiplie(self, rhs: Self) -> Option<Self>;
    fn divise(self, rhs: Self) -> Option<Self>;

    /// Partie entière (vers zéro) ; None si la valeur n’est pas finie.
    fn tronque(self) -> Option<Self>;

    /// Conversion depuis un littéral / résultat flottant (tronque pour les entiers).
    fn depuis_f64(x: f64) -> Option<Self> {
        <Self as NumCast>::from(x)
    }

    fn en_f64(self) -> Option<f64> {
        self.to_f64()
    }

    /// Représentation entière (troncature) ; None si NaN / infini / hors bornes.
    fn en_entier(self) -> Option<i64> {
        self.to_i64()
    }

    fn depuis_entier(x: i64) -> Option<Self> {
        <Self as NumCast>::from(x)
    }

    fn booleen(b: bool) -> Self {
        if b {
            Self::one()
        } else {
            Self::zero()
        }
    }

    fn est_vrai(self) -> bool {
        !self.is_zero()
    }
}

macro_rules! impl_nombre_entier {
    ($t:ty, $nom:literal) => {
        impl Nombre for $t {
            const NOM: &'static str = $nom;

            fn ajoute(self, rhs: Self) -> Option<Self> {
                self.checked_add(rhs)
            }
            fn soustrait(self, rhs: Self) -> Option<Self> {
                self.checked_sub(rhs)
            }
            fn multiplie(self, rhs: Self) -> Option<Self> {
                self.checked_mul(rhs)
            }
            fn divise(self, rhs: Self) -> Option<Self> {
                self.checked_div(rhs)
            }
            fn tronque(self) -> Option<Self> {
                Some(self)
            }
        }
    };
}

impl_nombre_entier!(i32, "int");
impl_nombre_entier!(i64, "long");

// IEEE : division par zéro => ±inf / NaN, pas d’erreur.
impl Nombre for f64 {
    const NOM: &'static str = "double";

    fn ajoute(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }
    fn soustrait(self, rhs: Self) -> Option<Self> {
        Some(self - rhs)
    }
    fn multiplie(self, rhs: Self) -> Option<Self> {
        Some(self * rhs)
    }
    fn divise(self, rhs: Self) -> Option<Self> {
        Some(self / rhs)
    }
    fn tronque(self) -> Option<Self> {
        self.is_finite().then(|| self.trunc())
    }
}
