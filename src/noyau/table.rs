// src/noyau/table.rs
//
// Table fixe des opérateurs et fonctions.
// Règles:
// - Ensemble fermé : rien ne s’ajoute à l’exécution.
// - Recherche par symbole exact (sensible à la casse) : "SIN" n’est PAS "sin".
// - Un symbole connu est toujours une opération, jamais un littéral.

use num_traits::Float;

/// Opérateurs binaires : appliqués comme `op(x, y)`,
/// `x` empilé avant `y` (donc "10 3 -" => 10 - 3).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBinaire {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
}

/// Fonctions unaires (radians).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FnUnaire {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,
    Ctg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Binaire(OpBinaire),
    Unaire(FnUnaire),
}

/// Descripteur immuable : symbole + opération (l’arité découle de l’opération).
#[derive(Clone, Copy, Debug)]
pub struct Descripteur {
    pub symbole: &'static str,
    pub operation: Operation,
}

const fn bin(symbole: &'static str, op: OpBinaire) -> Descripteur {
    Descripteur {
        symbole,
        operation: Operation::Binaire(op),
    }
}

const fn una(symbole: &'static str, f: FnUnaire) -> Descripteur {
    Descripteur {
        symbole,
        operation: Operation::Unaire(f),
    }
}

/// La table, construite à la compilation.
static TABLE: [Descripteur; 13] = [
    bin("+", OpBinaire::Plus),
    bin("-", OpBinaire::Moins),
    bin("*", OpBinaire::Fois),
    bin("/", OpBinaire::Divise),
    bin("^", OpBinaire::Puissance),
    una("sin", FnUnaire::Sin),
    una("cos", FnUnaire::Cos),
    una("tan", FnUnaire::Tan),
    una("asin", FnUnaire::Asin),
    una("acos", FnUnaire::Acos),
    una("atan", FnUnaire::Atan),
    una("sqrt", FnUnaire::Sqrt),
    una("ctg", FnUnaire::Ctg),
];

/// Cherche un symbole dans la table (correspondance exacte).
pub fn lookup(symbole: &str) -> Option<Operation> {
    TABLE
        .iter()
        .find(|d| d.symbole == symbole)
        .map(|d| d.operation)
}

/// Tous les descripteurs, dans l’ordre de la table.
pub fn descripteurs() -> &'static [Descripteur] {
    &TABLE
}

impl OpBinaire {
    /// Applique l’opérateur à `(x, y)`.
    ///
    /// `None` uniquement pour une division dont le diviseur vaut exactement zéro
    /// (`-0` compris). Aucune tolérance : `1e-300` reste un diviseur valide.
    /// La puissance ne vérifie rien : NaN / ±inf sont des valeurs comme les autres.
    pub fn appliquer<F: Float>(self, x: F, y: F) -> Option<F> {
        match self {
            OpBinaire::Plus => Some(x + y),
            OpBinaire::Moins => Some(x - y),
            OpBinaire::Fois => Some(x * y),
            OpBinaire::Divise => {
                if y == F::zero() {
                    None
                } else {
                    Some(x / y)
                }
            }
            OpBinaire::Puissance => Some(x.powf(y)),
        }
    }
}

impl FnUnaire {
    pub fn appliquer<F: Float>(self, x: F) -> F {
        match self {
            FnUnaire::Sin => x.sin(),
            FnUnaire::Cos => x.cos(),
            FnUnaire::Tan => x.tan(),
            FnUnaire::Asin => x.asin(),
            FnUnaire::Acos => x.acos(),
            FnUnaire::Atan => x.atan(),
            FnUnaire::Sqrt => x.sqrt(),
            // ctg(x) = 1/tan(x) ; tan(x) == 0 donne ±inf, pas une erreur
            FnUnaire::Ctg => x.tan().recip(),
        }
    }
}

impl Operation {
    pub fn arite(self) -> usize {
        match self {
            Operation::Binaire(_) => 2,
            Operation::Unaire(_) => 1,
        }
    }

    pub fn symbole(self) -> &'static str {
        TABLE
            .iter()
            .find(|d| d.operation == self)
            .map(|d| d.symbole)
            .unwrap_or("?")
    }
}
