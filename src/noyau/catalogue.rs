// src/noyau/catalogue.rs
//
// Catalogue des opérations nommées.
//
// Une seule source de vérité : l'énum `Fonction` porte nom, arité,
// associativité, précédence et application numérique. Tout ce que le
// catalogue ne connaît pas est « de la matière à nombre » pour le
// découpage en jetons.
//
// Convention d'opérandes : ordre de dépilement, le sommet d'abord.
// Pour un opérateur binaire, operandes[1] est l'opérande gauche.

/// Sens d'associativité pour le tri infixe -> postfixe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

/// Une opération du catalogue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    PlusUnaire,
    MoinsUnaire,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Ln,
    Log,
    Racine,
    Puissance,
    Produit,
    Quotient,
    Modulo,
    Somme,
    Difference,
}

impl Fonction {
    /// Résout un jeton en opération du catalogue.
    /// `None` pour tout le reste (nombres, `X`, parenthèses, inattendus).
    pub fn depuis_nom(nom: &str) -> Option<Fonction> {
        use Fonction::*;
        match nom {
            "unary +" => Some(PlusUnaire),
            "unary -" => Some(MoinsUnaire),
            "sin" => Some(Sin),
            "cos" => Some(Cos),
            "tan" => Some(Tan),
            "asin" => Some(Asin),
            "acos" => Some(Acos),
            "atan" => Some(Atan),
            "ln" => Some(Ln),
            "log" => Some(Log),
            "sqrt" => Some(Racine),
            "^" => Some(Puissance),
            "*" => Some(Produit),
            "/" => Some(Quotient),
            "mod" => Some(Modulo),
            "+" => Some(Somme),
            "-" => Some(Difference),
            _ => None,
        }
    }

    pub fn arite(self) -> usize {
        use Fonction::*;
        match self {
            PlusUnaire | MoinsUnaire | Sin | Cos | Tan | Asin | Acos | Atan | Ln | Log
            | Racine => 1,
            Puissance | Produit | Quotient | Modulo | Somme | Difference => 2,
        }
    }

    pub fn associativite(self) -> Associativite {
        use Fonction::*;
        match self {
            Produit | Quotient | Modulo | Somme | Difference => Associativite::Gauche,
            _ => Associativite::Droite,
        }
    }

    /// Précédence : unaires 3, `^ * / mod` 2, `+ -` 1.
    pub fn precedence(self) -> i32 {
        use Fonction::*;
        match self {
            Somme | Difference => 1,
            Puissance | Produit | Quotient | Modulo => 2,
            _ => 3,
        }
    }

    /// Applique l'opération aux opérandes (sommet de pile en tête).
    /// Un mauvais nombre d'opérandes est une faute de programmation,
    /// pas une erreur utilisateur : l'indexation panique.
    pub fn applique(self, operandes: &[f64]) -> f64 {
        use Fonction::*;
        match self {
            PlusUnaire => operandes[0],
            MoinsUnaire => -operandes[0],
            Sin => operandes[0].sin(),
            Cos => operandes[0].cos(),
            Tan => operandes[0].tan(),
            Asin => operandes[0].asin(),
            Acos => operandes[0].acos(),
            Atan => operandes[0].atan(),
            Ln => operandes[0].ln(),
            Log => operandes[0].log10(),
            Racine => operandes[0].sqrt(),
            Puissance => operandes[1].powf(operandes[0]),
            Produit => operandes[1] * operandes[0],
            Quotient => operandes[1] / operandes[0],
            Modulo => operandes[1] % operandes[0],
            Somme => operandes[1] + operandes[0],
            Difference => operandes[1] - operandes[0],
        }
    }
}
