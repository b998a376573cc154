// src/noyau/saisie.rs
//
// Saisie : la suite ordonnée des lexèmes entrés bouton par bouton.
//
// Contrats :
// - Aucune validation ici. La saisie stocke tel quel, l'aval juge.
// - Seules les éditions (ajout, retrait du dernier, vidage) la modifient.

/// Suite de lexèmes avec retrait du dernier et rendu d'affichage.
#[derive(Clone, Debug, Default)]
pub struct Saisie {
    lexemes: Vec<String>,
}

impl Saisie {
    /// Ajoute un lexème en queue, tel quel.
    pub fn ajouter(&mut self, lexeme: &str) {
        self.lexemes.push(lexeme.to_string());
    }

    /// Retire le dernier lexème. Sans effet sur une saisie vide.
    pub fn retirer_dernier(&mut self) {
        self.lexemes.pop();
    }

    /// Vide la saisie.
    pub fn vider(&mut self) {
        self.lexemes.clear();
    }

    pub fn lexemes(&self) -> &[String] {
        &self.lexemes
    }

    /// Rendu pour l'écran : concaténation brute, sauf les noms
    /// unaires qui s'affichent en signe simple.
    pub fn affichage(&self) -> String {
        let mut texte = String::new();
        for lexeme in &self.lexemes {
            match lexeme.as_str() {
                "unary +" => texte.push('+'),
                "unary -" => texte.push('-'),
                autre => texte.push_str(autre),
            }
        }
        texte
    }
}
