// src/noyau/graphe.rs
//
// Traceur adaptatif : balayage de X sur la fenêtre, raffinement par
// bissection là où la courbe bouge vite, découpe en polylignes.
//
// Conventions de densité :
// - x_pix et y_pix sont des pixels PAR UNITÉ d'axe, d'où les pas
//   delta_x = 1/x_pix et delta_y = 1/y_pix.
// Conditions d'arrêt du raffinement :
// - le milieu colle au bord gauche à delta_y près (zone lisse)
// - les trois ordonnées sortent du même côté de la fenêtre (zone
//   franchement hors champ, typiquement autour d'une asymptote)
// - garde-fou de profondeur en dernier recours.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::erreur::ErreurCalc;

/// Garde-fou : au-delà, l'intervalle est de toute façon plus fin
/// que tout pixel raisonnable.
const PROFONDEUR_MAX: u32 = 64;

/// Une polyligne : suites de points (x, y) triées par x.
pub type Courbe = Vec<(f64, f64)>;

/// Clé d'abscisse pour la carte triée (f64 n'est pas Ord).
#[derive(Clone, Copy, Debug)]
struct CleX(f64);

impl PartialEq for CleX {
    fn eq(&self, autre: &Self) -> bool {
        self.0.total_cmp(&autre.0) == Ordering::Equal
    }
}
impl Eq for CleX {}
impl PartialOrd for CleX {
    fn partial_cmp(&self, autre: &Self) -> Option<Ordering> {
        Some(self.cmp(autre))
    }
}
impl Ord for CleX {
    fn cmp(&self, autre: &Self) -> Ordering {
        self.0.total_cmp(&autre.0)
    }
}

/// Balaye `[x_lo, x_hi]` au pas 1/x_pix, raffine où |Δy| dépasse
/// 1/y_pix, puis découpe en polylignes sur `[y_lo, y_hi]`.
///
/// `evaluer_en` reçoit chaque abscisse ; la première erreur remonte
/// telle quelle et le tracé s'arrête.
pub fn graphes<F>(
    mut evaluer_en: F,
    x_lo: f64,
    x_hi: f64,
    x_pix: i32,
    y_lo: f64,
    y_hi: f64,
    y_pix: i32,
) -> Result<Vec<Courbe>, ErreurCalc>
where
    F: FnMut(f64) -> Result<f64, ErreurCalc>,
{
    let delta_x = 1.0 / f64::from(x_pix);
    let delta_y = 1.0 / f64::from(y_pix);

    let mut carte: BTreeMap<CleX, f64> = BTreeMap::new();
    let mut precedent: Option<(f64, f64)> = None;

    let mut x = x_lo;
    while x <= x_hi {
        let y = evaluer_en(x)?;
        carte.insert(CleX(x), y);

        if let Some((x_prec, y_prec)) = precedent {
            if (y - y_prec).abs() > delta_y {
                raffiner(
                    &mut evaluer_en,
                    x_prec,
                    x,
                    delta_y,
                    y_prec,
                    y,
                    y_lo,
                    y_hi,
                    0,
                    &mut carte,
                )?;
            }
        }

        precedent = Some((x, y));
        x += delta_x;
    }

    Ok(decouper_en_courbes(&carte, y_lo, y_hi))
}

/// Bissection de `[x_min, x_max]` dont les ordonnées aux bornes sont
/// `y_min` et `y_max`. Les points calculés rejoignent la carte sans
/// écraser l'existant.
#[allow(clippy::too_many_arguments)]
fn raffiner<F>(
    evaluer_en: &mut F,
    x_min: f64,
    x_max: f64,
    delta_y: f64,
    y_min: f64,
    y_max: f64,
    y_lo: f64,
    y_hi: f64,
    profondeur: u32,
    carte: &mut BTreeMap<CleX, f64>,
) -> Result<(), ErreurCalc>
where
    F: FnMut(f64) -> Result<f64, ErreurCalc>,
{
    let x_mil = (x_min + x_max) / 2.0;
    let y_mil = evaluer_en(x_mil)?;
    carte.entry(CleX(x_mil)).or_insert(y_mil);

    let lisse = (y_mil - y_min).abs() < delta_y;
    let hors_haut = (y_min < y_mil && y_min > y_hi) || (y_max < y_mil && y_max > y_hi);
    let hors_bas = (y_max > y_mil && y_max < y_lo) || (y_min > y_mil && y_min < y_lo);

    if lisse || hors_haut || hors_bas || profondeur >= PROFONDEUR_MAX {
        return Ok(());
    }

    raffiner(
        evaluer_en, x_min, x_mil, delta_y, y_min, y_mil, y_lo, y_hi, profondeur + 1, carte,
    )?;
    raffiner(
        evaluer_en, x_mil, x_max, delta_y, y_mil, y_max, y_lo, y_hi, profondeur + 1, carte,
    )
}

/// Parcourt la carte en x croissant et regroupe les points dont
/// l'ordonnée tient dans `[y_lo, y_hi]`. Chaque sortie de fenêtre
/// ferme la polyligne courante ; les NaN ferment aussi.
fn decouper_en_courbes(carte: &BTreeMap<CleX, f64>, y_lo: f64, y_hi: f64) -> Vec<Courbe> {
    let mut courbes = Vec::new();
    let mut courante = Courbe::new();

    for (&CleX(x), &y) in carte {
        if y >= y_lo && y <= y_hi {
            courante.push((x, y));
        } else if !courante.is_empty() {
            courbes.push(std::mem::take(&mut courante));
        }
    }
    if !courante.is_empty() {
        courbes.push(courante);
    }
    courbes
}
