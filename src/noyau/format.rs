// src/noyau/format.rs
//
// Mise en forme des valeurs pour l’écran.
//
// Contrat d’affichage :
// - résultats arrondis à 10 décimales (gomme le bruit binaire type 0.30000000000000004)
// - au-delà de 1e9 en valeur absolue : notation exponentielle normalisée,
//   pour borner la largeur de l’écran

/// Nombre de décimales conservées sur un résultat.
const DECIMALES_RESULTAT: usize = 10;

/// Seuil au-delà duquel on passe en notation exponentielle.
const SEUIL_EXPONENTIEL: f64 = 1e9;

/// Arrondit un résultat d’évaluation à 10 décimales.
///
/// Passage par le texte plutôt que par `(v * 1e10).round() / 1e10` : le
/// aller-retour multiplicatif n’est pas exact en f64 pour les grandes
/// magnitudes, l’arrondi décimal de `format!` l’est.
pub fn arrondir_resultat(v: f64) -> f64 {
    if !v.is_finite() {
        return v;
    }
    format!("{v:.prec$}", prec = DECIMALES_RESULTAT)
        .parse()
        .unwrap_or(v)
}

/// Texte écran d’une valeur : décimal tant que c’est court, exponentiel après.
pub fn format_valeur(v: f64) -> String {
    if v.is_finite() && v.abs() > SEUIL_EXPONENTIEL {
        return format!("{v:e}");
    }
    format!("{v}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrondi_bruit_binaire() {
        assert_eq!(arrondir_resultat(0.1 + 0.2), 0.3);
        assert_eq!(arrondir_resultat(2.675), 2.675);
    }

    #[test]
    fn arrondi_laisse_les_grands_nombres() {
        assert_eq!(arrondir_resultat(1e16), 1e16);
        assert_eq!(arrondir_resultat(19_999_999_998.0), 19_999_999_998.0);
    }

    #[test]
    fn entier_affiche_sans_virgule() {
        assert_eq!(format_valeur(16.0), "16");
        assert_eq!(format_valeur(-2.0), "-2");
    }

    #[test]
    fn decimal_court() {
        assert_eq!(format_valeur(0.3), "0.3");
        assert_eq!(format_valeur(1.25), "1.25");
    }

    #[test]
    fn bascule_exponentielle_apres_1e9() {
        // 9999999999 * 2
        assert_eq!(format_valeur(19_999_999_998.0), "1.9999999998e10");
        // sous le seuil : décimal normal
        assert_eq!(format_valeur(999_999_999.0), "999999999");
        assert_eq!(format_valeur(-19_999_999_998.0), "-1.9999999998e10");
    }
}
