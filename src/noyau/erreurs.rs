//! src/noyau/erreurs.rs
//!
//! Erreurs du noyau.
//!
//! Contrat : aucune erreur n’est fatale. L’opération fautive est rejetée, l’état
//! reste intact (seule exception documentée : division par zéro, qui rejette
//! l’opérande droit pour permettre la re-saisie). Les messages `Display` sont
//! destinés à l’utilisateur, tels quels.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ErreurCalc {
    /// Le segment en cours contient déjà une virgule.
    #[error("Virgule déjà présente")]
    DecimaleEnDouble,

    /// Un exposant est déjà ouvert dans le tampon.
    #[error("Exposant déjà présent")]
    ExposantEnDouble,

    /// Exposant demandé sur un tampon vide.
    #[error("Rien à exponentier")]
    OperandeVide,

    /// DEL sur un tampon vide.
    #[error("Rien à supprimer")]
    RienASupprimer,

    /// Opérateur reçu sans aucun opérande (expression vide, tampon vide).
    #[error("Veuillez d’abord entrer un nombre")]
    OperandeManquante,

    #[error("Division par zéro impossible")]
    DivisionParZero,

    /// « = » sans les trois éléments, ou saisie partielle non convertible
    /// (signe seul, exposant ouvert sans chiffres).
    #[error("Expression incomplète")]
    ExpressionIncomplete,
}
