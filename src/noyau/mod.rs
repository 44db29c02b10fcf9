//! Noyau de la calculatrice pavé
//!
//! Organisation interne :
//! - tampon.rs     : saisie d’un opérande jeton par jeton (base + exposant)
//! - expression.rs : triplet [a op b], pliage gauche-droite, enchaînement
//! - session.rs    : machine d’états complète + contrat d’affichage
//! - format.rs     : arrondi 10 décimales + bascule exponentielle
//! - minuterie.rs  : auto-effacement annulable des messages d’erreur
//! - erreurs.rs    : taxonomie fermée des rejets
//!
//! Strictement synchrone et mono-fil : une touche est traitée d’un bloc,
//! aucune suspension, aucun état partagé.

pub mod erreurs;
pub mod expression;
pub mod format;
pub mod minuterie;
pub mod session;
pub mod tampon;

#[cfg(test)]
mod tests_parcours;

// API publique minimale
pub use erreurs::ErreurCalc;
pub use expression::Op;
pub use minuterie::{Minuterie, DELAI_ERREUR_S};
pub use session::{Affichage, Mode, Session, Touche};
