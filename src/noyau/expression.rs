// src/noyau/expression.rs
//
// Expression binaire : zéro à trois éléments, [a], [a op], [a op b].
// Évaluation uniquement à trois éléments ; le résultat redevient [a] pour
// l’enchaînement. Pliage strictement gauche-droite, aucune priorité.

use super::erreurs::ErreurCalc;
use super::format::arrondir_resultat;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Division,
}

impl Op {
    /// Symbole pavé -> opérateur. `=` n’est pas un opérateur (touche à part).
    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Moins),
            '*' => Some(Op::Fois),
            '/' => Some(Op::Division),
            _ => None,
        }
    }

    fn appliquer(self, a: f64, b: f64) -> Result<f64, ErreurCalc> {
        match self {
            Op::Plus => Ok(a + b),
            Op::Moins => Ok(a - b),
            Op::Fois => Ok(a * b),
            Op::Division => {
                if b == 0.0 {
                    Err(ErreurCalc::DivisionParZero)
                } else {
                    Ok(a / b)
                }
            }
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = match self {
            Op::Plus => '+',
            Op::Moins => '-',
            Op::Fois => '*',
            Op::Division => '/',
        };
        write!(f, "{c}")
    }
}

/// Les quatre remplissages possibles du triplet.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Etat {
    #[default]
    Vide,
    Operande(f64),
    Attente(f64, Op),
    Complete(f64, Op, f64),
}

#[derive(Clone, Debug, Default)]
pub struct Expression {
    etat: Etat,
}

impl Expression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn etat(&self) -> Etat {
        self.etat
    }

    pub fn est_vide(&self) -> bool {
        matches!(self.etat, Etat::Vide)
    }

    pub fn tout_effacer(&mut self) {
        self.etat = Etat::Vide;
    }

    /// Dépose un opérande dans le premier emplacement libre.
    pub fn pousser_operande(&mut self, v: f64) {
        self.etat = match self.etat {
            Etat::Vide => Etat::Operande(v),
            Etat::Operande(_) => Etat::Operande(v),
            Etat::Attente(a, op) => Etat::Complete(a, op, v),
            // ne devrait pas arriver (la session évalue avant) ; on remplace b
            Etat::Complete(a, op, _) => Etat::Complete(a, op, v),
        };
    }

    /// Dépose un opérateur.
    ///
    /// - expression vide : `OperandeManquante`
    /// - `[a op]` : le nouvel opérateur REMPLACE l’ancien (dernier gagne)
    /// - `[a op b]` : évalue d’abord, puis continue avec `[résultat op']`
    pub fn pousser_operateur(&mut self, op: Op) -> Result<(), ErreurCalc> {
        match self.etat {
            Etat::Vide => Err(ErreurCalc::OperandeManquante),
            Etat::Operande(a) => {
                self.etat = Etat::Attente(a, op);
                Ok(())
            }
            Etat::Attente(a, _) => {
                self.etat = Etat::Attente(a, op);
                Ok(())
            }
            Etat::Complete(..) => {
                let r = self.evaluer()?;
                self.etat = Etat::Attente(r, op);
                Ok(())
            }
        }
    }

    /// Évalue `[a op b]` et replie sur `[résultat]`.
    ///
    /// Division par zéro : l’opérande b est rejeté (retour à `[a op]`) pour
    /// que l’utilisateur le retape ; rien d’autre ne bouge.
    pub fn evaluer(&mut self) -> Result<f64, ErreurCalc> {
        let Etat::Complete(a, op, b) = self.etat else {
            return Err(ErreurCalc::ExpressionIncomplete);
        };

        match op.appliquer(a, b) {
            Ok(brut) => {
                let r = arrondir_resultat(brut);
                self.etat = Etat::Operande(r);
                Ok(r)
            }
            Err(e) => {
                self.etat = Etat::Attente(a, op);
                Err(e)
            }
        }
    }
}
