// src/noyau/tampon.rs
//
// Tampon de saisie : l’opérande en cours de frappe, jeton par jeton.
//
// Invariants :
// - au plus une virgule par segment (base et exposant comptés séparément)
// - au plus une marque d’exposant
// - le signe est toujours en tête de son segment
//
// Le “signe en attente” n’est pas un champ : il se déduit du premier jeton du
// segment ouvert (sinon DEL et le double-bascule le désynchroniseraient).

use super::erreurs::ErreurCalc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Jeton {
    Chiffre(u8), // 0..=9
    Virgule,
    Signe,
    MarqueExposant,
}

/// Tampon d’un opérande : base, puis (optionnel) segment exposant.
#[derive(Clone, Debug, Default)]
pub struct Tampon {
    jetons: Vec<Jeton>,
}

impl Tampon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn est_vide(&self) -> bool {
        self.jetons.is_empty()
    }

    /// Index de la marque d’exposant, si présente.
    fn marque_exposant(&self) -> Option<usize> {
        self.jetons
            .iter()
            .position(|j| matches!(j, Jeton::MarqueExposant))
    }

    /// Début (inclus) du segment ouvert : l’exposant si ouvert, sinon la base.
    fn debut_segment_ouvert(&self) -> usize {
        match self.marque_exposant() {
            Some(i) => i + 1,
            None => 0,
        }
    }

    fn segment_ouvert(&self) -> &[Jeton] {
        &self.jetons[self.debut_segment_ouvert()..]
    }

    /// Vrai si le segment ouvert commence par un signe non encore confirmé
    /// (c.-à-d. tant que l’opérande n’a pas été vidé vers l’expression).
    pub fn signe_en_attente(&self) -> bool {
        matches!(self.segment_ouvert().first(), Some(Jeton::Signe))
    }

    /* ------------------------ Saisie ------------------------ */

    /// Ajoute un chiffre au segment ouvert.
    ///
    /// Repli du zéro de tête : un segment réduit à `0` est REMPLACÉ par le
    /// nouveau chiffre (on ne tape pas “07”), sauf si une virgule suit le zéro.
    pub fn saisir_chiffre(&mut self, d: u8) {
        debug_assert!(d <= 9, "chiffre hors [0,9]: {d}");

        let seg = self.segment_ouvert();
        let sans_signe: &[Jeton] = match seg.first() {
            Some(Jeton::Signe) => &seg[1..],
            _ => seg,
        };
        if sans_signe == [Jeton::Chiffre(0)] {
            let dernier = self.jetons.len() - 1;
            self.jetons[dernier] = Jeton::Chiffre(d);
            return;
        }

        self.jetons.push(Jeton::Chiffre(d));
    }

    /// Ajoute une virgule au segment ouvert.
    pub fn saisir_virgule(&mut self) -> Result<(), ErreurCalc> {
        if self
            .segment_ouvert()
            .iter()
            .any(|j| matches!(j, Jeton::Virgule))
        {
            return Err(ErreurCalc::DecimaleEnDouble);
        }
        self.jetons.push(Jeton::Virgule);
        Ok(())
    }

    /// Bascule le signe du segment ouvert : ajouté en tête s’il est absent,
    /// retiré sinon. Deux bascules rendent le tampon à l’identique.
    pub fn basculer_signe(&mut self) {
        let debut = self.debut_segment_ouvert();
        if matches!(self.jetons.get(debut), Some(Jeton::Signe)) {
            self.jetons.remove(debut);
        } else {
            self.jetons.insert(debut, Jeton::Signe);
        }
    }

    /// Ouvre le segment exposant (base^exposant).
    ///
    /// Re-presser EXP juste après l’avoir ouvert le referme (bascule).
    pub fn saisir_exposant(&mut self) -> Result<(), ErreurCalc> {
        if self.jetons.is_empty() {
            return Err(ErreurCalc::OperandeVide);
        }
        if matches!(self.jetons.last(), Some(Jeton::MarqueExposant)) {
            self.jetons.pop();
            return Ok(());
        }
        if self.marque_exposant().is_some() {
            return Err(ErreurCalc::ExposantEnDouble);
        }
        self.jetons.push(Jeton::MarqueExposant);
        Ok(())
    }

    /// Retire le dernier jeton saisi.
    pub fn effacer_derniere(&mut self) -> Result<(), ErreurCalc> {
        if self.jetons.pop().is_none() {
            return Err(ErreurCalc::RienASupprimer);
        }
        Ok(())
    }

    pub fn tout_effacer(&mut self) {
        self.jetons.clear();
    }

    /* ------------------------ Texte & vidage ------------------------ */

    /// Texte affichable du tampon (la marque d’exposant se rend `^`).
    pub fn texte(&self) -> String {
        let mut s = String::with_capacity(self.jetons.len());
        for j in &self.jetons {
            match j {
                Jeton::Chiffre(d) => s.push((b'0' + d) as char),
                Jeton::Virgule => s.push('.'),
                Jeton::Signe => s.push('-'),
                Jeton::MarqueExposant => s.push('^'),
            }
        }
        s
    }

    /// Vide le tampon vers une valeur numérique.
    ///
    /// Avec exposant : valeur = base^exposant (deux flottants, `powf`).
    /// Une saisie partielle (signe seul, exposant sans chiffres) est rejetée
    /// SANS vider le tampon, pour laisser l’utilisateur compléter.
    pub fn vider(&mut self) -> Result<f64, ErreurCalc> {
        let valeur = match self.marque_exposant() {
            Some(i) => {
                let base = Self::parse_segment(&self.jetons[..i])?;
                let expo = Self::parse_segment(&self.jetons[i + 1..])?;
                base.powf(expo)
            }
            None => Self::parse_segment(&self.jetons)?,
        };
        self.jetons.clear();
        Ok(valeur)
    }

    fn parse_segment(jetons: &[Jeton]) -> Result<f64, ErreurCalc> {
        let mut s = String::with_capacity(jetons.len());
        for j in jetons {
            match j {
                Jeton::Chiffre(d) => s.push((b'0' + d) as char),
                Jeton::Virgule => s.push('.'),
                Jeton::Signe => s.push('-'),
                Jeton::MarqueExposant => return Err(ErreurCalc::ExpressionIncomplete),
            }
        }
        s.parse::<f64>().map_err(|_| ErreurCalc::ExpressionIncomplete)
    }
}
