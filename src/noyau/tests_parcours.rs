//! Tests de parcours : des séquences de touches complètes, comme au pavé.
//!
//! But : vérifier la machine d’états de bout en bout (saisie → opérateur →
//! saisie → égal), y compris les rejets et la reprise après erreur.
//! Invariant clé : aucune erreur n’est fatale, la session reste utilisable.

use super::erreurs::ErreurCalc;
use super::expression::Op;
use super::session::{Mode, Session, Touche, TRACE_REPOS};

/* ------------------------ Helpers parcours ------------------------ */

/// Rejoue une séquence texte sur une session neuve.
/// `0`..`9` chiffre, `.` virgule, `+ - * /` opérateur, `=` égal,
/// `s` signe, `x` exposant, `d` supprimer, `c` effacer.
fn rejouer(seq: &str) -> Session {
    let mut s = Session::new();
    for c in seq.chars() {
        let _ = appuyer_char(&mut s, c);
    }
    s
}

fn appuyer_char(s: &mut Session, c: char) -> Result<(), ErreurCalc> {
    let touche = match c {
        '0'..='9' => Touche::Chiffre(c as u8 - b'0'),
        '.' => Touche::Decimale,
        '=' => Touche::Egal,
        's' => Touche::Signe,
        'x' => Touche::Exposant,
        'd' => Touche::Supprimer,
        'c' => Touche::Effacer,
        _ => Touche::Operateur(Op::depuis_symbole(c).unwrap_or_else(|| {
            panic!("séquence de test invalide: {c:?}")
        })),
    };
    s.appuyer(touche)
}

fn ecran(seq: &str) -> String {
    rejouer(seq).affichage().ecran
}

/* ------------------------ Parcours nominaux ------------------------ */

#[test]
fn parcours_quatre_operations() {
    assert_eq!(ecran("5+3="), "8");
    assert_eq!(ecran("5-3="), "2");
    assert_eq!(ecran("5*3="), "15");
    assert_eq!(ecran("5/4="), "1.25");
}

#[test]
fn parcours_enchainement_gauche_droite() {
    // 5 + 3 * 2 = : (5+3)=8 puis 8*2=16, pas de priorité du *
    assert_eq!(ecran("5+3*2="), "16");
}

#[test]
fn parcours_enchainement_sur_resultat() {
    // = puis opérateur : le résultat devient l’opérande gauche
    assert_eq!(ecran("5+3=*2="), "16");
}

#[test]
fn parcours_decimales() {
    assert_eq!(ecran("1.5+2.25="), "3.75");
    // bruit binaire gommé par l’arrondi à 10 décimales
    assert_eq!(ecran("0.1+0.2="), "0.3");
}

#[test]
fn parcours_signe() {
    assert_eq!(ecran("5s+3="), "-2");
    // double bascule : retour au positif
    assert_eq!(ecran("5ss+3="), "8");
}

#[test]
fn parcours_exposant() {
    // 2^3 = 8 comme opérande gauche
    assert_eq!(ecran("2x3+1="), "9");
    // exposant négatif
    assert_eq!(ecran("2xs1*4="), "2");
}

#[test]
fn parcours_suppression() {
    // 12, DEL, 5 → 15
    assert_eq!(ecran("12d5+0="), "15");
}

#[test]
fn parcours_grand_resultat_exponentiel() {
    assert_eq!(ecran("9999999999*2="), "1.9999999998e10");
}

#[test]
fn parcours_dernier_operateur_gagne() {
    // + remplacé par * avant la saisie de b
    assert_eq!(ecran("5+*3="), "15");
    assert_eq!(rejouer("5+*").affichage().trace, "5 *");
}

/* ------------------------ Rejets & reprise ------------------------ */

#[test]
fn rejet_division_par_zero_puis_reprise() {
    let mut s = rejouer("8/");
    appuyer_char(&mut s, '0').unwrap();
    assert_eq!(appuyer_char(&mut s, '='), Err(ErreurCalc::DivisionParZero));

    // b rejeté, [8 /] conservé : on retape b et on conclut
    assert_eq!(s.affichage().trace, "8 /");
    appuyer_char(&mut s, '2').unwrap();
    appuyer_char(&mut s, '=').unwrap();
    assert_eq!(s.affichage().ecran, "4");
}

#[test]
fn rejet_virgule_en_double() {
    let mut s = rejouer("3.1");
    assert_eq!(appuyer_char(&mut s, '.'), Err(ErreurCalc::DecimaleEnDouble));
    // la saisie continue comme si de rien n’était
    appuyer_char(&mut s, '4').unwrap();
    assert_eq!(s.affichage().ecran, "3.14");
}

#[test]
fn rejet_del_sur_vide() {
    let mut s = Session::new();
    assert_eq!(appuyer_char(&mut s, 'd'), Err(ErreurCalc::RienASupprimer));
    assert_eq!(s.affichage().ecran, "0");
}

#[test]
fn rejet_exposant_sur_vide() {
    let mut s = Session::new();
    assert_eq!(appuyer_char(&mut s, 'x'), Err(ErreurCalc::OperandeVide));
}

#[test]
fn rejet_operateur_sans_operande() {
    let mut s = Session::new();
    assert_eq!(
        appuyer_char(&mut s, '+'),
        Err(ErreurCalc::OperandeManquante)
    );
    // la session reste utilisable
    appuyer_char(&mut s, '7').unwrap();
    assert_eq!(s.affichage().ecran, "7");
}

#[test]
fn rejet_egal_sans_triplet() {
    let mut s = rejouer("5+");
    assert_eq!(
        appuyer_char(&mut s, '='),
        Err(ErreurCalc::ExpressionIncomplete)
    );
    assert_eq!(s.affichage().mode, Mode::AttenteOperande);
}

/* ------------------------ Effacement & modes ------------------------ */

#[test]
fn effacer_en_plein_parcours() {
    let s = rejouer("5+3c");
    let a = s.affichage();
    assert_eq!(a.ecran, "0");
    assert_eq!(a.trace, TRACE_REPOS);
    assert_eq!(a.mode, Mode::Saisie);
}

#[test]
fn modes_le_long_du_parcours() {
    assert_eq!(rejouer("5").affichage().mode, Mode::Saisie);
    assert_eq!(rejouer("5+").affichage().mode, Mode::AttenteOperande);
    assert_eq!(rejouer("5+3").affichage().mode, Mode::Saisie);
    assert_eq!(rejouer("5+3=").affichage().mode, Mode::Resultat);
}

#[test]
fn trace_le_long_du_parcours() {
    assert_eq!(rejouer("").affichage().trace, TRACE_REPOS);
    assert_eq!(rejouer("5+").affichage().trace, "5 +");
    assert_eq!(rejouer("5+3").affichage().trace, "5 +");
    assert_eq!(rejouer("5+3=").affichage().trace, "5 + 3 =");
    // enchaînement : la trace suit le pliage
    assert_eq!(rejouer("5+3*").affichage().trace, "8 *");
}
