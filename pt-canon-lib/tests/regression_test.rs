// Regression tests for the full cascade against the bundled word list.

use pt_canon_lib::output::trace_line;
use pt_canon_lib::{canonicalize, reduce, Dictionary, Outcome, Stage};

fn dict() -> Dictionary {
    Dictionary::bundled()
}

fn check(cases: &[(&str, &str)]) {
    let d = dict();
    for &(input, expected) in cases {
        assert_eq!(
            canonicalize(input, &d),
            Outcome::Canonical(expected.to_string()),
            "{input} should canonicalize to {expected}"
        );
    }
}

#[test]
fn documented_scenarios() {
    check(&[
        ("nuvens", "nuvem"),
        ("corações", "coração"),
        ("portuguesa", "português"),
        ("pezinho", "pé"),
        ("mandar-lhe", "mandar"),
    ]);
    assert_eq!(canonicalize("xpto123", &dict()), Outcome::Unknown);
}

#[test]
fn plurals() {
    check(&[
        ("nuvens", "nuvem"),
        ("jardins", "jardim"),
        ("corações", "coração"),
        ("pães", "pão"),
        ("mãos", "mão"),
        ("animais", "animal"),
        ("papéis", "papel"),
        ("anzóis", "anzol"),
        ("barris", "barril"),
        ("flores", "flor"),
        ("luzes", "luz"),
        ("colheres", "colher"),
        ("casas", "casa"),
        ("livros", "livro"),
    ]);
}

#[test]
fn feminines() {
    check(&[
        ("portuguesa", "português"),
        ("camponesa", "camponês"),
        ("valentona", "valentão"),
        ("menina", "menino"),
        ("gata", "gato"),
        ("médica", "médico"),
        ("professora", "professor"),
        ("cantora", "cantor"),
    ]);
}

#[test]
fn diminutives_and_augmentatives() {
    check(&[
        ("pezinho", "pé"),
        ("florzinha", "flor"),
        ("gatinho", "gato"),
        ("casinha", "casa"),
        ("coelhinho", "coelho"),
        ("pastorinho", "pastor"),
        ("avozinho", "avô"),
        ("pezão", "pé"),
        ("cafezão", "café"),
        ("gatão", "gato"),
        ("mulherão", "mulher"),
        ("livrito", "livro"),
    ]);
}

#[test]
fn verb_forms() {
    check(&[
        ("mandar-lhe", "mandar"),
        ("amá-lo", "amar"),
        ("vendê-lo", "vender"),
        ("cantando", "cantar"),
        ("correndo", "correr"),
        ("sorrindo", "sorrir"),
        ("parado", "parar"),
        ("comido", "comer"),
        ("partido", "partir"),
        ("falaram", "falar"),
        ("beberam", "beber"),
        ("abriram", "abrir"),
        ("sonhava", "sonhar"),
        ("corria", "correr"),
        ("partia", "partir"),
        ("olhou", "olhar"),
        ("moveu", "mover"),
        ("saiu", "sair"),
        ("falei", "falar"),
    ]);
}

#[test]
fn derivations() {
    check(&[
        ("felizmente", "feliz"),
        ("pedreiro", "pedra"),
        ("limoeiro", "limão"),
        ("dentista", "dente"),
        ("jornalista", "jornal"),
        ("beleza", "belo"),
        ("felicidade", "feliz"),
        ("bondade", "bom"),
        ("altura", "alto"),
        ("casamento", "casar"),
        ("criação", "criar"),
        ("navegação", "navegar"),
        ("famoso", "fama"),
        ("amável", "amar"),
    ]);
}

#[test]
fn stages_chain() {
    check(&[
        ("gatinhas", "gato"),
        ("casinhas", "casa"),
        ("gatona", "gato"),
    ]);
}

#[test]
fn gatinhas_goes_through_three_stages() {
    let d = dict();
    let r = reduce("gatinhas", &d);
    assert_eq!(
        trace_line(&r),
        "gatinhas → gatinha (plural -s) → gatinho (gender -a) → gato (degree -inho)"
    );
}

#[test]
fn gatona_is_masculinized_before_degree() {
    let d = dict();
    let r = reduce("gatona", &d);
    let path: Vec<(Stage, &str)> = r.steps.iter().map(|s| (s.stage, s.to.as_str())).collect();
    assert_eq!(path, [(Stage::Gender, "gatão"), (Stage::Degree, "gato")]);
}

#[test]
fn future_tense_reaches_infinitive_through_degree() {
    // "-ão" is also an augmentative ending, and amar is a known word.
    let d = dict();
    let r = reduce("amarão", &d);
    assert_eq!(r.outcome, Outcome::Canonical("amar".into()));
    assert_eq!(r.steps.len(), 1);
    assert_eq!(r.steps[0].stage, Stage::Degree);
}

#[test]
fn words_without_reducible_endings_are_kept() {
    let d = dict();
    for word in [
        "ônibus",
        "lápis",
        "tênis",
        "vírus",
        "computador",
        "mesa",
        "cadeira",
        "pessoa",
        "abelha",
        "menino",
        "ator",
        "juíza",
        "grandona",
        "vizinho",
        "rainha",
        "cão",
        "bando",
        "lindo",
        "dia",
        "museu",
        "falar",
        "valentão",
        "irmã",
    ] {
        let r = reduce(word, &d);
        assert_eq!(
            r.outcome,
            Outcome::Canonical(word.to_string()),
            "{word} should be its own canonical form"
        );
        assert!(r.steps.is_empty(), "{word} should not be rewritten");
    }
}

#[test]
fn uncovered_derivations_stay_put() {
    // -al only tries -o; -mente and -ez never restore an accent.
    let d = dict();
    for word in ["mundial", "rapidamente", "rapidez"] {
        assert_eq!(
            canonicalize(word, &d),
            Outcome::Canonical(word.to_string()),
            "{word} has no reachable root"
        );
    }
}

#[test]
fn unknown_inputs() {
    let d = dict();
    for word in ["xpto123", "", "   ", "42", "gatos", "cantei", "--"] {
        assert_eq!(
            canonicalize(word, &d),
            Outcome::Unknown,
            "{word:?} is not in the word list"
        );
    }
}

#[test]
fn clitic_step_records_hyphenated_ending() {
    let d = dict();
    let r = reduce("amá-lo", &d);
    assert_eq!(r.steps.len(), 1);
    assert_eq!(r.steps[0].stage, Stage::Verb);
    assert_eq!(r.steps[0].ending, "-lo");
    assert_eq!(trace_line(&r), "amá-lo → amar (verb -lo)");
}

#[test]
fn pezinho_records_zinho() {
    let d = dict();
    let r = reduce("pezinho", &d);
    assert_eq!(r.steps.len(), 1);
    assert_eq!(r.steps[0].stage, Stage::Degree);
    assert_eq!(r.steps[0].from, "pezinho");
    assert_eq!(r.steps[0].ending, "zinho");
}
