use crate::error::PhraseError;
use crate::state::{Category, Language};
use rand::seq::IndexedRandom;

/// A local, offline store of ready-made jokes.
pub trait PhraseLibrary: Send + Sync {
    /// One joke for the pair, or `UnsupportedCombination` when there is no
    /// table for it.
    fn pick(&self, category: Category, language: Language) -> Result<String, PhraseError>;
}

/// Phrase tables compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinPhrases;

impl BuiltinPhrases {
    /// Every phrase that may be drawn for the pair; empty when unsupported.
    pub fn candidates(category: Category, language: Language) -> Vec<&'static str> {
        let tables: &[Category] = match category {
            Category::All => &[Category::Neutral, Category::Specific],
            Category::Neutral => &[Category::Neutral],
            Category::Specific => &[Category::Specific],
        };
        tables
            .iter()
            .filter_map(|c| table(language, *c))
            .flat_map(|t| t.iter().copied())
            .collect()
    }
}

impl PhraseLibrary for BuiltinPhrases {
    fn pick(&self, category: Category, language: Language) -> Result<String, PhraseError> {
        Self::candidates(category, language)
            .choose(&mut rand::rng())
            .map(|s| (*s).to_string())
            .ok_or(PhraseError::UnsupportedCombination { language, category })
    }
}

fn table(language: Language, category: Category) -> Option<&'static [&'static str]> {
    match (language, category) {
        (Language::En, Category::Neutral) => Some(EN_NEUTRAL),
        (Language::En, Category::Specific) => Some(EN_SPECIFIC),
        (Language::De, Category::Neutral) => Some(DE_NEUTRAL),
        (Language::Es, Category::Neutral) => Some(ES_NEUTRAL),
        (Language::Es, Category::Specific) => Some(ES_SPECIFIC),
        _ => None,
    }
}

const EN_NEUTRAL: &[&str] = &[
    "Complaining about the lack of smoking shelters, the nicotine addicted Python programmers said there ought to be 'spaces for tabs'.",
    "Why do programmers always mix up Halloween and Christmas? Because Oct 31 == Dec 25.",
    "A SQL query walks into a bar, walks up to two tables and asks, 'Can I join you?'",
    "There are 10 types of people in this world: those who understand binary and those who don't.",
    "How many programmers does it take to change a light bulb? None, that's a hardware problem.",
    "Why did the programmer quit his job? Because he didn't get arrays.",
    "I would tell you a UDP joke, but you might not get it.",
    "Debugging is like being the detective in a crime movie where you are also the murderer.",
    "A programmer's partner says: 'Go to the store and get a loaf of bread. If they have eggs, get a dozen.' The programmer comes home with twelve loaves.",
    "To understand recursion you must first understand recursion.",
];

const EN_SPECIFIC: &[&str] = &[
    "Chuck Norris doesn't use web standards as the web will conform to him.",
    "Chuck Norris can write infinite recursion functions and have them return.",
    "Chuck Norris's keyboard doesn't have a Ctrl key because nothing controls Chuck Norris.",
    "Chuck Norris can unit test entire applications with a single assert.",
    "When Chuck Norris throws exceptions, it's across the room.",
    "Chuck Norris doesn't need garbage collection because he doesn't call .Dispose(), he calls .DropKick().",
    "Chuck Norris can compile syntax errors.",
    "All arrays Chuck Norris declares are of infinite size, because Chuck Norris knows no bounds.",
];

const DE_NEUTRAL: &[&str] = &[
    "Warum verwechseln Programmierer immer Halloween mit Weihnachten? Weil OCT 31 == DEC 25.",
    "Ein Informatiker schiebt einen Kinderwagen durch den Park. Kommt ein älteres Ehepaar: 'Junge oder Mädchen?' Informatiker: 'Richtig!'",
    "Es gibt 10 Arten von Menschen: die, die Binärzahlen verstehen, und die, die es nicht tun.",
    "Wie viele Programmierer braucht man, um eine Glühbirne zu wechseln? Keinen, das ist ein Hardware-Problem.",
    "Treffen sich zwei Bytes. Fragt das eine: 'Geht es dir gut?' Sagt das andere: 'Nein, ich habe einen Bitfehler.'",
    "Ein SQL-Statement geht in eine Bar, sieht zwei Tische und fragt: 'Darf ich mich joinen?'",
];

const ES_NEUTRAL: &[&str] = &[
    "¿Por qué los programadores confunden Halloween con Navidad? Porque OCT 31 == DEC 25.",
    "Hay 10 tipos de personas: las que entienden binario y las que no.",
    "¿Cuántos programadores hacen falta para cambiar una bombilla? Ninguno, es un problema de hardware.",
    "Una consulta SQL entra en un bar, se acerca a dos mesas y pregunta: '¿Puedo unirme?'",
    "Mi código no tiene bugs, solo funcionalidades no documentadas.",
    "Para entender la recursividad primero hay que entender la recursividad.",
];

const ES_SPECIFIC: &[&str] = &[
    "Chuck Norris no usa estándares web, la web se adapta a él.",
    "Chuck Norris puede escribir funciones recursivas infinitas y hacer que terminen.",
    "El teclado de Chuck Norris no tiene tecla Ctrl porque nada controla a Chuck Norris.",
    "Chuck Norris puede compilar errores de sintaxis.",
    "Cuando Chuck Norris lanza una excepción, la lanza hasta el otro lado de la habitación.",
];
