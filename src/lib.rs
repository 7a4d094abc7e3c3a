//! FSA to Regular Expression Translator
//!
//! This library converts a finite-state automaton, described as five
//! bracketed text fields (states, alphabet, initial state, accepting states
//! and transitions), into an equivalent regular expression over the alphabet
//! plus the literals `eps` (empty string) and `{}` (empty language).
//!
//! The pipeline has three stages:
//! - Parsing the five input lines into a raw [`Description`]
//! - Validating the description and resolving its labels into an [`Fsa`]
//! - Running Kleene's transitive-closure construction over the result
//!
//! The emitted expression is deliberately unreduced: every operand stays
//! parenthesized and redundant `eps` and `{}` alternatives are kept, so the
//! output is a reproducible, bit-exact function of the input.

pub mod closure;
pub mod fsa;
pub mod parser;
pub mod validator;

pub use closure::to_regexp;
pub use fsa::{Description, Edge, Fsa, StateIndex, Transition};
pub use parser::parse_description;
pub use validator::validate;

use log::debug;

/// The result of translating an FSA description to a regular expression
pub type TranslateResult<T> = Result<T, TranslateError>;

/// Errors reported for malformed FSA descriptions
#[derive(Debug, Clone, PartialEq)]
pub enum TranslateError {
    /// A non-blank line followed the five expected input fields
    MalformedInput,
    /// A transition endpoint, accepting state or initial state is undeclared
    UnknownState(String),
    /// Some state is unreachable from the first listed state
    Disjoint,
    /// A transition label is missing from the declared alphabet
    UnknownSymbol(String),
    /// The initial-state field is empty
    NoInitialState,
    /// Two transitions leave the same state on the same label
    Nondeterministic,
}

impl std::fmt::Display for TranslateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslateError::MalformedInput => write!(f, "E0: Input file is malformed"),
            TranslateError::UnknownState(state) => {
                write!(f, "E1: A state {} is not in set of states", state)
            }
            TranslateError::Disjoint => write!(f, "E2: Some states are disjoint"),
            TranslateError::UnknownSymbol(symbol) => {
                write!(f, "E3: A transition {} is not represented in the alphabet", symbol)
            }
            TranslateError::NoInitialState => write!(f, "E4: Initial state is not defined"),
            TranslateError::Nondeterministic => write!(f, "E5: FSA is nondeterministic"),
        }
    }
}

impl std::error::Error for TranslateError {}

/// Translate a five-field FSA description into a regular expression.
///
/// Runs the whole pipeline in one call; the first validation failure aborts
/// the translation.
///
/// # Example
///
/// ```
/// use fsa_regexp_translator::translate;
///
/// let input = "[s0,s1]\n[a]\n[s0]\n[s1]\n[s0>a>s1]";
/// let regexp = translate(input).unwrap();
/// assert!(regexp.contains("(a)"));
/// ```
pub fn translate(input: &str) -> TranslateResult<String> {
    let description = parser::parse_description(input);
    debug!(
        "parsed {} states, {} symbols, {} transitions",
        description.states.len(),
        description.alphabet.len(),
        description.transitions.len()
    );
    let fsa = validator::validate(&description)?;
    Ok(closure::to_regexp(&fsa))
}
