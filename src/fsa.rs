/// Index of a state in the input-ordered state list
pub type StateIndex = usize;

/// A labeled edge between two states, as written in the input
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// Source state label
    pub from: String,
    /// Alphabet symbol consumed by the transition
    pub label: String,
    /// Target state label
    pub to: String,
}

impl Transition {
    /// Create a transition from its three parts
    pub fn new(from: &str, label: &str, to: &str) -> Self {
        Transition {
            from: from.to_string(),
            label: label.to_string(),
            to: to.to_string(),
        }
    }
}

/// A raw FSA description, exactly as parsed from the five input fields.
///
/// Nothing here is checked yet: labels may be undeclared, the automaton may
/// be nondeterministic or disconnected. Validation turns a description into
/// an [`Fsa`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Description {
    /// State labels in input order; input order defines each state's index
    pub states: Vec<String>,
    /// Alphabet symbols in input order
    pub alphabet: Vec<String>,
    /// The declared initial state, if the third field named one
    pub initial: Option<String>,
    /// Accepting state labels in input order
    pub accepting: Vec<String>,
    /// Transitions in input order
    pub transitions: Vec<Transition>,
    /// True when a non-blank line followed the five expected fields
    pub extra_content: bool,
}

impl Description {
    /// Position of a state label in the input-ordered state list
    pub fn state_index(&self, label: &str) -> Option<StateIndex> {
        self.states.iter().position(|state| state == label)
    }

    /// Whether the alphabet declares the given symbol
    pub fn has_symbol(&self, symbol: &str) -> bool {
        self.alphabet.iter().any(|declared| declared == symbol)
    }
}

/// An edge with both endpoints resolved to state indices
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: StateIndex,
    pub to: StateIndex,
    pub label: String,
}

/// A validated automaton with every state reference resolved to its index.
///
/// Only the validator builds these, so an `Fsa` never holds a dangling state
/// index and has at most one edge per (from, label) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Fsa {
    /// State labels in input order
    pub states: Vec<String>,
    /// Index of the initial state
    pub initial: StateIndex,
    /// Indices of the accepting states, in input order
    pub accepting: Vec<StateIndex>,
    /// Edges in input order
    pub edges: Vec<Edge>,
}
