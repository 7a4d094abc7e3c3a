use log::trace;

use crate::fsa::{Description, Edge, Fsa, StateIndex};
use crate::{TranslateError, TranslateResult};

/// Check a raw description and resolve it into a validated [`Fsa`].
///
/// Checks run in a fixed order and stop at the first violation: extra input
/// content, disjoint states, then one pass over the transitions that
/// interleaves the nondeterminism and unknown-symbol checks, then unknown
/// state references, and last a missing initial state. The order is part of
/// the output contract: an input breaking several rules always reports the
/// same error.
pub fn validate(desc: &Description) -> TranslateResult<Fsa> {
    if desc.extra_content {
        return Err(TranslateError::MalformedInput);
    }

    check_connected(desc)?;
    check_transitions(desc)?;
    resolve(desc)
}

/// Directed reachability over the declared states.
///
/// The traversal is rooted at the first state in input order, not at the
/// declared initial state; the initial state plays no role here. Transitions
/// naming undeclared states mark nothing and are rejected later.
fn check_connected(desc: &Description) -> TranslateResult<()> {
    let n = desc.states.len();
    let mut visited = vec![false; n];
    let mut stack: Vec<StateIndex> = Vec::new();

    if n > 0 {
        visited[0] = true;
        stack.push(0);
    }

    while let Some(current) = stack.pop() {
        for transition in &desc.transitions {
            if transition.from != desc.states[current] {
                continue;
            }
            for (index, state) in desc.states.iter().enumerate() {
                if *state == transition.to && !visited[index] {
                    visited[index] = true;
                    stack.push(index);
                }
            }
        }
    }

    let reached = visited.iter().filter(|&&seen| seen).count();
    trace!("reached {} of {} states from the first listed state", reached, n);

    if reached == n {
        Ok(())
    } else {
        Err(TranslateError::Disjoint)
    }
}

/// One pass over the transitions covering two checks per entry: the entry is
/// first compared against every later one for a shared (from, label) pair,
/// then its label is looked up in the alphabet. A nondeterministic pair
/// therefore outranks an unknown symbol on a later transition and loses to
/// one on an earlier transition.
fn check_transitions(desc: &Description) -> TranslateResult<()> {
    for (index, transition) in desc.transitions.iter().enumerate() {
        for later in &desc.transitions[index + 1..] {
            if transition.from == later.from && transition.label == later.label {
                return Err(TranslateError::Nondeterministic);
            }
        }
        if !desc.has_symbol(&transition.label) {
            return Err(TranslateError::UnknownSymbol(transition.label.clone()));
        }
    }
    Ok(())
}

/// Resolve every state reference to its index, rejecting undeclared ones.
///
/// Transition endpoints are checked in input order, `from` before `to` per
/// transition, then the accepting set, then the initial state. An empty
/// initial field is the last error that can surface.
fn resolve(desc: &Description) -> TranslateResult<Fsa> {
    let mut edges = Vec::with_capacity(desc.transitions.len());
    for transition in &desc.transitions {
        let from = resolve_state(desc, &transition.from)?;
        let to = resolve_state(desc, &transition.to)?;
        edges.push(Edge {
            from,
            to,
            label: transition.label.clone(),
        });
    }

    let mut accepting = Vec::with_capacity(desc.accepting.len());
    for label in &desc.accepting {
        accepting.push(resolve_state(desc, label)?);
    }

    let initial = match &desc.initial {
        Some(label) => resolve_state(desc, label)?,
        None => return Err(TranslateError::NoInitialState),
    };

    Ok(Fsa {
        states: desc.states.clone(),
        initial,
        accepting,
        edges,
    })
}

fn resolve_state(desc: &Description, label: &str) -> TranslateResult<StateIndex> {
    desc.state_index(label)
        .ok_or_else(|| TranslateError::UnknownState(label.to_string()))
}
