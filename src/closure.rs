//! Kleene's transitive-closure construction.
//!
//! After elimination layer k, `table[i][j]` holds a regular expression for
//! every path from state i to state j whose intermediate states all have
//! index at most k. Layer -1 is the direct-edge table; each later layer is
//! derived cell by cell as
//!
//! ```text
//! (prev[i][k])(prev[k][k])*(prev[k][j])|(prev[i][j])
//! ```
//!
//! Every operand stays parenthesized even when trivial and nothing is
//! simplified afterwards, so equal automata always produce the identical
//! string.

use log::{debug, trace};

use crate::fsa::Fsa;

/// Literal for the empty-string language member
pub const EPSILON: &str = "eps";

/// Literal for the empty language
pub const EMPTY: &str = "{}";

/// Compute the regular expression accepted by a validated automaton.
///
/// The answer is the union, in input order, over the accepting states of
/// the final table row for the initial state; with no accepting states it
/// is the empty-language literal. Total function, no failure modes.
pub fn to_regexp(fsa: &Fsa) -> String {
    let n = fsa.states.len();
    let mut table = direct_edge_table(fsa);

    for k in 0..n {
        let mut next = vec![vec![String::new(); n]; n];
        for i in 0..n {
            for j in 0..n {
                next[i][j] = format!(
                    "({})({})*({})|({})",
                    table[i][k], table[k][k], table[k][j], table[i][j]
                );
            }
        }
        table = next;
        trace!("finished elimination layer {} of {}", k + 1, n);
    }

    let mut answer = String::new();
    for &accepting in &fsa.accepting {
        if !answer.is_empty() {
            answer.push('|');
        }
        answer.push_str(&table[fsa.initial][accepting]);
    }
    if answer.is_empty() {
        answer.push_str(EMPTY);
    }

    debug!(
        "translated {} states and {} edges into {} characters",
        n,
        fsa.edges.len(),
        answer.len()
    );
    answer
}

/// Build the layer -1 table from the direct edges.
///
/// Parallel edges between the same pair of states union in input order.
/// Every diagonal cell ends with the epsilon alternative; off-diagonal cells
/// with no edge hold the empty-language literal.
fn direct_edge_table(fsa: &Fsa) -> Vec<Vec<String>> {
    let n = fsa.states.len();
    let mut table = vec![vec![String::new(); n]; n];

    for edge in &fsa.edges {
        let cell = &mut table[edge.from][edge.to];
        if !cell.is_empty() {
            cell.push('|');
        }
        cell.push_str(&edge.label);
    }

    for i in 0..n {
        for j in 0..n {
            let cell = &mut table[i][j];
            if i == j {
                if !cell.is_empty() {
                    cell.push('|');
                }
                cell.push_str(EPSILON);
            } else if cell.is_empty() {
                cell.push_str(EMPTY);
            }
        }
    }

    table
}
