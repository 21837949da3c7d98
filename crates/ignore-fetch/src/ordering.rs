use std::collections::HashMap;

use crate::contents::NamedContents;
use crate::errors::{FailedFiles, UnknownName};
use crate::pool::Outcome;

/// The position each requested path held in the caller's input.
///
/// Duplicate paths keep their first position.
#[derive(Debug)]
pub struct NamesOrdering(HashMap<String, usize>);

impl NamesOrdering {
    pub fn new(names: &[String]) -> Self {
        let mut positions = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            positions.entry(name.clone()).or_insert(i);
        }
        Self(positions)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.get(name).copied()
    }
}

/// Splits completion-ordered outcomes into successes restored to request
/// order and failures kept in arrival order.
///
/// A success whose name has no recorded position means the pipeline lost
/// track of a request and is reported as [`UnknownName`] rather than
/// dropped.
pub fn collect_outcomes(
    ordering: &NamesOrdering,
    outcomes: Vec<Outcome>,
) -> Result<(Vec<NamedContents>, FailedFiles), UnknownName> {
    let mut keyed: Vec<(usize, NamedContents)> = Vec::with_capacity(outcomes.len());
    let mut failures = FailedFiles::default();
    for outcome in outcomes {
        match outcome {
            Ok(contents) => match ordering.position(&contents.name) {
                Some(position) => keyed.push((position, contents)),
                None => return Err(UnknownName(contents.name)),
            },
            Err(failed) => failures.push(failed),
        }
    }
    keyed.sort_by_key(|(position, _)| *position);
    let contents = keyed.into_iter().map(|(_, contents)| contents).collect();
    Ok((contents, failures))
}
