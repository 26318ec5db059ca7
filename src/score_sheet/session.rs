use std::collections::HashMap;

use tracing::debug;

use super::calculator::compute_totals;
use super::models::{EntryValue, ParticipantScoreMatrix, ScoreSheetDefinition, ValueType};

/// A live scoring sheet for one table: the definition, what has been typed in so
/// far, and the totals from the last explicit recompute.
///
/// Edits never fail. Bad numbers become 0, duplicate names are ignored, and edits
/// aimed at rows or columns that don't exist are dropped.
#[derive(Debug, Clone)]
pub struct ScoreSheetSession {
    definition: ScoreSheetDefinition,
    matrix: ParticipantScoreMatrix,
    totals: HashMap<String, f64>,
}

impl ScoreSheetSession {
    pub fn new(definition: ScoreSheetDefinition) -> Self {
        Self {
            definition,
            matrix: ParticipantScoreMatrix::new(),
            totals: HashMap::new(),
        }
    }

    pub fn definition(&self) -> &ScoreSheetDefinition {
        &self.definition
    }

    pub fn matrix(&self) -> &ParticipantScoreMatrix {
        &self.matrix
    }

    /// Adds an empty row. Returns `false` for blank or already-present names.
    pub fn add_participant(&mut self, name: &str) -> bool {
        let name = normalize(name);
        if name.is_empty() {
            return false;
        }

        let blank_row = vec![EntryValue::default(); self.definition.fields.len()];
        let added = self.matrix.insert_row(name, blank_row);
        if !added {
            debug!(participant = %name, "Participant already on the sheet");
        }
        added
    }

    pub fn remove_participant(&mut self, name: &str) -> bool {
        let name = normalize(name);
        self.totals.remove(name);
        self.matrix.remove_row(name).is_some()
    }

    pub fn set_value(&mut self, participant: &str, field_index: usize, raw_value: &str) {
        let participant = normalize(participant);
        let Some(field) = self.definition.fields.get(field_index) else {
            debug!(participant, field_index, "Ignoring value for unknown field");
            return;
        };
        let value = match field.value_type {
            ValueType::Numeric => EntryValue::parse_numeric(raw_value),
            ValueType::Text => EntryValue::Text(raw_value.to_string()),
        };

        let field_count = self.definition.fields.len();
        let Some(row) = self.matrix.row_mut(participant) else {
            debug!(participant, "Ignoring value for participant not on the sheet");
            return;
        };
        if row.values.len() < field_count {
            row.values.resize(field_count, EntryValue::default());
        }
        row.values[field_index] = value;
    }

    /// Recalculate every total from the current entries.
    pub fn recompute_all(&mut self) -> &HashMap<String, f64> {
        self.totals = compute_totals(&self.definition, &self.matrix);
        debug!(participants = self.totals.len(), "Recomputed score sheet totals");
        &self.totals
    }

    /// Totals as of the last [`recompute_all`](Self::recompute_all).
    pub fn totals(&self) -> &HashMap<String, f64> {
        &self.totals
    }
}

/// Participant names are matched without surrounding whitespace.
fn normalize(name: &str) -> &str {
    name.trim()
}
