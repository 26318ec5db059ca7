use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
pub enum ValueType {
    #[default]
    #[serde(rename = "number")]
    #[strum(serialize = "number")]
    Numeric,
    #[serde(rename = "text")]
    #[strum(serialize = "text")]
    Text,
}

fn default_weight() -> f64 {
    1.0
}

/// One line of a score sheet. `rule` is shown to players, never evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreField {
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type", default)]
    pub value_type: ValueType,
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default)]
    pub rule: String,
}

impl Default for ScoreField {
    fn default() -> Self {
        Self {
            label: String::new(),
            value_type: ValueType::Numeric,
            weight: default_weight(),
            rule: String::new(),
        }
    }
}

impl ScoreField {
    pub fn numeric(label: impl Into<String>, weight: f64) -> Self {
        Self {
            label: label.into(),
            weight,
            ..Self::default()
        }
    }

    pub fn text(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value_type: ValueType::Text,
            ..Self::default()
        }
    }

    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = rule.into();
        self
    }

    pub fn is_numeric(&self) -> bool {
        self.value_type == ValueType::Numeric
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
pub enum CalculationType {
    #[default]
    #[serde(rename = "sum")]
    #[strum(serialize = "sum")]
    SumOfWeightedValues,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Calculation {
    #[serde(rename = "type", default)]
    pub kind: CalculationType,
    /// Reserved for non-sum calculation types; always null today.
    #[serde(default)]
    pub formula: Option<serde_json::Value>,
}

/// A reusable score sheet for one game, as uploaded by the sheet creator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreSheetDefinition {
    #[serde(default)]
    pub game_id: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub game_description: String,
    #[serde(default)]
    pub fields: Vec<ScoreField>,
    #[serde(default)]
    pub calculation: Calculation,
}

impl ScoreSheetDefinition {
    pub fn with_fields(fields: Vec<ScoreField>) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }
}

/// One entered slot of the sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryValue {
    Number(f64),
    Text(String),
}

impl Default for EntryValue {
    fn default() -> Self {
        EntryValue::Number(0.0)
    }
}

impl EntryValue {
    /// Parse typed input; anything that isn't a finite number becomes 0.
    pub fn parse_numeric(raw: &str) -> Self {
        EntryValue::Number(parse_or_zero(raw))
    }

    pub fn as_number(&self) -> f64 {
        match self {
            EntryValue::Number(n) if n.is_finite() => *n,
            EntryValue::Number(_) => 0.0,
            EntryValue::Text(s) => parse_or_zero(s),
        }
    }
}

pub(crate) fn parse_or_zero(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreRow {
    pub participant: String,
    pub values: Vec<EntryValue>,
}

/// Entered values per participant, kept in the order participants were added.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParticipantScoreMatrix {
    rows: Vec<ScoreRow>,
}

impl ParticipantScoreMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a matrix from entered slots, where a `null` slot counts as 0.
    pub fn from_entered_slots<S: Into<String>>(
        rows: impl IntoIterator<Item = (S, Vec<Option<EntryValue>>)>,
    ) -> Self {
        rows.into_iter()
            .map(|(participant, slots)| {
                let values = slots.into_iter().map(Option::unwrap_or_default).collect();
                (participant, values)
            })
            .collect()
    }

    pub fn contains(&self, participant: &str) -> bool {
        self.rows.iter().any(|r| r.participant == participant)
    }

    /// Returns `false` and leaves the matrix untouched if the name is taken.
    pub fn insert_row(&mut self, participant: impl Into<String>, values: Vec<EntryValue>) -> bool {
        let participant = participant.into();
        if self.contains(&participant) {
            return false;
        }
        self.rows.push(ScoreRow {
            participant,
            values,
        });
        true
    }

    pub fn remove_row(&mut self, participant: &str) -> Option<ScoreRow> {
        let index = self.rows.iter().position(|r| r.participant == participant)?;
        Some(self.rows.remove(index))
    }

    pub fn row(&self, participant: &str) -> Option<&ScoreRow> {
        self.rows.iter().find(|r| r.participant == participant)
    }

    pub fn row_mut(&mut self, participant: &str) -> Option<&mut ScoreRow> {
        self.rows.iter_mut().find(|r| r.participant == participant)
    }

    pub fn rows(&self) -> &[ScoreRow] {
        &self.rows
    }

    pub fn participants(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.participant.as_str())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<EntryValue>)> for ParticipantScoreMatrix {
    fn from_iter<I: IntoIterator<Item = (S, Vec<EntryValue>)>>(iter: I) -> Self {
        let mut matrix = Self::new();
        for (participant, values) in iter {
            matrix.insert_row(participant, values);
        }
        matrix
    }
}
