use super::models::{parse_or_zero, Calculation, ScoreField, ScoreSheetDefinition, ValueType};

/// A single edit to one field of a sheet being authored.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Label(String),
    ValueType(ValueType),
    Weight(f64),
    Rule(String),
}

impl FieldUpdate {
    /// Weight typed into the editor; unparseable input becomes 0.
    pub fn weight_from_input(raw: &str) -> Self {
        FieldUpdate::Weight(parse_or_zero(raw))
    }

    /// Type picked in the editor; anything unrecognised means a number field.
    pub fn value_type_from_input(raw: &str) -> Self {
        FieldUpdate::ValueType(raw.trim().parse().unwrap_or_default())
    }
}

/// Authoring state for a new score sheet. Nothing is validated here; the sheet
/// is used exactly as written.
#[derive(Debug, Clone, Default)]
pub struct ScoreSheetBuilder {
    game_id: String,
    game_name: String,
    game_description: String,
    fields: Vec<ScoreField>,
}

impl ScoreSheetBuilder {
    pub fn new(game_id: impl Into<String>, game_name: impl Into<String>) -> Self {
        Self {
            game_id: game_id.into(),
            game_name: game_name.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.game_description = description.into();
        self
    }

    /// Appends a blank number field with weight 1 and returns its index.
    pub fn add_field(&mut self) -> usize {
        self.fields.push(ScoreField::default());
        self.fields.len() - 1
    }

    pub fn remove_field(&mut self, index: usize) -> Option<ScoreField> {
        (index < self.fields.len()).then(|| self.fields.remove(index))
    }

    /// Returns `false` when `index` is out of range.
    pub fn update_field(&mut self, index: usize, update: FieldUpdate) -> bool {
        let Some(field) = self.fields.get_mut(index) else {
            return false;
        };
        match update {
            FieldUpdate::Label(label) => field.label = label,
            FieldUpdate::ValueType(value_type) => field.value_type = value_type,
            FieldUpdate::Weight(weight) => field.weight = weight,
            FieldUpdate::Rule(rule) => field.rule = rule,
        }
        true
    }

    pub fn fields(&self) -> &[ScoreField] {
        &self.fields
    }

    /// Download name used for the exported sheet.
    pub fn file_name(&self) -> String {
        format!("{}_score_sheet.json", self.game_name)
    }

    pub fn build(&self) -> ScoreSheetDefinition {
        ScoreSheetDefinition {
            game_id: self.game_id.clone(),
            game_name: self.game_name.clone(),
            game_description: self.game_description.clone(),
            fields: self.fields.clone(),
            calculation: Calculation::default(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.build())
    }
}
