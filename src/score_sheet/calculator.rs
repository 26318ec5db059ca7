use std::collections::HashMap;

use super::models::{
    CalculationType, EntryValue, ParticipantScoreMatrix, ScoreField, ScoreSheetDefinition,
};

/// Turns one participant's row into a total.
pub trait ScoreCalculator: Send + Sync {
    fn calculate(&self, fields: &[ScoreField], values: &[EntryValue]) -> f64;

    fn calculation_type(&self) -> CalculationType;
}

/// `sum(value_i * weight_i)` over numeric fields. Text fields never count,
/// whatever their weight; empty slots count as 0.
pub struct WeightedSumCalculator;

impl Default for WeightedSumCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl WeightedSumCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl ScoreCalculator for WeightedSumCalculator {
    fn calculate(&self, fields: &[ScoreField], values: &[EntryValue]) -> f64 {
        fields
            .iter()
            .enumerate()
            .filter(|(_, field)| field.is_numeric())
            .map(|(index, field)| {
                let value = values.get(index).map(EntryValue::as_number).unwrap_or_default();
                value * field.weight
            })
            .sum()
    }

    fn calculation_type(&self) -> CalculationType {
        CalculationType::SumOfWeightedValues
    }
}

pub fn calculator_for(kind: CalculationType) -> &'static dyn ScoreCalculator {
    match kind {
        CalculationType::SumOfWeightedValues => &WeightedSumCalculator,
    }
}

/// Totals for every participant in `matrix`. Definitions are taken as-is:
/// negative weights and blank labels are the sheet author's business.
pub fn compute_totals(
    definition: &ScoreSheetDefinition,
    matrix: &ParticipantScoreMatrix,
) -> HashMap<String, f64> {
    let calculator = calculator_for(definition.calculation.kind);
    matrix
        .rows()
        .iter()
        .map(|row| {
            (
                row.participant.clone(),
                calculator.calculate(&definition.fields, &row.values),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sheet(fields: Vec<ScoreField>) -> ScoreSheetDefinition {
        ScoreSheetDefinition::with_fields(fields)
    }

    fn n(value: f64) -> EntryValue {
        EntryValue::Number(value)
    }

    #[test]
    fn text_fields_are_skipped() {
        let definition = sheet(vec![ScoreField::numeric("VP", 2.0), ScoreField::text("Notes")]);
        let matrix: ParticipantScoreMatrix =
            vec![("Alice", vec![n(5.0), EntryValue::Text("ignored".into())])]
                .into_iter()
                .collect();

        let totals = compute_totals(&definition, &matrix);
        assert_eq!(totals["Alice"], 10.0);
    }

    #[test]
    fn numeric_looking_text_in_text_field_is_still_skipped() {
        let mut notes = ScoreField::text("Bonus?");
        notes.weight = 10.0;
        let definition = sheet(vec![notes]);
        let matrix: ParticipantScoreMatrix = vec![("Bo", vec![EntryValue::Text("7".into())])]
            .into_iter()
            .collect();

        assert_eq!(compute_totals(&definition, &matrix)["Bo"], 0.0);
    }

    #[rstest]
    #[case(vec![], 0.0)]
    #[case(vec![n(3.0)], 3.0)]
    #[case(vec![n(3.0), n(4.0)], 3.0 + 4.0 * 2.0)]
    #[case(vec![n(3.0), n(4.0), n(1.0)], 3.0 + 8.0 - 0.5)]
    #[case(vec![n(1.0), n(1.0), n(1.0), n(99.0)], 1.0 + 2.0 - 0.5)]
    fn short_rows_default_to_zero_and_extra_slots_are_ignored(
        #[case] values: Vec<EntryValue>,
        #[case] expected: f64,
    ) {
        let fields = vec![
            ScoreField::numeric("A", 1.0),
            ScoreField::numeric("B", 2.0),
            ScoreField::numeric("C", -0.5),
        ];

        assert_eq!(WeightedSumCalculator::new().calculate(&fields, &values), expected);
    }

    #[test]
    fn totals_do_not_depend_on_row_order() {
        let definition = sheet(vec![
            ScoreField::numeric("Cards", 1.0),
            ScoreField::numeric("Gold", 0.5),
        ]);
        let rows = vec![
            ("Ann", vec![n(4.0), n(10.0)]),
            ("Ben", vec![n(7.0)]),
            ("Cy", vec![n(0.0), n(3.0)]),
        ];

        let forward: ParticipantScoreMatrix = rows.clone().into_iter().collect();
        let backward: ParticipantScoreMatrix = rows.into_iter().rev().collect();

        assert_eq!(
            compute_totals(&definition, &forward),
            compute_totals(&definition, &backward)
        );
    }

    #[test]
    fn empty_matrix_has_no_totals() {
        let definition = sheet(vec![ScoreField::numeric("VP", 1.0)]);
        assert!(compute_totals(&definition, &ParticipantScoreMatrix::new()).is_empty());
    }

    #[test]
    fn sum_calculation_resolves_to_weighted_sum() {
        let calculator = calculator_for(CalculationType::SumOfWeightedValues);
        assert_eq!(
            calculator.calculation_type(),
            CalculationType::SumOfWeightedValues
        );
    }
}
