use meeplestats::score_sheet::{
    compute_totals, EntryValue, FieldUpdate, ParticipantScoreMatrix, ScoreSheetBuilder,
    ScoreSheetDefinition, ScoreSheetSession, ValueType,
};
use serde_json::json;

fn seven_wonders_sheet() -> ScoreSheetDefinition {
    let mut builder = ScoreSheetBuilder::new("68448", "7 Wonders");
    for (label, weight) in [("Military", "1"), ("Coins", "0.333"), ("Wonder", "1")] {
        let index = builder.add_field();
        builder.update_field(index, FieldUpdate::Label(label.to_string()));
        builder.update_field(index, FieldUpdate::weight_from_input(weight));
    }
    let notes = builder.add_field();
    builder.update_field(notes, FieldUpdate::Label("Notes".to_string()));
    builder.update_field(notes, FieldUpdate::value_type_from_input("text"));
    builder.build()
}

#[test]
fn authored_sheet_drives_a_live_session() {
    let definition = seven_wonders_sheet();
    assert_eq!(definition.fields[3].value_type, ValueType::Text);

    let mut session = ScoreSheetSession::new(definition);
    session.add_participant("Alice");
    session.add_participant("Bob");
    session.add_participant("Alice");

    session.set_value("Alice", 0, "6");
    session.set_value("Alice", 1, "9");
    session.set_value("Alice", 2, "10");
    session.set_value("Alice", 3, "built the Colossus");
    session.set_value("Bob", 0, "-2");
    session.set_value("Bob", 2, "oops");

    let totals = session.recompute_all().clone();
    assert_eq!(totals.len(), 2);
    assert!((totals["Alice"] - (6.0 + 9.0 * 0.333 + 10.0)).abs() < 1e-9);
    assert_eq!(totals["Bob"], -2.0);
}

#[test]
fn uploaded_sheet_json_totals_match_expected_scenario() {
    let definition: ScoreSheetDefinition = serde_json::from_value(json!({
        "game_id": "1",
        "game_name": "Scenario",
        "game_description": "",
        "fields": [
            {"label": "VP", "type": "number", "weight": 2, "rule": ""},
            {"label": "Notes", "type": "text", "weight": 1, "rule": ""}
        ],
        "calculation": {"type": "sum", "formula": null}
    }))
    .unwrap();

    let matrix: ParticipantScoreMatrix = vec![(
        "Alice",
        serde_json::from_value::<Vec<EntryValue>>(json!([5, "ignored"])).unwrap(),
    )]
    .into_iter()
    .collect();

    assert_eq!(compute_totals(&definition, &matrix)["Alice"], 10.0);
}

#[test]
fn exported_sheet_can_be_loaded_back_for_scoring() {
    let mut builder = ScoreSheetBuilder::new("13", "Catan");
    let vp = builder.add_field();
    builder.update_field(vp, FieldUpdate::Label("VP".into()));

    let exported = builder.to_json_pretty().unwrap();
    let loaded: ScoreSheetDefinition = serde_json::from_str(&exported).unwrap();
    assert_eq!(loaded, builder.build());

    let mut session = ScoreSheetSession::new(loaded);
    session.add_participant("Cara");
    session.set_value("Cara", 0, "10");
    assert_eq!(session.recompute_all()["Cara"], 10.0);
}

#[test]
fn null_slots_in_entered_scores_count_as_zero() {
    let definition = ScoreSheetDefinition::with_fields(seven_wonders_sheet().fields);

    let rows: Vec<(String, Vec<Option<EntryValue>>)> = serde_json::from_value(json!([
        ["Alice", [4, null, "3", null]],
        ["Bob", [null, null, null, null]]
    ]))
    .unwrap();
    let matrix = ParticipantScoreMatrix::from_entered_slots(rows);

    assert_eq!(matrix.row("Alice").unwrap().values[1], EntryValue::default());
    let totals = compute_totals(&definition, &matrix);
    assert_eq!(totals["Alice"], 7.0);
    assert_eq!(totals["Bob"], 0.0);
}
