use super::*;

const EMERALD: Color = Color::rgb(16, 185, 129);

fn table(rows: usize) -> Table {
    let mut t = Table::new(
        vec![
            Column::new("ID", 120.0),
            Column::new("Agent", 160.0),
            Column::new("Status", 100.0),
        ],
        TableStyle::default(),
    );
    for i in 0..rows {
        t = t.row(vec![
            Cell::text(format!("tx_{i:03}")).bold(),
            Cell::colored("procurement", Color::rgb(99, 102, 241)),
            Cell::badge("settled", EMERALD),
        ]);
    }
    t
}

#[test]
fn width_is_the_sum_of_columns() {
    assert_eq!(table(0).width(), 380.0);
}

#[test]
fn rows_past_the_available_space_are_dropped() {
    let mut engine = TextEngine::builtin_only();
    let t = table(10);
    let laid = t.layout(&mut engine, Point::new(0.0, 0.0), 30.0 + 32.0 * 4.0 + 10.0);
    assert_eq!(laid.rows_drawn, 4);
    assert_eq!(laid.truncated_rows, 6);
    assert_eq!(laid.height, 30.0 + 4.0 * 32.0);
}

#[test]
fn unbounded_space_draws_every_row() {
    let mut engine = TextEngine::builtin_only();
    let laid = table(7).layout(&mut engine, Point::new(5.0, 5.0), f64::INFINITY);
    assert_eq!(laid.rows_drawn, 7);
    assert_eq!(laid.truncated_rows, 0);
}

#[test]
fn header_is_kept_when_no_row_fits() {
    let mut engine = TextEngine::builtin_only();
    for available in [0.0, 40.0, -5.0, f64::NAN] {
        let laid = table(3).layout(&mut engine, Point::new(0.0, 0.0), available);
        assert_eq!(laid.rows_drawn, 0);
        assert_eq!(laid.truncated_rows, 3);
        assert_eq!(laid.height, 30.0);
        // three titles and the rule
        assert_eq!(laid.list.len(), 4);
    }
}

#[test]
fn badges_sit_under_their_text() {
    let mut engine = TextEngine::builtin_only();
    let laid = table(1).layout(&mut engine, Point::new(0.0, 0.0), 200.0);
    let pill = laid
        .list
        .ops()
        .iter()
        .position(|op| matches!(op, DrawOp::FillRoundedRect { .. }))
        .unwrap();
    match &laid.list.ops()[pill + 1] {
        DrawOp::Runs { origin, lines, .. } => {
            assert_eq!(origin.x, 280.0 + 8.0);
            assert_eq!(lines[0][0].text, "settled");
            assert_eq!(lines[0][0].color, EMERALD);
        }
        other => panic!("expected badge text, got {other:?}"),
    }
}

#[test]
fn tint_blends_over_white() {
    assert_eq!(tint(EMERALD, 0), Color::WHITE);
    assert_eq!(tint(EMERALD, 255), EMERALD);
    let t = tint(Color::BLACK, 30);
    assert!(t.r > 200 && t.r < 255);
}
