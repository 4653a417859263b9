use super::*;

fn measure(block: &Block, available: f64) -> BlockMeasure {
    let mut engine = TextEngine::builtin_only();
    let style = DocumentStyle::default();
    let geometry = PageGeometry::a4(2.0);
    let mut ctx = BlockContext {
        engine: &mut engine,
        style: &style,
        geometry: &geometry,
    };
    block.measure(&mut ctx, available)
}

#[test]
fn labeled_bullet_drops_the_separator() {
    let b = Block::labeled_bullet("Policy Engine \u{2014} spend limits per agent", "Policy Engine");
    assert_eq!(
        b,
        Block::Bullet {
            prefix: Some("Policy Engine".to_string()),
            text: "spend limits per agent".to_string(),
        }
    );
    let b = Block::labeled_bullet("Base - USDC", "Base");
    assert!(matches!(b, Block::Bullet { text, .. } if text == "USDC"));
    let b = Block::labeled_bullet("unrelated text", "Prefix");
    assert!(matches!(b, Block::Bullet { text, .. } if text == "unrelated text"));
}

#[test]
fn fixed_heights_follow_millimetre_spacing() {
    assert_eq!(measure(&Block::heading("Overview"), 1000.0).height, 34.0);
    assert_eq!(measure(&Block::sub_heading("Settlement"), 1000.0).height, 20.0);
    assert_eq!(measure(&Block::Spacer(5.0), 1000.0).height, 10.0);
    assert_eq!(measure(&Block::Spacer(-3.0), 1000.0).height, 0.0);
}

#[test]
fn paragraph_height_tracks_wrapped_lines() {
    let short = measure(&Block::paragraph("Agents pay per request."), 1000.0);
    assert_eq!(short.height, 11.0 + 4.0);
    let long_text = "settle ".repeat(120);
    let long = measure(&Block::paragraph(long_text), 1000.0);
    let Some(DrawOp::Runs { lines, .. }) = long.list.ops().first() else {
        panic!("paragraph records one run op");
    };
    assert!(lines.len() > 1);
    assert_eq!(long.height, lines.len() as f64 * 11.0 + 4.0);
}

#[test]
fn bullets_have_marker_and_indented_text() {
    let m = measure(&Block::labeled_bullet("Base: USDC", "Base:"), 1000.0);
    assert_eq!(m.height, 11.0 + 2.0);
    assert_eq!(m.list.len(), 2);
    let DrawOp::Runs { origin, lines, .. } = &m.list.ops()[1] else {
        panic!("bullet text should be a run op");
    };
    assert_eq!(origin.x, 20.0 + 12.0);
    assert_eq!(lines[0][0].text, "Base: ");
    assert!(lines[0][0].font.as_ref().is_some_and(|f| f.style() == FontStyle::Bold));
}

#[test]
fn info_box_encloses_its_body() {
    let short = measure(&Block::info_box("Note", "One line."), 1000.0);
    let long = measure(&Block::info_box("Note", "word ".repeat(200)), 1000.0);
    assert!(long.height > short.height);
    assert!(matches!(short.list.ops()[0], DrawOp::FillRect { .. }));
    assert!(matches!(short.list.ops()[1], DrawOp::StrokeRect { .. }));
}

#[test]
fn tables_report_truncation() {
    use crate::layout::table::{Cell, Column, TableStyle};
    let mut table = Table::new(vec![Column::new("Network", 100.0)], TableStyle::default());
    for i in 0..10 {
        table = table.row(vec![Cell::text(format!("net {i}"))]);
    }
    let m = measure(&Block::Table(table), 30.0 + 3.0 * 32.0 + 8.0);
    assert_eq!(m.truncated_rows, 7);
    assert_eq!(m.height, 30.0 + 3.0 * 32.0 + 8.0);
}
