use super::*;
use crate::layout::table::{Cell, Column, Table, TableStyle};

/// One pixel per millimetre with a printable height of exactly 1000 px.
fn geometry() -> PageGeometry {
    PageGeometry {
        height_mm: 1049.0,
        ..PageGeometry::a4(1.0)
    }
}

fn has_ink(canvas: &Canvas, y0: i32, y1: i32) -> bool {
    (y0..y1).any(|y| (0..canvas.width() as i32).any(|x| canvas.pixel(x, y) != Some(Color::WHITE)))
}

#[test]
fn geometry_defaults_to_a4() {
    let g = PageGeometry::default();
    assert_eq!(g.width_mm, 210.0);
    assert_eq!(g.width_px(), 735);
    assert_eq!(g.height_px(), 1040);
    assert_eq!(g.content_width(), 190.0 * 3.5);
    let g = geometry();
    assert_eq!(g.content_top(), 24.0);
    assert_eq!(g.break_y(), 1024.0);
    assert_eq!(g.printable_height(), 1000.0);
}

#[test]
fn content_of_two_and_a_half_pages_breaks_into_three() {
    let mut engine = TextEngine::builtin_only();
    let mut flow = PageFlow::new(&mut engine, "Guide", DocumentStyle::default(), geometry());
    flow.cover("Guide", "Subtitle", "February 2026").unwrap();
    assert_eq!(flow.state(), FlowState::Cover);
    for _ in 0..12 {
        flow.emit(&Block::Spacer(200.0)).unwrap();
    }
    assert_eq!(flow.state(), FlowState::Content);
    let doc = flow.finish().unwrap();

    assert_eq!(doc.page_count(), 4);
    assert_eq!(doc.content_pages(), 3);
    assert_eq!(doc.stats.page_breaks, 2);
    assert_eq!(doc.stats.blocks, 12);
    assert_eq!(
        doc.page_info.iter().map(|p| p.blocks).collect::<Vec<_>>(),
        vec![0, 5, 5, 2]
    );
    assert_eq!(
        doc.page_info[0],
        PageInfo {
            kind: PageKind::Cover,
            header: false,
            footer: false,
            blocks: 0,
        }
    );
    for info in &doc.page_info[1..] {
        assert_eq!(info.kind, PageKind::Content);
        assert!(info.header && info.footer);
    }
}

#[test]
fn cover_has_no_header_or_footer_band() {
    let mut engine = TextEngine::builtin_only();
    let mut flow = PageFlow::new(&mut engine, "Guide", DocumentStyle::default(), geometry());
    flow.cover("Guide", "Subtitle", "February 2026").unwrap();
    flow.emit(&Block::paragraph("Body.")).unwrap();
    let doc = flow.finish().unwrap();

    let footer_top = 1049 - 15;
    let cover = &doc.pages[0];
    assert_eq!(cover.pixel(5, 0), Some(DocumentStyle::default().cover_band));
    assert!(!has_ink(cover, 130, 1049));
    let content = &doc.pages[1];
    assert!(has_ink(content, 10, 19));
    assert!(has_ink(content, footer_top, 1049));
}

#[test]
fn footers_number_pages_from_the_cover() {
    let mut engine = TextEngine::builtin_only();
    let style = DocumentStyle::default();
    let mut flow = PageFlow::new(&mut engine, "Guide", style.clone(), geometry());
    flow.cover("Guide", "", "").unwrap();
    for _ in 0..6 {
        flow.emit(&Block::Spacer(200.0)).unwrap();
    }
    let doc = flow.finish().unwrap();
    assert_eq!(doc.page_count(), 3);

    // Render the expected footer for page 3 on its own and compare the band.
    let mut engine = TextEngine::builtin_only();
    let mut reference = PageFlow::new(&mut engine, "Guide", style, geometry());
    let mut expected = Canvas::new(210, 1049, Color::WHITE);
    reference
        .footer_list(3)
        .paint(&mut expected, reference.engine, Vec2::ZERO)
        .unwrap();
    let band = |c: &Canvas| {
        (1034..1049)
            .flat_map(|y| (0..210).map(move |x| (x, y)))
            .map(|(x, y)| c.pixel(x, y))
            .collect::<Vec<_>>()
    };
    assert_eq!(band(&doc.pages[2]), band(&expected));
    assert_ne!(band(&doc.pages[1]), band(&expected));
}

#[test]
fn oversized_table_is_truncated_on_one_page() {
    let mut engine = TextEngine::builtin_only();
    let mut table = Table::new(vec![Column::new("Network", 100.0)], TableStyle::default());
    for i in 0..100 {
        table = table.row(vec![Cell::text(format!("chain {i}"))]);
    }
    let mut flow = PageFlow::new(&mut engine, "Paper", DocumentStyle::default(), geometry());
    flow.cover("Paper", "", "").unwrap();
    flow.emit(&Block::Table(table)).unwrap();
    let doc = flow.finish().unwrap();
    assert_eq!(doc.content_pages(), 1);
    assert_eq!(doc.stats.truncated_rows, 70);
    assert_eq!(doc.stats.overflowing_blocks, 0);
}

#[test]
fn a_block_taller_than_a_page_does_not_break_forever() {
    let mut engine = TextEngine::builtin_only();
    let mut flow = PageFlow::new(&mut engine, "Doc", DocumentStyle::default(), geometry());
    flow.emit(&Block::Spacer(1500.0)).unwrap();
    flow.emit(&Block::Spacer(10.0)).unwrap();
    let doc = flow.finish().unwrap();
    assert_eq!(doc.page_count(), 2);
    assert_eq!(doc.stats.overflowing_blocks, 1);
    assert_eq!(doc.stats.page_breaks, 1);
}

#[test]
fn finished_flow_rejects_more_work() {
    let mut engine = TextEngine::builtin_only();
    let mut flow = PageFlow::new(&mut engine, "Doc", DocumentStyle::default(), geometry());
    flow.emit(&Block::heading("One")).unwrap();
    assert!(flow.cover("late", "", "").is_err());
    let doc = flow.finish().unwrap();
    assert_eq!(doc.page_count(), 1);
    assert_eq!(flow.state(), FlowState::Finalized);

    let err = flow.emit(&Block::paragraph("too late")).unwrap_err();
    assert!(matches!(err, BrandpressError::Layout(_)));
    assert!(flow.finish().is_err());
    assert!(flow.cover("again", "", "").is_err());
}
