use super::*;
use crate::layout::flow::PageKind;
use crate::layout::table::{Cell, Column, Table, TableStyle};

fn geometry() -> PageGeometry {
    PageGeometry::a4(2.0)
}

#[test]
fn names_and_titles() {
    assert_eq!(
        DocumentKind::ALL.map(DocumentKind::file_name),
        [
            "AgentRails-Platform-Overview.pdf",
            "AgentRails-Enterprise-Architecture-Guide.pdf",
            "AgentRails-x402-Protocol-Whitepaper.pdf",
        ]
    );
    assert_eq!(DocumentKind::ProtocolWhitepaper.title(), "x402 Protocol Whitepaper");
}

#[test]
fn label_is_split_at_the_double_dash() {
    assert_eq!(
        lb("Pro -- $49/month. Unlimited transactions."),
        Block::Bullet {
            prefix: Some("Pro".to_string()),
            text: "$49/month. Unlimited transactions.".to_string(),
        }
    );
    assert_eq!(lb("plain bullet"), Block::bullet("plain bullet"));
}

#[test]
fn every_document_starts_with_a_section_heading() {
    for kind in DocumentKind::ALL {
        let blocks = kind.blocks();
        assert!(matches!(blocks.first(), Some(Block::SectionHeading(_))), "{kind:?}");
        assert!(matches!(blocks.last(), Some(Block::InfoBox { .. })), "{kind:?}");
    }
}

#[test]
fn whitepaper_lists_networks_as_labeled_bullets() {
    let blocks = DocumentKind::ProtocolWhitepaper.blocks();
    let at = blocks
        .iter()
        .position(|b| *b == Block::heading("Network Support"))
        .unwrap();
    let labels: Vec<_> = blocks[at + 2..at + 7]
        .iter()
        .map(|b| match b {
            Block::Bullet {
                prefix: Some(p), ..
            } => p.as_str(),
            other => panic!("expected a labeled bullet, got {other:?}"),
        })
        .collect();
    assert_eq!(
        labels,
        [
            "Base (eip155:8453)",
            "Base Sepolia (eip155:84532)",
            "Ethereum (eip155:1)",
            "Ethereum Sepolia (eip155:11155111)",
            "Arc (eip155:5042002)",
        ]
    );
    assert!(!blocks.iter().any(|b| matches!(b, Block::Table(_))));
}

/// Five-row table sized to the content width, styled like the document body.
fn networks_table(g: &PageGeometry) -> Table {
    let style = DocumentStyle::default();
    let table_style = TableStyle {
        header_color: style.accent,
        text_color: style.body,
        rule_color: style.panel_border,
        header_fill: Some(style.panel),
        header_size: g.pt(9.0) as f32,
        row_size: g.pt(9.0) as f32,
        header_height: g.px(8.0),
        row_height: g.px(6.5),
        rule_offset: g.px(6.5),
        cell_pad_y: g.px(1.5),
        ..TableStyle::default()
    };
    let columns = vec![
        Column::new("Network", g.px(50.0)),
        Column::new("CAIP-2 ID", g.px(40.0)),
        Column::new("Notes", g.content_width() - g.px(90.0)),
    ];
    [
        ("Base", "eip155:8453"),
        ("Base Sepolia", "eip155:84532"),
        ("Ethereum", "eip155:1"),
        ("Ethereum Sepolia", "eip155:11155111"),
        ("Arc", "eip155:5042002"),
    ]
    .into_iter()
    .fold(Table::new(columns, table_style), |t, (name, id)| {
        t.row(vec![Cell::colored(name, style.dark).bold(), Cell::text(id), Cell::text("")])
    })
}

#[test]
fn table_block_flows_between_document_paragraphs() {
    let g = geometry();
    let table = networks_table(&g);
    assert!((table.width() - g.content_width()).abs() < 1e-9);

    let mut engine = TextEngine::builtin_only();
    let mut flow = PageFlow::new(&mut engine, "Tables", DocumentStyle::default(), g);
    flow.cover("Tables", "", COVER_DATE).unwrap();
    flow.emit(&Block::heading("Network Support")).unwrap();
    let before = flow.cursor();
    flow.emit(&Block::Table(table)).unwrap();
    assert!(flow.cursor() > before);
    flow.emit(&Block::paragraph("after the table")).unwrap();
    let doc = flow.finish().unwrap();
    assert_eq!(doc.page_count(), 2);
    assert_eq!(doc.stats.truncated_rows, 0);
    assert_eq!(doc.stats.blocks, 3);
}

#[test]
fn documents_render_cover_then_content_pages() {
    let mut engine = TextEngine::builtin_only();
    let g = geometry();
    for kind in DocumentKind::ALL {
        let doc = kind.render(&mut engine, &g).unwrap();
        assert_eq!(doc.title, kind.title());
        assert!(doc.page_count() >= 2, "{kind:?}");
        assert_eq!(doc.page_info[0].kind, PageKind::Cover);
        assert_eq!(doc.content_pages(), doc.page_count() - 1);
        assert_eq!(doc.stats.blocks, kind.blocks().len());
        assert_eq!(doc.stats.truncated_rows, 0, "{kind:?}");
        assert_eq!(doc.stats.overflowing_blocks, 0, "{kind:?}");
        for page in &doc.pages {
            assert_eq!((page.width(), page.height()), (g.width_px(), g.height_px()));
        }
    }
}

#[test]
fn rendering_is_deterministic() {
    let g = geometry();
    let mut engine = TextEngine::builtin_only();
    let first = DocumentKind::PlatformOverview.render(&mut engine, &g).unwrap();
    let second = DocumentKind::PlatformOverview.render(&mut engine, &g).unwrap();
    assert_eq!(first, second);
}
