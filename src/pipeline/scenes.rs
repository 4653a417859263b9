use crate::foundation::core::{Color, Point, Vec2};
use crate::foundation::error::BrandpressResult;
use crate::layout::boxed::{BoxSection, BoxStyle, commit_box, measure_box};
use crate::layout::table::{Cell, Column, Table, TableStyle};
use crate::paint::canvas::Canvas;
use crate::paint::gradient::{GradientDirection, gradient_canvas};
use crate::pipeline::brand::{Stage, browser_chrome, card, code_window, rect, terminal_icon};
use crate::pipeline::palette::*;
use crate::text::engine::TextEngine;
use crate::text::fonts::FontStyle::{Bold, Mono, Regular};
use crate::text::runs::{CodeLine, TextRun, draw_runs};
use crate::text::wrap::wrap_text;

pub const SCENE_WIDTH: u32 = 1280;
pub const SCENE_HEIGHT: u32 = 720;

const W: i32 = SCENE_WIDTH as i32;
const H: i32 = SCENE_HEIGHT as i32;

/// The fixed set of landscape images, in publication order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scene {
    /// Sandbox API explorer in a browser window.
    Swagger,
    /// SDK integration code sample.
    Sdk,
    /// Enterprise payments dashboard.
    Dashboard,
    /// Finance copilot conversation in a chat client.
    Copilot,
    /// Four-step payment flow diagram with server and agent code.
    PaymentFlow,
    /// Video cover frame.
    Thumbnail,
}

impl Scene {
    pub const ALL: [Scene; 6] = [
        Scene::Swagger,
        Scene::Sdk,
        Scene::Dashboard,
        Scene::Copilot,
        Scene::PaymentFlow,
        Scene::Thumbnail,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Scene::Swagger => "screenshot-1-swagger.png",
            Scene::Sdk => "screenshot-2-sdk.png",
            Scene::Dashboard => "screenshot-3-dashboard.png",
            Scene::Copilot => "screenshot-4-copilot.png",
            Scene::PaymentFlow => "screenshot-5-flow.png",
            Scene::Thumbnail => "video-thumbnail.png",
        }
    }

    #[tracing::instrument(level = "debug", skip(engine))]
    pub fn render(self, engine: &mut TextEngine) -> BrandpressResult<Canvas> {
        match self {
            Scene::Swagger => swagger(engine),
            Scene::Sdk => sdk(engine),
            Scene::Dashboard => dashboard(engine),
            Scene::Copilot => copilot(engine),
            Scene::PaymentFlow => payment_flow(engine),
            Scene::Thumbnail => thumbnail(engine),
        }
    }
}

/// One code line of `(text, colour)` tokens.
fn tokens(parts: &[(&str, Color)]) -> CodeLine {
    parts.iter().map(|(t, c)| TextRun::new(*t, *c)).collect()
}

fn swagger(engine: &mut TextEngine) -> BrandpressResult<Canvas> {
    let mut st = Stage::new(engine, Canvas::new(SCENE_WIDTH, SCENE_HEIGHT, GRAY_50));
    browser_chrome(&mut st.canvas);
    st.text(140.0, 15.0, "sandbox.agentrails.io/swagger", Regular, 11.0, GRAY_600)?;

    st.canvas.fill_rect(rect(0, 45, W, 105), INDIGO_900);
    st.text(30.0, 58.0, "AgentRails API \u{2014} Sandbox", Bold, 22.0, WHITE)?;
    st.text(
        30.0,
        85.0,
        "x402 Payment Protocol  |  v2.0  |  Base Sepolia Testnet",
        Regular,
        13.0,
        Color::rgb(180, 180, 220),
    )?;

    st.canvas.fill_rect(rect(0, 106, 260, H), WHITE);
    st.canvas.draw_line(
        Point::new(260.0, 106.0),
        Point::new(260.0, f64::from(H)),
        GRAY_200,
        1.0,
    );
    let sections: [(&str, &[&str]); 4] = [
        (
            "x402 Payments",
            &[
                "GET /x402/protected/analysis",
                "GET /x402/protected/data",
                "GET /x402/pricing",
            ],
        ),
        (
            "Facilitator",
            &["POST /facilitator/verify", "POST /facilitator/settle"],
        ),
        ("Analytics", &["GET /x402/payments", "GET /x402/stats"]),
        ("Agents", &["GET /agents", "POST /agents"]),
    ];
    let mut y = 120.0;
    for (section, items) in sections {
        st.text(16.0, y, section, Bold, 13.0, INDIGO_600)?;
        y += 24.0;
        for item in items {
            st.text(24.0, y, item, Regular, 12.0, GRAY_600)?;
            y += 22.0;
        }
        y += 12.0;
    }

    let x = 280;
    let mut y = 120;
    let green = Color::rgb(235, 255, 235);
    endpoint(
        &mut st,
        y,
        ("GET", EMERALD_500),
        "/api/x402/protected/analysis",
        "$0.01 USDC \u{2014} Premium market analysis",
        (green, EMERALD_500),
    )?;
    y += 56;

    st.text(
        f64::from(x),
        f64::from(y),
        "Response (402 Payment Required)",
        Bold,
        14.0,
        GRAY_700,
    )?;
    y += 28;

    let code_h = 280;
    st.canvas
        .fill_rounded_rect(rect(x, y, W - 30, y + code_h), 8, INDIGO_900);
    let code: Vec<CodeLine> = [
        ("  {", GRAY_300),
        ("    \"status\": 402,", GRAY_300),
        ("    \"message\": \"Payment Required\",", GRAY_300),
        ("    \"x402\": {", CYAN_400),
        ("      \"version\": \"v2\",", GRAY_300),
        ("      \"price\": \"10000\",", AMBER_400),
        ("      \"currency\": \"USDC\",", GRAY_300),
        ("      \"network\": \"eip155:84532\",", GRAY_300),
        ("      \"receiver\": \"0x3f...a8c2\",", GRAY_300),
        ("      \"description\": \"Premium analysis\"", EMERALD_500),
        ("    }", CYAN_400),
        ("  }", GRAY_300),
    ]
    .iter()
    .map(|(t, c)| vec![TextRun::new(*t, *c)])
    .collect();
    st.code(f64::from(x + 16), f64::from(y + 16), &code, 20.0, Mono, 12.0)?;

    y += code_h + 16;
    st.canvas
        .fill_rounded_rect(rect(x, y, x + 200, y + 30), 4, Color::rgb(255, 243, 232));
    st.text(
        f64::from(x + 8),
        f64::from(y + 7),
        "Status: 402 Payment Required",
        Bold,
        11.0,
        Color::rgb(194, 120, 3),
    )?;

    y += 48;
    endpoint(
        &mut st,
        y,
        ("GET", EMERALD_500),
        "/api/x402/protected/data",
        "$0.001 USDC \u{2014} Market data endpoint",
        (green, Color::rgb(200, 230, 200)),
    )?;
    y += 52;
    endpoint(
        &mut st,
        y,
        ("GET", BLUE_500),
        "/api/x402/pricing",
        "No auth \u{2014} Pricing information",
        (Color::rgb(230, 240, 255), Color::rgb(180, 200, 240)),
    )?;
    Ok(st.finish())
}

/// Collapsed endpoint row of the API explorer.
fn endpoint(
    st: &mut Stage<'_>,
    y: i32,
    method: (&str, Color),
    path: &str,
    note: &str,
    (fill, outline): (Color, Color),
) -> BrandpressResult<()> {
    let x = 280;
    card(&mut st.canvas, rect(x, y, W - 30, y + 42), 4, fill, Some(outline));
    let ty = f64::from(y + 12);
    st.text(f64::from(x + 12), ty, method.0, Bold, 13.0, method.1)?;
    st.text(f64::from(x + 50), ty, path, Regular, 13.0, GRAY_700)?;
    st.text(f64::from(x + 400), ty, note, Regular, 13.0, GRAY_500)?;
    Ok(())
}

fn sdk(engine: &mut TextEngine) -> BrandpressResult<Canvas> {
    let bg = gradient_canvas(
        SCENE_WIDTH,
        SCENE_HEIGHT,
        INDIGO_900,
        Color::rgb(20, 20, 40),
        GradientDirection::Vertical,
    );
    let mut st = Stage::new(engine, bg);
    st.text(60.0, 40.0, "Add x402 payments in 3 lines", Bold, 36.0, WHITE)?;
    st.text(
        60.0,
        88.0,
        "SDKs for LangChain, CrewAI, Semantic Kernel, Agent Framework, and Copilot Studio",
        Regular,
        18.0,
        GRAY_400,
    )?;

    let (code_x, code_y, code_w, code_h) = (60, 140, W - 120, 340);
    code_window(
        &mut st.canvas,
        rect(code_x, code_y, code_x + code_w, code_y + code_h),
        Color::rgb(15, 15, 30),
        Color::rgb(30, 30, 50),
    );
    st.text(
        f64::from(code_x + 90),
        f64::from(code_y + 9),
        "agent_with_payments.py",
        Regular,
        12.0,
        GRAY_500,
    )?;

    let lines = vec![
        tokens(&[
            ("from", VIOLET_500),
            (" langchain_x402 ", WHITE),
            ("import", VIOLET_500),
            (" X402Toolkit", CYAN_400),
        ]),
        tokens(&[
            ("from", VIOLET_500),
            (" langchain_openai ", WHITE),
            ("import", VIOLET_500),
            (" ChatOpenAI", CYAN_400),
        ]),
        tokens(&[
            ("from", VIOLET_500),
            (" langchain.agents ", WHITE),
            ("import", VIOLET_500),
            (" create_tool_calling_agent", CYAN_400),
        ]),
        Vec::new(),
        tokens(&[("# Create an agent with x402 payment capabilities", GRAY_500)]),
        tokens(&[
            ("toolkit = X402Toolkit(", WHITE),
            ("wallet_private_key", AMBER_400),
            ("=", WHITE),
            ("key", EMERALD_500),
            (")", WHITE),
        ]),
        tokens(&[
            ("llm = ChatOpenAI(", WHITE),
            ("model", AMBER_400),
            ("=", WHITE),
            ("\"gpt-4o\"", EMERALD_500),
            (")", WHITE),
        ]),
        tokens(&[
            ("agent = create_tool_calling_agent(", WHITE),
            ("llm", CYAN_400),
            (", ", WHITE),
            ("toolkit.get_tools()", CYAN_400),
            (")", WHITE),
        ]),
        Vec::new(),
        tokens(&[("# Agent autonomously pays for APIs it calls", GRAY_500)]),
        tokens(&[
            ("result = agent.invoke(", WHITE),
            ("\"Get premium market analysis\"", EMERALD_500),
            (")", WHITE),
        ]),
        Vec::new(),
        tokens(&[("# Payment settled on-chain, data returned instantly", GRAY_500)]),
        tokens(&[("print(result.cost)    ", WHITE), ("# $0.01 USDC", GRAY_500)]),
        tokens(&[("print(result.tx_hash) ", WHITE), ("# 0xabc...def", GRAY_500)]),
    ];
    st.code(
        f64::from(code_x + 24),
        f64::from(code_y + 50),
        &lines,
        22.0,
        Mono,
        15.0,
    )?;

    let badge_y = code_y + code_h + 40;
    let sdks = [
        ("LangChain", INDIGO_500),
        ("CrewAI", AMBER_400),
        ("Semantic Kernel", VIOLET_500),
        ("Agent Framework", BLUE_500),
        ("Copilot Studio", TEAL_500),
    ];
    let mut badge_x = 60;
    for (name, color) in sdks {
        let tw = name.len() as i32 * 11 + 32;
        st.canvas
            .fill_rounded_rect(rect(badge_x, badge_y, badge_x + tw, badge_y + 40), 8, color);
        st.text(
            f64::from(badge_x + 16),
            f64::from(badge_y + 10),
            name,
            Bold,
            14.0,
            WHITE,
        )?;
        badge_x += tw + 16;
    }

    let commands: Vec<CodeLine> = [
        "pip install langchain-x402",
        "pip install crewai-x402",
        "dotnet add package AgentRails.SemanticKernel.X402",
        "dotnet add package AgentRails.AgentFramework.X402",
    ]
    .iter()
    .map(|cmd| vec![TextRun::new(format!("$ {cmd}"), GRAY_400)])
    .collect();
    st.code(76.0, f64::from(badge_y + 56), &commands, 22.0, Mono, 13.0)?;
    Ok(st.finish())
}

fn dashboard(engine: &mut TextEngine) -> BrandpressResult<Canvas> {
    let mut st = Stage::new(engine, Canvas::new(SCENE_WIDTH, SCENE_HEIGHT, GRAY_50));

    st.canvas.fill_rect(rect(0, 0, 220, H), INDIGO_900);
    st.canvas.fill_rounded_rect(rect(20, 20, 48, 48), 6, INDIGO_500);
    terminal_icon(&mut st.canvas, Point::new(34.0, 34.0), 14.0, WHITE);
    st.text(56.0, 26.0, "AgentRails", Bold, 16.0, WHITE)?;

    let menu = [
        ("Dashboard", true),
        ("Agents", false),
        ("Transactions", false),
        ("Policies", false),
        ("Audit Log", false),
        ("Settings", false),
    ];
    let mut y = 80;
    for (label, active) in menu {
        if active {
            st.canvas
                .fill_rounded_rect(rect(12, y, 208, y + 38), 6, INDIGO_600);
        }
        let color = if active {
            WHITE
        } else {
            Color::rgb(180, 180, 220)
        };
        st.text(24.0, f64::from(y + 10), label, Regular, 13.0, color)?;
        y += 46;
    }

    let (x, y) = (240, 20);
    st.text(f64::from(x), f64::from(y), "Dashboard", Bold, 28.0, GRAY_900)?;
    st.text(
        f64::from(x),
        f64::from(y + 36),
        "Agent payment overview \u{2014} Last 30 days",
        Regular,
        13.0,
        GRAY_500,
    )?;

    let cards_y = y + 72;
    let card_w = (W - x - 60) / 4;
    let stats = [
        ("Total Payments", "$12,847.32", "+23.5%", EMERALD_500),
        ("Active Agents", "47", "+8", BLUE_500),
        ("Avg per Transaction", "$0.0043", "-12.1%", AMBER_400),
        ("Policy Violations", "3", "Last 30d", RED_400),
    ];
    for (i, (label, value, change, color)) in stats.into_iter().enumerate() {
        let cx = x + i as i32 * (card_w + 15);
        card(
            &mut st.canvas,
            rect(cx, cards_y, cx + card_w, cards_y + 95),
            10,
            WHITE,
            Some(GRAY_200),
        );
        let tx = f64::from(cx + 16);
        st.text(tx, f64::from(cards_y + 12), label, Regular, 11.0, GRAY_500)?;
        st.text(tx, f64::from(cards_y + 32), value, Bold, 22.0, GRAY_900)?;
        st.text(tx, f64::from(cards_y + 65), change, Bold, 11.0, color)?;
    }

    let table_y = cards_y + 120;
    let panel = rect(x, table_y, W - 20, H - 20);
    card(&mut st.canvas, panel, 10, WHITE, Some(GRAY_200));
    st.text(
        f64::from(x + 20),
        f64::from(table_y + 16),
        "Recent Transactions",
        Bold,
        16.0,
        GRAY_900,
    )?;

    let table = transactions_table();
    let origin = Point::new(f64::from(x + 20), f64::from(table_y + 50));
    let available = f64::from(panel.y2() - 8) - origin.y;
    let laid = table.layout(st.engine, origin, available);
    laid.list.paint(&mut st.canvas, st.engine, Vec2::ZERO)?;
    Ok(st.finish())
}

/// Recent transactions with per-status badges.
pub fn transactions_table() -> Table {
    let rows = [
        (
            "research-agent-01",
            "/api/market/analysis",
            "$0.01",
            "Base Sepolia",
            "Settled",
            "2 min ago",
        ),
        ("finance-copilot", "/api/x402/stats", "$0.001", "Base Sepolia", "Settled", "5 min ago"),
        ("data-agent-03", "/api/premium/data", "$0.05", "Arc Testnet", "Settled", "12 min ago"),
        ("sales-agent-07", "/api/leads/enrich", "$0.02", "Base Sepolia", "Pending", "15 min ago"),
        ("ops-agent-12", "/api/compute/gpu", "$0.10", "Ethereum", "Settled", "23 min ago"),
        (
            "research-agent-01",
            "/api/news/summary",
            "$0.005",
            "Base Sepolia",
            "Settled",
            "31 min ago",
        ),
        ("qa-agent-04", "/api/test/validate", "$0.001", "Arc Testnet", "Failed", "45 min ago"),
    ];
    let columns = [
        ("Agent", 140.0),
        ("Endpoint", 260.0),
        ("Amount", 100.0),
        ("Network", 120.0),
        ("Status", 100.0),
        ("Time", 160.0),
    ]
    .into_iter()
    .map(|(t, w)| Column::new(t, w))
    .collect();

    let mut table = Table::new(columns, TableStyle::default());
    for (agent, endpoint, amount, network, status, time) in rows {
        let status_color = match status {
            "Settled" => EMERALD_500,
            "Pending" => AMBER_400,
            "Failed" => RED_400,
            _ => GRAY_400,
        };
        table = table.row(vec![
            Cell::colored(agent, INDIGO_600).bold(),
            Cell::colored(endpoint, GRAY_700),
            Cell::colored(amount, GRAY_900).bold(),
            Cell::colored(network, GRAY_600),
            Cell::badge(status, status_color),
            Cell::colored(time, GRAY_500),
        ]);
    }
    table
}

/// Chat message bubble sized to its wrapped text; returns the bubble's bottom edge.
fn chat_bubble(
    st: &mut Stage<'_>,
    origin: Point,
    width: f64,
    author: &str,
    time: &str,
    message: &str,
) -> BrandpressResult<f64> {
    let author_font = st.engine.font(Bold, 12.0);
    let time_font = st.engine.font(Regular, 10.0);
    let body_font = st.engine.font(Regular, 14.0);
    let style = BoxStyle {
        fill: Some(WHITE),
        radius: 12.0,
        padding_x: 16.0,
        padding_top: 8.0,
        padding_bottom: 12.0,
        ..BoxStyle::default()
    };
    let sections = [
        BoxSection::new(
            vec![
                TextRun::new(format!("{author}   "), GRAY_900).with_font(author_font.clone()),
                TextRun::new(time, GRAY_400).with_font(time_font),
            ],
            author_font,
            22.0,
        ),
        BoxSection::new(vec![TextRun::new(message, GRAY_700)], body_font, 18.0),
    ];
    let frame = commit_box(&mut st.canvas, st.engine, origin, width, &style, &sections)?;
    Ok(frame.y1)
}

fn copilot(engine: &mut TextEngine) -> BrandpressResult<Canvas> {
    let mut st = Stage::new(
        engine,
        Canvas::new(SCENE_WIDTH, SCENE_HEIGHT, Color::rgb(240, 240, 245)),
    );

    st.canvas.fill_rect(rect(0, 0, W, 48), Color::rgb(75, 60, 165));
    st.text(20.0, 14.0, "Microsoft Teams", Bold, 16.0, WHITE)?;
    st.text(
        f64::from(W - 200),
        16.0,
        "AgentRails Finance",
        Regular,
        13.0,
        Color::rgb(200, 200, 240),
    )?;

    st.canvas.fill_rect(rect(0, 48, 260, H), WHITE);
    st.canvas.draw_line(
        Point::new(260.0, 48.0),
        Point::new(260.0, f64::from(H)),
        GRAY_200,
        1.0,
    );
    let channels = ["General", "AgentRails Finance", "Agent Ops", "Governance Alerts"];
    let mut y = 68;
    for (i, channel) in channels.into_iter().enumerate() {
        let active = i == 1;
        if active {
            st.canvas
                .fill_rounded_rect(rect(8, y - 4, 252, y + 28), 6, Color::rgb(238, 242, 255));
        }
        let color = if active { INDIGO_600 } else { GRAY_600 };
        st.text(20.0, f64::from(y), &format!("# {channel}"), Regular, 13.0, color)?;
        y += 38;
    }

    let x = 280.0;
    let first_bottom = chat_bubble(
        &mut st,
        Point::new(x, 68.0),
        500.0,
        "Sarah Chen",
        "2:34 PM",
        "What's our total x402 revenue this month?",
    )?;

    let bot_bottom = copilot_reply(&mut st, Point::new(x, first_bottom + 20.0))?;

    chat_bubble(
        &mut st,
        Point::new(x, bot_bottom + 20.0),
        600.0,
        "Sarah Chen",
        "2:35 PM",
        "Are any agents over their spending limits?",
    )?;

    card(
        &mut st.canvas,
        rect(280, H - 56, W - 20, H - 12),
        8,
        WHITE,
        Some(GRAY_200),
    );
    st.text(
        296.0,
        f64::from(H - 42),
        "Ask AgentRails FinanceOps a question...",
        Regular,
        13.0,
        GRAY_400,
    )?;
    Ok(st.finish())
}

/// Copilot answer: intro line, revenue card with a bar chart, then a wrapped agent summary.
/// The bubble is measured around the text and the reserved card slot before anything is drawn.
fn copilot_reply(st: &mut Stage<'_>, origin: Point) -> BrandpressResult<f64> {
    const CARD_SLOT: f64 = 195.0;
    let intro_font = st.engine.font(Regular, 13.0);
    let summary_font = st.engine.font(Regular, 12.0);
    let style = BoxStyle {
        fill: Some(WHITE),
        radius: 12.0,
        padding_x: 16.0,
        padding_top: 44.0,
        padding_bottom: 24.0,
        ..BoxStyle::default()
    };
    let sections = [
        BoxSection::new(
            vec![TextRun::new(
                "Here's your x402 revenue summary for February 2026:",
                GRAY_700,
            )],
            intro_font.clone(),
            30.0,
        ),
        BoxSection::new(Vec::new(), intro_font, 0.0).gap_after(CARD_SLOT),
        BoxSection::new(
            vec![TextRun::new(
                "Top spending agents: research-agent-01 ($4,231), finance-copilot ($2,891), \
                 data-agent-03 ($1,847)",
                GRAY_600,
            )],
            summary_font,
            18.0,
        ),
    ];
    let width = f64::from(W - 40) - origin.x;
    let measured = measure_box(st.engine, origin, width, &style, &sections);
    measured
        .commit(&style)
        .paint(&mut st.canvas, st.engine, Vec2::ZERO)?;

    let (x, y) = (origin.x, origin.y);
    let xi = x as i32;
    let yi = y as i32;
    st.canvas
        .fill_rounded_rect(rect(xi + 12, yi + 10, xi + 34, yi + 32), 4, TEAL_500);
    st.text(x + 16.0, y + 13.0, "A", Bold, 12.0, WHITE)?;
    st.text(x + 42.0, y + 12.0, "AgentRails FinanceOps", Bold, 12.0, GRAY_900)?;
    st.text(x + 230.0, y + 14.0, "2:34 PM", Regular, 10.0, GRAY_400)?;

    let card_y = yi + 44 + 30;
    card(
        &mut st.canvas,
        rect(xi + 16, card_y, xi + 600, card_y + 180),
        8,
        GRAY_50,
        Some(GRAY_200),
    );
    let stats = [
        ("Total Revenue", "$12,847.32"),
        ("Transactions", "298,412"),
        ("Unique Agents", "47"),
        ("Avg per Tx", "$0.043"),
    ];
    let mut sx = x + 32.0;
    let cy = f64::from(card_y);
    for (label, value) in stats {
        st.text(sx, cy + 16.0, label, Regular, 11.0, GRAY_500)?;
        st.text(sx, cy + 34.0, value, Bold, 18.0, GRAY_900)?;
        sx += 150.0;
    }

    st.text(
        x + 32.0,
        cy + 80.0,
        "Daily Revenue (last 7 days)",
        Regular,
        10.0,
        GRAY_500,
    )?;
    let bars_y = card_y + 100;
    let daily = [420, 380, 510, 490, 620, 580, 650];
    let max = daily.iter().copied().max().unwrap_or(1);
    for (i, value) in daily.into_iter().enumerate() {
        let bar_h = value * 55 / max;
        let bx = xi + 32 + i as i32 * 82;
        st.canvas.fill_rounded_rect(
            rect(bx, bars_y + 55 - bar_h, bx + 60, bars_y + 55),
            4,
            INDIGO_500,
        );
        st.text(
            f64::from(bx + 20),
            f64::from(bars_y + 60),
            &format!("Feb {}", 17 + i),
            Regular,
            9.0,
            GRAY_400,
        )?;
    }
    Ok(measured.rect().y1)
}

fn payment_flow(engine: &mut TextEngine) -> BrandpressResult<Canvas> {
    let bg = gradient_canvas(
        SCENE_WIDTH,
        SCENE_HEIGHT,
        Color::rgb(248, 250, 252),
        WHITE,
        GradientDirection::Vertical,
    );
    let mut st = Stage::new(engine, bg);
    let mid = f64::from(W / 2);
    st.text(mid - 220.0, 30.0, "How x402 Payments Work", Bold, 32.0, GRAY_900)?;
    st.text(
        mid - 260.0,
        72.0,
        "HTTP 402 is the new API key \u{2014} one protocol, every framework",
        Regular,
        16.0,
        GRAY_500,
    )?;

    let (box_w, box_h, gap) = (240, 140, 60);
    let total_w = 4 * box_w + 3 * gap;
    let start_x = (W - total_w) / 2;
    let box_y = 160;
    let steps = [
        ("Agent Calls API", "Standard HTTP request.\nNo API key.\nNo signup.", INDIGO_500),
        (
            "Server Returns 402",
            "Payment Required header\nwith price, currency,\nand receiver address.",
            AMBER_400,
        ),
        (
            "Agent Pays",
            "SDK checks budget,\nsigns USDC authorization,\nretries automatically.",
            CYAN_500,
        ),
        (
            "Data Returned",
            "API delivers response.\nPayment settles on-chain.\nAgent moves on.",
            EMERALD_500,
        ),
    ];
    let desc_font = st.engine.font(Regular, 12.0);
    let last = steps.len() - 1;
    for (i, &(title, desc, color)) in steps.iter().enumerate() {
        let bx = start_x + i as i32 * (box_w + gap);
        card(
            &mut st.canvas,
            rect(bx, box_y, bx + box_w, box_y + box_h),
            12,
            WHITE,
            Some(GRAY_200),
        );
        st.canvas
            .fill_rounded_rect(rect(bx, box_y, bx + box_w, box_y + 6), 3, color);
        let cx = bx + box_w / 2;
        st.canvas
            .fill_ellipse(rect(cx - 16, box_y - 16, cx + 16, box_y + 16), color);
        st.text(
            f64::from(cx - 5),
            f64::from(box_y - 10),
            &(i + 1).to_string(),
            Bold,
            16.0,
            WHITE,
        )?;
        st.text(
            f64::from(bx + 16),
            f64::from(box_y + 24),
            title,
            Bold,
            15.0,
            GRAY_900,
        )?;
        let lines = wrap_text(st.engine, desc, &desc_font, GRAY_600, (box_w - 32) as f32);
        draw_runs(
            st.engine,
            &mut st.canvas,
            Point::new(f64::from(bx + 16), f64::from(box_y + 48)),
            &lines,
            18.0,
            &desc_font,
        )?;

        if i < last {
            let ax = f64::from(bx + box_w + 8);
            let ay = f64::from(box_y + box_h / 2);
            let g = f64::from(gap);
            st.canvas
                .draw_line(Point::new(ax, ay), Point::new(ax + g - 16.0, ay), GRAY_300, 2.0);
            st.canvas.fill_polygon(
                &[
                    Point::new(ax + g - 16.0, ay - 6.0),
                    Point::new(ax + g - 4.0, ay),
                    Point::new(ax + g - 16.0, ay + 6.0),
                ],
                GRAY_300,
            );
        }
    }

    let code_y = box_y + box_h + 50;
    let code_x = start_x;
    code_window(
        &mut st.canvas,
        rect(code_x, code_y, code_x + total_w, code_y + 280),
        INDIGO_900,
        Color::rgb(30, 30, 50),
    );
    let half = total_w / 2;
    let left = f64::from(code_x + 20);
    let right = f64::from(code_x + half + 20);
    let top = f64::from(code_y);

    st.text(
        left,
        top + 46.0,
        "Server (Python \u{2014} FastAPI)",
        Bold,
        11.0,
        GRAY_400,
    )?;
    let server = vec![
        tokens(&[
            ("@app", CYAN_400),
            (".get(", WHITE),
            ("\"/api/data\"", EMERALD_500),
            (")", WHITE),
        ]),
        tokens(&[
            ("@x402_protected", VIOLET_500),
            ("(price=", WHITE),
            ("0.01", AMBER_400),
            (")", WHITE),
        ]),
        tokens(&[("async def", VIOLET_500), (" get_data():", WHITE)]),
        tokens(&[("    return ", WHITE), ("{\"data\": \"premium\"}", EMERALD_500)]),
    ];
    st.code(left, top + 70.0, &server, 20.0, Mono, 12.0)?;

    let divider_x = f64::from(code_x + half);
    st.canvas.draw_line(
        Point::new(divider_x, top + 42.0),
        Point::new(divider_x, top + 270.0),
        Color::rgb(60, 60, 80),
        1.0,
    );

    st.text(
        right,
        top + 46.0,
        "Agent (Python \u{2014} LangChain)",
        Bold,
        11.0,
        GRAY_400,
    )?;
    let agent = vec![
        tokens(&[
            ("from", VIOLET_500),
            (" langchain_x402 ", WHITE),
            ("import", VIOLET_500),
            (" X402Toolkit", CYAN_400),
        ]),
        Vec::new(),
        tokens(&[
            ("toolkit = X402Toolkit(", WHITE),
            ("key", AMBER_400),
            ("=", WHITE),
            ("pk", EMERALD_500),
            (")", WHITE),
        ]),
        tokens(&[
            ("result = agent.invoke(", WHITE),
            ("\"Get data\"", EMERALD_500),
            (")", WHITE),
        ]),
        tokens(&[("print(result)", WHITE), ("  # {data: premium}", GRAY_500)]),
    ];
    st.code(right, top + 70.0, &agent, 20.0, Mono, 12.0)?;

    let comment = |lines: &[&str]| -> Vec<CodeLine> {
        lines
            .iter()
            .map(|l| vec![TextRun::new(*l, GRAY_500)])
            .collect()
    };
    let flow_y = top + 180.0;
    st.code(
        left,
        flow_y,
        &comment(&[
            "# Flow: Request",
            "#   1. Agent calls GET /api/data",
            "#   2. Server returns 402 + price",
            "#   3. SDK pays $0.01 USDC, retries",
        ]),
        18.0,
        Mono,
        12.0,
    )?;
    st.code(
        right,
        flow_y,
        &comment(&[
            "#   4. Server verifies payment",
            "#   5. Returns premium data",
            "#   6. Settles on-chain (USDC)",
        ]),
        18.0,
        Mono,
        12.0,
    )?;
    Ok(st.finish())
}

fn thumbnail(engine: &mut TextEngine) -> BrandpressResult<Canvas> {
    let bg = gradient_canvas(
        SCENE_WIDTH,
        SCENE_HEIGHT,
        INDIGO_900,
        Color::rgb(20, 15, 60),
        GradientDirection::Diagonal,
    );
    let mut st = Stage::new(engine, bg);

    let (cx, cy, r) = (W / 2, H / 2 - 20, 50);
    st.canvas
        .fill_ellipse(rect(cx - r, cy - r, cx + r, cy + r), WHITE);
    let (fx, fy) = (f64::from(cx), f64::from(cy));
    st.canvas.fill_polygon(
        &[
            Point::new(fx - 15.0, fy - 25.0),
            Point::new(fx - 15.0, fy + 25.0),
            Point::new(fx + 25.0, fy),
        ],
        INDIGO_600,
    );

    st.text(
        fx - 300.0,
        fy + 80.0,
        "AgentRails \u{2014} Platform Demo",
        Bold,
        36.0,
        WHITE,
    )?;
    st.text(
        fx - 260.0,
        fy + 130.0,
        "AI Agent Payment Infrastructure  |  x402 Protocol  |  Microsoft 365",
        Regular,
        18.0,
        GRAY_400,
    )?;

    st.canvas
        .fill_rounded_rect(rect(W - 100, H - 40, W - 20, H - 14), 4, BLACK);
    st.text(
        f64::from(W - 90),
        f64::from(H - 37),
        "4:12",
        Bold,
        14.0,
        WHITE,
    )?;
    Ok(st.finish())
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/scenes.rs"]
mod tests;
