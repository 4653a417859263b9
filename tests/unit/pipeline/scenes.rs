use super::*;
use std::collections::HashSet;

fn render(scene: Scene) -> Canvas {
    let mut engine = TextEngine::builtin_only();
    scene.render(&mut engine).unwrap()
}

#[test]
fn every_scene_is_landscape_720p() {
    let mut engine = TextEngine::builtin_only();
    for scene in Scene::ALL {
        let canvas = scene.render(&mut engine).unwrap();
        assert_eq!(
            (canvas.width(), canvas.height()),
            (1280, 720),
            "{scene:?}"
        );
    }
}

#[test]
fn file_names_are_unique_pngs() {
    let names: HashSet<_> = Scene::ALL.iter().map(|s| s.file_name()).collect();
    assert_eq!(names.len(), 6);
    assert!(names.iter().all(|n| n.ends_with(".png")));
    assert_eq!(Scene::Thumbnail.file_name(), "video-thumbnail.png");
}

#[test]
fn rendering_is_deterministic() {
    for scene in [Scene::Dashboard, Scene::Copilot] {
        assert_eq!(render(scene), render(scene), "{scene:?}");
    }
}

#[test]
fn swagger_has_chrome_band_and_sidebar() {
    let canvas = render(Scene::Swagger);
    assert_eq!(canvas.pixel(5, 5), Some(GRAY_100));
    assert_eq!(canvas.pixel(5, 70), Some(INDIGO_900));
    assert_eq!(canvas.pixel(100, 700), Some(WHITE));
    assert_eq!(canvas.pixel(1270, 700), Some(GRAY_50));
}

#[test]
fn sdk_background_starts_at_indigo() {
    let canvas = render(Scene::Sdk);
    assert_eq!(canvas.pixel(0, 0), Some(INDIGO_900));
    assert_ne!(canvas.pixel(0, 719), Some(INDIGO_900));
}

#[test]
fn dashboard_sidebar_and_full_transaction_table() {
    let canvas = render(Scene::Dashboard);
    assert_eq!(canvas.pixel(5, 700), Some(INDIGO_900));
    assert_eq!(canvas.pixel(230, 700), Some(GRAY_50));

    let mut engine = TextEngine::builtin_only();
    let table = transactions_table();
    assert_eq!(table.rows.len(), 7);
    let laid = table.layout(&mut engine, Point::new(260.0, 262.0), 430.0);
    assert_eq!(laid.rows_drawn, 7);
    assert_eq!(laid.truncated_rows, 0);
    let cramped = table.layout(&mut engine, Point::new(260.0, 262.0), 100.0);
    assert_eq!(cramped.rows_drawn, 2);
}

#[test]
fn copilot_has_teams_header() {
    let canvas = render(Scene::Copilot);
    assert_eq!(canvas.pixel(640, 5), Some(Color::rgb(75, 60, 165)));
    assert_eq!(canvas.pixel(100, 700), Some(WHITE));
}

#[test]
fn chat_bubble_grows_with_its_message() {
    let mut engine = TextEngine::builtin_only();
    let mut stage = Stage::new(&mut engine, Canvas::new(1280, 720, WHITE));
    let origin = Point::new(280.0, 68.0);
    let short = chat_bubble(&mut stage, origin, 500.0, "Sarah", "2:34 PM", "Hi").unwrap();
    // 8 + 22 + 18 + 12
    assert_eq!(short, 128.0);
    let long = chat_bubble(
        &mut stage,
        origin,
        500.0,
        "Sarah",
        "2:34 PM",
        &"revenue ".repeat(40),
    )
    .unwrap();
    assert!(long > short + 18.0);
}

#[test]
fn flow_step_bars_use_step_colours() {
    let canvas = render(Scene::PaymentFlow);
    assert_eq!(canvas.pixel(150, 162), Some(INDIGO_500));
    assert_eq!(canvas.pixel(450, 162), Some(AMBER_400));
}

#[test]
fn thumbnail_play_button_and_duration_badge() {
    let canvas = render(Scene::Thumbnail);
    assert_eq!(canvas.pixel(640, 340), Some(INDIGO_600));
    assert_eq!(canvas.pixel(600, 340), Some(WHITE));
    assert_eq!(canvas.pixel(1182, 700), Some(BLACK));
}
