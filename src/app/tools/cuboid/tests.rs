use super::*;
use crate::app::tools::ToolAction;
use crate::core::{Cuboid, PlaneQuad};
use crate::shared::DEPTH_SCALE;
use approx::assert_relative_eq;
use glam::Vec2;

fn seed() -> Cuboid {
    Cuboid {
        id: "draft".into(),
        source_id: String::new(),
        attribute: String::new(),
        valid: true,
        order: 1,
        text_attribute: String::new(),
        front_points: PlaneQuad::collapsed(Vec2::ZERO),
        back_points: None,
    }
}

fn tool_with_front(a: Vec2, b: Vec2) -> CuboidTool {
    let mut tool = CuboidTool::new();
    assert_eq!(tool.begin(seed(), a), ToolAction::Continue);
    assert_eq!(tool.on_click(b, DEPTH_SCALE), ToolAction::Continue);
    tool
}

#[test]
fn first_click_collapses_all_front_corners() {
    let mut tool = CuboidTool::new();
    tool.begin(seed(), Vec2::new(10.0, 10.0));

    assert_eq!(tool.status(), DrawingStatus::FirstPoint);
    let front = tool.drawing().expect("Quader in Arbeit").front_points;
    assert_eq!(front, PlaneQuad::collapsed(Vec2::new(10.0, 10.0)));
    assert!(tool.has_pending_input());
}

#[test]
fn move_in_first_point_spans_front_face() {
    let mut tool = CuboidTool::new();
    tool.begin(seed(), Vec2::new(10.0, 10.0));
    assert!(tool.on_move(Vec2::new(50.0, 30.0), DEPTH_SCALE));

    let front = tool.drawing().expect("Quader in Arbeit").front_points;
    assert_eq!(front.tl, Vec2::new(10.0, 10.0));
    assert_eq!(front.tr, Vec2::new(50.0, 10.0));
    assert_eq!(front.bl, Vec2::new(10.0, 30.0));
    assert_eq!(front.br, Vec2::new(50.0, 30.0));
}

#[test]
fn dragging_up_left_keeps_tl_as_geometric_minimum() {
    let mut tool = CuboidTool::new();
    tool.begin(seed(), Vec2::new(10.0, 10.0));
    tool.on_move(Vec2::new(0.0, 0.0), DEPTH_SCALE);

    let front = tool.drawing().expect("Quader in Arbeit").front_points;
    assert_eq!(front.tl, Vec2::new(0.0, 0.0));
    assert_eq!(front.br, Vec2::new(10.0, 10.0));
}

#[test]
fn degenerate_second_click_is_ignored() {
    let mut tool = CuboidTool::new();
    tool.begin(seed(), Vec2::new(10.0, 10.0));

    assert_eq!(tool.on_click(Vec2::new(40.0, 10.0), DEPTH_SCALE), ToolAction::Ignored);
    assert_eq!(tool.status(), DrawingStatus::FirstPoint);
}

#[test]
fn second_click_fixes_front_and_tracks_back_face() {
    let mut tool = tool_with_front(Vec2::new(10.0, 10.0), Vec2::new(50.0, 30.0));
    assert_eq!(tool.status(), DrawingStatus::Cuboid);

    assert!(tool.on_move(Vec2::new(80.0, 60.0), DEPTH_SCALE));
    let drawing = tool.drawing().expect("Quader in Arbeit");
    assert_eq!(drawing.front_points.br, Vec2::new(50.0, 30.0));

    let back = drawing.back_points.expect("Rückfläche");
    assert_relative_eq!(back.br.x, 80.0, epsilon = 1e-3);
    assert_relative_eq!(back.br.y, 60.0, epsilon = 1e-3);
    assert_relative_eq!(back.tr.y, 44.0, epsilon = 1e-3);
    assert_relative_eq!(back.tl.x, 48.0, epsilon = 1e-3);
    assert_relative_eq!(back.bl.x, 48.0, epsilon = 1e-3);
}

#[test]
fn third_click_commits_and_resets() {
    let mut tool = tool_with_front(Vec2::new(10.0, 10.0), Vec2::new(50.0, 30.0));

    let ToolAction::Committed(cuboid) = tool.on_click(Vec2::new(80.0, 60.0), DEPTH_SCALE) else {
        panic!("dritter Klick muss committen");
    };
    assert_eq!(cuboid.id, "draft");
    assert!(cuboid.back_points.is_some());
    assert_eq!(tool.status(), DrawingStatus::Ready);
    assert!(tool.drawing().is_none());
    assert!(tool.first_click().is_none());
}

#[test]
fn parallel_depth_scale_translates_front_exactly() {
    let mut tool = tool_with_front(Vec2::new(10.0, 10.0), Vec2::new(50.0, 30.0));

    let ToolAction::Committed(cuboid) = tool.on_click(Vec2::new(80.0, 60.0), 1.0) else {
        panic!("dritter Klick muss committen");
    };
    let back = cuboid.back_points.expect("Rückfläche");
    assert_eq!(back.tl, Vec2::new(40.0, 40.0));
    assert_eq!(back.br, Vec2::new(80.0, 60.0));
}

#[test]
fn cancel_discards_drawing() {
    let mut tool = tool_with_front(Vec2::new(10.0, 10.0), Vec2::new(50.0, 30.0));
    assert!(tool.cancel());
    assert_eq!(tool.status(), DrawingStatus::Ready);
    assert!(tool.drawing().is_none());
    assert!(!tool.cancel());
}

#[test]
fn begin_is_rejected_while_drawing() {
    let mut tool = CuboidTool::new();
    tool.begin(seed(), Vec2::new(10.0, 10.0));
    assert_eq!(tool.begin(seed(), Vec2::new(99.0, 99.0)), ToolAction::Ignored);
    assert_eq!(tool.first_click(), Some(Vec2::new(10.0, 10.0)));
}

#[test]
fn ready_tool_ignores_click_and_move() {
    let mut tool = CuboidTool::new();
    assert_eq!(tool.on_click(Vec2::ONE, DEPTH_SCALE), ToolAction::Ignored);
    assert!(!tool.on_move(Vec2::ONE, DEPTH_SCALE));
}
