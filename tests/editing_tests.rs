use cuboid_annotator::{
    cuboids_from_json, cuboids_to_json, AppController, Cuboid, DrawCall, DrawRecorder, HostEvent,
    ImageInfo, Key, PlaneQuad, PointerEvent,
};
use glam::Vec2;

fn cuboid(id: &str, tl: Vec2, br: Vec2, order: u32) -> Cuboid {
    let front = PlaneQuad::from_corners(tl, br);
    Cuboid {
        id: id.into(),
        source_id: "img".into(),
        attribute: String::new(),
        valid: true,
        order,
        text_attribute: String::new(),
        front_points: front,
        back_points: Some(front.translated(Vec2::new(15.0, -10.0))),
    }
}

fn make_loaded_controller() -> AppController<DrawRecorder> {
    let mut controller = AppController::new(DrawRecorder::new());
    controller.set_image(Some(ImageInfo {
        width: 640,
        height: 480,
    }));
    controller.set_source_id("img");
    controller.set_cuboid_list(vec![
        cuboid("a", Vec2::new(0.0, 20.0), Vec2::new(40.0, 50.0), 1),
        cuboid("b", Vec2::new(200.0, 200.0), Vec2::new(240.0, 230.0), 2),
    ]);
    controller.drain_events();
    controller
}

fn right_click(controller: &mut AppController<DrawRecorder>, x: f32, y: f32) -> bool {
    controller.on_mouse_down(PointerEvent::secondary(x, y));
    controller.on_mouse_up(PointerEvent::secondary(x, y))
}

#[test]
fn test_right_click_selects_hovered_cuboid() {
    let mut controller = make_loaded_controller();

    assert!(right_click(&mut controller, 220.0, 215.0));
    assert_eq!(controller.state.selection.selected_id.as_deref(), Some("b"));
    assert_eq!(controller.drain_events(), vec![HostEvent::SelectedChange]);

    assert!(!right_click(&mut controller, 500.0, 400.0));
    assert_eq!(controller.state.selection.selected_id.as_deref(), Some("b"));
}

#[test]
fn test_first_hover_match_wins_in_list_order() {
    let mut controller = AppController::new(DrawRecorder::new());
    controller.set_image(Some(ImageInfo {
        width: 640,
        height: 480,
    }));
    controller.set_source_id("img");
    controller.set_cuboid_list(vec![
        cuboid("bottom", Vec2::new(0.0, 0.0), Vec2::new(50.0, 50.0), 1),
        cuboid("top", Vec2::new(10.0, 10.0), Vec2::new(60.0, 60.0), 2),
    ]);

    controller.on_mouse_move(PointerEvent::primary(30.0, 30.0));
    assert_eq!(controller.state.selection.hover_id.as_deref(), Some("bottom"));
}

#[test]
fn test_double_right_click_deletes_selected_cuboid() {
    let mut controller = make_loaded_controller();
    right_click(&mut controller, 20.0, 35.0);
    controller.drain_events();

    assert!(controller.on_right_dbl_click(PointerEvent::secondary(20.0, 35.0)));

    let ids: Vec<String> = controller.cuboid_list().into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["b".to_string()]);
    assert!(controller.state.selection.selected_id.is_none());
    assert_eq!(
        controller.drain_events(),
        vec![
            HostEvent::SelectedChange,
            HostEvent::UpdatePageNumber,
            HostEvent::UpdateResult
        ]
    );
}

#[test]
fn test_double_right_click_on_unselected_cuboid_keeps_it() {
    let mut controller = make_loaded_controller();
    right_click(&mut controller, 20.0, 35.0);

    assert!(!controller.on_right_dbl_click(PointerEvent::secondary(220.0, 215.0)));
    assert_eq!(controller.cuboid_list().len(), 2);
}

#[test]
fn test_delete_key_removes_selection() {
    let mut controller = make_loaded_controller();
    right_click(&mut controller, 220.0, 215.0);

    assert!(controller.on_key_down(Key::Delete));
    assert_eq!(controller.cuboid_list().len(), 1);
    assert!(!controller.on_key_down(Key::Backspace));
}

#[test]
fn test_delete_of_other_cuboid_clears_selection() {
    let mut controller = make_loaded_controller();
    right_click(&mut controller, 220.0, 215.0);
    controller.drain_events();

    assert!(controller.delete_cuboid("a"));
    assert!(controller.state.selection.selected_id.is_none());
    assert_eq!(controller.drain_events()[0], HostEvent::SelectedChange);
}

#[test]
fn test_delete_cuboid_by_unknown_id_is_noop() {
    let mut controller = make_loaded_controller();
    assert!(!controller.delete_cuboid("missing"));
    assert_eq!(controller.cuboid_list().len(), 2);
    assert!(controller.drain_events().is_empty());
}

#[test]
fn test_update_selected_cuboid_replaces_entry() {
    let mut controller = make_loaded_controller();
    let mut replacement = cuboid("ignored", Vec2::new(0.0, 0.0), Vec2::new(5.0, 5.0), 9);
    replacement.text_attribute = "Notiz".into();

    assert!(!controller.update_selected_cuboid(replacement.clone()));

    right_click(&mut controller, 20.0, 35.0);
    assert!(controller.update_selected_cuboid(replacement));

    let list = controller.cuboid_list();
    assert_eq!(list[0].id, "a");
    assert_eq!(list[0].text_attribute, "Notiz");
    assert_eq!(list[0].order, 9);
}

#[test]
fn test_undo_redo_delete() {
    let mut controller = make_loaded_controller();
    assert!(!controller.undo());

    assert!(controller.delete_cuboid("a"));
    controller.drain_events();

    assert!(controller.undo());
    assert_eq!(controller.cuboid_list().len(), 2);
    assert_eq!(
        controller.drain_events(),
        vec![HostEvent::UpdatePageNumber, HostEvent::UpdateResult]
    );

    assert!(controller.redo());
    let ids: Vec<String> = controller.cuboid_list().into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["b".to_string()]);
    assert!(!controller.redo());
}

#[test]
fn test_undo_of_commit_clears_selection() {
    let mut controller = AppController::new(DrawRecorder::new());
    controller.set_image(Some(ImageInfo {
        width: 640,
        height: 480,
    }));
    for (x, y) in [(10.0, 10.0), (50.0, 30.0), (80.0, 60.0)] {
        controller.on_mouse_down(PointerEvent::primary(x, y));
        controller.on_mouse_up(PointerEvent::primary(x, y));
    }
    assert!(controller.state.selection.selected_id.is_some());

    assert!(controller.undo());
    assert!(controller.cuboid_list().is_empty());
    assert!(controller.state.selection.selected_id.is_none());
}

#[test]
fn test_set_cuboid_list_resets_history() {
    let mut controller = make_loaded_controller();
    controller.delete_cuboid("a");
    controller.set_cuboid_list(Vec::new());

    assert!(!controller.undo());
    assert!(!controller.state.can_redo());
}

#[test]
fn test_set_cuboid_list_drops_duplicate_ids() {
    let mut controller = make_loaded_controller();
    controller.set_cuboid_list(vec![
        cuboid("x", Vec2::ZERO, Vec2::splat(10.0), 1),
        cuboid("x", Vec2::ZERO, Vec2::splat(20.0), 2),
    ]);
    let list = controller.cuboid_list();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].order, 2);
}

#[test]
fn test_new_ids_do_not_collide_with_loaded_ids() {
    let mut controller = make_loaded_controller();
    controller.set_cuboid_list(vec![cuboid(
        "cuboid-1",
        Vec2::new(300.0, 300.0),
        Vec2::new(320.0, 320.0),
        5,
    )]);
    for (x, y) in [(10.0, 10.0), (50.0, 30.0), (80.0, 60.0)] {
        controller.on_mouse_down(PointerEvent::primary(x, y));
        controller.on_mouse_up(PointerEvent::primary(x, y));
    }

    let list = controller.cuboid_list();
    assert_eq!(list.len(), 2);
    assert_ne!(list[1].id, "cuboid-1");
    assert_eq!(list[1].order, 6);
}

#[test]
fn test_host_json_schema_roundtrip_through_controller() {
    let mut controller = make_loaded_controller();
    let json = cuboids_to_json(&controller.cuboid_list()).expect("serialisierbar");
    assert!(json.contains("\"frontPoints\""));
    assert!(json.contains("\"sourceID\""));

    let parsed = cuboids_from_json(&json).expect("wieder lesbar");
    controller.set_cuboid_list(parsed.clone());
    assert_eq!(controller.cuboid_list(), parsed);
}

#[test]
fn test_cuboid_of_other_source_is_neither_hovered_nor_drawn() {
    let mut controller = make_loaded_controller();
    let mut foreign = cuboid("foreign", Vec2::new(400.0, 100.0), Vec2::new(440.0, 130.0), 3);
    foreign.source_id = "other-img".into();
    let mut list = controller.cuboid_list();
    list.push(foreign);
    controller.set_cuboid_list(list);

    controller.on_mouse_move(PointerEvent::primary(420.0, 115.0));
    assert!(controller.state.selection.hover_id.is_none());
    assert!(!right_click(&mut controller, 420.0, 115.0));
    assert!(controller.state.selection.selected_id.is_none());

    controller.renderer_mut().take_calls();
    controller.render();
    let foreign_front_drawn = controller.renderer().calls().iter().any(|call| {
        matches!(call, DrawCall::FillPolygon { points, .. } if points[0] == Vec2::new(400.0, 100.0))
    });
    assert!(!foreign_front_drawn);

    controller.set_source_id("other-img");
    controller.on_mouse_move(PointerEvent::primary(420.0, 115.0));
    assert_eq!(controller.state.selection.hover_id.as_deref(), Some("foreign"));
}

#[test]
fn test_attribute_lock_and_hidden_keep_selected_cuboid() {
    let mut controller = make_loaded_controller();
    right_click(&mut controller, 220.0, 215.0);

    controller.set_attribute_lock_list(vec!["car".into()]);
    controller.on_mouse_move(PointerEvent::primary(20.0, 35.0));
    assert!(controller.state.selection.hover_id.is_none());
    controller.on_mouse_move(PointerEvent::primary(220.0, 215.0));
    assert_eq!(controller.state.selection.hover_id.as_deref(), Some("b"));

    controller.set_attribute_lock_list(Vec::new());
    controller.set_hidden(true);
    controller.on_mouse_move(PointerEvent::primary(20.0, 35.0));
    assert!(controller.state.selection.hover_id.is_none());
    let visible: Vec<&str> = controller
        .state
        .visible_cuboids()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(visible, vec!["b"]);
}
