//! End-to-end tests for the switch: host state, events, and rendering.

use pillswitch_core::{
    Color, Constraints, DrawCommand, Event, LineCap, MouseButton, Point, PointerId, PointerType,
    RecordingCanvas, Rect, Size, ThemeTokens, Widget,
};
use pillswitch_widgets::{
    render, render_sample, sample_column, PreviewHost, Switch, SwitchChanged, SwitchColors,
    DEFAULT_SIZE,
};
use proptest::prelude::*;
use std::sync::{Arc, Mutex};

fn thumb(commands: &[DrawCommand]) -> (Point, f32) {
    match commands.last() {
        Some(DrawCommand::Circle { center, radius, .. }) => (*center, *radius),
        other => panic!("expected thumb circle last, got {other:?}"),
    }
}

#[test]
fn test_default_size_checked_layout() {
    let commands = render(true, &SwitchColors::default(), DEFAULT_SIZE);
    assert_eq!(thumb(&commands), (Point::new(40.0, 16.0), 12.0));
}

#[test]
fn test_default_size_unchecked_layout() {
    let commands = render(false, &SwitchColors::default(), DEFAULT_SIZE);
    assert_eq!(thumb(&commands), (Point::new(14.0, 16.0), 12.0));
}

#[test]
fn test_border_is_round_capped_outline_of_full_surface() {
    let colors = SwitchColors::from_theme(&ThemeTokens::dark());
    let commands = render(false, &colors, DEFAULT_SIZE);
    match &commands[0] {
        DrawCommand::Rect { bounds, style, .. } => {
            assert_eq!(*bounds, Rect::from_size(DEFAULT_SIZE));
            let stroke = style.stroke.as_ref().expect("stroked");
            assert_eq!(stroke.color, colors.border_inactive);
            assert_eq!(stroke.cap, LineCap::Round);
        }
        DrawCommand::Circle { .. } => panic!("expected border"),
    }
}

#[test]
fn test_custom_size_override() {
    let commands = render(true, &SwitchColors::default(), Size::new(100.0, 50.0));
    // radius = 25 - 4 = 21, x = 100 - 21 - 2
    assert_eq!(thumb(&commands), (Point::new(77.0, 25.0), 21.0));
}

#[test]
fn test_host_round_trip_through_callback() {
    let received = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&received);

    let mut switch = Switch::new(false)
        .colors(SwitchColors::default())
        .on_checked_change(move |checked| *sink.lock().unwrap() = Some(checked));
    let size = switch.measure(Constraints::unbounded());
    switch.layout(Rect::new(100.0, 100.0, size.width, size.height));

    let pointer = Event::PointerDown {
        pointer_id: PointerId(3),
        pointer_type: PointerType::Pen,
        position: Point::new(120.0, 110.0),
        is_primary: true,
        button: None,
    };
    let msg = switch.event(&pointer).expect("inside bounds");
    assert_eq!(
        msg.downcast_ref::<SwitchChanged>(),
        Some(&SwitchChanged { checked: true })
    );
    assert_eq!(*received.lock().unwrap(), Some(true));

    // Host rebuilds with the new state.
    let mut rebuilt = Switch::new(true);
    rebuilt.layout(Rect::new(100.0, 100.0, size.width, size.height));
    let mut canvas = RecordingCanvas::new();
    rebuilt.paint(&mut canvas);
    assert_eq!(thumb(canvas.commands()), (Point::new(140.0, 116.0), 12.0));
}

#[test]
fn test_sample_column_events_reach_second_switch() {
    let mut column = sample_column(SwitchColors::default());
    let size = column.measure(Constraints::unbounded());
    column.layout(Rect::from_size(size));

    let msg = column
        .event(&Event::MouseDown {
            position: Point::new(27.0, 50.0),
            button: MouseButton::Left,
        })
        .expect("second switch hit");
    assert_eq!(
        msg.downcast_ref::<SwitchChanged>(),
        Some(&SwitchChanged { checked: true })
    );
}

#[test]
fn test_sample_render_is_deterministic() {
    let colors = SwitchColors::default();
    assert_eq!(render_sample(colors), render_sample(colors));
}

#[test]
fn test_host_frames_json_serializable() {
    let mut host = PreviewHost::new(true, SwitchColors::default(), DEFAULT_SIZE);
    let json = serde_json::to_string(&host.frame()).expect("serializable");
    assert!(json.contains("\"kind\":\"circle\""));
}

#[test]
fn test_explicit_colors_are_painted_exactly() {
    let colors = SwitchColors::new(
        Color::rgb(0.1, 0.2, 0.3),
        Color::rgb(0.4, 0.5, 0.6),
        Color::rgb(0.7, 0.8, 0.9),
        Color::rgb(0.9, 0.8, 0.7),
        Color::rgb(0.6, 0.5, 0.4),
        Color::rgb(0.3, 0.2, 0.1),
    );
    let on = render(true, &colors, DEFAULT_SIZE);
    assert_eq!(on[1].fill_color(), Some(colors.track_active));
    assert_eq!(on[2].fill_color(), Some(colors.thumb_active));

    let off = render(false, &colors, DEFAULT_SIZE);
    assert_eq!(off[1].fill_color(), Some(colors.track_inactive));
    assert_eq!(off[2].fill_color(), Some(colors.thumb_inactive));
}

proptest! {
    #[test]
    fn prop_render_idempotent(checked: bool, w in 0.0f32..300.0, h in 0.0f32..300.0) {
        let colors = SwitchColors::default();
        let size = Size::new(w, h);
        prop_assert_eq!(render(checked, &colors, size), render(checked, &colors, size));
    }

    #[test]
    fn prop_render_never_negative_radius(checked: bool, w in -50.0f32..300.0, h in -50.0f32..300.0) {
        let commands = render(checked, &SwitchColors::default(), Size::new(w, h));
        prop_assert_eq!(commands.len(), 3);
        let (_, radius) = thumb(&commands);
        prop_assert!(radius >= 0.0);
    }

    #[test]
    fn prop_activation_always_negates(checked: bool, clicks in 1usize..10) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        let mut switch = Switch::new(checked)
            .on_checked_change(move |v| sink.lock().unwrap().push(v));
        switch.layout(Rect::from_size(DEFAULT_SIZE));

        for _ in 0..clicks {
            switch.event(&Event::MouseDown {
                position: Point::new(27.0, 16.0),
                button: MouseButton::Left,
            });
        }
        prop_assert_eq!(calls.lock().unwrap().clone(), vec![!checked; clicks]);
    }
}
