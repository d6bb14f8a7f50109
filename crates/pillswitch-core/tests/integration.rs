//! Integration tests for pillswitch-core.
//!
//! These tests verify the public API works correctly end-to-end.

use pillswitch_core::{
    Canvas, Color, Constraints, CornerRadius, DrawCommand, LineCap, Point, RecordingCanvas, Rect,
    Size, StrokeStyle, ThemeTokens,
};
use std::io::Write;

// =============================================================================
// Color Integration Tests
// =============================================================================

#[test]
fn test_color_roundtrip_hex() {
    let original = Color::rgb(0.5, 0.25, 0.75);
    let parsed = Color::from_hex(&original.to_hex()).expect("valid hex");

    // Allow small rounding differences
    assert!((original.r - parsed.r).abs() < 0.01);
    assert!((original.g - parsed.g).abs() < 0.01);
    assert!((original.b - parsed.b).abs() < 0.01);
}

// =============================================================================
// Canvas Integration Tests
// =============================================================================

#[test]
fn test_pill_painted_through_canvas_trait() {
    let mut recording = RecordingCanvas::new();
    let canvas: &mut dyn Canvas = &mut recording;
    let bounds = Rect::from_size(Size::new(54.0, 32.0));

    canvas.stroke_rounded_rect(
        bounds,
        CornerRadius::uniform(100.0),
        &StrokeStyle::new(Color::BLACK, 1.0).with_cap(LineCap::Round),
    );
    canvas.fill_rounded_rect(bounds.inset(1.0), CornerRadius::uniform(100.0), Color::WHITE);
    canvas.fill_circle(Point::new(14.0, 16.0), 12.0, Color::BLACK);

    let commands = recording.commands();
    assert_eq!(commands.len(), 3);
    match &commands[1] {
        DrawCommand::Rect { bounds, radius, .. } => {
            assert_eq!(*bounds, Rect::new(1.0, 1.0, 52.0, 30.0));
            assert_eq!(radius.clamped_to(bounds.size()), CornerRadius::uniform(15.0));
        }
        DrawCommand::Circle { .. } => panic!("expected track rect"),
    }
}

#[test]
fn test_commands_serialize_to_json() {
    let mut canvas = RecordingCanvas::new();
    canvas.fill_circle(Point::new(40.0, 16.0), 12.0, Color::WHITE);

    let json = serde_json::to_string(canvas.commands()).expect("serializable");
    let back: Vec<DrawCommand> = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(back, canvas.commands());
}

// =============================================================================
// Layout Integration Tests
// =============================================================================

#[test]
fn test_constraints_bound_default_switch_size() {
    let preferred = Size::new(54.0, 32.0);
    assert_eq!(Constraints::unbounded().constrain(preferred), preferred);
    assert_eq!(
        Constraints::loose(Size::new(30.0, 20.0)).constrain(preferred),
        Size::new(30.0, 20.0)
    );
}

// =============================================================================
// Theme Integration Tests
// =============================================================================

#[test]
fn test_theme_load_from_file() {
    let path = std::env::temp_dir().join(format!(
        "pillswitch-theme-{}.toml",
        std::process::id()
    ));
    {
        let mut file = std::fs::File::create(&path).expect("create temp theme");
        writeln!(file, "base = \"dark\"").expect("write");
        writeln!(file, "content_accent_secondary = \"#123456\"").expect("write");
    }

    let tokens = ThemeTokens::load(&path).expect("theme loads");
    std::fs::remove_file(&path).ok();

    assert_eq!(tokens.content_accent_secondary.to_hex(), "#123456");
    assert_eq!(tokens.button_primary_bg, ThemeTokens::dark().button_primary_bg);
}
