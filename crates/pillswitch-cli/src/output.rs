//! Text and JSON rendering of draw commands.

use pillswitch_core::{BoxStyle, CornerRadius, DrawCommand};

/// Output format for draw commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub(crate) enum Format {
    /// One command per line
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
}

pub(crate) fn format_commands(
    commands: &[DrawCommand],
    format: Format,
) -> Result<String, serde_json::Error> {
    match format {
        Format::Json => serde_json::to_string_pretty(commands),
        Format::Text => Ok(commands
            .iter()
            .map(format_command)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn format_command(command: &DrawCommand) -> String {
    match command {
        DrawCommand::Rect {
            bounds,
            radius,
            style,
        } => format!(
            "rect   x={} y={} w={} h={} radius={} {}",
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height,
            format_radius(radius),
            format_style(style)
        ),
        DrawCommand::Circle {
            center,
            radius,
            style,
        } => format!(
            "circle cx={} cy={} r={} {}",
            center.x,
            center.y,
            radius,
            format_style(style)
        ),
    }
}

fn format_radius(radius: &CornerRadius) -> String {
    if radius.is_uniform() {
        radius.top_left.to_string()
    } else {
        format!(
            "{},{},{},{}",
            radius.top_left, radius.top_right, radius.bottom_right, radius.bottom_left
        )
    }
}

fn format_style(style: &BoxStyle) -> String {
    let mut parts = Vec::new();
    if let Some(fill) = style.fill {
        parts.push(format!("fill={}", fill.to_hex_with_alpha()));
    }
    if let Some(stroke) = &style.stroke {
        parts.push(format!(
            "stroke={} width={} cap={:?}",
            stroke.color.to_hex_with_alpha(),
            stroke.width,
            stroke.cap
        ));
    }
    parts.join(" ")
}
