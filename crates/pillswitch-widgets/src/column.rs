//! Column widget for vertical layout.

use pillswitch_core::{
    widget::LayoutResult, Canvas, Constraints, Event, Rect, Size, TypeId, Widget,
};
use std::any::Any;

/// Column widget stacking children top to bottom, left aligned, with no
/// spacing between them.
#[derive(Default)]
pub struct Column {
    /// Children widgets
    children: Vec<Box<dyn Widget>>,
    /// Cached bounds
    bounds: Rect,
    /// Cached child positions
    child_bounds: Vec<Rect>,
}

impl Column {
    /// Create a new empty column.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child widget.
    #[must_use]
    pub fn child(mut self, widget: impl Widget + 'static) -> Self {
        self.children.push(Box::new(widget));
        self
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check if the column has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Bounds assigned to each child by the last layout.
    #[must_use]
    pub fn child_bounds(&self) -> &[Rect] {
        &self.child_bounds
    }
}

impl Widget for Column {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        if self.children.is_empty() {
            return Size::ZERO;
        }

        let mut max_width = 0.0f32;
        let mut total_height = 0.0f32;

        for child in &self.children {
            let child_constraints = Constraints::new(
                0.0,
                constraints.max_width,
                0.0,
                (constraints.max_height - total_height).max(0.0),
            );

            let child_size = child.measure(child_constraints);
            max_width = max_width.max(child_size.width);
            total_height += child_size.height;
        }

        constraints.constrain(Size::new(max_width, total_height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        self.child_bounds.clear();

        let mut y = bounds.y;
        for child in &mut self.children {
            let size = child.measure(Constraints::loose(bounds.size()));
            let child_bounds = Rect::new(bounds.x, y, size.width, size.height);
            child.layout(child_bounds);
            self.child_bounds.push(child_bounds);
            y += size.height;
        }

        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        for child in &self.children {
            child.paint(canvas);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        for child in &mut self.children {
            if let Some(msg) = child.event(event) {
                return Some(msg);
            }
        }
        None
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
