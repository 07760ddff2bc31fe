// SPDX-License-Identifier: MPL-2.0
//! Animated spinner widget using Canvas for smooth rotation.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Stroke width of the spinner ring.
const RING_WIDTH: f32 = 3.0;

/// Number of line segments used to approximate the rotating arc.
const ARC_SEGMENTS: u32 = 30;

/// Animated spinner that rotates smoothly.
///
/// The rotation angle is owned by the caller and advanced on tick messages,
/// so the widget itself stays stateless between frames.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32, // Rotation angle in radians
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a new animated spinner with the given color and rotation angle.
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    /// Overrides the default diameter.
    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - 4.0;

                // Faint full ring underneath the moving arc
                let ring = Path::circle(center, radius);
                frame.stroke(
                    &ring,
                    Stroke::default().with_width(RING_WIDTH).with_color(Color {
                        a: 0.25,
                        ..self.color
                    }),
                );

                // Rotating 180° arc, approximated with short line segments
                let start_angle = self.rotation - PI / 2.0; // start at the top
                let end_angle = start_angle + PI;

                let mut arc_path = canvas::path::Builder::new();
                let start = Point::new(
                    center.x + radius * start_angle.cos(),
                    center.y + radius * start_angle.sin(),
                );
                arc_path.move_to(start);

                for i in 1..=ARC_SEGMENTS {
                    let t = i as f32 / ARC_SEGMENTS as f32;
                    let angle = start_angle + (end_angle - start_angle) * t;
                    arc_path.line_to(Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    ));
                }

                frame.stroke(
                    &arc_path.build(),
                    Stroke::default()
                        .with_width(RING_WIDTH)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
