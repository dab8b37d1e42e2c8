// SPDX-License-Identifier: MPL-2.0
//! Dual-handle range slider widget.
//!
//! Draws a horizontal track with two circular thumbs and publishes the new
//! [`RangeValues`] through `on_change` whenever a drag moves a thumb. The
//! widget never owns the values: the caller stores what `on_change` reports
//! and hands them back on the next `view`.

use crate::domain::slider::{gesture, CrossingPolicy, RangeValues, SliderRange, Thumb, TrackGeometry};
use crate::ui::design_tokens::sizing;
use crate::ui::state::drag::{thumb_at, DragSession, DragState};
use crate::ui::styles::range_slider::{self as style, Status, Style};
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{touch, Border, Element, Event, Length, Pixels, Rectangle, Size, Theme};

type StyleFn<'a> = Box<dyn Fn(&Theme, Status) -> Style + 'a>;

/// A horizontal slider selecting a sub-range `[lower, upper]` of a [`SliderRange`].
///
/// # Example
///
/// ```no_run
/// use ::range_slider::domain::slider::{RangeValues, SliderRange};
/// use ::range_slider::ui::widgets::range_slider;
///
/// #[derive(Debug, Clone)]
/// enum Message {
///     RangeChanged(RangeValues),
/// }
///
/// let range = SliderRange::new(0.0, 100.0).unwrap();
/// let values = RangeValues::new(0.0, 50.0);
/// let slider = range_slider(range, values, Message::RangeChanged);
/// ```
pub struct RangeSlider<'a, Message> {
    range: SliderRange,
    values: RangeValues,
    on_change: Box<dyn Fn(RangeValues) -> Message + 'a>,
    on_release: Option<Message>,
    width: Length,
    height: f32,
    thumb_size: f32,
    rail_height: f32,
    crossing: CrossingPolicy,
    style: StyleFn<'a>,
}

impl<'a, Message> RangeSlider<'a, Message> {
    /// Creates a slider over `range` showing `values`.
    ///
    /// `on_change` is called with the full pair every time a drag moves a thumb.
    pub fn new<F>(range: SliderRange, values: RangeValues, on_change: F) -> Self
    where
        F: 'a + Fn(RangeValues) -> Message,
    {
        Self {
            range,
            values,
            on_change: Box::new(on_change),
            on_release: None,
            width: Length::Fill,
            height: sizing::RANGE_SLIDER_HEIGHT,
            thumb_size: sizing::THUMB,
            rail_height: sizing::RAIL_HEIGHT,
            crossing: CrossingPolicy::default(),
            style: Box::new(style::default),
        }
    }

    /// Message published when the pointer is released after a drag.
    #[must_use]
    pub fn on_release(mut self, message: Message) -> Self {
        self.on_release = Some(message);
        self
    }

    #[must_use]
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    #[must_use]
    pub fn height(mut self, height: impl Into<Pixels>) -> Self {
        self.height = height.into().0;
        self
    }

    /// Sets the thumb diameter (never smaller than [`sizing::MIN_THUMB`]).
    #[must_use]
    pub fn thumb_size(mut self, size: impl Into<Pixels>) -> Self {
        self.thumb_size = size.into().0.max(sizing::MIN_THUMB);
        self
    }

    #[must_use]
    pub fn rail_height(mut self, height: impl Into<Pixels>) -> Self {
        self.rail_height = height.into().0.max(1.0);
        self
    }

    /// Chooses what a thumb does when dragged past its sibling's limit.
    #[must_use]
    pub fn crossing(mut self, policy: CrossingPolicy) -> Self {
        self.crossing = policy;
        self
    }

    #[must_use]
    pub fn style(mut self, style: impl Fn(&Theme, Status) -> Style + 'a) -> Self {
        self.style = Box::new(style);
        self
    }

    fn geometry(&self, bounds: Rectangle) -> TrackGeometry {
        TrackGeometry::from_total_width(bounds.width, self.thumb_size)
    }

    /// Track-local centers of the lower and upper thumbs.
    fn thumb_locations(&self, geometry: &TrackGeometry) -> (f32, f32) {
        (
            geometry.location_for_value(&self.range, self.values.lower),
            geometry.location_for_value(&self.range, self.values.upper),
        )
    }

    fn thumb_under_cursor(&self, bounds: Rectangle, cursor: mouse::Cursor) -> Option<Thumb> {
        let position = cursor.position_over(bounds)?;
        let geometry = self.geometry(bounds);
        if geometry.is_degenerate() {
            return None;
        }
        let (lower, upper) = self.thumb_locations(&geometry);
        let x = position.x - (bounds.x + geometry.thumb_offset());
        thumb_at(x, lower, upper, self.thumb_size)
    }

    /// Feeds one pointer sample to the active gesture. Returns the new values
    /// when they differ from the current ones.
    fn apply_sample(&self, session: &DragSession, cursor_x: f32) -> Option<RangeValues> {
        let mut values = self.values;
        let outcome = gesture::drag(
            session.thumb,
            &mut values,
            session.track_offset(cursor_x),
            &self.range,
            &session.geometry,
            self.crossing,
        );
        (outcome.is_update() && values != self.values).then_some(values)
    }

    /// Starts a gesture when `cursor` is over a thumb.
    fn press(
        &self,
        tree: &mut widget::Tree,
        bounds: Rectangle,
        cursor: mouse::Cursor,
        shell: &mut Shell<'_, Message>,
    ) {
        let Some(thumb) = self.thumb_under_cursor(bounds, cursor) else {
            return;
        };
        let geometry = self.geometry(bounds);
        let state = tree.state.downcast_mut::<DragState>();
        state.start(thumb, geometry, bounds.x + geometry.thumb_offset());
        tracing::debug!(
            ?thumb,
            track_width = geometry.track_width,
            "range slider drag started"
        );
        shell.capture_event();
    }

    fn status(&self, state: &DragState, bounds: Rectangle, cursor: mouse::Cursor) -> Status {
        if state.is_dragging() {
            Status::Dragged
        } else if self.thumb_under_cursor(bounds, cursor).is_some() {
            Status::Hovered
        } else {
            Status::Active
        }
    }
}

impl<Message, Renderer> Widget<Message, Theme, Renderer> for RangeSlider<'_, Message>
where
    Message: Clone,
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<DragState>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(DragState::default())
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: self.width,
            height: Length::Fixed(self.height),
        }
    }

    fn layout(
        &mut self,
        _tree: &mut widget::Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::atomic(limits, self.width, self.height)
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                self.press(tree, bounds, cursor, shell);
            }
            Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                self.press(tree, bounds, mouse::Cursor::Available(*position), shell);
            }
            Event::Mouse(mouse::Event::CursorMoved { position })
            | Event::Touch(touch::Event::FingerMoved { position, .. }) => {
                let state = tree.state.downcast_ref::<DragState>();
                let Some(session) = state.session() else {
                    return;
                };
                if let Some(values) = self.apply_sample(&session, position.x) {
                    self.values = values;
                    shell.publish((self.on_change)(values));
                }
                shell.capture_event();
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. }) => {
                let state = tree.state.downcast_mut::<DragState>();
                if state.is_dragging() {
                    state.stop();
                    tracing::debug!(
                        lower = self.values.lower,
                        upper = self.values.upper,
                        "range slider drag ended"
                    );
                    if let Some(message) = self.on_release.clone() {
                        shell.publish(message);
                    }
                    shell.capture_event();
                }
            }
            _ => {}
        }
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let state = tree.state.downcast_ref::<DragState>();
        let style = (self.style)(theme, self.status(state, bounds, cursor));

        let geometry = self.geometry(bounds);
        let (lower, upper) = self.thumb_locations(&geometry);
        let track_start = bounds.x + geometry.thumb_offset();
        let center_y = bounds.center_y();
        let rail_top = center_y - self.rail_height / 2.0;
        let rail_border = Border {
            radius: style.rail_radius.into(),
            ..Border::default()
        };

        // Background track
        renderer.fill_quad(
            renderer::Quad {
                bounds: Rectangle {
                    x: track_start,
                    y: rail_top,
                    width: geometry.track_width,
                    height: self.rail_height,
                },
                border: rail_border,
                ..renderer::Quad::default()
            },
            style.rail,
        );

        // Selected sub-range
        renderer.fill_quad(
            renderer::Quad {
                bounds: Rectangle {
                    x: track_start + lower,
                    y: rail_top,
                    width: (upper - lower).max(0.0),
                    height: self.rail_height,
                },
                border: rail_border,
                ..renderer::Quad::default()
            },
            style.selection,
        );

        let radius = self.thumb_size / 2.0;
        for location in [lower, upper] {
            renderer.fill_quad(
                renderer::Quad {
                    bounds: Rectangle {
                        x: track_start + location - radius,
                        y: center_y - radius,
                        width: self.thumb_size,
                        height: self.thumb_size,
                    },
                    border: Border {
                        color: style.thumb_border_color,
                        width: style.thumb_border_width,
                        radius: radius.into(),
                    },
                    shadow: style.thumb_shadow,
                    ..renderer::Quad::default()
                },
                style.thumb,
            );
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<DragState>();
        match self.status(state, layout.bounds(), cursor) {
            Status::Dragged => mouse::Interaction::Grabbing,
            Status::Hovered => mouse::Interaction::Grab,
            Status::Active => mouse::Interaction::default(),
        }
    }
}

impl<'a, Message, Renderer> From<RangeSlider<'a, Message>> for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(slider: RangeSlider<'a, Message>) -> Self {
        Self::new(slider)
    }
}

/// Helper function to create a [`RangeSlider`].
pub fn range_slider<'a, Message>(
    range: SliderRange,
    values: RangeValues,
    on_change: impl Fn(RangeValues) -> Message + 'a,
) -> RangeSlider<'a, Message> {
    RangeSlider::new(range, values, on_change)
}
