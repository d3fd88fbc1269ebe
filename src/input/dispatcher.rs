use macroquad::prelude::*;

use crate::rendering::surface::Surface;
use crate::state::GridCanvas;

/// Pointer and touch input unified into one press/move/release gesture
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    PressStart(Vec2),
    Move(Vec2),
    PressEnd,
}

/// Turns per-frame mouse and touch state into pointer events.
///
/// Only one touch drives the canvas at a time: the first one that started
/// while no other touch was active.
#[derive(Debug, Default)]
pub struct InputTracker {
    active_touch: Option<u64>,
    last_mouse: Option<Vec2>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this frame's input from macroquad
    pub fn poll(&mut self) -> Vec<PointerEvent> {
        let mut events = self.touch_events(&touches());
        events.extend(self.mouse_events(
            is_mouse_button_pressed(MouseButton::Left),
            is_mouse_button_released(MouseButton::Left),
            Vec2::from(mouse_position()),
        ));
        events
    }

    pub fn mouse_events(&mut self, pressed: bool, released: bool, pos: Vec2) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let moved = self.last_mouse != Some(pos);
        self.last_mouse = Some(pos);

        if pressed {
            events.push(PointerEvent::PressStart(pos));
        } else if moved {
            events.push(PointerEvent::Move(pos));
        }

        if released {
            events.push(PointerEvent::PressEnd);
        }
        events
    }

    pub fn touch_events(&mut self, touches: &[Touch]) -> Vec<PointerEvent> {
        let mut events = Vec::new();

        if let Some(id) = self.active_touch {
            match touches.iter().find(|t| t.id == id) {
                Some(touch) => match touch.phase {
                    TouchPhase::Moved => events.push(PointerEvent::Move(touch.position)),
                    TouchPhase::Ended | TouchPhase::Cancelled => {
                        events.push(PointerEvent::PressEnd);
                        self.active_touch = None;
                    }
                    TouchPhase::Started | TouchPhase::Stationary => {}
                },
                None => {
                    // Lost track of the touch, never leave the press hanging
                    events.push(PointerEvent::PressEnd);
                    self.active_touch = None;
                }
            }
            if self.active_touch.is_some() {
                return events;
            }
        }

        // A touch starting in the frame the previous one ended takes over
        if let Some(touch) = touches.iter().find(|t| matches!(t.phase, TouchPhase::Started)) {
            self.active_touch = Some(touch.id);
            events.push(PointerEvent::PressStart(touch.position));
        }
        events
    }
}

/// Feed events to the canvas in order.
///
/// A press only starts a stroke when it lands on the surface; moves and
/// releases are always forwarded so a release outside the surface still ends
/// the stroke.
pub fn dispatch<S: Surface>(canvas: &mut GridCanvas<S>, events: &[PointerEvent]) {
    for event in events {
        match *event {
            PointerEvent::PressStart(pos) => {
                if canvas.screen_rect().contains(pos) {
                    canvas.on_press_start(pos);
                }
            }
            PointerEvent::Move(pos) => canvas.on_move(pos),
            PointerEvent::PressEnd => canvas.on_press_end(),
        }
    }
}
