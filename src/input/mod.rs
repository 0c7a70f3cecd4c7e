use egui::{Context, Pos2, Rect, Vec2};

/// Pointer activity on the drawing canvas, in buffer pixel coordinates.
///
/// Mouse and touch both arrive here: egui reports touches as a primary pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasEvent {
    /// Primary button pressed (or finger down) inside the canvas
    PointerDown(Pos2),
    /// Pointer moved while a press that started on the canvas is held
    PointerMove(Pos2),
    /// Primary button released
    PointerUp,
    /// Pointer left the canvas while pressed; ends the stroke like a release
    PointerLeave,
}

/// One frame's worth of pointer state, independent of egui
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    /// Where the pointer is, in screen coordinates
    pub pos: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
}

/// Turns raw egui pointer input into [`CanvasEvent`]s for one canvas.
#[derive(Debug, Default)]
pub struct InputHandler {
    /// A press started on the canvas and has not ended yet
    tracking: bool,
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Reads this frame's pointer state from egui.
    ///
    /// `canvas_rect` is where the canvas sits on screen, `canvas_size` the
    /// pixel size of the buffer behind it.
    pub fn process_input(
        &mut self,
        ctx: &Context,
        canvas_rect: Rect,
        canvas_size: Vec2,
    ) -> Vec<CanvasEvent> {
        let sample = ctx.input(|input| PointerSample {
            pos: input.pointer.interact_pos(),
            pressed: input.pointer.primary_pressed(),
            released: input.pointer.primary_released(),
        });
        self.process_sample(sample, canvas_rect, canvas_size)
    }

    pub fn process_sample(
        &mut self,
        sample: PointerSample,
        canvas_rect: Rect,
        canvas_size: Vec2,
    ) -> Vec<CanvasEvent> {
        let mut events = Vec::new();
        let inside_pos = sample.pos.filter(|pos| canvas_rect.contains(*pos));

        if sample.pressed {
            if let Some(pos) = inside_pos {
                events.push(CanvasEvent::PointerDown(to_canvas_coords(
                    pos,
                    canvas_rect,
                    canvas_size,
                )));
                self.tracking = true;
                self.last_pointer_pos = Some(pos);
                // A tap can press and release within one frame
                if sample.released {
                    events.push(CanvasEvent::PointerUp);
                    self.tracking = false;
                }
                return events;
            }
        }

        if !self.tracking {
            self.last_pointer_pos = sample.pos;
            return events;
        }

        match inside_pos {
            Some(pos) => {
                if self.last_pointer_pos != Some(pos) {
                    events.push(CanvasEvent::PointerMove(to_canvas_coords(
                        pos,
                        canvas_rect,
                        canvas_size,
                    )));
                    self.last_pointer_pos = Some(pos);
                }
                if sample.released {
                    events.push(CanvasEvent::PointerUp);
                    self.tracking = false;
                }
            }
            None => {
                events.push(CanvasEvent::PointerLeave);
                self.tracking = false;
                self.last_pointer_pos = sample.pos;
            }
        }

        events
    }
}

/// Maps a screen position inside `canvas_rect` to buffer pixel coordinates
pub fn to_canvas_coords(pos: Pos2, canvas_rect: Rect, canvas_size: Vec2) -> Pos2 {
    let rel = pos - canvas_rect.min;
    let scale_x = if canvas_rect.width() > 0.0 {
        canvas_size.x / canvas_rect.width()
    } else {
        1.0
    };
    let scale_y = if canvas_rect.height() > 0.0 {
        canvas_size.y / canvas_rect.height()
    } else {
        1.0
    };
    Pos2::new(rel.x * scale_x, rel.y * scale_y)
}
