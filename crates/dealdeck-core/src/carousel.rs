//! Headless state machine for the 360° product viewer
//!
//! The DOM component translates browser events into [`GestureEvent`]s and
//! renders whatever index the machine reports. All transition rules live here
//! so they can be tested natively.

/// Horizontal distance (px) a drag must exceed before it counts as a swipe step.
pub const DRAG_THRESHOLD: f64 = 30.0;

/// Navigation direction for a single carousel step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Drag gesture state. `last_x` is rebased after every emitted step so one
/// continuous drag can step through multiple images.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Dragging { last_x: f64 },
}

/// Pointer input, normalized across mouse and touch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    PointerDown(f64),
    PointerMove(f64),
    PointerUp,
}

/// One viewer's worth of carousel state.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    len: usize,
    current: usize,
    animating: bool,
    drag: DragState,
    threshold: f64,
}

impl Carousel {
    /// Returns `None` for an empty image list; such a viewer stays inert.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self {
            len,
            current: 0,
            animating: false,
            drag: DragState::Idle,
            threshold: DRAG_THRESHOLD,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Position indicator text, e.g. `"2/4"`.
    pub fn indicator(&self) -> String {
        format!("{}/{}", self.current + 1, self.len)
    }

    /// Step one image in `dir`, wrapping at both ends. Returns the new index,
    /// or `None` while the animating guard is held.
    pub fn advance(&mut self, dir: Direction) -> Option<usize> {
        let target = match dir {
            Direction::Next => (self.current + 1) % self.len,
            Direction::Prev => (self.current + self.len - 1) % self.len,
        };
        self.show(target)
    }

    /// Jump to an explicit index. Out-of-range or mid-animation requests are
    /// silently ignored.
    pub fn jump_to(&mut self, index: usize) -> Option<usize> {
        self.show(index)
    }

    fn show(&mut self, index: usize) -> Option<usize> {
        if self.animating || index >= self.len {
            return None;
        }
        self.current = index;
        self.animating = true;
        Some(index)
    }

    /// Release the animating guard. The component calls this from the settle
    /// timer a few tens of milliseconds after each transition.
    pub fn settle(&mut self) {
        self.animating = false;
    }

    /// Feed a pointer event through the Idle/Dragging machine. Returns the new
    /// index when the event produced a visible step.
    ///
    /// A move past the threshold rebases `last_x` even when the step itself is
    /// swallowed by the animating guard, matching how repeated swipes behave
    /// mid-transition.
    pub fn handle(&mut self, ev: GestureEvent) -> Option<usize> {
        match ev {
            GestureEvent::PointerDown(x) => {
                self.drag = DragState::Dragging { last_x: x };
                None
            }
            GestureEvent::PointerMove(x) => {
                let DragState::Dragging { last_x } = self.drag else {
                    return None;
                };
                let dx = x - last_x;
                if dx.abs() > self.threshold {
                    self.drag = DragState::Dragging { last_x: x };
                    // Drag right reveals the previous image, drag left the next.
                    let dir = if dx > 0.0 { Direction::Prev } else { Direction::Next };
                    self.advance(dir)
                } else {
                    None
                }
            }
            GestureEvent::PointerUp => {
                // No pending step is forced on release.
                self.drag = DragState::Idle;
                None
            }
        }
    }
}

/// Arrow keys only drive the viewer while nothing interactive holds focus,
/// i.e. the active element is the document body (or there is none).
pub fn arrow_keys_enabled(active_tag: Option<&str>) -> bool {
    active_tag.is_none_or(|tag| tag.eq_ignore_ascii_case("body"))
}

/// Map a DOM key name to a carousel step.
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowLeft" => Some(Direction::Prev),
        "ArrowRight" => Some(Direction::Next),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stepped(c: &mut Carousel, dir: Direction) -> usize {
        let idx = c.advance(dir).expect("advance should succeed");
        c.settle();
        idx
    }

    #[test]
    fn test_empty_list_is_rejected() {
        assert!(Carousel::new(0).is_none());
    }

    #[test]
    fn test_starts_at_first_image() {
        let c = Carousel::new(4).unwrap();
        assert_eq!(c.current(), 0);
        assert_eq!(c.indicator(), "1/4");
        assert!(!c.is_animating());
    }

    #[test]
    fn test_wraps_both_directions() {
        let mut c = Carousel::new(3).unwrap();
        assert_eq!(stepped(&mut c, Direction::Prev), 2); // 0 -> N-1
        assert_eq!(stepped(&mut c, Direction::Next), 0); // N-1 -> 0
    }

    #[test]
    fn test_single_image_wraps_to_itself() {
        let mut c = Carousel::new(1).unwrap();
        assert_eq!(stepped(&mut c, Direction::Next), 0);
        assert_eq!(c.indicator(), "1/1");
    }

    #[test]
    fn test_animating_guard_blocks_advance() {
        let mut c = Carousel::new(3).unwrap();
        assert_eq!(c.advance(Direction::Next), Some(1));
        // Guard still held: further requests are dropped.
        assert_eq!(c.advance(Direction::Next), None);
        assert_eq!(c.current(), 1);
        c.settle();
        assert_eq!(c.advance(Direction::Next), Some(2));
    }

    #[test]
    fn test_jump_to_out_of_range_is_ignored() {
        let mut c = Carousel::new(3).unwrap();
        assert_eq!(c.jump_to(3), None);
        assert_eq!(c.jump_to(99), None);
        assert_eq!(c.current(), 0);
        assert_eq!(c.jump_to(2), Some(2));
    }

    #[test]
    fn test_jump_to_blocked_while_animating() {
        let mut c = Carousel::new(3).unwrap();
        c.advance(Direction::Next);
        assert_eq!(c.jump_to(0), None);
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn test_sub_threshold_drag_produces_no_step() {
        let mut c = Carousel::new(5).unwrap();
        c.handle(GestureEvent::PointerDown(100.0));
        // Three 10px moves in the same direction: each delta from the last
        // recorded x is 10, 20, 30 - never strictly greater than 30.
        assert_eq!(c.handle(GestureEvent::PointerMove(110.0)), None);
        assert_eq!(c.handle(GestureEvent::PointerMove(120.0)), None);
        assert_eq!(c.handle(GestureEvent::PointerMove(130.0)), None);
        c.handle(GestureEvent::PointerUp);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut c = Carousel::new(5).unwrap();
        c.handle(GestureEvent::PointerDown(0.0));
        // Exactly 30px is not enough: the comparison is strict.
        assert_eq!(c.handle(GestureEvent::PointerMove(-30.0)), None);
        c.handle(GestureEvent::PointerUp);
        c.handle(GestureEvent::PointerDown(0.0));
        // One more pixel crosses it.
        assert_eq!(c.handle(GestureEvent::PointerMove(-31.0)), Some(1));
    }

    #[test]
    fn test_drag_direction_mapping() {
        // Drag right -> previous, drag left -> next.
        let mut c = Carousel::new(4).unwrap();
        c.handle(GestureEvent::PointerDown(200.0));
        assert_eq!(c.handle(GestureEvent::PointerMove(240.0)), Some(3));
        c.settle();
        c.handle(GestureEvent::PointerUp);

        let mut c = Carousel::new(4).unwrap();
        c.handle(GestureEvent::PointerDown(200.0));
        assert_eq!(c.handle(GestureEvent::PointerMove(160.0)), Some(1));
    }

    #[test]
    fn test_continuous_drag_steps_multiple_times() {
        let mut c = Carousel::new(10).unwrap();
        c.handle(GestureEvent::PointerDown(0.0));
        assert_eq!(c.handle(GestureEvent::PointerMove(-40.0)), Some(1));
        c.settle();
        // last_x was rebased to -40, so another 40px continues the swipe.
        assert_eq!(c.handle(GestureEvent::PointerMove(-80.0)), Some(2));
        c.settle();
        c.handle(GestureEvent::PointerUp);
        assert_eq!(c.current(), 2);
        assert!(!c.is_dragging());
    }

    #[test]
    fn test_move_without_down_is_ignored() {
        let mut c = Carousel::new(3).unwrap();
        assert_eq!(c.handle(GestureEvent::PointerMove(500.0)), None);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_release_never_forces_a_step() {
        let mut c = Carousel::new(3).unwrap();
        c.handle(GestureEvent::PointerDown(0.0));
        c.handle(GestureEvent::PointerMove(29.0));
        assert_eq!(c.handle(GestureEvent::PointerUp), None);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_indicator_walkthrough() {
        // ["a.jpg", "b.jpg", "c.jpg"]: a -> b, then wrap past c and a back to b.
        let mut c = Carousel::new(3).unwrap();
        assert_eq!(c.indicator(), "1/3");
        assert_eq!(stepped(&mut c, Direction::Next), 1);
        assert_eq!(c.indicator(), "2/3");
        stepped(&mut c, Direction::Next);
        stepped(&mut c, Direction::Next);
        assert_eq!(c.current(), 0);
        assert_eq!(stepped(&mut c, Direction::Next), 1);
        assert_eq!(c.indicator(), "2/3");
    }

    #[test]
    fn test_arrow_key_gating() {
        assert!(arrow_keys_enabled(None));
        assert!(arrow_keys_enabled(Some("BODY")));
        assert!(arrow_keys_enabled(Some("body")));
        assert!(!arrow_keys_enabled(Some("INPUT")));
        assert!(!arrow_keys_enabled(Some("TEXTAREA")));
    }

    #[test]
    fn test_direction_for_key() {
        assert_eq!(direction_for_key("ArrowLeft"), Some(Direction::Prev));
        assert_eq!(direction_for_key("ArrowRight"), Some(Direction::Next));
        assert_eq!(direction_for_key("Enter"), None);
    }
}
