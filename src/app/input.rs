use crate::renderer::camera::{CameraController, Movement};
use winit::keyboard::{Key, NamedKey};

/// What a key press asks the viewer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Movement),
    NightMode,
    DayMode,
    Quit,
}

pub fn command_for_key(key: &Key) -> Option<Command> {
    match key {
        Key::Named(NamedKey::Escape) => Some(Command::Quit),
        Key::Character(c) => match c.to_lowercase().as_str() {
            "w" => Some(Command::Move(Movement::Forward)),
            "s" => Some(Command::Move(Movement::Backward)),
            "a" => Some(Command::Move(Movement::Left)),
            "d" => Some(Command::Move(Movement::Right)),
            "n" => Some(Command::NightMode),
            "m" => Some(Command::DayMode),
            _ => None,
        },
        _ => None,
    }
}

/// Movement keys currently held down.
///
/// Key repeats only re-press a direction that is already held, so the distance
/// covered depends on how long a key is down, not on the OS repeat rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldMoves {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
}

impl HeldMoves {
    fn slot(&mut self, direction: Movement) -> &mut bool {
        match direction {
            Movement::Forward => &mut self.forward,
            Movement::Backward => &mut self.backward,
            Movement::Left => &mut self.left,
            Movement::Right => &mut self.right,
        }
    }

    pub fn press(&mut self, direction: Movement) {
        *self.slot(direction) = true;
    }

    pub fn release(&mut self, direction: Movement) {
        *self.slot(direction) = false;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn iter(&self) -> impl Iterator<Item = Movement> + '_ {
        [
            (self.forward, Movement::Forward),
            (self.backward, Movement::Backward),
            (self.left, Movement::Left),
            (self.right, Movement::Right),
        ]
        .into_iter()
        .filter_map(|(held, direction)| held.then_some(direction))
    }

    /// Steps the camera once per held direction for a frame of `delta_time`
    /// seconds.
    pub fn drive(&self, controller: &mut CameraController, delta_time: f32) {
        for direction in self.iter() {
            controller.step(direction, delta_time);
        }
    }
}

/// Turns absolute pointer positions into look offsets.
///
/// After every read the reference point snaps back to `origin`, matching a
/// cursor that is warped to the window centre after each move. Where the
/// cursor cannot be warped the tracker is switched to `locked`, and look
/// offsets come from raw mouse motion instead.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    origin: (f64, f64),
    last: (f64, f64),
    first: bool,
    locked: bool,
}

impl PointerTracker {
    pub fn new(origin: (f64, f64)) -> Self {
        Self {
            origin,
            last: origin,
            first: true,
            locked: false,
        }
    }

    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Look offsets from a raw motion delta, only while locked.
    pub fn motion(&self, delta: (f64, f64)) -> Option<(f32, f32)> {
        self.locked.then(|| (delta.0 as f32, -delta.1 as f32))
    }

    pub fn origin(&self) -> (f64, f64) {
        self.origin
    }

    pub fn set_origin(&mut self, origin: (f64, f64)) {
        self.origin = origin;
        self.last = origin;
    }

    /// Offsets since the last read, with y flipped so up is positive.
    pub fn offsets(&mut self, position: (f64, f64)) -> (f32, f32) {
        if self.first {
            self.last = position;
            self.first = false;
        }
        let x_offset = (position.0 - self.last.0) as f32;
        let y_offset = (self.last.1 - position.1) as f32;
        self.last = self.origin;
        (x_offset, y_offset)
    }
}

/// Degrees of model spin for a drag sample at `x` in a window `width` wide.
pub fn drag_rotation(x: f64, width: f64) -> f32 {
    ((x - width / 2.0) * 0.1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::camera::{CameraState, Profile};
    use nalgebra_glm as glm;
    use winit::keyboard::SmolStr;

    fn char_key(c: &str) -> Key {
        Key::Character(SmolStr::new(c))
    }

    #[test]
    fn wasd_moves_and_escape_quits() {
        assert_eq!(
            command_for_key(&char_key("w")),
            Some(Command::Move(Movement::Forward))
        );
        assert_eq!(
            command_for_key(&char_key("S")),
            Some(Command::Move(Movement::Backward))
        );
        assert_eq!(
            command_for_key(&char_key("a")),
            Some(Command::Move(Movement::Left))
        );
        assert_eq!(
            command_for_key(&char_key("d")),
            Some(Command::Move(Movement::Right))
        );
        assert_eq!(command_for_key(&char_key("n")), Some(Command::NightMode));
        assert_eq!(command_for_key(&char_key("m")), Some(Command::DayMode));
        assert_eq!(
            command_for_key(&Key::Named(NamedKey::Escape)),
            Some(Command::Quit)
        );
        assert_eq!(command_for_key(&char_key("q")), None);
        assert_eq!(command_for_key(&Key::Named(NamedKey::Enter)), None);
    }

    #[test]
    fn first_sample_gives_no_offset() {
        let mut tracker = PointerTracker::new((300.0, 300.0));
        assert_eq!(tracker.offsets((120.0, 80.0)), (0.0, 0.0));
    }

    #[test]
    fn offsets_are_measured_from_origin_after_first_read() {
        let mut tracker = PointerTracker::new((300.0, 300.0));
        tracker.offsets((100.0, 100.0));
        assert_eq!(tracker.offsets((310.0, 290.0)), (10.0, 10.0));
        assert_eq!(tracker.offsets((300.0, 305.0)), (0.0, -5.0));
    }

    #[test]
    fn moving_origin_resets_reference() {
        let mut tracker = PointerTracker::new((300.0, 300.0));
        tracker.offsets((300.0, 300.0));
        tracker.set_origin((400.0, 200.0));
        assert_eq!(tracker.origin(), (400.0, 200.0));
        assert_eq!(tracker.offsets((401.0, 200.0)), (1.0, 0.0));
    }

    #[test]
    fn raw_motion_only_counts_once_locked() {
        let mut tracker = PointerTracker::new((300.0, 300.0));
        assert_eq!(tracker.motion((4.0, 2.0)), None);

        tracker.lock();
        assert!(tracker.is_locked());
        assert_eq!(tracker.motion((4.0, 2.0)), Some((4.0, -2.0)));
    }

    #[test]
    fn repeats_do_not_stack_held_moves() {
        let mut held = HeldMoves::default();
        held.press(Movement::Forward);
        held.press(Movement::Forward);
        held.press(Movement::Left);
        assert_eq!(
            held.iter().collect::<Vec<_>>(),
            vec![Movement::Forward, Movement::Left]
        );

        held.release(Movement::Forward);
        assert_eq!(held.iter().collect::<Vec<_>>(), vec![Movement::Left]);
        held.clear();
        assert_eq!(held, HeldMoves::default());
    }

    fn forward_distance(frames: u32, delta_time: f32) -> f32 {
        let mut state = CameraState::at(glm::vec3(0.0, 0.0, 3.0));
        state.movement_speed = 12.0;
        let mut controller = CameraController::new(state, Profile::Bounded);

        let mut held = HeldMoves::default();
        held.press(Movement::Forward);
        for _ in 0..frames {
            held.drive(&mut controller, delta_time);
        }
        3.0 - controller.position().z
    }

    #[test]
    fn held_keys_cover_the_same_ground_at_any_frame_rate() {
        let slow = forward_distance(60, 1.0 / 60.0);
        let fast = forward_distance(240, 1.0 / 240.0);
        assert!((slow - 12.0).abs() < 1e-3, "slow={slow}");
        assert!((fast - 12.0).abs() < 1e-3, "fast={fast}");
    }

    #[test]
    fn nothing_held_means_no_movement() {
        assert_eq!(forward_distance(0, 1.0), 0.0);
        let mut controller = CameraController::new(CameraState::default(), Profile::Bounded);
        let before = controller.position();
        HeldMoves::default().drive(&mut controller, 1.0);
        assert_eq!(controller.position(), before);
    }

    #[test]
    fn drag_rotation_is_relative_to_centre() {
        assert_eq!(drag_rotation(300.0, 600.0), 0.0);
        assert_eq!(drag_rotation(400.0, 600.0), 10.0);
        assert_eq!(drag_rotation(200.0, 600.0), -10.0);
    }
}
