//! Button identifiers, bitmask queries and rising-edge detection.

/// Buttons tracked by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Button {
    /// Records a beat tap
    BottomLeft = 0,
    /// Shifts both zone hues
    BottomRight = 1,
    /// Toggles the sync indicator
    TopRight = 2,
}

impl Button {
    /// Number of tracked buttons.
    pub const COUNT: usize = 3;

    /// All tracked buttons, in index order.
    pub const ALL: [Self; Self::COUNT] = [Self::BottomLeft, Self::BottomRight, Self::TopRight];

    /// Bitmask bit for this button.
    pub const fn mask(self) -> ButtonMask {
        ButtonMask(1 << self as u8)
    }
}

/// Set of buttons encoded as a bitmask.
///
/// Produced by the input driver once per tick; also used to tell the driver
/// which buttons to sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonMask(pub u8);

impl ButtonMask {
    /// Mask with no buttons set.
    pub const EMPTY: Self = Self(0);

    /// Mask covering every tracked button.
    pub const fn all() -> Self {
        Self(
            Button::BottomLeft.mask().0
                | Button::BottomRight.mask().0
                | Button::TopRight.mask().0,
        )
    }

    /// Whether `button` is set in this mask.
    pub const fn contains(self, button: Button) -> bool {
        self.0 & button.mask().0 != 0
    }

    /// This mask with `button` added.
    pub const fn with(self, button: Button) -> Self {
        Self(self.0 | button.mask().0)
    }
}

/// Rising-edge detector over the raw button mask.
///
/// Holds one held-state bool per button, all initialized unpressed, so a
/// button that was never observed cannot produce a spurious edge. This is
/// logical edge detection only; the input driver is expected to deliver
/// already-debounced, stable samples.
#[derive(Debug, Default)]
pub struct EdgeDetector {
    held: [bool; Button::COUNT],
}

impl EdgeDetector {
    /// Create a detector with every button considered released.
    pub const fn new() -> Self {
        Self {
            held: [false; Button::COUNT],
        }
    }

    /// Returns true exactly on the tick where `button` transitions from
    /// released to pressed.
    ///
    /// Returns false while the button stays held and again while released,
    /// until the next release-then-press cycle.
    pub fn rising_edge(&mut self, mask: ButtonMask, button: Button) -> bool {
        let pressed = mask.contains(button);
        let was_held = self.held[button as usize];
        self.held[button as usize] = pressed;
        pressed && !was_held
    }
}
