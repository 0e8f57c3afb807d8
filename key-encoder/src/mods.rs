//! Modifier bitsets.

/// Keyboard modifier state attached to a [`crate::event::KeyEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Mods {
    pub shift: bool,
    pub alt: bool,
    pub ctrl: bool,
    pub super_: bool,
    pub hyper: bool,
    pub meta: bool,
    pub caps_lock: bool,
    pub num_lock: bool,
}

impl Mods {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }

    /// `effectiveMods` from spec.md §3: caps-lock never participates in
    /// protocol/binding decisions.
    pub fn effective(&self) -> Self {
        Self {
            caps_lock: false,
            ..*self
        }
    }

    /// Clears `alt` — used by the C0 control-byte lookup, which matches on
    /// ctrl alone and handles alt as a separate ESC prefix.
    pub fn without_alt(&self) -> Self {
        Self {
            alt: false,
            ..*self
        }
    }

    /// `binding_mods` from spec.md §3. No concrete scenario in the
    /// specification exercises a difference from `effective_mods` (see
    /// DESIGN.md), so this crate treats them as identical; the method is
    /// kept distinct so that distinction can be reintroduced without
    /// touching every call site.
    pub fn binding(&self) -> Self {
        self.effective()
    }

    /// CSI-u / legacy modifier bitmask: shift=1, alt=2, ctrl=4.
    pub fn csi_u_bitmask(&self) -> u8 {
        (self.shift as u8) | ((self.alt as u8) << 1) | ((self.ctrl as u8) << 2)
    }

    /// Modifier code as written in a CSI sequence: raw bitmask + 1.
    pub fn csi_u_code(&self) -> u8 {
        self.csi_u_bitmask() + 1
    }

    /// Kitty's 8-bit modifier bitmask: shift, alt, ctrl, super, hyper, meta,
    /// caps_lock, num_lock (in that bit order).
    pub fn kitty_bitmask(&self) -> u16 {
        (self.shift as u16)
            | ((self.alt as u16) << 1)
            | ((self.ctrl as u16) << 2)
            | ((self.super_ as u16) << 3)
            | ((self.hyper as u16) << 4)
            | ((self.meta as u16) << 5)
            | ((self.caps_lock as u16) << 6)
            | ((self.num_lock as u16) << 7)
    }

    pub fn kitty_code(&self) -> u16 {
        self.kitty_bitmask() + 1
    }
}

/// Kitty keyboard protocol progressive-enhancement flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KittyFlags {
    pub disambiguate: bool,
    pub report_events: bool,
    pub report_alternates: bool,
    pub report_associated: bool,
    pub report_all: bool,
}

impl KittyFlags {
    pub fn any(&self) -> bool {
        self.disambiguate || self.report_events || self.report_alternates || self.report_associated || self.report_all
    }
}
