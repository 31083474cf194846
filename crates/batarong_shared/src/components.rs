// crates/batarong_shared/src/components.rs
use glam::{Vec2, Vec4};

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct CTransform {
    pub pos: Vec2,
    pub scale: Vec2,
    pub rotation: f32,
}

impl Default for CTransform {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            scale: Vec2::ONE,
            rotation: 0.0,
        }
    }
}

/// A colored quad. `size` is in logical pixels; positions are the top-left
/// corner in the y-down screen space the whole game uses.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct CSprite {
    pub color: Vec4,
    pub size: Vec2,
    pub visible: bool,
}

impl Default for CSprite {
    fn default() -> Self {
        Self {
            color: Vec4::ONE,
            size: Vec2::splat(50.0),
            visible: true,
        }
    }
}

/// Player state beyond position: vertical motion, facing and sprint.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct CPlayer {
    pub velocity_y: f32,
    pub on_ground: bool,
    pub facing_left: bool,
    pub sprint_energy: f32,
    pub is_sprinting: bool,
    /// Sprint must be re-pressed after the key was released; holding shift
    /// through an empty bar does not restart the sprint.
    pub sprint_key_released: bool,
}

impl Default for CPlayer {
    fn default() -> Self {
        Self {
            velocity_y: 0.0,
            on_ground: true,
            facing_left: false,
            sprint_energy: 100.0,
            is_sprinting: false,
            sprint_key_released: true,
        }
    }
}

/// Static platform tag. Geometry lives in CTransform + CSprite.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct CPlatform;

/// Collectible. Collected piwo stay in the world with their sprite hidden.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct CPiwo {
    pub collected: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NpcKind {
    GamblingMachine,
    Ray,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct CNpc {
    pub kind: NpcKind,
}

/// Scrolling camera. Only the x offset matters for a side-scroller; the
/// sprite pass reads it off the camera entity's CTransform each frame.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct CCamera {
    pub zoom: f32,
}

impl Default for CCamera {
    fn default() -> Self {
        Self { zoom: 1.0 }
    }
}
