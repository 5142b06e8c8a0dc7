//! Per-entity AI state that persists across ticks.

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Shared handle to one entity's [`NpcMemory`].
///
/// The leaves of a behavior tree are independent closures but need to see
/// the same timers, so each controller hands clones of one handle to every
/// leaf it builds. Trees are ticked one at a time on a single thread, which
/// is what makes `Rc<RefCell<..>>` sufficient here.
pub type SharedMemory = Rc<RefCell<NpcMemory>>;

/// Mutable AI scratch state for one entity.
pub struct NpcMemory {
    /// Seconds spent idling since the last non-idle action.
    pub idle_timer: f32,
    /// Seconds left on the current wander leg, zero when not wandering.
    pub wander_remaining: f32,
    /// Seeded so replays of the same spawn order make the same choices.
    pub rng: StdRng,
}

impl NpcMemory {
    pub fn new(seed: u64) -> Self {
        Self {
            idle_timer: 0.0,
            wander_remaining: 0.0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn shared(seed: u64) -> SharedMemory {
        Rc::new(RefCell::new(Self::new(seed)))
    }
}
