pub use flowtype::FlowType;

mod flowtype;

// ------------------------------------------------------

use crate::units::{Real, Velocity};

/// Prescribed velocity of the surrounding fluid. The particle does not feed back into it.
pub trait FlowField {
    // local fluid velocity at simulation time t (in seconds)
    fn fluid_velocity(&self, t: Real) -> Velocity;
}
