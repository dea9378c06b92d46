// For simulating. The simulation is one dimensional, x points up.
pub type Real = f64;
pub type Point = cgmath::Point1<Real>;
pub type Vector = cgmath::Vector1<Real>;

// Quantities along the vertical axis
pub type Position = Point;
pub type Velocity = Vector;
pub type Force = Vector;
