pub mod states;
pub mod params;
pub mod engine;
pub mod forces;
pub mod energy;
pub mod integrator;
pub mod ode;
pub mod trajectory;
pub mod scenario;
