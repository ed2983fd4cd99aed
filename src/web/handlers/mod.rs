pub mod authority;
pub mod domination;
pub mod gbp;
pub mod safety_gate;
