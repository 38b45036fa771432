pub mod inspect;
pub mod known;
pub mod synth;
