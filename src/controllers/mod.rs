pub mod sequence_controller;

pub use sequence_controller::SequenceController;
