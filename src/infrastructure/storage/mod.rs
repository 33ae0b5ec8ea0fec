pub mod audio_store;

pub use audio_store::{AllocatedAudioPath, AudioStore};
