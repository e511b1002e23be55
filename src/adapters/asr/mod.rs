//! Local speech recognition
//!
//! Everything needed to turn a media file into text on this machine:
//! decoding to PCM, whisper model resolution, and inference.

pub mod decoder;
pub mod model;
pub mod whisper;

pub use whisper::WhisperTranscriber;
