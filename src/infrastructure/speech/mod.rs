//! Speech-synthesis infrastructure module

mod google_tts;

pub use google_tts::GoogleTranslateTts;
