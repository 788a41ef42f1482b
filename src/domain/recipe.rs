//! Recipe prompt templates and speech text cleanup
//!
//! The language-model backend takes free-text prompts and returns free-text
//! answers. All structure (comma-separated names, blank-line-separated
//! sections) is requested informally through prompt wording.

use crate::domain::language::Language;

/// Maximum number of recipe names requested from the backend
pub const MAX_SUGGESTIONS: usize = 3;

/// System instruction for voice-input transcription
const TRANSCRIBE_INSTRUCTION: &str = r#"You are a voice-to-text assistant for a cooking app. Transcribe the audio into plain text.

Instructions:
- The speaker is naming ingredients or a recipe name
- Remove filler words (um, ah, like, you know)
- Output ONLY the transcribed text
- Do NOT include meta-commentary or explanations"#;

/// Punctuation characters stripped before speech synthesis, so the
/// synthesizer does not try to pronounce symbols.
const SPEECH_STRIP_CHARS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '=', '[', ']', '{', '}', '<', '>',
    '\\', '|', '/', ':', ';', '"', '\'', '~',
];

/// Prompt asking for recipe name suggestions from an ingredient list
pub fn suggest_prompt(ingredients: &str) -> String {
    format!(
        "Suggest {} recipe names using these ingredients: {}.\nOnly return names, comma separated.",
        MAX_SUGGESTIONS, ingredients
    )
}

/// Prompt asking for a full recipe document
pub fn recipe_prompt(recipe_name: &str) -> String {
    format!(
        "Give me a full recipe for '{}' including:\n\
         - Title\n\
         - Estimated cooking time\n\
         - List of ingredients\n\
         - Step-by-step cooking instructions\n\n\
         Separate each section with two newlines.",
        recipe_name
    )
}

/// Prompt asking for a translation of recipe text
pub fn translate_prompt(text: &str, language: Language) -> String {
    format!(
        "Translate this recipe into {} language:\n\n{}",
        language.display_name(),
        text
    )
}

/// Transcription instruction for the speech-recognition backend
pub fn transcribe_instruction() -> &'static str {
    TRANSCRIBE_INSTRUCTION
}

/// Remove punctuation the synthesizer would mis-pronounce.
///
/// The result may be empty (e.g. input was all symbols); callers must treat
/// an empty result as "no valid text" and skip synthesis.
pub fn sanitize_for_speech(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| !SPEECH_STRIP_CHARS.contains(c))
        .collect();
    cleaned.trim().to_string()
}
