mod client;
mod error;

pub use client::{DEFAULT_ENDPOINT, GoogleTranslateClient, TranslationRequest, Translator};
pub use error::TranslationError;
