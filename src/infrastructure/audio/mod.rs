mod openai_whisper_engine;
mod symphonia_normalizer;

pub use openai_whisper_engine::OpenAiWhisperEngine;
pub use symphonia_normalizer::SymphoniaNormalizer;
