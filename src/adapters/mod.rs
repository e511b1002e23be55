/// Adapters - concrete implementations of the port traits
///
/// External services and platform facilities live here:
/// - ASR: local whisper.cpp inference plus audio decoding
/// - LLM: remote chat-completion API
/// - Storage: filesystem artifact writer
pub mod asr;
pub mod llm;
pub mod storage;
