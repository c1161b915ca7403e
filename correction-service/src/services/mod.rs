pub mod correction;
pub mod providers;

pub use correction::CorrectionService;
pub use providers::groq::GroqClient;
pub use providers::CompletionProvider;
