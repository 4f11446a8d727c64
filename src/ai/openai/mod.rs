pub mod client;
pub mod completion;
pub mod image;
pub mod types;

pub use client::OpenAiHttpClient;
pub use completion::OpenAiCompletionClient;
pub use image::OpenAiImageClient;
