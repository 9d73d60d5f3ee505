pub mod bark;

pub use bark::BarkClient;
