pub mod auto_translate;
pub mod content;
pub mod jobs;
pub mod translation;
