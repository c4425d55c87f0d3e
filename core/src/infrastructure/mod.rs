pub mod catalog;
pub mod llm;
