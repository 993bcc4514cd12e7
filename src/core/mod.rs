pub mod composer;
pub mod converter;
pub mod jamo_mapper;
pub mod rewrite;
pub mod romanizer;
pub mod surnames;
pub mod tokenizer;
pub mod unicode;
