pub mod duration;
pub mod inline_tag;
pub mod parse;
