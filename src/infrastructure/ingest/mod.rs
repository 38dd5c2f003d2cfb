pub mod splitter;
pub mod text_file;
