mod line_splitter;

pub use line_splitter::split_lines;
