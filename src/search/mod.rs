mod highlighter;

pub use highlighter::{ HighlightMark, SearchHighlighter, SearchOutcome, Segment, MIN_TERM_CHARS };
