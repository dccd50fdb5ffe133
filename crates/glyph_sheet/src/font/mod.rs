pub mod source;
pub mod truetype;
