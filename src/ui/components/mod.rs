pub mod abbreviations;
