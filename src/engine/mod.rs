/// Text to token pipeline feeding the vectorizer
pub mod tokenizer;
