//! Edge case tests for vlark-lex
