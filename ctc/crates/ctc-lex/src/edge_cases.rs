//! Edge case tests for ctc-lex
