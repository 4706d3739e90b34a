//! # conststr-core
//!
//! Const-evaluable implementations of the non-mutating C `<string.h>`
//! inspection functions.
//!
//! Every operation here is a `pub const fn` over byte slices that represent
//! NUL-terminated C strings, so results can be used where Rust requires
//! compile-time constants (array lengths, `const` items, `static_assert`-style
//! checks) while remaining callable at run time with identical results.
//!
//! Only functions that neither mutate their arguments nor depend on locale or
//! hidden state are provided: length, comparison, character search, and
//! character-set scanning. Multi-character membership tests are accelerated by
//! [`ByteSet`], a 256-bit stack bitset.

#![deny(unsafe_code)]

pub mod byteset;
pub mod str;

// Re-export the full scanning surface at the crate root.
pub use byteset::ByteSet;
pub use str::{
    strchr, strcmp, strcspn, strlen, strncmp, strnlen, strpbrk, strrchr, strspn, strstr,
};
