//! Derive macro for binary-buffer records.

use proc_macro::TokenStream;

mod record;

/// Derive `Record` for a struct whose fields are all `Record`s.
///
/// Fields are read and written in declaration order. By default they use the
/// byte order the caller asks for; `#[record(order = "network")]` or
/// `#[record(order = "host")]` on the struct pins it instead.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input)
}
