//! Authorization types.
//!
//! - [`AuthScopes`]: a set of OAuth scopes with implied scope handling

mod scopes;

pub use scopes::AuthScopes;
