//! Parse-once, query-many command-line flags.
//!
//! An argument vector is normalized into an [`ArgumentStore`] a single time,
//! after which any number of typed lookups can be made against it:
//!
//! - `-name`, `-name=value`, `--name` and `--name=value` are all accepted
//!   (`--` is the same as `-`)
//! - `-noname` turns a boolean flag off unless `-name` itself is given
//! - lookups never fail: missing flags fall back to the caller's default
//!
//! ```
//! use getarg::ArgumentStore;
//!
//! let args = ArgumentStore::parse(["prog", "--verbose", "-threads=4", "-nocolor"]);
//! assert!(args.get_bool_arg("-verbose", false));
//! assert!(!args.get_bool_arg("-color", true));
//! assert_eq!(args.get_arg("-threads", 1), 4);
//! assert_eq!(args.get_arg("-datadir", "/tmp"), "/tmp");
//! ```

pub mod error;
pub mod shared;
pub mod store;
pub mod token;

pub use error::ArgError;
pub use shared::SharedArgs;
pub use store::{ArgumentStore, Fallback, FlagState};
pub use token::{RawValue, Token};
