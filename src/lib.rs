/*!
# Patopt

This crate provides a tiny getopt-style option iterator called [`Session`],
driven by a short pattern string rather than a builder or derive macro.

The raw arguments are tokenized once into an ordered list of option/value
pairs ([`OptArgs`]). Each call to [`Session::get`] hands back the next pair
that is valid for the pattern, quietly stepping over anything unknown or
missing a required value.

It deliberately does _not_ try to be a complete getopt: combined short
flags (`-abc`), joined long values (`--opt=val`), and the `--` terminator
are not recognized. If you need any of that, use [clap](https://crates.io/crates/clap)
instead. Haha.



## Patterns

A pattern is a list of option names separated by `|`. A trailing `:` marks
an option as requiring a value. Short options are written without their
dash; long options keep exactly one:

| Command Line | Pattern Entry | Requires Value |
| ------------ | ------------- | -------------- |
| `-v`         | `v`           | N |
| `-o out.txt` | `o:`          | Y |
| `--help`     | `-help`       | N |
| `--infile x` | `-infile:`    | Y |

Surrounding spaces and stray colons are ignored, as are empty entries.
An empty pattern is the same as `h|-help`.



## Example

```
use patopt::Session;

let mut session = Session::new([
    "app", "-v", "--infile", "config.in", "-n", "3",
]);

let (mut verbose, mut infile, mut num) = (false, String::new(), 0);
loop {
    let step = session.get("v|n:|-infile:|h|-help");
    match step.opt {
        "v" => { verbose = true; },
        "n" => { num = step.value.as_int(); },
        "-infile" => { infile = step.value.to_string(); },
        _ => {},
    }
    if ! step.more { break; }
}

assert!(verbose);
assert_eq!(infile, "config.in");
assert_eq!(num, 3);
```
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]



mod cursor;
mod error;
mod expected;
mod optarg;
mod session;
mod value;

pub use cursor::{
	Cursor,
	Step,
};
pub use error::PatoptError;
pub use expected::{
	DEFAULT_PATTERN,
	Expected,
};
pub use optarg::{
	OptArg,
	OptArgs,
};
pub use session::{
	HelpResult,
	Session,
	ShowHelp,
};
pub use value::Value;
