/*!
# Patopt: Debug

This example parses the options `-b`, `-f`, `-i`, and `-s` (plus the usual
help options) and displays the results.

Set `RUST_LOG=trace` to see what gets skipped along the way.
*/

use patopt::{
	HelpResult,
	Session,
};



/// # Pattern.
const PATTERN: &str = "b:|f:|i:|s:|h|-help";



fn main() {
	env_logger::init();

	let mut session = Session::from_env().with_help(|| -> HelpResult {
		println!("Usage: debug [-b BOOL] [-f FLOAT] [-i INT] [-s STRING]");
		Ok(())
	});

	println!("\x1b[2mRAW:\x1b[0m");
	print!("{}", session.opts());
	println!();

	let (mut b, mut f, mut i, mut s, mut other) = (false, 0.0, 0, String::new(), String::new());
	loop {
		let step = session.get(PATTERN);
		match step.opt {
			"b" => { b = step.value.as_bool(); },
			"f" => { f = step.value.as_float(); },
			"i" => { i = step.value.as_int(); },
			"s" => { s = step.value.to_string(); },
			o => { o.clone_into(&mut other); },
		}
		if ! step.more { break; }
	}

	println!("\x1b[2mPRETTY:\x1b[0m");
	println!("Bool: {b}, Float: {f}, Int: {i}, String: {s:?}, other: {other:?}");
}
