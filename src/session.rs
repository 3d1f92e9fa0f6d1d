/*!
# Patopt: Session.

This module holds the [`Session`], the main entry point, along with the
[`ShowHelp`] hook called whenever `-h` or `--help` turns up.
*/

use crate::{
	Cursor,
	OptArgs,
	PatoptError,
	Step,
};
use log::error;
use std::fmt;



/// # Help Result.
///
/// This is the return type for [`ShowHelp::show_help`].
pub type HelpResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;



/// # Show Help.
///
/// A help-screen hook for [`Session`]. It is called every time the session
/// yields `h` or `-help`.
///
/// This is implemented for any `FnMut() -> HelpResult` closure.
pub trait ShowHelp {
	/// # Show Help.
	///
	/// ## Errors
	///
	/// If this returns an error, [`Session::get`] will terminate the
	/// program; [`Session::try_get`] will pass it along.
	fn show_help(&mut self) -> HelpResult;
}

impl<F: FnMut() -> HelpResult> ShowHelp for F {
	#[inline]
	fn show_help(&mut self) -> HelpResult { self() }
}



/// # Option Session.
///
/// This pairs a [`Cursor`] with an optional [`ShowHelp`] hook, and is what
/// most programs will want to work with.
///
/// Call [`Session::get`] in a loop with your option pattern until the
/// returned [`Step`] says there is nothing more.
///
/// ## Examples
///
/// ```
/// use patopt::{HelpResult, Session};
///
/// let mut session = Session::new(["app", "-q", "--out", "file.txt", "-z"])
///     .with_help(|| -> HelpResult {
///         println!("Usage: app [-q] [--out FILE]");
///         Ok(())
///     });
///
/// let step = session.get("q|-out:|h|-help");
/// assert_eq!((step.opt, step.more), ("q", true));
///
/// let step = session.get("q|-out:|h|-help");
/// assert_eq!((step.opt, step.value.as_str(), step.more), ("-out", "file.txt", true));
///
/// // -z isn't in the pattern, and it was the last one.
/// let step = session.get("q|-out:|h|-help");
/// assert_eq!((step.opt, step.more), ("?", false));
/// ```
pub struct Session {
	/// # Cursor.
	cursor: Cursor,

	/// # Help Hook.
	help: Option<Box<dyn ShowHelp>>,
}

impl fmt::Debug for Session {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Session")
			.field("cursor", &self.cursor)
			.field("help", &self.help.is_some())
			.finish()
	}
}

impl From<OptArgs> for Session {
	#[inline]
	fn from(opts: OptArgs) -> Self {
		Self {
			cursor: Cursor::new(opts),
			help: None,
		}
	}
}

impl Session {
	/// # New.
	///
	/// Create a session from the raw arguments. As with [`OptArgs::new`],
	/// the first entry is assumed to be the program path and is skipped.
	pub fn new<I, S>(args: I) -> Self
	where I: IntoIterator<Item=S>, S: AsRef<str> {
		Self::from(OptArgs::new(args))
	}

	#[must_use]
	/// # From Environment.
	///
	/// Create a session from [`std::env::args_os`]. Arguments that aren't
	/// valid UTF-8 are converted lossily rather than causing a panic.
	pub fn from_env() -> Self {
		Self::new(std::env::args_os().map(|a|
			a.into_string().unwrap_or_else(|a| a.to_string_lossy().into_owned())
		))
	}

	#[must_use]
	/// # With Help.
	///
	/// Register a hook to be called whenever `h` or `-help` is returned.
	pub fn with_help<H: ShowHelp + 'static>(mut self, help: H) -> Self {
		self.help = Some(Box::new(help));
		self
	}

	#[must_use]
	/// # Cursor.
	pub const fn cursor(&self) -> &Cursor { &self.cursor }

	#[must_use]
	/// # Option/Value Pairs.
	pub const fn opts(&self) -> &OptArgs { self.cursor.opts() }
}

impl Session {
	/// # Get.
	///
	/// Return the next option matching `pattern`, along with its value and
	/// whether there's anything left to check.
	///
	/// If the pattern differs from the previous call's, the session starts
	/// over from the beginning.
	///
	/// Invalid entries are skipped. If the last entry is invalid, the option
	/// comes back as `?` with `more` set to `false`.
	///
	/// If `h` or `-help` is returned and a [`ShowHelp`] hook is registered,
	/// the hook is called first. Should the hook fail, the error is logged,
	/// printed to STDERR, and the program exits with status `1`. Use
	/// [`Session::try_get`] to handle that yourself.
	pub fn get(&mut self, pattern: &str) -> Step<'_> {
		match self.try_get(pattern) {
			Ok(step) => step,
			Err(e) => {
				error!("{e}");
				eprintln!("{e}");
				// Give any pending output a chance.
				std::thread::yield_now();
				std::process::exit(e.exit_code());
			},
		}
	}

	/// # Try Get.
	///
	/// Same as [`Session::get`], except a [`ShowHelp`] failure is returned
	/// rather than fatal.
	///
	/// ## Errors
	///
	/// This will return an error if the help hook fails.
	pub fn try_get(&mut self, pattern: &str) -> Result<Step<'_>, PatoptError> {
		let step = self.cursor.set_pattern(pattern).next_step();
		if step.is_end() {
			return Ok(Step { opt: "?", ..step });
		}

		if matches!(step.opt, "h" | "-help") {
			if let Some(help) = self.help.as_mut() {
				help.show_help().map_err(PatoptError::Help)?;
			}
		}

		Ok(step)
	}

	/// # Reset.
	///
	/// Rewind to the first option.
	pub fn reset(&mut self) { self.cursor.reset(); }
}
