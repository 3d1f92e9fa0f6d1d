/*!
# Patopt: Errors.
*/

use thiserror::Error;



#[derive(Debug, Error)]
/// # Error!
///
/// Bad options are never an error here; they're just skipped. The only
/// thing that can actually go wrong is the help screen.
pub enum PatoptError {
	#[error("Unable to show help: {0}")]
	/// # Help Failed.
	///
	/// The registered [`ShowHelp`](crate::ShowHelp) returned an error.
	Help(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl PatoptError {
	#[must_use]
	/// # Exit Code.
	pub const fn exit_code(&self) -> i32 {
		match self {
			Self::Help(_) => 1,
		}
	}
}
