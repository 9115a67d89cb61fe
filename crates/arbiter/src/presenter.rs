//! Rendering seam between the scheduler and the host UI.

use crate::dialog::DialogMeta;

/// Borrowed view of the dialog a presenter should render.
#[derive(Debug)]
pub struct PresentedDialog<'a, T> {
	pub meta: DialogMeta,
	pub payload: &'a T,
}

/// Renders the active dialog of one kind.
///
/// The scheduler decides what is on screen; a presenter only mirrors it.
/// `set_active(None)` always precedes `set_active(Some(..))` on another
/// presenter when the slot changes hands.
pub trait Presenter<T> {
	/// Renders `dialog` exclusively, or tears the current view down on `None`.
	fn set_active(&mut self, dialog: Option<PresentedDialog<'_, T>>);
}

impl<T, F> Presenter<T> for F
where
	F: FnMut(Option<PresentedDialog<'_, T>>),
{
	fn set_active(&mut self, dialog: Option<PresentedDialog<'_, T>>) {
		self(dialog)
	}
}
