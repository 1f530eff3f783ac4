/// An editable text buffer that shows the query text, e.g. an editor widget.
pub trait TextSurface: Send + Sync {
    /// Replace the text and notify whoever observes edits to the surface.
    fn set_text(&self, text: String);

    /// Replace the text without notifying observers. Used to show
    /// synthesized query text without re-parsing it.
    fn set_text_silently(&self, text: String);

    fn text(&self) -> String;
}
