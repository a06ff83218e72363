/// The host page as seen by the bootstrap sequence.
///
/// Abstracts the document so [`crate::bootstrap::boot`] runs natively in
/// tests; the browser implementation is `browser::BrowserPage`.
pub trait HostPage {
    /// Mount target type produced by element lookup.
    type Mount;

    /// Look up the mount element by id, if present in the document.
    fn mount_element(&self, id: &str) -> Option<Self::Mount>;

    /// The URL fragment identifier, including the leading `#`.
    ///
    /// Empty string when the URL carries no fragment. The shape matches
    /// `location.hash`, so exact comparison against
    /// [`crate::consts::DEV_FRAGMENT`] works without normalization.
    fn fragment(&self) -> String;
}
