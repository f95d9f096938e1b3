/// Closed set of values rendered as a `<select>`.
///
/// `code` is the stable value written to `<option value=..>`, `label` the
/// text shown to the admin.
pub trait Choice: Copy + PartialEq + 'static {
    fn all() -> &'static [Self];

    fn code(&self) -> &'static str;

    fn label(&self) -> &'static str;

    fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.code() == code)
    }
}
