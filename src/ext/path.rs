use std::path::Path;

/// Extension trait for Path with the naming helpers the walker and reports need
pub trait PathExt {
    /// Returns the substring after the last `.` of the file name, lower-cased.
    ///
    /// Unlike [`Path::extension`], a leading dot counts: `.ts` yields `ts`.
    ///
    /// # Examples
    /// ```
    /// use pleasenocheck::ext::PathExt;
    /// use std::path::Path;
    ///
    /// assert_eq!(Path::new("src/App.TSX").lowercase_extension().as_deref(), Some("tsx"));
    /// assert_eq!(Path::new("Makefile").lowercase_extension(), None);
    /// ```
    fn lowercase_extension(&self) -> Option<String>;

    /// The final path component, lossily converted for display.
    fn file_name_lossy(&self) -> String;

    /// Displays the path relative to `root`, or in full when it lies outside it.
    fn display_relative_to(&self, root: &Path) -> String;
}

impl PathExt for Path {
    fn lowercase_extension(&self) -> Option<String> {
        let file_name = self.file_name()?.to_string_lossy();
        let (_, extension) = file_name.rsplit_once('.')?;
        Some(extension.to_lowercase())
    }

    fn file_name_lossy(&self) -> String {
        match self.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => self.display().to_string(),
        }
    }

    fn display_relative_to(&self, root: &Path) -> String {
        match self.strip_prefix(root) {
            Ok(relative) if !relative.as_os_str().is_empty() => relative.display().to_string(),
            _ => self.display().to_string(),
        }
    }
}
