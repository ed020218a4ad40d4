/// Receipt uploads are image-only; anything else (notably PDFs) is rejected
/// before it reaches the record store.
const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Last path segment of a raw file-input value. Browsers may report a full
/// path with either separator ("C:\\fakepath\\facture.png").
pub(crate) fn file_basename(input_value: &str) -> &str {
    input_value
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(input_value)
}

/// Case-insensitive allow-list check on the suffix after the last `.`.
/// A name without any extension is rejected.
pub(crate) fn has_allowed_extension(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ALLOWED_EXTENSIONS.iter().any(|a| ext.eq_ignore_ascii_case(a)))
        .unwrap_or(false)
}

/// Display-safe attachment URL for the preview modal: everything up to the
/// first `?`, so the modal always receives a plain file path.
pub(crate) fn display_url(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basename_strips_both_separator_styles() {
        assert_eq!(file_basename("C:\\fakepath\\facture.png"), "facture.png");
        assert_eq!(file_basename("/tmp/uploads/facture.png"), "facture.png");
        assert_eq!(file_basename("facture.png"), "facture.png");
    }

    #[test]
    fn accepts_the_three_image_extensions_case_insensitively() {
        assert!(has_allowed_extension("facture.jpg"));
        assert!(has_allowed_extension("facture.jpeg"));
        assert!(has_allowed_extension("facture.png"));
        assert!(has_allowed_extension("FACTURE.PNG"));
        assert!(has_allowed_extension("facture.JpEg"));
    }

    #[test]
    fn rejects_everything_else() {
        assert!(!has_allowed_extension("facture.pdf"));
        assert!(!has_allowed_extension("facture.gif"));
        assert!(!has_allowed_extension("facture."));
        assert!(!has_allowed_extension("facture"));
        assert!(!has_allowed_extension(""));
    }

    #[test]
    fn display_url_strips_query_string() {
        assert_eq!(
            display_url("https://store.test/file/abc.png?token=xyz"),
            "https://store.test/file/abc.png"
        );
        assert_eq!(
            display_url("https://store.test/file/abc.png"),
            "https://store.test/file/abc.png"
        );
    }
}
