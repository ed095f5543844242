
/// Field validation that needs no database
mod validation_tests {
    use crate::{author, book, errors::ModelError};

    #[test]
    fn blank_names_are_rejected() {
        assert!(matches!(author::validate_name("   "), Err(ModelError::Validation(_))));
        assert!(matches!(book::validate_title(""), Err(ModelError::Validation(_))));
    }

    #[test]
    fn non_blank_names_pass() {
        assert!(author::validate_name("Ada").is_ok());
        assert!(book::validate_title("Dune").is_ok());
    }
}
