use super::*;

#[test]
fn test_valid_package_names() {
    assert!(validate_package_name("left-pad").is_ok());
    assert!(validate_package_name("python3.12").is_ok());
    assert!(validate_package_name("@angular/cli").is_ok());
    assert!(validate_package_name("Flask_SQLAlchemy").is_ok());
    assert!(validate_package_name("typescript@~5.3").is_ok());
}

#[test]
fn test_shell_metacharacters_rejected() {
    assert!(validate_package_name("foo; rm -rf /").is_err());
    assert!(validate_package_name("foo | cat").is_err());
    assert!(validate_package_name("foo$(cat)").is_err());
    assert!(validate_package_name("foo && echo").is_err());
}

#[test]
fn test_flag_like_names_rejected() {
    assert!(validate_package_name("--global").is_err());
    assert!(validate_package_name("-g").is_err());
    assert!(validate_search_query("--registry=http://evil").is_err());
}

#[test]
fn test_path_traversal_blocked() {
    assert!(validate_package_name("../../../etc/passwd").is_err());
    assert!(validate_package_name("foo/../bar").is_err());
}

#[test]
fn test_empty_and_long_names() {
    assert!(validate_package_name("").is_err());
    let long_name = "a".repeat(300);
    assert!(validate_package_name(&long_name).is_err());
}

#[test]
fn test_placeholders_rejected() {
    let err = validate_package_name("package-name").unwrap_err();
    assert!(err.to_string().contains("placeholder"));
    assert!(validate_package_name("<package>").is_err());
}

#[test]
fn test_search_queries_allow_free_text() {
    assert!(validate_search_query("http client").is_ok());
    assert!(validate_search_query("   ").is_err());
    assert!(validate_search_query("a\nb").is_err());
}

#[test]
fn test_pypi_name_shape() {
    assert!(is_valid_pypi_name("requests"));
    assert!(is_valid_pypi_name("zope.interface"));
    assert!(!is_valid_pypi_name("http client"));
    assert!(!is_valid_pypi_name("@scope/pkg"));
    assert!(!is_valid_pypi_name("trailing-"));
}

#[test]
fn test_version_specifiers_rejected() {
    assert!(validate_package_name("numpy==1.26.0").is_err());
    assert!(validate_package_name("requests>=2").is_err());
    assert!(validate_package_name("numpy=1").is_err());
}
