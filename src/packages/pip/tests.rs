use super::*;
use crate::error::UnifiedError;
use std::time::Duration;

fn pip(binary: &str) -> PipManager {
    let index = PypiClient::new("http://127.0.0.1:9", Duration::from_secs(1)).expect("client");
    PipManager::new(binary, index, 10)
}

#[test]
fn names_follow_pep503() {
    let pip = pip("pip3");
    assert!(pip.names_match("Flask_SQLAlchemy", "flask-sqlalchemy"));
    assert!(pip.names_match("ruamel.yaml", "ruamel-yaml"));
    assert!(!pip.names_match("requests", "requests-oauthlib"));
}

#[test]
fn invalid_name_is_rejected_before_running_pip() {
    let pip = pip("unified-test-no-such-pip");

    let err = pip.install("--index-url=http://evil").unwrap_err();
    assert!(matches!(err, UnifiedError::InvalidPackageName(_)));

    let err = pip.installed_version("numpy==1.26").unwrap_err();
    assert!(matches!(err, UnifiedError::InvalidPackageName(_)));
}

#[test]
fn missing_binary_is_unavailable() {
    let pip = pip("unified-test-no-such-pip");

    assert!(!pip.is_available());
    assert!(matches!(
        pip.list_installed(),
        Err(UnifiedError::ManagerUnavailable {
            manager: Manager::Pip
        })
    ));
}
