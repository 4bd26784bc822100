use super::*;
use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;

fn output(code: i32, stdout: &str, stderr: &str) -> Output {
    Output {
        status: ExitStatus::from_raw(code << 8),
        stdout: stdout.as_bytes().to_vec(),
        stderr: stderr.as_bytes().to_vec(),
    }
}

#[test]
fn describe_joins_binary_and_args() {
    assert_eq!(describe("npm", &["ls", "-g"]), "npm ls -g");
}

#[test]
fn missing_binary_is_manager_unavailable() {
    let err = run_captured(Manager::Npm, "unified-test-no-such-binary", &["--version"]).unwrap_err();
    assert!(matches!(
        err,
        UnifiedError::ManagerUnavailable {
            manager: Manager::Npm
        }
    ));
}

#[test]
fn require_exit_accepts_listed_codes() {
    let one = output(1, "{}", "");
    assert!(require_exit(&one, &[0, 1], "npm", &["outdated"]).is_ok());

    let err = require_exit(&one, &[0], "npm", &["outdated"]).unwrap_err();
    assert!(matches!(err, UnifiedError::SystemCommandFailed { .. }));
}

#[test]
fn failure_reason_prefers_error_lines() {
    let out = output(1, "", "resolving...\nnpm ERR! code EACCES\nsee log\n");
    assert_eq!(failure_reason(&out), "npm ERR! code EACCES");

    let silent = output(2, "", "");
    assert_eq!(failure_reason(&silent), "exit status 2");
}

#[test]
fn finish_install_success_keeps_output() {
    let outcome = finish_install(
        Manager::Pip,
        "install",
        "numpy",
        output(0, "Successfully installed numpy-1.26.4\n", ""),
    )
    .expect("success");

    assert_eq!(outcome.manager, Manager::Pip);
    assert_eq!(outcome.package, "numpy");
    assert!(outcome.output.contains("Successfully installed"));
}

#[test]
fn finish_install_detects_missing_package() {
    let err = finish_install(
        Manager::Pip,
        "install",
        "nosuchpkg",
        output(
            1,
            "",
            "ERROR: No matching distribution found for nosuchpkg\n",
        ),
    )
    .unwrap_err();

    assert!(matches!(err, UnifiedError::PackageNotFound { ref name, .. } if name == "nosuchpkg"));
}

#[test]
fn finish_install_other_failure_is_install_error() {
    let err = finish_install(
        Manager::Npm,
        "install",
        "left-pad",
        output(1, "", "npm ERR! code EACCES\n"),
    )
    .unwrap_err();

    match err {
        UnifiedError::InstallError { reason, action, .. } => {
            assert_eq!(action, "install");
            assert!(reason.contains("EACCES"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
