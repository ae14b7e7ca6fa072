use procwatch::errors::ProcwatchError;
use procwatch::exec::{ChildExit, CommandSpec};

#[test]
fn test_missing_command_is_a_usage_error() {
    let empty: [&str; 0] = [];
    match CommandSpec::from_args(&empty) {
        Err(ProcwatchError::Usage(msg)) => assert_eq!(msg, "No command provided"),
        other => panic!("expected usage error, got {other:?}"),
    }
}

#[test]
fn test_blank_command_is_a_usage_error() {
    let err = CommandSpec::from_args(&["   ", "arg"]).unwrap_err();
    assert!(matches!(err, ProcwatchError::Usage(_)));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(err.to_string(), "No command provided");
}

#[test]
fn test_arguments_are_kept_in_order() {
    let spec = CommandSpec::from_args(&["grep", "-r", "--", "needle", "."]).unwrap();
    assert_eq!(spec.program(), "grep");
    assert_eq!(spec.args(), ["-r", "--", "needle", "."]);
    assert_eq!(spec.command_line(), "grep -r -- needle .");
}

#[test]
fn test_command_line_without_args_is_program() {
    let spec = CommandSpec::from_args(&["ls | wc -l"]).unwrap();
    assert!(spec.args().is_empty());
    assert_eq!(spec.command_line(), "ls | wc -l");
}

#[test]
fn test_launch_target_is_first_plain_word() {
    let spec = CommandSpec::from_args(&["ls | wc -l"]).unwrap();
    assert_eq!(spec.launch_target(), Some("ls"));

    let spec = CommandSpec::from_args(&["./build.sh", "--release"]).unwrap();
    assert_eq!(spec.launch_target(), Some("./build.sh"));

    let spec = CommandSpec::from_args(&["exit 127"]).unwrap();
    assert_eq!(spec.launch_target(), Some("exit"));
}

#[test]
fn test_launch_target_skips_shell_syntax() {
    for line in ["FOO=1 make", "$EDITOR notes", "'my tool' run", "(cd src && make)", "{ echo; }"] {
        let spec = CommandSpec::from_args(&[line]).unwrap();
        assert_eq!(spec.launch_target(), None, "{line}");
    }
}

#[test]
fn test_exit_codes_pass_through() {
    for code in [0, 1, 3, 42, 126, 127, 255] {
        let exit = ChildExit::from_parts(Some(code), None);
        assert_eq!(exit, ChildExit::Exited(code));
        assert_eq!(exit.exit_code(), code);
    }
}

#[test]
fn test_signal_termination() {
    let exit = ChildExit::from_parts(None, Some(15));
    assert_eq!(exit, ChildExit::Signaled(15));
    assert_eq!(exit.exit_code(), 143);
}

#[cfg(unix)]
#[test]
fn test_from_status_reads_raw_unix_status() {
    use std::os::unix::process::ExitStatusExt;
    use std::process::ExitStatus;

    let exited = ExitStatus::from_raw(3 << 8);
    assert_eq!(ChildExit::from_status(exited), ChildExit::Exited(3));

    let killed = ExitStatus::from_raw(9);
    assert_eq!(ChildExit::from_status(killed), ChildExit::Signaled(9));
}
