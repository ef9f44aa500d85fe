use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn collect_keys_output_right_answer() {
    let mut cmd = Command::cargo_bin("collect_keys").unwrap();
    cmd.arg("tests/inputs/small_vault.txt");

    cmd.assert().success().stdout("8\n");
}

#[test]
fn collect_keys_behind_doors() {
    let mut cmd = Command::cargo_bin("collect_keys").unwrap();
    cmd.arg("tests/inputs/doors_vault.txt");

    cmd.assert().success().stdout("86\n");
}

#[test]
fn collect_keys_from_stdin() {
    let mut cmd = Command::cargo_bin("collect_keys").unwrap();
    cmd.write_stdin("#########\n#b.A.@.a#\n#########\n");

    cmd.assert().success().stdout("8\n");
}

#[test]
fn collect_keys_from_stdin_with_crlf() {
    let mut cmd = Command::cargo_bin("collect_keys").unwrap();
    cmd.write_stdin("#########\r\n#b.A.@.a#\r\n\r\n#########\r\n");

    cmd.assert().success().stdout("8\n");
}

#[test]
fn collect_keys_after_splitting_entrance() {
    let mut cmd = Command::cargo_bin("collect_keys").unwrap();
    cmd.arg("tests/inputs/splittable_vault.txt")
        .arg("--split-entrance");

    cmd.assert().success().stdout("8\n");
}

#[test]
fn collect_keys_fails_on_missing_file() {
    let mut cmd = Command::cargo_bin("collect_keys").unwrap();
    cmd.arg("tests/inputs/no_such_vault.txt");

    cmd.assert()
        .failure()
        .stdout("")
        .stderr(str::contains("Failed to open given file"));
}

#[test]
fn collect_keys_fails_on_locked_key() {
    let mut cmd = Command::cargo_bin("collect_keys").unwrap();
    cmd.arg("tests/inputs/locked_vault.txt");

    cmd.assert()
        .failure()
        .stdout("")
        .stderr(str::contains("collect all keys{a}"));
}

#[test]
fn collect_keys_fails_on_inconsistent_rows() {
    let mut cmd = Command::cargo_bin("collect_keys").unwrap();
    cmd.write_stdin("#####\n#@.a#\n###\n");

    cmd.assert()
        .failure()
        .stderr(str::contains("Expect 5 column(s) in each row, given 3."));
}
