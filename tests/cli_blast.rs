use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

#[test]
fn command_invalid() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("rbhmap")?;
    cmd.arg("foobar");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("recognized"));

    Ok(())
}

#[test]
fn command_blast_arity() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("rbhmap")?;
    cmd.arg("blast").arg("tests/rbhmap/example.blast.tsv");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("<map_file>"));

    Ok(())
}

#[test]
fn command_blast() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("rbhmap")?;
    let output = cmd
        .arg("blast")
        .arg("tests/rbhmap/example.blast.tsv")
        .arg("stdout")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;
    let stderr = String::from_utf8(output.stderr)?;

    assert!(output.status.success());
    assert_eq!(stdout, "# Reciprocal Best Hits\n#\tA\tB\n1\t1\n4\tx_4\n");
    assert!(stderr.contains("Skipping malformed row (expected 12 columns, found 11)"));
    assert!(stderr.contains("Invalid numeric value in row"));

    Ok(())
}

#[test]
fn command_blast_gz() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("rbhmap")?;
    let plain = cmd
        .arg("blast")
        .arg("tests/rbhmap/example.blast.tsv")
        .arg("stdout")
        .output()?;

    let mut cmd = Command::cargo_bin("rbhmap")?;
    let gz = cmd
        .arg("blast")
        .arg("tests/rbhmap/example.blast.tsv.gz")
        .arg("stdout")
        .output()?;

    assert!(gz.status.success());
    assert!(!gz.stdout.is_empty());
    assert_eq!(gz.stdout, plain.stdout);

    Ok(())
}

#[test]
fn command_blast_file() -> anyhow::Result<()> {
    let tempdir = TempDir::new()?;
    let map_file = tempdir.path().join("A_B.map.tsv");

    let mut cmd = Command::cargo_bin("rbhmap")?;
    cmd.arg("blast")
        .arg("tests/rbhmap/example.blast.tsv")
        .arg(&map_file)
        .assert()
        .success();

    let content = std::fs::read_to_string(&map_file)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "# Reciprocal Best Hits");
    assert_eq!(lines[1], "#\tA\tB");
    assert!(lines.contains(&"1\t1"));
    assert!(!lines.contains(&"2\t2"));

    Ok(())
}

#[test]
fn command_blast_no_rbh() -> anyhow::Result<()> {
    let tempdir = TempDir::new()?;
    let map_file = tempdir.path().join("none.map.tsv");

    let mut cmd = Command::cargo_bin("rbhmap")?;
    cmd.arg("blast")
        .arg("tests/rbhmap/no_rbh.blast.tsv")
        .arg(&map_file)
        .assert()
        .success()
        .stderr(predicate::str::contains("No reciprocal best hits found"));

    assert!(!map_file.exists());

    Ok(())
}

#[test]
fn command_blast_three_groups() -> anyhow::Result<()> {
    let tempdir = TempDir::new()?;
    let map_file = tempdir.path().join("abc.map.tsv");

    let mut cmd = Command::cargo_bin("rbhmap")?;
    cmd.arg("blast")
        .arg("tests/rbhmap/three_groups.blast.tsv")
        .arg(&map_file)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Expected exactly 2 unique prefixes, found 3: A, B, C",
        ));

    assert!(!map_file.exists());

    Ok(())
}

#[test]
fn command_blast_missing_input() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("rbhmap")?;
    cmd.arg("blast")
        .arg("tests/rbhmap/not_exists.blast.tsv")
        .arg("stdout")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "could not open tests/rbhmap/not_exists.blast.tsv",
        ));

    Ok(())
}

#[test]
fn command_blast_stdin() -> anyhow::Result<()> {
    let input = std::fs::read_to_string("tests/rbhmap/example.blast.tsv")?;

    let mut cmd = assert_cmd::Command::cargo_bin("rbhmap")?;
    cmd.arg("blast")
        .arg("stdin")
        .arg("stdout")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("4\tx_4"));

    Ok(())
}
