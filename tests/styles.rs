use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn lists_every_style() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::cargo_bin("cite")?
        .env("NO_COLOR", "1")
        .arg("styles")
        .output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    let kinds: Vec<_> = stdout
        .lines()
        .filter_map(|l| l.split_whitespace().next())
        .collect();
    assert_eq!(kinds, ["custom", "apa", "mla", "chicago", "vancouver", "bibtex"]);
    Ok(())
}

#[test]
fn unknown_style_is_rejected() {
    Command::cargo_bin("cite")
        .unwrap()
        .args(["format", "--style", "harvard", "-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("harvard"));
}
