//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn rumbo() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("rumbo").unwrap()
}

#[test]
fn help_output() {
    rumbo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Learning-path assessment for the terminal",
        ));
}

#[test]
fn version_output() {
    rumbo()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rumbo"));
}

#[test]
fn validate_builtin_catalogs() {
    rumbo()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("10 questions"))
        .stdout(predicate::str::contains("4 bundles (+ default)"))
        .stdout(predicate::str::contains("All catalogs valid"));
}

#[test]
fn validate_nonexistent_file() {
    rumbo()
        .arg("validate")
        .arg("--questions")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn validate_flags_broken_bank() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(
        &path,
        r#"
[questionnaire]
id = "broken"
name = "Broken"

[[questions]]
id = 6
text = "¿Metas?"
kind = "multi"
min_selections = 9
max_selections = 2

[[questions.options]]
id = "6a"
text = "Una"
value = "una"
"#,
    )
    .unwrap();

    rumbo()
        .arg("validate")
        .arg("--questions")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("exceeds max_selections"))
        .stdout(predicate::str::contains("warning(s) found"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    rumbo()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created rumbo-questions.toml"))
        .stdout(predicate::str::contains("Created rumbo-roadmaps.toml"));

    assert!(dir.path().join("rumbo-questions.toml").exists());
    assert!(dir.path().join("rumbo-roadmaps.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    rumbo().current_dir(dir.path()).arg("init").assert().success();

    rumbo()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn scaffolded_catalogs_validate_cleanly() {
    let dir = TempDir::new().unwrap();
    rumbo().current_dir(dir.path()).arg("init").assert().success();

    rumbo()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--questions")
        .arg("rumbo-questions.toml")
        .arg("--roadmaps")
        .arg("rumbo-roadmaps.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("All catalogs valid"));
}

#[test]
fn score_student_profile() {
    let dir = TempDir::new().unwrap();
    let answers = dir.path().join("answers.json");
    std::fs::write(
        &answers,
        r#"{
            "1": 4,
            "2": ["chatgpt", "notion", "automation", "copywriting", "imagen"],
            "3": 2,
            "4": "estudiante",
            "5": "contenido",
            "6": ["carrera"],
            "7": "alta",
            "8": 8,
            "9": "practico",
            "10": ["direccion"]
        }"#,
    )
    .unwrap();

    rumbo()
        .arg("score")
        .arg("--answers")
        .arg(&answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("AVANZADO"))
        .stdout(predicate::str::contains("7.5"))
        .stdout(predicate::str::contains("estudiante-general"))
        .stdout(predicate::str::contains("Estudiante en Transición"));
}

#[test]
fn score_empty_answers_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let answers = dir.path().join("answers.json");
    std::fs::write(&answers, "{}").unwrap();

    // all-defaults profile: freelancer + contenido + NOVATO
    rumbo()
        .arg("score")
        .arg("--answers")
        .arg(&answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("NOVATO"))
        .stdout(predicate::str::contains("freelancer-contenido"));
}

#[test]
fn score_unknown_tokens_fall_to_default_bundle() {
    let dir = TempDir::new().unwrap();
    let answers = dir.path().join("answers.json");
    std::fs::write(
        &answers,
        r#"{
            "1": 4,
            "2": ["chatgpt", "notion", "automation", "copywriting", "imagen"],
            "3": 2,
            "4": "unknown-token",
            "5": "unknown-token"
        }"#,
    )
    .unwrap();

    rumbo()
        .arg("score")
        .arg("--answers")
        .arg(&answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("Profesional en Aprendizaje de IA"));
}

#[test]
fn score_missing_answers_file() {
    rumbo()
        .arg("score")
        .arg("--answers")
        .arg("no_such_file.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn score_writes_artifacts() {
    let dir = TempDir::new().unwrap();
    let answers = dir.path().join("answers.json");
    let output = dir.path().join("results");
    std::fs::write(&answers, r#"{"4": "empleado", "5": "admin"}"#).unwrap();

    rumbo()
        .arg("score")
        .arg("--answers")
        .arg(&answers)
        .arg("--output")
        .arg(&output)
        .arg("--format")
        .arg("all")
        .assert()
        .success();

    let extensions: Vec<String> = std::fs::read_dir(&output)
        .unwrap()
        .map(|entry| {
            entry
                .unwrap()
                .path()
                .extension()
                .unwrap()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    assert!(extensions.contains(&"md".to_string()));
    assert!(extensions.contains(&"html".to_string()));
    assert!(extensions.contains(&"json".to_string()));
}
