//! E2E тесты для CLI инструмента `remessa`.
//!
//! Проверяем полный жизненный цикл файла обмена:
//! сохранение → чтение → перемещение → удаление, а также очистку директории.

use std::{fs, path::Path};

use assert_cmd::Command;
use e2e_tests::fixture;
use predicates::prelude::*;
use tempfile::tempdir;

/// Создать команду для запуска remessa без аргументов и переменных окружения.
///
/// `cargo_bin` deprecated из-за edge case с custom build directories,
/// но это единственный способ для кросс-крейтовых бинарников.
#[expect(deprecated)]
fn remessa_bin(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("remessa").unwrap();
    cmd.current_dir(cwd)
        .env_remove("REMESSA_DIR")
        .env_remove("REMESSA_TEMPLATE")
        .env_remove("RUST_LOG");
    cmd
}

/// Создать команду для работы с директорией `dir`.
fn remessa(dir: &Path) -> Command {
    let mut cmd = remessa_bin(dir);
    cmd.args(["--dir", dir.to_str().unwrap()]);
    cmd
}

/// Сохранить фикстуру под токеном `token` с шаблоном `CB%s`.
fn save_fixture(dir: &Path, token: &str) {
    remessa(dir)
        .args(["--template", "CB%s", "save", "--token", token, "--input"])
        .arg(fixture("retorno_example.txt"))
        .assert()
        .success();
}

// ============================================================================
// save
// ============================================================================

#[test]
fn test_save_from_file() {
    let dir = tempdir().unwrap();

    save_fixture(dir.path(), "0001");

    let saved = fs::read(dir.path().join("CB0001.txt")).unwrap();
    assert_eq!(saved, fs::read(fixture("retorno_example.txt")).unwrap());
}

#[test]
fn test_save_from_stdin() {
    let dir = tempdir().unwrap();

    remessa(dir.path())
        .args(["save", "--token", "42"])
        .write_stdin("100HEADER\n900TRAILER\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("42.txt"));

    assert_eq!(fs::read_to_string(dir.path().join("42.txt")).unwrap(), "100HEADER\n900TRAILER\n");
}

#[test]
fn test_save_never_overwrites() {
    let dir = tempdir().unwrap();
    save_fixture(dir.path(), "0001");

    remessa(dir.path())
        .args(["--template", "CB%s", "save", "--token", "0001"])
        .write_stdin("100REPLACED\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    // Исходное содержимое не изменилось
    let saved = fs::read(dir.path().join("CB0001.txt")).unwrap();
    assert_eq!(saved, fs::read(fixture("retorno_example.txt")).unwrap());
}

#[test]
fn test_template_without_placeholder_fails() {
    let dir = tempdir().unwrap();

    remessa(dir.path())
        .args(["--template", "CB", "save", "--token", "1"])
        .write_stdin("100A\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'%s' placeholder"));
}

#[test]
fn test_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing");

    remessa_bin(dir.path())
        .args(["--dir", missing.to_str().unwrap(), "read", "--token", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory"));
}

// ============================================================================
// read
// ============================================================================

#[test]
fn test_read_prints_record_types_in_order() {
    let dir = tempdir().unwrap();
    save_fixture(dir.path(), "0001");

    let output = remessa(dir.path())
        .args(["--template", "CB%s", "read", "--token", "0001"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let codes: Vec<String> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|l| l.split('\t').next().unwrap().to_string())
        .collect();
    // Пустая строка пропущена
    assert_eq!(codes, ["100", "200", "200", "900"]);
}

#[test]
fn test_read_json_lines() {
    let dir = tempdir().unwrap();
    save_fixture(dir.path(), "0001");

    let output = remessa(dir.path())
        .args(["--template", "CB%s", "read", "--token", "0001", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let records: Vec<serde_json::Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 4);
    assert_eq!(records[1]["record_type"], "200");
    assert!(records[1]["raw_line"].as_str().unwrap().contains("JOAO DA SILVA"));
}

#[test]
fn test_read_missing_file_names_path() {
    let dir = tempdir().unwrap();

    remessa(dir.path())
        .args(["read", "--token", "absent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found").and(predicate::str::contains("absent.txt")));
}

// ============================================================================
// move / remove
// ============================================================================

#[test]
fn test_move_to_subdirectory() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("processed")).unwrap();
    save_fixture(dir.path(), "0001");

    remessa(dir.path())
        .args(["--template", "CB%s", "move", "--token", "0001", "--to", "processed"])
        .assert()
        .success();

    assert!(!dir.path().join("CB0001.txt").exists());
    assert!(dir.path().join("processed").join("CB0001.txt").exists());
}

#[test]
fn test_move_conflict_keeps_source() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("processed")).unwrap();
    fs::write(dir.path().join("processed").join("CB0001.txt"), "100OTHER\n").unwrap();
    save_fixture(dir.path(), "0001");

    remessa(dir.path())
        .args(["--template", "CB%s", "move", "--token", "0001", "--to", "processed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("same name"));

    assert!(dir.path().join("CB0001.txt").exists());
    assert_eq!(
        fs::read_to_string(dir.path().join("processed").join("CB0001.txt")).unwrap(),
        "100OTHER\n"
    );
}

#[test]
fn test_remove() {
    let dir = tempdir().unwrap();
    save_fixture(dir.path(), "0001");

    remessa(dir.path())
        .args(["--template", "CB%s", "remove", "--token", "0001"])
        .assert()
        .success();
    assert!(!dir.path().join("CB0001.txt").exists());

    // Повторное удаление — ошибка, но без паники
    remessa(dir.path())
        .args(["--template", "CB%s", "remove", "--token", "0001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not remove"));
}

// ============================================================================
// list / purge
// ============================================================================

#[test]
fn test_list_txt_files() {
    let dir = tempdir().unwrap();
    for name in ["b.txt", "a.txt", "notes.md", "UPPER.TXT"] {
        fs::write(dir.path().join(name), "").unwrap();
    }

    remessa(dir.path()).arg("list").assert().success().stdout("a.txt\nb.txt\n");
}

#[test]
fn test_purge_keeps_protected_files() {
    let dir = tempdir().unwrap();
    for name in ["a.txt", "b.txt", "README"] {
        fs::write(dir.path().join(name), "").unwrap();
    }

    remessa(dir.path()).args(["purge", "--protect", "README"]).assert().success();

    assert!(!dir.path().join("a.txt").exists());
    assert!(!dir.path().join("b.txt").exists());
    assert!(dir.path().join("README").exists());
}

#[test]
fn test_dir_from_environment() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("x.txt"), "").unwrap();

    remessa_bin(dir.path())
        .env("REMESSA_DIR", dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout("x.txt\n");
}

#[test]
fn test_log_level_from_dotenv() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".env"), "RUST_LOG=debug\n").unwrap();

    remessa(dir.path())
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("parsed arguments"));
}
