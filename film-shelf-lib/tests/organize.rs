mod common;

use std::fs;

use common::snapshot;
use film_shelf_lib::{
    InstallerName, execute_installer_plan, parse_installer_name, plan_installer_moves,
};
use tempfile::TempDir;

fn game(name: &str) -> InstallerName {
    InstallerName::Game(name.to_string())
}

#[test]
fn parse_names() {
    assert_eq!(parse_installer_name("setup_doom_1.0.exe"), game("doom"));
    assert_eq!(
        parse_installer_name("setup_baldurs_gate_2_2.5.0.3.exe"),
        game("baldurs_gate_2")
    );
    assert_eq!(parse_installer_name("readme.txt"), InstallerName::NotInstaller);
    assert_eq!(parse_installer_name("setup.exe"), InstallerName::NotInstaller);
    assert_eq!(parse_installer_name("Setup_doom_1.exe"), InstallerName::NotInstaller);
    assert_eq!(parse_installer_name("setup_x.exe"), InstallerName::Unparseable);
    assert_eq!(parse_installer_name("setup__1.0.exe"), InstallerName::Unparseable);
}

fn populated() -> TempDir {
    let tmp = TempDir::new().unwrap();
    for f in [
        "setup_doom_1.0.exe",
        "setup_doom_1.1.exe",
        "setup_quake_2.exe",
        "setup_x.exe",
        "setup_blocked_1.exe",
        "notes.txt",
        "blocked",
    ] {
        fs::write(tmp.path().join(f), f).unwrap();
    }
    fs::create_dir(tmp.path().join("quake")).unwrap();
    tmp
}

#[test]
fn planning_changes_nothing() {
    let tmp = populated();
    let before = snapshot(tmp.path());

    let plan = plan_installer_moves(tmp.path()).unwrap();

    assert_eq!(snapshot(tmp.path()), before);

    let planned: Vec<(String, bool)> = plan
        .moves
        .iter()
        .map(|m| (m.game.clone(), m.create_folder))
        .collect();
    assert_eq!(
        planned,
        vec![
            ("doom".to_string(), true),
            ("doom".to_string(), false),
            ("quake".to_string(), false),
        ]
    );
    assert_eq!(plan.unparseable, vec![tmp.path().join("setup_x.exe")]);
    assert_eq!(plan.blocked.len(), 1);
    assert_eq!(plan.blocked[0].0, tmp.path().join("setup_blocked_1.exe"));
}

#[test]
fn executing_moves_into_game_folders() {
    let tmp = populated();
    let plan = plan_installer_moves(tmp.path()).unwrap();

    let summary = execute_installer_plan(&plan);

    assert_eq!(summary.moved, 3);
    assert_eq!(summary.folders_created, 1);
    assert!(summary.errors.is_empty());
    assert_eq!(
        snapshot(tmp.path()),
        vec![
            "blocked",
            "doom",
            "doom/setup_doom_1.0.exe",
            "doom/setup_doom_1.1.exe",
            "notes.txt",
            "quake",
            "quake/setup_quake_2.exe",
            "setup_blocked_1.exe",
            "setup_x.exe",
        ]
    );
}

#[test]
fn existing_target_is_left_in_place() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("setup_doom_1.0.exe"), b"new").unwrap();
    fs::create_dir(tmp.path().join("doom")).unwrap();
    fs::write(tmp.path().join("doom/setup_doom_1.0.exe"), b"old").unwrap();

    let plan = plan_installer_moves(tmp.path()).unwrap();
    let summary = execute_installer_plan(&plan);

    assert_eq!(summary.moved, 0);
    assert_eq!(summary.errors.len(), 1);
    assert_eq!(fs::read(tmp.path().join("setup_doom_1.0.exe")).unwrap(), b"new");
    assert_eq!(fs::read(tmp.path().join("doom/setup_doom_1.0.exe")).unwrap(), b"old");
}

#[test]
fn missing_directory_is_an_error() {
    let tmp = TempDir::new().unwrap();
    assert!(plan_installer_moves(&tmp.path().join("gone")).is_err());
}
