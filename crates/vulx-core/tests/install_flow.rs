use std::fs;

use vulx_core::{
    spawn_install, Activation, Desktop, DesktopAction, Explorer, InstallPlan, MenuItem, Session,
    UserStore, VulxError, VulxPaths,
};

#[test]
fn install_login_and_browse() {
    let source = tempfile::tempdir().unwrap();
    fs::write(source.path().join("vulx.bin"), "core").unwrap();
    fs::create_dir(source.path().join("games")).unwrap();
    fs::write(source.path().join("games/snake.txt"), "ssss").unwrap();

    let target = tempfile::tempdir().unwrap();
    let plan = InstallPlan::new(source.path(), target.path(), "ada", "lovelace");
    let report = spawn_install(plan).unwrap().wait(|_, _| {}).unwrap();
    assert_eq!(report.failed, 0);

    // Login
    let paths = VulxPaths::new(target.path());
    let store = UserStore::load(&paths.users_file).unwrap();
    assert!(matches!(
        Session::login(paths.clone(), &store, "ada", "babbage"),
        Err(VulxError::InvalidCredentials)
    ));
    let session = Session::login(paths, &store, "ada", "lovelace").unwrap();

    // Desktop
    let mut desktop = Desktop::new(session);
    let apps: Vec<String> = desktop
        .installed_apps()
        .iter()
        .map(|a| a.name.to_string())
        .collect();
    assert_eq!(apps, vec!["LibreOffice", "Vulxium Browser"]);
    assert_eq!(desktop.select(MenuItem::FileExplorer), DesktopAction::OpenExplorer);

    // Explorer
    let mut explorer = Explorer::new();
    assert!(explorer.navigate(target.path()));
    let names: Vec<String> = explorer.entries().iter().map(|c| c.name.to_string()).collect();
    assert_eq!(
        names,
        vec!["apps", "config.json", "games", "users.txt", "vulx.bin"]
    );

    assert_eq!(
        explorer.activate("games"),
        Activation::Entered(target.path().join("games"))
    );
    assert_eq!(explorer.entries().len(), 1);
    assert!(explorer.back());
    assert_eq!(explorer.current(), Some(target.path()));
    assert!(explorer.forward());
    assert!(!explorer.forward());
}
