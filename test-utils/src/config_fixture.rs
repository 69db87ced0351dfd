use std::path::Path;

use assert_fs::TempDir;
use assert_fs::prelude::*;

use crate::ports::LOCAL_PORT;

/// A temp tree with a config file but no data directory; daemons launched
/// against it fail storage initialization.
pub fn setup_basic_config() -> TempDir {
    let root = TempDir::new().unwrap();
    let config_dir = root.child("etc/tinynotes");
    config_dir.create_dir_all().unwrap();

    let data_dir = root.child("var/tinynotes");
    let port = LOCAL_PORT.with(|port| *port);
    let config = format!(
        r#"address = "127.0.0.1"
port = {port}
data_directory = "{}"
"#,
        data_dir.to_str().unwrap(),
    );
    config_dir.child("tinynotes.toml").write_str(&config).unwrap();

    root
}

pub fn setup_basic_config_with_data() -> TempDir {
    let root = setup_basic_config();
    let data_dir = root.child("var/tinynotes");
    data_dir.create_dir_all().unwrap();
    chmod(data_dir.path(), 0o700);
    root
}

#[cfg(unix)]
fn chmod(path: &Path, mode: u32) {
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, Permissions::from_mode(mode)).unwrap();
}

#[cfg(not(unix))]
fn chmod(_path: &Path, _mode: u32) {}
