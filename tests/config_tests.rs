//! Configuration file loading and validation.

use std::io::Write;

use spawnselect::config::Config;
use spawnselect::domain::BackendKind;
use spawnselect::error::{ConfigError, Error};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn loads_a_full_configuration() {
    let file = write_config(
        r#"
[[profiles]]
display = "Local Notebook Server"
key = "local"
backend = "local_process"

[profiles.options]
start_timeout = 15
http_timeout = 10

[[profiles]]
display = "GPU box"
key = "docker-img1"
backend = "docker_container"

[profiles.options]
container_image = "img1"

[images]
default = [{ display = "base", reference = "jupyterhub/singleuser" }]

[images.groups]
group_a = [{ display = "base image group_a", reference = "jupyterhub/singleuser" }]

[templates]
selected_marker = "selected"

[discovery]
tag_suffix = "jupyterhub"
sidecar_timeout_ms = 500

[logging]
level = "debug"
format = "json"
"#,
    );

    let config = Config::load(file.path()).unwrap();

    assert_eq!(config.profiles.len(), 2);
    assert_eq!(config.profiles[0].backend, BackendKind::LocalProcess);
    assert_eq!(config.profiles[1].options["container_image"], "img1");
    assert_eq!(config.images.for_group("group_a").len(), 1);
    assert_eq!(config.discovery.sidecar_timeout_ms, 500);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let file = write_config("");
    let config = Config::load(file.path()).unwrap();

    assert_eq!(config.profiles.len(), 1);
    assert_eq!(config.profiles[0].key, "local");
    assert_eq!(config.discovery.tag_suffix, "jupyterhub");
    assert_eq!(config.templates.selected_marker, "selected");
    assert!(config.images.default.is_empty());
}

#[test]
fn duplicate_profile_keys_are_rejected() {
    let file = write_config(
        r#"
[[profiles]]
display = "One"
key = "local"
backend = "local_process"

[[profiles]]
display = "Two"
key = "local"
backend = "docker_container"
"#,
    );

    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::DuplicateKey { key })) => assert_eq!(key, "local"),
        other => panic!("expected duplicate key rejection, got {other:?}"),
    }
}

#[test]
fn unknown_template_placeholder_is_rejected_at_load_time() {
    let file = write_config(
        r#"
[templates]
image_option = "<option value=\"{key}\" {first}>{type}</option>"
"#,
    );

    // {type} is a profile-template field, not an image-template one.
    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::UnknownPlaceholder { template, name })) => {
            assert_eq!(template, "image_option");
            assert_eq!(name, "type");
        }
        other => panic!("expected placeholder rejection, got {other:?}"),
    }
}

#[test]
fn unknown_backend_kind_fails_to_parse() {
    let file = write_config(
        r#"
[[profiles]]
display = "Weird"
key = "weird"
backend = "mainframe"
"#,
    );

    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}
