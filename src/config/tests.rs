//! Tests for config parsing, defaults, and validation.

use super::*;
use serial_test::serial;
use tempfile::TempDir;

#[test]
fn default_config_is_valid() {
    let config = Config::default();
    assert!(config.validate().is_ok());
}

#[test]
fn default_programs() {
    let config = Config::default();
    assert_eq!(config.transparency.program, "transset");
    assert_eq!(config.locker.program, "xlock");
    assert_eq!(config.capture.program, "scrot");
    assert_eq!(config.mixer.program, "aumix");
    assert_eq!(config.pdf.program, "pdftotext");
    assert_eq!(config.shell, "sh");
    assert_eq!(config.mixer.step, 5);
}

#[test]
fn parse_empty_yaml_yields_defaults() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config.mixer.args, "-v");
    assert_eq!(config.transparency.window_args, "-a");
    assert_eq!(config.capture.directory, "~/screenshots");
}

#[test]
fn parse_partial_yaml_keeps_other_defaults() {
    let yaml = r#"
mixer:
  program: amixer
  step: 10
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.mixer.program, "amixer");
    assert_eq!(config.mixer.step, 10);
    // Untouched sections keep defaults
    assert_eq!(config.locker.program, "xlock");
    assert_eq!(config.mixer.args, "-v");
}

#[test]
fn parse_full_yaml() {
    let yaml = r#"
transparency:
  program: transset-df
  args: "--inc"
  window_args: "-p"
  default_opacity: 0.6
locker:
  program: slock
capture:
  program: import
  args: "-window root"
  directory: /data/shots
mixer:
  program: amixer
  args: "set Master"
  step: 2
pdf:
  program: /opt/xpdf/bin/pdftotext
shell: dash
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.transparency.program, "transset-df");
    assert_eq!(config.transparency.args, "--inc");
    assert_eq!(config.transparency.window_args, "-p");
    assert_eq!(config.transparency.default_opacity, 0.6);
    assert_eq!(config.locker.program, "slock");
    assert_eq!(config.capture.directory, "/data/shots");
    assert_eq!(config.mixer.step, 2);
    assert_eq!(config.pdf.program, "/opt/xpdf/bin/pdftotext");
    assert_eq!(config.shell, "dash");
}

#[test]
fn empty_program_fails_validation() {
    let yaml = r#"
mixer:
  program: ""
"#;
    let result = Config::from_yaml(yaml);
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("mixer.program must not be empty")
    );
}

#[test]
fn zero_step_fails_validation() {
    let yaml = r#"
mixer:
  step: 0
"#;
    let result = Config::from_yaml(yaml);
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("mixer.step must be greater than 0")
    );
}

#[test]
fn out_of_range_default_opacity_fails_validation() {
    let yaml = r#"
transparency:
  default_opacity: 1.5
"#;
    let result = Config::from_yaml(yaml);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("default_opacity"));
}

#[test]
fn empty_shell_fails_validation() {
    let yaml = "shell: \"  \"\n";
    let result = Config::from_yaml(yaml);
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("shell must not be empty")
    );
}

#[test]
fn invalid_yaml_is_config_error() {
    let result = Config::from_yaml("mixer: [not, a, mapping]");
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("failed to parse config")
    );
}

#[test]
fn forward_compatibility_preserves_unknown_fields() {
    let yaml = r#"
mixer:
  program: amixer
  future_setting: true
future_top_level: "also preserved"
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert!(config.mixer.extra.contains_key("future_setting"));
    assert!(config.extra.contains_key("future_top_level"));

    // Round-trip should preserve unknown fields
    let yaml_out = config.to_yaml().unwrap();
    let config2 = Config::from_yaml(&yaml_out).unwrap();
    assert!(config2.extra.contains_key("future_top_level"));
}

#[test]
fn load_missing_file_returns_none() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nope.yaml");
    let loaded = Config::load(&path).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn load_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    std::fs::write(&path, "locker:\n  program: slock\n").unwrap();

    let loaded = Config::load(&path).unwrap().unwrap();
    assert_eq!(loaded.locker.program, "slock");
}

#[test]
fn resolve_explicit_missing_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nope.yaml");
    let result = Config::resolve(Some(&path));
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("does not exist"));
}

#[test]
fn resolve_explicit_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    std::fs::write(&path, "shell: bash\n").unwrap();

    let config = Config::resolve(Some(&path)).unwrap();
    assert_eq!(config.shell, "bash");
}

#[test]
#[serial]
fn default_path_honors_xdg_config_home() {
    let temp_dir = TempDir::new().unwrap();
    let old = std::env::var_os("XDG_CONFIG_HOME");
    unsafe {
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
    }

    let path = default_path().unwrap();
    assert!(path.starts_with(temp_dir.path()));
    assert!(path.ends_with("deskctl/config.yaml"));

    unsafe {
        match old {
            Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }
}
