use kiln_cli::{Config, KilnCli};
use std::path::Path;

const USER: &str = r#"{
    "name": "User",
    "fields": [
        { "name": "username", "type": "String", "required": true },
        { "name": "email", "type": "String", "required": true },
        { "name": "age", "type": "Number" }
    ]
}"#;

const BLOG: &str = r#"[
    { "name": "Author", "fields": [{ "name": "name", "type": "String" }] },
    { "name": "Post", "fields": [
        { "name": "title", "type": "String", "required": true },
        { "name": "author_id", "type": "Number", "ref": "Author" }
    ] }
]"#;

fn write(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_string()
}

fn sqlite_url(dir: &Path) -> String {
    format!("sqlite:{}", dir.join("app.db").display())
}

#[tokio::test]
async fn compile_has_no_side_effects() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "user.json", USER);
    let models = dir.path().join("models");

    KilnCli::with_config(Config::new().models_dir(&models))
        .parse_from(["kiln", "compile", &file, "--flavor", "sqlite"])
        .await
        .unwrap();

    assert!(!models.exists());
}

#[tokio::test]
async fn apply_creates_tables_and_models() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "blog.json", BLOG);
    let models = dir.path().join("models");
    let url = sqlite_url(dir.path());

    let cli = KilnCli::with_config(Config::new().models_dir(&models));
    cli.parse_from(["kiln", "apply", &file, "--url", &url])
        .await
        .unwrap();

    let post = std::fs::read_to_string(models.join("Post.js")).unwrap();
    assert!(post.contains("references: { model: 'Author', key: 'Author_id' }"));
    assert!(models.join("Author.js").exists());

    // Tables already exist; applying again still succeeds
    cli.parse_from(["kiln", "apply", &file, "--url", &url])
        .await
        .unwrap();
}

#[tokio::test]
async fn models_dir_flag_overrides_config() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "user.json", USER);
    let url = sqlite_url(dir.path());
    let flag_dir = dir.path().join("flag");

    KilnCli::with_config(Config::new().models_dir(dir.path().join("config")))
        .parse_from([
            "kiln",
            "apply",
            &file,
            "--url",
            &url,
            "--models-dir",
            flag_dir.to_str().unwrap(),
        ])
        .await
        .unwrap();

    assert!(flag_dir.join("User.js").exists());
    assert!(!dir.path().join("config").exists());
}

#[tokio::test]
async fn apply_fails_when_an_entity_fails() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(
        dir.path(),
        "mixed.json",
        r#"[
            { "name": "Good", "fields": [{ "name": "title", "type": "Text" }] },
            { "name": "Empty", "fields": [] }
        ]"#,
    );
    let models = dir.path().join("models");
    let url = sqlite_url(dir.path());

    let err = KilnCli::with_config(Config::new().models_dir(&models))
        .parse_from(["kiln", "apply", &file, "--url", &url])
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "1 of 2 entities failed");
    // Entities are applied independently
    assert!(models.join("Good.js").exists());
    assert!(!models.join("Empty.js").exists());
}

#[tokio::test]
async fn strict_flag_rejects_unsafe_names() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(
        dir.path(),
        "unsafe.json",
        r#"{ "name": "User", "fields": [{ "name": "x TEXT); --", "type": "Text" }] }"#,
    );
    let models = dir.path().join("models");
    let url = sqlite_url(dir.path());

    let cli = KilnCli::with_config(Config::new().models_dir(&models));
    assert!(cli
        .parse_from(["kiln", "apply", &file, "--url", &url, "--strict"])
        .await
        .is_err());
    assert!(!models.exists());

    assert!(cli
        .parse_from(["kiln", "compile", &file, "--strict"])
        .await
        .is_err());
}

#[tokio::test]
async fn config_file_supplies_database_url() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "user.json", USER);
    let models = dir.path().join("models");

    let config = Config::new()
        .database_url(sqlite_url(dir.path()))
        .models_dir(&models);
    let config_path = dir.path().join("Kiln.toml");
    config.save(&config_path).unwrap();

    KilnCli::new()
        .parse_from([
            "kiln",
            "--config",
            config_path.to_str().unwrap(),
            "apply",
            &file,
        ])
        .await
        .unwrap();

    assert!(models.join("User.js").exists());
}

#[tokio::test]
async fn unsupported_database_url() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "user.json", USER);

    let err = KilnCli::with_config(Config::new().models_dir(dir.path()))
        .parse_from(["kiln", "apply", &file, "--url", "mysql://localhost/app"])
        .await
        .unwrap_err();

    assert!(err.to_string().contains("unsupported database"));
}

#[tokio::test]
async fn init_writes_default_config_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Kiln.toml");
    let path = path.to_str().unwrap();

    KilnCli::new()
        .parse_from(["kiln", "--config", path, "init"])
        .await
        .unwrap();
    assert_eq!(Config::load(path).unwrap(), Config::default());

    assert!(KilnCli::new()
        .parse_from(["kiln", "--config", path, "init"])
        .await
        .is_err());

    KilnCli::new()
        .parse_from(["kiln", "--config", path, "init", "--force"])
        .await
        .unwrap();
}
