use kiln::{
    driver::{Capability, Connection, Driver},
    ArtifactStore, EntityDescriptor, Error, FieldDescriptor, FileStore, Kiln, Outcome, Result,
};
use kiln_driver_sqlite::Sqlite;
use std::{
    borrow::Cow,
    path::Path,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

fn user_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("username", "String").required(),
        FieldDescriptor::new("email", "String").required(),
        FieldDescriptor::new("password", "String").required(),
        FieldDescriptor::new("age", "Number"),
    ]
}

fn kiln(models_dir: &Path) -> Kiln {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    Kiln::builder()
        .models_dir(models_dir)
        .build(Sqlite::in_memory())
        .unwrap()
}

/// A database that cannot be reached.
#[derive(Debug)]
struct Unreachable;

#[kiln::async_trait]
impl Driver for Unreachable {
    fn url(&self) -> Cow<'_, str> {
        Cow::Borrowed("postgresql://unreachable/kiln")
    }

    fn capability(&self) -> &'static Capability {
        &Capability::POSTGRESQL
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        Err(Error::driver_operation_failed(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }
}

/// A database whose server closes the first connection it accepts.
#[derive(Debug)]
struct ClosesFirstConnection {
    connects: Arc<AtomicUsize>,
}

#[derive(Debug)]
struct ClosingConnection {
    doomed: bool,
    closed: bool,
}

#[kiln::async_trait]
impl Driver for ClosesFirstConnection {
    fn url(&self) -> Cow<'_, str> {
        Cow::Borrowed("postgresql://flaky/kiln")
    }

    fn capability(&self) -> &'static Capability {
        &Capability::POSTGRESQL
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        let n = self.connects.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(ClosingConnection {
            doomed: n == 0,
            closed: false,
        }))
    }
}

#[kiln::async_trait]
impl Connection for ClosingConnection {
    async fn execute(&mut self, _sql: &str) -> Result<()> {
        if self.doomed {
            self.closed = true;
            return Err(Error::driver_operation_failed(std::io::Error::new(
                std::io::ErrorKind::ConnectionAborted,
                "connection closed",
            )));
        }
        Ok(())
    }

    fn is_valid(&self) -> bool {
        !self.closed
    }
}

/// A database that accepts the socket and never answers.
#[derive(Debug)]
struct Unresponsive;

#[kiln::async_trait]
impl Driver for Unresponsive {
    fn url(&self) -> Cow<'_, str> {
        Cow::Borrowed("postgresql://blackhole/kiln")
    }

    fn capability(&self) -> &'static Capability {
        &Capability::POSTGRESQL
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        std::future::pending().await
    }
}

#[tokio::test]
async fn creates_table_and_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let kiln = kiln(&dir.path().join("models"));

    let outcome = kiln.compile_and_apply("User", user_fields()).await;
    assert_eq!(outcome, Outcome::Created);
    assert_eq!(outcome.message(), "model and table created successfully");

    let artifact = std::fs::read_to_string(dir.path().join("models/User.js")).unwrap();
    assert!(artifact.contains("const User = sequelize.define('User', {"));
}

#[tokio::test]
async fn applying_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let kiln = kiln(dir.path());

    let first = kiln.run(&EntityDescriptor::new("User", user_fields())).await;
    let second = kiln.run(&EntityDescriptor::new("User", user_fields())).await;

    assert!(first.apply_schema.is_succeeded());
    assert!(second.apply_schema.is_succeeded());
    assert_eq!(second.outcome(), Outcome::Created);
}

#[tokio::test]
async fn recompiling_overwrites_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let kiln = kiln(dir.path());

    kiln.compile_and_apply("User", user_fields()).await;
    kiln.compile_and_apply("User", vec![FieldDescriptor::new("nickname", "Text")])
        .await;

    let artifact = std::fs::read_to_string(dir.path().join("User.js")).unwrap();
    assert!(artifact.contains("nickname: { type: Sequelize.TEXT }"));
    assert!(!artifact.contains("username"));
}

#[tokio::test]
async fn schema_failure_still_writes_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let kiln = Kiln::builder()
        .models_dir(dir.path())
        .build(Unreachable)
        .unwrap();

    let report = kiln
        .run(&EntityDescriptor::new("User", user_fields()))
        .await;

    assert!(report.compile.is_succeeded());
    assert!(report.apply_schema.is_failed());
    assert!(report
        .apply_schema
        .error()
        .unwrap()
        .is_driver_operation_failed());
    assert!(report.store_artifact.is_succeeded());
    assert_eq!(report.artifact_path, Some(dir.path().join("User.js")));
    assert_eq!(report.outcome(), Outcome::Created);

    assert!(dir.path().join("User.js").exists());
}

#[tokio::test]
async fn invalid_sql_still_writes_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let kiln = kiln(dir.path());

    let outcome = kiln
        .compile_and_apply("User", vec![FieldDescriptor::new("bad name (", "Text")])
        .await;

    assert_eq!(outcome, Outcome::Created);
    assert!(dir.path().join("User.js").exists());
}

#[tokio::test]
async fn artifact_failure_fails_request() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("models");
    std::fs::write(&blocker, "not a directory").unwrap();

    let kiln = kiln(&blocker);
    let report = kiln
        .run(&EntityDescriptor::new("User", user_fields()))
        .await;

    // The table was created and is not rolled back
    assert!(report.apply_schema.is_succeeded());
    assert!(report.store_artifact.error().unwrap().is_artifact_store());
    assert_eq!(report.artifact_path, None);

    let outcome = report.outcome();
    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(outcome.message(), "error creating the model and table");
}

#[tokio::test]
async fn invalid_descriptor_has_no_side_effects() {
    let dir = tempfile::tempdir().unwrap();
    let kiln = kiln(dir.path());

    let report = kiln.run(&EntityDescriptor::new("", user_fields())).await;

    assert!(report.compile.error().unwrap().is_invalid_descriptor());
    assert!(report.apply_schema.is_skipped());
    assert!(report.store_artifact.is_skipped());
    assert_eq!(report.outcome(), Outcome::Failed);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn strict_identifiers_reject_before_side_effects() {
    let dir = tempfile::tempdir().unwrap();
    let kiln = Kiln::builder()
        .models_dir(dir.path())
        .strict_identifiers(true)
        .build(Sqlite::in_memory())
        .unwrap();

    let outcome = kiln
        .compile_and_apply("User", vec![FieldDescriptor::new("x); DROP TABLE y; --", "Text")])
        .await;

    assert_eq!(outcome, Outcome::Failed);
    assert!(!dir.path().join("User.js").exists());
}

#[tokio::test]
async fn custom_store_and_extension() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("generated")).extension("cjs");
    let expected = store.path_for("Post");

    let kiln = Kiln::builder()
        .store(store)
        .build(Sqlite::in_memory())
        .unwrap();
    let outcome = kiln
        .compile_and_apply("Post", vec![FieldDescriptor::new("title", "String")])
        .await;

    assert!(outcome.is_success());
    assert_eq!(expected, dir.path().join("generated/Post.cjs"));
    assert!(expected.exists());
}

#[tokio::test]
async fn concurrent_runs_for_same_entity() {
    let dir = tempfile::tempdir().unwrap();
    let kiln = Arc::new(kiln(dir.path()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let kiln = kiln.clone();
            tokio::spawn(async move { kiln.compile_and_apply("User", user_fields()).await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), Outcome::Created);
    }

    assert!(dir.path().join("User.js").exists());
}

#[tokio::test]
async fn closed_connection_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let connects = Arc::new(AtomicUsize::new(0));
    let kiln = Kiln::builder()
        .models_dir(dir.path())
        .build(ClosesFirstConnection {
            connects: connects.clone(),
        })
        .unwrap();
    let entity = EntityDescriptor::new("User", user_fields());

    let first = kiln.run(&entity).await;
    assert!(first.apply_schema.is_failed());
    assert_eq!(first.outcome(), Outcome::Created);

    for _ in 0..2 {
        let report = kiln.run(&entity).await;
        assert!(report.apply_schema.is_succeeded());
    }

    // One replacement, then the new connection is reused
    assert_eq!(connects.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn connect_timeout_fails_schema_stage_only() {
    let dir = tempfile::tempdir().unwrap();
    let kiln = Kiln::builder()
        .models_dir(dir.path())
        .connect_timeout(Duration::from_millis(50))
        .build(Unresponsive)
        .unwrap();

    let report = kiln
        .run(&EntityDescriptor::new("User", user_fields()))
        .await;

    assert!(report.apply_schema.error().unwrap().is_connection_pool());
    assert!(report.store_artifact.is_succeeded());
    assert_eq!(report.outcome(), Outcome::Created);
}

#[tokio::test]
async fn empty_reference_is_a_plain_column() {
    let dir = tempfile::tempdir().unwrap();
    let kiln = kiln(dir.path());

    let report = kiln
        .run(&EntityDescriptor::new(
            "Post",
            vec![FieldDescriptor::new("author", "Number").references("")],
        ))
        .await;

    assert!(report.apply_schema.is_succeeded());
    assert_eq!(report.outcome(), Outcome::Created);

    let artifact = std::fs::read_to_string(dir.path().join("Post.js")).unwrap();
    assert!(artifact.contains("author: {"));
    assert!(!artifact.contains("references"));
}

#[tokio::test]
async fn generated_column_name_is_left_to_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let kiln = kiln(dir.path());

    let report = kiln
        .run(&EntityDescriptor::new(
            "Note",
            vec![FieldDescriptor::new("created_at", "Date")],
        ))
        .await;

    // SQLite rejects the duplicate column; the model is still written
    assert!(report.compile.is_succeeded());
    assert!(report.apply_schema.is_failed());
    assert_eq!(report.outcome(), Outcome::Created);
    assert!(dir.path().join("Note.js").exists());
}

#[tokio::test]
async fn unique_columns_reject_before_side_effects() {
    let dir = tempfile::tempdir().unwrap();
    let kiln = Kiln::builder()
        .models_dir(dir.path())
        .unique_columns(true)
        .build(Sqlite::in_memory())
        .unwrap();

    let outcome = kiln
        .compile_and_apply("Note", vec![FieldDescriptor::new("created_at", "Date")])
        .await;

    assert_eq!(outcome, Outcome::Failed);
    assert!(!dir.path().join("Note.js").exists());
}

#[test]
fn unknown_scheme_is_rejected() {
    let err = Kiln::builder().connect("mysql://localhost/kiln").unwrap_err();
    assert!(err.is_invalid_connection_url());
}

#[test]
fn malformed_url_is_rejected() {
    let err = Kiln::builder().connect("not a url").unwrap_err();
    assert!(err.is_invalid_connection_url());
}
