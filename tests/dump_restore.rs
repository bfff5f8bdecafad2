// Round trip against a live server. Run with `cargo test -- --ignored`;
// PGTOOLS_TEST_{HOST,PORT,DATABASE,USER,PASSWORD} override the defaults.
use pgtools::{ConnectionOptions, DumpOptions, Format, RestoreOptions, pg_dump, pg_restore};
use sqlx::{PgPool, Row};

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn connection_options() -> ConnectionOptions {
    ConnectionOptions::new(
        env_or("PGTOOLS_TEST_HOST", "localhost"),
        env_or("PGTOOLS_TEST_PORT", "5400").parse().unwrap(),
        env_or("PGTOOLS_TEST_DATABASE", "test"),
        env_or("PGTOOLS_TEST_USER", "test"),
        env_or("PGTOOLS_TEST_PASSWORD", "test"),
    )
}

async fn connect(options: &ConnectionOptions) -> PgPool {
    let url = format!(
        "postgres://{}:{}@{}:{}/{}",
        urlencoding::encode(options.username.as_deref().unwrap()),
        urlencoding::encode(options.password.as_deref().unwrap()),
        options.host.as_deref().unwrap(),
        options.port.unwrap(),
        options.database.as_deref().unwrap(),
    );
    PgPool::connect(&url).await.unwrap()
}

async fn populate(pool: &PgPool) {
    sqlx::query("DROP TABLE IF EXISTS patients")
        .execute(pool)
        .await
        .unwrap();
    sqlx::query("CREATE TABLE patients (id text PRIMARY KEY, data json, misc json)")
        .execute(pool)
        .await
        .unwrap();
    sqlx::query(r#"INSERT INTO patients (id, data) VALUES ('1', '{"name": "John Doe", "age": 42}')"#)
        .execute(pool)
        .await
        .unwrap();
}

async fn count_patients(pool: &PgPool) -> i64 {
    sqlx::query("SELECT count(*) AS n FROM patients")
        .fetch_one(pool)
        .await
        .unwrap()
        .get("n")
}

#[tokio::test]
#[ignore = "needs a running PostgreSQL server and pg_dump/pg_restore on PATH"]
async fn test_dump_then_restore_reproduces_rows() {
    let connection = connection_options();
    let pool = connect(&connection).await;
    populate(&pool).await;
    let original = count_patients(&pool).await;

    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("test-dump.dump");
    let file_path = file_path.to_str().unwrap().to_string();

    let dump_options = DumpOptions {
        format: Some(Format::Custom),
        table_pattern: Some("patients".to_string()),
        ..DumpOptions::new(file_path.clone())
    };
    let status = pg_dump(&connection, &dump_options)
        .await
        .unwrap()
        .wait()
        .await
        .unwrap();
    assert!(status.success());
    assert!(std::path::Path::new(&file_path).exists());

    sqlx::query("DROP TABLE patients")
        .execute(&pool)
        .await
        .unwrap();

    let restore_options = RestoreOptions {
        exit_on_error: true,
        ..RestoreOptions::new(file_path)
    };
    let status = pg_restore(&connection, &restore_options)
        .await
        .unwrap()
        .wait()
        .await
        .unwrap();
    assert!(status.success());

    assert_eq!(count_patients(&pool).await, original);
    pool.close().await;
}
