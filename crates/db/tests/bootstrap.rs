use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    aerodesk_db::health_check(&pool).await.unwrap();

    let tables = [
        "users",
        "airports",
        "terminals",
        "gates",
        "stands",
        "airlines",
        "aircraft_types",
        "aircraft",
        "flights",
        "passengers",
        "tickets",
        "checkins",
        "baggage",
        "personnel",
        "crews",
        "crew_members",
        "incidents",
        "maintenance",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// The shared trigger keeps `updated_at` moving on UPDATE.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_updated_at_trigger(pool: PgPool) {
    let (id, created): (i64, chrono::DateTime<chrono::Utc>) = sqlx::query_as(
        "INSERT INTO airlines (name, iata_code, country) VALUES ('Aeroflot', 'SU', 'Russia')
         RETURNING id, updated_at",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    let (updated,): (chrono::DateTime<chrono::Utc>,) =
        sqlx::query_as("UPDATE airlines SET name = 'Aeroflot PJSC' WHERE id = $1 RETURNING updated_at")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();

    assert!(updated >= created);
}
