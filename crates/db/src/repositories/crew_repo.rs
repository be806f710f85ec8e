//! Repository for the `crews` and `crew_members` tables.
//!
//! Crew writes replace the whole member list inside one transaction.

use std::collections::HashMap;

use aerodesk_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use super::row_exists;
use crate::models::crew::{Crew, CrewMember, CrewWithMembers, NewCrewMember};

const COLUMNS: &str = "id, flight_id, created_at, updated_at";
const MEMBER_COLUMNS: &str = "id, crew_id, personnel_id, role, created_at, updated_at";

pub struct CrewRepo;

impl CrewRepo {
    /// Insert a crew for a flight together with its members.
    pub async fn create(
        pool: &PgPool,
        flight_id: DbId,
        members: &[NewCrewMember],
    ) -> Result<CrewWithMembers, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("INSERT INTO crews (flight_id) VALUES ($1) RETURNING {COLUMNS}");
        let crew = sqlx::query_as::<_, Crew>(&query)
            .bind(flight_id)
            .fetch_one(&mut *tx)
            .await?;

        let members = insert_members(&mut tx, crew.id, members).await?;

        tx.commit().await?;
        Ok(CrewWithMembers { crew, members })
    }

    /// Update a crew and, when `members` is supplied, replace its member list.
    ///
    /// Returns `None` if no crew with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        flight_id: Option<DbId>,
        members: Option<&[NewCrewMember]>,
    ) -> Result<Option<CrewWithMembers>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE crews SET flight_id = COALESCE($2, flight_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(crew) = sqlx::query_as::<_, Crew>(&query)
            .bind(id)
            .bind(flight_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let members = match members {
            Some(members) => {
                sqlx::query("DELETE FROM crew_members WHERE crew_id = $1")
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;
                insert_members(&mut tx, id, members).await?
            }
            None => {
                let query = format!(
                    "SELECT {MEMBER_COLUMNS} FROM crew_members WHERE crew_id = $1 ORDER BY id"
                );
                sqlx::query_as::<_, CrewMember>(&query)
                    .bind(id)
                    .fetch_all(&mut *tx)
                    .await?
            }
        };

        tx.commit().await?;
        Ok(Some(CrewWithMembers { crew, members }))
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CrewWithMembers>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM crews WHERE id = $1");
        let Some(crew) = sqlx::query_as::<_, Crew>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };
        let members = Self::members_of(pool, id).await?;
        Ok(Some(CrewWithMembers { crew, members }))
    }

    /// The id of the crew assigned to a flight, if any.
    pub async fn find_id_by_flight(
        pool: &PgPool,
        flight_id: DbId,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM crews WHERE flight_id = $1")
            .bind(flight_id)
            .fetch_optional(pool)
            .await
    }

    /// List crews with their members, ordered by flight.
    pub async fn list(pool: &PgPool) -> Result<Vec<CrewWithMembers>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM crews ORDER BY flight_id, id");
        let crews = sqlx::query_as::<_, Crew>(&query).fetch_all(pool).await?;

        let ids: Vec<DbId> = crews.iter().map(|c| c.id).collect();
        let query = format!(
            "SELECT {MEMBER_COLUMNS} FROM crew_members WHERE crew_id = ANY($1) ORDER BY id"
        );
        let rows = sqlx::query_as::<_, CrewMember>(&query)
            .bind(&ids)
            .fetch_all(pool)
            .await?;

        let mut by_crew: HashMap<DbId, Vec<CrewMember>> = HashMap::new();
        for member in rows {
            by_crew.entry(member.crew_id).or_default().push(member);
        }

        Ok(crews
            .into_iter()
            .map(|crew| {
                let members = by_crew.remove(&crew.id).unwrap_or_default();
                CrewWithMembers { crew, members }
            })
            .collect())
    }

    pub async fn members_of(pool: &PgPool, crew_id: DbId) -> Result<Vec<CrewMember>, sqlx::Error> {
        let query =
            format!("SELECT {MEMBER_COLUMNS} FROM crew_members WHERE crew_id = $1 ORDER BY id");
        sqlx::query_as::<_, CrewMember>(&query)
            .bind(crew_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a crew and its members in one transaction.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if !row_exists(&mut *tx, "crews", id).await? {
            return Ok(false);
        }
        sqlx::query("DELETE FROM crew_members WHERE crew_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM crews WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }
}

async fn insert_members(
    tx: &mut Transaction<'_, Postgres>,
    crew_id: DbId,
    members: &[NewCrewMember],
) -> Result<Vec<CrewMember>, sqlx::Error> {
    let query = format!(
        "INSERT INTO crew_members (crew_id, personnel_id, role)
         VALUES ($1, $2, $3)
         RETURNING {MEMBER_COLUMNS}"
    );
    let mut inserted = Vec::with_capacity(members.len());
    for member in members {
        let row = sqlx::query_as::<_, CrewMember>(&query)
            .bind(crew_id)
            .bind(member.personnel_id)
            .bind(&member.role)
            .fetch_one(&mut **tx)
            .await?;
        inserted.push(row);
    }
    Ok(inserted)
}
