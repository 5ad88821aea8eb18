//! `SQLite` implementation of [`StationRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use surfsup_app::ports::StationRepository;
use surfsup_domain::error::SurfsUpError;
use surfsup_domain::station::Station;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Station`].
struct Wrapper(Station);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Station {
            id: row.try_get("id")?,
            station: row.try_get("station")?,
            name: row.try_get("name")?,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
            elevation: row.try_get("elevation")?,
        }))
    }
}

const SELECT_CODES: &str = "SELECT station FROM station ORDER BY id";
const SELECT_ALL: &str = r"
    SELECT id, station, name, latitude, longitude, elevation
    FROM station
    ORDER BY id
";

/// `SQLite`-backed station repository.
pub struct SqliteStationRepository {
    pool: SqlitePool,
}

impl SqliteStationRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl StationRepository for SqliteStationRepository {
    async fn list_codes(&self) -> Result<Vec<String>, SurfsUpError> {
        let rows: Vec<(String,)> = sqlx::query_as(SELECT_CODES)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|(code,)| code).collect())
    }

    async fn get_all(&self) -> Result<Vec<Station>, SurfsUpError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteStationRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteStationRepository::new(db.pool().clone())
    }

    async fn insert(repo: &SqliteStationRepository, station: &Station) {
        sqlx::query("INSERT INTO station (id, station, name, latitude, longitude, elevation) VALUES (?, ?, ?, ?, ?, ?)")
            .bind(station.id)
            .bind(&station.station)
            .bind(&station.name)
            .bind(station.latitude)
            .bind(station.longitude)
            .bind(station.elevation)
            .execute(&repo.pool)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn should_return_empty_when_no_stations() {
        let repo = setup().await;
        assert!(repo.list_codes().await.unwrap().is_empty());
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_list_codes_in_id_order() {
        let repo = setup().await;
        insert(&repo, &Station::builder().id(2).station("USC00513117").build()).await;
        insert(&repo, &Station::builder().id(1).station("USC00519397").build()).await;

        let codes = repo.list_codes().await.unwrap();
        assert_eq!(codes, vec!["USC00519397", "USC00513117"]);
    }

    #[tokio::test]
    async fn should_preserve_metadata_through_roundtrip() {
        let repo = setup().await;
        let station = Station::builder()
            .id(1)
            .station("USC00519397")
            .name("WAIKIKI 717.2, HI US")
            .location(21.2716, -157.8168, 3.0)
            .build();
        insert(&repo, &station).await;
        insert(&repo, &Station::builder().id(2).station("USC00513117").build()).await;

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], station);
        assert!(all[1].name.is_none());
    }
}
