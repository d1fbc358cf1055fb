use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use models::movie::{CreateMovie, Movie, UpdateMovie};

use crate::errors::ServiceError;

#[derive(Default)]
struct StoreState {
    movies: Vec<Movie>,
    next_id: u32,
}

/// In-memory movie store. Keeps records in insertion order and assigns ids
/// from a monotonically increasing counter, so an id is never handed out
/// twice even after deletions.
#[derive(Clone)]
pub struct MovieService {
    inner: Arc<RwLock<StoreState>>,
}

impl MovieService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self { inner: Arc::new(RwLock::new(StoreState::default())) })
    }

    /// List all movies, oldest first.
    pub async fn get_all(&self) -> Vec<Movie> {
        let state = self.inner.read().await;
        state.movies.clone()
    }

    /// Fetch a single movie by id.
    pub async fn get_one(&self, id: u32) -> Result<Movie, ServiceError> {
        let state = self.inner.read().await;
        state
            .movies
            .iter()
            .find(|movie| movie.id == id)
            .cloned()
            .ok_or(ServiceError::MovieNotFound(id))
    }

    /// Validate the input and append a new movie; returns the assigned id.
    pub async fn create(&self, input: CreateMovie) -> Result<u32, ServiceError> {
        input.validate()?;
        let mut state = self.inner.write().await;
        state.next_id += 1;
        let id = state.next_id;
        state.movies.push(Movie {
            id,
            title: input.title,
            year: input.year,
            genres: input.genres,
        });
        debug!(id, "movie created");
        Ok(id)
    }

    /// Remove a movie by id; errors if the id is unknown.
    pub async fn delete_one(&self, id: u32) -> Result<bool, ServiceError> {
        let mut state = self.inner.write().await;
        let pos = state
            .movies
            .iter()
            .position(|movie| movie.id == id)
            .ok_or(ServiceError::MovieNotFound(id))?;
        state.movies.remove(pos);
        debug!(id, "movie deleted");
        Ok(true)
    }

    /// Merge a partial update into an existing movie. The record keeps its id
    /// and its position in the list.
    pub async fn update(&self, id: u32, patch: UpdateMovie) -> Result<bool, ServiceError> {
        patch.validate()?;
        let mut state = self.inner.write().await;
        let movie = state
            .movies
            .iter_mut()
            .find(|movie| movie.id == id)
            .ok_or(ServiceError::MovieNotFound(id))?;
        patch.apply_to(movie);
        debug!(id, "movie updated");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> CreateMovie {
        CreateMovie {
            title: "Test".into(),
            year: 2020,
            genres: vec!["test".into()],
        }
    }

    #[tokio::test]
    async fn get_all_starts_empty() {
        let service = MovieService::new();
        assert!(service.get_all().await.is_empty());
    }

    #[tokio::test]
    async fn create_then_get_one() -> Result<(), anyhow::Error> {
        let service = MovieService::new();
        let id = service.create(sample_input()).await?;
        assert_eq!(id, 1);

        let movie = service.get_one(id).await?;
        assert_eq!(movie.id, 1);
        assert_eq!(movie.title, "Test");
        assert_eq!(movie.year, 2020);
        assert_eq!(movie.genres, vec!["test".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn listing_preserves_creation_order() -> Result<(), anyhow::Error> {
        let service = MovieService::new();
        for n in 0..3 {
            service
                .create(CreateMovie { title: format!("Movie {n}"), year: 2000 + n, genres: vec![] })
                .await?;
        }
        let all = service.get_all().await;
        assert_eq!(all.len(), 3);
        assert_eq!(all.iter().map(|m| m.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(all[0].title, "Movie 0");
        assert_eq!(all[2].title, "Movie 2");
        Ok(())
    }

    #[tokio::test]
    async fn get_one_unknown_id_is_not_found() {
        let service = MovieService::new();
        let err = service.get_one(999).await.unwrap_err();
        assert!(matches!(err, ServiceError::MovieNotFound(999)));
        assert_eq!(err.to_string(), "Movie with ID 999 not found.");
    }

    #[tokio::test]
    async fn delete_one_removes_the_movie() -> Result<(), anyhow::Error> {
        let service = MovieService::new();
        let id = service.create(sample_input()).await?;
        assert!(service.delete_one(id).await?);
        assert!(matches!(
            service.get_one(id).await,
            Err(ServiceError::MovieNotFound(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn delete_one_unknown_id_is_not_found() {
        let service = MovieService::new();
        let err = service.delete_one(999).await.unwrap_err();
        assert_eq!(err.to_string(), "Movie with ID 999 not found.");
    }

    #[tokio::test]
    async fn update_changes_only_provided_fields() -> Result<(), anyhow::Error> {
        let service = MovieService::new();
        let id = service.create(sample_input()).await?;

        service.update(id, UpdateMovie { year: Some(2022), ..Default::default() }).await?;

        let movie = service.get_one(id).await?;
        assert_eq!(movie.id, id);
        assert_eq!(movie.year, 2022);
        assert_eq!(movie.title, "Test");
        assert_eq!(movie.genres, vec!["test".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let service = MovieService::new();
        let err = service.update(999, UpdateMovie::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "Movie with ID 999 not found.");
    }

    #[tokio::test]
    async fn update_rejects_blank_title() -> Result<(), anyhow::Error> {
        let service = MovieService::new();
        let id = service.create(sample_input()).await?;
        let err = service
            .update(id, UpdateMovie { title: Some("".into()), ..Default::default() })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        // failed update leaves the record untouched
        assert_eq!(service.get_one(id).await?.title, "Test");
        Ok(())
    }

    #[tokio::test]
    async fn ids_are_never_reused_after_delete() -> Result<(), anyhow::Error> {
        let service = MovieService::new();
        let first = service.create(sample_input()).await?;
        let second = service.create(sample_input()).await?;
        service.delete_one(first).await?;

        let third = service.create(sample_input()).await?;
        assert_eq!(third, 3);
        assert_ne!(third, first);
        assert_ne!(third, second);
        Ok(())
    }

    #[tokio::test]
    async fn full_lifecycle() -> Result<(), anyhow::Error> {
        let service = MovieService::new();
        let id = service.create(sample_input()).await?;
        assert_eq!(id, 1);
        assert_eq!(service.get_one(1).await?.year, 2020);

        service.update(1, UpdateMovie { year: Some(2022), ..Default::default() }).await?;
        assert_eq!(service.get_one(1).await?.year, 2022);

        service.delete_one(1).await?;
        assert!(service.get_one(1).await.is_err());
        Ok(())
    }
}
