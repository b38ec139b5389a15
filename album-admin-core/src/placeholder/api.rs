use super::{client::PlaceholderClient, models::*};
use crate::error::AdminError;
use log::debug;

impl PlaceholderClient {
    /// Full album collection. The API has no server-side paging; paging is
    /// done client-side on the returned dataset.
    pub async fn get_albums(&self) -> Result<Vec<Album>, AdminError> {
        let response = self.call_path("/albums").await?;
        let albums: Vec<Album> = response.json().await?;
        debug!("fetched {} albums", albums.len());
        Ok(albums)
    }

    pub async fn get_users(&self) -> Result<Vec<User>, AdminError> {
        let response = self.call_path("/users").await?;
        let users: Vec<User> = response.json().await?;
        debug!("fetched {} users", users.len());
        Ok(users)
    }

    pub async fn get_album(&self, id: u32) -> Result<Album, AdminError> {
        let response = self.call_path(&format!("/albums/{}", id)).await?;
        Ok(response.json().await?)
    }

    pub async fn get_user(&self, id: u32) -> Result<User, AdminError> {
        let response = self.call_path(&format!("/users/{}", id)).await?;
        Ok(response.json().await?)
    }

    pub async fn get_album_photos(&self, album_id: u32) -> Result<Vec<Photo>, AdminError> {
        let response = self
            .call_path(&format!("/albums/{}/photos", album_id))
            .await?;
        let photos: Vec<Photo> = response.json().await?;
        debug!("fetched {} photos for album {}", photos.len(), album_id);
        Ok(photos)
    }

    /// Albums belonging to one user. There is no `/users/{id}/albums` route
    /// in use; the full collection is fetched and filtered client-side.
    pub async fn get_user_albums(&self, user_id: u32) -> Result<Vec<Album>, AdminError> {
        let albums = self.get_albums().await?;
        Ok(albums
            .into_iter()
            .filter(|album| album.user_id == user_id)
            .collect())
    }
}
