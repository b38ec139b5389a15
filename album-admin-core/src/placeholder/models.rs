use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub user_id: u32,
    pub id: u32,
    pub title: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub album_id: u32,
    pub id: u32,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}

/// Index a user collection by id, for resolving `Album::user_id` in row
/// rendering.
pub fn index_users(users: Vec<User>) -> HashMap<u32, User> {
    users.into_iter().map(|user| (user.id, user)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_decoding() {
        let input = r#"{"userId": 1, "id": 3, "title": "omnis laborum odio"}"#;
        let album: Album = serde_json::from_str(input).unwrap();
        assert_eq!(
            album,
            Album {
                user_id: 1,
                id: 3,
                title: "omnis laborum odio".to_string()
            }
        );
    }

    #[test]
    fn test_user_decoding_ignores_unknown_fields() {
        // JSONPlaceholder users carry nested address/company objects we do
        // not model; they must not break decoding.
        let input = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {"street": "Kulas Light", "geo": {"lat": "-37.3159", "lng": "81.1496"}},
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {"name": "Romaguera-Crona"}
        }"#;
        let user: User = serde_json::from_str(input).unwrap();
        assert_eq!(user.name, "Leanne Graham");
        assert_eq!(user.username, "Bret");
        assert_eq!(user.website, "hildegard.org");
    }

    #[test]
    fn test_user_decoding_without_contact_fields() {
        // The album list only embeds id/name/username/email per user.
        let input = r#"{"id": 2, "name": "Ervin Howell", "username": "Antonette", "email": "Shanna@melissa.tv"}"#;
        let user: User = serde_json::from_str(input).unwrap();
        assert_eq!(user.phone, "");
        assert_eq!(user.website, "");
    }

    #[test]
    fn test_photo_decoding() {
        let input = r#"{
            "albumId": 1,
            "id": 2,
            "title": "reprehenderit est deserunt velit ipsam",
            "url": "https://via.placeholder.com/600/771796",
            "thumbnailUrl": "https://via.placeholder.com/150/771796"
        }"#;
        let photo: Photo = serde_json::from_str(input).unwrap();
        assert_eq!(photo.album_id, 1);
        assert_eq!(photo.thumbnail_url, "https://via.placeholder.com/150/771796");
    }

    #[test]
    fn test_index_users() {
        let users = vec![
            User {
                id: 1,
                name: "Leanne Graham".to_string(),
                username: "Bret".to_string(),
                email: "Sincere@april.biz".to_string(),
                phone: String::new(),
                website: String::new(),
            },
            User {
                id: 2,
                name: "Ervin Howell".to_string(),
                username: "Antonette".to_string(),
                email: "Shanna@melissa.tv".to_string(),
                phone: String::new(),
                website: String::new(),
            },
        ];
        let map = index_users(users);
        assert_eq!(map.len(), 2);
        assert_eq!(map[&2].name, "Ervin Howell");
    }
}
