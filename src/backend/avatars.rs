//! Avatar catalog served by `GET /avatars`.

use axum::Json;

/// Fixed set of selectable avatar URLs
pub const AVATAR_CATALOG: [&str; 8] = [
    "https://api.dicebear.com/7.x/lorelei/svg?seed=Chihiro&backgroundColor=b6e3f4",
    "https://api.dicebear.com/7.x/lorelei/svg?seed=Totoro&backgroundColor=c0aede",
    "https://api.dicebear.com/7.x/lorelei/svg?seed=Ponyo&backgroundColor=ffdfbf",
    "https://api.dicebear.com/7.x/lorelei/svg?seed=Kiki&backgroundColor=ffd5dc",
    "https://api.dicebear.com/7.x/lorelei/svg?seed=Howl&backgroundColor=d4f4dd",
    "https://api.dicebear.com/7.x/lorelei/svg?seed=Sophie&backgroundColor=fff4e6",
    "https://api.dicebear.com/7.x/lorelei/svg?seed=Nausicaa&backgroundColor=e3f2fd",
    "https://api.dicebear.com/7.x/lorelei/svg?seed=Ashitaka&backgroundColor=f3e5f5",
];

/// GET /avatars
pub async fn list_avatars() -> Json<Vec<&'static str>> {
    Json(AVATAR_CATALOG.to_vec())
}
