//! REST paths of the social-network API.

pub const LOGIN: &str = "/api/auth/login";
pub const LOGOUT: &str = "/api/auth/logout";
pub const ME: &str = "/api/me";
pub const PROFILE: &str = "/api/me/profile";
pub const SUGGESTED_USERS: &str = "/api/users/suggested";

pub const POSTS: &str = "/api/posts";
pub const GROUPS: &str = "/api/groups";

pub const ME_POSTS: &str = "/api/me/posts";
pub const ME_COMMENTS: &str = "/api/me/comments";
pub const ME_LIKES: &str = "/api/me/likes";
pub const ME_COUNTS: &str = "/api/me/counts";

pub fn post(id: u64) -> String {
    format!("{POSTS}/{id}")
}

pub fn post_like(id: u64) -> String {
    format!("{POSTS}/{id}/like")
}

pub fn post_dislike(id: u64) -> String {
    format!("{POSTS}/{id}/dislike")
}

pub fn post_comments(post_id: u64) -> String {
    format!("{POSTS}/{post_id}/comments")
}

pub fn comment(id: u64) -> String {
    format!("/api/comments/{id}")
}

pub fn group(id: u64) -> String {
    format!("{GROUPS}/{id}")
}
