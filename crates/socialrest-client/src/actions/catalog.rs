use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::json;

use socialrest_core::error::SocialRestError;
use socialrest_core::protocol::{paths, RequestDescriptor};

use crate::config::{Credentials, Fixtures};

/// Who may trigger an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Only while logged out.
    Login,
    /// Always.
    Public,
    /// Only while logged in.
    Authenticated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Login,
    Logout,
    Me,
    UpdateProfile,
    SuggestedUsers,
    MePosts,
    MeComments,
    MeLikes,
    MeCounts,
    ListPosts,
    GetPost,
    CreatePost,
    UpdatePost,
    DeletePost,
    LikePost,
    DislikePost,
    ListComments,
    CreateComment,
    UpdateComment,
    DeleteComment,
    ListGroups,
    GetGroup,
    CreateGroup,
    UpdateGroup,
    DeleteGroup,
}

/// Inputs an action needs to build its request.
#[derive(Debug, Clone, Copy)]
pub struct ActionContext<'a> {
    pub credentials: &'a Credentials,
    pub fixtures: &'a Fixtures,
    /// Milliseconds since the epoch; keeps created titles distinct.
    pub stamp_ms: u128,
}

impl<'a> ActionContext<'a> {
    pub fn new(credentials: &'a Credentials, fixtures: &'a Fixtures) -> Self {
        let stamp_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        Self {
            credentials,
            fixtures,
            stamp_ms,
        }
    }
}

impl Action {
    /// Button order of the demo surface.
    pub const ALL: [Action; 25] = [
        Action::Login,
        Action::Logout,
        Action::Me,
        Action::UpdateProfile,
        Action::SuggestedUsers,
        Action::MePosts,
        Action::MeComments,
        Action::MeLikes,
        Action::MeCounts,
        Action::ListPosts,
        Action::GetPost,
        Action::CreatePost,
        Action::UpdatePost,
        Action::DeletePost,
        Action::LikePost,
        Action::DislikePost,
        Action::ListComments,
        Action::CreateComment,
        Action::UpdateComment,
        Action::DeleteComment,
        Action::ListGroups,
        Action::GetGroup,
        Action::CreateGroup,
        Action::UpdateGroup,
        Action::DeleteGroup,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Action::Login => "login",
            Action::Logout => "logout",
            Action::Me => "me",
            Action::UpdateProfile => "update-profile",
            Action::SuggestedUsers => "suggested-users",
            Action::MePosts => "me-posts",
            Action::MeComments => "me-comments",
            Action::MeLikes => "me-likes",
            Action::MeCounts => "me-counts",
            Action::ListPosts => "list-posts",
            Action::GetPost => "get-post",
            Action::CreatePost => "create-post",
            Action::UpdatePost => "update-post",
            Action::DeletePost => "delete-post",
            Action::LikePost => "like-post",
            Action::DislikePost => "dislike-post",
            Action::ListComments => "list-comments",
            Action::CreateComment => "create-comment",
            Action::UpdateComment => "update-comment",
            Action::DeleteComment => "delete-comment",
            Action::ListGroups => "list-groups",
            Action::GetGroup => "get-group",
            Action::CreateGroup => "create-group",
            Action::UpdateGroup => "update-group",
            Action::DeleteGroup => "delete-group",
        }
    }

    pub fn access(self) -> Access {
        match self {
            Action::Login => Access::Login,
            Action::ListPosts
            | Action::GetPost
            | Action::ListComments
            | Action::ListGroups
            | Action::GetGroup => Access::Public,
            _ => Access::Authenticated,
        }
    }

    pub fn is_available(self, logged_in: bool) -> bool {
        match self.access() {
            Access::Login => !logged_in,
            Access::Public => true,
            Access::Authenticated => logged_in,
        }
    }

    pub fn request(self, cx: &ActionContext<'_>) -> RequestDescriptor {
        let f = cx.fixtures;
        let stamp = cx.stamp_ms;

        let desc = match self {
            Action::Login => {
                return RequestDescriptor::post(paths::LOGIN)
                    .with_body(json!({
                        "email": cx.credentials.email,
                        "password": cx.credentials.password,
                    }))
                    .public()
                    .login();
            }
            Action::Logout => RequestDescriptor::post(paths::LOGOUT),
            Action::Me => RequestDescriptor::get(paths::ME),
            Action::UpdateProfile => RequestDescriptor::put(paths::PROFILE).with_body(json!({
                "username": "REST_User",
                "description": "Updated via REST mock.",
            })),
            Action::SuggestedUsers => RequestDescriptor::get(paths::SUGGESTED_USERS),
            Action::MePosts => RequestDescriptor::get(paths::ME_POSTS),
            Action::MeComments => RequestDescriptor::get(paths::ME_COMMENTS),
            Action::MeLikes => RequestDescriptor::get(paths::ME_LIKES),
            Action::MeCounts => RequestDescriptor::get(paths::ME_COUNTS),
            Action::ListPosts => RequestDescriptor::get(paths::POSTS),
            Action::GetPost => RequestDescriptor::get(paths::post(f.post_id)),
            Action::CreatePost => RequestDescriptor::post(paths::POSTS).with_body(json!({
                "title": format!("REST Post {stamp}"),
                "content": "Content from REST client.",
                "image": "",
            })),
            Action::UpdatePost => RequestDescriptor::put(paths::post(f.post_id)).with_body(json!({
                "title": format!("Updated REST Post {stamp}"),
                "content": "Updated content.",
                "image": "/new/image.png",
            })),
            Action::DeletePost => RequestDescriptor::delete(paths::post(f.missing_id)),
            Action::LikePost => RequestDescriptor::post(paths::post_like(f.post_id)),
            Action::DislikePost => RequestDescriptor::delete(paths::post_dislike(f.post_id)),
            Action::ListComments => RequestDescriptor::get(paths::post_comments(f.post_id)),
            Action::CreateComment => RequestDescriptor::post(paths::post_comments(f.post_id))
                .with_body(json!({ "text": format!("REST Comment {stamp}") })),
            Action::UpdateComment => RequestDescriptor::put(paths::comment(f.comment_id))
                .with_body(json!({ "text": format!("Updated REST Comment {stamp}") })),
            Action::DeleteComment => RequestDescriptor::delete(paths::comment(f.missing_id)),
            Action::ListGroups => RequestDescriptor::get(paths::GROUPS),
            Action::GetGroup => RequestDescriptor::get(paths::group(f.group_id)),
            Action::CreateGroup => RequestDescriptor::post(paths::GROUPS).with_body(json!({
                "title": format!("REST Group {stamp}"),
                "photo": "/group/image.png",
            })),
            Action::UpdateGroup => RequestDescriptor::put(paths::group(f.group_id))
                .with_body(json!({ "title": format!("Updated REST Group {stamp}") })),
            Action::DeleteGroup => RequestDescriptor::delete(paths::group(f.missing_id)),
        };

        match self.access() {
            Access::Public => desc.public(),
            _ => desc,
        }
    }
}

impl FromStr for Action {
    type Err = SocialRestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| SocialRestError::BadRequest(format!("unknown action: {s}")))
    }
}

/// Login, every other action in button order, then logout.
pub fn demo_tour() -> Vec<Action> {
    let mut tour = vec![Action::Login];
    tour.extend(
        Action::ALL
            .into_iter()
            .filter(|a| !matches!(a, Action::Login | Action::Logout)),
    );
    tour.push(Action::Logout);
    tour
}
