use axum::extract::{Path, State};
use axum::{Extension, Json};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use steady_core::models::forum::{Comment, ForumPost, Like, MeetingDetails, PostKind};
use steady_core::models::points::reason;
use steady_core::storage_keys;
use steady_storage::{objects, rows};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::routes::points::award_daily;
use crate::state::AppState;

#[derive(Serialize)]
pub struct PostView {
    #[serde(flatten)]
    pub post: ForumPost,
    pub likes: usize,
    /// Whether the requesting user has liked this post.
    pub liked: bool,
}

async fn likes_for(state: &AppState, post_id: Uuid) -> Result<Vec<Like>, ApiError> {
    let prefix = storage_keys::forum_likes_prefix(post_id);
    Ok(rows::list_rows(&state.s3, &state.bucket, &prefix).await?)
}

pub async fn list_posts(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<PostView>>, ApiError> {
    let mut posts: Vec<ForumPost> =
        rows::list_rows(&state.s3, &state.bucket, storage_keys::FORUM_POSTS_PREFIX).await?;
    posts.retain(|p| !p.deleted);
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let mut views = Vec::with_capacity(posts.len());
    for post in posts {
        let likes = likes_for(&state, post.id).await?;
        let liked = likes.iter().any(|l| l.user_id == user.sub);
        views.push(PostView {
            post,
            likes: likes.len(),
            liked,
        });
    }
    Ok(Json(views))
}

#[derive(Deserialize)]
pub struct CreatePost {
    pub kind: PostKind,
    pub title: String,
    pub body: String,
    pub meeting: Option<MeetingDetails>,
}

#[derive(Serialize)]
pub struct CreatedPost {
    #[serde(flatten)]
    pub post: ForumPost,
    pub points_awarded: bool,
}

pub async fn create_post(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(input): Json<CreatePost>,
) -> Result<Json<CreatedPost>, ApiError> {
    let title = input.title.trim();
    let body = input.body.trim();
    if title.is_empty() || body.is_empty() {
        return Err(ApiError::BadRequest(
            "title and body are required".to_string(),
        ));
    }
    // Meeting announcements carry where/when; other kinds must not.
    let meeting = match (input.kind, input.meeting) {
        (PostKind::Meeting, Some(m)) => Some(m),
        (PostKind::Meeting, None) => {
            return Err(ApiError::BadRequest(
                "meeting posts require meeting details".to_string(),
            ));
        }
        (_, _) => None,
    };

    let now = Timestamp::now();
    let post = ForumPost {
        id: Uuid::new_v4(),
        user_id: user.sub.clone(),
        kind: input.kind,
        title: title.to_string(),
        body: body.to_string(),
        meeting,
        deleted: false,
        created_at: now,
    };

    let key = storage_keys::forum_post(post.id);
    rows::save_row(&state.s3, &state.bucket, &key, &post).await?;

    let points_awarded =
        award_daily(&state, &user.sub, reason::FORUM_POST, now, None, None).await?;

    Ok(Json(CreatedPost {
        post,
        points_awarded,
    }))
}

/// Soft delete: the row stays for comment/like referential integrity but
/// disappears from listings.
pub async fn delete_post(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, ApiError> {
    let key = storage_keys::forum_post(id);
    let (mut post, etag): (ForumPost, String) =
        rows::load_row(&state.s3, &state.bucket, &key).await?;

    if post.user_id != user.sub {
        return Err(ApiError::Unauthorized(
            "only the author can delete a post".to_string(),
        ));
    }
    if !post.deleted {
        post.deleted = true;
        rows::save_row_if_match(&state.s3, &state.bucket, &key, &post, &etag).await?;
    }
    Ok(Json(()))
}

#[derive(Serialize)]
pub struct LikeState {
    pub likes: usize,
    pub liked: bool,
}

/// Idempotent: the like row is keyed by (post, user), so repeating the
/// request rewrites the same object.
pub async fn like_post(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<LikeState>, ApiError> {
    // 404 for likes against unknown or deleted posts.
    let (post, _): (ForumPost, String) =
        rows::load_row(&state.s3, &state.bucket, &storage_keys::forum_post(id)).await?;
    if post.deleted {
        return Err(ApiError::NotFound("post not found".to_string()));
    }

    let like = Like {
        post_id: id,
        user_id: user.sub.clone(),
        created_at: Timestamp::now(),
    };
    let key = storage_keys::forum_like(id, &user.sub);
    rows::save_row(&state.s3, &state.bucket, &key, &like).await?;

    let likes = likes_for(&state, id).await?;
    Ok(Json(LikeState {
        likes: likes.len(),
        liked: true,
    }))
}

pub async fn unlike_post(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<LikeState>, ApiError> {
    // Deleting an absent like row is a no-op, so this is idempotent too.
    let key = storage_keys::forum_like(id, &user.sub);
    objects::delete_object(&state.s3, &state.bucket, &key).await?;

    let likes = likes_for(&state, id).await?;
    Ok(Json(LikeState {
        likes: likes.len(),
        liked: false,
    }))
}

pub async fn list_comments(
    State(state): State<AppState>,
    Extension(_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    let prefix = storage_keys::forum_comments_prefix(id);
    let mut comments: Vec<Comment> = rows::list_rows(&state.s3, &state.bucket, &prefix).await?;
    comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    Ok(Json(comments))
}

#[derive(Deserialize)]
pub struct CreateComment {
    pub body: String,
    pub parent_id: Option<Uuid>,
}

pub async fn create_comment(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(input): Json<CreateComment>,
) -> Result<Json<Comment>, ApiError> {
    let body = input.body.trim();
    if body.is_empty() {
        return Err(ApiError::BadRequest("body is required".to_string()));
    }

    let (post, _): (ForumPost, String) =
        rows::load_row(&state.s3, &state.bucket, &storage_keys::forum_post(id)).await?;
    if post.deleted {
        return Err(ApiError::NotFound("post not found".to_string()));
    }

    // A reply's parent must be a comment on the same post.
    if let Some(parent_id) = input.parent_id {
        let parent_key = storage_keys::forum_comment(id, parent_id);
        let _: (Comment, String) = rows::load_row(&state.s3, &state.bucket, &parent_key)
            .await
            .map_err(|_| ApiError::BadRequest("parent comment not found".to_string()))?;
    }

    let comment = Comment {
        id: Uuid::new_v4(),
        post_id: id,
        user_id: user.sub.clone(),
        parent_id: input.parent_id,
        body: body.to_string(),
        created_at: Timestamp::now(),
    };

    let key = storage_keys::forum_comment(id, comment.id);
    rows::save_row(&state.s3, &state.bucket, &key, &comment).await?;
    Ok(Json(comment))
}
