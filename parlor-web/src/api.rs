use parlor_client::api::{self, Comment, CommentId, PostId, ThreadResponse, UpdateComment};

use crate::SessionInfo;

pub async fn fetch_thread(
    session: &SessionInfo,
    post: PostId,
) -> anyhow::Result<ThreadResponse> {
    Ok(crate::CLIENT
        .get(format!("{}/api/posts/{}/thread", session.host, post.0))
        .bearer_auth(session.token.0)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?)
}

/// The one remote mutation of the whole view: PATCH the comment's content
/// and get the updated representation back.
pub async fn update_comment(
    session: &SessionInfo,
    post: PostId,
    comment: CommentId,
    content: String,
) -> anyhow::Result<Comment> {
    let body = UpdateComment { content };
    body.validate()?;
    let resp = crate::CLIENT
        .patch(format!(
            "{}/api/posts/{}/comments/{}",
            session.host, post.0, comment.0
        ))
        .bearer_auth(session.token.0)
        .json(&body)
        .send()
        .await?;
    if !resp.status().is_success() {
        let body = resp.bytes().await?;
        let err = api::Error::parse(&body)
            .unwrap_or_else(|_| api::Error::Unknown(String::from("unparseable error response")));
        return Err(err.into());
    }
    Ok(resp.json().await?)
}
