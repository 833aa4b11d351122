use std::rc::Rc;

use gloo_storage::{LocalStorage, Storage};
use parlor_client::{
    api::{Action, Comment, CommentId, PostId, ThreadResponse, Uuid},
    ThreadDump,
};
use yew::prelude::*;

use crate::{api, ui, util, SessionInfo};

const KEY_SESSION: &str = "session";

pub enum AppMsg {
    ReceivedThread(ThreadResponse),
    FetchFailed(String),
    ThreadAction(Action),
}

/// Shell around one post's comment thread. It owns the shared thread state;
/// comment nodes below it only signal [`Action`]s back up through the
/// callbacks handed to them.
pub struct App {
    session: Option<SessionInfo>,
    post_id: Option<PostId>,
    thread: Option<Rc<ThreadDump>>,
    fetch_error: Option<String>,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let session: Option<SessionInfo> = LocalStorage::get(KEY_SESSION).ok();
        let post_id = post_id_from_url();
        if let (Some(session), Some(post_id)) = (session.clone(), post_id) {
            ctx.link().send_future(async move {
                match api::fetch_thread(&session, post_id).await {
                    Ok(thread) => AppMsg::ReceivedThread(thread),
                    Err(e) => {
                        tracing::error!(?e, "failed fetching thread");
                        AppMsg::FetchFailed(format!("{:#}", e))
                    }
                }
            });
        }
        App {
            session,
            post_id,
            thread: None,
            fetch_error: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::ReceivedThread(t) => {
                let viewer = self
                    .session
                    .as_ref()
                    .expect("received a thread without a session")
                    .viewer
                    .id;
                self.thread = Some(Rc::new(ThreadDump::new(viewer, t)));
            }
            AppMsg::FetchFailed(e) => self.fetch_error = Some(e),
            AppMsg::ThreadAction(a) => match &mut self.thread {
                None => tracing::warn!(action = ?a, "got thread action before the thread loaded"),
                Some(thread) => Rc::make_mut(thread).apply(a),
            },
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let session = match &self.session {
            None => return banner("Not signed in. Log into the feed to read this thread."),
            Some(s) => s.clone(),
        };
        if self.post_id.is_none() {
            return banner("No post selected.");
        }
        if let Some(e) = &self.fetch_error {
            return html! {
                <div class="alert alert-danger m-3" role="alert">
                    { format!("Failed loading the thread: {}", e) }
                </div>
            };
        }
        let thread = match &self.thread {
            None => {
                return html! {
                    <div class="d-flex align-items-center m-3">
                        <div class="spinner-border spinner-border-sm me-2" role="status"></div>
                        <div>{ "Loading..." }</div>
                    </div>
                }
            }
            Some(t) => t.clone(),
        };

        let post = thread.post.clone();
        let on_update = ctx
            .link()
            .callback(|c: Comment| AppMsg::ThreadAction(Action::SetComment(c)));
        let on_delete = ctx
            .link()
            .callback(|id: CommentId| AppMsg::ThreadAction(Action::DeleteComment(id)));
        html! {
            <div class="container my-4">
                <div class="card mb-4">
                    <div class="card-body">
                        <div class="d-flex align-items-center mb-2">
                            <ui::Avatar author={post.author.clone()} />
                            <a class="ms-2 fw-bold" href={util::author_profile_link(&post.author)}>
                                { post.author.display_name() }
                            </a>
                            { for post.author.verified.then(|| html! { <ui::VerifiedBadge /> }) }
                            <span class="text-muted ms-2" title={util::localized_timestamp(&post.created_at)}>
                                { util::relative_time(&post.created_at, &chrono::Utc::now()) }
                            </span>
                        </div>
                        <p class="card-text">{ &post.content }</p>
                    </div>
                </div>
                <h5 class="mb-3">{ format!("{} comments", thread.comment_count()) }</h5>
                <ui::CommentThread
                    {thread}
                    {session}
                    {on_update}
                    {on_delete}
                />
            </div>
        }
    }
}

fn banner(msg: &str) -> Html {
    html! {
        <div class="alert alert-secondary m-3" role="alert">{ msg }</div>
    }
}

fn post_id_from_url() -> Option<PostId> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    let post = params.get("post")?;
    Uuid::parse_str(&post).ok().map(PostId)
}
