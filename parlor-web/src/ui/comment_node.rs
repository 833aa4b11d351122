use parlor_client::api::{Author, Comment, CommentId};
use yew::prelude::*;

use crate::{api, ui, util, SessionInfo};

#[derive(Clone, PartialEq, Properties)]
pub struct CommentNodeProps {
    pub comment: Comment,
    pub session: SessionInfo,

    /// Replace this comment in the thread state with the server-returned
    /// representation
    pub on_update: Callback<Comment>,

    /// Remove this comment from the thread state
    pub on_delete: Callback<CommentId>,
}

/// Action-menu state. A single enum instead of one flag for the trigger and
/// one for the overlay, so "overlay open while the trigger is inactive" is
/// not representable.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuState {
    Closed,
    /// Trigger active but the overlay was dismissed by a focus loss
    Armed,
    Open,
}

impl MenuState {
    pub fn after_trigger_click(self) -> MenuState {
        match self {
            MenuState::Open => MenuState::Armed,
            MenuState::Closed | MenuState::Armed => MenuState::Open,
        }
    }

    pub fn after_item_click(self) -> MenuState {
        MenuState::Closed
    }

    pub fn after_focus_loss(self) -> MenuState {
        match self {
            MenuState::Open => MenuState::Armed,
            other => other,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum EditState {
    Viewing,
    /// The draft buffer is separate from the committed content: typing only
    /// ever touches the draft
    Editing { draft: String },
}

/// Likes are a client-side placeholder: the displayed count is the server
/// count plus the viewer's local toggle, and nothing is persisted.
fn displayed_likes(num_likes: i64, liked: bool) -> i64 {
    num_likes + liked as i64
}

pub enum CommentNodeMsg {
    MenuTriggerClicked,
    MenuFocusLost,
    EditRequested,
    DeleteRequested,
    DraftEdited(String),
    EditSubmitted,
    EditSaved(Comment),
    EditFailed,
    LikeToggled,
    ReplyToggled,
    ReplySubmitted(String),
}

/// One comment with its subtree: author line, dateline, body, author-gated
/// action menu, like/reply affordances, and a recursive render of the
/// children. Children get the same callbacks, so nested comments can edit
/// and delete themselves too.
pub struct CommentNode {
    menu: MenuState,
    edit: EditState,
    /// A PATCH is in flight; further submits are ignored until it settles
    submitting: bool,
    liked: bool,
    show_reply: bool,
    /// Mocked replies only this view knows about, rendered after the
    /// children from props; nothing is sent to the server
    local_replies: Vec<Comment>,
}

impl Component for CommentNode {
    type Message = CommentNodeMsg;
    type Properties = CommentNodeProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CommentNode {
            menu: MenuState::Closed,
            edit: EditState::Viewing,
            submitting: false,
            liked: false,
            show_reply: false,
            local_replies: Vec::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let comment = &ctx.props().comment;
        let viewer = &ctx.props().session.viewer;
        match msg {
            CommentNodeMsg::MenuTriggerClicked => self.menu = self.menu.after_trigger_click(),
            CommentNodeMsg::MenuFocusLost => self.menu = self.menu.after_focus_loss(),
            CommentNodeMsg::EditRequested => {
                self.menu = self.menu.after_item_click();
                if comment.editable_by(&viewer.id) {
                    self.edit = EditState::Editing {
                        draft: comment.content.clone(),
                    };
                }
            }
            CommentNodeMsg::DeleteRequested => {
                self.menu = self.menu.after_item_click();
                ctx.props().on_delete.emit(comment.id);
            }
            CommentNodeMsg::DraftEdited(text) => {
                if let EditState::Editing { draft } = &mut self.edit {
                    *draft = text;
                }
            }
            CommentNodeMsg::EditSubmitted => {
                let draft = match &self.edit {
                    EditState::Editing { draft } => draft.clone(),
                    EditState::Viewing => return false,
                };
                if self.submitting || !comment.editable_by(&viewer.id) {
                    return false;
                }
                self.submitting = true;
                let session = ctx.props().session.clone();
                let post_id = comment.post_id;
                let comment_id = comment.id;
                ctx.link().send_future(async move {
                    match api::update_comment(&session, post_id, comment_id, draft).await {
                        Ok(updated) => CommentNodeMsg::EditSaved(updated),
                        Err(e) => {
                            tracing::error!(?e, "failed updating comment");
                            CommentNodeMsg::EditFailed
                        }
                    }
                });
            }
            CommentNodeMsg::EditSaved(updated) => {
                self.submitting = false;
                self.edit = EditState::Viewing;
                ctx.props().on_update.emit(updated);
            }
            CommentNodeMsg::EditFailed => {
                // the draft is dropped and the committed content stays the
                // source of truth; the parent callback is never invoked
                self.submitting = false;
                self.edit = EditState::Viewing;
            }
            CommentNodeMsg::LikeToggled => self.liked = !self.liked,
            CommentNodeMsg::ReplyToggled => self.show_reply = !self.show_reply,
            CommentNodeMsg::ReplySubmitted(content) => {
                self.local_replies.push(Comment {
                    id: CommentId::stub(),
                    post_id: comment.post_id,
                    author: Author::guest(),
                    content,
                    created_at: chrono::Utc::now(),
                    edited: false,
                    num_likes: 0,
                    children: Vec::new(),
                });
                self.show_reply = false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let p = ctx.props();
        let comment = &p.comment;
        let editable = comment.editable_by(&p.session.viewer.id);
        let author_link = util::author_profile_link(&comment.author);

        let content = match (&self.edit, editable) {
            (EditState::Editing { draft }, true) => self.edit_form(ctx, draft),
            _ => body_html(&comment.content),
        };

        let children = comment.children.iter().map(|c| {
            html! {
                <ui::CommentNode
                    key={c.id.0.to_string()}
                    comment={c.clone()}
                    session={p.session.clone()}
                    on_update={p.on_update.clone()}
                    on_delete={p.on_delete.clone()}
                />
            }
        });
        let local_replies = self.local_replies.iter().enumerate().map(|(i, c)| {
            html! {
                <ui::CommentNode
                    key={format!("local-reply-{}", i)}
                    comment={c.clone()}
                    session={p.session.clone()}
                    on_update={p.on_update.clone()}
                    on_delete={p.on_delete.clone()}
                />
            }
        });

        html! {
            <div class="comment d-flex mb-3">
                <a href={author_link.clone()}>
                    <ui::Avatar author={comment.author.clone()} />
                </a>
                <div class="ms-2 flex-fill">
                    <div class="comment-bubble position-relative rounded p-2">
                        <div>
                            <a class="fw-bold" href={author_link}>
                                { comment.author.display_name() }
                            </a>
                            { for comment.author.verified.then(|| html! { <ui::VerifiedBadge /> }) }
                            <span
                                class="comment-dateline text-muted ms-2"
                                title={ util::localized_timestamp(&comment.created_at) }
                            >
                                { util::relative_time(&comment.created_at, &chrono::Utc::now()) }
                                { for comment.edited.then(|| String::from(" · edited")) }
                            </span>
                        </div>
                        { for editable.then(|| self.action_menu(ctx)) }
                        { content }
                    </div>
                    <div class="comment-actions small">
                        { self.like_control(ctx) }
                        { self.reply_toggle(ctx) }
                        <span class="text-muted ms-2">
                            { format!("{} replies", comment.children.len() + self.local_replies.len()) }
                        </span>
                    </div>
                    { for self.show_reply.then(|| self.reply_input(ctx)) }
                    <div class="comment-children mt-2 ps-4 border-start">
                        { for children }
                        { for local_replies }
                    </div>
                </div>
            </div>
        }
    }
}

impl CommentNode {
    fn action_menu(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let dropdown = self.menu.is_open().then(|| {
            html! {
                <ul class="dropdown-menu show position-absolute end-0">
                    <li>
                        <a
                            class="dropdown-item"
                            href="#"
                            onclick={link.callback(|_| CommentNodeMsg::EditRequested)}
                        >
                            { "Edit" }
                        </a>
                    </li>
                    <li>
                        <a
                            class="dropdown-item"
                            href="#"
                            onclick={link.callback(|_| CommentNodeMsg::DeleteRequested)}
                        >
                            { "Delete" }
                        </a>
                    </li>
                </ul>
            }
        });
        html! {
            <div
                class="comment-menu dropdown position-absolute top-0 end-0 m-1"
                onfocusout={link.callback(|_| CommentNodeMsg::MenuFocusLost)}
            >
                <button
                    type="button"
                    class="btn btn-sm bi-btn bi-three-dots"
                    aria-label="Comment actions"
                    onclick={link.callback(|_| CommentNodeMsg::MenuTriggerClicked)}
                >
                </button>
                { for dropdown }
            </div>
        }
    }

    fn edit_form(&self, ctx: &Context<Self>, draft: &str) -> Html {
        let link = ctx.link();
        let onchange = link.callback(|e: web_sys::Event| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            CommentNodeMsg::DraftEdited(input.value())
        });
        let spinner = self.submitting.then(|| {
            html! {
                <span class="spinner-border spinner-border-sm ms-2" role="status" aria-hidden="true"></span>
            }
        });
        html! {
            <div class="comment-edit mt-1">
                <textarea
                    class="form-control"
                    rows="2"
                    value={draft.to_string()}
                    {onchange}
                />
                <div class="mt-1">
                    <button
                        type="button"
                        class="btn btn-sm btn-outline-primary"
                        disabled={self.submitting}
                        onclick={link.callback(|_| CommentNodeMsg::EditSubmitted)}
                    >
                        { "Save" }
                    </button>
                    { for spinner }
                </div>
            </div>
        }
    }

    fn like_control(&self, ctx: &Context<Self>) -> Html {
        let comment = &ctx.props().comment;
        let class = match self.liked {
            true => "comment-like fw-bold",
            false => "comment-like",
        };
        html! {
            <>
                <a
                    {class}
                    href="#"
                    onclick={ctx.link().callback(|_| CommentNodeMsg::LikeToggled)}
                >
                    { "Like" }
                </a>
                <span class="text-muted ms-1">
                    { displayed_likes(comment.num_likes, self.liked) }
                </span>
            </>
        }
    }

    fn reply_toggle(&self, ctx: &Context<Self>) -> Html {
        let class = match self.show_reply {
            true => "comment-reply fw-bold ms-2",
            false => "comment-reply ms-2",
        };
        html! {
            <a
                {class}
                href="#"
                onclick={ctx.link().callback(|_| CommentNodeMsg::ReplyToggled)}
            >
                { "Reply" }
            </a>
        }
    }

    fn reply_input(&self, ctx: &Context<Self>) -> Html {
        let onkeydown = ctx.link().batch_callback(|e: web_sys::KeyboardEvent| {
            match &e.key() as &str {
                "Enter" => {
                    let elt: web_sys::HtmlInputElement = e.target_unchecked_into();
                    let text = elt.value();
                    elt.set_value("");
                    let _ = elt.blur();
                    Some(CommentNodeMsg::ReplySubmitted(text))
                }
                "Escape" => {
                    let elt: web_sys::HtmlInputElement = e.target_unchecked_into();
                    let _ = elt.blur();
                    Some(CommentNodeMsg::ReplyToggled)
                }
                _ => None,
            }
        });
        html! {
            <div class="comment-reply-input mt-1">
                <input
                    type="text"
                    class="form-control form-control-sm"
                    placeholder="Write a reply..."
                    aria-label="Write a reply"
                    {onkeydown}
                />
            </div>
        }
    }
}

fn body_html(content: &str) -> Html {
    html! {
        <p class="comment-body mb-1">
            { for util::linkify(content).into_iter().map(|span| match span {
                util::TextSpan::Plain(text) => html! { <>{ text }</> },
                util::TextSpan::Link(url) => html! {
                    <a href={url.clone()} target="_blank" rel="noopener noreferrer">{ url }</a>
                },
            }) }
        </p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_states_cover_the_original_flag_pairs() {
        // trigger click opens from anywhere but the open state
        assert_eq!(MenuState::Closed.after_trigger_click(), MenuState::Open);
        assert_eq!(MenuState::Armed.after_trigger_click(), MenuState::Open);
        assert_eq!(MenuState::Open.after_trigger_click(), MenuState::Armed);
        // choosing an item closes everything
        assert_eq!(MenuState::Open.after_item_click(), MenuState::Closed);
        assert_eq!(MenuState::Armed.after_item_click(), MenuState::Closed);
        // focus loss only dismisses the overlay
        assert_eq!(MenuState::Open.after_focus_loss(), MenuState::Armed);
        assert_eq!(MenuState::Armed.after_focus_loss(), MenuState::Armed);
        assert_eq!(MenuState::Closed.after_focus_loss(), MenuState::Closed);
        assert!(MenuState::Open.is_open());
        assert!(!MenuState::Armed.is_open());
    }

    #[test]
    fn like_count_parity() {
        // toggling an even number of times restores the original count
        let mut liked = false;
        let base = 7;
        for _ in 0..4 {
            liked = !liked;
        }
        assert_eq!(displayed_likes(base, liked), base);
        // each single toggle moves the count by exactly one
        liked = !liked;
        assert_eq!(displayed_likes(base, liked), base + 1);
        liked = !liked;
        assert_eq!(displayed_likes(base, liked), base);
    }
}
